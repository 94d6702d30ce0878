use std::process;

use clap::Parser;
use oracle_harness::{
    deutsch_cases, HarnessConfig, HttpTransport, Runner, DEFAULT_BASE_URL, DEFAULT_ENDPOINT,
};

/// Conformance check for a Deutsch oracle classification solver endpoint.
#[derive(Parser)]
#[command(
    name = "oracle-harness",
    version,
    about = "Conformance check for a Deutsch oracle classification solver endpoint"
)]
struct Cli {
    /// Base of the URL where the solver is running
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    baseurl: String,

    /// Endpoint for the Deutsch solver
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Print the cases and target URL without sending any request
    #[arg(long)]
    list: bool,

    /// Suppress the success line
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let cli = Cli::parse();
    let config = HarnessConfig::new(cli.baseurl, cli.endpoint);

    let runner = Runner::new(HttpTransport::new(), config.target_url(), deutsch_cases());

    if cli.list {
        cmd_list(&runner);
        return;
    }
    cmd_run(runner, cli.quiet);
}

fn cmd_list(runner: &Runner<HttpTransport>) {
    println!("target: {}", runner.url());
    for (i, case) in runner.cases().iter().enumerate() {
        println!("{} {} -> {}", i + 1, case.problem, case.expected);
    }
}

fn cmd_run(mut runner: Runner<HttpTransport>, quiet: bool) {
    tracing::info!(url = runner.url(), "starting conformance run");

    match runner.run() {
        Ok(report) => {
            tracing::info!(passed = report.passed, url = %report.url, "run complete");
            if !quiet {
                println!("All tests passed");
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
