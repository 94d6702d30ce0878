//! Conformance harness for oracle classification solvers.
//!
//! Drives a remote solver endpoint with a fixed table of problem instances
//! whose classification is known in advance, and checks each JSON response
//! against that expectation. The first failing case aborts the run.
//!
//! Pipeline per case: [`ProblemInstance::encode`] → [`Transport::post_json`]
//! → [`validate`], orchestrated by [`Runner`].

pub mod cases;
pub mod config;
pub mod error;
pub mod problem;
pub mod runner;
pub mod transport;
pub mod validate;

pub use cases::{deutsch_cases, TestCase};
pub use config::{HarnessConfig, DEFAULT_BASE_URL, DEFAULT_ENDPOINT};
pub use error::{HarnessError, TransportError};
pub use problem::ProblemInstance;
pub use runner::{RunReport, RunState, Runner};
pub use transport::{HttpTransport, Transport, TransportResponse};
pub use validate::{validate, Verdict, ANSWER_FIELD};
