//! Fail-fast test runner.
//!
//! Runs every case in table order through encode → post → validate and
//! stops at the first failure. Later cases are never dispatched after a
//! failure; a single clear failure signal is preferred over a full report.

use crate::cases::TestCase;
use crate::error::HarnessError;
use crate::transport::Transport;
use crate::validate::validate;

/// Where a runner is in its lifecycle.
///
/// `Idle → Running(i) → {Running(i+1) | Failed | AllPassed}`. `Failed` and
/// `AllPassed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running(usize),
    Failed,
    AllPassed,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Failed | RunState::AllPassed)
    }
}

/// Summary of a fully passing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub url: String,
    pub passed: usize,
}

pub struct Runner<T> {
    transport: T,
    url: String,
    cases: Vec<TestCase>,
    state: RunState,
}

impl<T: Transport> Runner<T> {
    pub fn new(transport: T, url: impl Into<String>, cases: Vec<TestCase>) -> Self {
        Runner {
            transport,
            url: url.into(),
            cases,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Run all cases, stopping at the first failure.
    ///
    /// A runner only dispatches once. Calling `run` again after it reached a
    /// terminal state sends nothing: a passed runner returns its report
    /// again, a failed one returns [`HarnessError::AlreadyFinished`].
    pub fn run(&mut self) -> Result<RunReport, HarnessError> {
        match self.state {
            RunState::AllPassed => return Ok(self.report()),
            RunState::Failed => return Err(HarnessError::AlreadyFinished),
            RunState::Idle | RunState::Running(_) => {}
        }

        for index in 0..self.cases.len() {
            self.state = RunState::Running(index);
            if let Err(e) = self.run_case(index) {
                tracing::warn!(index, error = %e, "case failed, aborting run");
                self.state = RunState::Failed;
                return Err(e);
            }
        }

        self.state = RunState::AllPassed;
        Ok(self.report())
    }

    fn run_case(&self, index: usize) -> Result<(), HarnessError> {
        let case = &self.cases[index];
        tracing::debug!(index, problem = %case.problem, expected = %case.expected, "dispatching case");

        let payload = case.problem.encode();
        let response = self
            .transport
            .post_json(&self.url, &payload)
            .map_err(|source| HarnessError::Transport {
                problem: case.problem.clone(),
                source,
            })?;

        validate(&response.body, &case.expected, &case.problem).into_result()?;
        tracing::info!(index, problem = %case.problem, answer = %case.expected, "case passed");
        Ok(())
    }

    fn report(&self) -> RunReport {
        RunReport {
            url: self.url.clone(),
            passed: self.cases.len(),
        }
    }
}
