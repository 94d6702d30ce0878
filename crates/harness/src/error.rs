use crate::problem::ProblemInstance;

/// Everything that can end a harness run.
///
/// Each variant names the problem instance that was in flight so a failing
/// run can be diagnosed from the message alone.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Connection failure, non-success status, or unreadable body.
    #[error("request for problem {problem} failed: {source}")]
    Transport {
        problem: ProblemInstance,
        #[source]
        source: TransportError,
    },

    /// The response body is not valid JSON.
    #[error("malformed response for problem {problem}: {message}")]
    MalformedResponse {
        problem: ProblemInstance,
        message: String,
    },

    /// The response parsed, but is not a JSON object.
    #[error("unexpected response shape for problem {problem}: expected an object, found {found}")]
    UnexpectedShape {
        problem: ProblemInstance,
        found: &'static str,
    },

    /// The response object has no usable value for the answer field.
    #[error("response for problem {problem} is missing field '{field}'")]
    MissingField {
        problem: ProblemInstance,
        field: String,
    },

    /// The solver answered, but with the wrong classification.
    #[error("answer mismatch for problem {problem}: expected '{expected}', got '{actual}'")]
    AnswerMismatch {
        problem: ProblemInstance,
        expected: String,
        actual: String,
    },

    /// `run` was called again on a runner that already failed.
    #[error("runner already finished with a failure")]
    AlreadyFinished,
}

impl HarnessError {
    /// The problem instance this error is about, if any.
    pub fn problem(&self) -> Option<&ProblemInstance> {
        match self {
            HarnessError::Transport { problem, .. }
            | HarnessError::MalformedResponse { problem, .. }
            | HarnessError::UnexpectedShape { problem, .. }
            | HarnessError::MissingField { problem, .. }
            | HarnessError::AnswerMismatch { problem, .. } => Some(problem),
            HarnessError::AlreadyFinished => None,
        }
    }
}

/// Failures of a single HTTP exchange, before the body is looked at.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("could not reach {url}: {message}")]
    Connection { url: String, message: String },

    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("response body from {url} is not readable text: {message}")]
    Body { url: String, message: String },
}
