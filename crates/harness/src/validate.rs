//! Response validation: parse, extract `answer`, compare exactly.

use serde_json::{Map, Value};

use crate::error::HarnessError;
use crate::problem::ProblemInstance;

/// Field of the solver response that carries the classification label.
pub const ANSWER_FIELD: &str = "answer";

/// Outcome of checking one response against its expected answer.
#[derive(Debug)]
pub enum Verdict {
    Pass,
    Fail(HarnessError),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn into_result(self) -> Result<(), HarnessError> {
        match self {
            Verdict::Pass => Ok(()),
            Verdict::Fail(e) => Err(e),
        }
    }
}

/// Check a raw response body against the expected classification.
///
/// The comparison is exact and case-sensitive. The expected answer is
/// treated as an opaque string.
pub fn validate(body: &str, expected: &str, problem: &ProblemInstance) -> Verdict {
    match check(body, expected, problem) {
        Ok(()) => Verdict::Pass,
        Err(e) => Verdict::Fail(e),
    }
}

fn check(body: &str, expected: &str, problem: &ProblemInstance) -> Result<(), HarnessError> {
    let doc: Value =
        serde_json::from_str(body).map_err(|e| HarnessError::MalformedResponse {
            problem: problem.clone(),
            message: e.to_string(),
        })?;

    let response: Map<String, Value> = match doc {
        Value::Object(map) => map,
        other => {
            return Err(HarnessError::UnexpectedShape {
                problem: problem.clone(),
                found: json_type_name(&other),
            })
        }
    };

    let actual = match response.get(ANSWER_FIELD) {
        None | Some(Value::Null) => {
            return Err(HarnessError::MissingField {
                problem: problem.clone(),
                field: ANSWER_FIELD.to_string(),
            })
        }
        Some(value) => answer_text(value),
    };

    if actual != expected {
        return Err(HarnessError::AnswerMismatch {
            problem: problem.clone(),
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}

/// Strings compare by content; any other JSON value by its compact text.
fn answer_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
