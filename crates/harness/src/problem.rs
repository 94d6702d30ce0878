//! Problem instances and their canonical wire encoding.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// An ordered sequence of boolean inputs sent to a solver endpoint.
///
/// For the Deutsch problem the first entry is `f(false)` and the second is
/// `f(true)`, but nothing here depends on the length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemInstance(Vec<bool>);

impl ProblemInstance {
    pub fn new(inputs: impl Into<Vec<bool>>) -> Self {
        ProblemInstance(inputs.into())
    }

    pub fn inputs(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as a compact JSON array, e.g. `[true,false]`.
    pub fn encode(&self) -> Vec<u8> {
        self.to_json().to_string().into_bytes()
    }

    fn to_json(&self) -> Value {
        Value::from(self.0.clone())
    }
}

impl From<Vec<bool>> for ProblemInstance {
    fn from(inputs: Vec<bool>) -> Self {
        ProblemInstance(inputs)
    }
}

impl From<&[bool]> for ProblemInstance {
    fn from(inputs: &[bool]) -> Self {
        ProblemInstance(inputs.to_vec())
    }
}

impl<const N: usize> From<[bool; N]> for ProblemInstance {
    fn from(inputs: [bool; N]) -> Self {
        ProblemInstance(inputs.to_vec())
    }
}

impl fmt::Display for ProblemInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
