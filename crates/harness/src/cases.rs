//! The fixed case table.

use crate::problem::ProblemInstance;

/// A problem instance paired with the classification a correct solver must
/// return for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub problem: ProblemInstance,
    pub expected: String,
}

impl TestCase {
    pub fn new(problem: impl Into<ProblemInstance>, expected: impl Into<String>) -> Self {
        TestCase {
            problem: problem.into(),
            expected: expected.into(),
        }
    }
}

/// Deutsch problem: `[f(false), f(true)]` → classification of `f`.
const DEUTSCH_TABLE: &[(&[bool], &str)] = &[
    (&[true, true], "constant"),
    (&[false, false], "constant"),
    (&[true, false], "balanced"),
    (&[false, true], "balanced"),
];

/// The four Deutsch cases, in dispatch order.
pub fn deutsch_cases() -> Vec<TestCase> {
    DEUTSCH_TABLE
        .iter()
        .map(|(inputs, expected)| TestCase::new(*inputs, *expected))
        .collect()
}
