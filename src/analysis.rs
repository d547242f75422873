use plateload::{InputError, TestInputs, TestOutcome};
use serde::Serialize;

/// Summary of one plate-load test, ready for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    /// Inputs that generated the result, exposed for reporting.
    pub inputs: TestInputs,
    /// Deformation, modulus and verdict.
    pub outcome: TestOutcome,
}

/// Validate the inputs (unless `validate` is false) and run the test.
///
/// The modulus follows the rigid-plate solution for an elastic half-space,
/// see <https://en.wikipedia.org/wiki/Plate_load_test>.
pub fn run_analysis(inputs: &TestInputs, validate: bool) -> Result<AnalysisSummary, InputError> {
    if validate {
        inputs.validate()?;
    }

    Ok(AnalysisSummary {
        inputs: *inputs,
        outcome: inputs.run(),
    })
}
