//! Classification of a measured modulus.
//!
//! With a required modulus the result is a pass/fail comparison; without one the
//! modulus is placed on the absolute Low / Medium / Good scale.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Moduli below this value (MPa) are classified as [`EvaluationStatus::Low`].
pub const LOW_MODULUS_THRESHOLD: f64 = 50.0;

/// Moduli at or above this value (MPa) are classified as [`EvaluationStatus::Good`].
pub const GOOD_MODULUS_THRESHOLD: f64 = 200.0;

/// Overall verdict for a measured modulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    /// No modulus could be computed.
    Undetermined,
    /// The modulus reaches the required value.
    MeetsRequirement,
    /// The modulus falls short of the required value.
    DoesNotMeetRequirement,
    /// Below 50 MPa.
    Low,
    /// From 50 MPa up to, but excluding, 200 MPa.
    Medium,
    /// 200 MPa or more.
    Good,
}

impl EvaluationStatus {
    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            EvaluationStatus::Undetermined => "Undetermined",
            EvaluationStatus::MeetsRequirement => "Meets requirement",
            EvaluationStatus::DoesNotMeetRequirement => "Does not meet requirement",
            EvaluationStatus::Low => "Low",
            EvaluationStatus::Medium => "Medium",
            EvaluationStatus::Good => "Good",
        }
    }

    /// Whether the layer can be accepted as tested.
    #[must_use]
    pub const fn is_satisfactory(self) -> bool {
        matches!(
            self,
            EvaluationStatus::MeetsRequirement | EvaluationStatus::Medium | EvaluationStatus::Good
        )
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of comparing the measured modulus with the required one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStatus {
    /// `E >= E_required`.
    Pass,
    /// `E < E_required`.
    Fail,
}

impl fmt::Display for ComparisonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonStatus::Pass => f.write_str("Pass"),
            ComparisonStatus::Fail => f.write_str("Fail"),
        }
    }
}

/// Measured modulus set against the design requirement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Pass when the measured modulus reaches the requirement.
    pub status: ComparisonStatus,
    /// Measured modulus as a percentage of the required modulus.
    pub ratio: f64,
    /// Measured modulus in MPa.
    pub measured: f64,
    /// Required modulus in MPa.
    pub required: f64,
    /// Narrative explanation of the comparison.
    pub details: String,
}

/// Verdict on a measured modulus.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Overall classification.
    pub status: EvaluationStatus,
    /// Narrative explanation of the classification.
    pub details: String,
    /// The evaluated modulus in MPa, if one was computed.
    pub value: Option<f64>,
    /// Present only when a positive required modulus was supplied.
    pub comparison: Option<ComparisonResult>,
}

/// Classify `modulus`, optionally against `required`.
///
/// A NaN modulus is treated like a missing one. A `required` value that is
/// absent, zero or negative selects the absolute scale. The comparison against a
/// requirement is non-strict, so a modulus equal to the requirement passes.
///
/// # Examples
/// ```
/// use plateload::{evaluate, ComparisonStatus, EvaluationStatus};
///
/// assert_eq!(evaluate(Some(120.0), None).status, EvaluationStatus::Medium);
///
/// let result = evaluate(Some(150.0), Some(200.0));
/// assert_eq!(result.status, EvaluationStatus::DoesNotMeetRequirement);
/// let comparison = result.comparison.expect("requirement supplied");
/// assert_eq!(comparison.status, ComparisonStatus::Fail);
/// assert_eq!(comparison.ratio, 75.0);
/// ```
#[must_use]
pub fn evaluate(modulus: Option<f64>, required: Option<f64>) -> EvaluationResult {
    let Some(measured) = modulus.filter(|modulus| !modulus.is_nan()) else {
        return EvaluationResult {
            status: EvaluationStatus::Undetermined,
            details: "The elastic modulus could not be calculated from the available data."
                .to_owned(),
            value: None,
            comparison: None,
        };
    };

    match required.filter(|required| *required > 0.0) {
        Some(required) => compare_with_requirement(measured, required),
        None => classify_absolute(measured),
    }
}

/// Pass/fail against a positive requirement.
fn compare_with_requirement(measured: f64, required: f64) -> EvaluationResult {
    let ratio = (measured / required) * 100.0;
    let (status, comparison_status, details, comparison_details) = if measured >= required {
        (
            EvaluationStatus::MeetsRequirement,
            ComparisonStatus::Pass,
            format!("Measured elastic modulus meets the design requirement ({required:.2} MPa)."),
            format!(
                "Measured elastic modulus ({measured:.2} MPa) is greater than or equal to the \
                 required modulus ({required:.2} MPa). Achieved {ratio:.1}% of the requirement."
            ),
        )
    } else {
        (
            EvaluationStatus::DoesNotMeetRequirement,
            ComparisonStatus::Fail,
            format!(
                "Measured elastic modulus does not meet the design requirement \
                 ({required:.2} MPa). Review the material or the design."
            ),
            format!(
                "Measured elastic modulus ({measured:.2} MPa) is less than the required modulus \
                 ({required:.2} MPa). Only {ratio:.1}% of the requirement achieved. Review the \
                 material or the design."
            ),
        )
    };

    EvaluationResult {
        status,
        details,
        value: Some(measured),
        comparison: Some(ComparisonResult {
            status: comparison_status,
            ratio,
            measured,
            required,
            details: comparison_details,
        }),
    }
}

/// Position on the absolute Low / Medium / Good scale.
fn classify_absolute(measured: f64) -> EvaluationResult {
    let (status, details) = if measured < LOW_MODULUS_THRESHOLD {
        (
            EvaluationStatus::Low,
            "Elastic modulus is low. Review the material or the design.",
        )
    } else if measured < GOOD_MODULUS_THRESHOLD {
        (
            EvaluationStatus::Medium,
            "Elastic modulus is medium. The material is usable.",
        )
    } else {
        (
            EvaluationStatus::Good,
            "Elastic modulus is good. The material meets the design expectation.",
        )
    };

    EvaluationResult {
        status,
        details: details.to_owned(),
        value: Some(measured),
        comparison: None,
    }
}
