//! A single plate-load test: field inputs in, evaluated modulus out.

use serde::{Deserialize, Serialize};

use crate::deformation::{resolve_deformation, DeformationSource};
use crate::errors::InputError;
use crate::evaluation::{evaluate, EvaluationResult};
use crate::material::MaterialCategory;
use crate::modulus::{
    CalculationBreakdown, MAX_PLATE_DIAMETER_CM, MIN_PLATE_DIAMETER_CM,
    RECOMMENDED_PLATE_DIAMETER_CM,
};

/// Field inputs of one plate-load test.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestInputs {
    /// Category of the tested layer, which fixes Poisson's ratio.
    pub material: MaterialCategory,
    /// Applied pressure `p` in MPa.
    pub pressure: f64,
    /// Plate diameter `D` in centimetres.
    pub plate_diameter: f64,
    /// Recoverable deformation, measured directly or from gauge readings.
    pub deformation: DeformationSource,
    /// Design modulus the layer must reach, in MPa.
    pub required_modulus: Option<f64>,
}

impl Default for TestInputs {
    fn default() -> Self {
        Self {
            material: MaterialCategory::default(),
            pressure: 0.5,
            plate_diameter: RECOMMENDED_PLATE_DIAMETER_CM,
            deformation: DeformationSource::default(),
            required_modulus: None,
        }
    }
}

/// Everything derived from a [`TestInputs`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Poisson's ratio of the tested material.
    pub poisson_ratio: f64,
    /// Resolved recoverable deformation in millimetres.
    pub deformation: f64,
    /// Elastic modulus in MPa, `None` when the deformation is not positive.
    pub elastic_modulus: Option<f64>,
    /// Intermediate values of the modulus calculation.
    pub breakdown: CalculationBreakdown,
    /// Verdict on the modulus.
    pub evaluation: EvaluationResult,
}

impl TestInputs {
    /// Poisson's ratio of the tested material.
    #[must_use]
    pub const fn poisson_ratio(&self) -> f64 {
        self.material.poisson_ratio()
    }

    /// Recoverable deformation `l` in millimetres.
    #[must_use]
    pub fn resolved_deformation(&self) -> f64 {
        resolve_deformation(self.deformation)
    }

    /// Check the inputs against the ranges accepted by the test method.
    ///
    /// [`run`](Self::run) does not call this; it computes whatever the inputs yield.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found, checking pressure, plate diameter,
    /// gauge readings, deformation and required modulus in that order.
    pub fn validate(&self) -> Result<(), InputError> {
        finite("pressure", self.pressure)?;
        if self.pressure < 0.0 {
            return Err(InputError::NegativePressure {
                pressure: self.pressure,
            });
        }

        finite("plate diameter", self.plate_diameter)?;
        if !(MIN_PLATE_DIAMETER_CM..=MAX_PLATE_DIAMETER_CM).contains(&self.plate_diameter) {
            return Err(InputError::PlateDiameterOutOfRange {
                diameter: self.plate_diameter,
            });
        }

        if let DeformationSource::Gauge(readings) = self.deformation {
            for reading in [readings.after_load, readings.after_unload] {
                finite("dial-gauge reading", reading)?;
                if reading < 0.0 {
                    return Err(InputError::NegativeGaugeReading { reading });
                }
            }
        }

        let deformation = self.resolved_deformation();
        finite("deformation", deformation)?;
        if deformation <= 0.0 {
            return Err(InputError::NonPositiveDeformation { deformation });
        }

        if let Some(required) = self.required_modulus {
            finite("required modulus", required)?;
            if required < 0.0 {
                return Err(InputError::NegativeRequiredModulus { required });
            }
        }

        Ok(())
    }

    /// Resolve the deformation, compute the modulus and evaluate it.
    ///
    /// # Examples
    /// ```
    /// use plateload::{EvaluationStatus, TestInputs};
    ///
    /// let outcome = TestInputs::default().run();
    /// assert_eq!(outcome.deformation, 1.0);
    /// assert_eq!(outcome.evaluation.status, EvaluationStatus::Good);
    /// ```
    #[must_use]
    pub fn run(&self) -> TestOutcome {
        let poisson_ratio = self.poisson_ratio();
        let deformation = self.resolved_deformation();
        let breakdown = CalculationBreakdown::new(
            self.pressure,
            self.plate_diameter,
            poisson_ratio,
            deformation,
        );
        let evaluation = evaluate(breakdown.modulus, self.required_modulus);

        TestOutcome {
            poisson_ratio,
            deformation,
            elastic_modulus: breakdown.modulus,
            breakdown,
            evaluation,
        }
    }
}

/// Reject NaN and infinite values.
fn finite(quantity: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::NonFiniteValue { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::deformation::GaugeReadingPair;
    use crate::evaluation::{ComparisonStatus, EvaluationStatus};
    use crate::modulus::calculate_elastic_modulus;

    #[test]
    fn defaults_match_field_form() {
        let inputs = TestInputs::default();
        assert_eq!(inputs.material, MaterialCategory::SubgradeSoil);
        assert_eq!(inputs.pressure, 0.5);
        assert_eq!(inputs.plate_diameter, 76.0);
        assert_eq!(inputs.resolved_deformation(), 1.0);
        assert!(inputs.required_modulus.is_none());
        assert_eq!(inputs.validate(), Ok(()));
    }

    #[test]
    fn run_chains_resolver_calculator_and_evaluator() {
        let inputs = TestInputs {
            material: MaterialCategory::Material,
            deformation: GaugeReadingPair::new(100.0, 50.0).into(),
            required_modulus: Some(300.0),
            ..TestInputs::default()
        };
        let outcome = inputs.run();
        let expected = calculate_elastic_modulus(0.5, 76.0, 0.25, 1.0).unwrap();

        assert_eq!(outcome.poisson_ratio, 0.25);
        assert_eq!(outcome.elastic_modulus, Some(expected));
        assert_eq!(outcome.evaluation.status, EvaluationStatus::DoesNotMeetRequirement);
        let comparison = outcome.evaluation.comparison.expect("comparison present");
        assert_eq!(comparison.status, ComparisonStatus::Fail);
        assert_relative_eq!(comparison.ratio, expected / 3.0, max_relative = 1.0e-12);
    }

    #[test]
    fn zero_requirement_is_treated_as_absent() {
        let inputs = TestInputs {
            required_modulus: Some(0.0),
            ..TestInputs::default()
        };
        let outcome = inputs.run();
        assert!(outcome.evaluation.comparison.is_none());
        assert_eq!(inputs.validate(), Ok(()));
    }

    #[test]
    fn run_reports_undetermined_for_reversed_readings() {
        let inputs = TestInputs {
            deformation: GaugeReadingPair::new(50.0, 100.0).into(),
            ..TestInputs::default()
        };
        let outcome = inputs.run();
        assert_eq!(outcome.deformation, -1.0);
        assert_eq!(outcome.elastic_modulus, None);
        assert_eq!(outcome.evaluation.status, EvaluationStatus::Undetermined);
        assert_eq!(
            inputs.validate(),
            Err(InputError::NonPositiveDeformation { deformation: -1.0 })
        );
    }

    #[test]
    fn validate_rejects_out_of_range_inputs() {
        let cases = [
            (
                TestInputs {
                    pressure: -0.1,
                    ..TestInputs::default()
                },
                InputError::NegativePressure { pressure: -0.1 },
            ),
            (
                TestInputs {
                    plate_diameter: 80.0,
                    ..TestInputs::default()
                },
                InputError::PlateDiameterOutOfRange { diameter: 80.0 },
            ),
            (
                TestInputs {
                    deformation: GaugeReadingPair::new(-5.0, 0.0).into(),
                    ..TestInputs::default()
                },
                InputError::NegativeGaugeReading { reading: -5.0 },
            ),
            (
                TestInputs {
                    deformation: DeformationSource::Direct(0.0),
                    ..TestInputs::default()
                },
                InputError::NonPositiveDeformation { deformation: 0.0 },
            ),
            (
                TestInputs {
                    required_modulus: Some(-1.0),
                    ..TestInputs::default()
                },
                InputError::NegativeRequiredModulus { required: -1.0 },
            ),
        ];
        for (inputs, expected) in cases {
            assert_eq!(inputs.validate(), Err(expected));
        }
    }

    #[test]
    fn validate_accepts_plate_range_limits() {
        for plate_diameter in [30.0, 76.0] {
            let inputs = TestInputs {
                plate_diameter,
                ..TestInputs::default()
            };
            assert_eq!(inputs.validate(), Ok(()));
        }
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let inputs = TestInputs {
            pressure: f64::INFINITY,
            ..TestInputs::default()
        };
        assert!(matches!(
            inputs.validate(),
            Err(InputError::NonFiniteValue {
                quantity: "pressure",
                ..
            })
        ));
    }

    #[test]
    fn deserializes_partial_json_over_defaults() {
        let inputs: TestInputs = serde_json::from_str(
            r#"{"material": "pavement_structure", "deformation": {"direct": 0.8}, "required_modulus": 150.0}"#,
        )
        .unwrap();
        assert_eq!(inputs.material, MaterialCategory::PavementStructure);
        assert_eq!(inputs.pressure, 0.5);
        assert_eq!(inputs.deformation, DeformationSource::Direct(0.8));
        assert_eq!(inputs.required_modulus, Some(150.0));
    }
}
