//! Error types produced while validating plate-load test inputs.
//!
//! The calculation functions themselves never fail; these errors only come
//! from [`TestInputs::validate`](crate::TestInputs::validate) and from parsing
//! material and locale names.

use thiserror::Error;

/// Error returned when raw field readings are outside the range accepted by the test method.
///
/// The variants describe the reason the supplied value is rejected so callers can
/// present actionable feedback to the operator.
///
/// # Examples
///
/// ```
/// use plateload::{InputError, TestInputs};
///
/// let inputs = TestInputs {
///     plate_diameter: 20.0,
///     ..TestInputs::default()
/// };
/// let error = inputs.validate().expect_err("small plate is rejected");
/// assert_eq!(error, InputError::PlateDiameterOutOfRange { diameter: 20.0 });
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    /// Returned when the applied pressure is negative.
    #[error("pressure must not be negative (received {pressure} MPa)")]
    NegativePressure {
        /// Rejected pressure in megapascals.
        pressure: f64,
    },
    /// Returned when the plate diameter is outside the permitted 30-76 cm range.
    #[error("plate diameter must be between 30 and 76 cm (received {diameter} cm)")]
    PlateDiameterOutOfRange {
        /// Rejected diameter in centimetres.
        diameter: f64,
    },
    /// Returned when a dial-gauge reading is negative.
    #[error("dial-gauge readings must not be negative (received {reading} x 0.01 mm)")]
    NegativeGaugeReading {
        /// Rejected reading in units of 0.01 mm.
        reading: f64,
    },
    /// Returned when the recoverable deformation is zero or negative.
    #[error("recoverable deformation must be greater than 0 (received {deformation} mm)")]
    NonPositiveDeformation {
        /// Rejected deformation in millimetres.
        deformation: f64,
    },
    /// Returned when the required modulus is negative.
    #[error("required modulus must not be negative (received {required} MPa)")]
    NegativeRequiredModulus {
        /// Rejected modulus in megapascals.
        required: f64,
    },
    /// Returned when a quantity is NaN or infinite.
    #[error("{quantity} must be a finite number (received {value})")]
    NonFiniteValue {
        /// Name of the offending quantity.
        quantity: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Returned when a material category name is not recognised.
    #[error("unknown material category `{0}` (expected subgrade-soil, material or pavement-structure)")]
    UnknownMaterial(String),
    /// Returned when a report locale name is not recognised.
    #[error("unknown locale `{0}` (expected vi or en)")]
    UnknownLocale(String),
}
