//! Closed-form elastic modulus under a rigid circular plate.
//!
//! `E = (π/4) x (p x D x (1 - µ²)) / l` with `p` in MPa, `D` in mm and `l` in mm.
//! Plate diameters are supplied in centimetres and converted here.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Smallest plate diameter permitted by the test method, in centimetres.
pub const MIN_PLATE_DIAMETER_CM: f64 = 30.0;

/// Largest plate diameter permitted by the test method, in centimetres.
pub const MAX_PLATE_DIAMETER_CM: f64 = 76.0;

/// Plate diameter to use whenever the equipment allows it, in centimetres.
pub const RECOMMENDED_PLATE_DIAMETER_CM: f64 = 76.0;

/// Millimetres per centimetre.
const MM_PER_CM: f64 = 10.0;

/// Convert a plate diameter from centimetres to millimetres.
#[must_use]
pub fn diameter_mm(diameter_cm: f64) -> f64 {
    diameter_cm * MM_PER_CM
}

/// The `p x D x (1 - µ²)` term shared by the forward and inverse forms.
fn loading_term(pressure: f64, diameter_cm: f64, poisson_ratio: f64) -> f64 {
    pressure * diameter_mm(diameter_cm) * (1.0 - poisson_ratio.powi(2))
}

/// NaN has no physical reading and is reported as undefined.
fn defined(value: f64) -> Option<f64> {
    Some(value).filter(|value| !value.is_nan())
}

/// Elastic modulus in MPa from the recoverable deformation `l` in millimetres.
///
/// Returns `None` when `deformation` is zero, negative or NaN, and when the
/// result itself is NaN.
///
/// # Examples
/// ```
/// use plateload::calculate_elastic_modulus;
///
/// let modulus = calculate_elastic_modulus(0.5, 76.0, 0.25, 1.0).expect("positive deformation");
/// assert!((modulus - 279.798).abs() < 1.0e-3);
/// assert_eq!(calculate_elastic_modulus(0.5, 76.0, 0.25, 0.0), None);
/// ```
#[must_use]
pub fn calculate_elastic_modulus(
    pressure: f64,
    diameter_cm: f64,
    poisson_ratio: f64,
    deformation: f64,
) -> Option<f64> {
    if deformation.is_nan() || deformation <= 0.0 {
        return None;
    }
    defined((PI / 4.0) * loading_term(pressure, diameter_cm, poisson_ratio) / deformation)
}

/// Recoverable deformation in millimetres that produces `modulus` in MPa.
///
/// This is the inverse of [`calculate_elastic_modulus`]. Returns `None` when `modulus`
/// is zero, negative or NaN, and when the result itself is NaN.
///
/// # Examples
/// ```
/// use plateload::{calculate_deformation, calculate_elastic_modulus};
///
/// let modulus = calculate_elastic_modulus(0.5, 76.0, 0.35, 0.8).unwrap();
/// let deformation = calculate_deformation(0.5, 76.0, 0.35, modulus).unwrap();
/// assert!((deformation - 0.8).abs() < 1.0e-12);
/// ```
#[must_use]
pub fn calculate_deformation(
    pressure: f64,
    diameter_cm: f64,
    poisson_ratio: f64,
    modulus: f64,
) -> Option<f64> {
    if modulus.is_nan() || modulus <= 0.0 {
        return None;
    }
    defined((PI / 4.0) * loading_term(pressure, diameter_cm, poisson_ratio) / modulus)
}

/// Every intermediate quantity of a modulus calculation, for hand checking.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationBreakdown {
    /// Applied pressure in MPa.
    pub pressure: f64,
    /// Plate diameter in centimetres.
    pub diameter_cm: f64,
    /// Plate diameter in millimetres.
    pub diameter_mm: f64,
    /// Poisson's ratio used.
    pub poisson_ratio: f64,
    /// The `1 - µ²` reduction factor.
    pub reduction_factor: f64,
    /// The numerator `p x D x (1 - µ²)` with `D` in millimetres.
    pub loading_term: f64,
    /// The constant π.
    pub pi: f64,
    /// The shape coefficient π/4 for a rigid plate.
    pub shape_coefficient: f64,
    /// Recoverable deformation in millimetres.
    pub deformation: f64,
    /// Resulting modulus in MPa, `None` when the deformation is not positive.
    pub modulus: Option<f64>,
}

impl CalculationBreakdown {
    /// Record the intermediate values for the given inputs.
    #[must_use]
    pub fn new(pressure: f64, diameter_cm: f64, poisson_ratio: f64, deformation: f64) -> Self {
        Self {
            pressure,
            diameter_cm,
            diameter_mm: diameter_mm(diameter_cm),
            poisson_ratio,
            reduction_factor: 1.0 - poisson_ratio.powi(2),
            loading_term: loading_term(pressure, diameter_cm, poisson_ratio),
            pi: PI,
            shape_coefficient: PI / 4.0,
            deformation,
            modulus: calculate_elastic_modulus(pressure, diameter_cm, poisson_ratio, deformation),
        }
    }
}
