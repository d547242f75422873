#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod deformation;
pub mod errors;
pub mod evaluation;
pub mod format;
pub mod material;
pub mod modulus;
pub mod plate_test;

pub use deformation::{
    deformation_from_gauge, resolve_deformation, DeformationSource, GaugeReadingPair,
    GAUGE_DIVISION_MM, GAUGE_LEVER_FACTOR,
};
pub use errors::InputError;
pub use evaluation::{
    evaluate, ComparisonResult, ComparisonStatus, EvaluationResult, EvaluationStatus,
    GOOD_MODULUS_THRESHOLD, LOW_MODULUS_THRESHOLD,
};
pub use format::{format_number, format_optional, Locale};
pub use material::{material_poisson_ratio, MaterialCategory};
pub use modulus::{
    calculate_deformation, calculate_elastic_modulus, diameter_mm, CalculationBreakdown,
    MAX_PLATE_DIAMETER_CM, MIN_PLATE_DIAMETER_CM, RECOMMENDED_PLATE_DIAMETER_CM,
};
pub use plate_test::{TestInputs, TestOutcome};
