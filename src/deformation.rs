//! Recoverable deformation from direct measurement or dial-gauge readings.

use serde::{Deserialize, Serialize};

/// Size of one dial-gauge division in millimetres.
pub const GAUGE_DIVISION_MM: f64 = 0.01;

/// Lever factor of the deflection beam carrying the dial gauge.
pub const GAUGE_LEVER_FACTOR: f64 = 2.0;

/// Dial-gauge readings taken at the end of a load step, in units of 0.01 mm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaugeReadingPair {
    /// Reading once the settlement under load has stabilised.
    pub after_load: f64,
    /// Reading once the rebound after unloading has stabilised.
    pub after_unload: f64,
}

impl GaugeReadingPair {
    /// Create a [`GaugeReadingPair`] from the loaded and unloaded readings.
    #[must_use]
    pub const fn new(after_load: f64, after_unload: f64) -> Self {
        Self {
            after_load,
            after_unload,
        }
    }

    /// Recoverable deformation in millimetres.
    ///
    /// A pair where the unloaded reading exceeds the loaded one produces a
    /// negative deformation; it is returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use plateload::GaugeReadingPair;
    ///
    /// assert_eq!(GaugeReadingPair::new(100.0, 50.0).deformation(), 1.0);
    /// ```
    #[must_use]
    pub fn deformation(self) -> f64 {
        deformation_from_gauge(self.after_load, self.after_unload)
    }
}

/// How the recoverable deformation was obtained in the field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeformationSource {
    /// Deformation measured directly, in millimetres.
    Direct(f64),
    /// Deformation derived from a pair of dial-gauge readings.
    Gauge(GaugeReadingPair),
}

impl Default for DeformationSource {
    fn default() -> Self {
        DeformationSource::Gauge(GaugeReadingPair::new(100.0, 50.0))
    }
}

impl From<f64> for DeformationSource {
    fn from(value: f64) -> Self {
        DeformationSource::Direct(value)
    }
}

impl From<GaugeReadingPair> for DeformationSource {
    fn from(value: GaugeReadingPair) -> Self {
        DeformationSource::Gauge(value)
    }
}

/// Recoverable deformation in millimetres from dial-gauge readings in 0.01 mm.
///
/// `l = (after_load - after_unload) x 2 x 0.01`
#[must_use]
pub fn deformation_from_gauge(after_load: f64, after_unload: f64) -> f64 {
    (after_load - after_unload) * GAUGE_LEVER_FACTOR * GAUGE_DIVISION_MM
}

/// Resolve the recoverable deformation `l` in millimetres.
///
/// # Examples
/// ```
/// use plateload::{resolve_deformation, DeformationSource, GaugeReadingPair};
///
/// assert_eq!(resolve_deformation(DeformationSource::Direct(0.75)), 0.75);
/// assert_eq!(resolve_deformation(GaugeReadingPair::new(100.0, 50.0).into()), 1.0);
/// ```
#[must_use]
pub fn resolve_deformation(source: DeformationSource) -> f64 {
    match source {
        DeformationSource::Direct(deformation) => deformation,
        DeformationSource::Gauge(readings) => readings.deformation(),
    }
}
