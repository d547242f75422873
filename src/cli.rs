use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use plateload::{DeformationSource, GaugeReadingPair, Locale, MaterialCategory, TestInputs};
use thiserror::Error;

/// Command line options for a single plate-load test.
#[derive(Parser, Debug)]
#[command(
    name = "plateload",
    version,
    about = "Field elastic modulus from a static plate-load test",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Tested layer: subgrade-soil, material or pavement-structure
    #[arg(long, short = 'm', default_value = "subgrade-soil")]
    pub material: MaterialCategory,

    /// Plate diameter D in cm (30-76)
    #[arg(long, short = 'd', default_value_t = 76.0)]
    pub diameter: f64,

    /// Applied pressure p in MPa
    #[arg(long, short = 'p', default_value_t = 0.5)]
    pub pressure: f64,

    /// Recoverable deformation l in mm, measured directly
    #[arg(long, short = 'l', conflicts_with_all = ["load_reading", "unload_reading"])]
    pub deformation: Option<f64>,

    /// Dial-gauge reading after loading, in 0.01 mm
    #[arg(long, default_value_t = 100.0)]
    pub load_reading: f64,

    /// Dial-gauge reading after unloading, in 0.01 mm
    #[arg(long, default_value_t = 50.0)]
    pub unload_reading: f64,

    /// Required design modulus in MPa
    #[arg(long, short = 'r')]
    pub required: Option<f64>,

    /// Read the whole test from a JSON file instead of the flags above
    #[arg(
        long,
        short = 'i',
        conflicts_with_all = [
            "material", "diameter", "pressure", "deformation",
            "load_reading", "unload_reading", "required",
        ]
    )]
    pub input: Option<PathBuf>,

    /// Compute even when the inputs are outside the accepted ranges
    #[arg(long)]
    pub skip_validation: bool,

    /// Output machine-readable JSON
    #[arg(long)]
    pub json: bool,

    /// Number separators for the text report (vi or en)
    #[arg(long, default_value = "vi")]
    pub locale: Locale,

    /// Include the worked calculation in the report
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Error returned when a test file cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid test description.
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        /// Offending path.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

impl Cli {
    /// Assemble the test inputs from a JSON file or from the individual flags.
    pub fn test_inputs(&self) -> Result<TestInputs, ConfigError> {
        match &self.input {
            Some(path) => load_inputs(path),
            None => Ok(self.inputs_from_flags()),
        }
    }

    /// Gauge mode unless a direct deformation was given.
    fn inputs_from_flags(&self) -> TestInputs {
        let deformation = match self.deformation {
            Some(deformation) => DeformationSource::Direct(deformation),
            None => GaugeReadingPair::new(self.load_reading, self.unload_reading).into(),
        };
        TestInputs {
            material: self.material,
            pressure: self.pressure,
            plate_diameter: self.diameter,
            deformation,
            required_modulus: self.required,
        }
    }
}

/// Deserialize a [`TestInputs`] from a JSON file; missing fields take their defaults.
fn load_inputs(path: &Path) -> Result<TestInputs, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
