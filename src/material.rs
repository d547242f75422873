//! Material categories and their Poisson's ratios.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// Category of the layer under the loading plate.
///
/// Each category is bound to the Poisson's ratio prescribed by the test method.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    /// Natural or compacted subgrade soil.
    #[default]
    SubgradeSoil,
    /// A single layer of granular or bound pavement material.
    Material,
    /// The complete pavement structure tested as a whole.
    PavementStructure,
}

impl MaterialCategory {
    /// Every category, in the order they are offered to the operator.
    pub const ALL: [MaterialCategory; 3] = [
        MaterialCategory::SubgradeSoil,
        MaterialCategory::Material,
        MaterialCategory::PavementStructure,
    ];

    /// Return the Poisson's ratio bound to this category.
    ///
    /// # Examples
    /// ```
    /// use plateload::MaterialCategory;
    ///
    /// assert_eq!(MaterialCategory::SubgradeSoil.poisson_ratio(), 0.35);
    /// assert_eq!(MaterialCategory::Material.poisson_ratio(), 0.25);
    /// assert_eq!(MaterialCategory::PavementStructure.poisson_ratio(), 0.30);
    /// ```
    #[must_use]
    pub const fn poisson_ratio(self) -> f64 {
        match self {
            MaterialCategory::SubgradeSoil => 0.35,
            MaterialCategory::Material => 0.25,
            MaterialCategory::PavementStructure => 0.30,
        }
    }

    /// Human readable name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MaterialCategory::SubgradeSoil => "Subgrade soil",
            MaterialCategory::Material => "Material",
            MaterialCategory::PavementStructure => "Pavement structure",
        }
    }

    /// Identifier accepted by [`FromStr`].
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            MaterialCategory::SubgradeSoil => "subgrade-soil",
            MaterialCategory::Material => "material",
            MaterialCategory::PavementStructure => "pavement-structure",
        }
    }
}

/// Poisson's ratio for `category`.
#[must_use]
pub const fn material_poisson_ratio(category: MaterialCategory) -> f64 {
    category.poisson_ratio()
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaterialCategory {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalised = value.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalised.as_str() {
            "subgrade-soil" | "subgrade" | "soil" => Ok(MaterialCategory::SubgradeSoil),
            "material" => Ok(MaterialCategory::Material),
            "pavement-structure" | "pavement" => Ok(MaterialCategory::PavementStructure),
            _ => Err(InputError::UnknownMaterial(value.to_owned())),
        }
    }
}
