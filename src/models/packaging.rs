use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::request::Dimensions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackagingType {
    Standard,
    Premium,
    EcoFriendly,
    CustomBranded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectionLevel {
    Basic,
    Enhanced,
    Maximum,
}

impl ProtectionLevel {
    pub fn score(self) -> f64 {
        match self {
            Self::Maximum => 1.0,
            Self::Enhanced => 0.8,
            Self::Basic => 0.6,
        }
    }
}

impl fmt::Display for ProtectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Basic => "basic",
            Self::Enhanced => "enhanced",
            Self::Maximum => "maximum",
        };
        write!(f, "{}", label)
    }
}

/// A candidate box for one request. Computed deterministically from the
/// request; never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagingOption {
    pub id: String,
    pub kind: PackagingType,
    pub material: String,
    /// Outer box dimensions.
    pub dimensions: Dimensions,
    /// Tare weight of the empty packaging.
    pub weight: f64,
    pub cost: Decimal,
    pub protection: ProtectionLevel,
    pub customization: Vec<String>,
    /// 0.0 (worst) to 1.0 (best).
    pub sustainability: f64,
}
