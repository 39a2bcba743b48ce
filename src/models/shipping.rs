use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SustainabilityTag {
    Standard,
    EcoFriendly,
    CarbonNeutral,
}

impl SustainabilityTag {
    pub fn is_carbon_neutral(self) -> bool {
        matches!(self, Self::CarbonNeutral)
    }
}

/// A candidate carrier/service for one request, priced for the package
/// weight and destination distance at hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingOption {
    pub id: String,
    pub carrier: String,
    pub service: String,
    /// Whole transit days, at least 1.
    pub estimated_days: u32,
    pub cost: Decimal,
    pub tracking_included: bool,
    pub insurance_included: bool,
    pub signature_required: bool,
    pub sustainability: SustainabilityTag,
    /// 0.0 (worst) to 1.0 (best).
    pub reliability: f64,
}
