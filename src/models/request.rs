use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FulfillmentError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub product_id: String,
    pub quantity: u32,
    pub dimensions: Dimensions,
    pub weight: f64,
    pub fragile: bool,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedPreference {
    Standard,
    Fast,
    Express,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostPreference {
    Economy,
    Balanced,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SustainabilityPreference {
    Standard,
    EcoPreferred,
    CarbonNeutralOnly,
}

impl SustainabilityPreference {
    /// Anything stronger than the default widens the catalogs with
    /// eco-friendly packaging and carbon-neutral shipping.
    pub fn prefers_eco(self) -> bool {
        matches!(self, Self::EcoPreferred | Self::CarbonNeutralOnly)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPreferences {
    pub speed: SpeedPreference,
    pub cost: CostPreference,
    pub sustainability: SustainabilityPreference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulfillmentRequest {
    pub order_id: String,
    pub items: Vec<Item>,
    pub destination: Destination,
    pub customer_preferences: CustomerPreferences,
    pub special_requirements: Option<Vec<String>>,
}

impl FulfillmentRequest {
    /// Reject malformed requests before any catalog generation runs, so the
    /// caller never receives a partial plan.
    pub fn validate(&self) -> Result<(), FulfillmentError> {
        if self.order_id.trim().is_empty() {
            return Err(FulfillmentError::InvalidRequest(
                "order id is required".to_string(),
            ));
        }
        if self.items.is_empty() {
            return Err(FulfillmentError::InvalidRequest(
                "at least one item is required".to_string(),
            ));
        }
        for item in &self.items {
            if item.quantity == 0 {
                return Err(FulfillmentError::InvalidRequest(format!(
                    "item {} has zero quantity",
                    item.product_id
                )));
            }
            let d = &item.dimensions;
            if d.length < 0.0 || d.width < 0.0 || d.height < 0.0 {
                return Err(FulfillmentError::InvalidRequest(format!(
                    "item {} has negative dimensions",
                    item.product_id
                )));
            }
            if item.weight < 0.0 {
                return Err(FulfillmentError::InvalidRequest(format!(
                    "item {} has negative weight",
                    item.product_id
                )));
            }
            if item.value < Decimal::ZERO {
                return Err(FulfillmentError::InvalidRequest(format!(
                    "item {} has negative value",
                    item.product_id
                )));
            }
        }
        if self.destination.state.trim().is_empty() {
            return Err(FulfillmentError::InvalidRequest(
                "destination state is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn total_volume(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.dimensions.volume() * f64::from(item.quantity))
            .sum()
    }

    pub fn total_weight(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.weight * f64::from(item.quantity))
            .sum()
    }

    pub fn total_value(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.value * Decimal::from(item.quantity))
            .sum()
    }

    pub fn has_fragile_items(&self) -> bool {
        self.items.iter().any(|item| item.fragile)
    }

    pub fn has_special_requirements(&self) -> bool {
        self.special_requirements
            .as_ref()
            .is_some_and(|reqs| !reqs.is_empty())
    }
}
