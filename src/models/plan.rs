use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::packaging::PackagingOption;
use super::shipping::ShippingOption;

/// Runner-up options from each pre-sorted catalog, capped at 3 per axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanAlternatives {
    pub packaging: Vec<PackagingOption>,
    pub shipping: Vec<ShippingOption>,
}

/// The recommended packaging+shipping combination for one order, plus the
/// derived cost, delivery, footprint, and confidence metadata. Immutable
/// after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulfillmentPlan {
    pub id: Uuid,
    pub order_id: String,
    pub recommended_packaging: PackagingOption,
    pub recommended_shipping: ShippingOption,
    pub alternatives: PlanAlternatives,
    /// Exactly packaging cost + shipping cost.
    pub total_cost: Decimal,
    pub estimated_delivery: DateTime<Utc>,
    /// Estimated kg CO2, rounded to 2 decimals.
    pub carbon_footprint: f64,
    /// Heuristic reliability of the recommendation, in [0.5, 0.98].
    pub confidence: f64,
    /// Weighted-criteria score of the winning pair, in [0, 1].
    pub optimization_score: f64,
    /// Human-readable packing and shipping steps, in order.
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub packaging: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    /// What the customer saves versus the next-best shipping option.
    pub savings: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilitySummary {
    /// Percentages, rounded to whole points.
    pub overall: u32,
    pub packaging: u32,
    pub shipping: u32,
    pub carbon_footprint: f64,
}

impl FulfillmentPlan {
    pub fn cost_breakdown(&self) -> CostBreakdown {
        let savings = self
            .alternatives
            .shipping
            .first()
            .map(|alt| (alt.cost - self.recommended_shipping.cost).max(Decimal::ZERO))
            .unwrap_or(Decimal::ZERO);

        CostBreakdown {
            packaging: self.recommended_packaging.cost,
            shipping: self.recommended_shipping.cost,
            total: self.total_cost,
            savings,
        }
    }

    pub fn sustainability_summary(&self) -> SustainabilitySummary {
        let packaging = self.recommended_packaging.sustainability;
        let shipping = if self.recommended_shipping.sustainability.is_carbon_neutral() {
            1.0
        } else {
            0.6
        };

        SustainabilitySummary {
            overall: (((packaging + shipping) / 2.0) * 100.0).round() as u32,
            packaging: (packaging * 100.0).round() as u32,
            shipping: (shipping * 100.0).round() as u32,
            carbon_footprint: self.carbon_footprint,
        }
    }
}
