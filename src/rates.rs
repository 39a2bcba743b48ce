//! Carrier rate lookup.

use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Maps (carrier, service, weight, distance) to a monetary cost.
/// Swappable for a live rating API; a failure here aborts the whole
/// optimization, since cost correctness depends on it.
#[async_trait]
pub trait RateTable: Send + Sync {
    async fn lookup(
        &self,
        carrier: &str,
        service: &str,
        weight_lbs: f64,
        distance_miles: f64,
    ) -> Result<Decimal>;
}

/// Static per-carrier formula standing in for a live rating API:
/// base rate scaled by weight (per 2 lbs) and distance (per 1000 miles),
/// each factor floored at 1, rounded to cents.
pub struct StaticRateTable;

fn base_rate(carrier: &str, service: &str) -> Decimal {
    match (carrier, service) {
        ("usps", "ground") => dec!(8.50),
        ("ups", "ground") => dec!(12.50),
        ("fedex", "ground") => dec!(11.75),
        ("fedex", "2day") => dec!(25.50),
        ("fedex", "overnight") => dec!(65.00),
        _ => dec!(10),
    }
}

#[async_trait]
impl RateTable for StaticRateTable {
    async fn lookup(
        &self,
        carrier: &str,
        service: &str,
        weight_lbs: f64,
        distance_miles: f64,
    ) -> Result<Decimal> {
        let weight_factor = Decimal::from_f64_retain(weight_lbs / 2.0)
            .unwrap_or(Decimal::ONE)
            .max(Decimal::ONE);
        let distance_factor = Decimal::from_f64_retain(distance_miles / 1000.0)
            .unwrap_or(Decimal::ONE)
            .max(Decimal::ONE);

        let cost = base_rate(carrier, service) * weight_factor * distance_factor;
        Ok(cost.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}
