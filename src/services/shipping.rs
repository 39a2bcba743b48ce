//! Shipping catalog generation.
//!
//! Pure apart from rate lookups; distance resolution happens in the
//! service facade so this module never touches geography directly.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::cmp::Ordering;

use crate::error::FulfillmentError;
use crate::models::request::{
    CostPreference, CustomerPreferences, FulfillmentRequest, SpeedPreference,
    SustainabilityPreference,
};
use crate::models::shipping::{ShippingOption, SustainabilityTag};
use crate::rates::RateTable;

/// Surcharge applied to the carbon-neutral variant of UPS Ground.
const CARBON_NEUTRAL_SURCHARGE: Decimal = dec!(1.15);

/// Enumerate the candidate carrier services for a request, priced for the
/// given package weight and destination distance, best-first for the
/// customer's preference.
pub async fn generate_options(
    request: &FulfillmentRequest,
    package_weight: f64,
    distance: f64,
    rates: &dyn RateTable,
) -> Result<Vec<ShippingOption>, FulfillmentError> {
    let usps_ground_cost = rates
        .lookup("usps", "ground", package_weight, distance)
        .await?;
    let ups_ground_cost = rates
        .lookup("ups", "ground", package_weight, distance)
        .await?;
    let fedex_2day_cost = rates
        .lookup("fedex", "2day", package_weight, distance)
        .await?;
    let fedex_overnight_cost = rates
        .lookup("fedex", "overnight", package_weight, distance)
        .await?;

    let mut options = vec![
        ShippingOption {
            id: "usps-ground".to_string(),
            carrier: "USPS".to_string(),
            service: "Ground Advantage".to_string(),
            estimated_days: usps_ground_days(distance),
            cost: usps_ground_cost,
            tracking_included: true,
            insurance_included: false,
            signature_required: false,
            sustainability: SustainabilityTag::Standard,
            reliability: 0.92,
        },
        ShippingOption {
            id: "ups-ground".to_string(),
            carrier: "UPS".to_string(),
            service: "Ground".to_string(),
            estimated_days: ups_ground_days(distance),
            cost: ups_ground_cost,
            tracking_included: true,
            insurance_included: true,
            signature_required: false,
            sustainability: SustainabilityTag::Standard,
            reliability: 0.95,
        },
        ShippingOption {
            id: "fedex-2day".to_string(),
            carrier: "FedEx".to_string(),
            service: "2Day".to_string(),
            estimated_days: 2,
            cost: fedex_2day_cost,
            tracking_included: true,
            insurance_included: true,
            signature_required: false,
            sustainability: SustainabilityTag::Standard,
            reliability: 0.97,
        },
        ShippingOption {
            id: "fedex-overnight".to_string(),
            carrier: "FedEx".to_string(),
            service: "Priority Overnight".to_string(),
            estimated_days: 1,
            cost: fedex_overnight_cost,
            tracking_included: true,
            insurance_included: true,
            signature_required: true,
            sustainability: SustainabilityTag::Standard,
            reliability: 0.98,
        },
    ];

    if request.customer_preferences.sustainability != SustainabilityPreference::Standard {
        options.push(ShippingOption {
            id: "ups-carbon-neutral".to_string(),
            carrier: "UPS".to_string(),
            service: "Ground (Carbon Neutral)".to_string(),
            estimated_days: ups_ground_days(distance),
            cost: (ups_ground_cost * CARBON_NEUTRAL_SURCHARGE)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            tracking_included: true,
            insurance_included: true,
            signature_required: false,
            sustainability: SustainabilityTag::CarbonNeutral,
            reliability: 0.94,
        });
    }

    sort_by_preference(&mut options, &request.customer_preferences);
    Ok(options)
}

fn usps_ground_days(distance: f64) -> u32 {
    ((distance / 500.0).floor() as u32 + 2).max(3)
}

fn ups_ground_days(distance: f64) -> u32 {
    ((distance / 600.0).floor() as u32 + 1).max(2)
}

fn sort_by_preference(options: &mut [ShippingOption], prefs: &CustomerPreferences) {
    options.sort_by(|a, b| {
        if prefs.speed == SpeedPreference::Express {
            return a.estimated_days.cmp(&b.estimated_days);
        }
        if prefs.cost == CostPreference::Economy {
            return a.cost.cmp(&b.cost);
        }
        if prefs.sustainability == SustainabilityPreference::CarbonNeutralOnly {
            match (
                a.sustainability.is_carbon_neutral(),
                b.sustainability.is_carbon_neutral(),
            ) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
        }
        b.reliability.total_cmp(&a.reliability)
    });
}
