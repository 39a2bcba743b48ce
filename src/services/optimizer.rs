//! Candidate pair scoring and selection.

use rust_decimal::prelude::ToPrimitive;

use crate::models::packaging::PackagingOption;
use crate::models::request::{
    CostPreference, FulfillmentRequest, SpeedPreference, SustainabilityPreference,
};
use crate::models::shipping::ShippingOption;

// Weighted-criteria weights; they sum to 1.0.
const COST_WEIGHT: f64 = 0.30;
const SPEED_WEIGHT: f64 = 0.25;
const SUSTAINABILITY_WEIGHT: f64 = 0.20;
const RELIABILITY_WEIGHT: f64 = 0.15;
const PROTECTION_WEIGHT: f64 = 0.10;

/// Reference total against which combined cost is normalized.
const COST_REFERENCE: f64 = 50.0;

/// How many options per axis enter the pairwise search. Bounding the search
/// keeps latency flat; the catalogs are pre-sorted, so the candidates the
/// customer would prefer anyway are the ones scored.
const SEARCH_DEPTH: usize = 3;

/// The winning pair plus its score and the confidence estimate.
pub struct Selection<'a> {
    pub packaging: &'a PackagingOption,
    pub shipping: &'a ShippingOption,
    pub score: f64,
    pub confidence: f64,
}

/// Score every pair from the top of each catalog and keep the best.
/// Iteration is packaging-major over the pre-sorted lists and only a
/// strictly greater score displaces the incumbent, so catalog ordering
/// breaks ties in favor of already-preferred options.
pub fn select_optimal<'a>(
    request: &FulfillmentRequest,
    packaging_options: &'a [PackagingOption],
    shipping_options: &'a [ShippingOption],
) -> Option<Selection<'a>> {
    let mut best: Option<(&'a PackagingOption, &'a ShippingOption, f64)> = None;

    for packaging in packaging_options.iter().take(SEARCH_DEPTH) {
        for shipping in shipping_options.iter().take(SEARCH_DEPTH) {
            let score = optimization_score(request, packaging, shipping);
            let incumbent = best.map_or(f64::MIN, |(_, _, s)| s);
            if score > incumbent {
                best = Some((packaging, shipping, score));
            }
        }
    }

    best.map(|(packaging, shipping, score)| Selection {
        packaging,
        shipping,
        score,
        confidence: confidence(request, shipping),
    })
}

/// Weighted multi-criteria score for one pair, clamped to [0, 1].
pub fn optimization_score(
    request: &FulfillmentRequest,
    packaging: &PackagingOption,
    shipping: &ShippingOption,
) -> f64 {
    let prefs = &request.customer_preferences;

    let total_cost = (packaging.cost + shipping.cost)
        .to_f64()
        .unwrap_or(COST_REFERENCE);
    let cost_score = (1.0 - total_cost / COST_REFERENCE).max(0.0);

    let speed_score = if prefs.speed == SpeedPreference::Express {
        1.0 - f64::from(shipping.estimated_days) / 7.0
    } else if shipping.estimated_days <= 5 {
        0.8
    } else {
        0.5
    };

    let sustainability_multiplier = match prefs.sustainability {
        SustainabilityPreference::CarbonNeutralOnly => 1.0,
        SustainabilityPreference::EcoPreferred => 0.7,
        SustainabilityPreference::Standard => 0.3,
    };
    let shipping_sustainability = if shipping.sustainability.is_carbon_neutral() {
        1.0
    } else {
        0.6
    };
    let sustainability_score = (packaging.sustainability + shipping_sustainability) / 2.0;

    let score = cost_score * COST_WEIGHT
        + speed_score * SPEED_WEIGHT
        + sustainability_score * sustainability_multiplier * SUSTAINABILITY_WEIGHT
        + shipping.reliability * RELIABILITY_WEIGHT
        + packaging.protection.score() * PROTECTION_WEIGHT;

    score.clamp(0.0, 1.0)
}

/// Heuristic estimate of how reliable the chosen pair is, independent of
/// the optimization score. Clamped to [0.5, 0.98].
pub fn confidence(request: &FulfillmentRequest, shipping: &ShippingOption) -> f64 {
    let prefs = &request.customer_preferences;
    let mut confidence = 0.8;

    if prefs.speed == SpeedPreference::Standard {
        confidence += 0.1;
    }
    if prefs.cost == CostPreference::Balanced {
        confidence += 0.05;
    }
    if request.has_fragile_items() {
        confidence -= 0.05;
    }
    if request.has_special_requirements() {
        confidence -= 0.10;
    }
    confidence += (shipping.reliability - 0.9) * 0.5;

    confidence.clamp(0.5, 0.98)
}
