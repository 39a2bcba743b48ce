//! Plan assembly: derived cost, delivery date, carbon footprint, and
//! fulfillment instructions. Pure apart from the wall-clock read.

use chrono::{Duration, Utc};
use uuid::Uuid;

use super::optimizer::Selection;
use crate::models::packaging::PackagingOption;
use crate::models::plan::{FulfillmentPlan, PlanAlternatives};
use crate::models::request::FulfillmentRequest;
use crate::models::shipping::ShippingOption;

/// Flat freight estimate for shipping legs that are not carbon neutral.
const SHIPPING_FOOTPRINT_KG: f64 = 2.5;
/// Scale applied to the packaging sustainability shortfall.
const PACKAGING_FOOTPRINT_SCALE: f64 = 0.5;

/// Maximum runner-up options carried per axis.
const MAX_ALTERNATIVES: usize = 3;

pub fn assemble_plan(
    request: &FulfillmentRequest,
    selection: &Selection<'_>,
    packaging_options: &[PackagingOption],
    shipping_options: &[ShippingOption],
) -> FulfillmentPlan {
    let packaging = selection.packaging.clone();
    let shipping = selection.shipping.clone();

    FulfillmentPlan {
        id: Uuid::new_v4(),
        order_id: request.order_id.clone(),
        total_cost: packaging.cost + shipping.cost,
        estimated_delivery: Utc::now() + Duration::days(i64::from(shipping.estimated_days)),
        carbon_footprint: carbon_footprint(&packaging, &shipping),
        confidence: selection.confidence,
        optimization_score: selection.score,
        instructions: build_instructions(&packaging, &shipping),
        alternatives: PlanAlternatives {
            packaging: runners_up(packaging_options),
            shipping: runners_up(shipping_options),
        },
        recommended_packaging: packaging,
        recommended_shipping: shipping,
    }
}

/// Positions 2-4 of a pre-sorted catalog.
fn runners_up<T: Clone>(options: &[T]) -> Vec<T> {
    options.iter().skip(1).take(MAX_ALTERNATIVES).cloned().collect()
}

/// Estimated kg CO2 for the pair, rounded to 2 decimals.
fn carbon_footprint(packaging: &PackagingOption, shipping: &ShippingOption) -> f64 {
    let packaging_kg = (1.0 - packaging.sustainability) * PACKAGING_FOOTPRINT_SCALE;
    let shipping_kg = if shipping.sustainability.is_carbon_neutral() {
        0.0
    } else {
        SHIPPING_FOOTPRINT_KG
    };
    ((packaging_kg + shipping_kg) * 100.0).round() / 100.0
}

fn build_instructions(packaging: &PackagingOption, shipping: &ShippingOption) -> Vec<String> {
    let mut instructions = vec![format!(
        "Use {} packaging with {} protection",
        packaging.material, packaging.protection
    )];

    if !packaging.customization.is_empty() {
        instructions.push(format!("Include: {}", packaging.customization.join(", ")));
    }

    instructions.push(format!("Ship via {} {}", shipping.carrier, shipping.service));

    if shipping.signature_required {
        instructions.push("Signature required upon delivery".to_string());
    }

    if shipping.insurance_included {
        instructions.push("Package includes insurance coverage".to_string());
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::packaging::{PackagingType, ProtectionLevel};
    use crate::models::request::Dimensions;
    use crate::models::shipping::SustainabilityTag;
    use rust_decimal_macros::dec;

    fn packaging(sustainability: f64) -> PackagingOption {
        PackagingOption {
            id: "standard-box".to_string(),
            kind: PackagingType::Standard,
            material: "corrugated_cardboard".to_string(),
            dimensions: Dimensions {
                length: 8.0,
                width: 7.0,
                height: 6.0,
            },
            weight: 0.5,
            cost: dec!(3.50),
            protection: ProtectionLevel::Basic,
            customization: Vec::new(),
            sustainability,
        }
    }

    fn shipping(tag: SustainabilityTag, signature: bool, insurance: bool) -> ShippingOption {
        ShippingOption {
            id: "ups-ground".to_string(),
            carrier: "UPS".to_string(),
            service: "Ground".to_string(),
            estimated_days: 2,
            cost: dec!(12.50),
            tracking_included: true,
            insurance_included: insurance,
            signature_required: signature,
            sustainability: tag,
            reliability: 0.95,
        }
    }

    #[test]
    fn standard_shipping_carries_the_freight_footprint() {
        let footprint = carbon_footprint(
            &packaging(0.6),
            &shipping(SustainabilityTag::Standard, false, true),
        );
        assert_eq!(footprint, 2.7);
    }

    #[test]
    fn carbon_neutral_shipping_zeroes_the_freight_leg() {
        let footprint = carbon_footprint(
            &packaging(0.9),
            &shipping(SustainabilityTag::CarbonNeutral, false, true),
        );
        assert_eq!(footprint, 0.05);
    }

    #[test]
    fn instructions_skip_absent_lines() {
        let lines = build_instructions(
            &packaging(0.6),
            &shipping(SustainabilityTag::Standard, false, false),
        );
        assert_eq!(
            lines,
            vec![
                "Use corrugated_cardboard packaging with basic protection".to_string(),
                "Ship via UPS Ground".to_string(),
            ]
        );
    }

    #[test]
    fn instructions_include_signature_and_insurance_lines() {
        let mut pack = packaging(0.7);
        pack.customization = vec!["foam_inserts".to_string(), "tissue_paper".to_string()];
        let lines = build_instructions(&pack, &shipping(SustainabilityTag::Standard, true, true));
        assert_eq!(
            lines,
            vec![
                "Use corrugated_cardboard packaging with basic protection".to_string(),
                "Include: foam_inserts, tissue_paper".to_string(),
                "Ship via UPS Ground".to_string(),
                "Signature required upon delivery".to_string(),
                "Package includes insurance coverage".to_string(),
            ]
        );
    }
}
