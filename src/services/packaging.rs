//! Packaging catalog generation.
//!
//! Pure with respect to the request: no I/O, no shared state, identical
//! ordered output for identical input.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::packaging::{PackagingOption, PackagingType, ProtectionLevel};
use crate::models::request::{
    CostPreference, CustomerPreferences, Dimensions, FulfillmentRequest,
};

/// Packing-material allowance applied to every box volume.
const PACKING_ALLOWANCE: f64 = 1.3;
/// Order value above which premium packaging is offered.
const PREMIUM_VALUE_THRESHOLD: Decimal = dec!(100);

/// Enumerate the candidate boxes for a request, best-first for the
/// customer's preference.
pub fn generate_options(request: &FulfillmentRequest) -> Vec<PackagingOption> {
    let total_volume = request.total_volume();
    let total_weight = request.total_weight();
    let total_value = request.total_value();
    let fragile = request.has_fragile_items();
    let prefs = &request.customer_preferences;

    let base_protection = if fragile {
        ProtectionLevel::Enhanced
    } else {
        ProtectionLevel::Basic
    };

    let mut options = Vec::with_capacity(4);

    options.push(PackagingOption {
        id: "standard-box".to_string(),
        kind: PackagingType::Standard,
        material: "corrugated_cardboard".to_string(),
        dimensions: box_dimensions(total_volume, 1.0),
        weight: (total_weight * 0.10).max(0.5),
        cost: dec!(3.50),
        protection: base_protection,
        customization: Vec::new(),
        sustainability: 0.6,
    });

    if prefs.sustainability.prefers_eco() {
        options.push(PackagingOption {
            id: "eco-box".to_string(),
            kind: PackagingType::EcoFriendly,
            material: "recycled_cardboard".to_string(),
            dimensions: box_dimensions(total_volume, 1.0),
            weight: (total_weight * 0.08).max(0.4),
            cost: dec!(4.25),
            protection: base_protection,
            customization: vec![
                "biodegradable_padding".to_string(),
                "recycled_tape".to_string(),
            ],
            sustainability: 0.9,
        });
    }

    if total_value > PREMIUM_VALUE_THRESHOLD || prefs.cost == CostPreference::Premium {
        options.push(PackagingOption {
            id: "premium-box".to_string(),
            kind: PackagingType::Premium,
            material: "rigid_cardboard".to_string(),
            // 20% larger for premium presentation
            dimensions: box_dimensions(total_volume, 1.2),
            weight: (total_weight * 0.15).max(0.8),
            cost: dec!(8.50),
            protection: ProtectionLevel::Maximum,
            customization: vec![
                "foam_inserts".to_string(),
                "tissue_paper".to_string(),
                "thank_you_card".to_string(),
            ],
            sustainability: 0.7,
        });
    }

    options.push(PackagingOption {
        id: "branded-box".to_string(),
        kind: PackagingType::CustomBranded,
        material: "custom_printed_cardboard".to_string(),
        dimensions: box_dimensions(total_volume, 1.1),
        weight: (total_weight * 0.12).max(0.6),
        cost: dec!(6.75),
        protection: ProtectionLevel::Enhanced,
        customization: vec![
            "brand_logo".to_string(),
            "custom_colors".to_string(),
            "marketing_insert".to_string(),
        ],
        sustainability: 0.65,
    });

    sort_by_preference(&mut options, prefs);
    options
}

/// Non-cubic box sized for packing efficiency: the adjusted volume's cube
/// root stretched along length and flattened along height.
fn box_dimensions(volume: f64, size_factor: f64) -> Dimensions {
    let adjusted = volume * size_factor * PACKING_ALLOWANCE;
    let side = adjusted.cbrt();

    Dimensions {
        length: (side * 1.2).ceil(),
        width: side.ceil(),
        height: (side * 0.8).ceil(),
    }
}

fn sort_by_preference(options: &mut [PackagingOption], prefs: &CustomerPreferences) {
    if prefs.sustainability.prefers_eco() {
        options.sort_by(|a, b| b.sustainability.total_cmp(&a.sustainability));
    } else if prefs.cost == CostPreference::Economy {
        options.sort_by(|a, b| a.cost.cmp(&b.cost));
    } else if prefs.cost == CostPreference::Premium {
        options.sort_by(|a, b| b.cost.cmp(&a.cost));
    }
    // balanced keeps generation order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_grows_along_length_and_shrinks_along_height() {
        // 216 cubic inches with the 1.3 allowance gives a ~6.55" side.
        let dims = box_dimensions(216.0, 1.0);
        assert_eq!(dims.length, 8.0);
        assert_eq!(dims.width, 7.0);
        assert_eq!(dims.height, 6.0);
    }

    #[test]
    fn size_factor_scales_the_volume_before_rooting() {
        let base = box_dimensions(1000.0, 1.0);
        let larger = box_dimensions(1000.0, 1.2);
        assert!(larger.width >= base.width);
        assert!(larger.length >= base.length);
    }
}
