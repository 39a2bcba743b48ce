//! End-to-end fulfillment plan tests through the service facade.
//!
//! Covers the cost identity, alternative caps, derived delivery and
//! footprint values, instruction assembly, validation failures, and the
//! fire-and-forget persistence contract.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use parcelcore::error::FulfillmentError;
use parcelcore::geo::StaticDistanceTable;
use parcelcore::models::plan::FulfillmentPlan;
use parcelcore::models::request::{
    CostPreference, CustomerPreferences, Destination, Dimensions, FulfillmentRequest, Item,
    SpeedPreference, SustainabilityPreference,
};
use parcelcore::rates::StaticRateTable;
use parcelcore::repository::{InMemoryPlanStore, InMemoryShipmentStore, PlanStore};
use parcelcore::{Config, FulfillmentService};
use rust_decimal_macros::dec;

fn request(prefs: CustomerPreferences) -> FulfillmentRequest {
    FulfillmentRequest {
        order_id: "order-ca-1".to_string(),
        items: vec![Item {
            product_id: "sku-1".to_string(),
            quantity: 1,
            dimensions: Dimensions {
                length: 6.0,
                width: 6.0,
                height: 6.0,
            },
            weight: 1.0,
            fragile: false,
            value: dec!(150),
        }],
        destination: Destination {
            address: "1 Main St".to_string(),
            city: "Los Angeles".to_string(),
            state: "CA".to_string(),
            zip_code: "90001".to_string(),
            country: "US".to_string(),
        },
        customer_preferences: prefs,
        special_requirements: None,
    }
}

fn balanced_prefs() -> CustomerPreferences {
    CustomerPreferences {
        speed: SpeedPreference::Standard,
        cost: CostPreference::Balanced,
        sustainability: SustainabilityPreference::Standard,
    }
}

fn service() -> FulfillmentService {
    FulfillmentService::with_static_tables(Config::default())
}

#[tokio::test]
async fn total_cost_is_exactly_the_sum_of_the_recommended_pair() {
    let plan = service()
        .optimize_fulfillment(&request(balanced_prefs()))
        .await
        .unwrap();
    assert_eq!(
        plan.total_cost,
        plan.recommended_packaging.cost + plan.recommended_shipping.cost
    );
}

#[tokio::test]
async fn alternatives_are_capped_at_three_per_axis() {
    let plan = service()
        .optimize_fulfillment(&request(balanced_prefs()))
        .await
        .unwrap();
    assert!(plan.alternatives.packaging.len() <= 3);
    assert!(plan.alternatives.shipping.len() <= 3);
    // The CA example: 3 packaging candidates leave 2 runners-up, 4
    // shipping candidates leave 3.
    assert_eq!(plan.alternatives.packaging.len(), 2);
    assert_eq!(plan.alternatives.shipping.len(), 3);
}

#[tokio::test]
async fn confidence_and_score_stay_in_their_documented_ranges() {
    let plan = service()
        .optimize_fulfillment(&request(balanced_prefs()))
        .await
        .unwrap();
    assert!((0.5..=0.98).contains(&plan.confidence));
    assert!((0.0..=1.0).contains(&plan.optimization_score));
}

#[tokio::test]
async fn balanced_ca_example_matches_the_expected_plan() {
    let plan = service()
        .optimize_fulfillment(&request(balanced_prefs()))
        .await
        .unwrap();

    assert_eq!(plan.recommended_packaging.id, "premium-box");
    assert_eq!(plan.recommended_shipping.id, "ups-ground");
    assert_eq!(plan.total_cost, dec!(21.00));
    // (1 - 0.7) * 0.5 + 2.5 for a non-neutral shipping leg.
    assert_eq!(plan.carbon_footprint, 2.65);
    assert!((plan.confidence - 0.975).abs() < 1e-9);

    // Total sits between the cheapest and richest combinations.
    assert!(plan.total_cost >= dec!(12.00));
    assert!(plan.total_cost <= dec!(73.50));
}

#[tokio::test]
async fn estimated_delivery_is_now_plus_transit_days() {
    let before = Utc::now();
    let plan = service()
        .optimize_fulfillment(&request(balanced_prefs()))
        .await
        .unwrap();
    let after = Utc::now();

    let days = i64::from(plan.recommended_shipping.estimated_days);
    assert!(plan.estimated_delivery >= before + Duration::days(days) - Duration::seconds(5));
    assert!(plan.estimated_delivery <= after + Duration::days(days) + Duration::seconds(5));
}

#[tokio::test]
async fn carbon_neutral_example_gains_the_eco_options() {
    let mut prefs = balanced_prefs();
    prefs.sustainability = SustainabilityPreference::CarbonNeutralOnly;
    let plan = service()
        .optimize_fulfillment(&request(prefs))
        .await
        .unwrap();

    assert_eq!(plan.recommended_packaging.id, "eco-box");
    assert_eq!(plan.recommended_shipping.id, "ups-carbon-neutral");
    // (1 - 0.9) * 0.5 and a zeroed freight leg.
    assert_eq!(plan.carbon_footprint, 0.05);
}

#[tokio::test]
async fn raising_sustainability_never_lowers_chosen_packaging_sustainability() {
    let standard_plan = service()
        .optimize_fulfillment(&request(balanced_prefs()))
        .await
        .unwrap();

    let mut eco_prefs = balanced_prefs();
    eco_prefs.sustainability = SustainabilityPreference::CarbonNeutralOnly;
    let eco_plan = service()
        .optimize_fulfillment(&request(eco_prefs))
        .await
        .unwrap();

    assert!(
        eco_plan.recommended_packaging.sustainability
            >= standard_plan.recommended_packaging.sustainability
    );
}

#[tokio::test]
async fn instructions_describe_the_recommended_pair_in_order() {
    let plan = service()
        .optimize_fulfillment(&request(balanced_prefs()))
        .await
        .unwrap();

    assert_eq!(
        plan.instructions,
        vec![
            "Use rigid_cardboard packaging with maximum protection".to_string(),
            "Include: foam_inserts, tissue_paper, thank_you_card".to_string(),
            "Ship via UPS Ground".to_string(),
            "Package includes insurance coverage".to_string(),
        ]
    );
}

#[tokio::test]
async fn cost_breakdown_reports_savings_against_the_next_best_service() {
    let plan = service()
        .optimize_fulfillment(&request(balanced_prefs()))
        .await
        .unwrap();

    let breakdown = plan.cost_breakdown();
    assert_eq!(breakdown.packaging, dec!(8.50));
    assert_eq!(breakdown.shipping, dec!(12.50));
    assert_eq!(breakdown.total, dec!(21.00));
    // First runner-up is FedEx 2Day at 25.50.
    assert_eq!(breakdown.savings, dec!(13.00));
}

#[tokio::test]
async fn sustainability_summary_reports_whole_percentages() {
    let plan = service()
        .optimize_fulfillment(&request(balanced_prefs()))
        .await
        .unwrap();

    let summary = plan.sustainability_summary();
    assert_eq!(summary.packaging, 70);
    assert_eq!(summary.shipping, 60);
    assert_eq!(summary.overall, 65);
    assert_eq!(summary.carbon_footprint, plan.carbon_footprint);
}

#[tokio::test]
async fn invalid_requests_are_rejected_before_any_catalog_work() {
    let svc = service();

    let mut empty = request(balanced_prefs());
    empty.items.clear();
    let err = svc.optimize_fulfillment(&empty).await.unwrap_err();
    assert!(matches!(err, FulfillmentError::InvalidRequest(_)));
    assert!(err.is_client_error());

    let mut zero_quantity = request(balanced_prefs());
    zero_quantity.items[0].quantity = 0;
    assert!(svc.optimize_fulfillment(&zero_quantity).await.is_err());

    let mut negative_value = request(balanced_prefs());
    negative_value.items[0].value = dec!(-1);
    assert!(svc.optimize_fulfillment(&negative_value).await.is_err());
}

#[tokio::test]
async fn unknown_destination_state_is_not_an_error() {
    let mut req = request(balanced_prefs());
    req.destination.state = "ZZ".to_string();
    // Falls back to the default 800-mile distance, same as CA.
    let plan = service().optimize_fulfillment(&req).await.unwrap();
    assert_eq!(plan.total_cost, dec!(21.00));
}

#[tokio::test]
async fn plans_are_persisted_to_the_store() {
    let store = Arc::new(InMemoryPlanStore::new());
    let svc = FulfillmentService::new(
        Config::default(),
        Arc::new(StaticDistanceTable::new(800.0)),
        Arc::new(StaticRateTable),
        store.clone(),
        Arc::new(InMemoryShipmentStore::new()),
    );

    let plan = svc
        .optimize_fulfillment(&request(balanced_prefs()))
        .await
        .unwrap();
    let stored = store.get(plan.id).expect("plan should be persisted");
    assert_eq!(stored, plan);
}

struct FailingPlanStore;

#[async_trait]
impl PlanStore for FailingPlanStore {
    async fn persist_plan(&self, _plan: &FulfillmentPlan) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("simulated outage"))
    }
}

#[tokio::test]
async fn persistence_failure_does_not_invalidate_the_plan() {
    let svc = FulfillmentService::new(
        Config::default(),
        Arc::new(StaticDistanceTable::new(800.0)),
        Arc::new(StaticRateTable),
        Arc::new(FailingPlanStore),
        Arc::new(InMemoryShipmentStore::new()),
    );

    let plan = svc
        .optimize_fulfillment(&request(balanced_prefs()))
        .await
        .unwrap();
    assert_eq!(plan.total_cost, dec!(21.00));
}
