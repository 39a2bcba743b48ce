pub mod optimizer;
pub mod packaging;
pub mod planner;
pub mod shipping;
pub mod tracker;

use std::sync::Arc;

use uuid::Uuid;

use crate::config::Config;
use crate::error::FulfillmentError;
use crate::geo::{DistanceEstimator, StaticDistanceTable};
use crate::models::plan::FulfillmentPlan;
use crate::models::request::FulfillmentRequest;
use crate::models::shipment::{Shipment, ShipmentStatus};
use crate::rates::{RateTable, StaticRateTable};
use crate::repository::{InMemoryPlanStore, InMemoryShipmentStore, PlanStore, ShipmentStore};

pub use tracker::ShipmentTracker;

/// The fulfillment engine: catalog generation, pair selection, plan
/// assembly, and shipment tracking behind explicit collaborators. All
/// computation is a function of the request and the static tables, so one
/// instance serves any number of concurrent requests without locking.
pub struct FulfillmentService {
    config: Config,
    distance: Arc<dyn DistanceEstimator>,
    rates: Arc<dyn RateTable>,
    plans: Arc<dyn PlanStore>,
    tracker: ShipmentTracker,
}

impl FulfillmentService {
    pub fn new(
        config: Config,
        distance: Arc<dyn DistanceEstimator>,
        rates: Arc<dyn RateTable>,
        plans: Arc<dyn PlanStore>,
        shipments: Arc<dyn ShipmentStore>,
    ) -> Self {
        let tracker = ShipmentTracker::new(shipments, config.origin_location.clone());
        Self {
            config,
            distance,
            rates,
            plans,
            tracker,
        }
    }

    /// Engine wired to the static distance/rate tables and in-memory
    /// stores.
    pub fn with_static_tables(config: Config) -> Self {
        let distance = Arc::new(StaticDistanceTable::new(config.default_distance_miles));
        Self::new(
            config,
            distance,
            Arc::new(StaticRateTable),
            Arc::new(InMemoryPlanStore::new()),
            Arc::new(InMemoryShipmentStore::new()),
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tracker(&self) -> &ShipmentTracker {
        &self.tracker
    }

    /// Select the packaging and shipping combination that best fits the
    /// customer's preferences and assemble the fulfillment plan around it.
    pub async fn optimize_fulfillment(
        &self,
        request: &FulfillmentRequest,
    ) -> Result<FulfillmentPlan, FulfillmentError> {
        request.validate()?;

        tracing::info!(order_id = %request.order_id, "Optimizing fulfillment");

        let packaging_options = packaging::generate_options(request);

        let distance = self.distance.estimate(&request.destination).await?;
        let package_weight = packaging_options
            .first()
            .map_or(0.0, |option| option.weight)
            + request.total_weight();

        let shipping_options =
            shipping::generate_options(request, package_weight, distance, self.rates.as_ref())
                .await?;

        let selection = optimizer::select_optimal(request, &packaging_options, &shipping_options)
            .ok_or_else(|| {
                FulfillmentError::Dependency(anyhow::anyhow!("no candidate options were generated"))
            })?;

        let plan = planner::assemble_plan(request, &selection, &packaging_options, &shipping_options);

        tracing::info!(
            plan_id = %plan.id,
            order_id = %plan.order_id,
            packaging = %plan.recommended_packaging.id,
            shipping = %plan.recommended_shipping.id,
            total_cost = %plan.total_cost,
            score = plan.optimization_score,
            "Fulfillment plan assembled"
        );

        // Persistence failure must not invalidate the computed plan.
        if let Err(err) = self.plans.persist_plan(&plan).await {
            tracing::warn!(plan_id = %plan.id, error = %err, "Failed to persist fulfillment plan");
        }

        Ok(plan)
    }

    pub async fn create_shipment(
        &self,
        plan: &FulfillmentPlan,
    ) -> Result<Shipment, FulfillmentError> {
        self.tracker.create_shipment(plan).await
    }

    pub async fn update_shipment_status(
        &self,
        shipment_id: Uuid,
        status: ShipmentStatus,
        location: Option<String>,
        description: Option<String>,
    ) -> Result<Shipment, FulfillmentError> {
        self.tracker
            .update_status(shipment_id, status, location, description)
            .await
    }
}
