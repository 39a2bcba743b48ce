//! Persistence collaborators.
//!
//! Persistence is fire-and-forget and never authoritative for a single
//! request/response cycle: a failed write is logged by the caller and the
//! computed plan or shipment is still returned.

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::plan::FulfillmentPlan;
use crate::models::shipment::Shipment;

#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn persist_plan(&self, plan: &FulfillmentPlan) -> Result<()>;
}

#[async_trait]
pub trait ShipmentStore: Send + Sync {
    async fn persist_shipment(&self, shipment: &Shipment) -> Result<()>;
}

/// In-memory plan store, keyed by plan id. Stand-in for a real database.
#[derive(Default)]
pub struct InMemoryPlanStore {
    plans: DashMap<Uuid, FulfillmentPlan>,
}

impl InMemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: Uuid) -> Option<FulfillmentPlan> {
        self.plans.get(&id).map(|plan| plan.clone())
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn persist_plan(&self, plan: &FulfillmentPlan) -> Result<()> {
        self.plans.insert(plan.id, plan.clone());
        Ok(())
    }
}

/// In-memory shipment store, keyed by shipment id. Later writes for the
/// same shipment replace earlier ones.
#[derive(Default)]
pub struct InMemoryShipmentStore {
    shipments: DashMap<Uuid, Shipment>,
}

impl InMemoryShipmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: Uuid) -> Option<Shipment> {
        self.shipments.get(&id).map(|shipment| shipment.clone())
    }

    pub fn len(&self) -> usize {
        self.shipments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }
}

#[async_trait]
impl ShipmentStore for InMemoryShipmentStore {
    async fn persist_shipment(&self, shipment: &Shipment) -> Result<()> {
        self.shipments.insert(shipment.id, shipment.clone());
        Ok(())
    }
}
