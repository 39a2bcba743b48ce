//! Shipment lifecycle tracking.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use parking_lot::RwLock;
use rand::{distributions::Alphanumeric, Rng};
use uuid::Uuid;

use crate::error::FulfillmentError;
use crate::models::plan::FulfillmentPlan;
use crate::models::shipment::{
    NotificationChannel, NotificationEvent, NotificationStatus, Shipment, ShipmentStatus,
    TrackingEvent,
};
use crate::repository::ShipmentStore;

const TRACKING_SUFFIX_LEN: usize = 12;

/// Creates shipments from accepted plans and advances them through the
/// delivery lifecycle. Updates to one shipment are serialized by its write
/// lock and applied in arrival order; different shipments never contend.
pub struct ShipmentTracker {
    shipments: DashMap<Uuid, Arc<RwLock<Shipment>>>,
    store: Arc<dyn ShipmentStore>,
    origin_location: String,
}

impl ShipmentTracker {
    pub fn new(store: Arc<dyn ShipmentStore>, origin_location: String) -> Self {
        Self {
            shipments: DashMap::new(),
            store,
            origin_location,
        }
    }

    /// Allocate a shipment for an accepted plan, seeded with one
    /// "preparing" event at the origin.
    pub async fn create_shipment(
        &self,
        plan: &FulfillmentPlan,
    ) -> Result<Shipment, FulfillmentError> {
        let now = Utc::now();
        let shipment = Shipment {
            id: Uuid::new_v4(),
            order_id: plan.order_id.clone(),
            tracking_number: generate_tracking_number(&plan.recommended_shipping.carrier),
            carrier: plan.recommended_shipping.carrier.clone(),
            status: ShipmentStatus::Preparing,
            current_location: None,
            estimated_delivery: plan.estimated_delivery,
            actual_delivery: None,
            events: vec![TrackingEvent {
                timestamp: now,
                location: self.origin_location.clone(),
                status: ShipmentStatus::Preparing,
                description: "Package is being prepared for shipment".to_string(),
            }],
            delivery_attempts: 0,
            customer_notifications: Vec::new(),
        };

        tracing::info!(
            shipment_id = %shipment.id,
            order_id = %shipment.order_id,
            tracking_number = %shipment.tracking_number,
            "Shipment created"
        );

        self.shipments
            .insert(shipment.id, Arc::new(RwLock::new(shipment.clone())));
        self.persist(&shipment).await;
        Ok(shipment)
    }

    /// Sole mutator of an existing shipment: appends exactly one tracking
    /// event and moves the status. Illegal moves are rejected without
    /// touching the history.
    pub async fn update_status(
        &self,
        shipment_id: Uuid,
        status: ShipmentStatus,
        location: Option<String>,
        description: Option<String>,
    ) -> Result<Shipment, FulfillmentError> {
        let lock = self.shipment_lock(shipment_id)?;

        let snapshot = {
            let mut shipment = lock.write();
            if !shipment.status.can_transition_to(status) {
                return Err(FulfillmentError::InvalidTransition {
                    from: shipment.status,
                    to: status,
                });
            }

            let now = Utc::now();
            let event_location = location
                .clone()
                .unwrap_or_else(|| "Unknown".to_string());
            let event_description =
                description.unwrap_or_else(|| format!("Status updated to {}", status));

            shipment.status = status;
            if location.is_some() {
                shipment.current_location = location;
            }
            if status == ShipmentStatus::Delivered {
                shipment.actual_delivery = Some(now);
            }
            shipment.events.push(TrackingEvent {
                timestamp: now,
                location: event_location,
                status,
                description: event_description,
            });
            shipment.clone()
        };

        tracing::info!(shipment_id = %shipment_id, status = %status, "Shipment status updated");
        self.persist(&snapshot).await;
        Ok(snapshot)
    }

    /// Called by the fulfillment context when a delivery attempt fails; the
    /// tracker never bumps the counter on its own.
    pub async fn record_delivery_attempt(
        &self,
        shipment_id: Uuid,
        location: Option<String>,
        description: Option<String>,
    ) -> Result<Shipment, FulfillmentError> {
        let lock = self.shipment_lock(shipment_id)?;

        let snapshot = {
            let mut shipment = lock.write();
            shipment.delivery_attempts += 1;
            let status = shipment.status;
            shipment.events.push(TrackingEvent {
                timestamp: Utc::now(),
                location: location.unwrap_or_else(|| "Unknown".to_string()),
                status,
                description: description
                    .unwrap_or_else(|| "Delivery attempt unsuccessful".to_string()),
            });
            shipment.clone()
        };

        self.persist(&snapshot).await;
        Ok(snapshot)
    }

    /// Record a customer-facing message against the shipment. Append-only;
    /// actual delivery of the message belongs to the notification layer.
    pub async fn record_notification(
        &self,
        shipment_id: Uuid,
        channel: NotificationChannel,
        message: impl Into<String>,
    ) -> Result<Shipment, FulfillmentError> {
        let lock = self.shipment_lock(shipment_id)?;

        let snapshot = {
            let mut shipment = lock.write();
            shipment.customer_notifications.push(NotificationEvent {
                timestamp: Utc::now(),
                channel,
                message: message.into(),
                status: NotificationStatus::Sent,
            });
            shipment.clone()
        };

        self.persist(&snapshot).await;
        Ok(snapshot)
    }

    /// Point-in-time snapshot of a shipment.
    pub fn shipment(&self, shipment_id: Uuid) -> Result<Shipment, FulfillmentError> {
        let lock = self.shipment_lock(shipment_id)?;
        let shipment = lock.read();
        Ok(shipment.clone())
    }

    fn shipment_lock(&self, shipment_id: Uuid) -> Result<Arc<RwLock<Shipment>>, FulfillmentError> {
        let entry = self
            .shipments
            .get(&shipment_id)
            .ok_or(FulfillmentError::ShipmentNotFound(shipment_id))?;
        Ok(Arc::clone(entry.value()))
    }

    async fn persist(&self, shipment: &Shipment) {
        // Persistence is not authoritative for the request/response cycle.
        if let Err(err) = self.store.persist_shipment(shipment).await {
            tracing::warn!(
                shipment_id = %shipment.id,
                error = %err,
                "Failed to persist shipment"
            );
        }
    }
}

/// Carrier-prefixed demo tracking number. The random suffix is not
/// collision checked; a production allocator belongs behind the carrier
/// API.
fn generate_tracking_number(carrier: &str) -> String {
    let prefix = match carrier {
        "UPS" => "1Z",
        "FedEx" => "96",
        "USPS" => "94",
        _ => "12",
    };
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TRACKING_SUFFIX_LEN)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect();
    format!("{}{}", prefix, suffix)
}
