use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Preparing,
    Shipped,
    InTransit,
    OutForDelivery,
    Delivered,
    Exception,
}

impl ShipmentStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// The enforced lifecycle graph. Legal moves: the forward chain
    /// preparing -> shipped -> in_transit -> out_for_delivery -> delivered,
    /// a repeat of the current status (carrier location scans), exception
    /// from any non-terminal status, and recovery from exception back into
    /// transit or final delivery approach. Delivered is terminal.
    pub fn can_transition_to(self, next: ShipmentStatus) -> bool {
        use ShipmentStatus::*;
        match (self, next) {
            (Delivered, _) => false,
            (current, next) if current == next => true,
            (_, Exception) => true,
            (Preparing, Shipped) => true,
            (Shipped, InTransit) => true,
            (InTransit, OutForDelivery) => true,
            (OutForDelivery, Delivered) => true,
            (Exception, InTransit) | (Exception, OutForDelivery) => true,
            _ => false,
        }
    }

    /// Rough delivery progress for customer-facing displays.
    pub fn progress_percent(self) -> u8 {
        match self {
            Self::Preparing => 10,
            Self::Shipped => 25,
            Self::InTransit => 60,
            Self::OutForDelivery => 85,
            Self::Delivered => 100,
            Self::Exception => 50,
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Preparing => "preparing",
            Self::Shipped => "shipped",
            Self::InTransit => "in_transit",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Exception => "exception",
        };
        write!(f, "{}", label)
    }
}

/// One entry in a shipment's append-only movement history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub status: ShipmentStatus,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    Email,
    Sms,
    Push,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    Sent,
    Delivered,
    Failed,
}

/// One customer-facing message recorded against a shipment. The engine only
/// records these entries; delivery transport lives elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub timestamp: DateTime<Utc>,
    pub channel: NotificationChannel,
    pub message: String,
    pub status: NotificationStatus,
}

/// The stateful tracked object created once a plan is accepted. Mutated
/// only by the shipment tracker; both histories are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: Uuid,
    pub order_id: String,
    pub tracking_number: String,
    pub carrier: String,
    pub status: ShipmentStatus,
    pub current_location: Option<String>,
    pub estimated_delivery: DateTime<Utc>,
    pub actual_delivery: Option<DateTime<Utc>>,
    pub events: Vec<TrackingEvent>,
    pub delivery_attempts: u32,
    pub customer_notifications: Vec<NotificationEvent>,
}

impl Shipment {
    /// Carrier tracking page for this shipment, when the carrier is known.
    pub fn tracking_url(&self) -> Option<String> {
        let base = match self.carrier.as_str() {
            "UPS" => "https://www.ups.com/track?track=yes&trackNums=",
            "FedEx" => "https://www.fedex.com/fedextrack/?tracknumber=",
            "USPS" => "https://tools.usps.com/go/TrackConfirmAction?qtc_tLabels1=",
            _ => return None,
        };
        Some(format!("{}{}", base, self.tracking_number))
    }
}
