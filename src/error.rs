use thiserror::Error;
use uuid::Uuid;

use crate::models::shipment::ShipmentStatus;

/// Engine-level failures, split so a calling HTTP layer can map them to
/// 4xx (client) vs 5xx (dependency/internal) without string matching.
#[derive(Debug, Error)]
pub enum FulfillmentError {
    #[error("invalid fulfillment request: {0}")]
    InvalidRequest(String),

    #[error("shipment {0} not found")]
    ShipmentNotFound(Uuid),

    #[error("illegal shipment transition: {from} -> {to}")]
    InvalidTransition {
        from: ShipmentStatus,
        to: ShipmentStatus,
    },

    #[error("dependency failure: {0}")]
    Dependency(#[from] anyhow::Error),
}

impl FulfillmentError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest(_) | Self::ShipmentNotFound(_) | Self::InvalidTransition { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_and_server_errors_are_distinguished() {
        assert!(FulfillmentError::InvalidRequest("empty".into()).is_client_error());
        assert!(FulfillmentError::ShipmentNotFound(Uuid::new_v4()).is_client_error());
        assert!(FulfillmentError::InvalidTransition {
            from: ShipmentStatus::Preparing,
            to: ShipmentStatus::Delivered,
        }
        .is_client_error());
        assert!(!FulfillmentError::Dependency(anyhow::anyhow!("rate service down")).is_client_error());
    }
}
