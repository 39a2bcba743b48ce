//! Parcelcore - fulfillment planning and shipment tracking engine
//!
//! Given an order's physical items and a customer's delivery preferences,
//! the engine enumerates candidate packaging and shipping options, scores
//! every pair against the preferences, assembles a fulfillment plan around
//! the winner, and tracks the resulting shipment through its delivery
//! lifecycle. Geography, carrier rates, and persistence sit behind
//! replaceable collaborator traits.

pub mod config;
pub mod error;
pub mod geo;
pub mod logger;
pub mod models;
pub mod rates;
pub mod repository;
pub mod services;

pub use config::Config;
pub use error::FulfillmentError;
pub use services::FulfillmentService;
pub use services::ShipmentTracker;
