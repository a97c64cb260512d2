//! Test utility for sending push notifications through Firebase Cloud
//! Messaging, addressed to a single device token or a broadcast topic.

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
