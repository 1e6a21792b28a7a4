//! Homees remote-store client
//!
//! Every entity in Homees is owned by the hosted relational store; this
//! package is the only place that talks to it. It speaks the store's REST
//! dialect over HTTPS and fans realtime change events out to the rest of
//! the application.

pub mod client;
pub mod config;
pub mod error;
pub mod realtime;

// Re-export commonly used types
pub use client::RestClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use realtime::{ChangeEvent, ChangeKind, RealtimeBridge, Subscription};
