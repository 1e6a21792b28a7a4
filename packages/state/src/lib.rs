//! Application state for Homees clients.
//!
//! The remote store owns every entity; clients hold nothing but their
//! most recent fetch. This package keeps those local mirrors honest:
//! change events coming off the realtime bridge are mapped to typed
//! [`InvalidationKey`]s, watchers registered on the [`AppStore`] are
//! told to re-fetch wholesale, and dropping a watch handle detaches it.

pub mod error;
pub mod invalidation;
pub mod resource;
pub mod session;
pub mod sidebar;
pub mod store;

pub use error::StateError;
pub use invalidation::{keys_for_event, InvalidationKey};
pub use resource::Resource;
pub use session::Session;
pub use sidebar::{SidebarCounts, SidebarService};
pub use store::{AppStore, WatchHandle};
