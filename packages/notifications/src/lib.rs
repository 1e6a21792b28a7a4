// ABOUTME: Notification entity and store, written as a side effect of status
// ABOUTME: transitions and read back for the unread sidebar badge

pub mod error;
pub mod store;
pub mod types;

pub use error::NotificationError;
pub use store::{NotificationStore, RemoteNotificationStore};
pub use types::{Notification, NotificationType, NouvelleNotification, StatusChangePayload};
