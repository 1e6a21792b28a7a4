// ABOUTME: Notification persistence trait and its REST-backed implementation

use async_trait::async_trait;
use chrono::Utc;
use homees_client::RestClient;
use homees_core::{generate_id, tables};
use tracing::debug;

use crate::error::NotificationError;
use crate::types::{Notification, NouvelleNotification};

/// Persistence boundary for notifications.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Inserts a notification and returns the stored row.
    async fn insert(
        &self,
        notification: NouvelleNotification,
    ) -> Result<Notification, NotificationError>;

    /// Lists a utilisateur's notifications, newest first.
    async fn list_pour(&self, destinataire_id: &str)
        -> Result<Vec<Notification>, NotificationError>;

    /// Counts a utilisateur's unread notifications.
    async fn count_non_lues(&self, destinataire_id: &str) -> Result<usize, NotificationError>;
}

/// [`NotificationStore`] backed by the hosted REST API.
pub struct RemoteNotificationStore {
    client: RestClient,
}

impl RemoteNotificationStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationStore for RemoteNotificationStore {
    async fn insert(
        &self,
        notification: NouvelleNotification,
    ) -> Result<Notification, NotificationError> {
        let row = Notification {
            id: generate_id(),
            destinataire_id: notification.destinataire_id,
            kind: notification.kind,
            payload: notification.payload,
            lue: false,
            cree_le: Utc::now(),
        };
        debug!("Inserting {} notification for {}", row.kind.as_str(), row.destinataire_id);
        let created: Notification = self.client.insert(tables::NOTIFICATION, &row).await?;
        Ok(created)
    }

    async fn list_pour(
        &self,
        destinataire_id: &str,
    ) -> Result<Vec<Notification>, NotificationError> {
        let query = [
            ("destinataire_id", format!("eq.{destinataire_id}")),
            ("order", "cree_le.desc".to_string()),
        ];
        Ok(self.client.select(tables::NOTIFICATION, &query).await?)
    }

    async fn count_non_lues(&self, destinataire_id: &str) -> Result<usize, NotificationError> {
        let query = [
            ("destinataire_id", format!("eq.{destinataire_id}")),
            ("lue", "eq.false".to_string()),
            ("select", "id".to_string()),
        ];
        let rows: Vec<serde_json::Value> =
            self.client.select(tables::NOTIFICATION, &query).await?;
        Ok(rows.len())
    }
}
