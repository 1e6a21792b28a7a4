use chrono::{DateTime, Utc};
use homees_core::DemandeStatut;
use serde::{Deserialize, Serialize};

use crate::error::NotificationError;

/// Notification kinds carried in the `type` column. Unknown tags from
/// newer writers deserialize as [`NotificationType::Autre`] instead of
/// failing the row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    StatusChange,
    #[serde(other)]
    Autre,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::StatusChange => "status_change",
            NotificationType::Autre => "autre",
        }
    }
}

/// A notification row addressed to one utilisateur.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub destinataire_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub payload: serde_json::Value,
    pub lue: bool,
    pub cree_le: DateTime<Utc>,
}

impl Notification {
    /// Decodes the payload of a `status_change` notification.
    pub fn status_change_payload(&self) -> Result<StatusChangePayload, NotificationError> {
        Ok(serde_json::from_value(self.payload.clone())?)
    }
}

/// Payload carried by `status_change` notifications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusChangePayload {
    pub demande_id: String,
    pub nouveau_statut: DemandeStatut,
}

/// Input for inserting a notification. Id, timestamp and the unread flag
/// are assigned at insert time.
#[derive(Debug, Clone)]
pub struct NouvelleNotification {
    pub destinataire_id: String,
    pub kind: NotificationType,
    pub payload: serde_json::Value,
}

impl NouvelleNotification {
    /// Builds the notification raised when a demande changes status.
    pub fn status_change(
        destinataire_id: impl Into<String>,
        demande_id: &str,
        nouveau_statut: DemandeStatut,
    ) -> Self {
        Self {
            destinataire_id: destinataire_id.into(),
            kind: NotificationType::StatusChange,
            payload: serde_json::json!({
                "demande_id": demande_id,
                "nouveau_statut": nouveau_statut,
            }),
        }
    }
}
