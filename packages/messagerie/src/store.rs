// ABOUTME: Message persistence trait and its REST-backed implementation
// ABOUTME: resolving senders through an embedded utilisateurs read

use async_trait::async_trait;
use chrono::Utc;
use homees_client::RestClient;
use homees_core::{generate_id, tables};
use serde::Deserialize;

use crate::error::MessagerieError;
use crate::types::{Expediteur, Message, MessageAvecExpediteur, NouveauMessage};

/// Persistence boundary for conversation threads.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Loads a demande's thread in chronological order, senders resolved.
    async fn list_pour_demande(
        &self,
        demande_id: &str,
    ) -> Result<Vec<MessageAvecExpediteur>, MessagerieError>;

    /// Appends a message to a thread and returns the stored row.
    async fn insert(&self, message: NouveauMessage) -> Result<Message, MessagerieError>;

    /// Bumps the parent demande's maj_le timestamp. Kept on this trait
    /// so message writes can refresh thread recency without a
    /// dependency on the demandes package.
    async fn touch_demande(&self, demande_id: &str) -> Result<(), MessagerieError>;
}

/// Wire shape of a message row with its embedded sender. The embed is
/// null when the expediteur no longer exists in utilisateurs.
#[derive(Debug, Deserialize)]
struct MessageRow {
    #[serde(flatten)]
    message: Message,
    #[serde(default)]
    expediteur: Option<Expediteur>,
}

impl MessageRow {
    fn into_avec_expediteur(self) -> MessageAvecExpediteur {
        let expediteur = self
            .expediteur
            .unwrap_or_else(|| Expediteur::inconnu(&self.message.expediteur_id));
        MessageAvecExpediteur {
            message: self.message,
            expediteur,
        }
    }
}

/// [`MessageStore`] backed by the hosted REST API.
pub struct RemoteMessageStore {
    client: RestClient,
}

impl RemoteMessageStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageStore for RemoteMessageStore {
    async fn list_pour_demande(
        &self,
        demande_id: &str,
    ) -> Result<Vec<MessageAvecExpediteur>, MessagerieError> {
        let query = [
            ("demande_id", format!("eq.{demande_id}")),
            (
                "select",
                format!("*,expediteur:{}(id,nom,prenom,role)", tables::UTILISATEURS),
            ),
            ("order", "envoye_le.asc".to_string()),
        ];
        let rows: Vec<MessageRow> = self.client.select(tables::MESSAGE, &query).await?;
        Ok(rows.into_iter().map(MessageRow::into_avec_expediteur).collect())
    }

    async fn insert(&self, message: NouveauMessage) -> Result<Message, MessagerieError> {
        let row = Message {
            id: generate_id(),
            demande_id: message.demande_id,
            expediteur_id: message.expediteur_id,
            contenu: message.contenu,
            envoye_le: Utc::now(),
        };
        let created: Message = self.client.insert(tables::MESSAGE, &row).await?;
        Ok(created)
    }

    async fn touch_demande(&self, demande_id: &str) -> Result<(), MessagerieError> {
        let patch = serde_json::json!({ "maj_le": Utc::now() });
        let query = [("id", format!("eq.{demande_id}"))];
        let _: Vec<serde_json::Value> =
            self.client.update(tables::DEMANDE, &query, &patch).await?;
        Ok(())
    }
}
