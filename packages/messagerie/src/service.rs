// ABOUTME: Messaging orchestration enforcing the rules for user-authored
// ABOUTME: messages before they are handed to the store

use std::sync::Arc;

use homees_core::DemandeStatut;
use tracing::{debug, info, warn};

use crate::error::MessagerieError;
use crate::store::MessageStore;
use crate::types::{Message, MessageAvecExpediteur, NouveauMessage};
use crate::validator::validate_envoi;

/// A user-authored message about to be sent.
#[derive(Debug, Clone)]
pub struct EnvoiMessage {
    pub expediteur_id: String,
    pub contenu: String,
}

/// Loads and appends thread messages for demandes.
pub struct MessagerieService {
    store: Arc<dyn MessageStore>,
}

impl MessagerieService {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Returns a demande's full thread, oldest message first.
    pub async fn fetch_messages(
        &self,
        demande_id: &str,
    ) -> Result<Vec<MessageAvecExpediteur>, MessagerieError> {
        debug!("Fetching messages for demande {}", demande_id);
        self.store.list_pour_demande(demande_id).await
    }

    /// Appends a user-authored message to a demande's thread.
    ///
    /// Refused when the demande is terminée or when the trimmed body is
    /// empty. The stored body is the trimmed form. After a successful
    /// insert the parent demande's maj_le is bumped on a best-effort
    /// basis; a failure there is logged and does not fail the send.
    pub async fn send_message(
        &self,
        demande_id: &str,
        statut: DemandeStatut,
        envoi: &EnvoiMessage,
    ) -> Result<Message, MessagerieError> {
        if statut.est_terminee() {
            return Err(MessagerieError::DemandeCloturee(demande_id.to_string()));
        }

        validate_envoi(demande_id, envoi).map_err(MessagerieError::Validation)?;

        let message = self
            .store
            .insert(NouveauMessage {
                demande_id: demande_id.to_string(),
                expediteur_id: envoi.expediteur_id.clone(),
                contenu: envoi.contenu.trim().to_string(),
            })
            .await?;

        info!("Sent message {} on demande {}", message.id, demande_id);

        if let Err(e) = self.store.touch_demande(demande_id).await {
            warn!(
                "Failed to refresh maj_le for demande {} after send: {}",
                demande_id, e
            );
        }

        Ok(message)
    }
}
