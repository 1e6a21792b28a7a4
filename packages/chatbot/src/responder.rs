// ABOUTME: Answer orchestration: remote first, local keyword table on
// ABOUTME: any miss

use std::sync::Arc;

use tracing::{debug, warn};

use crate::fallback::FallbackTable;
use crate::remote::{ChatbotRemote, RemoteReply};
use crate::types::{ChatMessage, HISTORY_WINDOW};

/// Answers visitor questions. Never fails: any remote problem lands on
/// the local table.
pub struct Responder {
    remote: Arc<dyn ChatbotRemote>,
    fallback: FallbackTable,
}

impl Responder {
    pub fn new(remote: Arc<dyn ChatbotRemote>, fallback: FallbackTable) -> Self {
        Self { remote, fallback }
    }

    /// Sends the question with the last [`HISTORY_WINDOW`] history
    /// entries. Falls back locally on transport errors, endpoint
    /// errors and explicit fallback replies.
    pub async fn repondre(&self, message: &str, historique: &[ChatMessage]) -> String {
        let fenetre = if historique.len() > HISTORY_WINDOW {
            &historique[historique.len() - HISTORY_WINDOW..]
        } else {
            historique
        };

        match self.remote.demander(message, fenetre).await {
            Ok(RemoteReply::Reponse(reponse)) => reponse,
            Ok(RemoteReply::Fallback) => {
                debug!("Chatbot endpoint deferred, answering locally");
                self.fallback.reponse_pour(message).to_string()
            }
            Err(e) => {
                warn!("Chatbot endpoint failed, answering locally: {}", e);
                self.fallback.reponse_pour(message).to_string()
            }
        }
    }
}
