// ABOUTME: Shared command context wiring env configuration to the library crates
// ABOUTME: plus the formatting helpers used by the table views

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use homees_client::RestClient;
use homees_demandes::{DemandesManager, RemoteDemandeStore, WorkflowEngine};
use homees_messagerie::{MessagerieService, RemoteMessageStore};
use homees_notifications::RemoteNotificationStore;
use homees_profils::{ProfilStore, RemoteProfilStore};
use homees_state::Session;

/// Everything a command needs, built once from the environment.
pub struct Contexte {
    client: RestClient,
}

impl Contexte {
    /// Reads `HOMEES_PROJECT_URL` / `HOMEES_ANON_KEY` and builds the
    /// remote-store client the services share.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let client = RestClient::from_env()?;
        Ok(Self { client })
    }

    pub fn demandes(&self) -> DemandesManager {
        DemandesManager::new(Arc::new(RemoteDemandeStore::new(self.client.clone())))
    }

    pub fn workflow(&self) -> WorkflowEngine {
        WorkflowEngine::new(
            Arc::new(RemoteDemandeStore::new(self.client.clone())),
            Arc::new(RemoteMessageStore::new(self.client.clone())),
            Arc::new(RemoteNotificationStore::new(self.client.clone())),
        )
    }

    pub fn messagerie(&self) -> MessagerieService {
        MessagerieService::new(Arc::new(RemoteMessageStore::new(self.client.clone())))
    }

    pub fn profils(&self) -> Arc<dyn ProfilStore> {
        Arc::new(RemoteProfilStore::new(self.client.clone()))
    }
}

/// The acting utilisateur, from `HOMEES_UTILISATEUR_ID` / `HOMEES_ROLE`.
pub fn session_requise() -> Result<Session, Box<dyn std::error::Error>> {
    Session::from_env().ok_or_else(|| {
        "session absente : définissez HOMEES_UTILISATEUR_ID et HOMEES_ROLE (proprietaire ou gestionnaire)"
            .into()
    })
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local)
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let coupe: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", coupe)
    }
}
