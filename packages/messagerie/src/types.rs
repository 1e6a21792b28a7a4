// ABOUTME: Message entities exchanged inside a demande's conversation thread
// ABOUTME: including the resolved sender shape used for display

use chrono::{DateTime, Utc};
use homees_core::UserRole;
use serde::{Deserialize, Serialize};

/// Display name used when a message's sender cannot be resolved to a
/// known utilisateur.
pub const EXPEDITEUR_INCONNU: &str = "Utilisateur inconnu";

/// A single message inside a demande's conversation thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    pub demande_id: String,
    pub expediteur_id: String,
    pub contenu: String,
    pub envoye_le: DateTime<Utc>,
}

/// Input for appending a message to a thread. The id and timestamp are
/// assigned at insert time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NouveauMessage {
    pub demande_id: String,
    pub expediteur_id: String,
    pub contenu: String,
}

/// Sender identity as resolved from the utilisateurs table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expediteur {
    pub id: String,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: String,
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl Expediteur {
    /// Sender stand-in for messages whose author no longer resolves to
    /// a utilisateur row.
    pub fn inconnu(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nom: String::new(),
            prenom: String::new(),
            role: None,
        }
    }

    /// "Prénom Nom", falling back to [`EXPEDITEUR_INCONNU`] when both
    /// parts are blank.
    pub fn nom_affichage(&self) -> String {
        let complet = format!("{} {}", self.prenom, self.nom);
        let complet = complet.trim();
        if complet.is_empty() {
            EXPEDITEUR_INCONNU.to_string()
        } else {
            complet.to_string()
        }
    }
}

/// A message paired with its resolved sender, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageAvecExpediteur {
    pub message: Message,
    pub expediteur: Expediteur,
}
