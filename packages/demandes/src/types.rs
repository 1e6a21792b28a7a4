// ABOUTME: Demande entity as stored in the remote demande table

use chrono::{DateTime, Utc};
use homees_core::DemandeStatut;
use serde::{Deserialize, Serialize};

/// A demande de gestion sent by a propriétaire.
///
/// `gestionnaire_id` is empty while the demande sits in the open pool;
/// `propriete_id` is empty for demandes not yet tied to a bien.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Demande {
    pub id: String,
    pub proprietaire_id: String,
    #[serde(default)]
    pub gestionnaire_id: Option<String>,
    #[serde(default)]
    pub propriete_id: Option<String>,
    pub statut: DemandeStatut,
    pub message_initial: String,
    pub cree_le: DateTime<Utc>,
    pub maj_le: DateTime<Utc>,
}

/// Input for creating a demande. The id, statut and timestamps are
/// assigned at insert time; a new demande always starts `ouverte`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemandeCreateInput {
    pub proprietaire_id: String,
    #[serde(default)]
    pub gestionnaire_id: Option<String>,
    #[serde(default)]
    pub propriete_id: Option<String>,
    pub message_initial: String,
}
