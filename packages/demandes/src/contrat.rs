// ABOUTME: Contract creation stub reachable from an accepted demande

use chrono::{DateTime, Utc};
use homees_core::DemandeStatut;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Demande;

/// A gestion contract between the two parties of a demande. Only the
/// `brouillon` statut exists today.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contrat {
    pub id: String,
    pub demande_id: String,
    pub proprietaire_id: String,
    pub gestionnaire_id: String,
    pub statut: String,
    pub cree_le: DateTime<Utc>,
}

#[derive(Error, Debug)]
pub enum ContratError {
    #[error("Un contrat ne peut être créé que depuis une demande acceptée (demande {0})")]
    DemandeNonAcceptee(String),

    #[error("La génération de contrat n'est pas encore disponible")]
    NonImplemente,
}

/// Entry point of the contract flow. Only reachable from an `acceptee`
/// demande; the generation itself is not implemented yet.
// TODO: replace the stub once contract generation lands server-side
pub fn creer_contrat(demande: &Demande) -> Result<Contrat, ContratError> {
    if demande.statut != DemandeStatut::Acceptee {
        return Err(ContratError::DemandeNonAcceptee(demande.id.clone()));
    }
    Err(ContratError::NonImplemente)
}
