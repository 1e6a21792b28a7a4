//! Demandes de gestion and their status workflow.
//!
//! A demande is the thread of negotiation between a propriétaire and a
//! gestionnaire. Its statut moves along a fixed, role-gated transition
//! table; every transition writes an automatic message into the
//! demande's thread and raises a notification for the counterparty.
//! [`workflow::WorkflowEngine`] owns that sequencing.

pub mod contrat;
pub mod error;
pub mod manager;
pub mod store;
pub mod types;
pub mod validator;
pub mod workflow;

pub use contrat::{creer_contrat, Contrat, ContratError};
pub use error::DemandeError;
pub use manager::DemandesManager;
pub use store::{DemandeStore, RemoteDemandeStore};
pub use types::{Demande, DemandeCreateInput};
pub use workflow::{
    available_actions, Acteur, TransitionAction, TransitionOutcome, WorkflowEngine, WorkflowError,
};
