// ABOUTME: The demande status state machine: role-gated transition table,
// ABOUTME: French automatic-message templates and the three-step executor

use std::fmt;
use std::sync::Arc;

use homees_core::{DemandeStatut, UserRole};
use homees_messagerie::{Message, MessageStore, NouveauMessage};
use homees_notifications::{Notification, NotificationError, NotificationStore, NouvelleNotification};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::error::DemandeError;
use crate::store::DemandeStore;
use crate::types::Demande;

/// An action a utilisateur can request on a demande.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransitionAction {
    Accepter,
    Rejeter,
    Relancer,
    Terminer,
}

impl TransitionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionAction::Accepter => "accepter",
            TransitionAction::Rejeter => "rejeter",
            TransitionAction::Relancer => "relancer",
            TransitionAction::Terminer => "terminer",
        }
    }

    /// Statut the demande holds after this action.
    pub fn target(&self) -> DemandeStatut {
        match self {
            TransitionAction::Accepter => DemandeStatut::Acceptee,
            TransitionAction::Rejeter => DemandeStatut::Rejetee,
            TransitionAction::Relancer => DemandeStatut::Ouverte,
            TransitionAction::Terminer => DemandeStatut::Terminee,
        }
    }

    /// The single (statut, rôle) pair granted this action.
    pub fn allowed_from(&self) -> (DemandeStatut, UserRole) {
        match self {
            TransitionAction::Accepter => (DemandeStatut::Ouverte, UserRole::Gestionnaire),
            TransitionAction::Rejeter => (DemandeStatut::Ouverte, UserRole::Gestionnaire),
            TransitionAction::Relancer => (DemandeStatut::Rejetee, UserRole::Proprietaire),
            TransitionAction::Terminer => (DemandeStatut::Acceptee, UserRole::Gestionnaire),
        }
    }

    /// Button label shown to the acting utilisateur.
    pub fn libelle(&self) -> &'static str {
        match self {
            TransitionAction::Accepter => "Accepter",
            TransitionAction::Rejeter => "Refuser",
            TransitionAction::Relancer => "Relancer",
            TransitionAction::Terminer => "Clôturer",
        }
    }

    /// Body of the automatic message written into the thread when the
    /// transition succeeds.
    pub fn message_automatique(&self) -> &'static str {
        match self {
            TransitionAction::Accepter => {
                "Bonne nouvelle, votre demande de gestion a été acceptée ! \
                 Nous revenons vers vous très vite pour organiser la suite."
            }
            TransitionAction::Rejeter => {
                "Après étude de votre demande, nous ne sommes malheureusement \
                 pas en mesure d'y donner suite pour le moment."
            }
            TransitionAction::Relancer => {
                "Je me permets de relancer ma demande. Seriez-vous disponible \
                 pour en discuter à nouveau ?"
            }
            TransitionAction::Terminer => {
                "La mission est terminée, la demande est désormais clôturée. \
                 Merci pour votre confiance."
            }
        }
    }
}

impl fmt::Display for TransitionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Actions the transition table grants to a (statut, rôle) pair. Every
/// other pair gets the empty slice; callers render exactly these
/// controls and nothing else.
pub fn available_actions(statut: DemandeStatut, role: UserRole) -> &'static [TransitionAction] {
    match (statut, role) {
        (DemandeStatut::Ouverte, UserRole::Gestionnaire) => {
            &[TransitionAction::Accepter, TransitionAction::Rejeter]
        }
        (DemandeStatut::Rejetee, UserRole::Proprietaire) => &[TransitionAction::Relancer],
        (DemandeStatut::Acceptee, UserRole::Gestionnaire) => &[TransitionAction::Terminer],
        _ => &[],
    }
}

/// The utilisateur requesting a transition.
#[derive(Debug, Clone)]
pub struct Acteur {
    pub utilisateur_id: String,
    pub role: UserRole,
}

impl Acteur {
    pub fn new(utilisateur_id: impl Into<String>, role: UserRole) -> Self {
        Self {
            utilisateur_id: utilisateur_id.into(),
            role,
        }
    }
}

/// Everything a successful transition wrote.
#[derive(Debug, Clone)]
pub struct TransitionOutcome {
    pub demande: Demande,
    pub message: Message,
    pub notification: Notification,
}

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Transition {action} refusée : statut {statut}, rôle {role}")]
    TransitionRefusee {
        action: TransitionAction,
        statut: DemandeStatut,
        role: UserRole,
    },

    #[error("La demande {0} n'a pas de gestionnaire à notifier")]
    GestionnaireManquant(String),

    #[error("Status update failed: {0}")]
    Demande(#[from] DemandeError),

    #[error("Status updated, but the automatic message failed: {0}")]
    MessageAutomatique(#[source] homees_messagerie::MessagerieError),

    #[error("Status updated, but the notification failed: {0}")]
    Notification(#[source] NotificationError),
}

/// Executes status transitions with their side effects.
pub struct WorkflowEngine {
    demandes: Arc<dyn DemandeStore>,
    messages: Arc<dyn MessageStore>,
    notifications: Arc<dyn NotificationStore>,
}

impl WorkflowEngine {
    pub fn new(
        demandes: Arc<dyn DemandeStore>,
        messages: Arc<dyn MessageStore>,
        notifications: Arc<dyn NotificationStore>,
    ) -> Self {
        Self {
            demandes,
            messages,
            notifications,
        }
    }

    /// Runs a transition in strict order: status update, automatic
    /// message, notification to the counterparty. A failure after the
    /// first step leaves the status change in place; the error names
    /// the step that failed and no rollback is attempted.
    ///
    /// The guard rejects any (statut, rôle) pair the table does not
    /// grant before anything is written.
    pub async fn execute(
        &self,
        demande: &Demande,
        action: TransitionAction,
        acteur: &Acteur,
    ) -> Result<TransitionOutcome, WorkflowError> {
        if !available_actions(demande.statut, acteur.role).contains(&action) {
            return Err(WorkflowError::TransitionRefusee {
                action,
                statut: demande.statut,
                role: acteur.role,
            });
        }

        let destinataire = Self::destinataire(demande, acteur.role)?;
        let nouveau_statut = action.target();

        let demande_maj = self
            .demandes
            .update_statut(&demande.id, nouveau_statut)
            .await?;
        info!(
            "Demande {}: {} -> {} ({} par {})",
            demande.id,
            demande.statut.as_str(),
            nouveau_statut.as_str(),
            action.as_str(),
            acteur.utilisateur_id
        );

        // Written through the store, not the send service: the
        // transition's message must land even when the new statut is
        // terminee.
        let message = self
            .messages
            .insert(NouveauMessage {
                demande_id: demande.id.clone(),
                expediteur_id: acteur.utilisateur_id.clone(),
                contenu: action.message_automatique().to_string(),
            })
            .await
            .map_err(WorkflowError::MessageAutomatique)?;

        let notification = self
            .notifications
            .insert(NouvelleNotification::status_change(
                destinataire,
                &demande.id,
                nouveau_statut,
            ))
            .await
            .map_err(WorkflowError::Notification)?;

        Ok(TransitionOutcome {
            demande: demande_maj,
            message,
            notification,
        })
    }

    /// Counterparty of the acting role. Fails before any write when a
    /// relance targets a demande that never had a gestionnaire.
    fn destinataire(demande: &Demande, role: UserRole) -> Result<String, WorkflowError> {
        match role.contrepartie() {
            UserRole::Proprietaire => Ok(demande.proprietaire_id.clone()),
            UserRole::Gestionnaire => demande
                .gestionnaire_id
                .clone()
                .ok_or_else(|| WorkflowError::GestionnaireManquant(demande.id.clone())),
        }
    }
}
