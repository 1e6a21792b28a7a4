// ABOUTME: Badge counts shown in the sidebar, re-fetched on invalidation

use std::sync::Arc;

use homees_core::DemandeStatut;
use homees_demandes::DemandesManager;
use homees_notifications::NotificationStore;

use crate::error::StateError;
use crate::invalidation::InvalidationKey;
use crate::session::Session;

/// The two sidebar badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarCounts {
    pub demandes_ouvertes: usize,
    pub notifications_non_lues: usize,
}

/// Computes the sidebar badges for one session.
pub struct SidebarService {
    session: Session,
    demandes: DemandesManager,
    notifications: Arc<dyn NotificationStore>,
}

impl SidebarService {
    pub fn new(
        session: Session,
        demandes: DemandesManager,
        notifications: Arc<dyn NotificationStore>,
    ) -> Self {
        Self {
            session,
            demandes,
            notifications,
        }
    }

    /// The keys whose invalidation should trigger a [`refresh`].
    ///
    /// [`refresh`]: SidebarService::refresh
    pub fn watch_keys(&self) -> [InvalidationKey; 2] {
        [
            InvalidationKey::Demandes,
            InvalidationKey::Notifications {
                destinataire_id: self.session.utilisateur_id.clone(),
            },
        ]
    }

    /// Re-fetches both counts wholesale.
    pub async fn refresh(&self) -> Result<SidebarCounts, StateError> {
        let visibles = self
            .demandes
            .list_pour(self.session.role, &self.session.utilisateur_id)
            .await?;
        let demandes_ouvertes = visibles
            .iter()
            .filter(|d| d.statut == DemandeStatut::Ouverte)
            .count();

        let notifications_non_lues = self
            .notifications
            .count_non_lues(&self.session.utilisateur_id)
            .await?;

        Ok(SidebarCounts {
            demandes_ouvertes,
            notifications_non_lues,
        })
    }
}
