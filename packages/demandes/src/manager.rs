// ABOUTME: Demande CRUD orchestration: validation, creation and role-aware
// ABOUTME: listing over the store trait

use std::collections::HashSet;
use std::sync::Arc;

use homees_core::UserRole;
use tracing::info;

use crate::error::DemandeError;
use crate::store::DemandeStore;
use crate::types::{Demande, DemandeCreateInput};
use crate::validator::validate_demande_create;

pub struct DemandesManager {
    store: Arc<dyn DemandeStore>,
}

impl DemandesManager {
    pub fn new(store: Arc<dyn DemandeStore>) -> Self {
        Self { store }
    }

    /// Validates and creates a demande. The stored message_initial is
    /// the trimmed form.
    pub async fn create(&self, mut input: DemandeCreateInput) -> Result<Demande, DemandeError> {
        validate_demande_create(&input).map_err(DemandeError::Validation)?;
        input.message_initial = input.message_initial.trim().to_string();

        let demande = self.store.create(input).await?;
        info!(
            "Created demande {} for proprietaire {}",
            demande.id, demande.proprietaire_id
        );
        Ok(demande)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Demande>, DemandeError> {
        self.store.get(id).await
    }

    /// Lists the demandes visible to a utilisateur. A propriétaire sees
    /// their own; a gestionnaire sees their assigned demandes followed
    /// by the open pool, without duplicates.
    pub async fn list_pour(
        &self,
        role: UserRole,
        utilisateur_id: &str,
    ) -> Result<Vec<Demande>, DemandeError> {
        match role {
            UserRole::Proprietaire => self.store.list_pour_proprietaire(utilisateur_id).await,
            UserRole::Gestionnaire => {
                let mut demandes = self.store.list_pour_gestionnaire(utilisateur_id).await?;
                let connues: HashSet<String> =
                    demandes.iter().map(|d| d.id.clone()).collect();
                for ouverte in self.store.list_ouvertes().await? {
                    if !connues.contains(&ouverte.id) {
                        demandes.push(ouverte);
                    }
                }
                Ok(demandes)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use homees_core::DemandeStatut;
    use mockall::mock;
    use mockall::predicate::*;

    mock! {
        Store {}

        #[async_trait::async_trait]
        impl DemandeStore for Store {
            async fn create(&self, input: DemandeCreateInput) -> Result<Demande, DemandeError>;
            async fn get(&self, id: &str) -> Result<Option<Demande>, DemandeError>;
            async fn list_pour_proprietaire(
                &self,
                proprietaire_id: &str,
            ) -> Result<Vec<Demande>, DemandeError>;
            async fn list_pour_gestionnaire(
                &self,
                gestionnaire_id: &str,
            ) -> Result<Vec<Demande>, DemandeError>;
            async fn list_ouvertes(&self) -> Result<Vec<Demande>, DemandeError>;
            async fn update_statut(
                &self,
                id: &str,
                statut: DemandeStatut,
            ) -> Result<Demande, DemandeError>;
        }
    }

    fn demande(id: &str, statut: DemandeStatut, gestionnaire_id: Option<&str>) -> Demande {
        let now = Utc::now();
        Demande {
            id: id.to_string(),
            proprietaire_id: "u-prop".to_string(),
            gestionnaire_id: gestionnaire_id.map(str::to_string),
            propriete_id: None,
            statut,
            message_initial: "Bonjour".to_string(),
            cree_le: now,
            maj_le: now,
        }
    }

    #[tokio::test]
    async fn test_create_trim_le_message_initial() {
        let mut store = MockStore::new();
        store
            .expect_create()
            .withf(|input: &DemandeCreateInput| input.message_initial == "Je cherche un gestionnaire.")
            .times(1)
            .returning(|input| {
                let now = Utc::now();
                Ok(Demande {
                    id: "d-1".to_string(),
                    proprietaire_id: input.proprietaire_id,
                    gestionnaire_id: input.gestionnaire_id,
                    propriete_id: input.propriete_id,
                    statut: DemandeStatut::Ouverte,
                    message_initial: input.message_initial,
                    cree_le: now,
                    maj_le: now,
                })
            });
        let manager = DemandesManager::new(Arc::new(store));

        let created = manager
            .create(DemandeCreateInput {
                proprietaire_id: "u-prop".to_string(),
                gestionnaire_id: None,
                propriete_id: None,
                message_initial: "  Je cherche un gestionnaire.  ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.statut, DemandeStatut::Ouverte);
    }

    #[tokio::test]
    async fn test_create_invalide_sans_appel_store() {
        let store = MockStore::new();
        let manager = DemandesManager::new(Arc::new(store));

        let result = manager
            .create(DemandeCreateInput {
                proprietaire_id: "u-prop".to_string(),
                gestionnaire_id: None,
                propriete_id: None,
                message_initial: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(DemandeError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_gestionnaire_fusionne_pool_sans_doublon() {
        let mut store = MockStore::new();
        store
            .expect_list_pour_gestionnaire()
            .with(eq("u-gest"))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    demande("d-1", DemandeStatut::Acceptee, Some("u-gest")),
                    demande("d-2", DemandeStatut::Ouverte, Some("u-gest")),
                ])
            });
        store.expect_list_ouvertes().times(1).returning(|| {
            Ok(vec![
                demande("d-2", DemandeStatut::Ouverte, Some("u-gest")),
                demande("d-3", DemandeStatut::Ouverte, None),
            ])
        });
        let manager = DemandesManager::new(Arc::new(store));

        let visibles = manager
            .list_pour(UserRole::Gestionnaire, "u-gest")
            .await
            .unwrap();

        let ids: Vec<&str> = visibles.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d-1", "d-2", "d-3"]);
    }

    #[tokio::test]
    async fn test_list_proprietaire_ne_voit_que_les_siennes() {
        let mut store = MockStore::new();
        store
            .expect_list_pour_proprietaire()
            .with(eq("u-prop"))
            .times(1)
            .returning(|_| Ok(vec![demande("d-1", DemandeStatut::Ouverte, None)]));
        let manager = DemandesManager::new(Arc::new(store));

        let visibles = manager
            .list_pour(UserRole::Proprietaire, "u-prop")
            .await
            .unwrap();

        assert_eq!(visibles.len(), 1);
    }
}
