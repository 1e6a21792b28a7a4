// ABOUTME: Demande persistence trait and its REST-backed implementation

use async_trait::async_trait;
use chrono::Utc;
use homees_client::RestClient;
use homees_core::{generate_id, tables, DemandeStatut};

use crate::error::DemandeError;
use crate::types::{Demande, DemandeCreateInput};

/// Persistence boundary for demandes.
#[async_trait]
pub trait DemandeStore: Send + Sync {
    /// Inserts a new demande, statut `ouverte`, and returns the stored row.
    async fn create(&self, input: DemandeCreateInput) -> Result<Demande, DemandeError>;

    /// Fetches one demande by id.
    async fn get(&self, id: &str) -> Result<Option<Demande>, DemandeError>;

    /// Lists a propriétaire's demandes, most recently updated first.
    async fn list_pour_proprietaire(
        &self,
        proprietaire_id: &str,
    ) -> Result<Vec<Demande>, DemandeError>;

    /// Lists the demandes assigned to a gestionnaire, most recently
    /// updated first.
    async fn list_pour_gestionnaire(
        &self,
        gestionnaire_id: &str,
    ) -> Result<Vec<Demande>, DemandeError>;

    /// Lists the open pool: every demande still `ouverte`, newest first.
    async fn list_ouvertes(&self) -> Result<Vec<Demande>, DemandeError>;

    /// Writes a new statut and bumps `maj_le`. The write is
    /// unconditional; the row's previous statut is not compared, so
    /// racing writers resolve to whichever write lands last.
    async fn update_statut(
        &self,
        id: &str,
        statut: DemandeStatut,
    ) -> Result<Demande, DemandeError>;
}

/// [`DemandeStore`] backed by the hosted REST API.
pub struct RemoteDemandeStore {
    client: RestClient,
}

impl RemoteDemandeStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DemandeStore for RemoteDemandeStore {
    async fn create(&self, input: DemandeCreateInput) -> Result<Demande, DemandeError> {
        let now = Utc::now();
        let row = Demande {
            id: generate_id(),
            proprietaire_id: input.proprietaire_id,
            gestionnaire_id: input.gestionnaire_id,
            propriete_id: input.propriete_id,
            statut: DemandeStatut::Ouverte,
            message_initial: input.message_initial,
            cree_le: now,
            maj_le: now,
        };
        let created: Demande = self.client.insert(tables::DEMANDE, &row).await?;
        Ok(created)
    }

    async fn get(&self, id: &str) -> Result<Option<Demande>, DemandeError> {
        let query = [("id", format!("eq.{id}"))];
        Ok(self.client.select_one(tables::DEMANDE, &query).await?)
    }

    async fn list_pour_proprietaire(
        &self,
        proprietaire_id: &str,
    ) -> Result<Vec<Demande>, DemandeError> {
        let query = [
            ("proprietaire_id", format!("eq.{proprietaire_id}")),
            ("order", "maj_le.desc".to_string()),
        ];
        Ok(self.client.select(tables::DEMANDE, &query).await?)
    }

    async fn list_pour_gestionnaire(
        &self,
        gestionnaire_id: &str,
    ) -> Result<Vec<Demande>, DemandeError> {
        let query = [
            ("gestionnaire_id", format!("eq.{gestionnaire_id}")),
            ("order", "maj_le.desc".to_string()),
        ];
        Ok(self.client.select(tables::DEMANDE, &query).await?)
    }

    async fn list_ouvertes(&self) -> Result<Vec<Demande>, DemandeError> {
        let query = [
            ("statut", format!("eq.{}", DemandeStatut::Ouverte.as_str())),
            ("order", "cree_le.desc".to_string()),
        ];
        Ok(self.client.select(tables::DEMANDE, &query).await?)
    }

    async fn update_statut(
        &self,
        id: &str,
        statut: DemandeStatut,
    ) -> Result<Demande, DemandeError> {
        let patch = serde_json::json!({
            "statut": statut,
            "maj_le": Utc::now(),
        });
        let query = [("id", format!("eq.{id}"))];
        let rows: Vec<Demande> = self.client.update(tables::DEMANDE, &query, &patch).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| DemandeError::NotFound(id.to_string()))
    }
}
