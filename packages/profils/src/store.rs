// ABOUTME: Profile and avis persistence trait and its REST-backed
// ABOUTME: implementation

use async_trait::async_trait;
use homees_client::RestClient;
use homees_core::tables;

use crate::error::ProfilError;
use crate::types::{Avis, ProfilGestionnaire, ProfilProprietaire};

/// Persistence boundary for profiles and avis.
#[async_trait]
pub trait ProfilStore: Send + Sync {
    /// Lists every gestionnaire profile, alphabetical by société.
    async fn list_gestionnaires(&self) -> Result<Vec<ProfilGestionnaire>, ProfilError>;

    /// Fetches one gestionnaire profile by utilisateur id.
    async fn get_gestionnaire(
        &self,
        utilisateur_id: &str,
    ) -> Result<Option<ProfilGestionnaire>, ProfilError>;

    /// Fetches one propriétaire profile by utilisateur id.
    async fn get_proprietaire(
        &self,
        utilisateur_id: &str,
    ) -> Result<Option<ProfilProprietaire>, ProfilError>;

    /// Lists every avis, used to aggregate notes for the comparator.
    async fn list_avis(&self) -> Result<Vec<Avis>, ProfilError>;

    /// Lists the avis left on one gestionnaire, newest first.
    async fn list_avis_pour(&self, gestionnaire_id: &str) -> Result<Vec<Avis>, ProfilError>;
}

/// [`ProfilStore`] backed by the hosted REST API.
pub struct RemoteProfilStore {
    client: RestClient,
}

impl RemoteProfilStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfilStore for RemoteProfilStore {
    async fn list_gestionnaires(&self) -> Result<Vec<ProfilGestionnaire>, ProfilError> {
        let query = [("order", "nom_societe.asc".to_string())];
        Ok(self
            .client
            .select(tables::PROFIL_GESTIONNAIRE, &query)
            .await?)
    }

    async fn get_gestionnaire(
        &self,
        utilisateur_id: &str,
    ) -> Result<Option<ProfilGestionnaire>, ProfilError> {
        let query = [("utilisateur_id", format!("eq.{utilisateur_id}"))];
        Ok(self
            .client
            .select_one(tables::PROFIL_GESTIONNAIRE, &query)
            .await?)
    }

    async fn get_proprietaire(
        &self,
        utilisateur_id: &str,
    ) -> Result<Option<ProfilProprietaire>, ProfilError> {
        let query = [("utilisateur_id", format!("eq.{utilisateur_id}"))];
        Ok(self
            .client
            .select_one(tables::PROFIL_PROPRIETAIRE, &query)
            .await?)
    }

    async fn list_avis(&self) -> Result<Vec<Avis>, ProfilError> {
        Ok(self.client.select(tables::AVIS, &[]).await?)
    }

    async fn list_avis_pour(&self, gestionnaire_id: &str) -> Result<Vec<Avis>, ProfilError> {
        let query = [
            ("gestionnaire_id", format!("eq.{gestionnaire_id}")),
            ("order", "cree_le.desc".to_string()),
        ];
        Ok(self.client.select(tables::AVIS, &query).await?)
    }
}
