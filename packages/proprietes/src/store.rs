// ABOUTME: Propriete persistence trait and its REST-backed implementation

use async_trait::async_trait;
use chrono::Utc;
use homees_client::RestClient;
use homees_core::{generate_id, tables};
use tracing::info;

use crate::error::ProprieteError;
use crate::types::{Propriete, ProprieteCreateInput};
use crate::validator::validate_propriete_create;

/// Persistence boundary for biens.
#[async_trait]
pub trait ProprieteStore: Send + Sync {
    /// Validates and declares a bien, returning the stored row.
    async fn create(&self, input: ProprieteCreateInput) -> Result<Propriete, ProprieteError>;

    /// Fetches one bien by id.
    async fn get(&self, id: &str) -> Result<Option<Propriete>, ProprieteError>;

    /// Lists a propriétaire's biens, newest first.
    async fn list_pour_proprietaire(
        &self,
        proprietaire_id: &str,
    ) -> Result<Vec<Propriete>, ProprieteError>;
}

/// [`ProprieteStore`] backed by the hosted REST API.
pub struct RemoteProprieteStore {
    client: RestClient,
}

impl RemoteProprieteStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProprieteStore for RemoteProprieteStore {
    async fn create(&self, input: ProprieteCreateInput) -> Result<Propriete, ProprieteError> {
        validate_propriete_create(&input).map_err(ProprieteError::Validation)?;

        let row = Propriete {
            id: generate_id(),
            proprietaire_id: input.proprietaire_id,
            adresse: input.adresse.trim().to_string(),
            ville: input.ville.trim().to_string(),
            code_postal: input.code_postal.trim().to_string(),
            surface_m2: input.surface_m2,
            nb_pieces: input.nb_pieces,
            loyer_mensuel: input.loyer_mensuel,
            cree_le: Utc::now(),
        };
        let created: Propriete = self.client.insert(tables::PROPRIETE, &row).await?;
        info!("Declared propriete {} in {}", created.id, created.ville);
        Ok(created)
    }

    async fn get(&self, id: &str) -> Result<Option<Propriete>, ProprieteError> {
        let query = [("id", format!("eq.{id}"))];
        Ok(self.client.select_one(tables::PROPRIETE, &query).await?)
    }

    async fn list_pour_proprietaire(
        &self,
        proprietaire_id: &str,
    ) -> Result<Vec<Propriete>, ProprieteError> {
        let query = [
            ("proprietaire_id", format!("eq.{proprietaire_id}")),
            ("order", "cree_le.desc".to_string()),
        ];
        Ok(self.client.select(tables::PROPRIETE, &query).await?)
    }
}
