//! HTTP client for the hosted store's REST dialect

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Client for the hosted relational store
///
/// Rows are addressed as `{project_url}/rest/v1/{table}` with filters passed
/// as query parameters (`id=eq.<value>`, `order=<column>.asc`, ...). The
/// client is cheap to clone and safe to share.
#[derive(Clone)]
pub struct RestClient {
    http: Client,
    config: ClientConfig,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Build a client from environment variables
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.project_url.trim_end_matches('/'),
            table
        )
    }

    fn auth_header(&self) -> String {
        if let Some(token) = &self.config.access_token {
            format!("Bearer {}", token)
        } else {
            format!("Bearer {}", self.config.anon_key)
        }
    }

    /// Select rows from a table
    ///
    /// `query` is passed through as-is: `("select", "*")`,
    /// `("id", "eq.abc")`, `("order", "cree_le.desc")`, ...
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> ClientResult<Vec<T>> {
        debug!("GET {} ({} filters)", table, query.len());
        let response = self
            .http
            .get(self.table_url(table))
            .header("apikey", &self.config.anon_key)
            .header("Authorization", self.auth_header())
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Self::read_rows(table, response).await
    }

    /// Select at most one row from a table
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> ClientResult<Option<T>> {
        let mut query: Vec<(&str, String)> = query.to_vec();
        query.push(("limit", "1".to_string()));
        let mut rows = self.select::<T>(table, &query).await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.remove(0)))
        }
    }

    /// Insert one row and return the stored representation
    pub async fn insert<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        row: &B,
    ) -> ClientResult<T> {
        debug!("POST {}", table);
        let response = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.config.anon_key)
            .header("Authorization", self.auth_header())
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let mut rows: Vec<T> = Self::read_rows(table, response).await?;
        if rows.is_empty() {
            return Err(ClientError::api(format!(
                "insert into {} returned no representation",
                table
            )));
        }
        Ok(rows.remove(0))
    }

    /// Update the rows matched by `query`, returning the new representations
    pub async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
        patch: &B,
    ) -> ClientResult<Vec<T>> {
        debug!("PATCH {} ({} filters)", table, query.len());
        let response = self
            .http
            .patch(self.table_url(table))
            .header("apikey", &self.config.anon_key)
            .header("Authorization", self.auth_header())
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .query(query)
            .json(patch)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Self::read_rows(table, response).await
    }

    async fn read_rows<T: DeserializeOwned>(
        table: &str,
        response: reqwest::Response,
    ) -> ClientResult<Vec<T>> {
        match response.status() {
            status if status.is_success() => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| ClientError::Network(e.to_string()))?;
                serde_json::from_str(&body)
                    .map_err(|e| ClientError::Serialization(e.to_string()))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ClientError::auth("Invalid or expired token"))
            }
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(table.to_string())),
            status => {
                let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
                Err(ClientError::api(error_text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let client =
            RestClient::new(ClientConfig::new("https://exemple.homees.fr/", "anon")).unwrap();
        assert_eq!(
            client.table_url("demande"),
            "https://exemple.homees.fr/rest/v1/demande"
        );
    }

    #[test]
    fn test_auth_header_prefers_access_token() {
        let anon_only =
            RestClient::new(ClientConfig::new("https://exemple.homees.fr", "anon")).unwrap();
        assert_eq!(anon_only.auth_header(), "Bearer anon");

        let with_token = RestClient::new(
            ClientConfig::new("https://exemple.homees.fr", "anon").with_access_token("jwt"),
        )
        .unwrap();
        assert_eq!(with_token.auth_header(), "Bearer jwt");
    }
}
