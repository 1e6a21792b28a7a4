// ABOUTME: Remote chatbot boundary: the hosted endpoint behind a trait,
// ABOUTME: with an explicit fallback signal in the reply

use std::time::Duration;

use async_trait::async_trait;
use homees_config::{env_string, HOMEES_CHATBOT_URL};
use serde::{Deserialize, Serialize};

use crate::error::ChatbotError;
use crate::types::ChatMessage;

const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Answer of the hosted endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteReply {
    /// The endpoint produced an answer to forward verbatim.
    Reponse(String),
    /// The endpoint asks the caller to answer locally.
    Fallback,
}

/// The hosted chatbot endpoint. Implementations take the latest user
/// message plus a short trailing history window.
#[async_trait]
pub trait ChatbotRemote: Send + Sync {
    async fn demander(
        &self,
        message: &str,
        historique: &[ChatMessage],
    ) -> Result<RemoteReply, ChatbotError>;
}

#[derive(Serialize)]
struct ChatbotRequete<'a> {
    message: &'a str,
    historique: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatbotReponse {
    #[serde(default)]
    reponse: Option<String>,
    #[serde(default)]
    fallback: bool,
}

/// [`ChatbotRemote`] talking JSON to the hosted endpoint.
pub struct HttpChatbotRemote {
    http: reqwest::Client,
    url: String,
}

impl HttpChatbotRemote {
    pub fn new(url: impl Into<String>) -> Result<Self, ChatbotError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ChatbotError::Configuration(e.to_string()))?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Builds the client from `HOMEES_CHATBOT_URL`.
    pub fn from_env() -> Result<Self, ChatbotError> {
        let url = env_string(HOMEES_CHATBOT_URL).ok_or_else(|| {
            ChatbotError::Configuration(format!("{HOMEES_CHATBOT_URL} is not set"))
        })?;
        Self::new(url)
    }
}

#[async_trait]
impl ChatbotRemote for HttpChatbotRemote {
    async fn demander(
        &self,
        message: &str,
        historique: &[ChatMessage],
    ) -> Result<RemoteReply, ChatbotError> {
        let requete = ChatbotRequete {
            message,
            historique,
        };
        let response = self.http.post(&self.url).json(&requete).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatbotError::Api(format!(
                "chatbot endpoint returned {status}"
            )));
        }

        let payload: ChatbotReponse = response
            .json()
            .await
            .map_err(|e| ChatbotError::Api(e.to_string()))?;

        Ok(match payload.reponse {
            Some(reponse) if !payload.fallback => RemoteReply::Reponse(reponse),
            _ => RemoteReply::Fallback,
        })
    }
}
