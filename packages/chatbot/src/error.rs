use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatbotError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Chatbot endpoint error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ChatbotError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
