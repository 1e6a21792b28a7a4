use homees_client::ClientError;
use homees_core::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemandeError {
    #[error("Validation errors: {0:?}")]
    Validation(Vec<ValidationError>),

    #[error("Demande introuvable : {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Client(#[from] ClientError),
}
