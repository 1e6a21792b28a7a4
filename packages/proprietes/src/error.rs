use homees_client::ClientError;
use homees_core::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProprieteError {
    #[error("Validation errors: {0:?}")]
    Validation(Vec<ValidationError>),

    #[error("Store error: {0}")]
    Client(#[from] ClientError),
}
