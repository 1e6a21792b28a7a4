use homees_client::ClientError;
use homees_core::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MessagerieError {
    #[error("Validation errors: {0:?}")]
    Validation(Vec<ValidationError>),

    #[error("La demande {0} est clôturée, aucun message ne peut être envoyé")]
    DemandeCloturee(String),

    #[error("Store error: {0}")]
    Client(#[from] ClientError),
}

impl MessagerieError {
    pub fn validation(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}
