use homees_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfilError {
    #[error("Profil introuvable pour l'utilisateur {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Client(#[from] ClientError),
}
