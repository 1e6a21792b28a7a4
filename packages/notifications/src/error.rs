use homees_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Store error: {0}")]
    Client(#[from] ClientError),

    #[error("Invalid notification payload: {0}")]
    Payload(#[from] serde_json::Error),
}
