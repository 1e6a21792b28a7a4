use homees_demandes::DemandeError;
use homees_notifications::NotificationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Demande error: {0}")]
    Demande(#[from] DemandeError),

    #[error("Notification error: {0}")]
    Notification(#[from] NotificationError),
}
