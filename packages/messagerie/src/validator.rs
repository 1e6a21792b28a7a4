// ABOUTME: Validation for user-authored messages before they reach the store

use homees_core::ValidationError;

use crate::service::EnvoiMessage;

/// Validates a message about to be appended to a thread. The body is
/// judged on its trimmed form, so whitespace-only content is rejected.
pub fn validate_envoi(demande_id: &str, envoi: &EnvoiMessage) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if demande_id.trim().is_empty() {
        errors.push(ValidationError::new(
            "demande_id",
            "L'identifiant de la demande est requis",
        ));
    }

    if envoi.expediteur_id.trim().is_empty() {
        errors.push(ValidationError::new(
            "expediteur_id",
            "L'identifiant de l'expéditeur est requis",
        ));
    }

    if envoi.contenu.trim().is_empty() {
        errors.push(ValidationError::new(
            "contenu",
            "Le message ne peut pas être vide",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
