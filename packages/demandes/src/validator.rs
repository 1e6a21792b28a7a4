// ABOUTME: Validation for demande creation input

use homees_core::ValidationError;

use crate::types::DemandeCreateInput;

pub fn validate_demande_create(input: &DemandeCreateInput) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if input.proprietaire_id.trim().is_empty() {
        errors.push(ValidationError::new(
            "proprietaire_id",
            "L'identifiant du propriétaire est requis",
        ));
    }

    if input.message_initial.trim().is_empty() {
        errors.push(ValidationError::new(
            "message_initial",
            "Le message de présentation ne peut pas être vide",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
