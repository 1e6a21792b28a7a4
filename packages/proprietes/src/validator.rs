// ABOUTME: Validation for bien declarations

use homees_core::ValidationError;

use crate::types::ProprieteCreateInput;

pub fn validate_propriete_create(
    input: &ProprieteCreateInput,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if input.proprietaire_id.trim().is_empty() {
        errors.push(ValidationError::new(
            "proprietaire_id",
            "L'identifiant du propriétaire est requis",
        ));
    }

    if input.adresse.trim().is_empty() {
        errors.push(ValidationError::new("adresse", "L'adresse est requise"));
    }

    if input.ville.trim().is_empty() {
        errors.push(ValidationError::new("ville", "La ville est requise"));
    }

    let code_postal = input.code_postal.trim();
    if code_postal.len() != 5 || !code_postal.chars().all(|c| c.is_ascii_digit()) {
        errors.push(ValidationError::new(
            "code_postal",
            "Le code postal doit comporter 5 chiffres",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ProprieteCreateInput {
        ProprieteCreateInput {
            proprietaire_id: "u-1".to_string(),
            adresse: "12 rue Oberkampf".to_string(),
            ville: "Paris".to_string(),
            code_postal: "75011".to_string(),
            surface_m2: Some(42.0),
            nb_pieces: Some(2),
            loyer_mensuel: Some(1450.0),
        }
    }

    #[test]
    fn test_declaration_valide() {
        assert!(validate_propriete_create(&input()).is_ok());
    }

    #[test]
    fn test_code_postal_invalide() {
        for mauvais in ["7501", "750113", "7501a", "paris"] {
            let mut bien = input();
            bien.code_postal = mauvais.to_string();
            let errors = validate_propriete_create(&bien).unwrap_err();
            assert_eq!(errors[0].field, "code_postal", "code postal {mauvais}");
        }
    }

    #[test]
    fn test_adresse_et_ville_requises() {
        let mut bien = input();
        bien.adresse = "  ".to_string();
        bien.ville = String::new();
        let errors = validate_propriete_create(&bien).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
