// ABOUTME: Remote table names and id generation
// ABOUTME: Centralized so every package addresses the same remote tables

/// Remote table names, as exposed by the hosted store's REST surface
pub mod tables {
    pub const DEMANDE: &str = "demande";
    pub const MESSAGE: &str = "message";
    pub const NOTIFICATION: &str = "notification";
    pub const PROPRIETE: &str = "propriete";
    pub const UTILISATEURS: &str = "utilisateurs";
    pub const PROFIL_GESTIONNAIRE: &str = "profil_gestionnaire";
    pub const PROFIL_PROPRIETAIRE: &str = "profil_proprietaire";
    pub const AVIS: &str = "avis";
    pub const CONTRAT: &str = "contrat";
}

/// Generate a unique row id
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
