use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Un bien immobilier declared by a propriétaire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Propriete {
    pub id: String,
    pub proprietaire_id: String,
    pub adresse: String,
    pub ville: String,
    pub code_postal: String,
    #[serde(default)]
    pub surface_m2: Option<f64>,
    #[serde(default)]
    pub nb_pieces: Option<u32>,
    #[serde(default)]
    pub loyer_mensuel: Option<f64>,
    pub cree_le: DateTime<Utc>,
}

/// Input for declaring a bien. Id and timestamp are assigned at insert
/// time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProprieteCreateInput {
    pub proprietaire_id: String,
    pub adresse: String,
    pub ville: String,
    pub code_postal: String,
    #[serde(default)]
    pub surface_m2: Option<f64>,
    #[serde(default)]
    pub nb_pieces: Option<u32>,
    #[serde(default)]
    pub loyer_mensuel: Option<f64>,
}
