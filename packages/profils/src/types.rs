// ABOUTME: Profile entities and the Service union normalized at
// ABOUTME: deserialization time

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A service sold by a gestionnaire.
///
/// Older profil rows store services as bare strings, newer ones as
/// `{nom, prix}` objects. Both wire forms land here; serialization
/// always emits the object form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Service {
    pub nom: String,
    pub prix: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ServiceWire {
    Nom(String),
    Objet {
        nom: String,
        #[serde(default)]
        prix: Option<f64>,
    },
}

impl<'de> Deserialize<'de> for Service {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match ServiceWire::deserialize(deserializer)? {
            ServiceWire::Nom(nom) => Service { nom, prix: None },
            ServiceWire::Objet { nom, prix } => Service { nom, prix },
        })
    }
}

/// Public profile of a gestionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfilGestionnaire {
    pub id: String,
    pub utilisateur_id: String,
    pub nom_societe: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub zones: Vec<String>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub tarif_mensuel: Option<f64>,
    #[serde(default)]
    pub annees_experience: Option<u32>,
    #[serde(default)]
    pub nb_biens_geres: Option<u32>,
}

impl ProfilGestionnaire {
    /// Case-insensitive containment match on covered zones.
    pub fn couvre_zone(&self, zone: &str) -> bool {
        let recherche = zone.to_lowercase();
        self.zones
            .iter()
            .any(|z| z.to_lowercase().contains(&recherche))
    }

    /// Case-insensitive containment match on sold service names.
    pub fn propose_service(&self, service: &str) -> bool {
        let recherche = service.to_lowercase();
        self.services
            .iter()
            .any(|s| s.nom.to_lowercase().contains(&recherche))
    }
}

/// Private profile of a propriétaire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfilProprietaire {
    pub id: String,
    pub utilisateur_id: String,
    pub nom: String,
    pub prenom: String,
    #[serde(default)]
    pub telephone: Option<String>,
}

/// An avis left by a propriétaire on a gestionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Avis {
    pub id: String,
    pub gestionnaire_id: String,
    pub proprietaire_id: String,
    pub note: u8,
    #[serde(default)]
    pub commentaire: Option<String>,
    pub cree_le: DateTime<Utc>,
}
