use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of an authenticated user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Proprietaire,
    Gestionnaire,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Proprietaire => "proprietaire",
            UserRole::Gestionnaire => "gestionnaire",
        }
    }

    /// Parse the lowercase wire value, `None` for anything else
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "proprietaire" => Some(UserRole::Proprietaire),
            "gestionnaire" => Some(UserRole::Gestionnaire),
            _ => None,
        }
    }

    /// The other side of an owner/manager relationship
    pub fn contrepartie(&self) -> UserRole {
        match self {
            UserRole::Proprietaire => UserRole::Gestionnaire,
            UserRole::Gestionnaire => UserRole::Proprietaire,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Proprietaire => write!(f, "Propriétaire"),
            UserRole::Gestionnaire => write!(f, "Gestionnaire"),
        }
    }
}

/// Lifecycle status of a demande
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DemandeStatut {
    Ouverte,
    Acceptee,
    Rejetee,
    Terminee,
}

impl DemandeStatut {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandeStatut::Ouverte => "ouverte",
            DemandeStatut::Acceptee => "acceptee",
            DemandeStatut::Rejetee => "rejetee",
            DemandeStatut::Terminee => "terminee",
        }
    }

    /// Parse the lowercase wire value, `None` for anything else
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ouverte" => Some(DemandeStatut::Ouverte),
            "acceptee" => Some(DemandeStatut::Acceptee),
            "rejetee" => Some(DemandeStatut::Rejetee),
            "terminee" => Some(DemandeStatut::Terminee),
            _ => None,
        }
    }

    /// No further exchange happens on a closed demande
    pub fn est_terminee(&self) -> bool {
        matches!(self, DemandeStatut::Terminee)
    }
}

impl Default for DemandeStatut {
    fn default() -> Self {
        DemandeStatut::Ouverte
    }
}

impl fmt::Display for DemandeStatut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemandeStatut::Ouverte => write!(f, "Ouverte"),
            DemandeStatut::Acceptee => write!(f, "Acceptée"),
            DemandeStatut::Rejetee => write!(f, "Rejetée"),
            DemandeStatut::Terminee => write!(f, "Terminée"),
        }
    }
}
