use homees_config::{env_string, HOMEES_ROLE, HOMEES_UTILISATEUR_ID};
use homees_core::UserRole;
use serde::{Deserialize, Serialize};

/// The signed-in utilisateur. Authentication itself happens upstream;
/// the session only carries the resolved identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub utilisateur_id: String,
    pub role: UserRole,
}

impl Session {
    pub fn new(utilisateur_id: impl Into<String>, role: UserRole) -> Self {
        Self {
            utilisateur_id: utilisateur_id.into(),
            role,
        }
    }

    /// Builds the session from `HOMEES_UTILISATEUR_ID` and
    /// `HOMEES_ROLE`. Returns `None` when either is missing or the
    /// role value is unknown.
    pub fn from_env() -> Option<Self> {
        let utilisateur_id = env_string(HOMEES_UTILISATEUR_ID)?;
        let role = UserRole::parse(&env_string(HOMEES_ROLE)?)?;
        Some(Self {
            utilisateur_id,
            role,
        })
    }
}
