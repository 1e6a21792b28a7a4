//! Profiles and the gestionnaire comparator.
//!
//! Gestionnaire profiles carry the zones they cover, the services they
//! sell and their pricing; propriétaires leave avis on the
//! gestionnaires they worked with. [`comparateur::comparer`] joins the
//! two into the filtered, sorted listing behind the comparator page.

pub mod avis;
pub mod comparateur;
pub mod error;
pub mod store;
pub mod types;

pub use avis::{agreger_avis, NoteAgregee};
pub use comparateur::{comparer, GestionnaireCompare, GestionnaireFilter, Tri};
pub use error::ProfilError;
pub use store::{ProfilStore, RemoteProfilStore};
pub use types::{Avis, ProfilGestionnaire, ProfilProprietaire, Service};
