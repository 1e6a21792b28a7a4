// ABOUTME: Propriete entity, validation and store for the biens declared
// ABOUTME: by proprietaires

pub mod error;
pub mod store;
pub mod types;
pub mod validator;

pub use error::ProprieteError;
pub use store::{ProprieteStore, RemoteProprieteStore};
pub use types::{Propriete, ProprieteCreateInput};
