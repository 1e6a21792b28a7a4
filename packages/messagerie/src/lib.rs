//! Messaging for Homees demandes.
//!
//! Every demande carries a single conversation thread between the
//! propriétaire and the gestionnaire. This package loads threads with
//! their senders resolved, and appends new messages under the rules
//! that apply to user-authored content (non-empty body, thread still
//! open).
//!
//! The package deliberately does not depend on `homees-demandes`: the
//! status workflow depends on messaging for its automatic messages, so
//! the dependency has to point this way. Callers pass the demande's
//! current status into [`MessagerieService::send_message`] instead of
//! the service looking it up.

pub mod error;
pub mod service;
pub mod store;
pub mod types;
pub mod validator;

pub use error::MessagerieError;
pub use service::{EnvoiMessage, MessagerieService};
pub use store::{MessageStore, RemoteMessageStore};
pub use types::{Expediteur, Message, MessageAvecExpediteur, NouveauMessage};
