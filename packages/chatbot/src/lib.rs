//! The Homees assistant.
//!
//! Questions go to the hosted chatbot endpoint first; when the endpoint
//! is unreachable, answers with an error, or explicitly signals it has
//! nothing to say, the local keyword table answers instead. The visitor
//! always gets a response.

pub mod error;
pub mod fallback;
pub mod remote;
pub mod responder;
pub mod types;

pub use error::ChatbotError;
pub use fallback::FallbackTable;
pub use remote::{ChatbotRemote, HttpChatbotRemote, RemoteReply};
pub use responder::Responder;
pub use types::{ChatMessage, ChatRole, HISTORY_WINDOW};
