use serde::{Deserialize, Serialize};

/// Number of trailing history entries sent with each question.
pub const HISTORY_WINDOW: usize = 6;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Utilisateur,
    Assistant,
}

/// One entry of the conversation shown in the chat widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub contenu: String,
}

impl ChatMessage {
    pub fn utilisateur(contenu: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Utilisateur,
            contenu: contenu.into(),
        }
    }

    pub fn assistant(contenu: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            contenu: contenu.into(),
        }
    }
}
