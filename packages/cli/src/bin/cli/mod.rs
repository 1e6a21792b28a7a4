pub mod chatbot;
pub mod contexte;
pub mod demandes;
pub mod gestionnaires;
pub mod messages;
