use std::sync::Arc;

use colored::*;
use homees_chatbot::{FallbackTable, HttpChatbotRemote, Responder};

pub async fn handle_chatbot_command(message: &str) -> Result<(), Box<dyn std::error::Error>> {
    let remote = HttpChatbotRemote::from_env()?;
    let responder = Responder::new(Arc::new(remote), FallbackTable::default());

    println!("{} {}", "Vous :".cyan(), message);
    let reponse = responder.repondre(message, &[]).await;
    println!("{} {}", "Homees :".green().bold(), reponse);

    Ok(())
}
