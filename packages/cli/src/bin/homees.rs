use clap::{Parser, Subcommand};
use colored::*;
use std::process;

mod cli;

use cli::demandes::DemandesCommands;
use cli::gestionnaires::GestionnairesCommands;
use cli::messages::MessagesCommands;

#[derive(Parser)]
#[command(name = "homees")]
#[command(about = "Homees CLI - mise en relation entre propriétaires et gestionnaires")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Gérer les demandes de gestion
    #[command(subcommand)]
    Demandes(DemandesCommands),
    /// Lire et envoyer des messages sur une demande
    #[command(subcommand)]
    Messages(MessagesCommands),
    /// Poser une question à l'assistant Homees
    Chatbot {
        /// La question à poser
        message: String,
    },
    /// Comparer les gestionnaires
    #[command(subcommand)]
    Gestionnaires(GestionnairesCommands),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Library logs stay quiet unless RUST_LOG asks for them
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match handle_command(cli.command).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {}", "Erreur :".red().bold(), e);
            process::exit(1);
        }
    }
}

async fn handle_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Demandes(demandes_cmd) => {
            cli::demandes::handle_demandes_command(demandes_cmd).await
        }
        Commands::Messages(messages_cmd) => {
            cli::messages::handle_messages_command(messages_cmd).await
        }
        Commands::Chatbot { message } => cli::chatbot::handle_chatbot_command(&message).await,
        Commands::Gestionnaires(gestionnaires_cmd) => {
            cli::gestionnaires::handle_gestionnaires_command(gestionnaires_cmd).await
        }
    }
}
