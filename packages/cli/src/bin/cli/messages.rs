use clap::Subcommand;
use colored::*;
use homees_messagerie::EnvoiMessage;

use super::contexte::{format_date, session_requise, Contexte};

#[derive(Subcommand)]
pub enum MessagesCommands {
    /// Affiche le fil de discussion d'une demande
    List {
        /// Identifiant de la demande
        demande_id: String,
    },
    /// Envoie un message sur une demande
    Send {
        /// Identifiant de la demande
        demande_id: String,
        /// Contenu du message
        contenu: String,
    },
}

pub async fn handle_messages_command(
    command: MessagesCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Contexte::from_env()?;
    match command {
        MessagesCommands::List { demande_id } => list_messages(&ctx, &demande_id).await,
        MessagesCommands::Send {
            demande_id,
            contenu,
        } => send_message(&ctx, &demande_id, contenu).await,
    }
}

async fn list_messages(ctx: &Contexte, demande_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let messages = ctx.messagerie().fetch_messages(demande_id).await?;

    if messages.is_empty() {
        println!("{}", "Aucun message sur cette demande".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("💬 Messages de la demande {}", demande_id)
            .blue()
            .bold()
    );
    println!();

    for entry in &messages {
        println!(
            "[{}] {}",
            format_date(&entry.message.envoye_le).dimmed(),
            entry.expediteur.nom_affichage().cyan()
        );
        println!("  {}", entry.message.contenu);
    }

    println!();
    println!("Total : {} message(s)", messages.len().to_string().cyan());

    Ok(())
}

async fn send_message(
    ctx: &Contexte,
    demande_id: &str,
    contenu: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = session_requise()?;

    let demande = match ctx.demandes().get(demande_id).await? {
        Some(d) => d,
        None => {
            eprintln!("{}", format!("Demande '{}' introuvable", demande_id).red());
            return Err("Demande introuvable".into());
        }
    };

    let envoi = EnvoiMessage {
        expediteur_id: session.utilisateur_id,
        contenu,
    };
    let message = ctx
        .messagerie()
        .send_message(demande_id, demande.statut, &envoi)
        .await?;

    println!("{}", format!("✅ Message {} envoyé", message.id).green());

    Ok(())
}
