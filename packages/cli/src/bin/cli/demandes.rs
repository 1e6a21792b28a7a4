use clap::Subcommand;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use homees_core::DemandeStatut;
use homees_demandes::{available_actions, Acteur, Demande, TransitionAction};

use super::contexte::{format_date, session_requise, truncate, Contexte};

#[derive(Subcommand)]
pub enum DemandesCommands {
    /// Liste les demandes visibles pour la session courante
    List,
    /// Affiche une demande avec son fil de discussion
    Show {
        /// Identifiant de la demande
        id: String,
    },
    /// Accepte une demande ouverte (gestionnaire)
    Accepter {
        /// Identifiant de la demande
        id: String,
    },
    /// Refuse une demande ouverte (gestionnaire)
    Rejeter {
        /// Identifiant de la demande
        id: String,
    },
    /// Relance une demande rejetée (propriétaire)
    Relancer {
        /// Identifiant de la demande
        id: String,
    },
    /// Clôture une demande acceptée (gestionnaire)
    Terminer {
        /// Identifiant de la demande
        id: String,
    },
}

pub async fn handle_demandes_command(
    command: DemandesCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Contexte::from_env()?;
    match command {
        DemandesCommands::List => list_demandes(&ctx).await,
        DemandesCommands::Show { id } => show_demande(&ctx, &id).await,
        DemandesCommands::Accepter { id } => {
            executer_transition(&ctx, &id, TransitionAction::Accepter).await
        }
        DemandesCommands::Rejeter { id } => {
            executer_transition(&ctx, &id, TransitionAction::Rejeter).await
        }
        DemandesCommands::Relancer { id } => {
            executer_transition(&ctx, &id, TransitionAction::Relancer).await
        }
        DemandesCommands::Terminer { id } => {
            executer_transition(&ctx, &id, TransitionAction::Terminer).await
        }
    }
}

async fn list_demandes(ctx: &Contexte) -> Result<(), Box<dyn std::error::Error>> {
    let session = session_requise()?;
    let demandes = ctx
        .demandes()
        .list_pour(session.role, &session.utilisateur_id)
        .await?;

    if demandes.is_empty() {
        println!("{}", "Aucune demande".yellow());
        return Ok(());
    }

    println!("{}", "📋 Demandes de gestion".blue().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        "ID",
        "Statut",
        "Propriétaire",
        "Gestionnaire",
        "Message initial",
        "Mise à jour",
    ]);

    for demande in &demandes {
        table.add_row(vec![
            demande.id.clone(),
            statut_libelle(demande.statut).to_string(),
            demande.proprietaire_id.clone(),
            demande
                .gestionnaire_id
                .clone()
                .unwrap_or_else(|| "—".to_string()),
            truncate(&demande.message_initial, 30),
            format_date(&demande.maj_le),
        ]);
    }

    println!("{}", table);
    println!("Total : {} demande(s)", demandes.len().to_string().cyan());

    Ok(())
}

async fn show_demande(ctx: &Contexte, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let session = session_requise()?;
    let demande = match ctx.demandes().get(id).await? {
        Some(d) => d,
        None => {
            eprintln!("{}", format!("Demande '{}' introuvable", id).red());
            return Err("Demande introuvable".into());
        }
    };

    println!("{}", format!("📋 Demande {}", demande.id).blue().bold());
    println!();
    print_demande_details(&demande);

    let actions = available_actions(demande.statut, session.role);
    if !actions.is_empty() {
        let libelles: Vec<&str> = actions.iter().map(|a| a.libelle()).collect();
        println!("{:<16} {}", "Actions :".cyan(), libelles.join(", "));
    }

    let messages = ctx.messagerie().fetch_messages(&demande.id).await?;
    if !messages.is_empty() {
        println!();
        println!("{}", "💬 Fil de discussion".blue().bold());
        for entry in &messages {
            println!(
                "  [{}] {} : {}",
                format_date(&entry.message.envoye_le).dimmed(),
                entry.expediteur.nom_affichage().cyan(),
                entry.message.contenu
            );
        }
    }

    Ok(())
}

async fn executer_transition(
    ctx: &Contexte,
    id: &str,
    action: TransitionAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = session_requise()?;
    let demande = match ctx.demandes().get(id).await? {
        Some(d) => d,
        None => {
            eprintln!("{}", format!("Demande '{}' introuvable", id).red());
            return Err("Demande introuvable".into());
        }
    };

    let acteur = Acteur::new(session.utilisateur_id.as_str(), session.role);
    let outcome = ctx.workflow().execute(&demande, action, &acteur).await?;

    println!(
        "{}",
        format!(
            "✅ {} : la demande {} est désormais {}",
            action.libelle(),
            outcome.demande.id,
            statut_libelle(outcome.demande.statut)
        )
        .green()
    );
    println!(
        "{} {}",
        "Message automatique :".cyan(),
        outcome.message.contenu
    );

    Ok(())
}

fn print_demande_details(demande: &Demande) {
    println!("{:<16} {}", "ID :".cyan(), demande.id);
    println!("{:<16} {}", "Statut :".cyan(), statut_colore(demande.statut));
    println!(
        "{:<16} {}",
        "Propriétaire :".cyan(),
        demande.proprietaire_id
    );
    if let Some(gestionnaire_id) = &demande.gestionnaire_id {
        println!("{:<16} {}", "Gestionnaire :".cyan(), gestionnaire_id);
    }
    if let Some(propriete_id) = &demande.propriete_id {
        println!("{:<16} {}", "Propriété :".cyan(), propriete_id);
    }
    println!("{:<16} {}", "Message :".cyan(), demande.message_initial);
    println!("{:<16} {}", "Créée le :".cyan(), format_date(&demande.cree_le));
    println!("{:<16} {}", "Mise à jour :".cyan(), format_date(&demande.maj_le));
}

fn statut_libelle(statut: DemandeStatut) -> &'static str {
    match statut {
        DemandeStatut::Ouverte => "ouverte",
        DemandeStatut::Acceptee => "acceptée",
        DemandeStatut::Rejetee => "rejetée",
        DemandeStatut::Terminee => "terminée",
    }
}

fn statut_colore(statut: DemandeStatut) -> ColoredString {
    match statut {
        DemandeStatut::Ouverte => "ouverte".blue(),
        DemandeStatut::Acceptee => "acceptée".green(),
        DemandeStatut::Rejetee => "rejetée".red(),
        DemandeStatut::Terminee => "terminée".dimmed(),
    }
}
