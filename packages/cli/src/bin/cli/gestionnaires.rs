use clap::Subcommand;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use homees_profils::{comparer, GestionnaireFilter, Tri};

use super::contexte::{truncate, Contexte};

#[derive(Subcommand)]
pub enum GestionnairesCommands {
    /// Compare les gestionnaires selon les critères donnés
    Compare {
        /// Ne garde que les gestionnaires couvrant cette zone
        #[arg(long)]
        zone: Option<String>,
        /// Ne garde que les gestionnaires proposant ce service
        #[arg(long)]
        service: Option<String>,
        /// Note moyenne minimale
        #[arg(long)]
        note_min: Option<f64>,
        /// Tarif mensuel maximal
        #[arg(long)]
        tarif_max: Option<f64>,
        /// Ordre de tri
        #[arg(long, value_enum, default_value = "note")]
        tri: TriArg,
    },
}

#[derive(clap::ValueEnum, Clone, Debug)]
pub enum TriArg {
    /// Meilleure note d'abord
    Note,
    /// Tarif mensuel croissant
    Tarif,
    /// Expérience décroissante
    Experience,
}

impl TriArg {
    fn tri(&self) -> Tri {
        match self {
            TriArg::Note => Tri::NoteDesc,
            TriArg::Tarif => Tri::TarifAsc,
            TriArg::Experience => Tri::ExperienceDesc,
        }
    }
}

pub async fn handle_gestionnaires_command(
    command: GestionnairesCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Contexte::from_env()?;
    match command {
        GestionnairesCommands::Compare {
            zone,
            service,
            note_min,
            tarif_max,
            tri,
        } => {
            let filter = GestionnaireFilter {
                zone,
                service,
                note_min,
                tarif_max,
                tri: tri.tri(),
            };
            compare_gestionnaires(&ctx, filter).await
        }
    }
}

async fn compare_gestionnaires(
    ctx: &Contexte,
    filter: GestionnaireFilter,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = ctx.profils();
    let profils = store.list_gestionnaires().await?;
    let avis = store.list_avis().await?;

    let lignes = comparer(profils, &avis, &filter);

    if lignes.is_empty() {
        println!(
            "{}",
            "Aucun gestionnaire ne correspond aux critères".yellow()
        );
        return Ok(());
    }

    println!("{}", "🏢 Comparateur de gestionnaires".blue().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        "Société",
        "Zones",
        "Services",
        "Tarif",
        "Note",
        "Avis",
        "Expérience",
    ]);

    for ligne in &lignes {
        let services: Vec<&str> = ligne
            .profil
            .services
            .iter()
            .map(|s| s.nom.as_str())
            .collect();

        table.add_row(vec![
            truncate(&ligne.profil.nom_societe, 25),
            truncate(&ligne.profil.zones.join(", "), 20),
            truncate(&services.join(", "), 30),
            match ligne.profil.tarif_mensuel {
                Some(tarif) => format!("{:.0} €/mois", tarif),
                None => "—".to_string(),
            },
            match ligne.note_moyenne {
                Some(note) => format!("{:.1}/5", note),
                None => "—".to_string(),
            },
            ligne.nb_avis.to_string(),
            match ligne.profil.annees_experience {
                Some(annees) => format!("{} ans", annees),
                None => "—".to_string(),
            },
        ]);
    }

    println!("{}", table);
    println!(
        "Total : {} gestionnaire(s)",
        lignes.len().to_string().cyan()
    );

    Ok(())
}
