// ABOUTME: Filtering and sorting behind the gestionnaire comparator

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::avis::agreger_avis;
use crate::types::{Avis, ProfilGestionnaire};

/// Sort orders offered by the comparator.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tri {
    #[default]
    NoteDesc,
    TarifAsc,
    ExperienceDesc,
}

/// Comparator filters. Every field is optional; an empty filter keeps
/// every profil.
#[derive(Debug, Clone, Default)]
pub struct GestionnaireFilter {
    pub zone: Option<String>,
    pub service: Option<String>,
    pub note_min: Option<f64>,
    pub tarif_max: Option<f64>,
    pub tri: Tri,
}

/// One comparator row: a profil joined with its aggregated avis.
#[derive(Debug, Clone, PartialEq)]
pub struct GestionnaireCompare {
    pub profil: ProfilGestionnaire,
    pub note_moyenne: Option<f64>,
    pub nb_avis: usize,
}

/// Joins profils with their avis, applies the filter and sorts per
/// `filter.tri`. The sort is stable, so ties keep the incoming order.
///
/// Profils without the data a filter needs are excluded by that filter:
/// no avis fails `note_min`, no tarif fails `tarif_max`.
pub fn comparer(
    profils: Vec<ProfilGestionnaire>,
    avis: &[Avis],
    filter: &GestionnaireFilter,
) -> Vec<GestionnaireCompare> {
    let notes = agreger_avis(avis);

    let mut lignes: Vec<GestionnaireCompare> = profils
        .into_iter()
        .map(|profil| {
            let agregee = notes.get(&profil.utilisateur_id);
            GestionnaireCompare {
                note_moyenne: agregee.map(|n| n.note_moyenne),
                nb_avis: agregee.map(|n| n.nb_avis).unwrap_or(0),
                profil,
            }
        })
        .filter(|ligne| retenu(ligne, filter))
        .collect();

    match filter.tri {
        Tri::NoteDesc => lignes.sort_by(|a, b| {
            b.note_moyenne
                .partial_cmp(&a.note_moyenne)
                .unwrap_or(Ordering::Equal)
        }),
        Tri::TarifAsc => lignes.sort_by(|a, b| {
            match (a.profil.tarif_mensuel, b.profil.tarif_mensuel) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
        Tri::ExperienceDesc => lignes.sort_by(|a, b| {
            b.profil
                .annees_experience
                .cmp(&a.profil.annees_experience)
        }),
    }

    lignes
}

fn retenu(ligne: &GestionnaireCompare, filter: &GestionnaireFilter) -> bool {
    if let Some(zone) = &filter.zone {
        if !ligne.profil.couvre_zone(zone) {
            return false;
        }
    }
    if let Some(service) = &filter.service {
        if !ligne.profil.propose_service(service) {
            return false;
        }
    }
    if let Some(note_min) = filter.note_min {
        match ligne.note_moyenne {
            Some(note) if note >= note_min => {}
            _ => return false,
        }
    }
    if let Some(tarif_max) = filter.tarif_max {
        match ligne.profil.tarif_mensuel {
            Some(tarif) if tarif <= tarif_max => {}
            _ => return false,
        }
    }
    true
}
