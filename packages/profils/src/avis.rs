// ABOUTME: Avis aggregation per gestionnaire

use std::collections::HashMap;

use crate::types::Avis;

/// Aggregated avis for one gestionnaire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteAgregee {
    /// Average note rounded to one decimal.
    pub note_moyenne: f64,
    pub nb_avis: usize,
}

/// Groups avis by gestionnaire and computes the rounded average note.
pub fn agreger_avis(avis: &[Avis]) -> HashMap<String, NoteAgregee> {
    let mut sommes: HashMap<String, (u32, usize)> = HashMap::new();
    for a in avis {
        let entree = sommes.entry(a.gestionnaire_id.clone()).or_insert((0, 0));
        entree.0 += u32::from(a.note);
        entree.1 += 1;
    }

    sommes
        .into_iter()
        .map(|(gestionnaire_id, (somme, nb))| {
            let moyenne = f64::from(somme) / nb as f64;
            (
                gestionnaire_id,
                NoteAgregee {
                    note_moyenne: (moyenne * 10.0).round() / 10.0,
                    nb_avis: nb,
                },
            )
        })
        .collect()
}
