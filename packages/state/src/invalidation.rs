// ABOUTME: Mapping from remote change events to the typed cache keys
// ABOUTME: they invalidate

use homees_client::ChangeEvent;
use homees_core::tables;

/// One cached view of the remote store. Watchers register on a key;
/// matching change events tell them to re-fetch wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvalidationKey {
    /// Any demande listing or detail.
    Demandes,
    /// One demande's conversation thread.
    Messages { demande_id: String },
    /// One utilisateur's notifications and unread count.
    Notifications { destinataire_id: String },
    /// Biens listings.
    Proprietes,
    /// Gestionnaire profiles and avis, as seen by the comparator.
    Profils,
}

/// Total mapping from a change event to the keys it invalidates.
/// Unknown tables, and rows missing the field a targeted key needs,
/// map to nothing.
pub fn keys_for_event(event: &ChangeEvent) -> Vec<InvalidationKey> {
    match event.table.as_str() {
        tables::DEMANDE => {
            let mut keys = vec![InvalidationKey::Demandes];
            // A demande update refreshes its thread view too: the
            // thread page shows the statut it was fetched with.
            if let Some(id) = event.row_id() {
                keys.push(InvalidationKey::Messages {
                    demande_id: id.to_string(),
                });
            }
            keys
        }
        tables::MESSAGE => match event.champ("demande_id") {
            Some(demande_id) => vec![InvalidationKey::Messages {
                demande_id: demande_id.to_string(),
            }],
            None => Vec::new(),
        },
        tables::NOTIFICATION => match event.champ("destinataire_id") {
            Some(destinataire_id) => vec![InvalidationKey::Notifications {
                destinataire_id: destinataire_id.to_string(),
            }],
            None => Vec::new(),
        },
        tables::PROPRIETE => vec![InvalidationKey::Proprietes],
        tables::PROFIL_GESTIONNAIRE | tables::PROFIL_PROPRIETAIRE | tables::AVIS => {
            vec![InvalidationKey::Profils]
        }
        _ => Vec::new(),
    }
}
