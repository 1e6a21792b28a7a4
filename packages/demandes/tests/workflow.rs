// ABOUTME: End-to-end tests of the status workflow: guard, side-effect
// ABOUTME: sequencing, partial failures and racing writers

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use homees_core::{generate_id, DemandeStatut, UserRole};
use homees_demandes::{
    Acteur, Demande, DemandeCreateInput, DemandeError, DemandeStore, TransitionAction,
    WorkflowEngine, WorkflowError,
};
use homees_messagerie::{
    Expediteur, Message, MessageAvecExpediteur, MessageStore, MessagerieError, NouveauMessage,
};
use homees_notifications::{
    Notification, NotificationError, NotificationStore, NotificationType, NouvelleNotification,
};
use mockall::mock;
use mockall::predicate::*;

mock! {
    Demandes {}

    #[async_trait::async_trait]
    impl DemandeStore for Demandes {
        async fn create(&self, input: DemandeCreateInput) -> Result<Demande, DemandeError>;
        async fn get(&self, id: &str) -> Result<Option<Demande>, DemandeError>;
        async fn list_pour_proprietaire(
            &self,
            proprietaire_id: &str,
        ) -> Result<Vec<Demande>, DemandeError>;
        async fn list_pour_gestionnaire(
            &self,
            gestionnaire_id: &str,
        ) -> Result<Vec<Demande>, DemandeError>;
        async fn list_ouvertes(&self) -> Result<Vec<Demande>, DemandeError>;
        async fn update_statut(
            &self,
            id: &str,
            statut: DemandeStatut,
        ) -> Result<Demande, DemandeError>;
    }
}

mock! {
    Messages {}

    #[async_trait::async_trait]
    impl MessageStore for Messages {
        async fn list_pour_demande(
            &self,
            demande_id: &str,
        ) -> Result<Vec<MessageAvecExpediteur>, MessagerieError>;
        async fn insert(&self, message: NouveauMessage) -> Result<Message, MessagerieError>;
        async fn touch_demande(&self, demande_id: &str) -> Result<(), MessagerieError>;
    }
}

mock! {
    Notifications {}

    #[async_trait::async_trait]
    impl NotificationStore for Notifications {
        async fn insert(
            &self,
            notification: NouvelleNotification,
        ) -> Result<Notification, NotificationError>;
        async fn list_pour(
            &self,
            destinataire_id: &str,
        ) -> Result<Vec<Notification>, NotificationError>;
        async fn count_non_lues(&self, destinataire_id: &str) -> Result<usize, NotificationError>;
    }
}

fn demande(statut: DemandeStatut, gestionnaire_id: Option<&str>) -> Demande {
    let now = Utc::now();
    Demande {
        id: "d-1".to_string(),
        proprietaire_id: "u-prop".to_string(),
        gestionnaire_id: gestionnaire_id.map(str::to_string),
        propriete_id: None,
        statut,
        message_initial: "Je cherche un gestionnaire pour mon T2.".to_string(),
        cree_le: now,
        maj_le: now,
    }
}

fn stored_message(message: NouveauMessage) -> Message {
    Message {
        id: generate_id(),
        demande_id: message.demande_id,
        expediteur_id: message.expediteur_id,
        contenu: message.contenu,
        envoye_le: Utc::now(),
    }
}

fn stored_notification(notification: NouvelleNotification) -> Notification {
    Notification {
        id: generate_id(),
        destinataire_id: notification.destinataire_id,
        kind: notification.kind,
        payload: notification.payload,
        lue: false,
        cree_le: Utc::now(),
    }
}

fn updated(demande: &Demande, statut: DemandeStatut) -> Demande {
    let mut maj = demande.clone();
    maj.statut = statut;
    maj.maj_le = Utc::now();
    maj
}

#[tokio::test]
async fn test_accepter_ecrit_message_et_notification_au_proprietaire() {
    let ouverte = demande(DemandeStatut::Ouverte, Some("u-gest"));
    let attendu = updated(&ouverte, DemandeStatut::Acceptee);

    let mut demandes = MockDemandes::new();
    demandes
        .expect_update_statut()
        .with(eq("d-1"), eq(DemandeStatut::Acceptee))
        .times(1)
        .returning(move |_, _| Ok(attendu.clone()));

    let mut messages = MockMessages::new();
    messages
        .expect_insert()
        .withf(|m: &NouveauMessage| {
            m.demande_id == "d-1"
                && m.expediteur_id == "u-gest"
                && m.contenu == TransitionAction::Accepter.message_automatique()
        })
        .times(1)
        .returning(|m| Ok(stored_message(m)));

    let mut notifications = MockNotifications::new();
    notifications
        .expect_insert()
        .withf(|n: &NouvelleNotification| {
            n.destinataire_id == "u-prop"
                && n.kind == NotificationType::StatusChange
                && n.payload["demande_id"] == "d-1"
                && n.payload["nouveau_statut"] == "acceptee"
        })
        .times(1)
        .returning(|n| Ok(stored_notification(n)));

    let engine = WorkflowEngine::new(
        Arc::new(demandes),
        Arc::new(messages),
        Arc::new(notifications),
    );

    let outcome = engine
        .execute(
            &ouverte,
            TransitionAction::Accepter,
            &Acteur::new("u-gest", UserRole::Gestionnaire),
        )
        .await
        .unwrap();

    assert_eq!(outcome.demande.statut, DemandeStatut::Acceptee);
    assert_eq!(outcome.notification.destinataire_id, "u-prop");
}

#[tokio::test]
async fn test_relancer_notifie_le_gestionnaire() {
    let rejetee = demande(DemandeStatut::Rejetee, Some("u-gest"));
    let attendu = updated(&rejetee, DemandeStatut::Ouverte);

    let mut demandes = MockDemandes::new();
    demandes
        .expect_update_statut()
        .with(eq("d-1"), eq(DemandeStatut::Ouverte))
        .times(1)
        .returning(move |_, _| Ok(attendu.clone()));

    let mut messages = MockMessages::new();
    messages
        .expect_insert()
        .withf(|m: &NouveauMessage| {
            m.expediteur_id == "u-prop"
                && m.contenu == TransitionAction::Relancer.message_automatique()
        })
        .times(1)
        .returning(|m| Ok(stored_message(m)));

    let mut notifications = MockNotifications::new();
    notifications
        .expect_insert()
        .withf(|n: &NouvelleNotification| {
            n.destinataire_id == "u-gest" && n.payload["nouveau_statut"] == "ouverte"
        })
        .times(1)
        .returning(|n| Ok(stored_notification(n)));

    let engine = WorkflowEngine::new(
        Arc::new(demandes),
        Arc::new(messages),
        Arc::new(notifications),
    );

    let outcome = engine
        .execute(
            &rejetee,
            TransitionAction::Relancer,
            &Acteur::new("u-prop", UserRole::Proprietaire),
        )
        .await
        .unwrap();

    assert_eq!(outcome.demande.statut, DemandeStatut::Ouverte);
}

#[tokio::test]
async fn test_terminer_cloture_avec_message_dedie() {
    let acceptee = demande(DemandeStatut::Acceptee, Some("u-gest"));
    let attendu = updated(&acceptee, DemandeStatut::Terminee);

    let mut demandes = MockDemandes::new();
    demandes
        .expect_update_statut()
        .with(eq("d-1"), eq(DemandeStatut::Terminee))
        .times(1)
        .returning(move |_, _| Ok(attendu.clone()));

    let mut messages = MockMessages::new();
    messages
        .expect_insert()
        .withf(|m: &NouveauMessage| {
            m.contenu == TransitionAction::Terminer.message_automatique()
        })
        .times(1)
        .returning(|m| Ok(stored_message(m)));

    let mut notifications = MockNotifications::new();
    notifications
        .expect_insert()
        .withf(|n: &NouvelleNotification| {
            n.destinataire_id == "u-prop" && n.payload["nouveau_statut"] == "terminee"
        })
        .times(1)
        .returning(|n| Ok(stored_notification(n)));

    let engine = WorkflowEngine::new(
        Arc::new(demandes),
        Arc::new(messages),
        Arc::new(notifications),
    );

    let outcome = engine
        .execute(
            &acceptee,
            TransitionAction::Terminer,
            &Acteur::new("u-gest", UserRole::Gestionnaire),
        )
        .await
        .unwrap();

    assert_eq!(outcome.demande.statut, DemandeStatut::Terminee);
}

#[tokio::test]
async fn test_paire_non_accordee_refusee_avant_toute_ecriture() {
    // Mocks without expectations panic on any call, so a passing test
    // proves nothing was written.
    let engine = WorkflowEngine::new(
        Arc::new(MockDemandes::new()),
        Arc::new(MockMessages::new()),
        Arc::new(MockNotifications::new()),
    );

    let ouverte = demande(DemandeStatut::Ouverte, Some("u-gest"));
    let result = engine
        .execute(
            &ouverte,
            TransitionAction::Accepter,
            &Acteur::new("u-prop", UserRole::Proprietaire),
        )
        .await;

    assert!(matches!(
        result,
        Err(WorkflowError::TransitionRefusee {
            action: TransitionAction::Accepter,
            statut: DemandeStatut::Ouverte,
            role: UserRole::Proprietaire,
        })
    ));

    let terminee = demande(DemandeStatut::Terminee, Some("u-gest"));
    let result = engine
        .execute(
            &terminee,
            TransitionAction::Accepter,
            &Acteur::new("u-gest", UserRole::Gestionnaire),
        )
        .await;

    assert!(matches!(result, Err(WorkflowError::TransitionRefusee { .. })));
}

#[tokio::test]
async fn test_relance_sans_gestionnaire_echoue_avant_toute_ecriture() {
    let engine = WorkflowEngine::new(
        Arc::new(MockDemandes::new()),
        Arc::new(MockMessages::new()),
        Arc::new(MockNotifications::new()),
    );

    let rejetee = demande(DemandeStatut::Rejetee, None);
    let result = engine
        .execute(
            &rejetee,
            TransitionAction::Relancer,
            &Acteur::new("u-prop", UserRole::Proprietaire),
        )
        .await;

    assert!(matches!(
        result,
        Err(WorkflowError::GestionnaireManquant(id)) if id == "d-1"
    ));
}

#[tokio::test]
async fn test_echec_du_message_laisse_le_statut_en_place() {
    let ouverte = demande(DemandeStatut::Ouverte, Some("u-gest"));
    let attendu = updated(&ouverte, DemandeStatut::Rejetee);

    let mut demandes = MockDemandes::new();
    demandes
        .expect_update_statut()
        .times(1)
        .returning(move |_, _| Ok(attendu.clone()));

    let mut messages = MockMessages::new();
    messages.expect_insert().times(1).returning(|_| {
        Err(MessagerieError::Client(homees_client::ClientError::api(
            "insert failed",
        )))
    });

    // The notification store receives no call once step 2 fails.
    let engine = WorkflowEngine::new(
        Arc::new(demandes),
        Arc::new(messages),
        Arc::new(MockNotifications::new()),
    );

    let result = engine
        .execute(
            &ouverte,
            TransitionAction::Rejeter,
            &Acteur::new("u-gest", UserRole::Gestionnaire),
        )
        .await;

    assert!(matches!(result, Err(WorkflowError::MessageAutomatique(_))));
}

#[tokio::test]
async fn test_echec_de_la_notification_apres_message() {
    let ouverte = demande(DemandeStatut::Ouverte, Some("u-gest"));
    let attendu = updated(&ouverte, DemandeStatut::Acceptee);

    let mut demandes = MockDemandes::new();
    demandes
        .expect_update_statut()
        .times(1)
        .returning(move |_, _| Ok(attendu.clone()));

    let mut messages = MockMessages::new();
    messages
        .expect_insert()
        .times(1)
        .returning(|m| Ok(stored_message(m)));

    let mut notifications = MockNotifications::new();
    notifications.expect_insert().times(1).returning(|_| {
        Err(NotificationError::Client(homees_client::ClientError::api(
            "insert failed",
        )))
    });

    let engine = WorkflowEngine::new(
        Arc::new(demandes),
        Arc::new(messages),
        Arc::new(notifications),
    );

    let result = engine
        .execute(
            &ouverte,
            TransitionAction::Accepter,
            &Acteur::new("u-gest", UserRole::Gestionnaire),
        )
        .await;

    assert!(matches!(result, Err(WorkflowError::Notification(_))));
}

// In-memory stores for the racing-writers test. update_statut mirrors
// the remote behavior: unconditional write, journal keeps the landing
// order.

struct MemoireDemandes {
    rows: Mutex<HashMap<String, Demande>>,
    journal: Mutex<Vec<DemandeStatut>>,
}

impl MemoireDemandes {
    fn avec(demande: Demande) -> Self {
        let mut rows = HashMap::new();
        rows.insert(demande.id.clone(), demande);
        Self {
            rows: Mutex::new(rows),
            journal: Mutex::new(Vec::new()),
        }
    }

    fn statut_de(&self, id: &str) -> DemandeStatut {
        self.rows.lock().unwrap()[id].statut
    }

    fn journal(&self) -> Vec<DemandeStatut> {
        self.journal.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DemandeStore for MemoireDemandes {
    async fn create(&self, input: DemandeCreateInput) -> Result<Demande, DemandeError> {
        let now = Utc::now();
        let demande = Demande {
            id: generate_id(),
            proprietaire_id: input.proprietaire_id,
            gestionnaire_id: input.gestionnaire_id,
            propriete_id: input.propriete_id,
            statut: DemandeStatut::Ouverte,
            message_initial: input.message_initial,
            cree_le: now,
            maj_le: now,
        };
        self.rows
            .lock()
            .unwrap()
            .insert(demande.id.clone(), demande.clone());
        Ok(demande)
    }

    async fn get(&self, id: &str) -> Result<Option<Demande>, DemandeError> {
        Ok(self.rows.lock().unwrap().get(id).cloned())
    }

    async fn list_pour_proprietaire(
        &self,
        proprietaire_id: &str,
    ) -> Result<Vec<Demande>, DemandeError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|d| d.proprietaire_id == proprietaire_id)
            .cloned()
            .collect())
    }

    async fn list_pour_gestionnaire(
        &self,
        gestionnaire_id: &str,
    ) -> Result<Vec<Demande>, DemandeError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|d| d.gestionnaire_id.as_deref() == Some(gestionnaire_id))
            .cloned()
            .collect())
    }

    async fn list_ouvertes(&self) -> Result<Vec<Demande>, DemandeError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|d| d.statut == DemandeStatut::Ouverte)
            .cloned()
            .collect())
    }

    async fn update_statut(
        &self,
        id: &str,
        statut: DemandeStatut,
    ) -> Result<Demande, DemandeError> {
        let mut rows = self.rows.lock().unwrap();
        let demande = rows
            .get_mut(id)
            .ok_or_else(|| DemandeError::NotFound(id.to_string()))?;
        demande.statut = statut;
        demande.maj_le = Utc::now();
        self.journal.lock().unwrap().push(statut);
        Ok(demande.clone())
    }
}

#[derive(Default)]
struct MessagesEnMemoire {
    rows: Mutex<Vec<Message>>,
}

#[async_trait::async_trait]
impl MessageStore for MessagesEnMemoire {
    async fn list_pour_demande(
        &self,
        demande_id: &str,
    ) -> Result<Vec<MessageAvecExpediteur>, MessagerieError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.demande_id == demande_id)
            .map(|m| MessageAvecExpediteur {
                message: m.clone(),
                expediteur: Expediteur::inconnu(&m.expediteur_id),
            })
            .collect())
    }

    async fn insert(&self, message: NouveauMessage) -> Result<Message, MessagerieError> {
        let row = Message {
            id: generate_id(),
            demande_id: message.demande_id,
            expediteur_id: message.expediteur_id,
            contenu: message.contenu,
            envoye_le: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn touch_demande(&self, _demande_id: &str) -> Result<(), MessagerieError> {
        Ok(())
    }
}

#[derive(Default)]
struct NotificationsEnMemoire {
    rows: Mutex<Vec<Notification>>,
}

#[async_trait::async_trait]
impl NotificationStore for NotificationsEnMemoire {
    async fn insert(
        &self,
        notification: NouvelleNotification,
    ) -> Result<Notification, NotificationError> {
        let row = Notification {
            id: generate_id(),
            destinataire_id: notification.destinataire_id,
            kind: notification.kind,
            payload: notification.payload,
            lue: false,
            cree_le: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_pour(
        &self,
        destinataire_id: &str,
    ) -> Result<Vec<Notification>, NotificationError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.destinataire_id == destinataire_id)
            .cloned()
            .collect())
    }

    async fn count_non_lues(&self, destinataire_id: &str) -> Result<usize, NotificationError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.destinataire_id == destinataire_id && !n.lue)
            .count())
    }
}

#[tokio::test]
async fn test_transitions_concurrentes_derniere_ecriture_gagne() {
    let ouverte = demande(DemandeStatut::Ouverte, Some("u-gest"));
    let demandes = Arc::new(MemoireDemandes::avec(ouverte.clone()));
    let messages = Arc::new(MessagesEnMemoire::default());
    let notifications = Arc::new(NotificationsEnMemoire::default());
    let engine = Arc::new(WorkflowEngine::new(
        demandes.clone(),
        messages.clone(),
        notifications.clone(),
    ));
    let acteur = Acteur::new("u-gest", UserRole::Gestionnaire);

    // Both writers hold the same ouverte snapshot, so both guards pass.
    let accepte = {
        let engine = engine.clone();
        let snapshot = ouverte.clone();
        let acteur = acteur.clone();
        tokio::spawn(async move {
            engine
                .execute(&snapshot, TransitionAction::Accepter, &acteur)
                .await
        })
    };
    let rejette = {
        let engine = engine.clone();
        let snapshot = ouverte.clone();
        let acteur = acteur.clone();
        tokio::spawn(async move {
            engine
                .execute(&snapshot, TransitionAction::Rejeter, &acteur)
                .await
        })
    };

    let premier = accepte.await.unwrap();
    let second = rejette.await.unwrap();

    // Neither writer observes the conflict.
    assert!(premier.is_ok());
    assert!(second.is_ok());

    let journal = demandes.journal();
    assert_eq!(journal.len(), 2);
    assert_eq!(demandes.statut_de("d-1"), *journal.last().unwrap());

    // Each transition still wrote its own side effects.
    assert_eq!(messages.rows.lock().unwrap().len(), 2);
    assert_eq!(notifications.rows.lock().unwrap().len(), 2);
}
