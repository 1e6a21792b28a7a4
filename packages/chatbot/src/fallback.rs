// ABOUTME: Local keyword answers used when the hosted endpoint cannot
// ABOUTME: answer

/// One fallback rule. The first rule with any keyword contained in the
/// lowercased question wins.
#[derive(Debug, Clone, Copy)]
pub struct FallbackRule {
    pub keywords: &'static [&'static str],
    pub reponse: &'static str,
}

pub const DEFAULT_REPONSE: &str = "Je n'ai pas bien compris votre question. Pouvez-vous la \
     reformuler ? Vous pouvez aussi écrire à contact@homees.fr, notre équipe vous répondra \
     rapidement.";

/// Rule order matters: pricing questions dominate because "gratuit" is
/// the question visitors ask most.
pub const DEFAULT_RULES: &[FallbackRule] = &[
    FallbackRule {
        keywords: &[
            "gratuit", "tarif", "prix", "commission", "cout", "coût", "combien", "payant",
        ],
        reponse: "Homees est entièrement gratuit pour les propriétaires : nous nous \
             rémunérons via une commission versée par les gestionnaires partenaires, \
             sans surcoût pour vous.",
    },
    FallbackRule {
        keywords: &[
            "comment ça marche",
            "comment ca marche",
            "fonctionne",
            "déroule",
            "deroule",
            "étapes",
            "etapes",
        ],
        reponse: "Déposez votre demande en quelques clics, comparez les gestionnaires de \
             votre quartier puis échangez directement avec eux depuis votre espace Homees.",
    },
    FallbackRule {
        keywords: &["partenaire", "partenariat", "rejoindre", "inscrire mon agence"],
        reponse: "Vous êtes gestionnaire et souhaitez rejoindre Homees ? Écrivez-nous \
             depuis la page partenaires, notre équipe revient vers vous sous 48h.",
    },
    FallbackRule {
        keywords: &["zone", "quartier", "arrondissement", "secteur", "couverture", "ville"],
        reponse: "Homees couvre aujourd'hui Paris et sa petite couronne. Renseignez votre \
             arrondissement dans le comparateur pour voir les gestionnaires actifs près \
             de chez vous.",
    },
    FallbackRule {
        keywords: &["avis", "note", "confiance", "fiable"],
        reponse: "Les avis publiés sur Homees proviennent uniquement de propriétaires \
             ayant réellement travaillé avec le gestionnaire concerné.",
    },
];

/// Ordered keyword rules with a generic default. Callers needing a
/// different vocabulary inject their own rules.
#[derive(Debug, Clone)]
pub struct FallbackTable {
    rules: &'static [FallbackRule],
    defaut: &'static str,
}

impl FallbackTable {
    pub fn new(rules: &'static [FallbackRule], defaut: &'static str) -> Self {
        Self { rules, defaut }
    }

    /// First matching rule's answer, or the default. Matching is
    /// case-insensitive substring containment.
    pub fn reponse_pour(&self, message: &str) -> &'static str {
        let question = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| question.contains(k)))
            .map(|rule| rule.reponse)
            .unwrap_or(self.defaut)
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::new(DEFAULT_RULES, DEFAULT_REPONSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gratuit_repond_tarification_quelle_que_soit_la_casse() {
        let table = FallbackTable::default();
        for question in [
            "Est-ce que Homees est gratuit ?",
            "C'est GRATUIT ou pas ?",
            "Quel est votre tarif ?",
            "Vous prenez une commission ?",
        ] {
            assert!(
                table.reponse_pour(question).contains("gratuit pour les propriétaires"),
                "question: {question}"
            );
        }
    }

    #[test]
    fn test_question_inconnue_repond_par_defaut() {
        let table = FallbackTable::default();
        assert_eq!(table.reponse_pour("Quelle est la météo demain ?"), DEFAULT_REPONSE);
    }

    #[test]
    fn test_premiere_regle_gagnante() {
        // "gratuit" and "avis" both match; the pricing rule comes first.
        let table = FallbackTable::default();
        let reponse = table.reponse_pour("Les avis disent que c'est gratuit, vrai ?");
        assert!(reponse.contains("gratuit pour les propriétaires"));
    }

    #[test]
    fn test_zone_et_partenariat() {
        let table = FallbackTable::default();
        assert!(table
            .reponse_pour("Couvrez-vous le 11e arrondissement ?")
            .contains("petite couronne"));
        assert!(table
            .reponse_pour("Comment devenir partenaire ?")
            .contains("partenaires"));
    }
}
