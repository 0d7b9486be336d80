//! Health recommendations per severity tier.
//!
//! The table is static data: every lookup returns a reference into it.

use crate::domain::model::{PollutionReading, RecommendationBundle};
use crate::domain::services::classifier;
use crate::domain::tier::SeverityTier;

/// Indexed by `SeverityTier::index()`.
static BUNDLES: [RecommendationBundle; 6] = [
    RecommendationBundle {
        tier: SeverityTier::Excellent,
        general_advice: "La qualité de l'air est excellente. C'est le moment idéal pour profiter de l'extérieur et pratiquer toutes vos activités en plein air.",
        at_risk_groups: &[],
        symptoms_to_watch: &[],
        precautions: &[
            "Profitez de l'air frais pour aérer votre domicile",
            "Idéal pour les activités sportives en extérieur",
            "Encouragez les enfants à jouer dehors",
        ],
        activity_guidance: "✅ Toutes les activités physiques sont recommandées, y compris les sports intenses et de longue durée.",
        risk_level: 0,
    },
    RecommendationBundle {
        tier: SeverityTier::Good,
        general_advice: "La qualité de l'air est bonne. Les activités extérieures sont sûres pour tout le monde.",
        at_risk_groups: &[
            "Les personnes exceptionnellement sensibles peuvent ressentir une légère gêne",
        ],
        symptoms_to_watch: &[],
        precautions: &[
            "Aucune précaution particulière nécessaire",
            "Fenêtres peuvent être ouvertes pour ventiler",
            "Activités de plein air recommandées",
        ],
        activity_guidance: "✅ Vous pouvez pratiquer toutes les activités physiques sans restriction, y compris course à pied, vélo et sports intenses.",
        risk_level: 1,
    },
    RecommendationBundle {
        tier: SeverityTier::Moderate,
        general_advice: "La qualité de l'air est acceptable. La plupart des personnes peuvent profiter de leurs activités habituelles, mais les personnes sensibles devraient limiter les efforts prolongés.",
        at_risk_groups: &[
            "👶 Enfants et nourrissons",
            "🧓 Personnes âgées (65 ans et plus)",
            "🫁 Personnes asthmatiques ou souffrant de problèmes respiratoires",
            "❤️ Personnes avec maladies cardiovasculaires",
            "🤰 Femmes enceintes",
        ],
        symptoms_to_watch: &[
            "Essoufflement inhabituel lors d'activités légères",
            "Irritation des yeux ou de la gorge",
            "Toux légère ou gêne respiratoire",
            "Fatigue inhabituelle",
        ],
        precautions: &[
            "Personnes sensibles: réduire les efforts intenses et prolongés",
            "Surveiller l'apparition de symptômes respiratoires",
            "Garder les inhalateurs à portée de main (asthmatiques)",
            "Limiter la durée des activités extérieures intenses",
            "Privilégier les heures où la pollution est plus faible",
        ],
        activity_guidance: "⚠️ Population générale: activités normales acceptables\n\
            ⚠️ Personnes sensibles: limiter les activités prolongées ou très intenses à l'extérieur (course longue distance, cyclisme intensif)",
        risk_level: 2,
    },
    RecommendationBundle {
        tier: SeverityTier::Poor,
        general_advice: "La qualité de l'air est mauvaise. Tout le monde peut commencer à ressentir des effets sur la santé. Les personnes sensibles peuvent être plus sérieusement affectées.",
        at_risk_groups: &[
            "👶 Enfants et nourrissons (RISQUE ÉLEVÉ)",
            "🧓 Personnes âgées de 65 ans et plus (RISQUE ÉLEVÉ)",
            "🫁 Asthmatiques et personnes avec problèmes respiratoires (RISQUE ÉLEVÉ)",
            "❤️ Personnes avec maladies cardiaques (RISQUE ÉLEVÉ)",
            "🤰 Femmes enceintes (RISQUE ÉLEVÉ)",
            "🏃 Sportifs pratiquant des activités intenses",
            "🤧 Personnes avec allergies respiratoires",
        ],
        symptoms_to_watch: &[
            "Difficulté à respirer ou essoufflement",
            "Toux persistante ou aggravation de la toux",
            "Sifflements respiratoires (wheezing)",
            "Irritation sévère des yeux, du nez ou de la gorge",
            "Douleurs thoraciques ou oppression",
            "Maux de tête",
            "Fatigue anormale",
            "Rythme cardiaque irrégulier",
        ],
        precautions: &[
            "🏠 Rester à l'intérieur autant que possible",
            "🪟 Fermer les fenêtres et portes",
            "💨 Utiliser un purificateur d'air si disponible",
            "😷 Porter un masque FFP2/N95 si sortie nécessaire",
            "💊 Asthmatiques: avoir son inhalateur à portée de main",
            "🚗 Éviter les zones de fort trafic routier",
            "👥 Éviter les foules en extérieur",
            "🩺 Consulter un médecin si symptômes persistants",
        ],
        activity_guidance: "🚫 Tout le monde: ÉVITER les activités physiques intenses à l'extérieur\n\
            ⚠️ Personnes sensibles: AUCUNE activité physique extérieure\n\
            ✅ Privilégier les activités intérieures légères",
        risk_level: 3,
    },
    RecommendationBundle {
        tier: SeverityTier::VeryPoor,
        general_advice: "ALERTE SANTÉ: La qualité de l'air est très mauvaise. Tout le monde peut ressentir des effets importants sur la santé. Les personnes sensibles doivent éviter toute exposition extérieure.",
        at_risk_groups: &[
            "⚠️ TOUTE LA POPULATION est à risque",
            "🆘 RISQUE CRITIQUE pour:",
            "  • Enfants et nourrissons",
            "  • Personnes âgées",
            "  • Asthmatiques et personnes avec maladies respiratoires",
            "  • Personnes avec maladies cardiovasculaires",
            "  • Femmes enceintes",
            "  • Personnes immunodéprimées",
        ],
        symptoms_to_watch: &[
            "⚠️ Difficulté respiratoire importante",
            "⚠️ Toux sévère et persistante",
            "⚠️ Douleurs thoraciques",
            "⚠️ Palpitations cardiaques",
            "⚠️ Vertiges ou confusion",
            "⚠️ Nausées",
            "⚠️ Aggravation rapide de conditions existantes",
            "⚠️ Crise d'asthme",
            "⚠️ Irritation sévère des muqueuses",
        ],
        precautions: &[
            "🏠 RESTER À L'INTÉRIEUR - Sortir uniquement si absolument nécessaire",
            "🚪 FERMER toutes fenêtres et portes",
            "💨 UTILISER un purificateur d'air H13/HEPA",
            "😷 PORTER OBLIGATOIREMENT un masque FFP2/N95 lors des sorties",
            "💊 Asthmatiques: utiliser l'inhalateur préventivement selon prescription",
            "📱 Limiter les déplacements, privilégier télétravail/école à distance",
            "🚗 Éviter tout trajet non essentiel",
            "🩺 CONSULTER RAPIDEMENT en cas de symptômes",
            "🆘 Appeler urgences (15) si difficulté respiratoire sévère",
            "💧 S'hydrater régulièrement",
            "🧘 Rester calme, respirer lentement si gêne respiratoire",
        ],
        activity_guidance: "🚫 TOUTE LA POPULATION: AUCUNE activité physique extérieure\n\
            🏠 Rester à l'intérieur et limiter les mouvements\n\
            ❌ Annuler tout événement sportif ou activité extérieure prévue",
        risk_level: 4,
    },
    RecommendationBundle {
        tier: SeverityTier::ExtremelyPoor,
        general_advice: "🆘 URGENCE SANITAIRE: La qualité de l'air présente un danger grave pour la santé. Conditions d'urgence sanitaire - tout le monde est affecté.",
        at_risk_groups: &[
            "🚨 DANGER POUR TOUTE LA POPULATION",
            "🆘 RISQUE VITAL pour les groupes vulnérables:",
            "  • Enfants et nourrissons",
            "  • Personnes âgées",
            "  • Personnes avec maladies respiratoires",
            "  • Personnes avec maladies cardiaques",
            "  • Femmes enceintes",
            "  • Personnes immunodéprimées",
            "  • Travailleurs extérieurs",
        ],
        symptoms_to_watch: &[
            "🆘 Détresse respiratoire sévère",
            "🆘 Douleur thoracique intense",
            "🆘 Arythmie cardiaque",
            "🆘 Confusion ou perte de conscience",
            "🆘 Lèvres ou ongles bleutés (cyanose)",
            "🆘 Crise d'asthme sévère ne répondant pas au traitement",
            "🆘 Vomissements persistants",
            "🆘 Saignements de nez répétés",
            "🆘 Vision trouble ou maux de tête violents",
        ],
        precautions: &[
            "🆘 CONFINEMENT STRICT À L'INTÉRIEUR - Ne sortez sous AUCUN prétexte sauf urgence vitale",
            "🚪 COLMATER fenêtres et portes avec serviettes humides",
            "💨 PURIFICATEUR D'AIR en marche constante (filtres HEPA H13)",
            "😷 Masque FFP3/N99 OBLIGATOIRE si sortie inévitable",
            "🏥 Contacter les autorités sanitaires pour évacuation si nécessaire",
            "💊 Prendre médicaments préventifs selon prescriptions",
            "📞 Maintenir contact avec proches et services médicaux",
            "🆘 APPELER LE 15 IMMÉDIATEMENT si symptômes graves",
            "💧 S'hydrater abondamment",
            "🧼 Se laver yeux/nez/gorge si exposition",
            "📻 Suivre les consignes des autorités sanitaires",
            "🏫 Fermeture écoles et lieux publics recommandée",
            "🚗 Évacuation possible selon consignes officielles",
        ],
        activity_guidance: "🚨 INTERDICTION TOTALE de toute activité extérieure\n\
            🏠 CONFINEMENT STRICT recommandé\n\
            ⛔ NE PAS SORTIR - Même les activités intérieures doivent être réduites\n\
            🆘 Urgence sanitaire - Suivre les directives officielles",
        risk_level: 5,
    },
];

static INSUFFICIENT_DATA: RecommendationBundle = RecommendationBundle {
    tier: SeverityTier::Moderate,
    general_advice: "Données insuffisantes pour évaluer la qualité de l'air. Par précaution, limitez les activités intenses.",
    at_risk_groups: &["Personnes sensibles"],
    symptoms_to_watch: &[],
    precautions: &["Rester vigilant aux symptômes", "Consulter les mises à jour"],
    activity_guidance: "⚠️ Par précaution, limiter les activités physiques intenses jusqu'à obtention de données complètes.",
    risk_level: 2,
};

pub fn generate(tier: SeverityTier) -> &'static RecommendationBundle {
    &BUNDLES[tier.index()]
}

/// Used when no tier can be determined upstream.
pub fn insufficient_data() -> &'static RecommendationBundle {
    &INSUFFICIENT_DATA
}

pub fn generate_for(reading: Option<&PollutionReading>) -> &'static RecommendationBundle {
    match reading {
        Some(reading) => generate(classifier::classify(reading)),
        None => insufficient_data(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_tier() {
        for tier in SeverityTier::ALL {
            assert_eq!(generate(tier).tier, tier);
        }
    }

    #[test]
    fn test_risk_level_is_monotonic() {
        let levels: Vec<u8> = SeverityTier::ALL
            .iter()
            .map(|tier| generate(*tier).risk_level)
            .collect();
        assert_eq!(levels, vec![0, 1, 2, 3, 4, 5]);

        for a in SeverityTier::ALL {
            for b in SeverityTier::ALL {
                if a < b {
                    assert!(generate(a).risk_level <= generate(b).risk_level);
                }
            }
        }
    }

    #[test]
    fn test_extremely_poor_is_maximal_risk() {
        let bundle = generate(SeverityTier::ExtremelyPoor);
        assert_eq!(bundle.risk_level, 5);
        assert_eq!(bundle.at_risk_groups[0], "🚨 DANGER POUR TOUTE LA POPULATION");
        assert_eq!(bundle.precautions.len(), 13);
    }

    #[test]
    fn test_excellent_has_no_risk_groups() {
        let bundle = generate(SeverityTier::Excellent);
        assert!(bundle.at_risk_groups.is_empty());
        assert!(bundle.symptoms_to_watch.is_empty());
        assert_eq!(bundle.precautions.len(), 3);
    }

    #[test]
    fn test_list_order_is_preserved() {
        let bundle = generate(SeverityTier::Moderate);
        assert_eq!(bundle.at_risk_groups.first(), Some(&"👶 Enfants et nourrissons"));
        assert_eq!(bundle.at_risk_groups.last(), Some(&"🤰 Femmes enceintes"));
    }

    #[test]
    fn test_lookup_returns_the_same_static_bundle() {
        let a = generate(SeverityTier::Poor);
        let b = generate(SeverityTier::Poor);
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_insufficient_data_fallback() {
        let bundle = generate_for(None);
        assert_eq!(bundle.tier, SeverityTier::Moderate);
        assert_eq!(bundle.risk_level, 2);
        assert_eq!(bundle.at_risk_groups, &["Personnes sensibles"]);
        assert!(bundle.general_advice.starts_with("Données insuffisantes"));
        assert!(!std::ptr::eq(bundle, generate(SeverityTier::Moderate)));
    }

    #[test]
    fn test_generate_for_reading() {
        let reading = PollutionReading {
            aqi: 4,
            pm2_5: 70.0,
            pm10: 100.0,
            ..Default::default()
        };
        assert_eq!(generate_for(Some(&reading)).risk_level, 3);
    }

    #[test]
    fn test_multiline_activity_guidance() {
        let lines: Vec<&str> = generate(SeverityTier::Poor)
            .activity_guidance
            .lines()
            .collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("⚠️ Personnes sensibles"));
    }

    #[test]
    fn test_render_sections() {
        let text = generate(SeverityTier::Moderate).render();
        assert!(text.starts_with("🌡️ NIVEAU: Modéré\n\n"));
        assert!(text.contains("⚠️ GROUPES À RISQUE:\n• 👶 Enfants et nourrissons\n"));
        assert!(text.contains("🩺 SYMPTÔMES À SURVEILLER:"));
        assert!(text.contains("🛡️ PRÉCAUTIONS À PRENDRE:"));
        assert!(text.ends_with("(course longue distance, cyclisme intensif)"));

        let excellent = generate(SeverityTier::Excellent).render();
        assert!(!excellent.contains("GROUPES À RISQUE"));
        assert!(!excellent.contains("SYMPTÔMES"));
        assert!(excellent.contains("🏃 ACTIVITÉS PHYSIQUES:\n✅"));
    }
}
