use serde::{Deserialize, Serialize};
use std::fmt;

/// Pollution severity, declared from least to most severe.
///
/// The derived `Ord` follows declaration order, so `a < b` means `b` is the
/// more dangerous tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Excellent,
    Good,
    Moderate,
    Poor,
    VeryPoor,
    ExtremelyPoor,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 6] = [
        SeverityTier::Excellent,
        SeverityTier::Good,
        SeverityTier::Moderate,
        SeverityTier::Poor,
        SeverityTier::VeryPoor,
        SeverityTier::ExtremelyPoor,
    ];

    /// Position in severity order, 0 for `Excellent`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityTier::Excellent => "Excellent",
            SeverityTier::Good => "Bon",
            SeverityTier::Moderate => "Modéré",
            SeverityTier::Poor => "Mauvais",
            SeverityTier::VeryPoor => "Très mauvais",
            SeverityTier::ExtremelyPoor => "Extrêmement mauvais",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SeverityTier::Excellent => "Air très pur",
            SeverityTier::Good => "Qualité de l'air satisfaisante",
            SeverityTier::Moderate => "Qualité acceptable pour la plupart",
            SeverityTier::Poor => "Effets sur la santé pour certains groupes",
            SeverityTier::VeryPoor => "Alerte santé, tout le monde peut être affecté",
            SeverityTier::ExtremelyPoor => "Urgence sanitaire, danger pour tous",
        }
    }

    pub fn is_hazardous(self) -> bool {
        matches!(self, SeverityTier::VeryPoor | SeverityTier::ExtremelyPoor)
    }

    pub fn is_healthy(self) -> bool {
        matches!(self, SeverityTier::Excellent | SeverityTier::Good)
    }

    /// Hex RGB color used to paint the tier.
    pub fn color_code(self) -> &'static str {
        match self {
            SeverityTier::Excellent => "#00E400",
            SeverityTier::Good => "#92D050",
            SeverityTier::Moderate => "#FFFF00",
            SeverityTier::Poor => "#FF7E00",
            SeverityTier::VeryPoor => "#FF0000",
            SeverityTier::ExtremelyPoor => "#8F3F97",
        }
    }

    /// One-line guidance for the tier.
    pub fn short_advice(self) -> &'static str {
        match self {
            SeverityTier::Excellent => "Conditions idéales pour toutes activités extérieures.",
            SeverityTier::Good => "Profitez de vos activités extérieures en toute sécurité.",
            SeverityTier::Moderate => {
                "Qualité acceptable. Personnes sensibles : limitez les efforts prolongés."
            }
            SeverityTier::Poor => "Réduisez les activités physiques intenses à l'extérieur.",
            SeverityTier::VeryPoor => {
                "Évitez les activités extérieures. Restez à l'intérieur si possible."
            }
            SeverityTier::ExtremelyPoor => {
                "ALERTE ! Restez à l'intérieur. Portez un masque si vous devez sortir."
            }
        }
    }

    /// Compact summary used in list views, prefixed by the risk icon.
    pub fn summary(self) -> &'static str {
        match self {
            SeverityTier::Excellent => "✅ Air pur - Toutes activités recommandées",
            SeverityTier::Good => "✅ Bonne qualité - Activités normales",
            SeverityTier::Moderate => "⚠️ Qualité acceptable - Sensibles: limiter efforts prolongés",
            SeverityTier::Poor => "🚫 Mauvaise qualité - Réduire activités extérieures",
            SeverityTier::VeryPoor => "⛔ Très mauvais - Éviter sorties, rester à l'intérieur",
            SeverityTier::ExtremelyPoor => "🆘 URGENCE - Confinement strict recommandé",
        }
    }

    pub fn risk_icon(self) -> &'static str {
        match self {
            SeverityTier::Excellent | SeverityTier::Good => "✅",
            SeverityTier::Moderate => "⚠️",
            SeverityTier::Poor => "🚫",
            SeverityTier::VeryPoor => "⛔",
            SeverityTier::ExtremelyPoor => "🆘",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            SeverityTier::Excellent => "😊",
            SeverityTier::Good => "🙂",
            SeverityTier::Moderate => "😐",
            SeverityTier::Poor => "😟",
            SeverityTier::VeryPoor => "😷",
            SeverityTier::ExtremelyPoor => "☠️",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_follows_severity() {
        for pair in SeverityTier::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].index() + 1, pair[1].index());
        }
    }

    #[test]
    fn test_hazardous_and_healthy_are_exclusive() {
        for tier in SeverityTier::ALL {
            assert!(!(tier.is_hazardous() && tier.is_healthy()), "{:?}", tier);
        }

        let hazardous: Vec<_> = SeverityTier::ALL
            .into_iter()
            .filter(|t| t.is_hazardous())
            .collect();
        assert_eq!(
            hazardous,
            vec![SeverityTier::VeryPoor, SeverityTier::ExtremelyPoor]
        );

        let healthy: Vec<_> = SeverityTier::ALL
            .into_iter()
            .filter(|t| t.is_healthy())
            .collect();
        assert_eq!(healthy, vec![SeverityTier::Excellent, SeverityTier::Good]);
    }

    #[test]
    fn test_palette() {
        assert_eq!(SeverityTier::Moderate.color_code(), "#FFFF00");
        assert_eq!(SeverityTier::Poor.color_code(), "#FF7E00");
        assert_eq!(SeverityTier::ExtremelyPoor.color_code(), "#8F3F97");

        let mut colors: Vec<_> = SeverityTier::ALL.iter().map(|t| t.color_code()).collect();
        colors.dedup();
        assert_eq!(colors.len(), 6);
    }

    #[test]
    fn test_summary_starts_with_risk_icon() {
        for tier in SeverityTier::ALL {
            assert!(tier.summary().starts_with(tier.risk_icon()), "{:?}", tier);
        }
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(SeverityTier::VeryPoor.to_string(), "Très mauvais");
        assert_eq!(
            serde_json::to_string(&SeverityTier::VeryPoor).unwrap(),
            "\"very_poor\""
        );
    }
}
