use crate::domain::tier::SeverityTier;
use crate::utils::error::{AirAwareError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// One air pollution measurement for a location. Concentrations are in µg/m³.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PollutionReading {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Provider AQI bucket, 1 (best) to 5 (worst).
    pub aqi: i32,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    pub co: f64,
    pub no: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub nh3: f64,
}

impl PollutionReading {
    pub fn status(&self) -> AqiStatus {
        AqiStatus::from_aqi(self.aqi)
    }
}

impl Validate for PollutionReading {
    fn validate(&self) -> Result<()> {
        if !(1..=5).contains(&self.aqi) {
            return Err(AirAwareError::InvalidReading {
                location: self.location.clone(),
                reason: format!("AQI {} outside 1-5", self.aqi),
            });
        }

        let components = [
            ("co", self.co),
            ("no", self.no),
            ("no2", self.no2),
            ("o3", self.o3),
            ("so2", self.so2),
            ("pm2_5", self.pm2_5),
            ("pm10", self.pm10),
            ("nh3", self.nh3),
        ];
        for (name, value) in components {
            if !value.is_finite() || value < 0.0 {
                return Err(AirAwareError::InvalidReading {
                    location: self.location.clone(),
                    reason: format!(
                        "{} concentration {} is not a non-negative number",
                        name, value
                    ),
                });
            }
        }

        Ok(())
    }
}

/// Provider wording for the raw AQI bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiStatus {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
    Unknown,
}

impl AqiStatus {
    pub fn from_aqi(aqi: i32) -> Self {
        match aqi {
            1 => AqiStatus::Good,
            2 => AqiStatus::Fair,
            3 => AqiStatus::Moderate,
            4 => AqiStatus::Poor,
            5 => AqiStatus::VeryPoor,
            _ => AqiStatus::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AqiStatus::Good => "Good",
            AqiStatus::Fair => "Fair",
            AqiStatus::Moderate => "Moderate",
            AqiStatus::Poor => "Poor",
            AqiStatus::VeryPoor => "Very Poor",
            AqiStatus::Unknown => "Unknown",
        }
    }
}

/// Which OpenWeather endpoint to read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FetchMode {
    Current,
    Forecast,
    /// Unix timestamps, `start` inclusive.
    History { start: i64, end: i64 },
}

impl FetchMode {
    pub const NAMES: [&'static str; 3] = ["current", "forecast", "history"];

    /// Builds a mode from its configured name. History needs both bounds and
    /// a non-empty window.
    pub fn from_parts(mode: &str, start: Option<i64>, end: Option<i64>) -> Result<Self> {
        match mode.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(FetchMode::Current),
            "forecast" => Ok(FetchMode::Forecast),
            "history" => {
                let start = *validate_required_field("start", &start)?;
                let end = *validate_required_field("end", &end)?;
                if start >= end {
                    return Err(AirAwareError::InvalidConfigValueError {
                        field: "end".to_string(),
                        value: end.to_string(),
                        reason: format!("History window must end after start ({})", start),
                    });
                }
                Ok(FetchMode::History { start, end })
            }
            other => Err(AirAwareError::InvalidConfigValueError {
                field: "mode".to_string(),
                value: other.to_string(),
                reason: format!("Valid modes: {}", Self::NAMES.join(", ")),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FetchMode::Current => "current",
            FetchMode::Forecast => "forecast",
            FetchMode::History { .. } => "history",
        }
    }
}

/// A city from the fixed catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

// 依字母排序
static CITIES: [City; 12] = [
    City {
        name: "Beijing, Chine",
        latitude: 39.9042,
        longitude: 116.4074,
    },
    City {
        name: "Dhaka, Bangladesh",
        latitude: 23.8103,
        longitude: 90.4125,
    },
    City {
        name: "Londres, Royaume-Uni",
        latitude: 51.5074,
        longitude: -0.1278,
    },
    City {
        name: "Los Angeles, USA",
        latitude: 34.0522,
        longitude: -118.2437,
    },
    City {
        name: "Mexico City, Mexique",
        latitude: 19.4326,
        longitude: -99.1332,
    },
    City {
        name: "Mumbai, Inde",
        latitude: 19.0760,
        longitude: 72.8777,
    },
    City {
        name: "New Delhi, Inde",
        latitude: 28.6139,
        longitude: 77.2090,
    },
    City {
        name: "Paris, France",
        latitude: 48.8566,
        longitude: 2.3522,
    },
    City {
        name: "Reykjavik, Islande",
        latitude: 64.1466,
        longitude: -21.9426,
    },
    City {
        name: "Sydney, Australie",
        latitude: -33.8688,
        longitude: 151.2093,
    },
    City {
        name: "Tokyo, Japon",
        latitude: 35.6762,
        longitude: 139.6503,
    },
    City {
        name: "Zurich, Suisse",
        latitude: 47.3769,
        longitude: 8.5417,
    },
];

impl City {
    pub fn available() -> &'static [City] {
        &CITIES
    }

    /// Name without the country suffix, e.g. `Paris` for `Paris, France`.
    pub fn short_name(&self) -> &'static str {
        self.name.split(',').next().unwrap_or(self.name).trim()
    }

    /// Case-insensitive lookup on the full name or the short name.
    pub fn find(query: &str) -> Option<&'static City> {
        let query = query.trim();
        CITIES.iter().find(|city| {
            city.name.eq_ignore_ascii_case(query) || city.short_name().eq_ignore_ascii_case(query)
        })
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Canned health advice attached to a tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationBundle {
    pub tier: SeverityTier,
    pub general_advice: &'static str,
    /// Most affected first.
    pub at_risk_groups: &'static [&'static str],
    pub symptoms_to_watch: &'static [&'static str],
    pub precautions: &'static [&'static str],
    pub activity_guidance: &'static str,
    /// 0 (no risk) to 5 (maximal risk).
    pub risk_level: u8,
}

impl RecommendationBundle {
    /// Full multi-section text. Empty lists leave their section out.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = write!(out, "🌡️ NIVEAU: {}\n\n", self.tier.label());
        let _ = write!(out, "📋 RECOMMANDATION GÉNÉRALE:\n{}\n\n", self.general_advice);

        let sections = [
            ("⚠️ GROUPES À RISQUE:", self.at_risk_groups),
            ("🩺 SYMPTÔMES À SURVEILLER:", self.symptoms_to_watch),
            ("🛡️ PRÉCAUTIONS À PRENDRE:", self.precautions),
        ];
        for (title, items) in sections {
            if items.is_empty() {
                continue;
            }
            out.push_str(title);
            out.push('\n');
            for item in items {
                let _ = writeln!(out, "• {}", item);
            }
            out.push('\n');
        }

        out.push_str("🏃 ACTIVITÉS PHYSIQUES:\n");
        out.push_str(self.activity_guidance);
        out
    }
}

/// A classified reading with everything derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub reading: PollutionReading,
    pub status: AqiStatus,
    pub tier: SeverityTier,
    pub score: u8,
    pub hazardous: bool,
    pub healthy: bool,
    pub color_code: &'static str,
    pub short_advice: &'static str,
    pub recommendation: &'static RecommendationBundle,
}

#[derive(Debug, Clone)]
pub struct ReportResult {
    pub assessments: Vec<Assessment>,
    pub csv_output: String,
    pub tsv_output: String,
    /// Hazardous assessments only.
    pub alerts: Vec<Assessment>,
}
