//! Pollution classification.
//!
//! Everything here is a pure function of its argument. The AQI bucket from the
//! provider is refined with PM2.5 (and PM10 for the best tier) so borderline
//! buckets land in the stricter or looser neighbouring tier.

use crate::domain::model::{Assessment, PollutionReading};
use crate::domain::services::recommendation;
use crate::domain::tier::SeverityTier;

/// Maps a reading to its tier. First matching rule wins.
///
/// AQI values outside 1-5 fall through to [`SeverityTier::ExtremelyPoor`].
/// Callers that want to reject such input should validate the reading first.
pub fn classify(reading: &PollutionReading) -> SeverityTier {
    let aqi = reading.aqi;
    let pm25 = reading.pm2_5;
    let pm10 = reading.pm10;

    if aqi == 1 && pm25 < 10.0 && pm10 < 20.0 {
        SeverityTier::Excellent
    } else if aqi == 1 || (aqi == 2 && pm25 < 25.0) {
        SeverityTier::Good
    } else if aqi == 2 || (aqi == 3 && pm25 < 50.0) {
        SeverityTier::Moderate
    } else if aqi == 3 || (aqi == 4 && pm25 < 75.0) {
        SeverityTier::Poor
    } else if aqi == 4 || (aqi == 5 && pm25 < 150.0) {
        SeverityTier::VeryPoor
    } else {
        SeverityTier::ExtremelyPoor
    }
}

/// Missing data is treated as `Moderate`.
pub fn classify_or_default(reading: Option<&PollutionReading>) -> SeverityTier {
    reading.map(classify).unwrap_or(SeverityTier::Moderate)
}

// Truncating division clamped to `max`. Negative and NaN inputs count as 0.
fn sub_score(value: f64, divisor: f64, max: u32) -> u32 {
    ((value / divisor) as u32).min(max)
}

/// Global pollution score, 0 (clean) to 100 (heavily polluted).
///
/// The per-pollutant maxima add up to more than 100, the total saturates.
pub fn pollution_score(reading: &PollutionReading) -> u8 {
    let aqi_score = ((reading.aqi.clamp(1, 5) - 1) * 25) as u32;
    let pm25_score = sub_score(reading.pm2_5, 5.0, 40);
    let pm10_score = sub_score(reading.pm10, 10.0, 30);
    let no2_score = sub_score(reading.no2, 10.0, 20);
    let o3_score = sub_score(reading.o3, 30.0, 10);

    (aqi_score + pm25_score + pm10_score + no2_score + o3_score).min(100) as u8
}

pub fn assess(reading: PollutionReading) -> Assessment {
    let tier = classify(&reading);
    let score = pollution_score(&reading);
    let status = reading.status();

    tracing::trace!(
        location = %reading.location,
        aqi = reading.aqi,
        tier = ?tier,
        score,
        "classified reading"
    );

    Assessment {
        status,
        tier,
        score,
        hazardous: tier.is_hazardous(),
        healthy: tier.is_healthy(),
        color_code: tier.color_code(),
        short_advice: tier.short_advice(),
        recommendation: recommendation::generate(tier),
        reading,
    }
}
