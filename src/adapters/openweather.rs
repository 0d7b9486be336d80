use crate::domain::model::{City, PollutionReading};
use serde::{Deserialize, Serialize};

/// Body of the OpenWeather `air_pollution` endpoints (current, forecast and
/// history share it).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirPollutionResponse {
    pub coord: Option<Coord>,
    #[serde(default)]
    pub list: Vec<AirPollutionData>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirPollutionData {
    pub dt: i64,
    pub main: Main,
    #[serde(default)]
    pub components: Components,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Main {
    pub aqi: i32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Components {
    pub co: f64,
    pub no: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub nh3: f64,
}

impl AirPollutionResponse {
    /// One reading per `list` entry, all tagged with the queried city. Falls
    /// back to the city's coordinates when the body has no `coord`.
    pub fn into_readings(self, city: &City) -> Vec<PollutionReading> {
        let coord = self.coord.unwrap_or(Coord {
            lon: city.longitude,
            lat: city.latitude,
        });
        self.list
            .into_iter()
            .map(|data| {
                let c = data.components;
                PollutionReading {
                    location: city.name.to_string(),
                    latitude: coord.lat,
                    longitude: coord.lon,
                    aqi: data.main.aqi,
                    timestamp: data.dt,
                    co: c.co,
                    no: c.no,
                    no2: c.no2,
                    o3: c.o3,
                    so2: c.so2,
                    pm2_5: c.pm2_5,
                    pm10: c.pm10,
                    nh3: c.nh3,
                }
            })
            .collect()
    }
}
