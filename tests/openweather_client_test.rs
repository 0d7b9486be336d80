use air_aware::domain::ports::PollutionSource;
use air_aware::{AirAwareError, City, FetchMode, OpenWeatherClient};
use httpmock::prelude::*;
use std::time::Duration;

fn body(lat: f64, lon: f64, entries: &[(i32, f64, f64, i64)]) -> serde_json::Value {
    let list: Vec<serde_json::Value> = entries
        .iter()
        .map(|(aqi, pm2_5, pm10, dt)| {
            serde_json::json!({
                "main": {"aqi": aqi},
                "components": {
                    "co": 230.31, "no": 0.0, "no2": 12.5, "o3": 68.66,
                    "so2": 0.64, "pm2_5": pm2_5, "pm10": pm10, "nh3": 0.12
                },
                "dt": dt
            })
        })
        .collect();
    serde_json::json!({"coord": {"lon": lon, "lat": lat}, "list": list})
}

fn client(server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::new(&server.base_url(), "test-key", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_current_sends_coordinates_and_key() {
    let server = MockServer::start();
    let paris = City::find("Paris").unwrap();

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/air_pollution")
            .query_param("lat", "48.8566")
            .query_param("lon", "2.3522")
            .query_param("appid", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(body(48.8566, 2.3522, &[(2, 14.2, 22.0, 1_700_000_000)]));
    });

    let readings = client(&server).current(paris).await.unwrap();

    api_mock.assert();
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].location, "Paris, France");
    assert_eq!(readings[0].aqi, 2);
    assert_eq!(readings[0].pm2_5, 14.2);
    assert_eq!(readings[0].o3, 68.66);
    assert_eq!(readings[0].timestamp, 1_700_000_000);
}

#[tokio::test]
async fn test_forecast_returns_every_entry() {
    let server = MockServer::start();
    let tokyo = City::find("Tokyo").unwrap();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/air_pollution/forecast");
        then.status(200).json_body(body(
            35.6762,
            139.6503,
            &[
                (2, 15.0, 25.0, 1_700_000_000),
                (3, 30.0, 45.0, 1_700_003_600),
                (3, 42.0, 51.0, 1_700_007_200),
            ],
        ));
    });

    let readings = client(&server)
        .fetch(tokyo, FetchMode::Forecast)
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(readings.len(), 3);
    assert!(readings.iter().all(|r| r.location == "Tokyo, Japon"));
    assert_eq!(readings[2].timestamp, 1_700_007_200);
}

#[tokio::test]
async fn test_history_sends_window() {
    let server = MockServer::start();
    let zurich = City::find("Zurich").unwrap();

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/air_pollution/history")
            .query_param("start", "1606223802")
            .query_param("end", "1606482999")
            .query_param("appid", "test-key");
        then.status(200).json_body(body(47.3769, 8.5417, &[(1, 4.0, 7.0, 1_606_223_802)]));
    });

    let mode = FetchMode::from_parts("history", Some(1_606_223_802), Some(1_606_482_999)).unwrap();
    let readings = client(&server).fetch(zurich, mode).await.unwrap();

    api_mock.assert();
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].aqi, 1);
}

#[tokio::test]
async fn test_unauthorized_maps_to_api_status() {
    let server = MockServer::start();
    let dhaka = City::find("Dhaka").unwrap();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/air_pollution");
        then.status(401).json_body(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key."
        }));
    });

    let err = client(&server).current(dhaka).await.unwrap_err();

    api_mock.assert();
    match err {
        AirAwareError::ApiStatus { status, endpoint } => {
            assert_eq!(status, 401);
            assert_eq!(endpoint, "air_pollution");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_api_error() {
    let server = MockServer::start();
    let mumbai = City::find("Mumbai").unwrap();

    server.mock(|when, then| {
        when.method(GET).path("/air_pollution");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("not json");
    });

    let err = client(&server).current(mumbai).await.unwrap_err();
    assert!(matches!(err, AirAwareError::ApiError(_)));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let server = MockServer::start();
    let sydney = City::find("Sydney").unwrap();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/air_pollution");
        then.status(200).json_body(body(-33.8688, 151.2093, &[(1, 3.0, 6.0, 1)]));
    });

    let client = OpenWeatherClient::new(
        &format!("{}/", server.base_url()),
        "test-key",
        Duration::from_secs(5),
    )
    .unwrap();
    let readings = client.current(sydney).await.unwrap();

    api_mock.assert();
    assert_eq!(readings[0].latitude, -33.8688);
}

#[tokio::test]
async fn test_transport_error_does_not_expose_api_key() {
    // 取得一個沒有人監聽的埠
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api_key = "SECRET-KEY-123";
    let paris = City::find("Paris").unwrap();

    let client = OpenWeatherClient::new(
        &format!("http://127.0.0.1:{}", port),
        api_key,
        Duration::from_secs(2),
    )
    .unwrap();
    let err = client.current(paris).await.unwrap_err();

    assert!(matches!(err, AirAwareError::ApiError(_)));
    assert!(!err.to_string().contains(api_key), "{}", err);
    assert!(!err.user_friendly_message().contains(api_key));
    assert!(!format!("{:?}", err).contains(api_key));
}

#[tokio::test]
async fn test_decode_error_does_not_expose_api_key() {
    let server = MockServer::start();
    let mumbai = City::find("Mumbai").unwrap();

    server.mock(|when, then| {
        when.method(GET).path("/air_pollution");
        then.status(200).body("{\"list\": 42}");
    });

    let err = client(&server).current(mumbai).await.unwrap_err();
    assert!(!err.to_string().contains("test-key"), "{}", err);
}

#[tokio::test]
async fn test_missing_coord_falls_back_to_city() {
    let server = MockServer::start();
    let reykjavik = City::find("Reykjavik").unwrap();

    server.mock(|when, then| {
        when.method(GET).path("/air_pollution");
        then.status(200).json_body(serde_json::json!({
            "list": [{"main": {"aqi": 1}, "components": {"pm2_5": 2.0}, "dt": 1_700_000_000}]
        }));
    });

    let readings = client(&server).current(reykjavik).await.unwrap();

    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].latitude, 64.1466);
    assert_eq!(readings[0].longitude, -21.9426);
}
