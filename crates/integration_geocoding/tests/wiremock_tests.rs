//! Integration tests for the Nominatim client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! including query construction and error mapping.

use domain::value_objects::Coordinate;
use integration_geocoding::{GeocodingClient, GeocodingConfig, GeocodingError, NominatimClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{headers, method, path, query_param},
};

fn sample_search_response() -> serde_json::Value {
    serde_json::json!([
        {
            "place_id": 123,
            "lat": "48.8566",
            "lon": "2.3522",
            "display_name": "Paris, Île-de-France, France",
            "importance": 0.9
        },
        {
            "place_id": 456,
            "lat": "33.6617",
            "lon": "-95.5555",
            "display_name": "Paris, Lamar County, Texas, United States",
            "importance": 0.6
        }
    ])
}

fn sample_reverse_response() -> serde_json::Value {
    serde_json::json!({
        "place_id": 789,
        "lat": "48.85837",
        "lon": "2.294481",
        "display_name": "Tour Eiffel, 5, Avenue Anatole France, Paris, France",
        "address": {
            "tourism": "Tour Eiffel",
            "road": "Avenue Anatole France",
            "city": "Paris",
            "country": "France"
        }
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> NominatimClient {
    let config = GeocodingConfig {
        base_url: mock_server.uri(),
        ..GeocodingConfig::for_testing()
    };
    #[allow(clippy::expect_used)]
    NominatimClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn test_search_returns_candidates_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "paris"))
        .and(query_param("format", "json"))
        .and(query_param("limit", "5"))
        .and(headers("Accept-Language", vec!["en-US", "en"]))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_search_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let candidates = client.search("paris").await.expect("search");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].display_name, "Paris, Île-de-France, France");
    assert!((candidates[0].coordinate.latitude() - 48.8566).abs() < 1e-9);
    assert!((candidates[1].coordinate.longitude() + 95.5555).abs() < 1e-9);
}

#[tokio::test]
async fn test_search_unknown_query_yields_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let candidates = client.search("xyzzy nowhere").await.expect("search");
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_search_skips_malformed_entries() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!([
        {"lat": "garbage", "lon": "2.35", "display_name": "Bad"},
        {"lat": "48.8566", "lon": "2.3522", "display_name": "Paris, France"}
    ]);
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let candidates = client.search("paris").await.expect("search");
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].display_name, "Paris, France");
}

#[tokio::test]
async fn test_search_rate_limit_maps_to_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.search("paris").await;
    assert!(matches!(result, Err(GeocodingError::RateLimitExceeded)));
}

#[tokio::test]
async fn test_search_server_error_maps_to_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.search("paris").await;
    assert!(matches!(result, Err(GeocodingError::ServiceUnavailable(_))));
}

#[tokio::test]
async fn test_search_invalid_json_maps_to_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.search("paris").await;
    assert!(matches!(result, Err(GeocodingError::ParseError(_))));
}

#[tokio::test]
async fn test_search_empty_query_skips_request() {
    let mock_server = MockServer::start().await;
    // No mock mounted: any request would fail

    let client = create_test_client(&mock_server);
    let candidates = client.search("   ").await.expect("search");
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_reverse_returns_display_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("lat", "48.85837"))
        .and(query_param("lon", "2.294481"))
        .and(query_param("format", "json"))
        .and(query_param("zoom", "18"))
        .and(query_param("addressdetails", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_reverse_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let coordinate = Coordinate::new(48.85837, 2.294481).expect("coordinate");
    let name = client.reverse(coordinate).await.expect("reverse");
    assert_eq!(
        name.as_deref(),
        Some("Tour Eiffel, 5, Avenue Anatole France, Paris, France")
    );
}

#[tokio::test]
async fn test_reverse_unknown_point_yields_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let coordinate = Coordinate::new(0.0, 0.0).expect("coordinate");
    let name = client.reverse(coordinate).await.expect("reverse");
    assert!(name.is_none());
}

#[tokio::test]
async fn test_reverse_missing_name_yields_none() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({"lat": "0.0", "lon": "0.0", "display_name": null});
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let coordinate = Coordinate::new(0.0, 0.0).expect("coordinate");
    let name = client.reverse(coordinate).await.expect("reverse");
    assert!(name.is_none());
}

#[tokio::test]
async fn test_is_healthy_true_on_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy().await);
}

#[tokio::test]
async fn test_is_healthy_false_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(!client.is_healthy().await);
}
