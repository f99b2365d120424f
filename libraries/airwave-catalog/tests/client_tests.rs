//! Tests for the catalog client.
//!
//! These use a mock provider to verify request shapes, response
//! normalization, and error mapping without a real catalog connection.

use airwave_catalog::{CatalogClient, CatalogConfig, CatalogError};
use airwave_core::{TrackId, TrackSummary};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn track_without_stream(id: &str) -> TrackSummary {
    TrackSummary::new(id, format!("Track {id}"), "Test Artist")
}

// =============================================================================
// Search
// =============================================================================

mod search {
    use super::*;

    #[tokio::test]
    async fn normalizes_numeric_and_string_ids() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tracks"))
            .and(query_param("q", "daft punk"))
            .and(query_param("limit", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 1004,
                    "title": "One More Time",
                    "duration": 320133,
                    "playback_count": 3245698,
                    "user": { "username": "Daft Punk" },
                    "stream_url": "https://cdn.example.com/1004.mp3"
                },
                {
                    "id": "around-the-world",
                    "title": "Around The World",
                    "user": { "username": "Daft Punk" }
                }
            ])))
            .mount(&mock_server)
            .await;

        let client = CatalogClient::new(CatalogConfig::new(mock_server.uri())).unwrap();
        let tracks = client.search("daft punk", 20).await.unwrap();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].id, TrackId::new("1004"));
        assert_eq!(tracks[0].title, "One More Time");
        assert_eq!(tracks[0].artist_name, "Daft Punk");
        assert_eq!(tracks[0].duration_ms, 320_133);
        assert_eq!(
            tracks[0].stream_url.as_deref(),
            Some("https://cdn.example.com/1004.mp3")
        );

        assert_eq!(tracks[1].id, TrackId::new("around-the-world"));
        assert_eq!(tracks[1].duration_ms, 0);
    }

    #[tokio::test]
    async fn accepts_collection_envelope_and_fills_placeholders() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tracks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "collection": [{ "id": 42 }]
            })))
            .mount(&mock_server)
            .await;

        let client = CatalogClient::new(CatalogConfig::new(mock_server.uri())).unwrap();
        let tracks = client.search("anything", 20).await.unwrap();

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Unknown Title");
        assert_eq!(tracks[0].artist_name, "Unknown Artist");
    }

    #[tokio::test]
    async fn truncates_to_limit() {
        let mock_server = MockServer::start().await;

        let body: Vec<_> = (0..10)
            .map(|i| serde_json::json!({ "id": i, "title": format!("Track {i}") }))
            .collect();
        Mock::given(method("GET"))
            .and(path("/tracks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let client = CatalogClient::new(CatalogConfig::new(mock_server.uri())).unwrap();
        let tracks = client.search("q", 3).await.unwrap();
        assert_eq!(tracks.len(), 3);
    }

    #[tokio::test]
    async fn sends_client_id_when_configured() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tracks"))
            .and(query_param("client_id", "abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client =
            CatalogClient::new(CatalogConfig::with_client_id(mock_server.uri(), "abc123"))
                .unwrap();
        client.search("q", 20).await.unwrap();
    }

    #[tokio::test]
    async fn provider_failure_maps_to_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tracks"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&mock_server)
            .await;

        let client = CatalogClient::new(CatalogConfig::new(mock_server.uri())).unwrap();
        let err = client.search("q", 20).await.unwrap_err();

        match err {
            CatalogError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream exploded");
            }
            e => panic!("Expected Api error, got: {:?}", e),
        }
    }
}

// =============================================================================
// Track lookup
// =============================================================================

mod track {
    use super::*;

    #[tokio::test]
    async fn fetches_by_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tracks/1001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 1001,
                "title": "Blinding Lights",
                "duration": 201064,
                "user": { "username": "The Weeknd" },
                "permalink_url": "https://catalog.example/the-weeknd/blinding-lights"
            })))
            .mount(&mock_server)
            .await;

        let client = CatalogClient::new(CatalogConfig::new(mock_server.uri())).unwrap();
        let track = client.track(&TrackId::new("1001")).await.unwrap();

        assert_eq!(track.id, TrackId::new("1001"));
        assert_eq!(track.title, "Blinding Lights");
        assert_eq!(
            track.permalink_url.as_deref(),
            Some("https://catalog.example/the-weeknd/blinding-lights")
        );
    }

    #[tokio::test]
    async fn missing_track_maps_to_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tracks/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = CatalogClient::new(CatalogConfig::new(mock_server.uri())).unwrap();
        let err = client.track(&TrackId::new("ghost")).await.unwrap_err();

        assert!(matches!(err, CatalogError::NotFound(id) if id == TrackId::new("ghost")));
    }
}

// =============================================================================
// Stream resolution
// =============================================================================

mod stream {
    use super::*;

    #[tokio::test]
    async fn embedded_stream_url_short_circuits() {
        // No mock server mounted: an HTTP round-trip would fail loudly
        let client =
            CatalogClient::new(CatalogConfig::new("http://127.0.0.1:9")).unwrap();

        let mut track = track_without_stream("a");
        track.stream_url = Some("https://cdn.example.com/a.mp3".into());

        let url = client.stream_url(&track).await.unwrap();
        assert_eq!(url, "https://cdn.example.com/a.mp3");
    }

    #[tokio::test]
    async fn falls_back_to_stream_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tracks/77/stream"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "url": "https://cdn.example.com/resolved/77.mp3"
            })))
            .mount(&mock_server)
            .await;

        let client = CatalogClient::new(CatalogConfig::new(mock_server.uri())).unwrap();
        let url = client.stream_url(&track_without_stream("77")).await.unwrap();

        assert_eq!(url, "https://cdn.example.com/resolved/77.mp3");
    }

    #[tokio::test]
    async fn null_url_maps_to_missing_stream() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tracks/77/stream"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "url": null })),
            )
            .mount(&mock_server)
            .await;

        let client = CatalogClient::new(CatalogConfig::new(mock_server.uri())).unwrap();
        let err = client
            .stream_url(&track_without_stream("77"))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::MissingStreamUrl(_)));
    }

    #[tokio::test]
    async fn unreachable_provider_is_classified() {
        let client =
            CatalogClient::new(CatalogConfig::new("http://127.0.0.1:9")).unwrap();

        let err = client
            .stream_url(&track_without_stream("a"))
            .await
            .unwrap_err();

        match err {
            CatalogError::Unreachable(_) | CatalogError::Request(_) => {}
            e => panic!("Expected Unreachable or Request error, got: {:?}", e),
        }
    }
}
