//! Dog CEO API client tests using wiremock.
//!
//! These tests verify that `DogApiClient` calls the right endpoints and
//! maps the response envelope's outcomes onto `DirectoryError`.

use dogdeck::directory::{BreedDirectory, DirectoryError, DogApiClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_all_breeds_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breeds/list/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": {
                "labrador": [],
                "terrier": ["toy", "yorkshire"]
            },
            "status": "success"
        })))
        .mount(&mock_server)
        .await;

    let client = DogApiClient::with_base_url(mock_server.uri());
    let breeds = client.fetch_all_breeds().await.unwrap();

    assert_eq!(breeds.len(), 2);
    assert!(breeds["labrador"].is_empty());
    assert_eq!(breeds["terrier"], vec!["toy", "yorkshire"]);
}

#[tokio::test]
async fn test_fetch_breed_images_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breed/terrier/toy/images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": [
                "https://images.dog.ceo/breeds/terrier-toy/1.jpg",
                "https://images.dog.ceo/breeds/terrier-toy/2.jpg"
            ],
            "status": "success"
        })))
        .mount(&mock_server)
        .await;

    let client = DogApiClient::with_base_url(mock_server.uri());
    let images = client.fetch_breed_images("terrier/toy").await.unwrap();

    assert_eq!(images.len(), 2);
    assert_eq!(images[0], "https://images.dog.ceo/breeds/terrier-toy/1.jpg");
}

#[tokio::test]
async fn test_fetch_random_image_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breed/labrador/images/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "https://images.dog.ceo/breeds/labrador/n02099712_100.jpg",
            "status": "success"
        })))
        .mount(&mock_server)
        .await;

    let client = DogApiClient::with_base_url(mock_server.uri());
    let url = client.fetch_random_image("labrador").await.unwrap();

    assert_eq!(url, "https://images.dog.ceo/breeds/labrador/n02099712_100.jpg");
}

#[tokio::test]
async fn test_error_envelope_maps_to_response_error() {
    let mock_server = MockServer::start().await;

    // dog.ceo reports unknown breeds through the envelope with an HTTP 404
    Mock::given(method("GET"))
        .and(path("/breed/unicorn/images"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Breed not found (master breed does not exist)",
            "status": "error",
            "code": 404
        })))
        .mount(&mock_server)
        .await;

    let client = DogApiClient::with_base_url(mock_server.uri());
    let result = client.fetch_breed_images("unicorn").await;

    match result {
        Err(DirectoryError::Response { message, status, code }) => {
            assert_eq!(message, "Breed not found (master breed does not exist)");
            assert_eq!(status, "error");
            assert_eq!(code, 404);
        }
        other => panic!("expected Response error, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn test_unknown_status_maps_to_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breeds/list/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": {},
            "status": "maybe"
        })))
        .mount(&mock_server)
        .await;

    let client = DogApiClient::with_base_url(mock_server.uri());
    let result = client.fetch_all_breeds().await;

    assert!(matches!(result, Err(DirectoryError::Decode(_))));
}

#[tokio::test]
async fn test_malformed_payload_maps_to_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breeds/list/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = DogApiClient::with_base_url(mock_server.uri());
    let result = client.fetch_all_breeds().await;

    assert!(matches!(result, Err(DirectoryError::Decode(_))));
}

#[tokio::test]
async fn test_connection_failure_maps_to_transport_error() {
    // Port chosen to be unused; no server is started
    let client = DogApiClient::with_base_url("http://127.0.0.1:59999");
    let result = client.fetch_all_breeds().await;

    assert!(matches!(result, Err(DirectoryError::Transport(_))));
}
