//! Mock API tests for the upload and prediction-creation endpoints
//!
//! Request shapes follow the remote's documented API: a multipart form
//! with a single `content` part for uploads, and an `{"input": {...}}`
//! envelope for prediction creation.

use easel_client::{ClientError, ReplicateClient};
use easel_core::domain::prediction::PredictionStatus;
use easel_core::dto::prediction::PredictionInput;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_create_prediction_posts_input_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/black-forest-labs/flux-kontext-max/predictions"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(json!({
            "input": {
                "prompt": "a full-body portrait",
                "input_image": "https://files.example.com/ref.jpg",
                "aspect_ratio": "2:3",
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "pred-123",
            "model": "black-forest-labs/flux-kontext-max",
            "status": "starting",
            "urls": {
                "get": format!("{}/predictions/pred-123", server.uri()),
                "cancel": format!("{}/predictions/pred-123/cancel", server.uri()),
            },
        })))
        .mount(&server)
        .await;

    let client = ReplicateClient::new(server.uri(), "test-token");

    let prediction = client
        .create_prediction(
            "black-forest-labs/flux-kontext-max",
            PredictionInput {
                prompt: "a full-body portrait".to_string(),
                input_image: Some("https://files.example.com/ref.jpg".to_string()),
                aspect_ratio: Some("2:3".to_string()),
            },
        )
        .await
        .expect("creation should succeed");

    assert_eq!(prediction.id, "pred-123");
    assert_eq!(prediction.status, PredictionStatus::Starting);
    assert!(prediction.status_url().is_some());
}

#[tokio::test]
async fn test_create_prediction_surfaces_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/black-forest-labs/flux-kontext-max/predictions"))
        .respond_with(
            ResponseTemplate::new(402).set_body_string("Billing required to run this model"),
        )
        .mount(&server)
        .await;

    let client = ReplicateClient::new(server.uri(), "test-token");

    let err = client
        .create_prediction(
            "black-forest-labs/flux-kontext-max",
            PredictionInput {
                prompt: "a full-body portrait".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect_err("non-2xx should surface as an API error");

    assert!(err.is_client_error());
    match err {
        ClientError::ApiError { status, message } => {
            assert_eq!(status, 402);
            assert_eq!(message, "Billing required to run this model");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_prediction_reads_predictions_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/predictions/pred-9"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pred-9",
            "status": "processing",
        })))
        .mount(&server)
        .await;

    let client = ReplicateClient::new(server.uri(), "test-token");

    let prediction = client.get_prediction("pred-9").await.unwrap();
    assert_eq!(prediction.status, PredictionStatus::Processing);
}

#[tokio::test]
async fn test_upload_file_sends_multipart_content_part() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "file-42",
            "name": "reference.jpg",
            "content_type": "image/jpeg",
            "size": 11,
            "urls": { "get": "https://files.example.com/file-42" },
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("reference.jpg");
    std::fs::write(&file_path, b"jpeg\xff\xd8bytes").unwrap();

    let client = ReplicateClient::new(server.uri(), "test-token");

    let uploaded = client
        .upload_file(&file_path)
        .await
        .expect("upload should succeed");

    assert_eq!(uploaded.id, "file-42");
    assert_eq!(uploaded.urls.get, "https://files.example.com/file-42");

    // The remote expects one form part named "content" carrying the file
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body).to_lowercase();
    assert!(body.contains("name=\"content\""));
    assert!(body.contains("filename=\"reference.jpg\""));
    assert!(body.contains("image/jpeg"));
}

#[tokio::test]
async fn test_upload_file_missing_path_is_an_io_error() {
    let client = ReplicateClient::new("http://127.0.0.1:1", "test-token");

    let err = client
        .upload_file(std::path::Path::new("/does/not/exist.jpg"))
        .await
        .expect_err("missing file should fail before any request");

    assert!(matches!(err, ClientError::Io(_)));
}
