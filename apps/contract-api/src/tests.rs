//! HTTP endpoint integration tests using axum-test

use std::io::{Cursor, Write};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::{
    routing::{get, post},
    Router,
};
use axum_test::TestServer;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::json;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::handlers;
use crate::provider::MockProvider;
use crate::state::AppState;

const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Create a test server with the full router and the mock provider
fn create_test_server() -> TestServer {
    let state = Arc::new(AppState {
        provider: Arc::new(MockProvider),
    });

    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/documents/extract", post(handlers::extract_document))
        .route("/api/documents/analyze", post(handlers::analyze_document))
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Build a base64-encoded minimal DOCX with one paragraph per entry
fn docx_fixture(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{}</w:body></w:document>",
        body
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    BASE64.encode(writer.finish().unwrap().into_inner())
}

#[tokio::test]
async fn test_health_returns_200() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "contract-api");
}

#[tokio::test]
async fn test_analyze_docx_end_to_end() {
    let server = create_test_server();
    let document = docx_fixture(&[
        "CONTRACT DE ANGAJARE",
        "1. Obiectul contractului",
        "Angajatul presteaza activitate conform fisei postului.",
    ]);

    let response = server
        .post("/api/documents/analyze")
        .json(&json!({
            "filename": "contract.docx",
            "mime_type": MIME_DOCX,
            "document_base64": document,
        }))
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["contract_type"], "employment");
    assert_eq!(json["filename"], "contract.docx");
    assert_eq!(json["document"]["page_count"], serde_json::Value::Null);
    assert_eq!(json["document"]["has_scanned_pages"], false);
    assert_eq!(json["clauses"].as_array().unwrap().len(), 2);
    assert!(json["analysis"]["overall_risk_score"].is_number());
}

#[tokio::test]
async fn test_extract_endpoint_omits_analysis() {
    let server = create_test_server();
    let document = docx_fixture(&["Acord de confidențialitate", "1. Durata"]);

    let response = server
        .post("/api/documents/extract")
        .json(&json!({
            "filename": "nda.docx",
            "mime_type": MIME_DOCX,
            "document_base64": document,
        }))
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["contract_type"], "nda");
    assert!(json.get("analysis").is_none());
}

#[tokio::test]
async fn test_unsupported_mime_type_is_415() {
    let server = create_test_server();
    let response = server
        .post("/api/documents/analyze")
        .json(&json!({
            "filename": "notes.txt",
            "mime_type": "text/plain",
            "document_base64": BASE64.encode(b"hello"),
        }))
        .await;
    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_invalid_base64_is_400() {
    let server = create_test_server();
    let response = server
        .post("/api/documents/analyze")
        .json(&json!({
            "filename": "contract.docx",
            "mime_type": MIME_DOCX,
            "document_base64": "%%% not base64 %%%",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_corrupt_docx_is_422() {
    let server = create_test_server();
    let response = server
        .post("/api/documents/analyze")
        .json(&json!({
            "filename": "contract.docx",
            "mime_type": MIME_DOCX,
            "document_base64": BASE64.encode(b"this is not a zip container"),
        }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
