//! HTTP handlers for the contract analysis API

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use extraction_engine::{
    detect_contract_type, extract_text, parse_structure, MIME_DOCX, MIME_PDF,
};
use shared_types::{Clause, ContractType, ProcessedDocument};

use crate::error::ApiError;
use crate::models::*;
use crate::provider::ANALYSIS_TIMEOUT_MS;
use crate::state::{AppState, MAX_UPLOAD_BYTES};

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "contract-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Decode and validate an upload, then run the extraction pipeline
async fn process_upload(
    req: &AnalyzeRequest,
) -> Result<(ProcessedDocument, Vec<Clause>, ContractType), ApiError> {
    // Size and type validation happen here, before any parser sees the
    // buffer; the engine assumes a vetted input
    if req.mime_type != MIME_PDF && req.mime_type != MIME_DOCX {
        return Err(ApiError::UnsupportedFileType(req.mime_type.clone()));
    }

    let buffer = BASE64
        .decode(&req.document_base64)
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid document base64: {}", e)))?;

    if buffer.len() > MAX_UPLOAD_BYTES {
        return Err(ApiError::FileTooLarge(buffer.len(), MAX_UPLOAD_BYTES));
    }

    let document = extract_text(buffer, &req.mime_type).await?;
    let clauses = parse_structure(&document.text);
    let contract_type = detect_contract_type(&document.text);

    info!(
        filename = %req.filename,
        words = document.word_count,
        clauses = clauses.len(),
        contract_type = %contract_type,
        "document processed"
    );

    Ok((document, clauses, contract_type))
}

fn summarize(document: &ProcessedDocument) -> DocumentSummary {
    DocumentSummary {
        page_count: document.page_count,
        word_count: document.word_count,
        has_scanned_pages: document.has_scanned_pages,
        metadata: document.metadata.clone(),
    }
}

/// POST /api/documents/extract: extraction, segmentation, classification
pub async fn extract_document(
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let (document, clauses, contract_type) = process_upload(&req).await?;

    Ok(Json(ExtractResponse {
        document_id: Uuid::new_v4().to_string(),
        filename: req.filename,
        contract_type,
        document: summarize(&document),
        clauses,
        processed_at: Utc::now(),
    }))
}

/// POST /api/documents/analyze: full pipeline plus the provider's report
pub async fn analyze_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let (document, clauses, contract_type) = process_upload(&req).await?;

    let analysis = tokio::time::timeout(
        Duration::from_millis(ANALYSIS_TIMEOUT_MS),
        state.provider.analyze(&document.text, contract_type),
    )
    .await
    .map_err(|_| ApiError::AnalysisTimeout(ANALYSIS_TIMEOUT_MS))??;

    Ok(Json(AnalyzeResponse {
        document_id: Uuid::new_v4().to_string(),
        filename: req.filename,
        contract_type,
        document: summarize(&document),
        clauses,
        analysis,
        processed_at: Utc::now(),
    }))
}
