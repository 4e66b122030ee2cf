//! Data models for the contract analysis API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{AnalysisReport, Clause, ContractType};
use std::collections::BTreeMap;

/// Upload request; the document travels base64-encoded
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub filename: String,
    pub mime_type: String,
    pub document_base64: String,
}

/// Extraction metrics echoed back to the caller
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub page_count: Option<u32>,
    pub word_count: usize,
    pub has_scanned_pages: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

/// Pipeline output without the analysis step
#[derive(Debug, Clone, Serialize)]
pub struct ExtractResponse {
    pub document_id: String,
    pub filename: String,
    pub contract_type: ContractType,
    pub document: DocumentSummary,
    pub clauses: Vec<Clause>,
    pub processed_at: DateTime<Utc>,
}

/// Full pipeline output including the provider's report
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub document_id: String,
    pub filename: String,
    pub contract_type: ContractType,
    pub document: DocumentSummary,
    pub clauses: Vec<Clause>,
    pub analysis: AnalysisReport,
    pub processed_at: DateTime<Utc>,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
