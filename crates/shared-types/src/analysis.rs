//! Types returned by an analysis provider
//!
//! The provider itself (LLM-backed in production) lives behind a trait in
//! the API layer; these are just the wire shapes it produces.

/// Risk level of a single flagged issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

/// One issue flagged by the analysis provider
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisIssue {
    pub title: String,
    pub description: String,
    pub risk: RiskLevel,
    /// Clause number the issue points at, when the provider localized it
    pub clause_reference: Option<String>,
}

/// Structured result of one analysis call
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisReport {
    pub issues: Vec<AnalysisIssue>,
    /// 0-100, higher means riskier
    pub overall_risk_score: u8,
    /// 0-100, higher means more compliant
    pub compliance_score: u8,
}
