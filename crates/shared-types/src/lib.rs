pub mod analysis;
pub mod document;

pub use analysis::{AnalysisIssue, AnalysisReport, RiskLevel};
pub use document::{Clause, ClauseKind, ContractType, ProcessedDocument};
