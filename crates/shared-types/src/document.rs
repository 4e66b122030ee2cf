use std::collections::BTreeMap;

/// Result of extracting text from an uploaded document
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProcessedDocument {
    /// Full extracted plain text, newline-delimited
    pub text: String,
    /// Page count; only reported for PDF sources (DOCX has no fixed pagination)
    pub page_count: Option<u32>,
    /// Whitespace-delimited non-empty token count
    pub word_count: usize,
    /// True when word density suggests scanned-image pages with no text layer
    pub has_scanned_pages: bool,
    /// Source-format metadata (e.g., the PDF Info dictionary), passed through opaquely
    pub metadata: Option<BTreeMap<String, String>>,
}

/// Structural classification of a clause's first line
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseKind {
    Article,
    Heading,
    Paragraph,
}

/// One segmented unit of contract text
///
/// `start_char`/`end_char` are half-open offsets into the source text,
/// counted in characters (not bytes) so diacritic-heavy text segments
/// cleanly. Offsets are monotonically non-decreasing across a parse.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Clause {
    /// Textual clause/article number if detected (e.g., "1.2", "Art. 5")
    pub clause_number: Option<String>,
    pub clause_type: ClauseKind,
    /// Heading text derived from the matched line
    pub heading: Option<String>,
    /// Full text run belonging to this clause (one or more lines)
    pub content: String,
    pub start_char: usize,
    pub end_char: usize,
    /// 0-based position in the emitted sequence
    pub order_index: usize,
}

/// Coarse commercial category of a contract, assigned by keyword heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Employment,
    Nda,
    License,
    SoftwareDevelopment,
    Lease,
    PurchaseAgreement,
    Partnership,
    Loan,
    B2c,
    B2bServices,
    Other,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Employment => "employment",
            ContractType::Nda => "nda",
            ContractType::License => "license",
            ContractType::SoftwareDevelopment => "software_development",
            ContractType::Lease => "lease",
            ContractType::PurchaseAgreement => "purchase_agreement",
            ContractType::Partnership => "partnership",
            ContractType::Loan => "loan",
            ContractType::B2c => "b2c",
            ContractType::B2bServices => "b2b_services",
            ContractType::Other => "other",
        }
    }
}

impl std::fmt::Display for ContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
