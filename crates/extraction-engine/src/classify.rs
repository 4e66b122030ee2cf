//! Contract type detection
//!
//! Keyword lookup over the lower-cased text. Table order IS the priority
//! order: specific categories come first and the generic B2C/B2B indicators
//! last, so a text matching several rows gets the most specific label.
//! Keywords are bilingual (English and Romanian).

use shared_types::ContractType;

/// Priority-ordered keyword table; the first matching row wins
const CONTRACT_KEYWORDS: &[(ContractType, &[&str])] = &[
    (ContractType::Employment, &["employment", "angajare"]),
    (
        ContractType::Nda,
        &["nda", "confidentiality", "confidențialitate"],
    ),
    (ContractType::License, &["license", "licență"]),
    (
        ContractType::SoftwareDevelopment,
        &["software development", "dezvoltare software"],
    ),
    (ContractType::Lease, &["lease", "închiriere"]),
    (
        ContractType::PurchaseAgreement,
        &["purchase", "vânzare-cumpărare"],
    ),
    (ContractType::Partnership, &["partnership", "parteneriat"]),
    (ContractType::Loan, &["loan", "credit"]),
    // Generic B2C/B2B indicators, tested only after every specific category
    (ContractType::B2c, &["consumer", "consumator"]),
    (ContractType::B2bServices, &["services", "servicii"]),
];

/// Guess the contract category from its text
///
/// Total function: never fails, returns [`ContractType::Other`] when no
/// keyword matches (including for empty input).
pub fn detect_contract_type(text: &str) -> ContractType {
    let lower = text.to_lowercase();

    for (contract_type, keywords) in CONTRACT_KEYWORDS {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *contract_type;
        }
    }

    ContractType::Other
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detects_each_category_from_english_keywords() {
        let cases = [
            ("This employment agreement...", ContractType::Employment),
            ("Mutual NDA between the parties", ContractType::Nda),
            ("Software license grant", ContractType::License),
            (
                "Statement of work for software development",
                ContractType::SoftwareDevelopment,
            ),
            ("Residential lease agreement", ContractType::Lease),
            ("Asset purchase agreement", ContractType::PurchaseAgreement),
            ("General partnership deed", ContractType::Partnership),
            ("Loan facility agreement", ContractType::Loan),
        ];
        for (text, expected) in cases {
            assert_eq!(detect_contract_type(text), expected, "text: {}", text);
        }
    }

    #[test]
    fn test_detects_romanian_keywords() {
        assert_eq!(
            detect_contract_type("Acord de confidențialitate"),
            ContractType::Nda
        );
        assert_eq!(
            detect_contract_type("Contract de închiriere apartament"),
            ContractType::Lease
        );
        assert_eq!(
            detect_contract_type("Contract de vânzare-cumpărare auto"),
            ContractType::PurchaseAgreement
        );
        assert_eq!(
            detect_contract_type("Acord de parteneriat strategic"),
            ContractType::Partnership
        );
    }

    #[test]
    fn test_specific_category_beats_generic_services_fallback() {
        // Contains both "angajare" (employment) and "servicii" (b2b)
        assert_eq!(
            detect_contract_type("Contract de angajare pentru servicii IT"),
            ContractType::Employment
        );
    }

    #[test]
    fn test_generic_fallbacks_apply_in_order() {
        assert_eq!(
            detect_contract_type("terms offered to the consumer"),
            ContractType::B2c
        );
        assert_eq!(
            detect_contract_type("master agreement for professional services"),
            ContractType::B2bServices
        );
        // Consumer indicator outranks the services indicator
        assert_eq!(
            detect_contract_type("consumer services contract"),
            ContractType::B2c
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            detect_contract_type("EMPLOYMENT AGREEMENT"),
            ContractType::Employment
        );
    }

    #[test]
    fn test_unmatched_and_empty_text_fall_back_to_other() {
        assert_eq!(detect_contract_type(""), ContractType::Other);
        assert_eq!(
            detect_contract_type("lorem ipsum dolor sit amet"),
            ContractType::Other
        );
    }

    #[test]
    fn test_detection_is_idempotent() {
        let text = "Contract de licență software";
        assert_eq!(detect_contract_type(text), detect_contract_type(text));
    }
}
