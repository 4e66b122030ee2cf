//! Clause segmentation for contract text
//!
//! Line-oriented single pass. Numbered articles ("1.", "1.1.", "Art. 5",
//! "Article 10") start new clauses; short all-caps lines become headings;
//! everything else is a paragraph. A clause's content greedily absorbs the
//! following non-blank lines until the next numbered clause start; heading
//! lines do NOT end aggregation, only numbered starts do.
//!
//! Offsets are counted in characters, not bytes, so diacritic-heavy text
//! (Romanian contracts are the common case) segments without corruption.
//! This stage never fails: any input, including the empty string, yields a
//! (possibly empty) clause list.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Clause, ClauseKind};

lazy_static! {
    /// Numbered clause starts: "1.", "1.1.", "Art. 5", "Article 10"
    static ref NUMBERED_CLAUSE: Regex =
        Regex::new(r"(?i)^(\d+\.(?:\d+\.)*|\bArt(?:icle)?\.?\s*\d+)").unwrap();
    /// Short all-caps heading lines ("TERMS AND CONDITIONS")
    static ref ALL_CAPS_HEADING: Regex = Regex::new(r"^[A-Z][A-Z\s]+$").unwrap();
    /// Aggregation cut-off: the next raw line already starts a numbered clause
    static ref CLAUSE_START: Regex = Regex::new(r"(?i)^(\d+\.|\bArt)").unwrap();
}

/// Segment plain text into an ordered clause sequence
pub fn parse_structure(text: &str) -> Vec<Clause> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut clauses: Vec<Clause> = Vec::new();

    // Running character offset into the source text
    let mut cursor = 0usize;
    let mut i = 0usize;

    while i < lines.len() {
        let line = lines[i].trim();
        if line.is_empty() {
            // +1 for the newline removed by the split
            cursor += char_len(lines[i]) + 1;
            i += 1;
            continue;
        }

        let numbered = NUMBERED_CLAUSE.find(line);
        let is_heading = char_len(line) < 100
            && (line == line.to_uppercase() || ALL_CAPS_HEADING.is_match(line));

        // Numbered wins over the heading heuristic when a line matches both
        let (clause_type, clause_number, heading) = if let Some(m) = numbered {
            let rest = line[m.end()..].trim();
            (
                ClauseKind::Article,
                Some(m.as_str().to_string()),
                (!rest.is_empty()).then(|| rest.to_string()),
            )
        } else if is_heading {
            (ClauseKind::Heading, None, Some(line.to_string()))
        } else {
            (ClauseKind::Paragraph, None, None)
        };

        // Absorb following non-blank lines until the next numbered clause.
        // The cut-off tests the raw line, so an indented "1. ..." is absorbed
        // rather than starting a clause of its own.
        let mut content = line.to_string();
        let mut j = i + 1;
        while j < lines.len() && !lines[j].trim().is_empty() && !CLAUSE_START.is_match(lines[j]) {
            content.push('\n');
            content.push_str(lines[j].trim());
            j += 1;
        }

        let start_char = cursor;
        let end_char = start_char + char_len(&content);

        clauses.push(Clause {
            clause_number,
            clause_type,
            heading,
            content,
            start_char,
            end_char,
            order_index: clauses.len(),
        });

        cursor = end_char + 1;
        i = j;
    }

    clauses
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
