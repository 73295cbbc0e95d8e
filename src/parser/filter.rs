//! Keyword gate for claims/events expense lines

use crate::constants::CLAIMS_KEYWORDS;

/// True when the lower-cased line contains any claims keyword
///
/// The match is purely textual, so a keyword in any column qualifies the
/// line.
pub fn matches_claims_keywords(line: &str) -> bool {
    let lowered = line.to_lowercase();
    CLAIMS_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
