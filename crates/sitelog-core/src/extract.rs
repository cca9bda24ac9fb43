//! Section extraction: one regex search, fixed-cardinality capture groups.

use regex::RegexBuilder;

use crate::error::ExtractError;

/// Ordered capture values from one extraction.
///
/// Length always equals the section count the extraction was asked for;
/// a record is never partially filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRecord {
    values: Vec<String>,
}

impl ExtractedRecord {
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}

/// Run a single search of `pattern` over `text` and collect capture groups
/// `1..=section_count` in declared order.
///
/// The search is unanchored (a match anywhere in the text counts) and `.`
/// matches newlines, so a pattern can span line boundaries. Group 0, the
/// whole match, is never included.
pub fn extract_sections(
    pattern: &str,
    text: &str,
    section_count: usize,
) -> Result<ExtractedRecord, ExtractError> {
    if pattern.is_empty() || text.is_empty() {
        return Err(ExtractError::InvalidArgument(
            "empty pattern or input text".to_string(),
        ));
    }

    let matcher = RegexBuilder::new(pattern)
        .dot_matches_new_line(true)
        .build()
        .map_err(|e| ExtractError::InvalidArgument(format!("invalid pattern: {e}")))?;

    let caps = matcher
        .captures(text)
        .ok_or_else(|| ExtractError::NoMatch(format!("pattern {pattern:?} matched nothing")))?;

    let mut values = Vec::with_capacity(section_count);
    for index in 1..=section_count {
        // A present group that matched nothing yields "", but a group the
        // pattern never declared means the configured section count is wrong.
        let group = caps.get(index).ok_or_else(|| {
            ExtractError::NoMatch(format!(
                "capture group {index} absent: pattern declares fewer groups than requested"
            ))
        })?;
        values.push(group.as_str().to_string());
    }

    Ok(ExtractedRecord { values })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_groups_in_declared_order() {
        let record = extract_sections("(\\w+)-(\\w+)", "see alpha-beta here", 2).unwrap();
        assert_eq!(record.values(), ["alpha", "beta"]);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn match_is_not_anchored_at_start() {
        let record = extract_sections("value=(\\d+)", "junk junk value=42", 1).unwrap();
        assert_eq!(record.values(), ["42"]);
    }

    #[test]
    fn dot_matches_across_newlines() {
        let text = "Now Playing\nsome track\nComing up";
        let record = extract_sections("Now Playing(.*)Coming up", text, 1).unwrap();
        assert_eq!(record.values(), ["\nsome track\n"]);
    }

    #[test]
    fn whole_match_group_is_excluded() {
        let record = extract_sections("a(b)c", "xx abc xx", 1).unwrap();
        assert_eq!(record.values(), ["b"]);
    }

    #[test]
    fn empty_text_is_invalid_argument() {
        let err = extract_sections("(a)", "", 1).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidArgument(_)));
    }

    #[test]
    fn empty_pattern_is_invalid_argument() {
        let err = extract_sections("", "some text", 1).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidArgument(_)));
    }

    #[test]
    fn uncompilable_pattern_is_invalid_argument() {
        let err = extract_sections("(unclosed", "some text", 1).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidArgument(_)));
    }

    #[test]
    fn non_matching_text_is_no_match() {
        let err = extract_sections("(\\d+)", "no digits here", 1).unwrap_err();
        assert!(matches!(err, ExtractError::NoMatch(_)));
    }

    #[test]
    fn missing_declared_group_is_no_match() {
        // Pattern matches but only declares one group; two were requested.
        let err = extract_sections("(\\w+)", "hello", 2).unwrap_err();
        assert!(matches!(err, ExtractError::NoMatch(_)));
    }

    #[test]
    fn zero_sections_yields_empty_record() {
        let record = extract_sections("\\w+", "hello", 0).unwrap();
        assert!(record.is_empty());
    }
}
