//! Address string tokenizer.
//!
//! Splits a slash-delimited address into template tokens. Handles:
//! - The root address `"/"` (empty template)
//! - Leading, trailing, and consecutive separators (skipped, not errors)
//! - Keyed segments, split at the first `=`
//! - Bare segments: literal tuples and `{name}` references, kept verbatim

use super::ast::{AddressTemplate, Token};

/// Parse an address string into a template.
///
/// Splitting is delimiter-based: empty segments produced by `/`, `//`, or
/// leading/trailing separators are skipped, so parsing is total and the root
/// address yields an empty template. Brace syntax is not validated here.
///
/// # Example
///
/// ```
/// use hieraddr::parse_template;
///
/// let template = parse_template("{selected.profile}/subsystem=datasources");
/// assert_eq!(template.len(), 2);
/// assert!(!template.tokens()[0].has_key());
/// assert_eq!(template.tokens()[1].key(), Some("subsystem"));
///
/// assert!(parse_template("/").is_empty());
/// ```
pub fn parse_template(input: &str) -> AddressTemplate {
    input
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(token_for_segment)
        .collect()
}

/// A segment containing `=` becomes a value expression, split at the first
/// `=`; anything else is kept as a bare token.
fn token_for_segment(segment: &str) -> Token {
    match segment.split_once('=') {
        Some((key, value)) => Token::keyed(key, value),
        None => Token::bare(segment),
    }
}
