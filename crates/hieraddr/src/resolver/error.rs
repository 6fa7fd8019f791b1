//! Error types for address resolution.

use thiserror::Error;

/// An error that aborts a resolution call.
///
/// Fatal errors are all-or-nothing: no partial address is returned. Note that
/// an unresolvable *token expression* (a bare `{name}` segment) is not an
/// error at all; it is suppressed with a logged warning and resolution
/// continues. Only the conditions below abort.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A bare literal segment that is not a `key=value` pair. This is a
    /// malformed template, not a context failure.
    #[error("malformed template segment '{segment}': expected 'key=value'")]
    MalformedTemplate { segment: String },

    /// A value-expression reference produced no candidate from the context.
    /// Key and value references of a value expression are mandatory.
    #[error("cannot resolve reference '{{{name}}}'{}", suggestion_suffix(suggestions))]
    UnresolvableReference {
        name: String,
        suggestions: Vec<String>,
    },

    /// More `*` values were encountered than the caller supplied wildcard
    /// replacements for.
    #[error("wildcard underrun: no replacement left for '{key}=*'")]
    WildcardUnderrun { key: String },
}

/// Compute "did you mean" candidates using Levenshtein distance.
///
/// Allows distance <= 1 for names of up to 3 characters and <= 2 otherwise;
/// returns at most 3 candidates, closest first.
pub fn suggest_names(name: &str, candidates: &[String]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut ranked: Vec<(usize, String)> = candidates
        .iter()
        .filter_map(|candidate| {
            let distance = strsim::levenshtein(name, candidate);
            if distance > 0 && distance <= max_distance {
                Some((distance, candidate.clone()))
            } else {
                None
            }
        })
        .collect();

    ranked.sort_by_key(|(distance, _)| *distance);
    ranked.into_iter().take(3).map(|(_, candidate)| candidate).collect()
}

fn suggestion_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}
