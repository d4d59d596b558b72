//! Excel-style wildcard matching for PO and SN fragments.
//!
//! Patterns support `*` (any run of characters) and `?` (exactly one
//! character); everything else matches literally, case-insensitively. A
//! pattern without wildcards degrades to a plain comparison.
//!
//! PO identifiers occupy a whole folder segment, so PO patterns are matched
//! against that segment alone and must cover it entirely — `"PO"` does not
//! match the folder `PO2122244`, while `"PO*"` does. Serial numbers can
//! appear anywhere in a key, so plain SN patterns are substring tests
//! against the full key; SN wildcard patterns still cover their candidate
//! entirely, which is what gives `?` its exactly-one meaning.

use regex::Regex;

/// Which part of the key a pattern applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Match against the PO folder segment, full-segment.
    Po,
    /// Match against the entire key.
    Sn,
}

/// Evaluate `pattern` against `candidate` under the given mode.
pub fn wildcard_match(candidate: &str, pattern: &str, mode: MatchMode) -> bool {
    let candidate = candidate.to_lowercase();
    let pattern = pattern.to_lowercase();

    let target = match mode {
        MatchMode::Po => match po_segment(&candidate) {
            Some(segment) => segment,
            // No PO folder in the key: nothing to match against.
            None => return false,
        },
        MatchMode::Sn => candidate.as_str(),
    };

    if !pattern.contains('*') && !pattern.contains('?') {
        return match mode {
            MatchMode::Po => target == pattern,
            MatchMode::Sn => target.contains(&pattern),
        };
    }

    match compile(&pattern) {
        Some(regex) => regex.is_match(target),
        // An uncompilable pattern is recovered locally: strip the wildcard
        // characters and fall back to substring containment.
        None => {
            let stripped: String = pattern.replace(['*', '?'], "");
            target.contains(&stripped)
        }
    }
}

/// The first path segment that starts with `"po"`. Expects a lowercased key.
fn po_segment(key: &str) -> Option<&str> {
    key.split('/').find(|segment| segment.starts_with("po"))
}

/// Compile a lowercased wildcard pattern into an anchored regex, treating
/// every regex metacharacter in the pattern as a literal.
fn compile(pattern: &str) -> Option<Regex> {
    let escaped = regex::escape(pattern)
        .replace("\\*", ".*")
        .replace("\\?", ".");
    Regex::new(&format!("^{escaped}$")).ok()
}
