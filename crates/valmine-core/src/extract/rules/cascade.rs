//! Ordered pattern-cascade resolution.

use regex::RegexBuilder;
use tracing::trace;

use super::clean_whitespace;
use crate::models::schema::ExtractionRule;

/// Compile-size ceiling for a configured rule, keeping a pathological
/// pattern from ballooning into an expensive program.
const RULE_SIZE_LIMIT: usize = 1 << 20;

/// Try rules in priority order and return the first usable result.
///
/// Rules match with case-insensitive, multi-line, dot-matches-newline
/// semantics, so a pattern may span line breaks. On a match, the first
/// capture group with non-empty trimmed content wins, falling back to the
/// whole match; internal whitespace is collapsed before returning. A rule
/// that fails to compile is skipped without aborting the cascade, as is
/// any rule whose pattern is the input text itself.
pub fn resolve_cascade(rules: &[ExtractionRule], text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    for rule in rules {
        // A pattern equal to the document is configuration gone wrong.
        if rule.pattern == text {
            continue;
        }

        let regex = match RegexBuilder::new(&rule.pattern)
            .case_insensitive(true)
            .multi_line(true)
            .dot_matches_new_line(true)
            .size_limit(RULE_SIZE_LIMIT)
            .build()
        {
            Ok(regex) => regex,
            Err(e) => {
                trace!("skipping malformed rule {:?}: {}", rule.pattern, e);
                continue;
            }
        };

        let Some(caps) = regex.captures(text) else {
            continue;
        };

        for group in caps.iter().skip(1).flatten() {
            if !group.as_str().trim().is_empty() {
                return Some(clean_whitespace(group.as_str()));
            }
        }
        return Some(clean_whitespace(&caps[0]));
    }

    None
}
