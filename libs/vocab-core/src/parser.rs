//! Line-based vocabulary parser.
//!
//! # Format
//! ```text
//! // comment lines and blank lines are ignored
//! der Hund - the dog
//! die Katze - the cat
//! der Hund - dog (animal)
//! ```
//!
//! Each line is split on the first `" - "`. Repeated terms are merged into a
//! single entry whose translations keep first-seen order. There is no
//! escaping, so a term containing `" - "` is split in the wrong place.

use crate::types::VocabList;
use std::collections::HashSet;

/// Literal separator between term and translation.
pub const SEPARATOR: &str = " - ";

/// Prefix marking a comment line.
pub const COMMENT_PREFIX: &str = "//";

/// Parse one line into `(term, translation)`.
///
/// Returns `None` for blank lines, comments, lines without a separator and
/// lines with an empty term. An empty translation is accepted.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
        return None;
    }

    let (term, translation) = trimmed.split_once(SEPARATOR)?;
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    Some((term, translation.trim()))
}

/// Parse sources as if they were concatenated in the order supplied.
pub fn parse<S: AsRef<str>>(sources: &[S]) -> VocabList {
    VocabList::from_pairs(
        sources
            .iter()
            .flat_map(|source| source.as_ref().lines())
            .filter_map(parse_line),
    )
}

/// True when every source is empty or whitespace only.
pub fn all_blank<S: AsRef<str>>(sources: &[S]) -> bool {
    sources.iter().all(|s| s.as_ref().trim().is_empty())
}

/// Parse `sources`, or `fallback` alone when every source is blank.
pub fn parse_or_fallback<S: AsRef<str>>(sources: &[S], fallback: &str) -> VocabList {
    if all_blank(sources) {
        return parse(&[fallback]);
    }
    let non_blank: Vec<&str> = sources
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !s.trim().is_empty())
        .collect();
    parse(&non_blank)
}

/// Number of distinct terms across all sources.
pub fn count_unique_terms<S: AsRef<str>>(sources: &[S]) -> usize {
    sources
        .iter()
        .flat_map(|source| source.as_ref().lines())
        .filter_map(parse_line)
        .map(|(term, _)| term)
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VocabEntry;
    use pretty_assertions::assert_eq;

    fn entry(term: &str, translations: &[&str]) -> VocabEntry {
        VocabEntry {
            term: term.to_string(),
            translations: translations.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn parse_merges_repeated_terms() {
        let input = "der Hund - the dog\ndie Katze - the cat\n// comment\nder Hund - dog (animal)";
        let list = parse(&[input]);
        assert_eq!(
            list.entries(),
            &[
                entry("der Hund", &["the dog", "dog (animal)"]),
                entry("die Katze", &["the cat"]),
            ]
        );
    }

    #[test]
    fn parse_line_skips_invalid_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("// der Hund - the dog"), None);
        assert_eq!(parse_line("der Hund"), None);
        assert_eq!(parse_line("der Hund-the dog"), None);
        assert_eq!(parse_line(" - orphan"), None);
    }

    #[test]
    fn parse_line_splits_on_first_separator() {
        assert_eq!(parse_line("  a - b - c  "), Some(("a", "b - c")));
    }

    #[test]
    fn trailing_separator_is_trimmed_away() {
        // Trimming removes the trailing space, so no separator remains.
        assert_eq!(parse_line("das Haus - "), None);
        assert!(parse(&["das Haus - "]).is_empty());
    }

    #[test]
    fn dedup_spans_sources_and_collapses_duplicates() {
        let a = "der Tisch - the table\nlaufen - to run";
        let b = "der Tisch - the desk\nder Tisch - the table\ngehen - to go";
        let list = parse(&[a, b]);
        assert_eq!(
            list.entries(),
            &[
                entry("der Tisch", &["the table", "the desk"]),
                entry("laufen", &["to run"]),
                entry("gehen", &["to go"]),
            ]
        );
    }

    #[test]
    fn term_order_follows_concatenated_sources() {
        let list = parse(&["b - 1\na - 2", "c - 3\nb - 4"]);
        let terms: Vec<_> = list.iter().map(|e| e.term.as_str()).collect();
        assert_eq!(terms, vec!["b", "a", "c"]);
    }

    #[test]
    fn fallback_used_when_all_sources_blank() {
        let fallback = "die Sonne - the sun\nder Mond - the moon";
        let result = parse_or_fallback(&["", "  \n\t", ""], fallback);
        assert_eq!(result, parse(&[fallback]));
    }

    #[test]
    fn fallback_ignored_when_any_source_has_content() {
        let result = parse_or_fallback(&["", "der Hund - the dog"], "die Sonne - the sun");
        assert_eq!(result.len(), 1);
        assert_eq!(result.entries()[0].term, "der Hund");
    }

    #[test]
    fn empty_fallback_gives_empty_list() {
        assert!(parse_or_fallback::<&str>(&[], "").is_empty());
        assert!(all_blank::<&str>(&[]));
    }

    #[test]
    fn count_unique_terms_ignores_translation_differences() {
        let sources = ["der Hund - the dog\nder Hund - hound", "die Katze - cat\n// x - y"];
        assert_eq!(count_unique_terms(&sources), 2);
    }

    #[test]
    fn windows_line_endings_are_trimmed() {
        let list = parse(&["der Hund - the dog\r\ndie Katze - the cat\r\n"]);
        assert_eq!(list.entries()[0].translations, vec!["the dog"]);
        assert_eq!(list.entries()[1].term, "die Katze");
    }
}
