//! The lexical rule that turns file text into class-name candidates.

use std::collections::BTreeSet;

/// Characters that may appear in a class name.
fn is_class_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '/' | '.' | '-' | '[' | ']')
}

/// Characters additionally allowed inside an arbitrary value such as
/// `bg-[#0f766e]` or `shadow-[0_0_2px_rgba(0,0,0,0.2)]`.
fn is_arbitrary_char(c: char) -> bool {
    is_class_char(c) || matches!(c, '#' | '%' | '(' | ')' | ',' | '+')
}

/// Collect every candidate class name in `text`.
///
/// A candidate is a maximal run of `[A-Za-z0-9_:/.\-\[\]]` with at least one
/// alphanumeric character. Two extra forms are added so that common
/// punctuation does not hide a class: the run with trailing `.`, `:` or `/`
/// removed, and runs containing a bracketed arbitrary value lexed with the
/// wider arbitrary-value character set.
pub fn extract_candidates(text: &str) -> BTreeSet<String> {
    let mut candidates = BTreeSet::new();

    for run in runs(text, is_class_char) {
        insert(&mut candidates, run);
    }

    if text.contains('[') {
        for run in runs(text, is_arbitrary_char) {
            if run.contains('[') && run.contains(']') {
                insert(&mut candidates, run);
            }
        }
    }

    candidates
}

fn runs(text: &str, allowed: fn(char) -> bool) -> impl Iterator<Item = &str> {
    text.split(move |c: char| !allowed(c))
        .filter(|run| !run.is_empty())
}

fn has_alphanumeric(run: &str) -> bool {
    run.bytes().any(|b| b.is_ascii_alphanumeric())
}

fn insert(candidates: &mut BTreeSet<String>, run: &str) {
    if !has_alphanumeric(run) {
        return;
    }
    candidates.insert(run.to_string());

    let trimmed = run.trim_end_matches(['.', ':', '/']);
    if trimmed.len() != run.len() && has_alphanumeric(trimmed) {
        candidates.insert(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<String> {
        extract_candidates(text).into_iter().collect()
    }

    #[test]
    fn test_html_attribute() {
        let candidates = extract_candidates(r#"<div class="bg-teal-500 h-108">"#);
        assert!(candidates.contains("div"));
        assert!(candidates.contains("class"));
        assert!(candidates.contains("bg-teal-500"));
        assert!(candidates.contains("h-108"));
        assert_eq!(candidates.len(), 4);
    }

    #[test]
    fn test_maximal_run_is_not_split() {
        let candidates = extract_candidates("my-bg-teal-500-var");
        assert_eq!(extract("my-bg-teal-500-var"), vec!["my-bg-teal-500-var"]);
        assert!(!candidates.contains("bg-teal-500"));
    }

    #[test]
    fn test_separator_only_runs_are_dropped() {
        assert!(extract("-- :: // [] ..").is_empty());
    }

    #[test]
    fn test_variants_stay_attached() {
        assert_eq!(
            extract("dark:hover:bg-teal-500"),
            vec!["dark:hover:bg-teal-500"]
        );
    }

    #[test]
    fn test_trailing_punctuation() {
        assert_eq!(
            extract("uses text-white."),
            vec!["text-white", "text-white.", "uses"]
        );
    }

    #[test]
    fn test_arbitrary_values() {
        let candidates = extract_candidates(r#"class="bg-[#0f766e] h-[26rem]""#);
        assert!(candidates.contains("bg-[#0f766e]"));
        assert!(candidates.contains("h-[26rem]"));
    }

    #[test]
    fn test_non_ascii_splits_runs() {
        assert_eq!(extract("bg-teal-500→w-full"), vec!["bg-teal-500", "w-full"]);
    }
}
