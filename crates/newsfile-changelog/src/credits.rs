//! Contributor credits

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};
use tracing::debug;

/// Non-breaking space standing in for spaces inside a name while wrapping
const NAME_GLUE: char = '\u{a0}';

fn revision_marker() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^commit [a-z0-9]{40}$").expect("valid revision marker regex"))
}

/// Whether an author line is actually a `commit <hash>` header.
///
/// `git rev-list --format` interleaves these with the formatted output,
/// so they are dropped wherever author names come from.
pub fn is_revision_marker(line: &str) -> bool {
    revision_marker().is_match(line)
}

/// Merge history authors with the team roster: deduplicated, sorted
pub fn collect_contributors<A, T>(authors: A, team: T) -> Vec<String>
where
    A: IntoIterator,
    A::Item: AsRef<str>,
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut names = BTreeSet::new();

    for author in authors {
        let author = author.as_ref().trim();
        if author.is_empty() || is_revision_marker(author) {
            continue;
        }
        names.insert(author.to_string());
    }

    for member in team {
        names.insert(member.as_ref().trim().to_string());
    }

    debug!(count = names.len(), "collected contributors");
    names.into_iter().collect()
}

/// Comma-join names and wrap at `width` columns; a name is never split
pub fn wrap_names(names: &[String], width: usize) -> String {
    let joined = names
        .iter()
        .map(|name| name.replace(' ', &NAME_GLUE.to_string()))
        .collect::<Vec<_>>()
        .join(", ");

    let options = Options::new(width)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .break_words(false);

    textwrap::fill(&joined, options).replace(NAME_GLUE, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revision_marker() {
        assert!(is_revision_marker(&format!("commit {}", "a1".repeat(20))));
        assert!(!is_revision_marker("Commit Bot"));
        assert!(!is_revision_marker("commit abc123"));
    }

    #[test]
    fn test_collect_contributors() {
        let authors = vec![
            format!("commit {}", "0".repeat(40)),
            "Zed".to_string(),
            "Balazs Scheidler".to_string(),
            "Zed".to_string(),
            String::new(),
            "Alice".to_string(),
        ];
        let team = ["Balazs Scheidler", "Gabor Nagy"];

        let contributors = collect_contributors(&authors, team);
        assert_eq!(
            contributors,
            ["Alice", "Balazs Scheidler", "Gabor Nagy", "Zed"]
        );
    }

    #[test]
    fn test_collect_contributors_is_stable() {
        let authors = ["Carol", "Bob", "Carol"];
        let team = ["Alice"];
        assert_eq!(
            collect_contributors(authors, team),
            collect_contributors(authors, team)
        );
    }

    #[test]
    fn test_wrap_short_list() {
        let names = vec!["Alice".to_string(), "Bob Builder".to_string()];
        assert_eq!(wrap_names(&names, 70), "Alice, Bob Builder");
    }

    #[test]
    fn test_wrap_keeps_names_whole() {
        let names: Vec<String> = [
            "Andras Mitzki",
            "Antal Nemes",
            "Attila Szakacs",
            "Balazs Scheidler",
            "Gabor Nagy",
            "Laszlo Budai",
            "Laszlo Szemere",
            "László Várady",
            "Norbert Takacs",
            "Zoltan Pallagi",
            "Jean-Luc de la Vega",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        for width in [10, 25, 70] {
            let wrapped = wrap_names(&names, width);
            let rejoined: Vec<String> = wrapped
                .lines()
                .flat_map(|line| line.split(", "))
                .map(|name| name.trim_end_matches(',').to_string())
                .collect();
            assert_eq!(rejoined, names, "width {}", width);
        }
    }

    #[test]
    fn test_wrap_respects_width() {
        let names: Vec<String> = (0..30).map(|i| format!("Dev {}", i)).collect();
        let wrapped = wrap_names(&names, 70);
        assert!(wrapped.lines().count() > 1);
        assert!(wrapped.lines().all(|l| l.chars().count() <= 70));
    }

    #[test]
    fn test_wrap_counts_inner_spaces() {
        let names: Vec<String> = ["Anna Bell", "Carl Dunn", "Eve Fox"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        // "Anna Bell, Carl Dunn," is 21 columns wide
        assert_eq!(wrap_names(&names, 20), "Anna Bell,\nCarl Dunn, Eve Fox");
        assert_eq!(wrap_names(&names, 21), "Anna Bell, Carl Dunn,\nEve Fox");
        assert!(!wrap_names(&names, 20).contains(NAME_GLUE));
    }
}
