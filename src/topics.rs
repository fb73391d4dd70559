//! Topic list parsing.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::error::{Error, Result};

/// Header line at the top of the hand-maintained topic list.
pub const HEADER: &str = "Berikut list wisatanya.";

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.$").expect("bullet pattern is valid"));

/// A tourism attraction or event name.
pub type Topic = String;

pub fn load_topics(path: &Path) -> Result<Vec<Topic>> {
    let text = fs::read_to_string(path).map_err(|source| {
        Error::reading(path.to_path_buf(), source, |path| Error::TopicsNotFound { path })
    })?;
    Ok(parse_topics(&text))
}

pub fn parse_topics(text: &str) -> Vec<Topic> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut topics: Vec<Topic> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line == HEADER || BULLET_RE.is_match(line) {
            continue;
        }
        if topics.iter().any(|t| t == line) {
            warn!("duplicate topic {line:?} will produce another pair");
        }
        topics.push(line.to_string());
    }

    topics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_header_bullets_and_blanks() {
        let text = "Berikut list wisatanya.\n\n1.\nPulau Biawak\n2.\n  Pantai Karangsong  \n\n10.\nMasjid Agung Indramayu\n";
        assert_eq!(
            parse_topics(text),
            vec!["Pulau Biawak", "Pantai Karangsong", "Masjid Agung Indramayu"]
        );
    }

    #[test]
    fn keeps_lines_that_only_start_with_digits() {
        let text = "1. Pantai Tirtamaya\n2\n3.5\n";
        assert_eq!(parse_topics(text), vec!["1. Pantai Tirtamaya", "2", "3.5"]);
    }

    #[test]
    fn ignores_byte_order_mark_and_crlf() {
        let text = "\u{feff}Berikut list wisatanya.\r\n1.\r\nPulau Biawak\r\n";
        assert_eq!(parse_topics(text), vec!["Pulau Biawak"]);
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(parse_topics("Pulau Biawak\nPulau Biawak\n").len(), 2);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_topics(Path::new("no/such/list-topik.txt")).unwrap_err();
        assert!(matches!(err, Error::TopicsNotFound { .. }));
        assert!(err.to_string().contains("no/such/list-topik.txt"));
    }
}
