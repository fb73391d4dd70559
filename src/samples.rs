//! Reading a generated dataset back for inspection.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::answer::{paragraphs, Language};
use crate::error::{Error, Result};
use crate::record::ConversationRecord;
use crate::validate::detect_language;

pub const DEFAULT_SAMPLE_COUNT: usize = 4;

pub fn load_dataset(path: &Path) -> Result<Vec<ConversationRecord>> {
    let text = fs::read_to_string(path).map_err(|source| {
        Error::reading(path.to_path_buf(), source, |path| Error::DatasetNotFound { path })
    })?;
    serde_json::from_str(&text).map_err(|source| Error::InvalidJson { path: path.to_path_buf(), source })
}

/// Language label for a record's answer. Answers the indicator count cannot
/// decide are shown as Indonesian.
pub fn language_label(record: &ConversationRecord) -> &'static str {
    record
        .answer()
        .and_then(detect_language)
        .unwrap_or(Language::Indonesian)
        .label()
}

/// Plain-text rendering of the first `count` records.
pub fn render_samples(records: &[ConversationRecord], count: usize) -> String {
    let rule = "=".repeat(80);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "SAMPLE CONVERSATIONS FROM INDRAMAYU TOURISM DATASET");
    let _ = writeln!(out, "{rule}");

    for (i, record) in records.iter().take(count).enumerate() {
        let question = record.question().unwrap_or_default();
        let answer = record.answer().unwrap_or_default();
        let parts = paragraphs(answer);

        let _ = writeln!(out, "\n===== SAMPLE {} ({}) =====", i + 1, language_label(record));
        let _ = writeln!(out, "QUESTION: {question}");
        let _ = writeln!(out, "\nANSWER:");
        for (j, paragraph) in parts.iter().enumerate() {
            let _ = writeln!(out, "\nParagraph {}:", j + 1);
            let _ = writeln!(out, "{paragraph}");
        }
        let _ = writeln!(
            out,
            "\nStats: {} characters, {} paragraphs",
            answer.chars().count(),
            parts.len()
        );
        let _ = writeln!(out, "{}", "-".repeat(80));
    }

    out
}
