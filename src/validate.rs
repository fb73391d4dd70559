//! Structural, content and language checks over a generated dataset.
//!
//! The validator works on raw JSON rather than the typed records so that
//! malformed files are reported item by item instead of failing at the
//! first bad value.

use std::fmt;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::answer::{paragraphs, Language};
use crate::error::{Error, Result};

pub const MIN_QUESTION_CHARS: usize = 10;
pub const MIN_ANSWER_CHARS: usize = 500;
pub const MIN_PARAGRAPHS: usize = 3;
/// Share of short answers tolerated before content quality fails.
pub const SHORT_ANSWER_TOLERANCE: f64 = 0.1;
/// Boilerplate that must not repeat within a single answer.
pub const REPEATED_PHRASE: &str = "adalah salah satu destinasi wisata unggulan";

const INDONESIAN_INDICATORS: &[&str] = &["adalah", "yang", "dapat", "untuk", "dengan", "berbagai"];
const INDRAMAYU_INDICATORS: &[&str] = &["iku", "sing", "nang", "kanggo", "karo", "macem-macem", "panggon"];

/// Guesses the language of an answer by counting the indicators it contains.
/// Indicators match anywhere in the lowercased text, so "singgah" counts as
/// "sing". Returns `None` on a tie.
pub fn detect_language(text: &str) -> Option<Language> {
    let lower = text.to_lowercase();
    let score = |indicators: &[&str]| indicators.iter().filter(|w| lower.contains(*w)).count();
    let id = score(INDONESIAN_INDICATORS);
    let ind = score(INDRAMAYU_INDICATORS);

    match id.cmp(&ind) {
        std::cmp::Ordering::Greater => Some(Language::Indonesian),
        std::cmp::Ordering::Less => Some(Language::Indramayu),
        std::cmp::Ordering::Equal => None,
    }
}

pub fn load_dataset_value(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|source| {
        Error::reading(path.to_path_buf(), source, |path| Error::DatasetNotFound { path })
    })?;
    serde_json::from_str(&text).map_err(|source| Error::InvalidJson { path: path.to_path_buf(), source })
}

/// Loads and checks a dataset file. Unreadable or unparsable files are
/// errors; everything else ends up in the report.
pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    let data = load_dataset_value(path)?;
    Ok(validate(&data))
}

// =============================================================================
// Report types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureIssue {
    RootNotArray,
    NotObject { item: usize },
    MissingConversations { item: usize },
    WrongTurnCount { item: usize },
    TurnNotObject { item: usize, turn: usize },
    MissingRoleOrContent { item: usize, turn: usize },
    InvalidRole { item: usize, turn: usize, role: String },
    ContentNotString { item: usize, turn: usize },
    RoleOrder { item: usize },
    OddRecordCount { len: usize },
    UnpairedQuestion { item: usize },
}

impl fmt::Display for StructureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureIssue::RootNotArray => write!(f, "root element must be an array"),
            StructureIssue::NotObject { item } => write!(f, "item {item} is not an object"),
            StructureIssue::MissingConversations { item } => write!(f, "item {item} missing 'conversations' key"),
            StructureIssue::WrongTurnCount { item } => {
                write!(f, "item {item} conversations must be array with 2 elements")
            }
            StructureIssue::TurnNotObject { item, turn } => {
                write!(f, "item {item}, conversation {turn} is not an object")
            }
            StructureIssue::MissingRoleOrContent { item, turn } => {
                write!(f, "item {item}, conversation {turn} missing role or content")
            }
            StructureIssue::InvalidRole { item, turn, role } => {
                write!(f, "item {item}, conversation {turn} invalid role: {role}")
            }
            StructureIssue::ContentNotString { item, turn } => {
                write!(f, "item {item}, conversation {turn} content is not a string")
            }
            StructureIssue::RoleOrder { item } => write!(f, "item {item} must be a human turn followed by an assistant turn"),
            StructureIssue::OddRecordCount { len } => write!(f, "{len} records cannot form language pairs"),
            StructureIssue::UnpairedQuestion { item } => {
                write!(f, "items {item} and {} do not share the same question", item + 1)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentStats {
    pub total: usize,
    pub average_answer_chars: usize,
    pub short_answers: usize,
    pub missing_paragraphs: usize,
    /// Items whose question is shorter than [`MIN_QUESTION_CHARS`].
    pub short_questions: Vec<usize>,
    /// Items whose answer repeats [`REPEATED_PHRASE`].
    pub repetitive: Vec<usize>,
}

impl ContentStats {
    pub fn issues(&self) -> usize {
        self.short_questions.len() + self.repetitive.len()
    }

    pub fn passed(&self) -> bool {
        self.total > 0
            && self.issues() == 0
            && (self.short_answers as f64) < self.total as f64 * SHORT_ANSWER_TOLERANCE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageStats {
    pub indonesian: usize,
    pub indramayu: usize,
    pub unclear: usize,
}

impl LanguageStats {
    pub fn total(&self) -> usize {
        self.indonesian + self.indramayu + self.unclear
    }

    fn share(&self, count: usize) -> f64 {
        match self.total() {
            0 => 0.0,
            total => count as f64 / total as f64,
        }
    }

    /// Both languages between 40% and 60% of the answers.
    pub fn balanced(&self) -> bool {
        let in_range = |share: f64| (0.4..=0.6).contains(&share);
        in_range(self.share(self.indonesian)) && in_range(self.share(self.indramayu))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub records: usize,
    pub structure: Vec<StructureIssue>,
    pub content: ContentStats,
    pub language: LanguageStats,
}

impl ValidationReport {
    pub fn structure_ok(&self) -> bool {
        self.structure.is_empty()
    }

    /// Language imbalance is reported but never fails validation.
    pub fn passed(&self) -> bool {
        self.structure_ok() && self.content.passed()
    }
}

// =============================================================================
// Checks
// =============================================================================

/// A record that passed the structural checks.
struct Exchange<'a> {
    question: &'a str,
    answer: &'a str,
}

pub fn validate(data: &Value) -> ValidationReport {
    let Some(items) = data.as_array() else {
        return ValidationReport {
            records: 0,
            structure: vec![StructureIssue::RootNotArray],
            content: ContentStats::default(),
            language: LanguageStats::default(),
        };
    };

    let mut structure = Vec::new();
    let exchanges: Vec<Option<Exchange>> = items
        .iter()
        .enumerate()
        .map(|(i, item)| check_item(i, item, &mut structure))
        .collect();

    check_pairs(&exchanges, &mut structure);

    let valid: Vec<(usize, &Exchange)> = exchanges
        .iter()
        .enumerate()
        .filter_map(|(i, e)| e.as_ref().map(|e| (i, e)))
        .collect();

    ValidationReport {
        records: items.len(),
        structure,
        content: check_content(&valid),
        language: check_language(&valid),
    }
}

fn check_item<'a>(i: usize, item: &'a Value, issues: &mut Vec<StructureIssue>) -> Option<Exchange<'a>> {
    let Some(object) = item.as_object() else {
        issues.push(StructureIssue::NotObject { item: i });
        return None;
    };
    let Some(conversations) = object.get("conversations") else {
        issues.push(StructureIssue::MissingConversations { item: i });
        return None;
    };
    let Some(turns) = conversations.as_array().filter(|turns| turns.len() == 2) else {
        issues.push(StructureIssue::WrongTurnCount { item: i });
        return None;
    };

    let before = issues.len();
    let mut parsed = Vec::with_capacity(2);
    for (j, turn) in turns.iter().enumerate() {
        let Some(turn) = turn.as_object() else {
            issues.push(StructureIssue::TurnNotObject { item: i, turn: j });
            continue;
        };
        let (Some(role), Some(content)) = (turn.get("role"), turn.get("content")) else {
            issues.push(StructureIssue::MissingRoleOrContent { item: i, turn: j });
            continue;
        };
        let role = match role.as_str() {
            Some(role @ ("human" | "assistant")) => role,
            _ => {
                let role = role.as_str().map(str::to_string).unwrap_or_else(|| role.to_string());
                issues.push(StructureIssue::InvalidRole { item: i, turn: j, role });
                continue;
            }
        };
        let Some(content) = content.as_str() else {
            issues.push(StructureIssue::ContentNotString { item: i, turn: j });
            continue;
        };
        parsed.push((role, content));
    }

    if issues.len() > before {
        return None;
    }
    match parsed.as_slice() {
        [("human", question), ("assistant", answer)] => Some(Exchange { question: *question, answer: *answer }),
        _ => {
            issues.push(StructureIssue::RoleOrder { item: i });
            None
        }
    }
}

fn check_pairs(exchanges: &[Option<Exchange>], issues: &mut Vec<StructureIssue>) {
    if exchanges.len() % 2 != 0 {
        issues.push(StructureIssue::OddRecordCount { len: exchanges.len() });
    }
    for (k, pair) in exchanges.chunks_exact(2).enumerate() {
        if let [Some(first), Some(second)] = pair {
            if first.question != second.question {
                issues.push(StructureIssue::UnpairedQuestion { item: k * 2 });
            }
        }
    }
}

fn check_content(valid: &[(usize, &Exchange)]) -> ContentStats {
    let mut stats = ContentStats { total: valid.len(), ..Default::default() };
    let mut total_chars = 0;

    for &(i, exchange) in valid {
        if exchange.question.trim().chars().count() < MIN_QUESTION_CHARS {
            stats.short_questions.push(i);
        }

        let chars = exchange.answer.chars().count();
        total_chars += chars;
        if chars < MIN_ANSWER_CHARS {
            stats.short_answers += 1;
        }
        if paragraphs(exchange.answer).len() < MIN_PARAGRAPHS {
            stats.missing_paragraphs += 1;
        }
        if exchange.answer.matches(REPEATED_PHRASE).count() > 1 {
            stats.repetitive.push(i);
        }
    }

    if stats.total > 0 {
        stats.average_answer_chars = total_chars / stats.total;
    }
    stats
}

fn check_language(valid: &[(usize, &Exchange)]) -> LanguageStats {
    let mut stats = LanguageStats::default();
    for (_, exchange) in valid {
        match detect_language(exchange.answer) {
            Some(Language::Indonesian) => stats.indonesian += 1,
            Some(Language::Indramayu) => stats.indramayu += 1,
            None => stats.unclear += 1,
        }
    }
    stats
}

// =============================================================================
// Rendering
// =============================================================================

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        let pct = |count: usize| match self.language.total() {
            0 => 0.0,
            total => 100.0 * count as f64 / total as f64,
        };

        writeln!(f, "{rule}")?;
        writeln!(f, "JSON STRUCTURE ({} records)", self.records)?;
        for issue in &self.structure {
            writeln!(f, "  FAIL {issue}")?;
        }
        if self.structure_ok() {
            writeln!(f, "  OK structure is valid")?;
        } else {
            writeln!(f, "  FAIL {} structural issues", self.structure.len())?;
        }

        writeln!(f, "\n{rule}")?;
        writeln!(f, "CONTENT QUALITY")?;
        let c = &self.content;
        writeln!(f, "  Total conversations: {}", c.total)?;
        writeln!(f, "  Average answer length: {} characters", c.average_answer_chars)?;
        writeln!(f, "  Short answers (<{MIN_ANSWER_CHARS} chars): {}", c.short_answers)?;
        writeln!(f, "  Fewer than {MIN_PARAGRAPHS} paragraphs: {}", c.missing_paragraphs)?;
        for item in &c.short_questions {
            writeln!(f, "  FAIL item {item}: question too short")?;
        }
        for item in &c.repetitive {
            writeln!(f, "  FAIL item {item}: repeated boilerplate")?;
        }
        if c.passed() {
            writeln!(f, "  OK content quality is good")?;
        } else if c.total == 0 {
            writeln!(f, "  FAIL dataset has no valid conversations")?;
        } else {
            writeln!(f, "  FAIL {} content quality issues", c.issues())?;
        }

        writeln!(f, "\n{rule}")?;
        writeln!(f, "LANGUAGE DISTRIBUTION")?;
        let l = &self.language;
        writeln!(f, "  {}: {} ({:.1}%)", Language::Indonesian.label(), l.indonesian, pct(l.indonesian))?;
        writeln!(f, "  {}: {} ({:.1}%)", Language::Indramayu.label(), l.indramayu, pct(l.indramayu))?;
        writeln!(f, "  Unclear: {} ({:.1}%)", l.unclear, pct(l.unclear))?;
        if l.balanced() {
            writeln!(f, "  OK language distribution is balanced")?;
        } else {
            writeln!(f, "  WARN language distribution may be imbalanced")?;
        }

        writeln!(f, "\n{rule}")?;
        if self.passed() {
            write!(f, "All validations passed")
        } else {
            write!(f, "Some validations failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::Generator;
    use crate::question::QuestionStyle;
    use serde_json::json;

    fn generated(topics: &[&str]) -> Value {
        let topics: Vec<String> = topics.iter().map(|s| s.to_string()).collect();
        let dataset = Generator::new(QuestionStyle::Categorized).generate(&topics);
        serde_json::to_value(&dataset.records).unwrap()
    }

    fn exchange(question: &str, answer: &str) -> Value {
        json!({"conversations": [
            {"role": "human", "content": question},
            {"role": "assistant", "content": answer}
        ]})
    }

    #[test]
    fn generated_dataset_passes() {
        let report = validate(&generated(&["Pulau Biawak", "Pantai Karangsong", "Waduk Bojongsari"]));
        assert!(report.passed(), "{report}");
        assert_eq!(report.records, 6);
        assert_eq!(report.content.short_answers, 0);
        assert_eq!(report.content.missing_paragraphs, 0);
        assert_eq!(report.language, LanguageStats { indonesian: 3, indramayu: 3, unclear: 0 });
        assert!(report.language.balanced());
    }

    #[test]
    fn root_must_be_array() {
        let report = validate(&json!({"conversations": []}));
        assert_eq!(report.structure, vec![StructureIssue::RootNotArray]);
        assert!(!report.passed());
    }

    #[test]
    fn reports_each_structural_problem() {
        let data = json!([
            "not an object",
            {"messages": []},
            {"conversations": [{"role": "human", "content": "x"}]},
            {"conversations": [{"role": "system", "content": "x"}, {"content": "y"}]},
        ]);
        let report = validate(&data);
        assert_eq!(
            report.structure,
            vec![
                StructureIssue::NotObject { item: 0 },
                StructureIssue::MissingConversations { item: 1 },
                StructureIssue::WrongTurnCount { item: 2 },
                StructureIssue::InvalidRole { item: 3, turn: 0, role: "system".into() },
                StructureIssue::MissingRoleOrContent { item: 3, turn: 1 },
            ]
        );
        assert_eq!(report.content.total, 0);
        assert!(!report.passed());
    }

    #[test]
    fn role_order_and_content_type_are_checked() {
        let swapped = json!({"conversations": [
            {"role": "assistant", "content": "a"},
            {"role": "human", "content": "q"}
        ]});
        let numeric = json!({"conversations": [
            {"role": "human", "content": 5},
            {"role": "assistant", "content": "a"}
        ]});
        let report = validate(&json!([swapped, numeric]));
        assert_eq!(
            report.structure,
            vec![
                StructureIssue::RoleOrder { item: 0 },
                StructureIssue::ContentNotString { item: 1, turn: 0 },
            ]
        );
    }

    #[test]
    fn pairs_must_share_question() {
        let mut data = generated(&["Pulau Biawak", "Waduk Bojongsari"]);
        data[3]["conversations"][0]["content"] = json!("Pertanyaan yang berbeda sekali?");
        let report = validate(&data);
        assert_eq!(report.structure, vec![StructureIssue::UnpairedQuestion { item: 2 }]);
    }

    #[test]
    fn odd_record_count_is_structural() {
        let mut data = generated(&["Pulau Biawak"]);
        let first = data[0].clone();
        data.as_array_mut().unwrap().push(first);
        let report = validate(&data);
        assert_eq!(report.structure, vec![StructureIssue::OddRecordCount { len: 3 }]);
    }

    #[test]
    fn short_question_and_repeated_phrase_fail_content() {
        let long = "x".repeat(600);
        let repeated = format!("{REPEATED_PHRASE}.\n\n{REPEATED_PHRASE}.\n\n{long}");
        let data = json!([exchange("Apa?", &long), exchange("Apa?", &long), exchange("Pertanyaan cukup panjang?", &repeated), exchange("Pertanyaan cukup panjang?", &repeated)]);
        let report = validate(&data);
        assert!(report.structure_ok());
        assert_eq!(report.content.short_questions, vec![0, 1]);
        assert_eq!(report.content.repetitive, vec![2, 3]);
        assert_eq!(report.content.missing_paragraphs, 2);
        assert!(!report.content.passed());
    }

    #[test]
    fn short_answers_tolerated_below_ten_percent() {
        let good = compose_long_answer();
        let mut items: Vec<Value> = (0..20).map(|_| exchange("Ceritakan tentang Pulau Biawak.", &good)).collect();
        items[0] = exchange("Ceritakan tentang Pulau Biawak.", "Pendek.\n\nSekali.\n\nJawaban.");
        items[1] = exchange("Ceritakan tentang Pulau Biawak.", "Pendek.\n\nSekali.\n\nJawaban.");
        let report = validate(&Value::Array(items.clone()));
        // 2 of 20 is exactly 10%, which is not under the tolerance.
        assert_eq!(report.content.short_answers, 2);
        assert!(!report.content.passed());

        items[1] = exchange("Ceritakan tentang Pulau Biawak.", &good);
        assert!(validate(&Value::Array(items)).content.passed());
    }

    fn compose_long_answer() -> String {
        crate::answer::compose_answer("Pulau Biawak", Language::Indonesian).text
    }

    #[test]
    fn empty_dataset_fails_content() {
        let report = validate(&json!([]));
        assert!(report.structure_ok());
        assert!(!report.passed());
    }

    #[test]
    fn language_imbalance_only_warns() {
        let answer = compose_long_answer();
        let data = json!([
            exchange("Ceritakan tentang Pulau Biawak.", &answer),
            exchange("Ceritakan tentang Pulau Biawak.", &answer),
        ]);
        let report = validate(&data);
        assert_eq!(report.language.indonesian, 2);
        assert!(!report.language.balanced());
        assert!(report.passed());
        assert!(report.to_string().contains("WARN language distribution may be imbalanced"));
    }

    #[test]
    fn detects_language_by_indicator_count() {
        assert_eq!(detect_language("Tempat yang dapat dikunjungi untuk berlibur"), Some(Language::Indonesian));
        assert_eq!(detect_language("Papan sing apik kanggo dolan karo kulawarga"), Some(Language::Indramayu));
        assert_eq!(detect_language("DENGAN KARO"), None);
        assert_eq!(detect_language(""), None);
    }

    #[test]
    fn indicators_match_inside_longer_words() {
        // "singgah" carries "sing", nothing Indonesian is present.
        assert_eq!(detect_language("Pengunjung singgah di pantai Karangsong."), Some(Language::Indramayu));
        // "menenangkan" carries "nang" but loses to three Indonesian indicators.
        assert_eq!(
            detect_language("Suasana yang menenangkan untuk bersantai dengan keluarga"),
            Some(Language::Indonesian)
        );
    }

    #[test]
    fn missing_and_invalid_files_are_distinct() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("dataset.json");
        assert!(matches!(load_dataset_value(&missing), Err(Error::DatasetNotFound { .. })));

        std::fs::write(&missing, "[{").unwrap();
        assert!(matches!(load_dataset_value(&missing), Err(Error::InvalidJson { .. })));
    }

    #[test]
    fn file_report_decides_the_outcome() {
        let dir = tempfile::TempDir::new().unwrap();
        let good = dir.path().join("good.json");
        std::fs::write(&good, generated(&["Pulau Biawak"]).to_string()).unwrap();
        assert!(validate_file(&good).unwrap().passed());

        let empty = dir.path().join("empty.json");
        std::fs::write(&empty, "[]").unwrap();
        let report = validate_file(&empty).unwrap();
        assert!(report.structure_ok());
        assert!(!report.passed());

        let missing = dir.path().join("missing.json");
        assert!(matches!(validate_file(&missing), Err(Error::DatasetNotFound { .. })));
    }
}
