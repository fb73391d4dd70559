//! Topic list to conversation dataset.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::answer::{compose_answer, AnswerSource, Language};
use crate::error::{Error, Result};
use crate::question::QuestionStyle;
use crate::record::{conversation_pair, ConversationRecord};
use crate::topics::Topic;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub topics: usize,
    pub records: usize,
    /// Topics answered from hand-written prose rather than the template.
    pub authored_topics: usize,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<ConversationRecord>,
    pub summary: GenerationSummary,
}

pub struct Generator {
    style: QuestionStyle,
}

impl Generator {
    pub fn new(style: QuestionStyle) -> Self {
        Self { style }
    }

    pub fn generate(&self, topics: &[Topic]) -> Dataset {
        let mut asker = self.style.asker();
        let mut records = Vec::with_capacity(topics.len() * 2);
        let mut summary = GenerationSummary { topics: topics.len(), ..Default::default() };

        for (i, topic) in topics.iter().enumerate() {
            debug!("processing {}/{}: {}", i + 1, topics.len(), topic);

            let question = asker.ask(topic);
            let [answer_id, answer_ind] = Language::ALL.map(|language| compose_answer(topic, language));
            if answer_id.source == AnswerSource::Authored {
                summary.authored_topics += 1;
            }

            records.extend(conversation_pair(&question, answer_id.text, answer_ind.text));
        }

        summary.records = records.len();
        info!(
            "generated {} records for {} topics ({} hand-written)",
            summary.records, summary.topics, summary.authored_topics
        );

        Dataset { records, summary }
    }
}

/// Writes `records` as a pretty-printed JSON array, replacing any
/// existing file. Non-ASCII text is written as-is.
pub fn write_dataset(path: &Path, records: &[ConversationRecord]) -> Result<()> {
    let write_err = |source| Error::Write { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    info!("dataset saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::paragraphs;

    fn topics(names: &[&str]) -> Vec<Topic> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn two_records_per_topic_in_input_order() {
        let input = topics(&["Pulau Biawak", "Waduk Bojongsari", "Pantai Karangsong"]);
        let dataset = Generator::new(QuestionStyle::Categorized).generate(&input);

        assert_eq!(dataset.records.len(), 6);
        for (topic, pair) in input.iter().zip(dataset.records.chunks(2)) {
            let question = pair[0].question().unwrap();
            assert!(question.contains(topic.as_str()));
            assert_eq!(pair[1].question(), Some(question));
            assert_ne!(pair[0].answer(), pair[1].answer());
        }
    }

    #[test]
    fn indonesian_comes_before_indramayu() {
        let dataset = Generator::new(QuestionStyle::Categorized).generate(&topics(&["Pantai Karangsong"]));
        assert_eq!(
            dataset.records[0].answer(),
            Some(compose_answer("Pantai Karangsong", Language::Indonesian).text.as_str())
        );
        assert_eq!(
            dataset.records[1].answer(),
            Some(compose_answer("Pantai Karangsong", Language::Indramayu).text.as_str())
        );
    }

    #[test]
    fn every_answer_has_three_paragraphs() {
        let input = topics(&["Festival Mangga Gedong Gincu", "Situs Lemah Abang", "Kuliner Pindang Gombyang"]);
        let dataset = Generator::new(QuestionStyle::Categorized).generate(&input);
        for record in &dataset.records {
            assert!(paragraphs(record.answer().unwrap()).len() >= 3);
        }
    }

    #[test]
    fn summary_counts_authored_topics() {
        let input = topics(&["Pulau Biawak", "Waduk Bojongsari", "Masjid Agung Indramayu"]);
        let summary = Generator::new(QuestionStyle::Categorized).generate(&input).summary;
        assert_eq!(summary, GenerationSummary { topics: 3, records: 6, authored_topics: 2 });
    }

    #[test]
    fn empty_topic_list_yields_empty_dataset() {
        let dataset = Generator::new(QuestionStyle::Categorized).generate(&[]);
        assert!(dataset.records.is_empty());
        assert_eq!(dataset.summary.records, 0);
    }
}
