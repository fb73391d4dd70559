//! Question generation from keyword categories.

use rand::prelude::*;

/// Coarse topic kind, decided by keywords in the topic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicCategory {
    Event,
    Beach,
    Heritage,
    Culinary,
    General,
}

// Checked in order; the first rule with a matching keyword wins.
const CATEGORY_RULES: &[(TopicCategory, &[&str])] = &[
    (TopicCategory::Event, &["Festival", "Upacara", "event tahunan"]),
    (TopicCategory::Beach, &["Pantai"]),
    (TopicCategory::Heritage, &["Museum", "Makam", "Situs"]),
    (TopicCategory::Culinary, &["Kuliner", "Menikmati"]),
];

impl TopicCategory {
    pub fn of(topic: &str) -> Self {
        CATEGORY_RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| topic.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(TopicCategory::General)
    }

    pub fn question(self, topic: &str) -> String {
        match self {
            TopicCategory::Event => format!("Ceritakan tentang {topic} secara detail."),
            TopicCategory::Beach => {
                format!("Apa yang menarik dari {topic} dan bagaimana cara mengunjunginya?")
            }
            TopicCategory::Heritage => {
                format!("Bisakah Anda menceritakan sejarah dan pentingnya {topic}?")
            }
            TopicCategory::Culinary => {
                format!("Ceritakan tentang {topic} dan apa yang membuatnya khas.")
            }
            TopicCategory::General => {
                format!("Bisakah Anda menceritakan tentang {topic} secara lengkap?")
            }
        }
    }
}

/// Category-free templates used when questions are varied with a seed.
const VARIED_TEMPLATES: &[&str] = &[
    "Bisakah Anda menceritakan tentang {TOPIC}?",
    "Apa yang menarik dari {TOPIC}?",
    "Bagaimana sejarah dan daya tarik {TOPIC}?",
    "Ceritakan tentang {TOPIC} secara detail.",
    "Apa saja yang perlu diketahui tentang {TOPIC}?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionStyle {
    /// One fixed template per topic category.
    #[default]
    Categorized,
    /// A seeded random pick among the generic templates.
    Varied { seed: u64 },
}

impl QuestionStyle {
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(QuestionStyle::Categorized, |seed| QuestionStyle::Varied { seed })
    }

    pub fn asker(self) -> QuestionAsker {
        let rng = match self {
            QuestionStyle::Categorized => None,
            QuestionStyle::Varied { seed } => Some(StdRng::seed_from_u64(seed)),
        };
        QuestionAsker { rng }
    }
}

/// Stateful question source for a single generation run.
pub struct QuestionAsker {
    rng: Option<StdRng>,
}

impl QuestionAsker {
    pub fn ask(&mut self, topic: &str) -> String {
        match &mut self.rng {
            None => question_for(topic),
            Some(rng) => match VARIED_TEMPLATES.choose(rng) {
                Some(template) => template.replace("{TOPIC}", topic),
                None => question_for(topic),
            },
        }
    }
}

pub fn question_for(topic: &str) -> String {
    TopicCategory::of(topic).question(topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_keyword_precedence() {
        assert_eq!(TopicCategory::of("Festival Mangga Gedong Gincu"), TopicCategory::Event);
        assert_eq!(TopicCategory::of("Upacara Nadran"), TopicCategory::Event);
        assert_eq!(TopicCategory::of("Pesta Laut (event tahunan)"), TopicCategory::Event);
        // Event keywords are checked before beach keywords.
        assert_eq!(TopicCategory::of("Festival Pantai Tirtamaya"), TopicCategory::Event);
        assert_eq!(TopicCategory::of("Pantai Karangsong"), TopicCategory::Beach);
        assert_eq!(TopicCategory::of("Museum Bandar Cimanuk"), TopicCategory::Heritage);
        assert_eq!(TopicCategory::of("Makam Selawe"), TopicCategory::Heritage);
        assert_eq!(TopicCategory::of("Kuliner Pindang Gombyang"), TopicCategory::Culinary);
        assert_eq!(TopicCategory::of("Menikmati Mangga Gedong Gincu"), TopicCategory::Culinary);
        assert_eq!(TopicCategory::of("Pulau Biawak"), TopicCategory::General);
    }

    #[test]
    fn keyword_match_is_case_sensitive() {
        assert_eq!(TopicCategory::of("pantai kecil"), TopicCategory::General);
    }

    #[test]
    fn categorized_questions() {
        assert_eq!(
            question_for("Pantai Karangsong"),
            "Apa yang menarik dari Pantai Karangsong dan bagaimana cara mengunjunginya?"
        );
        assert_eq!(
            question_for("Pulau Biawak"),
            "Bisakah Anda menceritakan tentang Pulau Biawak secara lengkap?"
        );
    }

    #[test]
    fn categorized_asker_ignores_rng() {
        let mut asker = QuestionStyle::Categorized.asker();
        assert_eq!(asker.ask("Makam Selawe"), question_for("Makam Selawe"));
    }

    #[test]
    fn varied_questions_repeat_for_same_seed() {
        let topics = ["Pulau Biawak", "Pantai Karangsong", "Situs Lemah Abang", "Waduk Bojongsari"];
        let run = |seed| {
            let mut asker = QuestionStyle::Varied { seed }.asker();
            topics.iter().map(|t| asker.ask(t)).collect::<Vec<_>>()
        };
        assert_eq!(run(7), run(7));
        for (question, topic) in run(7).iter().zip(topics) {
            assert!(question.contains(topic));
        }
    }

    #[test]
    fn from_seed_selects_style() {
        assert_eq!(QuestionStyle::from_seed(None), QuestionStyle::Categorized);
        assert_eq!(QuestionStyle::from_seed(Some(3)), QuestionStyle::Varied { seed: 3 });
    }
}
