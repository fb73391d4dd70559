//! Conversation records in the chat fine-tuning layout.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub conversations: Vec<Turn>,
}

impl ConversationRecord {
    /// A single human question followed by the assistant's answer.
    pub fn exchange(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            conversations: vec![
                Turn { role: Role::Human, content: question.into() },
                Turn { role: Role::Assistant, content: answer.into() },
            ],
        }
    }

    pub fn question(&self) -> Option<&str> {
        self.turn(Role::Human)
    }

    pub fn answer(&self) -> Option<&str> {
        self.turn(Role::Assistant)
    }

    fn turn(&self, role: Role) -> Option<&str> {
        self.conversations
            .iter()
            .find(|t| t.role == role)
            .map(|t| t.content.as_str())
    }
}

/// The Indonesian record followed by the Indramayu record, both asking
/// the same question.
pub fn conversation_pair(question: &str, answer_id: String, answer_ind: String) -> [ConversationRecord; 2] {
    [
        ConversationRecord::exchange(question, answer_id),
        ConversationRecord::exchange(question, answer_ind),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_conversation_schema() {
        let record = ConversationRecord::exchange("Apa itu Pulau Biawak?", "Sebuah pulau.");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "conversations": [
                    {"role": "human", "content": "Apa itu Pulau Biawak?"},
                    {"role": "assistant", "content": "Sebuah pulau."}
                ]
            })
        );
    }

    #[test]
    fn pair_shares_question() {
        let [id, ind] = conversation_pair("Q?", "jawaban".into(), "wangsulan".into());
        assert_eq!(id.question(), ind.question());
        assert_eq!(id.answer(), Some("jawaban"));
        assert_eq!(ind.answer(), Some("wangsulan"));
    }

    #[test]
    fn rejects_unknown_role() {
        let raw = r#"{"conversations":[{"role":"system","content":"x"}]}"#;
        assert!(serde_json::from_str::<ConversationRecord>(raw).is_err());
    }
}
