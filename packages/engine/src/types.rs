//! Common Types and Constants
//!
//! Shared data structures used across all drill modes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==================== Constants ====================

/// Number of answer candidates shown in a choice-based round.
pub const CHOICE_COUNT: usize = 4;

/// Upper bound on uniform draws when sampling distractors.
pub const MAX_SAMPLE_ATTEMPTS: usize = 50;

/// Points awarded per correct quiz answer.
pub const POINTS_PER_CORRECT: u32 = 10;

// ==================== Vocabulary ====================

/// A single word/meaning entry.
///
/// `word` and `meaning` are required non-empty; everything else is optional.
/// Identity for matching and distractor purposes is `word`, case-sensitive as
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabItem {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,
    /// Part of speech; serialized as `type` to match the stored word rows.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl VocabItem {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ipa: None,
            part_of_speech: None,
            meaning: meaning.into(),
            example: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_ipa(mut self, ipa: impl Into<String>) -> Self {
        self.ipa = Some(ipa.into());
        self
    }

    /// Whether this item carries a non-empty example sentence.
    pub fn has_example(&self) -> bool {
        self.example.as_deref().map_or(false, |e| !e.is_empty())
    }
}

// ==================== Drill modes ====================

/// The five review game modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillMode {
    Flashcard,
    Quiz,
    Memory,
    #[serde(rename = "sentence")]
    SentenceFill,
    Scramble,
}

impl DrillMode {
    pub const ALL: [DrillMode; 5] = [
        DrillMode::Flashcard,
        DrillMode::Quiz,
        DrillMode::Memory,
        DrillMode::SentenceFill,
        DrillMode::Scramble,
    ];

    /// Wire name used in stored game results.
    pub fn slug(self) -> &'static str {
        match self {
            DrillMode::Flashcard => "flashcard",
            DrillMode::Quiz => "quiz",
            DrillMode::Memory => "memory",
            DrillMode::SentenceFill => "sentence",
            DrillMode::Scramble => "scramble",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.slug() == slug)
    }

    /// Quiz and SentenceFill rounds present a candidate set.
    pub fn is_choice_based(self) -> bool {
        matches!(self, DrillMode::Quiz | DrillMode::SentenceFill)
    }

    /// Only Quiz awards numeric score; the other modes track completion.
    pub fn is_scored(self) -> bool {
        matches!(self, DrillMode::Quiz)
    }
}

impl fmt::Display for DrillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

// ==================== Round output ====================

/// One selectable answer in a choice-based round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub word: String,
    pub meaning: String,
}

/// Verdict for a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgementResult {
    pub correct: bool,
    pub correct_answer: String,
}

/// Emitted once per finished drill.
///
/// `outcome` carries the display string the result log stores: a point total
/// for quiz drills (`"40 điểm"`) and `"Hoàn thành"` for the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub mode: String,
    pub outcome: String,
    pub item_count: usize,
    pub completed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_round_trips() {
        for mode in DrillMode::ALL {
            assert_eq!(DrillMode::from_slug(mode.slug()), Some(mode));
        }
        assert_eq!(DrillMode::from_slug("sentence"), Some(DrillMode::SentenceFill));
        assert_eq!(DrillMode::from_slug("karaoke"), None);
    }

    #[test]
    fn vocab_item_wire_names() {
        let item = VocabItem {
            word: "cat".to_string(),
            ipa: Some("/kæt/".to_string()),
            part_of_speech: Some("danh từ".to_string()),
            meaning: "Con mèo".to_string(),
            example: Some("The cat is sleeping.".to_string()),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["word"], "cat");
        assert_eq!(json["type"], "danh từ");
        assert_eq!(json["ipa"], "/kæt/");

        let parsed: VocabItem = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let parsed: VocabItem =
            serde_json::from_str(r#"{"word":"dog","meaning":"Con chó"}"#).unwrap();
        assert_eq!(parsed.ipa, None);
        assert_eq!(parsed.part_of_speech, None);
        assert!(!parsed.has_example());
    }

    #[test]
    fn empty_example_does_not_count() {
        let item = VocabItem::new("dog", "Con chó").with_example("");
        assert!(!item.has_example());
        assert!(VocabItem::new("dog", "Con chó")
            .with_example("The dog barked loudly.")
            .has_example());
    }

    #[test]
    fn drill_mode_serializes_to_slug() {
        assert_eq!(
            serde_json::to_string(&DrillMode::SentenceFill).unwrap(),
            "\"sentence\""
        );
        assert_eq!(serde_json::to_string(&DrillMode::Quiz).unwrap(), "\"quiz\"");
    }
}
