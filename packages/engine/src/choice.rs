//! Candidate generation for choice-based rounds (Quiz and SentenceFill).

use crate::random::{pick_index, shuffle, RandomSource};
use crate::types::{Candidate, VocabItem, CHOICE_COUNT, MAX_SAMPLE_ATTEMPTS};

/// Working state of one choice-based round.
#[derive(Debug, Clone)]
pub struct ChoiceRound {
    candidates: Vec<Candidate>,
}

impl ChoiceRound {
    /// Builds the candidate set for `items[cursor]`: the ground truth plus up
    /// to three distractors drawn uniformly from the full set, deduplicated
    /// by word.
    ///
    /// Draws are capped at [`MAX_SAMPLE_ATTEMPTS`] so small or
    /// duplicate-heavy sets cannot hang the loop; the round simply proceeds
    /// with fewer candidates.
    pub(crate) fn generate(
        items: &[VocabItem],
        cursor: usize,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let truth = &items[cursor];
        let mut candidates = vec![Candidate {
            word: truth.word.clone(),
            meaning: truth.meaning.clone(),
        }];

        let mut attempts = 0;
        while candidates.len() < CHOICE_COUNT && attempts < MAX_SAMPLE_ATTEMPTS {
            let drawn = &items[pick_index(rng, items.len())];
            if !candidates.iter().any(|c| c.word == drawn.word) {
                candidates.push(Candidate {
                    word: drawn.word.clone(),
                    meaning: drawn.meaning.clone(),
                });
            }
            attempts += 1;
        }

        shuffle(rng, &mut candidates);
        Self { candidates }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}

/// Masks every occurrence of `word` in `sentence` with a fixed blank,
/// matching ASCII case-insensitively. Used to build fill-in prompts.
pub fn mask_word(sentence: &str, word: &str) -> String {
    if word.is_empty() {
        return sentence.to_string();
    }
    let needle = word.as_bytes();
    let bytes = sentence.as_bytes();
    let mut out = String::with_capacity(sentence.len());
    let mut skip_until = 0;
    for (idx, ch) in sentence.char_indices() {
        if idx < skip_until {
            continue;
        }
        let rest = &bytes[idx..];
        if rest.len() >= needle.len() && rest[..needle.len()].eq_ignore_ascii_case(needle) {
            out.push_str("______");
            skip_until = idx + needle.len();
        } else {
            out.push(ch);
        }
    }
    out
}
