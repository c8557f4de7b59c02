//! The drill session state machine.
//!
//! One [`DrillSession`] drives one pass through a vocabulary set in one game
//! mode. All transitions are discrete, idempotent and caller-driven: the
//! engine keeps no timers, so "flip back after a second" style pauses belong
//! to whoever renders the session.

use chrono::Utc;

use crate::choice::ChoiceRound;
use crate::error::EngineError;
use crate::flashcard::{CardSide, FlashcardRound};
use crate::memory::MemoryBoard;
use crate::random::RandomSource;
use crate::scramble::ScrambleRound;
use crate::sink::ResultSink;
use crate::types::{
    Candidate, CompletionRecord, DrillMode, JudgementResult, VocabItem, POINTS_PER_CORRECT,
};

/// Lifecycle phase of a [`DrillSession`].
///
/// `RoundResolved` is the explicit round lock: once a round resolves,
/// repeated submissions are no-ops until the caller advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    InRound,
    RoundResolved,
    Finished,
}

enum RoundState {
    Idle,
    Choice(ChoiceRound),
    Scramble(ScrambleRound),
    Memory(MemoryBoard),
    Flashcard(FlashcardRound),
}

pub struct DrillSession {
    mode: DrillMode,
    items: Vec<VocabItem>,
    cursor: usize,
    score: u32,
    status: SessionStatus,
    round: RoundState,
    rng: Box<dyn RandomSource>,
    sink: Option<Box<dyn ResultSink>>,
    completion: Option<CompletionRecord>,
    delivered: bool,
    skipped: usize,
}

impl DrillSession {
    /// Starts a drill over `items` in `mode`, entering the first round
    /// immediately. Fails when `items` is empty.
    pub fn start(
        items: Vec<VocabItem>,
        mode: DrillMode,
        rng: impl RandomSource + 'static,
    ) -> Result<Self, EngineError> {
        if items.is_empty() {
            return Err(EngineError::InvalidInput);
        }
        let mut session = Self {
            mode,
            items,
            cursor: 0,
            score: 0,
            status: SessionStatus::NotStarted,
            round: RoundState::Idle,
            rng: Box::new(rng),
            sink: None,
            completion: None,
            delivered: false,
            skipped: 0,
        };
        session.begin();
        Ok(session)
    }

    /// Attaches the sink that receives the completion record. If the session
    /// already finished (a sentence drill can skip every item at start), the
    /// record is delivered right away.
    pub fn with_result_sink(mut self, sink: impl ResultSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self.deliver_completion();
        self
    }

    // ==================== Accessors ====================

    pub fn mode(&self) -> DrillMode {
        self.mode
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == SessionStatus::Finished
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Item index for item-ordered modes; matched-pair count for Memory.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sentence items skipped so far for lacking an example.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn current_item(&self) -> Option<&VocabItem> {
        self.items.get(self.cursor)
    }

    /// Candidate set of the current choice-based round.
    pub fn candidates(&self) -> Option<&[Candidate]> {
        match &self.round {
            RoundState::Choice(round) => Some(round.candidates()),
            _ => None,
        }
    }

    pub fn scramble(&self) -> Option<&ScrambleRound> {
        match &self.round {
            RoundState::Scramble(round) => Some(round),
            _ => None,
        }
    }

    pub fn memory(&self) -> Option<&MemoryBoard> {
        match &self.round {
            RoundState::Memory(board) => Some(board),
            _ => None,
        }
    }

    pub fn card_side(&self) -> Option<CardSide> {
        match &self.round {
            RoundState::Flashcard(round) => Some(round.side()),
            _ => None,
        }
    }

    /// The current example sentence with the word masked, for fill-in
    /// prompts. `None` outside SentenceFill rounds.
    pub fn cloze_sentence(&self) -> Option<String> {
        if self.mode != DrillMode::SentenceFill || self.is_finished() {
            return None;
        }
        let item = self.items.get(self.cursor)?;
        let example = item.example.as_deref()?;
        Some(crate::choice::mask_word(example, &item.word))
    }

    /// The record emitted at finish, kept for the caller's summary view.
    pub fn completion_record(&self) -> Option<&CompletionRecord> {
        self.completion.as_ref()
    }

    // ==================== Transitions ====================

    /// Judges `response` against the current item's word (Quiz and
    /// SentenceFill). Quiz compares case-sensitively and scores; SentenceFill
    /// compares case-insensitively and only tracks completion. Returns `None`
    /// once the round is resolved or in modes without submissions.
    pub fn submit(&mut self, response: &str) -> Option<JudgementResult> {
        if self.status != SessionStatus::InRound {
            return None;
        }
        if !matches!(self.round, RoundState::Choice(_)) {
            return None;
        }
        let truth = self.items[self.cursor].word.clone();
        let correct = match self.mode {
            DrillMode::Quiz => response == truth,
            _ => response.to_lowercase() == truth.to_lowercase(),
        };
        if correct && self.mode.is_scored() {
            self.score += POINTS_PER_CORRECT;
        }
        self.status = SessionStatus::RoundResolved;
        Some(JudgementResult {
            correct,
            correct_answer: truth,
        })
    }

    /// Caller-driven advancement, invoked after whatever presentation delay
    /// the caller chooses. Resolved choice/scramble rounds move to the next
    /// item, Memory settles the pending pair, Flashcard steps to the next
    /// card (finishing past the last one). Anything else is a no-op.
    pub fn advance(&mut self) {
        match self.mode {
            DrillMode::Quiz | DrillMode::SentenceFill | DrillMode::Scramble => {
                if self.status == SessionStatus::RoundResolved {
                    self.enter_round(self.cursor + 1);
                }
            }
            DrillMode::Memory => {
                if self.status != SessionStatus::RoundResolved {
                    return;
                }
                let (pairs, done) = match &mut self.round {
                    RoundState::Memory(board) => {
                        board.settle();
                        (board.matched_pairs(), board.complete())
                    }
                    _ => return,
                };
                self.cursor = pairs;
                if done {
                    self.finish();
                } else {
                    self.status = SessionStatus::InRound;
                }
            }
            DrillMode::Flashcard => {
                if self.status != SessionStatus::InRound {
                    return;
                }
                if let RoundState::Flashcard(round) = &mut self.round {
                    round.reset();
                }
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                } else {
                    self.finish();
                }
            }
        }
    }

    /// Places a scramble pool character into the first empty slot. Filling
    /// the last slot with the correct token resolves the round; an incorrect
    /// token leaves it open for rearranging, with no attempt limit.
    pub fn place_character(&mut self, entry_id: usize) {
        if self.status != SessionStatus::InRound {
            return;
        }
        let round = match &mut self.round {
            RoundState::Scramble(round) => round,
            _ => return,
        };
        if round.place(entry_id) && round.is_solved() {
            self.status = SessionStatus::RoundResolved;
        }
    }

    /// Returns the character in `slot_index` to the pool.
    pub fn remove_character(&mut self, slot_index: usize) {
        if self.status != SessionStatus::InRound {
            return;
        }
        if let RoundState::Scramble(round) = &mut self.round {
            round.remove(slot_index);
        }
    }

    /// Turns a memory card face-up. The second reveal of a pair moves the
    /// session to `RoundResolved` with a pending judgement; the caller
    /// settles it via [`advance`](Self::advance) after its display delay.
    pub fn reveal_card(&mut self, index: usize) {
        if self.status != SessionStatus::InRound {
            return;
        }
        let board = match &mut self.round {
            RoundState::Memory(board) => board,
            _ => return,
        };
        board.reveal(index);
        if board.pending_match().is_some() {
            self.status = SessionStatus::RoundResolved;
        }
    }

    /// Flips the current flashcard.
    pub fn flip_card(&mut self) {
        if self.status != SessionStatus::InRound {
            return;
        }
        if let RoundState::Flashcard(round) = &mut self.round {
            round.flip();
        }
    }

    /// Steps back one flashcard; no-op at the first card. Flashcard display
    /// is the only mode with backward navigation, and it resets no state.
    pub fn previous_card(&mut self) {
        if self.status != SessionStatus::InRound || self.cursor == 0 {
            return;
        }
        if let RoundState::Flashcard(round) = &mut self.round {
            round.reset();
            self.cursor -= 1;
        }
    }

    // ==================== Internals ====================

    fn begin(&mut self) {
        match self.mode {
            DrillMode::Memory => {
                self.round = RoundState::Memory(MemoryBoard::generate(&self.items, &mut *self.rng));
                self.status = SessionStatus::InRound;
            }
            DrillMode::Flashcard => {
                self.round = RoundState::Flashcard(FlashcardRound::default());
                self.status = SessionStatus::InRound;
            }
            _ => self.enter_round(0),
        }
    }

    /// Enters the round for `items[cursor]`. Sentence mode skips example-less
    /// items here, at play time; running off the end finishes the session
    /// (possibly with every item skipped).
    fn enter_round(&mut self, cursor: usize) {
        let mut cursor = cursor;
        if self.mode == DrillMode::SentenceFill {
            while cursor < self.items.len() && !self.items[cursor].has_example() {
                self.skipped += 1;
                cursor += 1;
            }
        }
        self.cursor = cursor;
        if cursor >= self.items.len() {
            self.finish();
            return;
        }
        self.status = SessionStatus::InRound;
        match self.mode {
            DrillMode::Scramble => {
                let round = ScrambleRound::generate(&self.items[cursor].word, &mut *self.rng);
                // a word with no letters leaves nothing to place
                if round.is_solved() {
                    self.status = SessionStatus::RoundResolved;
                }
                self.round = RoundState::Scramble(round);
            }
            // Quiz | SentenceFill
            _ => {
                self.round =
                    RoundState::Choice(ChoiceRound::generate(&self.items, cursor, &mut *self.rng));
            }
        }
    }

    fn finish(&mut self) {
        self.status = SessionStatus::Finished;
        let outcome = match self.mode {
            DrillMode::Quiz => format!("{} điểm", self.score),
            _ => "Hoàn thành".to_string(),
        };
        self.completion = Some(CompletionRecord {
            mode: self.mode.slug().to_string(),
            outcome,
            item_count: self.items.len(),
            completed_at: Utc::now(),
        });
        self.deliver_completion();
    }

    /// Hands the completion record to the sink, once. Failure is logged and
    /// swallowed; the engine never retries.
    fn deliver_completion(&mut self) {
        if self.delivered {
            return;
        }
        let record = match self.completion.as_ref() {
            Some(record) => record,
            None => return,
        };
        let sink = match self.sink.as_mut() {
            Some(sink) => sink,
            None => return,
        };
        if let Err(err) = sink.record(record) {
            tracing::warn!(error = %err, mode = %record.mode, "result sink rejected completion record");
        }
        self.delivered = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SinkError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingSink(Arc<Mutex<Vec<CompletionRecord>>>);

    impl ResultSink for RecordingSink {
        fn record(&mut self, record: &CompletionRecord) -> Result<(), SinkError> {
            self.0.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl ResultSink for FailingSink {
        fn record(&mut self, _record: &CompletionRecord) -> Result<(), SinkError> {
            Err(SinkError("kho lưu trữ không phản hồi".to_string()))
        }
    }

    fn items(words: &[&str]) -> Vec<VocabItem> {
        words
            .iter()
            .map(|w| VocabItem::new(*w, format!("nghĩa của {w}")))
            .collect()
    }

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let result = DrillSession::start(Vec::new(), DrillMode::Quiz, rng(1));
        assert_eq!(result.err(), Some(EngineError::InvalidInput));
    }

    #[test]
    fn quiz_round_locks_after_submission() {
        let mut session =
            DrillSession::start(items(&["cat", "dog", "sun", "moon"]), DrillMode::Quiz, rng(2))
                .unwrap();
        let verdict = session.submit("cat").unwrap();
        assert!(verdict.correct);
        assert_eq!(session.score(), 10);
        assert_eq!(session.status(), SessionStatus::RoundResolved);

        // double submit is a no-op
        assert!(session.submit("cat").is_none());
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn quiz_comparison_is_case_sensitive() {
        let mut session =
            DrillSession::start(items(&["cat", "dog", "sun", "moon"]), DrillMode::Quiz, rng(3))
                .unwrap();
        let verdict = session.submit("Cat").unwrap();
        assert!(!verdict.correct);
        assert_eq!(verdict.correct_answer, "cat");
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn sentence_comparison_is_case_insensitive() {
        let sentence_items: Vec<VocabItem> = items(&["cat", "dog", "sun", "moon"])
            .into_iter()
            .map(|item| {
                let word = item.word.clone();
                item.with_example(format!("A sentence about {word}."))
            })
            .collect();
        let mut session =
            DrillSession::start(sentence_items, DrillMode::SentenceFill, rng(4)).unwrap();
        let verdict = session.submit("CAT").unwrap();
        assert!(verdict.correct);
        // sentence drills do not award points
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn sentence_skips_items_without_examples() {
        let drill_items = vec![
            VocabItem::new("cat", "Con mèo"),
            VocabItem::new("dog", "Con chó").with_example("The dog barked loudly."),
            VocabItem::new("sun", "Mặt trời"),
        ];
        let mut session = DrillSession::start(drill_items, DrillMode::SentenceFill, rng(5)).unwrap();
        // first playable item is "dog"
        assert_eq!(session.current_item().unwrap().word, "dog");
        assert_eq!(session.skipped(), 1);
        assert_eq!(session.cloze_sentence().unwrap(), "The ______ barked loudly.");

        session.submit("dog").unwrap();
        session.advance();
        // trailing example-less item ends the drill
        assert!(session.is_finished());
        assert_eq!(session.skipped(), 2);
    }

    #[test]
    fn sentence_drill_with_no_examples_finishes_at_start_and_still_reports() {
        let sink = RecordingSink::default();
        let session = DrillSession::start(items(&["cat", "dog"]), DrillMode::SentenceFill, rng(6))
            .unwrap()
            .with_result_sink(sink.clone());
        assert!(session.is_finished());
        assert_eq!(session.skipped(), 2);

        let records = sink.0.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].mode, "sentence");
        assert_eq!(records[0].outcome, "Hoàn thành");
        assert_eq!(records[0].item_count, 2);
    }

    #[test]
    fn sink_failure_is_swallowed() {
        let mut session = DrillSession::start(items(&["cat"]), DrillMode::Quiz, rng(7))
            .unwrap()
            .with_result_sink(FailingSink);
        session.submit("cat").unwrap();
        session.advance();
        assert!(session.is_finished());
        assert_eq!(session.completion_record().unwrap().outcome, "10 điểm");
    }

    #[test]
    fn completion_record_is_delivered_once() {
        let sink = RecordingSink::default();
        let mut session = DrillSession::start(items(&["cat"]), DrillMode::Quiz, rng(8))
            .unwrap()
            .with_result_sink(sink.clone());
        session.submit("wrong answer").unwrap();
        session.advance();
        assert!(session.is_finished());
        // advancing a finished session must not re-emit
        session.advance();
        session.advance();

        let records = sink.0.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].outcome, "0 điểm");
    }

    #[test]
    fn flashcard_navigation_is_bidirectional() {
        let mut session =
            DrillSession::start(items(&["cat", "dog", "sun"]), DrillMode::Flashcard, rng(9))
                .unwrap();
        assert_eq!(session.card_side(), Some(CardSide::Front));

        session.flip_card();
        assert_eq!(session.card_side(), Some(CardSide::Back));

        session.advance();
        assert_eq!(session.cursor(), 1);
        // navigation lands on the front
        assert_eq!(session.card_side(), Some(CardSide::Front));

        session.previous_card();
        assert_eq!(session.cursor(), 0);
        session.previous_card();
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn flashcard_finishes_past_the_last_card() {
        let sink = RecordingSink::default();
        let mut session = DrillSession::start(items(&["cat", "dog"]), DrillMode::Flashcard, rng(10))
            .unwrap()
            .with_result_sink(sink.clone());
        session.advance();
        session.advance();
        assert!(session.is_finished());
        assert_eq!(sink.0.lock().unwrap()[0].outcome, "Hoàn thành");
    }

    #[test]
    fn submit_outside_choice_modes_is_a_no_op() {
        let mut session =
            DrillSession::start(items(&["cat", "dog"]), DrillMode::Memory, rng(11)).unwrap();
        assert!(session.submit("cat").is_none());
        assert_eq!(session.status(), SessionStatus::InRound);
    }
}
