//! # tuvung-engine - vocabulary drill engine
//!
//! Pure Rust state machines behind the five review games: flashcards, quiz,
//! memory match, sentence fill-in and word scramble. One parameterized
//! [`DrillSession`] drives a round-by-round drill over an ordered word list:
//! prompt and candidate generation, answer judging, scoring, advancement and
//! completion detection.
//!
//! Design notes:
//! - **No I/O, no clock, no scheduler** - every transition is a discrete,
//!   idempotent call the caller makes; display delays stay in the caller.
//! - **Injected randomness** - shuffles and distractor draws go through
//!   [`RandomSource`], so tests run on seeded generators.
//! - **Inverted persistence** - the one completion record per finished drill
//!   is handed to a caller-supplied [`ResultSink`]; failures are logged and
//!   swallowed, never propagated into a running drill.
//!
//! ## Module structure
//!
//! - [`session`] - the `DrillSession` state machine
//! - [`choice`] - bounded-retry distractor sampling (quiz, sentence fill-in)
//! - [`scramble`] - character pool/slot bookkeeping
//! - [`memory`] - the `2n`-card match board
//! - [`flashcard`] - two-sided card display state
//! - [`random`] - the `RandomSource` capability
//! - [`sink`] - the `ResultSink` capability
//! - [`types`] - shared types and constants
//!
//! ## Example
//!
//! ```rust
//! use tuvung_engine::{DrillMode, DrillSession, VocabItem};
//!
//! let items = vec![
//!     VocabItem::new("cat", "Con mèo"),
//!     VocabItem::new("dog", "Con chó"),
//!     VocabItem::new("sun", "Mặt trời"),
//!     VocabItem::new("moon", "Mặt trăng"),
//! ];
//! let mut session = DrillSession::start(items, DrillMode::Quiz, rand::thread_rng()).unwrap();
//! let answer = session.current_item().unwrap().word.clone();
//! let verdict = session.submit(&answer).unwrap();
//! assert!(verdict.correct);
//! session.advance();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod choice;
pub mod error;
pub mod flashcard;
pub mod memory;
pub mod random;
pub mod scramble;
pub mod session;
pub mod sink;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use choice::{mask_word, ChoiceRound};
pub use error::EngineError;
pub use flashcard::{CardSide, FlashcardRound};
pub use memory::{CardFace, MemoryBoard, MemoryCard};
pub use random::RandomSource;
pub use scramble::{PoolEntry, ScrambleRound};
pub use session::{DrillSession, SessionStatus};
pub use sink::{ResultSink, SinkError};
pub use types::{
    Candidate, CompletionRecord, DrillMode, JudgementResult, VocabItem, CHOICE_COUNT,
    MAX_SAMPLE_ATTEMPTS, POINTS_PER_CORRECT,
};
