//! Memory-match board: a `2n`-card deck built once per session.

use crate::random::{shuffle, RandomSource};
use crate::types::VocabItem;

/// Which side of a vocabulary item a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Word,
    Meaning,
}

/// One card in the deck. Cards pair up by `key` (the item's word).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCard {
    pub key: String,
    pub face: CardFace,
    pub content: String,
}

/// Working state of a memory drill.
#[derive(Debug, Clone)]
pub struct MemoryBoard {
    cards: Vec<MemoryCard>,
    flipped: Vec<usize>,
    matched: Vec<bool>,
    matched_pairs: usize,
    pending: Option<bool>,
}

impl MemoryBoard {
    /// Builds and shuffles the deck: one word-face and one meaning-face card
    /// per item.
    pub(crate) fn generate(items: &[VocabItem], rng: &mut dyn RandomSource) -> Self {
        let mut cards = Vec::with_capacity(items.len() * 2);
        for item in items {
            cards.push(MemoryCard {
                key: item.word.clone(),
                face: CardFace::Word,
                content: item.word.clone(),
            });
            cards.push(MemoryCard {
                key: item.word.clone(),
                face: CardFace::Meaning,
                content: item.meaning.clone(),
            });
        }
        shuffle(rng, &mut cards);
        let matched = vec![false; cards.len()];
        Self {
            cards,
            flipped: Vec::new(),
            matched,
            matched_pairs: 0,
            pending: None,
        }
    }

    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    /// Indices currently face-up and not yet settled. At most two.
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.get(index).copied().unwrap_or(false)
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// `Some(true)`/`Some(false)` once two cards are up and awaiting the
    /// caller-driven settle; `None` otherwise. While pending, further reveals
    /// are ignored.
    pub fn pending_match(&self) -> Option<bool> {
        self.pending
    }

    pub fn complete(&self) -> bool {
        self.matched_pairs == self.total_pairs()
    }

    /// Turns `index` face-up. No-op while a judgement is pending or when the
    /// card is out of range, already face-up, or matched.
    pub(crate) fn reveal(&mut self, index: usize) -> bool {
        if self.pending.is_some() || self.flipped.len() >= 2 {
            return false;
        }
        if index >= self.cards.len() || self.flipped.contains(&index) || self.matched[index] {
            return false;
        }
        self.flipped.push(index);
        if self.flipped.len() == 2 {
            let first = &self.cards[self.flipped[0]];
            let second = &self.cards[self.flipped[1]];
            self.pending = Some(first.key == second.key);
        }
        true
    }

    /// Applies the pending judgement after the caller-owned settle delay:
    /// a match locks both cards, a mismatch flips them back down.
    pub(crate) fn settle(&mut self) -> Option<bool> {
        let verdict = self.pending.take()?;
        if verdict {
            for &index in &self.flipped {
                self.matched[index] = true;
            }
            self.matched_pairs += 1;
        }
        self.flipped.clear();
        Some(verdict)
    }
}
