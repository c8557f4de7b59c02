//! Character-pool bookkeeping for scramble rounds.

use crate::random::{shuffle, RandomSource};

/// One drawable character tile.
///
/// `id` is the character's position in the target token, so repeated letters
/// stay distinguishable and a removed tile returns to the pool with its
/// identity intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolEntry {
    pub id: usize,
    pub ch: char,
    pub used: bool,
}

/// Working state of one scramble round.
#[derive(Debug, Clone)]
pub struct ScrambleRound {
    target: String,
    pool: Vec<PoolEntry>,
    slots: Vec<Option<usize>>,
}

impl ScrambleRound {
    /// Strips non-alphabetic characters from `word`, lowercases the rest and
    /// shuffles the characters into the draw pool. One slot per character.
    pub(crate) fn generate(word: &str, rng: &mut dyn RandomSource) -> Self {
        let target: String = word
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let mut pool: Vec<PoolEntry> = target
            .chars()
            .enumerate()
            .map(|(id, ch)| PoolEntry { id, ch, used: false })
            .collect();
        let slots = vec![None; pool.len()];
        shuffle(rng, &mut pool);
        Self { target, pool, slots }
    }

    /// The cleaned, lowercased token the player is reassembling.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn pool(&self) -> &[PoolEntry] {
        &self.pool
    }

    /// Per-slot pool entry ids; `None` marks an empty slot.
    pub fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }

    pub fn slots_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Concatenation of the placed characters, in slot order.
    pub fn formed(&self) -> String {
        self.slots
            .iter()
            .filter_map(|slot| {
                slot.and_then(|id| self.pool.iter().find(|e| e.id == id))
                    .map(|e| e.ch)
            })
            .collect()
    }

    pub fn is_solved(&self) -> bool {
        self.slots_full() && self.formed() == self.target
    }

    /// Places the pool entry into the first empty slot. No-op when every slot
    /// is filled or the entry is unknown/already placed.
    pub(crate) fn place(&mut self, entry_id: usize) -> bool {
        let empty = match self.slots.iter().position(|s| s.is_none()) {
            Some(index) => index,
            None => return false,
        };
        match self.pool.iter_mut().find(|e| e.id == entry_id && !e.used) {
            Some(entry) => entry.used = true,
            None => return false,
        }
        self.slots[empty] = Some(entry_id);
        true
    }

    /// Returns the character in `slot_index` to the pool, unused.
    pub(crate) fn remove(&mut self, slot_index: usize) -> bool {
        let entry_id = match self.slots.get(slot_index).copied().flatten() {
            Some(id) => id,
            None => return false,
        };
        self.slots[slot_index] = None;
        if let Some(entry) = self.pool.iter_mut().find(|e| e.id == entry_id) {
            entry.used = false;
        }
        true
    }
}
