//! Two-sided flashcard display state.

/// Which side of the current card faces the player. The front shows the word
/// and its IPA, the back shows part of speech, meaning and example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardSide {
    #[default]
    Front,
    Back,
}

/// Flip state of the current flashcard. Navigation always lands on the front.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlashcardRound {
    side: CardSide,
}

impl FlashcardRound {
    pub fn side(&self) -> CardSide {
        self.side
    }

    pub(crate) fn flip(&mut self) {
        self.side = match self.side {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        };
    }

    pub(crate) fn reset(&mut self) {
        self.side = CardSide::Front;
    }
}
