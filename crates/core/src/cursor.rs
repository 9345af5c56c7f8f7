//! Position and flip state over a non-empty, ordered list of cards.
//!
//! The cursor never owns the list; callers pass its length so the same
//! navigation rules serve both the deck editor and the study view.

/// Which card is showing and whether its back side is up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardCursor {
    index: usize,
    flipped: bool,
}

impl CardCursor {
    /// First card, front side up.
    #[must_use]
    pub const fn start() -> Self {
        Self {
            index: 0,
            flipped: false,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Step back one card. Returns `false` (and changes nothing) at the first card.
    pub fn prev(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.jump_to(self.index - 1);
        true
    }

    /// Step forward one card. Returns `false` (and changes nothing) at the last card.
    pub fn next(&mut self, len: usize) -> bool {
        if self.index + 1 >= len {
            return false;
        }
        self.jump_to(self.index + 1);
        true
    }

    /// Move to `index` with the front side up.
    pub fn jump_to(&mut self, index: usize) {
        self.index = index;
        self.flipped = false;
    }

    /// Pull the index back inside a list of `len` cards.
    pub fn clamp(&mut self, len: usize) {
        let last = len.saturating_sub(1);
        if self.index > last {
            self.jump_to(last);
        }
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn has_next(&self, len: usize) -> bool {
        self.index + 1 < len
    }
}
