//! The pairs-matching puzzle that gates the Chaos universe.

use starlit_core::{Countdown, Rng};

/// Number of distinct photos in the pool.
pub const PICTURE_COUNT: usize = 4;
/// Cards in a deck: every photo appears on exactly two cards.
pub const DECK_SIZE: usize = PICTURE_COUNT * 2;

/// Seconds a mismatched pair stays face-up before flipping back.
pub const MISMATCH_DELAY: f32 = 1.0;
/// Seconds between the final match and the game-won signal.
pub const WIN_DELAY: f32 = 0.5;

/// Which of the source photos a card depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictureId(pub u8);

/// Result of a card selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Selection rejected: pair pending, index already face-up, or game over.
    Ignored,
    /// First card of a pair turned face-up.
    Revealed(usize),
    /// Pair confirmed; both cards are now permanently face-up.
    Matched(usize, usize),
    /// Pair rejected; both cards flip back after [`MISMATCH_DELAY`].
    Mismatched(usize, usize),
}

/// Deferred game signal surfaced by [`MatchGame::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSignal {
    /// The mismatch delay elapsed; these two cards turned face-down again.
    FlipBack(usize, usize),
    /// Every pair is solved. Fires exactly once per deck.
    Won,
}

/// Concentration over a shuffled 8-card deck.
pub struct MatchGame {
    deck: [PictureId; DECK_SIZE],
    /// Face-up, unconfirmed card indices (0–2 of them).
    revealed: Vec<usize>,
    /// Permanently face-up cards.
    solved: [bool; DECK_SIZE],
    solved_count: usize,
    flip_back: Countdown,
    win: Countdown,
    won: bool,
}

impl MatchGame {
    /// Build a freshly shuffled deck.
    pub fn new(rng: &mut Rng) -> Self {
        let mut deck = [PictureId(0); DECK_SIZE];
        for (i, card) in deck.iter_mut().enumerate() {
            *card = PictureId((i % PICTURE_COUNT) as u8);
        }
        rng.shuffle(&mut deck);
        Self::from_deck(deck)
    }

    /// Build from a fixed deck order (tests, replays).
    pub fn from_deck(deck: [PictureId; DECK_SIZE]) -> Self {
        Self {
            deck,
            revealed: Vec::with_capacity(2),
            solved: [false; DECK_SIZE],
            solved_count: 0,
            flip_back: Countdown::new(),
            win: Countdown::new(),
            won: false,
        }
    }

    pub fn deck(&self) -> &[PictureId; DECK_SIZE] {
        &self.deck
    }

    pub fn picture(&self, index: usize) -> PictureId {
        self.deck[index]
    }

    pub fn is_solved(&self, index: usize) -> bool {
        self.solved[index]
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    /// Face-up for rendering: revealed or solved.
    pub fn is_face_up(&self, index: usize) -> bool {
        self.is_revealed(index) || self.is_solved(index)
    }

    pub fn solved_count(&self) -> usize {
        self.solved_count
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Turn a card face-up.
    ///
    /// No-op while two cards await comparison, and for any card already
    /// face-up. Re-selecting is never a deselect.
    pub fn select(&mut self, index: usize) -> SelectOutcome {
        if self.won
            || index >= DECK_SIZE
            || self.revealed.len() == 2
            || self.is_revealed(index)
            || self.solved[index]
        {
            return SelectOutcome::Ignored;
        }

        self.revealed.push(index);
        if self.revealed.len() < 2 {
            return SelectOutcome::Revealed(index);
        }

        let (a, b) = (self.revealed[0], self.revealed[1]);
        if self.deck[a] == self.deck[b] {
            self.solved[a] = true;
            self.solved[b] = true;
            self.solved_count += 2;
            self.revealed.clear();
            if self.solved_count == DECK_SIZE {
                self.win.start(WIN_DELAY);
            }
            SelectOutcome::Matched(a, b)
        } else {
            self.flip_back.start(MISMATCH_DELAY);
            SelectOutcome::Mismatched(a, b)
        }
    }

    /// Advance the delayed flip-back and win timers one fixed step.
    pub fn tick(&mut self, dt: f32) -> Option<MatchSignal> {
        if self.flip_back.tick(dt) {
            // The timer is only ever armed with a full pair revealed.
            if let [a, b] = self.revealed[..] {
                self.revealed.clear();
                return Some(MatchSignal::FlipBack(a, b));
            }
        }
        if self.win.tick(dt) && !self.won {
            self.won = true;
            return Some(MatchSignal::Won);
        }
        None
    }

    /// Fresh deck, canceling any pending timers.
    pub fn reset(&mut self, rng: &mut Rng) {
        *self = Self::new(rng);
    }
}
