//! The session state machine.
//!
//! One [`Session`] owns one play-through: the level table, the RNG, the
//! current deal, the play history, and the status. Hosts drive it through
//! a handful of operations and read the resulting state; nothing else
//! mutates it. Sessions are plain owned values, so independent games (and
//! tests) can run side by side.
//!
//! ## State transitions
//!
//! ```text
//! Playing --play--> Won | Lost
//! Won --advance--> Playing (next level) | Completed (final level)
//! Lost --retry--> Playing (same level, fresh deal)
//! Won | Lost --undo--> Playing
//! Completed --restart--> Playing (level 1)
//! ```
//!
//! `Completed` is sticky: every operation except [`Session::restart`] is a
//! no-op once the run is complete.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Card, CardIdAllocator, GameRng, Hand};
use crate::deal::Deal;
use crate::levels::LevelTable;
use crate::view::{self, Balance};

/// Where the session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Cards remain and the target is not yet matched.
    Playing,
    /// The running total matched the target.
    Won,
    /// The hand ran out before the total matched.
    Lost,
    /// The final level was won and advanced past. Terminal until restart.
    Completed,
}

/// Tone of a status message, for host presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational.
    Neutral,
    /// The total overshot the target.
    Warn,
    /// The level was lost.
    Error,
    /// The target was hit or the run completed.
    Success,
}

/// A host-facing status line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Display text.
    pub text: String,
    /// Display tone.
    pub severity: Severity,
}

impl Message {
    fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

/// One play-through of the puzzle.
///
/// Fields are private; hosts read through the accessors and mutate only
/// through the operations. `hand` and `history` always partition the
/// dealt cards of the current level.
#[derive(Clone, Debug)]
pub struct Session {
    table: LevelTable,
    rng: GameRng,
    ids: CardIdAllocator,
    level: u32,
    target: i32,
    title: String,
    hand: Hand,
    history: Vec<Card>,
    status: Status,
    message: Message,
}

impl Session {
    /// Create a session over a level table and start level 1.
    #[must_use]
    pub fn new(table: LevelTable, rng: GameRng) -> Self {
        let mut session = Self {
            table,
            rng,
            ids: CardIdAllocator::new(),
            level: 1,
            target: 0,
            title: String::new(),
            hand: Hand::new(),
            history: Vec::new(),
            status: Status::Playing,
            message: Message::new("", Severity::Neutral),
        };
        session.start_level(1);
        session
    }

    /// Deal a level and make it current.
    ///
    /// Clears the history, resets the status to [`Status::Playing`], and
    /// posts the level title as the message. Levels past the table's end
    /// resolve to its last entry.
    pub fn start_level(&mut self, level: u32) {
        let deal = Deal::generate(self.table.spec_for(level), &mut self.rng, &mut self.ids);

        self.level = level;
        self.target = deal.target;
        self.title = deal.title;
        self.hand = deal.hand;
        self.history.clear();
        self.status = Status::Playing;
        self.message = Message::new(self.title.clone(), Severity::Neutral);

        debug!(
            level,
            target = self.target,
            cards = self.hand.len(),
            "level started"
        );
    }

    /// Play the card at `index` in the hand.
    ///
    /// The card moves from the hand (remaining order preserved) to the end
    /// of the history, and the status is recomputed. Rejected as a no-op
    /// (returning `false`) when the index is out of bounds or the session
    /// is not in [`Status::Playing`].
    pub fn play_card(&mut self, index: usize) -> bool {
        if self.status != Status::Playing || index >= self.hand.len() {
            return false;
        }

        let card = self.hand.remove(index);
        self.history.push(card);
        self.recompute_status();
        true
    }

    /// Take back the most recent play.
    ///
    /// The card returns to the *tail* of the hand, not its original
    /// position. Undo also reverts a `Won` or `Lost` status back to
    /// `Playing`, letting the player correct the play that ended the
    /// level. No-op if the history is empty or the run is complete.
    pub fn undo(&mut self) -> bool {
        if self.status == Status::Completed {
            return false;
        }
        let Some(card) = self.history.pop() else {
            return false;
        };

        self.hand.push(card);
        self.status = Status::Playing;
        self.message = Message::new("Last play reverted", Severity::Neutral);
        true
    }

    /// Re-deal the current level from scratch.
    ///
    /// A fresh random deal, not a restore of the original hand. No-op if
    /// the run is complete.
    pub fn retry(&mut self) {
        if self.status == Status::Completed {
            return;
        }
        self.start_level(self.level);
    }

    /// Advance past a won level.
    ///
    /// At the final level the session becomes [`Status::Completed`];
    /// otherwise the next level is dealt. No-op (returning `false`)
    /// unless the status is [`Status::Won`].
    pub fn next_level(&mut self) -> bool {
        if self.status != Status::Won {
            return false;
        }

        if self.level >= self.table.max_level() {
            self.status = Status::Completed;
            self.message = Message::new("All levels cleared!", Severity::Success);
            debug!(level = self.level, "run completed");
        } else {
            self.start_level(self.level + 1);
        }
        true
    }

    /// Restart the whole run at level 1, from any status.
    pub fn restart(&mut self) {
        self.start_level(1);
    }

    fn recompute_status(&mut self) {
        let current = view::current_total(&self.history);

        match view::balance(current, self.target) {
            Balance::Matched => {
                self.status = Status::Won;
                self.message = Message::new("Target reached!", Severity::Success);
                debug!(level = self.level, "level won");
            }
            _ if self.hand.is_empty() => {
                self.status = Status::Lost;
                self.message = Message::new("Out of cards", Severity::Error);
                debug!(level = self.level, current, target = self.target, "level lost");
            }
            Balance::Short(by) => {
                self.message = Message::new(
                    format!("Short by {by}: play a positive card"),
                    Severity::Neutral,
                );
            }
            Balance::Over(by) => {
                self.message = Message::new(
                    format!("Over by {by}: play a negative card"),
                    Severity::Warn,
                );
            }
        }
    }

    // === Read accessors ===

    /// Current level number.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Final level of the run.
    #[must_use]
    pub fn max_level(&self) -> u32 {
        self.table.max_level()
    }

    /// The hidden target sum for the current level.
    #[must_use]
    pub fn target(&self) -> i32 {
        self.target
    }

    /// Title of the current level.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Cards still available to play, in visible order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Cards played so far, in play order.
    #[must_use]
    pub fn history(&self) -> &[Card] {
        &self.history
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Latest status message.
    #[must_use]
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Running total of played values.
    ///
    /// Always equals [`view::current_total`] over [`Session::history`].
    #[must_use]
    pub fn total(&self) -> i32 {
        view::current_total(&self.history)
    }

    /// Fraction of the run reached, for progress display.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.level as f32 / self.table.max_level() as f32
    }
}
