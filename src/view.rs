//! Pure read-only helpers for hosts.
//!
//! Everything here derives from state the session already exposes; nothing
//! mutates. The session computes its own status through these same
//! functions, so a host rendering [`current_total`] or [`balance`] always
//! agrees with the state machine.

use serde::{Deserialize, Serialize};

use crate::core::Card;

/// Sum of the played card values.
///
/// This is the running total the status check compares against the target.
#[must_use]
pub fn current_total(cards: &[Card]) -> i32 {
    cards.iter().map(|card| card.value()).sum()
}

/// How the running total relates to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Balance {
    /// Total equals target.
    Matched,
    /// Total is below target by the given (positive) amount; a positive
    /// card closes the gap.
    Short(i32),
    /// Total is above target by the given (positive) amount; a negative
    /// card closes the gap.
    Over(i32),
}

/// Classify the running total against the target.
#[must_use]
pub fn balance(current: i32, target: i32) -> Balance {
    match target - current {
        0 => Balance::Matched,
        diff if diff > 0 => Balance::Short(diff),
        diff => Balance::Over(-diff),
    }
}

/// Render the play history as a running equation.
///
/// The empty history reads `"0"`; plays append as explicit additions and
/// subtractions: `"0 + 3 - 2"`.
#[must_use]
pub fn equation(history: &[Card]) -> String {
    let mut eq = String::from("0");
    for card in history {
        let value = card.value();
        if value >= 0 {
            eq.push_str(&format!(" + {value}"));
        } else {
            eq.push_str(&format!(" - {}", -value));
        }
    }
    eq
}
