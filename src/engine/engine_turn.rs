use crate::{reroll_unheld, score, Category, GameEngine, DICE_LEN};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace};

/// The status message after [a roll](GameEngine::roll) is refused.
pub const NO_ROLLS_MESSAGE: &str = "No rolls left, pick a category";

/// Describes the reason why [`GameEngine::toggle_hold`] could not be executed.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum ToggleHoldError {
    /// Attempting to hold a die outside the hand.
    #[error("die position {position} is outside the hand of {dice_len} dice")]
    PositionOutOfBounds {
        /// The requested position.
        position: usize,
        /// The number of dice in the hand, or the minimum illegal position.
        dice_len: usize,
    },
}

impl<R: Rng> GameEngine<R> {
    /// Rolls every die that is not held and uses up one roll.
    ///
    /// When no rolls are left, leaves the hand and the rolls left untouched.
    ///
    /// # Returns
    ///
    /// Whether the dice were rolled.
    pub fn roll(&mut self) -> bool {
        if self.rolls_left == 0 {
            trace!("refused roll with no rolls left");
            self.message = NO_ROLLS_MESSAGE.to_owned();
            return false;
        }

        let rolled = reroll_unheld(&mut self.rng, &mut self.hand, &self.held);
        self.rolls_left -= 1;
        debug!(rolled, rolls_left = self.rolls_left, hand = ?self.hand, "rolled dice");
        self.message = format!("Rolled, {} rolls left", self.rolls_left);
        true
    }

    /// Flips whether the die at `position` is held. Neither the hand nor the rolls left change,
    /// and holding is allowed even when no rolls are left.
    ///
    /// # Arguments
    ///
    /// * `position`: The index of the die in the hand, in the range `0..`[DICE_LEN].
    ///
    /// # Errors
    ///
    /// * [`ToggleHoldError::PositionOutOfBounds`] Attempting to hold a die outside the hand.
    /// Nothing changes, including the status message.
    pub fn toggle_hold(&mut self, position: usize) -> Result<(), ToggleHoldError> {
        let Some(is_held) = self.held.get_mut(position) else {
            trace!(position, "refused hold outside the hand");
            return Err(ToggleHoldError::PositionOutOfBounds {
                position,
                dice_len: DICE_LEN,
            });
        };

        *is_held = !*is_held;
        let is_held = *is_held;
        debug!(position, is_held, "toggled hold");
        self.message = format!(
            "Die {} {}",
            position + 1,
            if is_held { "held" } else { "released" }
        );
        Ok(())
    }

    /// Scores the current hand in `category`, which ends the turn.
    ///
    /// Records the [score](crate::score) permanently, releases every held die, restores
    /// [MAX_ROLLS](crate::MAX_ROLLS) rolls, and rolls all five dice for the next turn regardless
    /// of holds. A category that is already scored is left untouched along with the hand and
    /// the rolls left.
    ///
    /// # Returns
    ///
    /// Whether `category` was scored.
    pub fn commit_score(&mut self, category: Category) -> bool {
        let points = score(category, &self.hand);
        if !self.scoresheet.record(category, points) {
            trace!(category = %category, "refused score in a scored category");
            self.message = format!("{category} already scored");
            return false;
        }

        debug!(
            category = %category,
            points,
            hand = ?self.hand,
            total = self.current_total(),
            "scored category"
        );
        self.start_turn();
        self.message = format!("{category} scored {points}");
        true
    }
}
