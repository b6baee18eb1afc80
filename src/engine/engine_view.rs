use crate::{GameEngine, Hand, History, HoldMask, Points, Scoresheet};
use rand::Rng;

/// Immutably borrows properties from [`GameEngine`].
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    /// The five current dice.
    pub hand: &'a Hand,
    /// Which dice keep their face on the next roll.
    pub held: &'a HoldMask,
    /// Rolls left in the current turn.
    pub rolls_left: usize,
    /// Points recorded in the current game.
    pub scoresheet: &'a Scoresheet,
    /// The sum of every scored category in the current game.
    pub total_score: Points,
    /// Finished games, most recent first.
    pub history: &'a History,
    /// Describes the most recent operation.
    pub message: &'a str,
}

impl<R: Rng> GameEngine<R> {
    /// # Returns
    ///
    /// A new [`GameView`] struct, which immutably borrows properties from [`GameEngine`], with
    /// the [current total](GameEngine::current_total) computed.
    pub fn view(&self) -> GameView<'_> {
        GameView {
            hand: &self.hand,
            held: &self.held,
            rolls_left: self.rolls_left,
            scoresheet: &self.scoresheet,
            total_score: self.current_total(),
            history: &self.history,
            message: &self.message,
        }
    }
}
