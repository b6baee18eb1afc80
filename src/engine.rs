use crate::{
    roll_hand, score, Category, Hand, History, HistoryEntry, HoldMask, Points, Scoresheet,
    CATEGORIES_LEN, DICE_LEN, MAX_ROLLS,
};
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::debug;

pub use engine_turn::*;
pub use engine_view::*;

mod engine_turn;
mod engine_view;
#[cfg(test)]
mod test_setup;

/// The status message after the engine is created.
pub const WELCOME_MESSAGE: &str = "Welcome, press Roll to start";
/// The status message after [a new game](GameEngine::new_game) starts.
pub const NEW_GAME_MESSAGE: &str = "New game, press Roll";

/// Owns the state of a session and implements the operations of the game. Created from
/// [GameEngine::new] or [GameEngine::with_rng].
///
/// Every operation is total: calls that are not allowed in the current state leave the state
/// untouched and only update the [status message](GameEngine::message). The one reported
/// misuse is [holding](GameEngine::toggle_hold) a position outside the [hand](Hand).
#[derive(Debug)]
pub struct GameEngine<R = ThreadRng> {
    /// The source of every die face.
    rng: R,
    /// The five current dice.
    hand: Hand,
    /// Which dice keep their face on the next roll.
    held: HoldMask,
    /// Rolls left in the current turn, in the range `0..=MAX_ROLLS`.
    rolls_left: usize,
    /// Points recorded in the current game.
    scoresheet: Scoresheet,
    /// Finished games, most recent first.
    history: History,
    /// Describes the most recent operation.
    message: String,
}

impl GameEngine<ThreadRng> {
    /// Creates a session backed by the [thread-local generator](rand::thread_rng).
    ///
    /// # See Also
    ///
    /// * [GameEngine::with_rng]
    pub fn new() -> GameEngine<ThreadRng> {
        GameEngine::with_rng(rand::thread_rng())
    }
}

impl Default for GameEngine<ThreadRng> {
    fn default() -> Self {
        GameEngine::new()
    }
}

impl<R: Rng> GameEngine<R> {
    /// Creates a session that draws every die from `rng` and rolls the opening [hand](Hand).
    ///
    /// # Returns
    ///
    /// A [`GameEngine`] with a random hand, no held dice, [MAX_ROLLS] rolls left, an empty
    /// [scoresheet](Scoresheet), and an empty [history](History).
    pub fn with_rng(mut rng: R) -> GameEngine<R> {
        let hand = roll_hand(&mut rng);
        debug!(?hand, "created game engine");
        GameEngine {
            rng,
            hand,
            held: [false; DICE_LEN],
            rolls_left: MAX_ROLLS,
            scoresheet: Scoresheet::new(),
            history: History::new(),
            message: WELCOME_MESSAGE.to_owned(),
        }
    }

    /// # Returns
    ///
    /// The five current dice.
    #[inline]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// # Returns
    ///
    /// Which dice keep their face on the next roll.
    #[inline]
    pub fn held(&self) -> &HoldMask {
        &self.held
    }

    /// # Returns
    ///
    /// The number of rolls left in the current turn.
    #[inline]
    pub fn rolls_left(&self) -> usize {
        self.rolls_left
    }

    /// Whether [rolling](GameEngine::roll) would change the hand.
    #[inline]
    pub fn can_roll(&self) -> bool {
        self.rolls_left > 0
    }

    /// # Returns
    ///
    /// The points recorded in the current game.
    #[inline]
    pub fn scoresheet(&self) -> &Scoresheet {
        &self.scoresheet
    }

    /// # Returns
    ///
    /// Finished games, most recent first.
    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// # Returns
    ///
    /// A short, human-readable description of the most recent operation.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// # Returns
    ///
    /// The sum of every scored category in the current game.
    #[inline]
    pub fn current_total(&self) -> Points {
        self.scoresheet.total()
    }

    /// Whether every category in the current game is scored.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.scoresheet.is_complete()
    }

    /// # Returns
    ///
    /// The points the current hand would earn in `category`, or `None` if `category` is
    /// already scored.
    pub fn preview(&self, category: Category) -> Option<Points> {
        (!self.scoresheet.is_scored(category)).then(|| score(category, &self.hand))
    }

    /// # Returns
    ///
    /// The [preview](GameEngine::preview) of every category in scoresheet order.
    pub fn previews(&self) -> [Option<Points>; CATEGORIES_LEN] {
        Category::categories().map(|category| self.preview(category))
    }

    /// Archives the current game if it earned any points and starts a new game.
    ///
    /// When the [current total](GameEngine::current_total) is greater than `0`, inserts a
    /// [history entry](HistoryEntry) at the front of the [history](History). Then clears the
    /// [scoresheet](Scoresheet), releases every held die, restores [MAX_ROLLS] rolls, and rolls
    /// a fresh [hand](Hand). The [history](History) itself is never cleared.
    pub fn new_game(&mut self) {
        let total = self.current_total();
        if total > 0 {
            self.history.insert(0, HistoryEntry::now(total));
            debug!(total, games = self.history.len(), "archived game");
        }

        self.scoresheet = Scoresheet::new();
        self.start_turn();
        debug!(hand = ?self.hand, "started new game");
        self.message = NEW_GAME_MESSAGE.to_owned();
    }

    /// Releases every held die, restores [MAX_ROLLS] rolls, and rolls every die regardless
    /// of holds.
    fn start_turn(&mut self) {
        self.held = [false; DICE_LEN];
        self.rolls_left = MAX_ROLLS;
        self.hand = roll_hand(&mut self.rng);
    }
}
