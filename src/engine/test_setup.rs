use crate::{GameEngine, Hand, History, HoldMask, Scoresheet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

impl GameEngine<ChaCha8Rng> {
    /// Generates a [GameEngine] whose dice are reproducible from `seed`.
    pub fn seeded(seed: u64) -> GameEngine<ChaCha8Rng> {
        GameEngine::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// A mutable reference to `self.hand`.
    pub fn mut_hand(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// A mutable reference to `self.held`.
    pub fn mut_held(&mut self) -> &mut HoldMask {
        &mut self.held
    }

    /// A mutable reference to `self.rolls_left`.
    pub fn mut_rolls_left(&mut self) -> &mut usize {
        &mut self.rolls_left
    }

    /// A mutable reference to `self.scoresheet`.
    pub fn mut_scoresheet(&mut self) -> &mut Scoresheet {
        &mut self.scoresheet
    }

    /// A mutable reference to `self.history`.
    pub fn mut_history(&mut self) -> &mut History {
        &mut self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, DICE_LEN, MAX_ROLLS};

    #[test]
    fn seeded_initial_state() {
        let engine = GameEngine::seeded(0);

        assert_eq!([false; DICE_LEN], engine.held);
        assert_eq!(MAX_ROLLS, engine.rolls_left);
        assert_eq!(Scoresheet::new(), engine.scoresheet);
        assert!(engine.history.is_empty());
    }

    #[test]
    fn mut_accessors() {
        let mut engine = GameEngine::seeded(0);

        *engine.mut_hand() = [1, 2, 3, 4, 5];
        *engine.mut_held() = [true, false, true, false, true];
        *engine.mut_rolls_left() = 1;
        engine.mut_scoresheet().record(Category::Chance, 15);

        assert_eq!([1, 2, 3, 4, 5], engine.hand);
        assert_eq!([true, false, true, false, true], engine.held);
        assert_eq!(1, engine.rolls_left);
        assert_eq!(Some(15), engine.scoresheet.get(Category::Chance));
    }
}
