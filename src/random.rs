use crate::{
    roll_hand, Category, Hand, History, HistoryEntry, HoldMask, Scoresheet, DICE_LEN, DIE_FACES,
};
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;

/// A [hand](Hand) of uniformly random faces.
pub fn random_hand<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    roll_hand(rng)
}

/// A [hold mask](HoldMask) where each die is held with probability `1/2`.
pub fn random_held<R: Rng + ?Sized>(rng: &mut R) -> HoldMask {
    [(); DICE_LEN].map(|_| rng.gen())
}

/// A [scoresheet](Scoresheet) where a random, non-empty, incomplete subset of categories
/// hold a random, small number of points.
///
/// # Returns
///
/// The [scoresheet](Scoresheet) with at least one open and one scored category.
pub fn random_scoresheet<R: Rng + ?Sized>(rng: &mut R) -> Scoresheet {
    let possible_points = Uniform::from(0..=50);
    let scored = rng.gen_range(1..Category::categories().len());
    let mut scoresheet = Scoresheet::new();
    for category in Category::categories()
        .tap_mut(|categories| categories.shuffle(rng))
        .into_iter()
        .take(scored)
    {
        scoresheet.record(category, possible_points.sample(rng));
    }

    scoresheet
}

/// A [history](History) of a random, small, non-zero number of games with
/// random, medium, non-zero scores.
///
/// # Returns
///
/// The [history](History), most recent first.
pub fn random_history<R: Rng + ?Sized>(rng: &mut R) -> History {
    let possible_scores = Uniform::from(100..300);
    let games = rng.gen_range(1..5);
    (0..games)
        .map(|_| HistoryEntry::now(possible_scores.sample(rng)))
        .collect::<History>()
        .tap_mut(|history| history.reverse())
}

/// A [hand](Hand) where every die shows `face`, clamped into `1..=`[DIE_FACES].
pub fn five_of_a_kind(face: usize) -> Hand {
    [face.clamp(1, DIE_FACES) as u8; DICE_LEN]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_hand_in_range() {
        let hand = random_hand(&mut rand::thread_rng());

        for die in hand {
            assert!((1..=DIE_FACES as u8).contains(&die));
        }
    }

    #[test]
    fn random_held_len() {
        assert_eq!(DICE_LEN, random_held(&mut rand::thread_rng()).len());
    }

    #[test]
    fn random_scoresheet_partial() {
        let scoresheet = random_scoresheet(&mut rand::thread_rng());

        assert!(scoresheet.open_categories().count() > 0);
        assert!(!scoresheet.is_complete());
        assert!(scoresheet.iter().any(|(_, entry)| entry.is_some()));
    }

    #[test]
    fn random_history_non_empty() {
        let history = random_history(&mut rand::thread_rng());

        assert!(!history.is_empty());
        for entry in &history {
            assert!(entry.score() >= 100);
        }
    }

    #[test]
    fn random_history_most_recent_first() {
        let history = random_history(&mut rand::thread_rng());

        for (newer, older) in history.iter().zip(history.iter().skip(1)) {
            assert!(newer.timestamp() >= older.timestamp());
        }
    }

    #[test]
    fn five_of_a_kind_clamped() {
        assert_eq!([1; DICE_LEN], five_of_a_kind(0));
        assert_eq!([4; DICE_LEN], five_of_a_kind(4));
        assert_eq!([6; DICE_LEN], five_of_a_kind(9));
    }
}
