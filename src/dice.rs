use crate::{Die, Hand, HoldMask, DICE_LEN, DIE_FACES};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// # Returns
///
/// A uniformly random face in the range `1..=`[DIE_FACES].
#[inline]
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R) -> Die {
    rng.gen_range(1..=DIE_FACES as Die)
}

/// # Returns
///
/// A [hand](Hand) where every die is rolled.
pub fn roll_hand<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    let faces = Uniform::from(1..=DIE_FACES as Die);
    [(); DICE_LEN].map(|_| faces.sample(rng))
}

/// Rolls every die in `hand` that is not held in `held`. Held dice keep their face.
///
/// # Returns
///
/// The number of dice rolled.
pub fn reroll_unheld<R: Rng + ?Sized>(rng: &mut R, hand: &mut Hand, held: &HoldMask) -> usize {
    let faces = Uniform::from(1..=DIE_FACES as Die);
    let mut rolled = 0;
    for (die, _) in hand.iter_mut().zip(held).filter(|(_, is_held)| !**is_held) {
        *die = faces.sample(rng);
        rolled += 1;
    }

    rolled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_held;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn in_range(die: Die) -> bool {
        (1..=DIE_FACES as Die).contains(&die)
    }

    #[test]
    fn roll_die_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..1_000 {
            assert!(in_range(roll_die(&mut rng)));
        }
    }

    #[test]
    fn roll_die_every_face() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [false; DIE_FACES + 1];
        for _ in 0..1_000 {
            seen[roll_die(&mut rng) as usize] = true;
        }

        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&face| face));
    }

    #[test]
    fn roll_hand_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            assert!(roll_hand(&mut rng).into_iter().all(in_range));
        }
    }

    #[test]
    fn roll_hand_seeded_is_reproducible() {
        let first = roll_hand(&mut ChaCha8Rng::seed_from_u64(42));
        let second = roll_hand(&mut ChaCha8Rng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn reroll_unheld_all_held() {
        let mut rng = rand::thread_rng();
        let mut hand = roll_hand(&mut rng);
        let before = hand;

        let rolled = reroll_unheld(&mut rng, &mut hand, &[true; DICE_LEN]);

        assert_eq!(0, rolled);
        assert_eq!(before, hand);
    }

    #[test]
    fn reroll_unheld_none_held() {
        let mut rng = rand::thread_rng();
        let mut hand = [0; DICE_LEN];

        let rolled = reroll_unheld(&mut rng, &mut hand, &[false; DICE_LEN]);

        assert_eq!(DICE_LEN, rolled);
        assert!(hand.into_iter().all(in_range));
    }

    #[test]
    fn reroll_unheld_keeps_held_positions() {
        let mut rng = rand::thread_rng();
        let held = random_held(&mut rng);
        // 0 is never rolled, so any rolled position must change
        let mut hand = [0; DICE_LEN];

        let rolled = reroll_unheld(&mut rng, &mut hand, &held);

        assert_eq!(held.iter().filter(|&&is_held| !is_held).count(), rolled);
        for (&die, &is_held) in hand.iter().zip(&held) {
            if is_held {
                assert_eq!(0, die);
            } else {
                assert!(in_range(die));
            }
        }
    }
}
