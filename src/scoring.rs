use crate::{
    Category, Hand, Points, CATEGORIES_LEN, DIE_FACES, FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE,
    SMALL_STRAIGHT_SCORE, YAHTZEE_SCORE,
};

/// Runs of faces where any one present in a [hand](Hand) earns a small straight.
const SMALL_STRAIGHTS: [[usize; 4]; 3] = [[1, 2, 3, 4], [2, 3, 4, 5], [3, 4, 5, 6]];
/// Runs of faces where any one present in a [hand](Hand) earns a large straight.
const LARGE_STRAIGHTS: [[usize; 5]; 2] = [[1, 2, 3, 4, 5], [2, 3, 4, 5, 6]];

/// Counts how many dice show each face.
///
/// # Returns
///
/// A table indexed by face where slot `0` is unused and stays `0`. Values outside
/// `1..=`[DIE_FACES] are not counted.
pub fn face_counts(hand: &Hand) -> [usize; DIE_FACES + 1] {
    let mut counts = [0; DIE_FACES + 1];
    for &die in hand {
        if (1..=DIE_FACES).contains(&(die as usize)) {
            counts[die as usize] += 1;
        }
    }

    counts
}

/// Scores `hand` in `category`. Never fails and never depends on the order of the dice.
///
/// * Upper categories: the sum of the dice showing the category's face.
/// * [Three](Category::ThreeOfAKind) and [four](Category::FourOfAKind) of a kind: the sum of
/// all dice when some face appears at least `3` or `4` times.
/// * [Full house](Category::FullHouse): [FULL_HOUSE_SCORE] when some face appears exactly
/// `3` times and another exactly `2` times. Five of a kind is not a full house.
/// * [Small straight](Category::SmallStraight): [SMALL_STRAIGHT_SCORE] when four consecutive
/// faces are present.
/// * [Large straight](Category::LargeStraight): [LARGE_STRAIGHT_SCORE] when five consecutive
/// faces are present.
/// * [Yahtzee](Category::Yahtzee): [YAHTZEE_SCORE] when all dice show the same face.
/// * [Chance](Category::Chance): the sum of all dice.
///
/// # Returns
///
/// The points earned, `0` when the pattern is absent.
pub fn score(category: Category, hand: &Hand) -> Points {
    let counts = face_counts(hand);
    let total: Points = hand.iter().map(|&die| die as Points).sum();
    let has_at_least = |n: usize| counts[1..].iter().any(|&count| count >= n);
    let has_exactly = |n: usize| counts[1..].iter().any(|&count| count == n);
    let has_run = |run: &[usize]| run.iter().all(|&face| counts[face] > 0);

    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            let face = category as usize + 1;
            counts[face] * face
        }
        Category::ThreeOfAKind if has_at_least(3) => total,
        Category::FourOfAKind if has_at_least(4) => total,
        Category::FullHouse if has_exactly(3) && has_exactly(2) => FULL_HOUSE_SCORE,
        Category::SmallStraight if SMALL_STRAIGHTS.iter().any(|run| has_run(run)) => {
            SMALL_STRAIGHT_SCORE
        }
        Category::LargeStraight if LARGE_STRAIGHTS.iter().any(|run| has_run(run)) => {
            LARGE_STRAIGHT_SCORE
        }
        Category::Yahtzee if has_exactly(5) => YAHTZEE_SCORE,
        Category::Chance => total,
        Category::ThreeOfAKind
        | Category::FourOfAKind
        | Category::FullHouse
        | Category::SmallStraight
        | Category::LargeStraight
        | Category::Yahtzee => 0,
    }
}

/// Scores `hand` in every [category](Category).
///
/// # Returns
///
/// An array of points in [scoresheet order](Category::categories).
pub fn scores(hand: &Hand) -> [Points; CATEGORIES_LEN] {
    Category::categories().map(|category| score(category, hand))
}
