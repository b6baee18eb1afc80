use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of dice in a [hand](crate::Hand). `5` dice.
pub const DICE_LEN: usize = 5;
/// The number of faces on each die. Faces are numbered `1..=DIE_FACES`.
pub const DIE_FACES: usize = 6;
/// The number of rolls available in each turn. If the environment variable named `MAX_ROLLS`
/// is present at compile time and is able to be parsed into a `usize`, set to the value of
/// the environment variable. Otherwise, it is set to `3`.
///
/// # Panics
///
/// When the given value is `0`.
///
/// # See Also
///
/// * [GameEngine::roll](crate::GameEngine::roll)
/// * [GameEngine::commit_score](crate::GameEngine::commit_score)
/// * [GameEngine::new_game](crate::GameEngine::new_game)
pub const MAX_ROLLS: usize = option::unwrap_or!(
    option::and_then!(option_env!("MAX_ROLLS"), |str| result::ok!(parse_usize(
        str
    ))),
    3
);
const _: () = assert!(MAX_ROLLS > 0);
/// Finished games will be stored on the stack until the number of
/// [history entries](crate::HistoryEntry) becomes greater than `HISTORY_CAPACITY`. After that,
/// the [history](crate::History) is heap allocated and keeps growing. If the environment variable
/// named `HISTORY_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `8`.
///
/// # See Also
///
/// * [History](crate::History)
pub const HISTORY_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("HISTORY_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    8
);
/// Points for a [full house](crate::Category::FullHouse). `25` points.
pub const FULL_HOUSE_SCORE: usize = 25;
/// Points for a [small straight](crate::Category::SmallStraight). `30` points.
pub const SMALL_STRAIGHT_SCORE: usize = 30;
/// Points for a [large straight](crate::Category::LargeStraight). `40` points.
pub const LARGE_STRAIGHT_SCORE: usize = 40;
/// Points for five of a kind in [Yahtzee](crate::Category::Yahtzee). `50` points.
pub const YAHTZEE_SCORE: usize = 50;
