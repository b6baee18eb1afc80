use crate::{HistoryEntry, DICE_LEN, HISTORY_CAPACITY};
use smallvec::SmallVec;

/// The face value of one die in the range `1..=`[DIE_FACES](crate::DIE_FACES).
pub type Die = u8;
/// A number of points earned in a [category](crate::Category).
///
/// # See Also
///
/// * [score](crate::score)
/// * [Scoresheet](crate::Scoresheet)
pub type Points = usize;
/// The five current [dice](Die). Positions are stable across rolls so that
/// [holds](HoldMask) refer to the same die; order never affects scoring.
///
/// # See Also
///
/// * [DICE_LEN]
/// * [HoldMask]
/// * [GameEngine::roll](crate::GameEngine::roll)
pub type Hand = [Die; DICE_LEN];
/// One flag per position in the [hand](Hand). A held die keeps its value on the next roll.
///
/// # See Also
///
/// * [Hand]
/// * [GameEngine::toggle_hold](crate::GameEngine::toggle_hold)
pub type HoldMask = [bool; DICE_LEN];
/// Finished games, most recent first.
///
/// # See Also
///
/// * [HistoryEntry]
/// * [HISTORY_CAPACITY]
/// * [GameEngine::new_game](crate::GameEngine::new_game)
pub type History = SmallVec<[HistoryEntry; HISTORY_CAPACITY]>;
