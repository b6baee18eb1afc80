use crate::{History, Points};
use chrono::{DateTime, Local};

/// The final score of a finished game and when it was archived.
///
/// # See Also
///
/// * [History]
/// * [GameEngine::new_game](crate::GameEngine::new_game)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct HistoryEntry {
    /// When the game was archived.
    timestamp: DateTime<Local>,
    /// The total score of the game.
    score: Points,
}

impl HistoryEntry {
    /// # Returns
    ///
    /// A [`HistoryEntry`] for `score` archived now.
    pub(crate) fn now(score: Points) -> HistoryEntry {
        HistoryEntry {
            timestamp: Local::now(),
            score,
        }
    }

    /// When the game was archived. Formatting is left to the caller.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// The total score of the game.
    #[inline]
    pub fn score(&self) -> Points {
        self.score
    }
}

/// # Returns
///
/// The highest score in `history` or `None` if no game has been archived.
pub fn best_score(history: &History) -> Option<Points> {
    history.iter().map(HistoryEntry::score).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_keeps_score() {
        let before = Local::now();
        let entry = HistoryEntry::now(42);

        assert_eq!(42, entry.score());
        assert!(entry.timestamp() >= before);
        assert!(entry.timestamp() <= Local::now());
    }

    #[test]
    fn best_score_empty() {
        assert_eq!(None, best_score(&History::new()));
    }

    #[test]
    fn best_score_some() {
        let history: History = [120, 87, 201, 56]
            .into_iter()
            .map(HistoryEntry::now)
            .collect();

        assert_eq!(Some(201), best_score(&history));
    }
}
