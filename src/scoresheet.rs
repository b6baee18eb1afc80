use crate::{Category, Points, CATEGORIES_LEN};

/// One optional entry of [points](Points) for each [category](Category). An entry starts
/// unset and stays fixed once recorded until a new game replaces the whole sheet.
///
/// # See Also
///
/// * [GameEngine::commit_score](crate::GameEngine::commit_score)
/// * [GameEngine::new_game](crate::GameEngine::new_game)
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Scoresheet {
    /// Entries indexed by `category as usize`.
    entries: [Option<Points>; CATEGORIES_LEN],
}

impl Scoresheet {
    /// # Returns
    ///
    /// A [`Scoresheet`] where no category is scored.
    #[inline]
    pub fn new() -> Scoresheet {
        Scoresheet::default()
    }

    /// # Returns
    ///
    /// The points recorded in `category` or `None` if it is still open.
    #[inline]
    pub fn get(&self, category: Category) -> Option<Points> {
        self.entries[category as usize]
    }

    /// Whether `category` already holds points.
    #[inline]
    pub fn is_scored(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Whether every category holds points.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(Option::is_some)
    }

    /// # Returns
    ///
    /// An [iterator](Iterator) of every category and its entry in scoresheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Option<Points>)> + '_ {
        Category::categories()
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    /// # Returns
    ///
    /// An [iterator](Iterator) of the categories that can still be scored, in order.
    pub fn open_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::categories()
            .into_iter()
            .filter(|&category| !self.is_scored(category))
    }

    /// # Returns
    ///
    /// The sum of every recorded entry. Open categories count as `0`.
    pub fn total(&self) -> Points {
        self.entries.iter().flatten().sum()
    }

    /// # Returns
    ///
    /// The sum of recorded entries in the [upper](Category::upper) categories.
    pub fn upper_total(&self) -> Points {
        Category::upper().into_iter().filter_map(|c| self.get(c)).sum()
    }

    /// # Returns
    ///
    /// The sum of recorded entries in the [lower](Category::lower) categories.
    pub fn lower_total(&self) -> Points {
        Category::lower().into_iter().filter_map(|c| self.get(c)).sum()
    }

    /// Records `points` in `category` if it is open.
    ///
    /// # Returns
    ///
    /// Whether the entry was recorded. A scored category is never overwritten.
    pub(crate) fn record(&mut self, category: Category, points: Points) -> bool {
        let entry = &mut self.entries[category as usize];
        if entry.is_some() {
            return false;
        }

        *entry = Some(points);
        true
    }
}
