use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The number of [`Category`] variants. 6 upper and 7 lower categories.
pub const CATEGORIES_LEN: usize = Category::UPPER_LEN + Category::LOWER_LEN;

/// Describes one scoring line on the [scoresheet](crate::Scoresheet).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum Category {
    /// `0`.
    Ones = 0,
    /// `1`.
    Twos = 1,
    /// `2`.
    Threes = 2,
    /// `3`.
    Fours = 3,
    /// `4`.
    Fives = 4,
    /// `5`.
    Sixes = 5,
    /// `6`.
    ThreeOfAKind = 6,
    /// `7`.
    FourOfAKind = 7,
    /// `8`.
    FullHouse = 8,
    /// `9`.
    SmallStraight = 9,
    /// `10`.
    LargeStraight = 10,
    /// `11`.
    Yahtzee = 11,
    /// `12`.
    Chance = 12,
}

impl Category {
    /// The number of upper [`Category`] variants. `Ones` through `Sixes`.
    pub const UPPER_LEN: usize = 6;
    /// The number of lower [`Category`] variants. `ThreeOfAKind` through `Chance`.
    pub const LOWER_LEN: usize = 7;

    /// # Returns
    ///
    /// An array of all [`Category`] variants in scoresheet order.
    #[inline]
    pub fn categories() -> [Category; CATEGORIES_LEN] {
        [
            Category::Ones,
            Category::Twos,
            Category::Threes,
            Category::Fours,
            Category::Fives,
            Category::Sixes,
            Category::ThreeOfAKind,
            Category::FourOfAKind,
            Category::FullHouse,
            Category::SmallStraight,
            Category::LargeStraight,
            Category::Yahtzee,
            Category::Chance,
        ]
    }

    /// # Returns
    ///
    /// An array of the upper [`Category`] variants in order.
    #[inline]
    pub fn upper() -> [Category; Category::UPPER_LEN] {
        [
            Category::Ones,
            Category::Twos,
            Category::Threes,
            Category::Fours,
            Category::Fives,
            Category::Sixes,
        ]
    }

    /// # Returns
    ///
    /// An array of the lower [`Category`] variants in order.
    #[inline]
    pub fn lower() -> [Category; Category::LOWER_LEN] {
        [
            Category::ThreeOfAKind,
            Category::FourOfAKind,
            Category::FullHouse,
            Category::SmallStraight,
            Category::LargeStraight,
            Category::Yahtzee,
            Category::Chance,
        ]
    }

    /// Whether the category counts a single face (`Ones` through `Sixes`).
    #[inline]
    pub fn is_upper(self) -> bool {
        (self as usize) < Category::UPPER_LEN
    }

    /// # Returns
    ///
    /// The face counted by an upper category, or `None` for lower categories.
    #[inline]
    pub fn face(self) -> Option<usize> {
        self.is_upper().then_some(self as usize + 1)
    }

    /// # Returns
    ///
    /// The name printed on the scoresheet.
    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Small Straight",
            Category::LargeStraight => "Large Straight",
            Category::Yahtzee => "Yahtzee",
            Category::Chance => "Chance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Describes why a name could not be parsed into a [`Category`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
#[error("unknown category name {name:?}")]
pub struct ParseCategoryError {
    /// The name that matched no [`Category::name`].
    pub name: String,
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Matches `name` against [`Category::name`] ignoring ASCII case and surrounding whitespace.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let trimmed = name.trim();
        Category::categories()
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseCategoryError {
                name: name.to_owned(),
            })
    }
}

impl Distribution<Category> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Category {
        let index = rng.gen_range(0..CATEGORIES_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, CATEGORIES_LEN);
            unreachable!(
                "index ({:?}) should be matched since categories cover all indexes \
                in range 0..CATEGORIES_LEN (0..{:?}).",
                index,
                CATEGORIES_LEN
            );
        })
    }
}
