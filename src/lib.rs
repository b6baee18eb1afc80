//! Concrete structs to represent and protect the state of a single-player dice scoring game with
//! methods to progress through its turns.
//!
//! ## Summary
//!
//! A [game engine](GameEngine) owns five dice, the [holds](HoldMask) on those dice, the rolls
//! left in the current turn, a [scoresheet](Scoresheet) of thirteen [categories](Category), and
//! the [history](History) of finished games. The player [rolls](GameEngine::roll) the dice that
//! are not [held](GameEngine::toggle_hold) up to [MAX_ROLLS] times per turn, and ends the turn by
//! [scoring](GameEngine::commit_score) the dice in a category that is still open.
//! Each category can be scored once per game.
//!
//! ## How is the game created?
//!
//! [GameEngine::new] and [GameEngine::with_rng] create the engine and roll the opening
//! [hand](Hand), so the dice are never blank. [GameEngine::with_rng] accepts any
//! [random number generator](rand::Rng), which makes every roll reproducible from a seed.
//!
//! ## How is the game advanced?
//!
//! * [Roll](GameEngine::roll): Rolls every die that is not held and uses up one roll. Does
//! nothing when no rolls are left.
//! * [Toggle a hold](GameEngine::toggle_hold): Flips whether a die keeps its face on the next
//! roll. Reports an [error](ToggleHoldError) for positions outside the hand.
//! * [Commit a score](GameEngine::commit_score): Writes the points of the current hand into an
//! open category, releases the holds, restores [MAX_ROLLS] rolls, and rolls all five dice for
//! the next turn. Does nothing when the category is already scored.
//! * [Start a new game](GameEngine::new_game): Archives the [current total](GameEngine::current_total)
//! at the front of the [history](History) when it is greater than `0`, then clears
//! the scoresheet and starts a fresh turn.
//!
//! Calls that are not allowed in the current state are absorbed as no-ops instead of errors.
//! The engine describes the outcome of every operation in its [status message](GameEngine::message).
//!
//! ## How are points calculated?
//!
//! [score] maps a [category](Category) and a [hand](Hand) to points from a table of how many dice
//! show each face. The upper categories count a single face. The lower categories look for
//! patterns: three and four of a kind and [chance](Category::Chance) earn the sum of the dice,
//! while a [full house](FULL_HOUSE_SCORE), [small straight](SMALL_STRAIGHT_SCORE),
//! [large straight](LARGE_STRAIGHT_SCORE), and [Yahtzee](YAHTZEE_SCORE) earn fixed points.
//!
//! ## How is the game viewed?
//!
//! To obtain an immutable representation of the current state of the game, call
//! [GameEngine::view]. A presentation layer implements [Presenter] and hands it to [run], which
//! pushes a [view](GameView) after every [command](Command).
//!
//! ## How are engines tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. The engine implements
//! methods to get mutable references to its properties and a constructor seeded for
//! reproducible dice, and helper functions generate random hands, holds, scoresheets,
//! and histories.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use category::*;
pub use consts::*;
pub use dice::*;
pub use engine::*;
pub use history::*;
#[cfg(test)]
pub use random::*;
pub use runtime::*;
pub use scoresheet::*;
pub use scoring::*;
pub use types::*;

mod category;
mod consts;
mod dice;
mod engine;
mod history;
#[cfg(test)]
mod random;
mod runtime;
mod scoresheet;
mod scoring;
mod types;
