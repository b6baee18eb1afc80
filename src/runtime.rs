use crate::{Category, GameEngine, GameView, ToggleHoldError};
use rand::Rng;
use tracing::debug;

/// Describes one operation requested by the presentation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    /// [Roll](GameEngine::roll) every die that is not held.
    Roll,
    /// [Toggle the hold](GameEngine::toggle_hold) on the die at a position.
    ToggleHold(usize),
    /// [Score](GameEngine::commit_score) the current hand in a category.
    CommitScore(Category),
    /// [Archive and restart](GameEngine::new_game) the game.
    NewGame,
    /// Stop [running](run).
    Quit,
}

/// Defines the methods the presentation implements to drive a [`GameEngine`]. The presentation
/// renders the [view](GameView), decides which controls are enabled, and formats
/// [history timestamps](crate::HistoryEntry::timestamp).
///
/// # Errors
///
/// The implementor of [`Presenter`] is responsible for returning an error to prevent the runtime
/// from running indefinitely whether from no response or repeated invalid inputs. When a method
/// call fails, the runtime is stopped, and an error is returned and propagated out of the runtime
/// and back to the calling client code.
pub trait Presenter<E> {
    /// Gets the next [`Command`] from the player.
    fn get_command(&self) -> Result<Command, E>;

    /// Updates the presentation with the state of the game after every command.
    fn update_view(&self, view: &GameView<'_>) -> Result<(), E>;

    /// When a call to [`GameEngine::toggle_hold`] fails, updates the presentation with
    /// the state of the game and the reason why the hold could not be toggled.
    fn update_hold_error(&self, view: &GameView<'_>, error: ToggleHoldError) -> Result<(), E>;
}

/// Applies a single [`Command`] to `engine`.
///
/// # Errors
///
/// * [`ToggleHoldError::PositionOutOfBounds`] Attempting to hold a die outside the hand.
///
/// # Returns
///
/// Whether the command changed the state of the game. [`Command::Quit`] never does.
pub fn dispatch<R: Rng>(
    engine: &mut GameEngine<R>,
    command: Command,
) -> Result<bool, ToggleHoldError> {
    debug!(?command, "dispatching command");
    match command {
        Command::Roll => Ok(engine.roll()),
        Command::ToggleHold(position) => engine.toggle_hold(position).map(|()| true),
        Command::CommitScore(category) => Ok(engine.commit_score(category)),
        Command::NewGame => {
            engine.new_game();
            Ok(true)
        }
        Command::Quit => Ok(false),
    }
}

/// Repeatedly sends the state of the game to `presenter` and asks for a [`Command`] until
/// the presenter asks to [quit](Command::Quit). Failed [holds](GameEngine::toggle_hold) are
/// reported with [`Presenter::update_hold_error`] and the loop continues.
///
/// # Errors
///
/// When `presenter` fails to send input or receive an update.
pub fn run<P, E, R>(presenter: &P, engine: &mut GameEngine<R>) -> Result<(), E>
where
    P: Presenter<E>,
    R: Rng,
{
    loop {
        presenter.update_view(&engine.view())?;
        let command = presenter.get_command()?;
        if command == Command::Quit {
            debug!("presenter quit");
            return Ok(());
        }

        if let Err(error) = dispatch(engine, command) {
            // cannot use map_err since E needs to be propagated here
            presenter.update_hold_error(&engine.view(), error)?;
        }
    }
}
