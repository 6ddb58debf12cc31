//! Hooks the engine calls on the host UI.

use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::result::Outcome;

/// Receives notifications from the engine.
///
/// The engine never holds an internal lock while calling into a presenter,
/// so implementations may query the [`Game`](crate::Game) from inside a
/// callback.
pub trait Presenter {
    /// Container contents changed; card positions should be recomputed.
    ///
    /// Called after every play and every single-card transfer.
    fn request_layout_refresh(&self) {}

    /// The game ended. Called exactly once per game.
    fn notify_game_ended(&self, outcome: Outcome) {
        let _ = outcome;
    }
}

/// A presenter that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

impl<P: Presenter + ?Sized> Presenter for Arc<P> {
    fn request_layout_refresh(&self) {
        (**self).request_layout_refresh();
    }

    fn notify_game_ended(&self, outcome: Outcome) {
        (**self).notify_game_ended(outcome);
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn request_layout_refresh(&self) {
        (**self).request_layout_refresh();
    }

    fn notify_game_ended(&self, outcome: Outcome) {
        (**self).notify_game_ended(outcome);
    }
}
