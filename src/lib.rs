//! A two-player UNO-style card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that pits a human-controlled hand
//! against a heuristic opponent. It owns the deck, the discard pile and both
//! hands, enforces the legality rule, runs the turn state machine and paces
//! draws and the opponent's "thinking" through a virtual-time scheduler that
//! the host UI drives.
//!
//! # Example
//!
//! ```
//! use unors::{Actor, Game, GameOptions};
//!
//! let game = Game::new(GameOptions::instant(), 42);
//!
//! // Anything goes on an empty pile.
//! let card = game.playable_cards(Actor::Human)[0];
//! game.submit_human_play(card.id).unwrap();
//!
//! // Let the opponent answer.
//! game.run_until_idle();
//! assert!(game.pile_top().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod effect;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pacing;
pub mod pile;
pub mod presentation;
pub mod presenter;
pub mod result;
pub mod strategy;
mod sync;

// Re-export main types
pub use card::{Card, CardId, CardKind, Color, DECK_SIZE, Face, can_follow};
pub use deck::Deck;
pub use effect::Effect;
pub use error::{ActionError, InvariantError};
pub use game::{Actor, Game, Phase, TurnState};
pub use hand::Hand;
pub use options::GameOptions;
pub use pile::Pile;
pub use presentation::{CardPresentation, PlacedCard, TableSnapshot, Zone};
pub use presenter::{NullPresenter, Presenter};
pub use result::{GameSummary, Outcome};
pub use strategy::{Decision, Heuristic, Strategy, StrategyView};
