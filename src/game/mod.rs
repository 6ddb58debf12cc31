//! Game engine and state management.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use core::time::Duration;

use alloc::boxed::Box;
use alloc::vec::Vec;
use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, CardId, CardKind, Color, DECK_SIZE};
use crate::deck::Deck;
use crate::error::InvariantError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::pacing::Scheduler;
use crate::pile::Pile;
use crate::presentation::{PresentationTable, TableSnapshot, Zone};
use crate::presenter::{NullPresenter, Presenter};
use crate::result::{GameSummary, Outcome};
use crate::strategy::{Heuristic, Strategy};

mod actions;
pub mod state;
mod turns;

pub use state::{Actor, Phase, TurnState};
use turns::Task;

/// A two-player game engine: one human hand against one automated opponent.
///
/// The game owns the deck, the pile, both hands, a seeded RNG and a
/// [`Scheduler`] for paced work. Nothing happens on its own: after submitting
/// a human action, the host drives time forward with [`Game::advance`] (or
/// [`Game::run_until_idle`] for headless play) so that staggered draws and
/// the opponent's move can run.
///
/// ```
/// use unors::{Actor, Game, GameOptions, Phase};
///
/// let game = Game::new(GameOptions::instant(), 7);
/// assert_eq!(game.phase(), Phase::HumanTurn);
/// assert_eq!(game.hand_len(Actor::Human), 7);
///
/// game.submit_human_draw().unwrap();
/// game.run_until_idle();
/// assert!(game.phase() == Phase::HumanTurn || game.is_game_over());
/// ```
pub struct Game {
    /// Face-down draw pool.
    pub deck: Mutex<Deck>,
    /// Face-up discard pile.
    pub pile: Mutex<Pile>,
    /// Hands, indexed by [`Actor`] (human first).
    pub hands: Mutex<[Hand; 2]>,
    /// Game options.
    pub options: GameOptions,
    /// Current phase of the turn state machine.
    phase: Mutex<Phase>,
    /// Set exactly once when a hand runs out of cards.
    ended: AtomicBool,
    /// Result of the game once it has ended.
    outcome: Mutex<Option<Outcome>>,
    /// Completed turns, counting both players.
    turns: AtomicU32,
    /// Paced work still to run.
    scheduler: Mutex<Scheduler<Task>>,
    /// Renderer-facing state per card.
    presentation: Mutex<PresentationTable>,
    /// Decision function for the opponent.
    strategy: Box<dyn Strategy + Send + Sync>,
    /// Host UI hooks.
    presenter: Box<dyn Presenter + Send + Sync>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed and no presenter.
    ///
    /// The deck is created and shuffled, both hands are dealt, and the human
    /// moves first.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_presenter(options, seed, NullPresenter)
    }

    /// Creates a new game that reports to `presenter`.
    ///
    /// Dealing already calls [`Presenter::request_layout_refresh`] once per
    /// card.
    #[must_use]
    pub fn with_presenter<P>(options: GameOptions, seed: u64, presenter: P) -> Self
    where
        P: Presenter + Send + Sync + 'static,
    {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::created(&mut rng);
        let mut presentation = PresentationTable::default();
        presentation.reset(deck.cards());

        let game = Self {
            deck: Mutex::new(deck),
            pile: Mutex::new(Pile::new()),
            hands: Mutex::new([Hand::new(), Hand::new()]),
            options,
            phase: Mutex::new(Phase::HumanTurn),
            ended: AtomicBool::new(false),
            outcome: Mutex::new(None),
            turns: AtomicU32::new(0),
            scheduler: Mutex::new(Scheduler::new()),
            presentation: Mutex::new(presentation),
            strategy: Box::new(Heuristic),
            presenter: Box::new(presenter),
            rng: Mutex::new(rng),
        };
        game.deal();
        game
    }

    /// Replaces the opponent's strategy.
    #[must_use]
    pub fn with_strategy<S>(mut self, strategy: S) -> Self
    where
        S: Strategy + Send + Sync + 'static,
    {
        self.strategy = Box::new(strategy);
        self
    }

    /// Throws the current game away and starts a fresh one with `seed`.
    ///
    /// Every pending paced step is cancelled. A step that is running while
    /// the restart happens (for example one whose presenter callback called
    /// `restart`) finishes its current card but queues nothing and changes
    /// no turn state afterwards.
    pub fn restart(&self, seed: u64) {
        self.scheduler.lock().cancel_all();

        {
            let mut deck = self.deck.lock();
            let mut rng = self.rng.lock();
            *rng = ChaCha8Rng::seed_from_u64(seed);
            deck.create(&mut *rng);
            drop(rng);
            self.pile.lock().clear();
            for hand in self.hands.lock().iter_mut() {
                hand.clear();
            }
            self.presentation.lock().reset(deck.cards());
        }

        *self.outcome.lock() = None;
        self.turns.store(0, Ordering::SeqCst);
        self.ended.store(false, Ordering::SeqCst);
        *self.phase.lock() = Phase::HumanTurn;
        debug!("game restarted with seed {seed}");

        self.deal();
    }

    /// Deals the opening hands, alternating human and opponent.
    fn deal(&self) {
        for _ in 0..self.options.initial_hand_size {
            for actor in [Actor::Human, Actor::Opponent] {
                self.transfer_one(actor);
            }
        }
        debug!(
            "dealt {} cards each, {} left in the deck",
            self.options.initial_hand_size,
            self.cards_remaining()
        );
    }

    /// Moves one card from the deck to `actor`'s hand.
    ///
    /// Returns `None` without touching anything if the hand is full or no card
    /// can be found even after recycling the pile.
    fn transfer_one(&self, actor: Actor) -> Option<Card> {
        if self.hands.lock()[actor.index()].len() >= self.options.max_hand_size {
            trace!("{actor:?} hand is full, draw dropped");
            return None;
        }

        let card = self.draw_from_deck()?;
        {
            let mut hands = self.hands.lock();
            let hand = &mut hands[actor.index()];
            hand.add(card);
            let mut presentation = self.presentation.lock();
            presentation.relayout(Zone::Hand(actor), hand.cards());
            presentation.set_face_up(card.id, false);
        }
        trace!("{actor:?} drew {card}");

        self.presenter.request_layout_refresh();
        Some(card)
    }

    /// Draws the top card, recycling the pile into the deck when it runs dry.
    fn draw_from_deck(&self) -> Option<Card> {
        let mut deck = self.deck.lock();
        if deck.is_empty() {
            let mut pile = self.pile.lock();
            let recycled = pile.recycle();
            if !recycled.is_empty() {
                debug!("deck empty, recycling {} cards from the pile", recycled.len());
                let mut rng = self.rng.lock();
                deck.refill_from(recycled, &mut *rng);
                drop(rng);

                let mut presentation = self.presentation.lock();
                presentation.relayout(Zone::Deck, deck.cards());
                for card in deck.cards() {
                    presentation.set_face_up(card.id, false);
                }
                presentation.relayout(Zone::Pile, pile.cards());
            }
        }
        deck.draw()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        *self.phase.lock()
    }

    /// Returns whose turn it is and whether they may act right now.
    ///
    /// Once the game is over the turn owner is the winner.
    pub fn turn_state(&self) -> TurnState {
        let phase = self.phase();
        let ended = self.is_game_over();
        let turn_owner = phase
            .turn_owner()
            .or_else(|| self.outcome().map(Outcome::winner))
            .unwrap_or(Actor::Human);
        let active = match phase {
            Phase::HumanTurn => self.scheduler.lock().is_idle(),
            Phase::OpponentThinking | Phase::OpponentTurn => true,
            Phase::GameOver => false,
        };

        TurnState {
            turn_owner,
            active,
            ended,
        }
    }

    /// Returns the player whose turn it is, or `None` once the game is over.
    pub fn current_turn_owner(&self) -> Option<Actor> {
        self.phase().turn_owner()
    }

    /// Returns whether the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.ended.load(Ordering::SeqCst)
    }

    /// Returns the outcome once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        *self.outcome.lock()
    }

    /// Returns a summary once the game has ended.
    pub fn summary(&self) -> Option<GameSummary> {
        let outcome = self.outcome()?;
        Some(GameSummary {
            outcome,
            turns: self.turns.load(Ordering::SeqCst),
            loser_cards: self.hand_len(outcome.winner().other()),
        })
    }

    /// Returns the number of completed turns.
    pub fn turns(&self) -> u32 {
        self.turns.load(Ordering::SeqCst)
    }

    /// Returns whether paced work is still pending.
    pub fn is_busy(&self) -> bool {
        !self.scheduler.lock().is_idle()
    }

    /// Current virtual time of the game clock.
    pub fn now(&self) -> Duration {
        self.scheduler.lock().now()
    }

    /// How long the host may wait before the next paced step is due.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.lock().time_until_next()
    }

    /// Returns a copy of `actor`'s hand.
    pub fn hand(&self, actor: Actor) -> Hand {
        self.hands.lock()[actor.index()].clone()
    }

    /// Returns the number of cards `actor` holds.
    pub fn hand_len(&self, actor: Actor) -> usize {
        self.hands.lock()[actor.index()].len()
    }

    /// Returns the top of the pile.
    pub fn pile_top(&self) -> Option<Card> {
        self.pile.lock().top().copied()
    }

    /// Returns the number of cards on the pile.
    pub fn pile_len(&self) -> usize {
        self.pile.lock().len()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the cards in `actor`'s hand that may be played right now.
    pub fn playable_cards(&self, actor: Actor) -> Vec<Card> {
        let pile = self.pile.lock();
        let hands = self.hands.lock();
        hands[actor.index()].playable(pile.top())
    }

    /// Returns how many cards of `color` `actor` holds.
    pub fn card_count_by_color(&self, actor: Actor, color: Color) -> usize {
        self.hands.lock()[actor.index()].count_by_color(color)
    }

    /// Returns how many cards of `kind` `actor` holds.
    pub fn card_count_by_kind(&self, actor: Actor, kind: CardKind) -> usize {
        self.hands.lock()[actor.index()].count_by_kind(kind)
    }

    /// Returns the number of cards across the deck, the pile and both hands.
    pub fn total_cards(&self) -> usize {
        let deck = self.deck.lock().len();
        let pile = self.pile.lock().len();
        let hands: usize = self.hands.lock().iter().map(Hand::len).sum();
        deck + pile + hands
    }

    /// Checks that every card is held by exactly one container and that no
    /// card has been created or lost.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn verify_conservation(&self) -> Result<(), InvariantError> {
        let mut ids: Vec<CardId> = Vec::with_capacity(DECK_SIZE);
        {
            let deck = self.deck.lock();
            let pile = self.pile.lock();
            let hands = self.hands.lock();
            ids.extend(deck.cards().iter().map(|card| card.id));
            ids.extend(pile.cards().iter().map(|card| card.id));
            for hand in hands.iter() {
                ids.extend(hand.cards().iter().map(|card| card.id));
            }
        }

        ids.sort_unstable();
        if let Some(pair) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(InvariantError::DuplicateCard(pair[0]));
        }
        if ids.len() != DECK_SIZE {
            return Err(InvariantError::CountMismatch {
                expected: DECK_SIZE,
                found: ids.len(),
            });
        }
        Ok(())
    }

    /// Returns a read-only picture of the table for rendering.
    pub fn snapshot(&self) -> TableSnapshot {
        let deck = self.deck.lock();
        let pile = self.pile.lock();
        let hands = self.hands.lock();
        let presentation = self.presentation.lock();

        TableSnapshot {
            deck: presentation.placed(Zone::Deck, deck.cards()),
            pile: presentation.placed(Zone::Pile, pile.cards()),
            human: presentation.placed(
                Zone::Hand(Actor::Human),
                hands[Actor::Human.index()].cards(),
            ),
            opponent: presentation.placed(
                Zone::Hand(Actor::Opponent),
                hands[Actor::Opponent.index()].cards(),
            ),
        }
    }

    /// Flips a card for display. Has no effect on the rules.
    ///
    /// Returns `false` if the card is unknown.
    pub fn set_face_up(&self, id: CardId, face_up: bool) -> bool {
        self.presentation.lock().set_face_up(id, face_up)
    }
}
