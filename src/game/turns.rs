use core::sync::atomic::Ordering;
use core::time::Duration;

use log::{debug, trace, warn};
use rand::Rng;

use crate::card::Card;
use crate::effect::Effect;
use crate::result::Outcome;
use crate::strategy::{Decision, StrategyView};

use super::{Actor, Game, Phase};

/// Paced work queued on the game scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Task {
    /// Transfer the next card of a multi-card draw.
    Draw {
        actor: Actor,
        remaining: usize,
        ending: Actor,
    },
    /// The opponent's thinking delay is over.
    OpponentAct,
    /// End `Actor`'s turn.
    EndTurn(Actor),
}

impl Game {
    /// Moves the game clock forward by `elapsed` and runs every step that
    /// falls due, in order.
    ///
    /// Returns the number of steps run.
    pub fn advance(&self, elapsed: Duration) -> usize {
        self.scheduler.lock().advance_by(elapsed);

        let mut ran = 0;
        loop {
            let Some(job) = self.scheduler.lock().pop_due() else {
                break;
            };

            trace!("running {:?} at {:?}", job.task, job.due);
            self.dispatch(job.epoch, job.task);
            ran += 1;
        }
        ran
    }

    /// Fast-forwards the clock until nothing is pending.
    ///
    /// After a human action this resolves everything up to the start of the
    /// human's next turn (or the end of the game). Returns the time skipped.
    pub fn run_until_idle(&self) -> Duration {
        let start = self.now();
        loop {
            let wait = self.scheduler.lock().time_until_next();
            let Some(wait) = wait else {
                break;
            };
            self.advance(wait);
        }
        self.now().saturating_sub(start)
    }

    /// Current scheduler epoch. Work started in an older epoch belongs to a
    /// game that was thrown away.
    pub(super) fn epoch(&self) -> u64 {
        self.scheduler.lock().epoch()
    }

    fn is_stale(&self, epoch: u64) -> bool {
        self.epoch() != epoch
    }

    fn dispatch(&self, epoch: u64, task: Task) {
        match task {
            Task::Draw {
                actor,
                remaining,
                ending,
            } => {
                self.draw_step(epoch, actor, remaining, ending);
            }
            Task::OpponentAct => self.opponent_act(epoch),
            Task::EndTurn(actor) => self.end_turn(epoch, actor),
        }
    }

    /// Transfers one card of a draw and queues whatever comes next.
    ///
    /// After each card the next step waits for the draw pacing delay. Once
    /// the hand is full (or no card is left anywhere), the rest of the draw
    /// is dropped and `ending`'s turn ends at once. Nothing follows if the
    /// game was restarted while the card was being presented.
    pub(super) fn draw_step(
        &self,
        epoch: u64,
        actor: Actor,
        remaining: usize,
        ending: Actor,
    ) -> Option<Card> {
        if self.is_stale(epoch) {
            return None;
        }
        if remaining == 0 {
            self.end_turn(epoch, ending);
            return None;
        }

        let Some(card) = self.transfer_one(actor) else {
            self.end_turn(epoch, ending);
            return None;
        };

        let next = match remaining - 1 {
            0 => Task::EndTurn(ending),
            left => Task::Draw {
                actor,
                remaining: left,
                ending,
            },
        };
        if !self
            .scheduler
            .lock()
            .schedule_in(epoch, self.options.draw_pacing, next)
        {
            trace!("game restarted mid-draw, dropping {next:?}");
        }
        Some(card)
    }

    /// Resolves what happens after a card landed on the pile.
    pub(super) fn after_play(&self, epoch: u64, actor: Actor, card: Card) {
        if self.is_stale(epoch) || self.check_game_over() {
            return;
        }

        match card.kind().effect() {
            Effect::None => self.end_turn(epoch, actor),
            Effect::ForceDraw(count) => {
                debug!("{:?} must draw {count}", actor.other());
                self.scheduler.lock().schedule_in(
                    epoch,
                    self.options.draw_pacing,
                    Task::Draw {
                        actor: actor.other(),
                        remaining: usize::from(count),
                        ending: actor,
                    },
                );
            }
        }
    }

    fn end_turn(&self, epoch: u64, actor: Actor) {
        if self.is_stale(epoch) || self.is_game_over() {
            return;
        }
        self.turns.fetch_add(1, Ordering::SeqCst);

        match actor {
            Actor::Human => {
                *self.phase.lock() = Phase::OpponentThinking;
                let delay = self.thinking_delay();
                debug!("opponent thinking for {delay:?}");
                self.scheduler
                    .lock()
                    .schedule_in(epoch, delay, Task::OpponentAct);
            }
            Actor::Opponent => {
                *self.phase.lock() = Phase::HumanTurn;
                debug!("human to play");
            }
        }
    }

    fn thinking_delay(&self) -> Duration {
        let min = self.options.thinking_delay_min;
        let max = self.options.thinking_delay_max;
        if max <= min {
            return min;
        }
        let nanos = |delay: Duration| u64::try_from(delay.as_nanos()).unwrap_or(u64::MAX);
        let sampled = self.rng.lock().random_range(nanos(min)..=nanos(max));
        Duration::from_nanos(sampled)
    }

    fn opponent_act(&self, epoch: u64) {
        if self.is_stale(epoch) {
            return;
        }
        {
            let mut phase = self.phase.lock();
            if *phase != Phase::OpponentThinking {
                return;
            }
            *phase = Phase::OpponentTurn;
        }

        let decision = {
            let pile = self.pile.lock();
            let hands = self.hands.lock();
            self.strategy.decide(&StrategyView {
                hand: hands[Actor::Opponent.index()].cards(),
                opponent_hand_len: hands[Actor::Human.index()].len(),
                top: pile.top(),
            })
        };
        trace!("opponent decided {decision:?}");
        if self.is_stale(epoch) {
            return;
        }

        match decision {
            Decision::Play(id) => match self.play(Actor::Opponent, id) {
                Ok(card) => self.after_play(epoch, Actor::Opponent, card),
                Err(err) => {
                    warn!("opponent strategy chose an unplayable card ({err}), drawing instead");
                    self.draw_step(epoch, Actor::Opponent, 1, Actor::Opponent);
                }
            },
            Decision::Draw => {
                self.draw_step(epoch, Actor::Opponent, 1, Actor::Opponent);
            }
        }
    }

    /// Ends the game if a hand is empty.
    ///
    /// Returns whether the game is over. The first call that finds an empty
    /// hand moves the game to [`Phase::GameOver`], drops pending work and
    /// notifies the presenter; later calls only report.
    pub fn check_game_over(&self) -> bool {
        let winner = {
            let hands = self.hands.lock();
            [Actor::Human, Actor::Opponent]
                .into_iter()
                .find(|actor| hands[actor.index()].is_empty())
        };
        let Some(winner) = winner else {
            return self.is_game_over();
        };

        if self
            .ended
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return true;
        }

        let outcome = Outcome::for_winner(winner);
        *self.outcome.lock() = Some(outcome);
        *self.phase.lock() = Phase::GameOver;
        self.scheduler.lock().cancel_all();
        debug!("game over: {winner:?} wins");

        self.presenter.notify_game_ended(outcome);
        true
    }
}
