use log::{debug, trace};

use crate::card::{Card, CardId, can_follow};
use crate::error::ActionError;
use crate::presentation::Zone;

use super::{Actor, Game, Phase};

impl Game {
    fn ensure_human_turn(&self) -> Result<(), ActionError> {
        if self.is_game_over() {
            return Err(ActionError::GameOver);
        }

        if self.phase() != Phase::HumanTurn {
            return Err(ActionError::NotYourTurn);
        }

        if self.is_busy() {
            return Err(ActionError::Busy);
        }

        Ok(())
    }

    /// Human action: play a card from the hand.
    ///
    /// On success the card is on the pile. A DrawTwo then makes the opponent
    /// draw (paced), after which the turn passes; any other card passes the
    /// turn at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not the human's turn, a
    /// previous action is still resolving, the card is not in the human's
    /// hand, or it cannot follow the pile top. The game is left untouched.
    pub fn submit_human_play(&self, id: CardId) -> Result<Card, ActionError> {
        self.ensure_human_turn()?;
        let epoch = self.epoch();
        let card = self.play(Actor::Human, id)?;
        self.after_play(epoch, Actor::Human, card);
        Ok(card)
    }

    /// Human action: draw one card and end the turn.
    ///
    /// Returns the drawn card, or `None` if the hand is already full. The
    /// turn passes after the draw pacing delay.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not the human's turn, or a
    /// previous action is still resolving.
    pub fn submit_human_draw(&self) -> Result<Option<Card>, ActionError> {
        self.ensure_human_turn()?;
        let epoch = self.epoch();
        Ok(self.draw_step(epoch, Actor::Human, 1, Actor::Human))
    }

    /// Moves `id` from `actor`'s hand onto the pile if it may follow the top.
    pub(super) fn play(&self, actor: Actor, id: CardId) -> Result<Card, ActionError> {
        let card = {
            let mut pile = self.pile.lock();
            let mut hands = self.hands.lock();
            let hand = &mut hands[actor.index()];

            let card = *hand.get(id).ok_or(ActionError::CardNotInHand)?;
            if !can_follow(&card, pile.top()) {
                trace!("{actor:?} tried to play {card} on {:?}", pile.top());
                return Err(ActionError::IllegalPlay);
            }

            hand.remove(id);
            pile.push(card);

            let mut presentation = self.presentation.lock();
            presentation.relayout(Zone::Hand(actor), hand.cards());
            presentation.place(card.id, Zone::Pile, pile.len() - 1);
            presentation.set_face_up(card.id, true);
            card
        };
        debug!("{actor:?} played {card}");

        self.presenter.request_layout_refresh();
        Ok(card)
    }
}
