//! Opponent card selection.

use crate::card::{Card, CardId, CardKind, Color, can_follow};

/// Human hand size at or below which the opponent turns aggressive.
const AGGRESSION_THRESHOLD: usize = 3;

/// Own hand size at or below which the opponent avoids DrawTwo cards.
const ENDGAME_THRESHOLD: usize = 2;

/// The single action an automated player commits to on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Play the card with this id.
    Play(CardId),
    /// Draw one card.
    Draw,
}

/// Everything a strategy may look at.
#[derive(Debug, Clone, Copy)]
pub struct StrategyView<'a> {
    /// The deciding player's hand.
    pub hand: &'a [Card],
    /// Number of cards the other player holds.
    pub opponent_hand_len: usize,
    /// Top of the pile, if anything has been played.
    pub top: Option<&'a Card>,
}

/// Chooses an action for an automated player.
pub trait Strategy {
    /// Picks one action. Must not depend on anything outside `view`.
    fn decide(&self, view: &StrategyView<'_>) -> Decision;
}

/// The default opponent heuristic.
///
/// With several playable cards it tries, in order: a DrawTwo when the human
/// is close to winning, a non-DrawTwo when it is close to winning itself,
/// and finally a card of the color it holds fewest of.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Strategy for Heuristic {
    fn decide(&self, view: &StrategyView<'_>) -> Decision {
        let candidates: alloc::vec::Vec<&Card> = view
            .hand
            .iter()
            .filter(|card| can_follow(card, view.top))
            .collect();

        match candidates.as_slice() {
            [] => Decision::Draw,
            [only] => Decision::Play(only.id),
            _ => Decision::Play(choose_among(view, &candidates).id),
        }
    }
}

fn choose_among<'a>(view: &StrategyView<'_>, candidates: &[&'a Card]) -> &'a Card {
    let own = view.hand.len();
    let theirs = view.opponent_hand_len;

    if theirs <= AGGRESSION_THRESHOLD && own >= theirs {
        if let Some(card) = find_kind(candidates, |kind| kind == CardKind::DrawTwo) {
            return card;
        }
    }

    if own <= ENDGAME_THRESHOLD {
        if let Some(card) = find_kind(candidates, |kind| kind != CardKind::DrawTwo) {
            return card;
        }
    }

    if let Some(card) = scarcest_color(view.hand, candidates) {
        return card;
    }

    candidates[0]
}

fn find_kind<'a>(candidates: &[&'a Card], pred: impl Fn(CardKind) -> bool) -> Option<&'a Card> {
    candidates.iter().copied().find(|card| pred(card.kind()))
}

fn scarcest_color<'a>(hand: &[Card], candidates: &[&'a Card]) -> Option<&'a Card> {
    let mut counts = [0usize; 4];
    for card in hand {
        counts[card.color.index()] += 1;
    }

    let mut ranked = Color::ALL;
    // Stable, so equal counts keep `Color::ALL` order.
    ranked.sort_by_key(|color| counts[color.index()]);

    ranked.into_iter().find_map(|color| {
        let of_color = || candidates.iter().copied().filter(move |c| c.color == color);
        of_color()
            .find(|card| card.kind() == CardKind::Classic)
            .or_else(|| of_color().next())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Face;

    fn card(id: u16, color: Color, face: Face) -> Card {
        Card::new(CardId(id), color, face)
    }

    fn decide(hand: &[Card], opponent_hand_len: usize, top: Option<&Card>) -> Decision {
        Heuristic.decide(&StrategyView {
            hand,
            opponent_hand_len,
            top,
        })
    }

    #[test]
    fn draws_without_a_legal_card() {
        let top = card(99, Color::Red, Face::Classic(4));
        let hand = [card(0, Color::Blue, Face::Classic(1))];
        assert_eq!(decide(&hand, 7, Some(&top)), Decision::Draw);
    }

    #[test]
    fn single_legal_card_is_played() {
        let top = card(99, Color::Red, Face::Classic(4));
        let hand = [
            card(0, Color::Blue, Face::Classic(1)),
            card(1, Color::Green, Face::Classic(4)),
        ];
        assert_eq!(decide(&hand, 7, Some(&top)), Decision::Play(CardId(1)));
    }

    #[test]
    fn empty_pile_makes_every_card_a_candidate() {
        let hand = [card(0, Color::Blue, Face::Classic(1))];
        assert_eq!(decide(&hand, 7, None), Decision::Play(CardId(0)));
    }

    #[test]
    fn endgame_caution_avoids_draw_two() {
        let top = card(99, Color::Red, Face::Classic(4));
        let hand = [
            card(0, Color::Red, Face::DrawTwo),
            card(1, Color::Red, Face::Classic(8)),
        ];
        // Human has plenty of cards, so aggression does not apply.
        assert_eq!(decide(&hand, 6, Some(&top)), Decision::Play(CardId(1)));
    }

    #[test]
    fn color_balancing_prefers_scarce_color_and_classic() {
        let top = card(99, Color::Red, Face::Classic(5));
        let hand = [
            card(0, Color::Red, Face::Classic(1)),
            card(1, Color::Red, Face::Classic(2)),
            card(2, Color::Red, Face::Classic(3)),
            card(3, Color::Green, Face::DrawTwo),
            card(4, Color::Green, Face::Classic(5)),
            card(5, Color::Yellow, Face::Classic(9)),
            card(6, Color::Yellow, Face::Classic(0)),
        ];
        // Green and Yellow both hold two; Green comes first, and only the
        // Green 5 is legal there.
        assert_eq!(decide(&hand, 7, Some(&top)), Decision::Play(CardId(4)));
    }

    #[test]
    fn color_balancing_falls_back_to_draw_two_of_scarcest_color() {
        let top = card(99, Color::Blue, Face::DrawTwo);
        let hand = [
            card(0, Color::Blue, Face::Classic(1)),
            card(1, Color::Blue, Face::Classic(2)),
            card(2, Color::Red, Face::DrawTwo),
            card(3, Color::Green, Face::Classic(7)),
        ];
        // Red and Green hold one each; Red ranks first and its only
        // candidate is a DrawTwo.
        assert_eq!(decide(&hand, 9, Some(&top)), Decision::Play(CardId(2)));
    }

    #[test]
    fn decisions_are_deterministic() {
        let top = card(99, Color::Yellow, Face::Classic(3));
        let hand = [
            card(0, Color::Yellow, Face::Classic(1)),
            card(1, Color::Blue, Face::Classic(3)),
            card(2, Color::Yellow, Face::DrawTwo),
        ];
        let first = decide(&hand, 5, Some(&top));
        for _ in 0..100 {
            assert_eq!(decide(&hand, 5, Some(&top)), first);
        }
    }
}
