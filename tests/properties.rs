//! Property tests for card conservation and shuffling.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use unors::{Actor, Card, CardId, Color, DECK_SIZE, Deck, Face, Game, GameOptions};

fn sorted_ids(cards: &[Card]) -> Vec<CardId> {
    let mut ids: Vec<CardId> = cards.iter().map(|card| card.id).collect();
    ids.sort_unstable();
    ids
}

proptest! {
    #[test]
    fn cards_are_conserved(seed in any::<u64>(), moves in prop::collection::vec(any::<bool>(), 1..120)) {
        let game = Game::new(GameOptions::instant(), seed);
        for prefer_play in moves {
            if game.is_game_over() {
                break;
            }
            let playable = game.playable_cards(Actor::Human);
            let result = match playable.first() {
                Some(card) if prefer_play => game.submit_human_play(card.id).map(|_| ()),
                _ => game.submit_human_draw().map(|_| ()),
            };
            prop_assert!(result.is_ok());
            game.run_until_idle();

            prop_assert_eq!(game.total_cards(), DECK_SIZE);
            prop_assert!(game.verify_conservation().is_ok());
            prop_assert!(game.hand_len(Actor::Human) <= game.options.max_hand_size);
            prop_assert!(game.hand_len(Actor::Opponent) <= game.options.max_hand_size);
        }
    }

    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::created(&mut rng);
        let before = sorted_ids(deck.cards());
        deck.shuffle(&mut rng);
        prop_assert_eq!(sorted_ids(deck.cards()), before);
        prop_assert_eq!(deck.len(), DECK_SIZE);
    }
}

#[test]
fn shuffle_has_no_positional_bias() {
    const CARDS: usize = 5;
    const ROUNDS: usize = 5000;

    let cards: Vec<Card> = (0..CARDS as u16)
        .map(|id| Card::new(CardId(id), Color::Red, Face::Classic(id as u8)))
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let mut positions = [0usize; CARDS];

    for _ in 0..ROUNDS {
        let mut deck = Deck::from_cards(cards.clone());
        deck.shuffle(&mut rng);
        let position = deck
            .cards()
            .iter()
            .position(|card| card.id == CardId(0))
            .unwrap();
        positions[position] += 1;
    }

    // Expected 1000 per slot; a standard deviation is about 28.
    for count in positions {
        assert!((850..=1150).contains(&count), "{positions:?}");
    }
}
