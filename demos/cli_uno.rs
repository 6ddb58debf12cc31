//! CLI game against the heuristic opponent.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use unors::{Actor, Game, GameOptions, Outcome, Phase, Presenter};

/// Prints the end-of-game banner.
#[derive(Default)]
struct Console {
    dirty: AtomicBool,
}

impl Presenter for Console {
    fn request_layout_refresh(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    fn notify_game_ended(&self, outcome: Outcome) {
        match outcome {
            Outcome::Win => println!("\nYou emptied your hand. You win!"),
            Outcome::Lose => println!("\nThe opponent emptied its hand. You lose."),
        }
    }
}

fn main() {
    println!("UNO CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let console = Arc::new(Console::default());
    let game = Game::with_presenter(GameOptions::default(), seed, Arc::clone(&console));

    loop {
        drive(&game, &console);

        if game.is_game_over() {
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.restart(seed.wrapping_add(u64::from(game.turns())));
                    continue;
                }
                _ => return,
            }
        }

        print_table(&game);
        let input = prompt_line("Card number to play, 'd' to draw: ");
        let result = match input.as_str() {
            "q" | "quit" => return,
            "d" | "draw" => game.submit_human_draw().map(|card| match card {
                Some(card) => println!("You drew {card}."),
                None => println!("Your hand is full."),
            }),
            other => match other.parse::<usize>() {
                Ok(index) => match game.hand(Actor::Human).cards().get(index) {
                    Some(card) => game.submit_human_play(card.id).map(|_| ()),
                    None => {
                        println!("No card at {index}.");
                        continue;
                    }
                },
                Err(_) => {
                    println!("Unknown action.");
                    continue;
                }
            },
        };

        if let Err(err) = result {
            println!("Action rejected: {err}");
        }
    }
}

/// Runs paced work in real time until the human may act again.
fn drive(game: &Game, console: &Console) {
    let mut announced = false;
    while let Some(wait) = game.next_deadline() {
        if game.phase() == Phase::OpponentThinking && !announced {
            println!("Opponent is thinking...");
            announced = true;
        }
        thread::sleep(wait.min(Duration::from_millis(50)));
        game.advance(wait.min(Duration::from_millis(50)));

        if console.dirty.swap(false, Ordering::SeqCst) {
            print_counts(game);
        }
    }
}

fn print_counts(game: &Game) {
    println!(
        "  you: {} cards, opponent: {} cards, deck: {}",
        game.hand_len(Actor::Human),
        game.hand_len(Actor::Opponent),
        game.cards_remaining()
    );
}

fn print_table(game: &Game) {
    println!();
    match game.pile_top() {
        Some(top) => println!("Pile: {top}"),
        None => println!("Pile: empty (anything goes)"),
    }
    println!("Opponent holds {} cards.", game.hand_len(Actor::Opponent));

    let playable = game.playable_cards(Actor::Human);
    println!("Your hand:");
    for (index, card) in game.hand(Actor::Human).cards().iter().enumerate() {
        let marker = if playable.contains(card) { "*" } else { " " };
        println!("  {marker} {index:>2}: {card}");
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}
