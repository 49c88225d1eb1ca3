//! Terminal host for the memory game.
//!
//! Renders the board as text, reads card positions from stdin, and honours
//! the pacing delays by sleeping until the next scheduled task is due.
//!
//! ```text
//! cargo run --bin memory_cli -- --seed 7
//! RUST_LOG=memory_match=debug cargo run --bin memory_cli
//! ```

use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use memory_match::{
    CardPosition, EventLog, EventSink, GameController, GameEvent, GameRng, ManualClock,
    MemoryConfig, RandomSource,
};

type CliGame = GameController<GameRng, ManualClock, EventLog>;

#[derive(Parser, Debug)]
#[command(name = "memory_cli", about = "Play the memory matching game in a terminal")]
struct Args {
    /// Seed for the deal; random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip every pacing delay.
    #[arg(long)]
    instant: bool,

    /// Cards per row when drawing the board.
    #[arg(long, default_value_t = 4)]
    columns: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = if args.instant {
        MemoryConfig::instant()
    } else {
        MemoryConfig::new()
    };
    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let mut game = GameController::new(config, rng, ManualClock::new(), EventLog::new())
        .context("invalid game configuration")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "Memory match: find all {} pairs (seed {}).",
        game.config().pair_count(),
        game.rng().seed()
    );
    prompt("Press enter to start")?;
    if lines.next().transpose()?.is_none() {
        return Ok(());
    }

    game.start();
    wait_for_tasks(&mut game);
    report(&mut game);
    draw(&game, args.columns);

    loop {
        if game.is_won() {
            prompt("r to play again, q to quit")?;
        } else {
            prompt(&format!(
                "card 0-{}, r to reset, q to quit",
                game.config().card_count() - 1
            ))?;
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match line.trim() {
            "q" | "quit" => break,
            "r" | "reset" => game.reset(),
            input => match input.parse::<u16>() {
                Ok(index) => {
                    let outcome = game.attempt_flip(CardPosition::new(index));
                    if !outcome.is_accepted() {
                        println!("That card can't be turned over.");
                        continue;
                    }
                    if game.is_busy() {
                        draw(&game, args.columns);
                    }
                }
                Err(_) => {
                    println!("Enter a card number.");
                    continue;
                }
            },
        }

        wait_for_tasks(&mut game);
        report(&mut game);
        draw(&game, args.columns);
    }

    Ok(())
}

fn prompt(text: &str) -> Result<()> {
    print!("{text}: ");
    io::stdout().flush()?;
    Ok(())
}

/// Sleep through every scheduled task, running each as it falls due.
fn wait_for_tasks<R: RandomSource, E: EventSink>(game: &mut GameController<R, ManualClock, E>) {
    while let Some(wait) = game.scheduler().until_next() {
        thread::sleep(wait);
        game.advance(wait);
    }
}

/// Print the events worth telling the player about.
fn report(game: &mut CliGame) {
    for event in game.sink_mut().drain() {
        match event {
            GameEvent::CardsMatched { .. } => println!("Match!"),
            GameEvent::CardsMismatched { .. } => println!("No match."),
            GameEvent::RoundWon { attempts } => {
                println!("You found every pair in {attempts} attempts!");
            }
            _ => {}
        }
    }
}

fn draw(game: &CliGame, columns: usize) {
    let Some(round) = game.round() else {
        return;
    };
    let columns = columns.max(1);

    println!();
    for (i, card) in round.cards().enumerate() {
        let face = if card.matched {
            format!("[{}]", card.symbol.glyph())
        } else if card.flipped {
            format!(" {} ", card.symbol.glyph())
        } else {
            " ? ".to_string()
        };
        print!("{:>3}:{:<5}", card.position.index(), face);
        if (i + 1) % columns == 0 {
            println!();
        }
    }
    if round.card_count() % columns != 0 {
        println!();
    }
    println!(
        "Attempts: {}   Pairs: {}/{}",
        round.attempts(),
        round.matched_pairs(),
        round.total_pairs()
    );
}
