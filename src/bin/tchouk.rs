//! Command-line harness for the Tchoukaillon engine.
//!
//! Exercises the whole engine surface: parse and display a board, query
//! move legality, apply moves interactively, detect victory, and print
//! winning plans.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tchoukaillon::{plan_moves, Board, BoardGenerator};

#[derive(Parser, Debug)]
#[command(author, version, about = "Tchoukaillon solitaire engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the greedy winning line for a board
    Solve {
        /// Board configuration, store first, e.g. "0,0,1,1,3,5,0"
        board: String,
    },

    /// Play a board interactively on stdin
    Play {
        /// Board configuration, store first
        board: String,
    },

    /// Generate a winnable board
    Random {
        /// Number of houses
        #[arg(long, default_value_t = 6)]
        houses: usize,

        /// Upper bound on the length of the hidden solution
        #[arg(long, default_value_t = 12)]
        moves: usize,

        /// RNG seed; omit for an OS-seeded board
        #[arg(long)]
        seed: Option<u64>,

        /// Also print the winning line
        #[arg(long)]
        solve: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Solve { board } => solve(&board),
        Command::Play { board } => play(&board),
        Command::Random {
            houses,
            moves,
            seed,
            solve,
        } => random(houses, moves, seed, solve),
    }
}

fn parse_board(text: &str) -> Result<Board> {
    text.parse::<Board>()
        .with_context(|| format!("bad board configuration {text:?}"))
}

fn print_plan(board: &Board) {
    let plan = plan_moves(board);
    if plan.is_winning() {
        if plan.is_empty() {
            println!("Already won.");
        } else {
            println!("Winning line ({} moves): {:?}", plan.len(), plan.moves());
        }
    } else if plan.is_empty() {
        println!("No winning line: no house is playable.");
    } else {
        println!(
            "No winning line: play gets stuck after {:?}",
            plan.moves()
        );
    }
}

fn solve(text: &str) -> Result<()> {
    let board = parse_board(text)?;
    println!("Board: {board}");
    print_plan(&board);
    Ok(())
}

fn play(text: &str) -> Result<()> {
    let mut board = parse_board(text)?;
    println!("Sow houses until all are empty. Commands: a house number, 'hint', 'quit'.");

    loop {
        println!("\nBoard: {board}  (store: {})", board.store());

        if board.is_game_won() {
            println!("All houses empty. You won!");
            return Ok(());
        }
        if board.choose_move().is_none() {
            println!("No house holds as many seeds as its own index. Stuck!");
            return Ok(());
        }

        print!("House to sow (1-{}): ", board.house_count());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // EOF: treat like quitting.
            return Ok(());
        }
        let input = line.trim();

        match input {
            "quit" | "q" => return Ok(()),
            "hint" | "h" => {
                let plan = plan_moves(&board);
                match plan.moves().first() {
                    Some(house) => println!("Sow house {house}; {} moves to go.", plan.len()),
                    None => println!("No legal move to suggest."),
                }
            }
            _ => match input.parse::<usize>() {
                Ok(house) if house >= 1 && house <= board.house_count() => {
                    if board.is_legal_move(house) {
                        board.apply_move(house);
                    } else {
                        println!(
                            "House {house} holds {} seeds; it is playable only with exactly {house}.",
                            board.seeds_in_house(house)
                        );
                    }
                }
                Ok(house) => println!("House {house} is not on the board."),
                Err(_) => println!("Enter a house number, 'hint' or 'quit'."),
            },
        }
    }
}

fn random(houses: usize, moves: usize, seed: Option<u64>, solve: bool) -> Result<()> {
    anyhow::ensure!(houses > 0, "need at least one house");

    let mut generator = match seed {
        Some(seed) => BoardGenerator::new(seed),
        None => BoardGenerator::from_entropy(),
    };

    let board = generator.winnable(houses, moves);
    println!("Board: {board}");
    println!("Configuration (store first): {:?}", board.pits());

    if solve {
        print_plan(&board);
    }
    Ok(())
}
