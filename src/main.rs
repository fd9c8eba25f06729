//! Blokus-style Game Driver
//!
//! Runs automated matches on the rule engine from the command line, lists
//! opening moves for a shape and prints the piece catalog.

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use blokus::pieces::{shape_definitions, Color, Shape};
use blokus::{
    format_board, pass_turn, pick_automated_move, place, valid_moves, GameConfig, GameState,
    Outcome, Player,
};

/// Plays a two-sided corner-touch placement game on a square board.
#[derive(Parser)]
#[command(name = "blokus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play a full game with both sides choosing random legal moves.
    Play(PlayArgs),
    /// List the opening anchors for a shape on an empty board.
    Moves {
        /// Shape to enumerate.
        #[arg(value_enum)]
        shape: Shape,
        /// Board edge length.
        #[arg(long, default_value_t = blokus::board::DEFAULT_BOARD_SIZE)]
        board_size: usize,
    },
    /// Print every shape in the catalog.
    Catalog,
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Seed for the move selector; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Colour of the human side.
    #[arg(long, value_enum)]
    human_color: Option<Color>,
    /// Colour of the computer side; defaults to the first other colour.
    #[arg(long, value_enum)]
    computer_color: Option<Color>,
    /// Board edge length.
    #[arg(long)]
    board_size: Option<usize>,
    /// Pause before each computer move, in milliseconds.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Play(args)) => run_play(args),
        Some(Command::Moves { shape, board_size }) => run_moves(shape, board_size),
        Some(Command::Catalog) => {
            print!("{}", format_catalog());
            ExitCode::SUCCESS
        }
        // default: play with default settings
        None => run_play(PlayArgs::default()),
    }
}

/// Builds the match configuration from command-line flags.
fn build_config(args: &PlayArgs) -> GameConfig {
    let mut config = match args.human_color {
        Some(color) => GameConfig::with_human_color(color),
        None => GameConfig::default(),
    };
    if let Some(color) = args.computer_color {
        config.computer_color = color;
    }
    if let Some(size) = args.board_size {
        config.board_size = size;
    }
    config
}

/// Plays a seeded game to the end, printing each move and the final board.
fn run_play(args: PlayArgs) -> ExitCode {
    let config = build_config(&args);
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    println!(
        "Seed {}: human plays {}, computer plays {} on a {}x{} board",
        seed, config.human_color, config.computer_color, config.board_size, config.board_size
    );

    let mut state = GameState::new(&config);
    while !state.is_game_over() {
        let player = state.current_player();
        if player == Player::Computer && args.delay_ms > 0 {
            thread::sleep(Duration::from_millis(args.delay_ms));
        }

        let next = match pick_automated_move(&state, &mut rng) {
            Some(chosen) => {
                println!(
                    "{:?} places {:?} at {}",
                    player, chosen.piece.shape, chosen.position
                );
                place(&chosen.piece, chosen.position, &state)
            }
            None => {
                println!("{:?} passes", player);
                pass_turn(&state)
            }
        };

        state = match next {
            Ok(next) => next,
            Err(e) => {
                eprintln!("Engine refused a move: {}", e);
                return ExitCode::FAILURE;
            }
        };
    }

    println!();
    print!("{}", format_board(state.board()));
    println!("{}", format_result(&state));
    ExitCode::SUCCESS
}

/// Summarises scores and the winner of a finished game.
fn format_result(state: &GameState) -> String {
    let human = state.score(Player::Human);
    let computer = state.score(Player::Computer);
    let verdict = match state.outcome() {
        Some(Outcome::Winner(Player::Human)) => "human wins",
        Some(Outcome::Winner(Player::Computer)) => "computer wins",
        Some(Outcome::Draw) => "draw",
        None => "in progress",
    };
    format!(
        "Human {} ({} pieces left), computer {} ({} pieces left): {}",
        human,
        state.pieces(Player::Human).len(),
        computer,
        state.pieces(Player::Computer).len(),
        verdict
    )
}

/// Prints opening anchors for one shape.
fn run_moves(shape: Shape, board_size: usize) -> ExitCode {
    let config = GameConfig {
        board_size,
        ..GameConfig::default()
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    let state = GameState::new(&config);
    let piece = state.pieces(Player::Human)[shape as usize];
    let moves = valid_moves(&piece, &state);
    println!("{} opening anchors for {:?}:", moves.len(), shape);
    for position in moves {
        println!("  {}", position);
    }
    ExitCode::SUCCESS
}

/// Draws every catalog shape on its own small grid.
fn format_catalog() -> String {
    let symbol = Color::Red.symbol();
    let mut output = String::new();
    for (shape, offsets) in shape_definitions() {
        output.push_str(&format!("{:?} ({} squares)\n", shape, offsets.len()));

        let width = offsets.iter().map(|&(x, _)| x).max().unwrap_or(0) as usize + 1;
        let height = offsets.iter().map(|&(_, y)| y).max().unwrap_or(0) as usize + 1;
        let mut rows = vec![vec!['.'; width]; height];
        for &(x, y) in offsets {
            rows[y as usize][x as usize] = symbol;
        }
        for row in rows {
            output.extend(row);
            output.push('\n');
        }
        output.push('\n');
    }
    output
}
