//! Boggle Solver CLI
//!
//! One-shot solving from the command line, or an interactive command loop.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use boggle_solver::{Board, BoggleSolver, SearchResults, SolverConfig};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

const HELP_TEXT: &str = include_str!("text/help.txt");

#[derive(Parser)]
#[command(name = "boggle-solver", version)]
#[command(about = "Find every dictionary word on a Boggle board")]
struct Cli {
    /// Word list to load first, one word per line
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Worker threads per search (default: available cores)
    #[arg(short, long, global = true)]
    workers: Option<usize>,

    /// Log dictionary and search details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board given as row-major letters
    Solve {
        board: String,
        width: usize,
        height: usize,
    },
    /// Solve a board of random letters
    Random {
        width: usize,
        height: usize,
        /// Seed for a reproducible board
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn print_results(board: &Board, results: &SearchResults, elapsed: Duration) {
    println!("time: {:.2?}", elapsed);
    print!("{}", board);
    println!("score: {} {}", results.score(), results.count());
    for word in results.words() {
        println!("{}", word);
    }
    println!();
}

fn solve_and_print(solver: &mut BoggleSolver, board: &Board) -> bool {
    let start = Instant::now();
    match solver.solve(board) {
        Ok(results) => {
            print_results(board, &results, start.elapsed());
            true
        }
        Err(err) => {
            eprintln!("Search failed: {}", err);
            false
        }
    }
}

fn random_board(width: usize, height: usize, seed: Option<u64>) -> boggle_solver::Result<Board> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Board::random(width, height, &mut rng)
}

/// Board for the interactive `find` command; `rnd` asks for random letters.
///
/// A board that fails validation drops the previous search's words.
fn interactive_board(
    solver: &mut BoggleSolver,
    letters: &str,
    width: usize,
    height: usize,
) -> boggle_solver::Result<Board> {
    let board = if letters == "rnd" {
        random_board(width, height, None)
    } else {
        Board::new(letters, width, height)
    };
    if board.is_err() {
        solver.free_words();
    }
    board
}

fn load(solver: &mut BoggleSolver, path: &Path) {
    let start = Instant::now();
    let added = solver.load_dictionary(path);
    println!(
        "Loaded {} words ({} total), time: {:.2?}",
        added,
        solver.dictionary().len(),
        start.elapsed()
    );
}

fn parse_dimensions(width: Option<&&str>, height: Option<&&str>) -> Option<(usize, usize)> {
    let width = width?.parse().ok()?;
    let height = height?.parse().ok()?;
    Some((width, height))
}

fn run_interactive(solver: &mut BoggleSolver) {
    println!("Boggle Solver. Type 'help' for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                println!("{}", HELP_TEXT);
            }
            "quit" | "exit" | "q" | "0" => {
                break;
            }
            "load" | "1" => match parts.get(1) {
                Some(path) => load(solver, Path::new(path)),
                None => println!("Usage: load <path>"),
            },
            "free-dict" | "2" => {
                solver.free_dictionary();
                println!("Dictionary freed.");
            }
            "find" | "3" => {
                let Some(letters) = parts.get(1) else {
                    println!("Usage: find <board|rnd> <width> <height>");
                    continue;
                };
                let Some((width, height)) = parse_dimensions(parts.get(2), parts.get(3)) else {
                    println!("Usage: find <board|rnd> <width> <height>");
                    continue;
                };

                match interactive_board(solver, letters, width, height) {
                    Ok(board) => {
                        solve_and_print(solver, &board);
                    }
                    Err(err) => println!("Wrong board: {}", err),
                }
            }
            "free-words" | "4" => {
                solver.free_words();
                println!("Words freed.");
            }
            "workers" => match parts.get(1).and_then(|s| s.parse().ok()) {
                Some(n) => {
                    solver.set_workers(n);
                    println!("Workers: {}", solver.config().workers);
                }
                None => println!("Workers: {}", solver.config().workers),
            },
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = SolverConfig::default();
    if let Some(workers) = cli.workers {
        config.workers = workers;
    }
    let mut solver = BoggleSolver::new(config);

    if let Some(path) = &cli.dictionary {
        load(&mut solver, path);
    }

    let board = match cli.command {
        None => {
            run_interactive(&mut solver);
            return ExitCode::SUCCESS;
        }
        Some(Command::Solve {
            board,
            width,
            height,
        }) => Board::new(&board, width, height),
        Some(Command::Random {
            width,
            height,
            seed,
        }) => random_board(width, height, seed),
    };

    let board = match board {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Wrong board: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if solve_and_print(&mut solver, &board) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_board_drops_previous_words() {
        let mut solver = BoggleSolver::from_words(["cat", "cats"]);
        let board = interactive_board(&mut solver, "cats", 2, 2).unwrap();
        solver.solve(&board).unwrap();
        assert_eq!(solver.found_words().len(), 2);

        assert!(interactive_board(&mut solver, "cat", 2, 2).is_err());
        assert!(solver.found_words().is_empty());

        solver.solve(&board).unwrap();
        assert!(interactive_board(&mut solver, "rnd", 0, 4).is_err());
        assert!(solver.found_words().is_empty());
    }

    #[test]
    fn test_random_interactive_board() {
        let mut solver = BoggleSolver::default();
        let board = interactive_board(&mut solver, "rnd", 3, 2).unwrap();
        assert_eq!(board.len(), 6);
    }
}
