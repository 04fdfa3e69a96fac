//! Ternary Puzzle - CLI Entry Point
//!
//! Commands:
//! - `ternary-puzzle list` - List catalog puzzles
//! - `ternary-puzzle show <name>` - Show a puzzle with its slot positions
//! - `ternary-puzzle check <name> --values 2,?,1` - Fill slots and check
//! - `ternary-puzzle play [name]` - Interactive terminal player
//! - `ternary-puzzle test` - Verify every catalog solution

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use ternpuzzle::Config;

#[derive(Parser)]
#[command(name = "ternary-puzzle")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "Ternary logic expression puzzles")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<String>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog puzzles
    List,
    /// Show a puzzle with its slot positions
    Show {
        /// Catalog puzzle name
        name: String,
        /// Print a JSON snapshot of the template instead
        #[arg(long)]
        json: bool,
    },
    /// Fill open slots and check the result
    Check {
        /// Catalog puzzle name
        name: String,
        /// Values by value-slot position, `?` skips (e.g. `?,2`)
        #[arg(long, default_value = "")]
        values: String,
        /// Operators by operator-slot position, `?` skips (e.g. `AND,?`)
        #[arg(long, default_value = "")]
        ops: String,
    },
    /// Play a puzzle in the terminal
    Play {
        /// Catalog puzzle name (defaults to the configured puzzle)
        name: Option<String>,
    },
    /// Verify every catalog puzzle against its intended solution
    Test,
}

fn main() {
    let cli = Cli::parse();

    let playing = matches!(cli.command, Some(Commands::Play { .. }));
    if !playing {
        init_logging(cli.verbose);
    }

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    match cli.command {
        Some(Commands::List) => list_puzzles(),
        Some(Commands::Show { name, json }) => show_puzzle(&name, json),
        Some(Commands::Check { name, values, ops }) => check_puzzle(&config, &name, &values, &ops),
        Some(Commands::Play { name }) => {
            let name = name.unwrap_or_else(|| config.default_puzzle.clone());
            play_puzzle(&config, &name);
        }
        Some(Commands::Test) => run_self_test(),
        None => {
            println!("Ternary Puzzle v0.1.0");
            println!("Expression puzzles over three-valued logic");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_truth_tables();
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_or_exit(name: &str) -> ternpuzzle::AstTemplate {
    match ternpuzzle::catalog::find(name).and_then(|p| p.template()) {
        Ok(template) => template,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   Run `ternary-puzzle list` for available puzzles");
            std::process::exit(1);
        }
    }
}

fn list_puzzles() {
    println!("━━━ Puzzles ━━━");
    for puzzle in ternpuzzle::catalog::all() {
        println!("  {:<24} {}", puzzle.name, puzzle.description);
    }
}

fn show_puzzle(name: &str, json: bool) {
    use ternpuzzle::ast::render_with_slots;

    let template = load_or_exit(name);

    if json {
        match serde_json::to_string_pretty(&template) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("❌ Failed to serialize template: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{}", render_with_slots(&template));
    println!();
    for (i, leaf) in template.value_slots().iter().enumerate() {
        println!("  v{}: {:?}", i, leaf.state());
    }
    for (i, node) in template.operator_slots().iter().enumerate() {
        println!("  o{}: {:?}", i, node.state());
    }
}

fn check_puzzle(config: &Config, name: &str, values: &str, ops: &str) {
    use ternpuzzle::ast::render;
    use ternpuzzle::play::{InputOutcome, PuzzleLoader, SlotEvent, SolutionChecker, Verdict};
    use ternpuzzle::{Operator, Trit};

    let mut loader = PuzzleLoader::new();
    if let Err(e) = loader.load_named(name) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut events = Vec::new();
    for (slot, item) in split_list(values) {
        match item.parse::<Trit>() {
            Ok(value) => events.push(SlotEvent::SetValue { slot, value }),
            Err(e) => {
                eprintln!("❌ Value {}: {}", slot, e);
                std::process::exit(1);
            }
        }
    }
    for (slot, item) in split_list(ops) {
        match item.parse::<Operator>() {
            Ok(op) => events.push(SlotEvent::SetOperator { slot, op }),
            Err(e) => {
                eprintln!("❌ Operator {}: {}", slot, e);
                std::process::exit(1);
            }
        }
    }

    for event in events {
        match loader.apply(event) {
            Ok(InputOutcome::Applied(_)) => {}
            Ok(InputOutcome::Ignored(id)) => println!("⚠️  {} is locked, input ignored", id),
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }

    let Some(template) = loader.template() else {
        eprintln!("❌ No puzzle loaded");
        std::process::exit(1);
    };
    println!("{}", render(template));

    let mut checker = SolutionChecker::new(config.checker);
    match checker.submit(template) {
        Ok(Verdict::Correct) => println!("✓ Correct!"),
        Ok(Verdict::Incorrect { result, .. }) => {
            println!("✗ Incorrect: left side is {}, expected {}", result, template.answer());
            std::process::exit(1);
        }
        Ok(Verdict::Incomplete(e)) => {
            println!("… Incomplete: {}", e);
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

/// Split `a,?,b` into positioned entries, skipping `?`, `-` and blanks.
fn split_list(list: &str) -> Vec<(usize, &str)> {
    if list.trim().is_empty() {
        return Vec::new();
    }
    list.split(',')
        .map(str::trim)
        .enumerate()
        .filter(|(_, item)| !matches!(*item, "" | "?" | "-"))
        .collect()
}

#[cfg(feature = "tui")]
fn play_puzzle(config: &Config, name: &str) {
    if let Err(e) = ternpuzzle::run_player(config, name) {
        eprintln!("❌ Player error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "tui"))]
fn play_puzzle(_config: &Config, _name: &str) {
    eprintln!("❌ Built without the `tui` feature");
    std::process::exit(1);
}

fn demo_truth_tables() {
    use ternpuzzle::{Operator, Trit};

    println!("━━━ Truth Tables (0 = False, 1 = Neutral, 2 = True) ━━━");
    println!();

    print!("  NOT  ");
    for t in Trit::ALL {
        print!(" {}→{}", t, t.not());
    }
    println!();

    for op in &Operator::ALL[1..] {
        println!();
        println!("  {:<5} | 0 1 2", op.keyword());
        println!("  ------+------");
        for a in Trit::ALL {
            print!("      {} |", a);
            for b in Trit::ALL {
                match op.apply(a, Some(b)) {
                    Some(r) => print!(" {}", r),
                    None => print!(" ?"),
                }
            }
            println!();
        }
    }
}

fn run_self_test() {
    println!("━━━ Ternary Puzzle Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    for puzzle in ternpuzzle::catalog::all() {
        print!("{:<24} ", puzzle.name);
        match puzzle.solved_template().map(|t| t.check()) {
            Ok(Ok(true)) => {
                println!("✓");
                passed += 1;
            }
            Ok(Ok(false)) => {
                println!("✗ (intended solution does not reach the answer)");
                failed += 1;
            }
            Ok(Err(e)) => {
                println!("✗ ({})", e);
                failed += 1;
            }
            Err(e) => {
                println!("✗ ({})", e);
                failed += 1;
            }
        }
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_positions() {
        assert_eq!(split_list("?,2"), vec![(1, "2")]);
        assert_eq!(split_list(" 0 , - ,T"), vec![(0, "0"), (2, "T")]);
        assert!(split_list("").is_empty());
    }
}
