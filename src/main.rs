// Tally: Scientific Terminal Calculator with Expression Evaluation

mod eval;
mod history;
mod parser;
mod session;
mod ui;

use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use history::History;
use session::Session;
use ui::App;

const DEFAULT_HISTORY_FILE: &str = "tally_history.txt";

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [options] [history_file]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -e, --eval <expr>   Evaluate an infix expression and exit");
    eprintln!("  -h, --help          Show this help");
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {}                      # Interactive calculator",
        program_name
    );
    eprintln!(
        "  {} -e \"3 + 4 * 2\"      # One-shot evaluation",
        program_name
    );
    eprintln!(
        "  {} my_history.txt       # Use a custom history file",
        program_name
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("tally")
        .to_string();

    let mut history_path = String::from(DEFAULT_HISTORY_FILE);
    let mut eval_expr: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage(&program_name);
                return Ok(());
            }
            "-e" | "--eval" => {
                i += 1;
                match args.get(i) {
                    Some(expr) => eval_expr = Some(expr.clone()),
                    None => {
                        eprintln!("Error: {} requires an expression argument", args[i - 1]);
                        eprintln!();
                        print_usage(&program_name);
                        std::process::exit(1);
                    }
                }
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", arg);
                eprintln!();
                print_usage(&program_name);
                std::process::exit(1);
            }
            arg => {
                history_path = arg.to_string();
            }
        }
        i += 1;
    }

    // One-shot mode: evaluate, print, exit without touching the history
    if let Some(expr) = eval_expr {
        let postfix = match parser::to_postfix(&expr) {
            Ok(postfix) => postfix,
            Err(e) => {
                eprintln!("Parse error: {}", e);
                std::process::exit(1);
            }
        };

        match eval::evaluate(&postfix) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                eprintln!("Evaluation error: {}", e);
                std::process::exit(1);
            }
        }

        return Ok(());
    }

    // Load past calculations
    let history = match History::load(Path::new(&history_path)) {
        Ok(history) => history,
        Err(e) => {
            eprintln!("Warning: Failed to read '{}': {}", history_path, e);
            eprintln!("Starting with an empty history.");
            History::new()
        }
    };
    eprintln!(
        "Loaded {} past calculations from '{}'.",
        history.len(),
        history_path
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(Session::with_history(history));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Persist whatever the session accumulated
    if let Err(e) = app.session.history().save(Path::new(&history_path)) {
        eprintln!("Warning: Failed to save history to '{}': {}", history_path, e);
    }

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
