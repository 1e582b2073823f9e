//! Interactive task board session.
//!
//! # Responsibility
//! - Wire config flags, logging, storage and the board together.
//! - Run the readline loop that turns input lines into board mutations.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::info;
use papertodo_core::db::open_db;
use papertodo_core::{
    core_version, default_log_level, init_logging, SqliteTodoStore, TaskBoard, TodoStore,
};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

mod intent;
mod render;

use intent::{parse_intent, Intent, IntentError};

#[derive(Parser)]
#[command(name = "papertodo")]
#[command(version, about = "A local-first daily task board", long_about = None)]
struct Cli {
    /// Database file holding the persisted board
    #[arg(long)]
    db: Option<PathBuf>,
    /// Directory for rolling log files
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Log level: trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let app_dir = default_app_dir();

    let log_dir = cli.log_dir.unwrap_or_else(|| app_dir.join("logs"));
    let log_level = cli
        .log_level
        .unwrap_or_else(|| default_log_level().to_string());
    if let Err(err) = init_logging(&log_level, &log_dir.to_string_lossy()) {
        // A broken log setup should not block a personal note list.
        eprintln!("{}", format!("logging disabled: {err}").yellow());
    }

    let db_path = cli.db.unwrap_or_else(|| app_dir.join("papertodo.db3"));
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory {}", parent.display()))?;
    }

    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open task database {}", db_path.display()))?;
    let mut board = TaskBoard::open(SqliteTodoStore::new(&conn));

    run_session(&mut board)
}

fn default_app_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("papertodo")
}

fn run_session<S: TodoStore>(board: &mut TaskBoard<S>) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("{}", format!("PaperTodo {}", core_version()).bold());
    println!(
        "{}",
        "Write something down, or type 'help' for commands.".dimmed()
    );

    let mut ordinals = render::print_board(board.tasks());

    loop {
        match rl.readline("+ ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match parse_intent(&line) {
                    Ok(Intent::Add(text)) => {
                        if board.add(&text).is_some() {
                            ordinals = render::print_board(board.tasks());
                        }
                    }
                    Ok(Intent::Toggle(ordinal)) => match ordinals.get(ordinal - 1) {
                        Some(&id) => {
                            board.toggle(id);
                            ordinals = render::print_board(board.tasks());
                        }
                        None => println!("{}", format!("no task numbered {ordinal}").yellow()),
                    },
                    Ok(Intent::Delete(ordinal)) => match ordinals.get(ordinal - 1) {
                        Some(&id) => {
                            board.delete(id);
                            ordinals = render::print_board(board.tasks());
                        }
                        None => println!("{}", format!("no task numbered {ordinal}").yellow()),
                    },
                    Ok(Intent::List) => {
                        ordinals = render::print_board(board.tasks());
                    }
                    Ok(Intent::Help) => render::print_help(),
                    Ok(Intent::Quit) => break,
                    Err(IntentError::EmptyLine) => {}
                    Err(err) => println!("{}", err.to_string().yellow()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "Type 'quit' to exit.".dimmed());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("input error: {err}").red());
                break;
            }
        }
    }

    info!("event=session_end module=cli status=ok count={}", board.tasks().len());
    Ok(())
}
