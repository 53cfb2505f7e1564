//! # Vellum - A Styled-Text Editing Session
//!
//! A thin command-line driver over an [`EditSession`]. The session core
//! lives in the workspace crates; this binary only wires input lines to
//! session operations.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start an empty session
//! cargo run
//!
//! # Preload a file and name the session after it
//! cargo run -- notes.txt
//!
//! # Save somewhere else
//! cargo run -- notes.txt --output /tmp/drafts
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vellum_core::{Config, EditSession, FileSink};

/// Vellum - a minimal styled-text editing session
#[derive(Parser, Debug)]
#[command(name = "vellum")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to preload into the session
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Directory to save into (overrides the configured save dir)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Vellum v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load();
    if let Some(dir) = args.output {
        config.files.save_dir = Some(dir);
    }

    let mut session = match &args.file {
        Some(path) => {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("untitled");
            let mut session = EditSession::with_name(name);
            if path.exists() {
                session.insert_str(&std::fs::read_to_string(path)?)?;
            }
            session
        }
        None => EditSession::new(),
    };

    run(&mut session, &config)
}

/// Reads commands from stdin until quit or end of input.
fn run(session: &mut EditSession, config: &Config) -> anyhow::Result<()> {
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        if !handle_command(session, config, line.trim()) {
            break;
        }
    }

    Ok(())
}

/// Applies one command line to the session. Returns false on quit.
fn handle_command(session: &mut EditSession, config: &Config, line: &str) -> bool {
    match line {
        "" => {}
        "del" => {
            if let Err(e) = session.delete() {
                println!("{e}");
            }
        }
        "left" => {
            if let Err(e) = session.retreat() {
                println!("{e}");
            }
        }
        "right" => session.advance(),
        "home" => session.move_to_line_start(),
        "end" => session.move_to_line_end(),
        "nl" => {
            if let Err(e) = session.insert('\n') {
                println!("{e}");
            }
        }
        "bold" | "italic" | "underline" => toggle_style(session, line),
        "show" => {
            if config.editor.show_markers {
                println!("{}", session.rendered_text());
            } else {
                println!("{}", session.raw_text());
            }
        }
        "raw" => println!("{}", session.raw_text()),
        "save" => {
            let dir = config
                .files
                .save_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("."));
            let mut sink =
                FileSink::new(dir).with_fallback_name(config.files.default_name.as_str());
            match session.save(&mut sink) {
                Ok(()) => println!("saved"),
                Err(e) => println!("save failed: {e}"),
            }
        }
        "help" => print_help(),
        "quit" => return false,
        _ => match line.strip_prefix("i ") {
            Some(text) => {
                if let Err(e) = session.insert_str(text) {
                    println!("{e}");
                }
            }
            None => println!("unknown command (try 'help')"),
        },
    }
    true
}

/// Toggles one style flag of the character at the cursor.
fn toggle_style(session: &mut EditSession, flag: &str) {
    let position = session.cursor_position();
    match session.buffer_mut().get_mut(position) {
        Ok(ch) => match flag {
            "bold" => ch.bold = !ch.bold,
            "italic" => ch.italic = !ch.italic,
            _ => ch.underline = !ch.underline,
        },
        Err(_) => println!("no character at cursor"),
    }
}

fn print_help() {
    println!("commands:");
    println!("  i <text>               insert text at the cursor");
    println!("  nl                     insert a line break");
    println!("  del                    delete the character at the cursor");
    println!("  left / right           move the cursor");
    println!("  home / end             jump to line start / end");
    println!("  bold|italic|underline  toggle a style at the cursor");
    println!("  show / raw             print the text (styled / plain)");
    println!("  save                   persist raw text");
    println!("  quit");
}
