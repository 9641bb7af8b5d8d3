//! word-connector CLI
//!
//! Terminal word-guessing puzzle. Game parameters are fixed; flags only
//! control logging and the summary printed when the session ends.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use word_connector::game::Game;
use word_connector::logging;
use word_connector::report::format_summary;
use word_connector::tui::run::run;
use word_connector::types::{OutputFormat, Puzzle};

#[derive(Parser)]
#[command(name = "word-connector")]
#[command(about = "Find every word hidden in a handful of letters")]
#[command(version)]
struct Cli {
    /// Summary format printed when the session ends
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormatArg,

    /// Don't print a summary when the session ends
    #[arg(long)]
    no_summary: bool,

    /// Append debug logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match play(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn play(cli: Cli) -> Result<(), String> {
    if let Some(path) = &cli.log_file {
        logging::init(Some(path))
            .map_err(|e| format!("Cannot open log file {}: {}", path.display(), e))?;
    }

    let game = Game::new(Puzzle::default()).map_err(|e| e.to_string())?;
    let game = run(game).map_err(|e| format!("Terminal error: {}", e))?;

    if !cli.no_summary {
        let summary = format_summary(&game, cli.format.into()).map_err(|e| e.to_string())?;
        print!("{}", summary);
    }

    Ok(())
}
