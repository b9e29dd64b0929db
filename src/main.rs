use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use todo_tui::LogLevel;
use todo_tui::core::config::{self, Overrides, ResolvedConfig};
use todo_tui::core::state::Session;
use todo_tui::tui::{self, CaptureSink, ScriptedEvents};

#[derive(Parser)]
#[command(name = "todo-tui", version, about = "A small modal todo list for the terminal")]
struct Args {
    /// Read settings from this file instead of ~/.todo-tui/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with this item in the list (repeatable)
    #[arg(long = "item", value_name = "TEXT")]
    items: Vec<String>,

    /// Start with a small grocery list
    #[arg(long)]
    demo: bool,

    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Replay key labels (one per line, `-` for stdin) and print the final frame
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,
}

fn init_logging(config: &ResolvedConfig) {
    let Some(path) = &config.log_file else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(config.log_level.filter(), log_config, log_file);
    }
}

fn read_script(path: &Path) -> io::Result<ScriptedEvents> {
    if path == Path::new("-") {
        ScriptedEvents::from_reader(io::stdin().lock())
    } else {
        ScriptedEvents::from_reader(BufReader::new(File::open(path)?))
    }
}

fn run(args: Args, session: Session) -> io::Result<()> {
    match &args.script {
        Some(path) => {
            let mut source = read_script(path)?;
            let mut sink = CaptureSink::new();
            tui::drive(session, &mut source, &mut sink)?;
            if let Some(frame) = sink.last() {
                println!("{frame}");
            }
        }
        None => {
            tui::run(session)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Alas, there's been an error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let overrides = Overrides {
        items: args.items.clone(),
        demo: args.demo,
        log_level: args.log_level,
    };
    let resolved = config::resolve(&file_config, &overrides);
    init_logging(&resolved);

    log::info!("todo-tui starting with {} items", resolved.items.len());

    let session = Session::from_config(&resolved);
    match run(args, session) {
        Ok(()) => {
            log::info!("todo-tui exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Fatal: {e}");
            eprintln!("Alas, there's been an error: {e}");
            ExitCode::FAILURE
        }
    }
}
