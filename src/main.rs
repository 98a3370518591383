use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tooldeck::config::{self, TomlStore};
use tooldeck::notify::{ActionBroadcaster, LoggingListener};
use tooldeck::tool::{Tool, ToolCapability};
use tooldeck::ActiveToolTracker;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TOOLDECK_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "tooldeck")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Inspect and reset drawing tool settings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tool table after applying the settings file
    Show {
        /// Settings file (defaults to ~/.config/tooldeck/tools.toml)
        #[arg(long, value_name = "PATH")]
        settings: Option<PathBuf>,
    },
    /// Overwrite the settings file with factory defaults
    Reset {
        /// Settings file (defaults to ~/.config/tooldeck/tools.toml)
        #[arg(long, value_name = "PATH")]
        settings: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Show { settings } => show(settings),
        Command::Reset { settings } => reset(settings),
    }
}

fn new_tracker() -> ActiveToolTracker {
    ActiveToolTracker::new(Box::new(LoggingListener), ActionBroadcaster::new())
}

fn show(settings: Option<PathBuf>) -> Result<()> {
    let path = config::resolve_settings_path(settings.as_deref())?;
    let store = config::load_store(&path)?;

    let mut tracker = new_tracker();
    tracker.load_settings(&store);

    println!("settings: {}", path.display());
    println!("current: {}", tracker.toolbar_kind());
    println!("eraser mode: {}", tracker.eraser_mode());
    println!();
    for tool in tracker.registry().iter() {
        println!("{}", describe(tool));
    }
    Ok(())
}

fn reset(settings: Option<PathBuf>) -> Result<()> {
    let path = config::resolve_settings_path(settings.as_deref())?;

    let mut store = TomlStore::new();
    new_tracker().save_settings(&mut store);
    config::save_store(&store, &path)?;

    println!("Wrote default tool settings to {}", path.display());
    Ok(())
}

fn describe(tool: &Tool) -> String {
    let color = if tool.has_capability(ToolCapability::Color) {
        tool.color().to_string()
    } else {
        "-".to_string()
    };
    let (size, thickness) = if tool.has_capability(ToolCapability::Size) {
        (
            tool.size().to_string(),
            format!("{:.2}", tool.current_thickness()),
        )
    } else {
        ("-".to_string(), "-".to_string())
    };

    format!(
        "{:<24} color={:<8} size={:<10} thickness={:<6} type={}",
        tool.name(),
        color,
        size,
        thickness,
        tool.drawing_sub_type()
    )
}
