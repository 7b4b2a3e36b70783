//! devcon viewer entry point.

use clap::Parser;
use devcon::config;
use devcon::console::Console;
use devcon::model::AppError;
use devcon::source;
use devcon::state::AppState;
use devcon::view;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Scrollback console viewer: tails a file or stdin into a bounded
/// console with scrolling, selection, search and commands.
#[derive(Parser, Debug)]
#[command(name = "devcon")]
#[command(version)]
#[command(about = "Bounded scrollback console viewer for files and piped input")]
pub struct Args {
    /// Path to the file to view (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Follow the file for new content (like tail -f)
    #[arg(short, long)]
    pub follow: bool,

    /// Maximum retained console lines before the oldest are dropped
    #[arg(long)]
    pub max_lines: Option<usize>,

    /// Start with this search query armed
    #[arg(short, long)]
    pub search: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Resolve configuration: Defaults -> Config File -> Env Vars -> CLI.
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        let follow_override = if args.follow { Some(true) } else { None };
        config::apply_cli_overrides(with_env, args.max_lines, follow_override)
    };

    run(args, config)?;
    Ok(())
}

fn run(args: Args, config: config::ResolvedConfig) -> Result<(), AppError> {
    let console = Arc::new(Console::new(config.max_lines));

    devcon::logging::init(&config.log_file_path, Some(Arc::clone(&console)))?;
    info!(
        max_lines = config.max_lines,
        follow = config.follow,
        "configuration resolved"
    );

    // The input source must be valid before the terminal is touched, so
    // errors land on stderr rather than inside the alternate screen.
    let input = source::detect_input_source(args.file, config.follow)?;
    let feed = source::spawn_feed(input, Arc::clone(&console));

    let mut state = AppState::new(Arc::clone(&console), &config);
    if let Some(query) = args.search {
        state.tick();
        state.last_search = query.clone();
        state.view.search(&query);
    }

    let result = view::run(state);

    feed.shutdown();
    result
}
