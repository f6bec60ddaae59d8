//! med - Entry Point

use clap::Parser;
use med::model::AppError;
use std::path::PathBuf;
use tracing::info;

/// med - terminal text viewer with soft wrapping and incremental search
#[derive(Parser, Debug)]
#[command(name = "med")]
#[command(version)]
#[command(about = "Terminal text viewer with soft line wrapping and incremental search")]
pub struct Args {
    /// Path to the file to view (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Distance between tab stops (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub tab_width: Option<u16>,

    /// Start with the continuation gutter hidden
    #[arg(long)]
    pub no_gutter: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = med::config::load_config_with_precedence(args.config.clone())?;
        let merged = med::config::merge_config(config_file);
        let with_env = med::config::apply_env_overrides(merged)?;

        // Flags only override when given explicitly
        let tab_width_override = args.tab_width.map(usize::from);
        let gutter_override = if args.no_gutter { Some(false) } else { None };

        med::config::apply_cli_overrides(with_env, tab_width_override, gutter_override)
    };
    let options = config.session_options()?;

    med::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let buffer = med::source::load(args.file.clone())?;

    med::view::run_with_source(buffer, options)?;

    Ok(())
}
