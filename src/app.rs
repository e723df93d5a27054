//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and installs logging
//! - generates (or reloads) the figure
//! - renders the image and writes optional exports
//! - prints the summary or launches the terminal viewer

use clap::Parser;
use tracing::info;

use crate::cli::{Command, RenderArgs, ShowArgs};
use crate::domain::{Figure, RenderConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `rlc` binary.
pub fn run() -> Result<(), AppError> {
    // `rlc` alone (or followed by flags) behaves like `rlc render ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    crate::logging::setup_logging(cli.log_level.to_level())?;

    match cli.command {
        Command::Render(args) => handle_render(args),
        Command::Show(args) => handle_show(args),
    }
}

fn handle_render(args: RenderArgs) -> Result<(), AppError> {
    let config = args.to_config();
    let figure = render(&config)?;

    if config.summary {
        println!("{}", crate::report::format_figure_summary(&figure));
        println!("Figure written to {}", config.output.display());
    }
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    crate::tui::run(args.to_config())
}

/// Build (or reload) the figure, write the image and any exports.
pub fn render(config: &RenderConfig) -> Result<Figure, AppError> {
    let figure = match &config.from {
        Some(path) => {
            info!(path = %path.display(), "rendering saved figure");
            crate::io::read_figure_json(path)?
        }
        None => pipeline::build_figure(config.seed)?,
    };

    crate::plot::render_figure(&figure, &config.output, config.width, config.height)?;

    if let Some(path) = &config.export_json {
        crate::io::write_figure_json(path, &figure)?;
    }
    if let Some(path) = &config.export_csv {
        crate::io::write_figure_csv(path, &figure)?;
    }

    Ok(figure)
}

/// Rewrite argv so `rlc` defaults to `rlc render`.
///
/// Rules:
/// - `rlc`                      -> `rlc render`
/// - `rlc --seed 3 ...`         -> `rlc render --seed 3 ...`
/// - `rlc --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("render".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "render" | "show");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "render flags".
    if arg1.starts_with('-') {
        argv.insert(1, "render".to_string());
        return argv;
    }

    argv
}
