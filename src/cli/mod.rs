//! Command-line parsing for the learning-curve figure generator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! generation and rendering code.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::RenderConfig;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "rlc", version, about = "Synthetic RL learning-curve figure generator")]
pub struct Cli {
    /// Minimum level of log events written to stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the four task panels and write the figure image.
    Render(RenderArgs),
    /// Open the figure in an interactive terminal viewer.
    Show(ShowArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Trace => Some(tracing::Level::TRACE),
        }
    }
}

/// Options shared by `render` and `show`.
#[derive(Debug, Parser, Clone)]
pub struct FigureArgs {
    /// Seed for the noise stream (random when omitted; the chosen seed is logged).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Image path; `.svg` writes SVG, anything else PNG.
    #[arg(short = 'o', long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels.
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,
}

/// Options for `render`.
#[derive(Debug, Parser, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub figure: FigureArgs,

    /// Also write the generated data as JSON (reloadable with `--from`).
    #[arg(long, value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Also write the generated data as a flat CSV table.
    #[arg(long, value_name = "CSV")]
    pub export_csv: Option<PathBuf>,

    /// Render a previously exported JSON figure instead of generating one.
    #[arg(long, value_name = "JSON", conflicts_with = "seed")]
    pub from: Option<PathBuf>,

    /// Do not print the summary table.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Options for `show`.
#[derive(Debug, Parser, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub figure: FigureArgs,
}

impl RenderArgs {
    pub fn to_config(&self) -> RenderConfig {
        RenderConfig {
            seed: self.figure.seed,
            output: self.figure.output.clone(),
            width: self.figure.width,
            height: self.figure.height,
            export_json: self.export_json.clone(),
            export_csv: self.export_csv.clone(),
            from: self.from.clone(),
            summary: !self.quiet,
        }
    }
}

impl ShowArgs {
    pub fn to_config(&self) -> RenderConfig {
        RenderConfig {
            seed: self.figure.seed,
            output: self.figure.output.clone(),
            width: self.figure.width,
            height: self.figure.height,
            summary: false,
            ..RenderConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_defaults() {
        let cli = Cli::parse_from(["rlc", "render"]);
        assert_eq!(cli.log_level, LogLevel::Warn);
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        let config = args.to_config();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn render_flags() {
        let cli = Cli::parse_from([
            "rlc",
            "render",
            "--seed",
            "7",
            "-o",
            "fig.svg",
            "--export-csv",
            "data.csv",
            "--quiet",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.log_level, LogLevel::Debug);
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        let config = args.to_config();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.output, PathBuf::from("fig.svg"));
        assert_eq!(config.export_csv, Some(PathBuf::from("data.csv")));
        assert!(!config.summary);
    }

    #[test]
    fn from_conflicts_with_seed() {
        let res = Cli::try_parse_from(["rlc", "render", "--from", "a.json", "--seed", "3"]);
        assert!(res.is_err());
    }

    #[test]
    fn zero_width_is_rejected() {
        let res = Cli::try_parse_from(["rlc", "render", "--width", "0"]);
        assert!(res.is_err());
    }

    #[test]
    fn log_level_off_disables_logging() {
        assert_eq!(LogLevel::Off.to_level(), None);
        assert_eq!(LogLevel::Info.to_level(), Some(tracing::Level::INFO));
    }
}
