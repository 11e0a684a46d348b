//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigSortOrder};
use crate::consts::STORE_ENV;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortOrder {
    /// Oldest first (default)
    #[default]
    Asc,
    /// Newest first
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    /// Format implied by a file extension (`.csv`, `.json`)
    pub(crate) fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "timesheet")]
#[command(about = "Record start/stop times and summarize hours worked", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Store file (default: ~/.timesheet/timesheets.db)
    #[arg(long, global = true, env = STORE_ENV, value_name = "PATH")]
    pub(crate) store: Option<PathBuf>,

    /// Timesheet to operate on
    #[arg(short, long, global = true, value_name = "NAME")]
    pub(crate) name: Option<String>,

    /// Timezone for "today" and "now" (e.g., "Europe/Berlin", "UTC", "local")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Config `default_timesheet`; only consulted when resolving a target
    #[arg(skip)]
    pub(crate) default_timesheet: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // Option values: only apply if CLI (or the environment) didn't set them
        if self.store.is_none() {
            self.store = config.store.clone();
        }
        self.default_timesheet = config.default_timesheet.clone();
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        if let Commands::Summarize(args) = &mut self.command {
            if args.period.is_none() {
                args.period = config.period;
            }
            if args.order.is_none() {
                args.order = config.order.map(|order| match order {
                    ConfigSortOrder::Asc => SortOrder::Asc,
                    ConfigSortOrder::Desc => SortOrder::Desc,
                });
            }
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
