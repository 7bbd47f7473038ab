//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigFormat};
use crate::error::AppError;

pub(crate) const DEFAULT_SOURCE: &str = "output.json";
pub(crate) const DEFAULT_INTERVAL_SECS: f64 = 1.0;
pub(crate) const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum OutputFormat {
    /// Terminal table (default)
    #[default]
    Table,
    /// JSON array of rows
    Json,
    /// Comma-separated values with a header line
    Csv,
    /// Bare <table> markup for embedding in a page
    Html,
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

#[derive(Parser)]
#[command(name = "livetiming")]
#[command(about = "Live timing table for race-session snapshots", version)]
pub(crate) struct Cli {
    /// Session data: file path, http(s) URL, or "-" for stdin [default: output.json]
    pub(crate) source: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub(crate) format: OutputFormat,

    /// Output as JSON (shorthand for --format=json)
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Re-render on a fixed interval until interrupted
    #[arg(short, long)]
    pub(crate) watch: bool,

    /// Seconds between renders in watch mode
    #[arg(short, long, value_name = "SECS", default_value_t = DEFAULT_INTERVAL_SECS)]
    pub(crate) interval: f64,

    /// Stop watch mode after this many renders
    #[arg(long, value_name = "N")]
    pub(crate) max_cycles: Option<u64>,

    /// Timeout for HTTP sources, in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub(crate) timeout: f64,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Enable debug output (show processing details)
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // Enum and numeric values: only override if CLI is at default
        if let Some(format) = config.format
            && self.format == OutputFormat::Table
        {
            self.format = match format {
                ConfigFormat::Table => OutputFormat::Table,
                ConfigFormat::Json => OutputFormat::Json,
                ConfigFormat::Csv => OutputFormat::Csv,
                ConfigFormat::Html => OutputFormat::Html,
            };
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if let Some(interval) = config.interval
            && self.interval == DEFAULT_INTERVAL_SECS
        {
            self.interval = interval;
        }

        if let Some(timeout) = config.timeout
            && self.timeout == DEFAULT_TIMEOUT_SECS
        {
            self.timeout = timeout;
        }

        if self.source.is_none() {
            self.source = config.source.clone();
        }

        self
    }

    pub(crate) fn source_arg(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }

    pub(crate) fn output_format(&self) -> OutputFormat {
        if self.json {
            return OutputFormat::Json;
        }
        self.format
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

    pub(crate) fn interval(&self) -> Result<Duration, AppError> {
        positive_duration(self.interval).ok_or(AppError::InvalidInterval {
            input: self.interval,
        })
    }

    pub(crate) fn timeout(&self) -> Result<Duration, AppError> {
        positive_duration(self.timeout).ok_or(AppError::InvalidTimeout {
            input: self.timeout,
        })
    }
}

fn positive_duration(secs: f64) -> Option<Duration> {
    if secs.is_finite() && secs > 0.0 {
        Duration::try_from_secs_f64(secs).ok()
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("livetiming").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.source_arg(), "output.json");
        assert_eq!(cli.output_format(), OutputFormat::Table);
        assert!(!cli.watch);
        assert_eq!(cli.interval().unwrap(), Duration::from_secs(1));
        assert_eq!(cli.timeout().unwrap(), Duration::from_secs(5));
    }

    #[test]
    fn json_flag_overrides_format() {
        let cli = parse(&["session.json", "-j", "--format", "csv"]);
        assert_eq!(cli.source_arg(), "session.json");
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn no_color_wins() {
        let cli = parse(&["--color", "always", "--no-color"]);
        assert!(!cli.use_color());
        assert!(parse(&["--color", "always"]).use_color());
    }

    #[test]
    fn invalid_interval_rejected() {
        assert!(matches!(
            parse(&["--interval", "0"]).interval(),
            Err(AppError::InvalidInterval { .. })
        ));
        assert!(parse(&["--interval=-2"]).interval().is_err());
        assert_eq!(
            parse(&["--interval", "0.25"]).interval().unwrap(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn config_applies_when_cli_at_default() {
        let config: Config = toml::from_str(
            r#"
            source = "http://timing.local/output.json"
            format = "csv"
            color = "never"
            interval = 2.5
            timeout = 10.0
            debug = true
            "#,
        )
        .unwrap();
        let cli = parse(&[]).with_config(&config);
        assert_eq!(cli.source_arg(), "http://timing.local/output.json");
        assert_eq!(cli.output_format(), OutputFormat::Csv);
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.interval, 2.5);
        assert_eq!(cli.timeout, 10.0);
        assert!(cli.debug);
    }

    #[test]
    fn cli_takes_precedence_over_config() {
        let config: Config = toml::from_str(
            r#"
            source = "remote.json"
            format = "csv"
            interval = 2.5
            "#,
        )
        .unwrap();
        let cli =
            parse(&["local.json", "--format", "html", "--interval", "0.5"]).with_config(&config);
        assert_eq!(cli.source_arg(), "local.json");
        assert_eq!(cli.output_format(), OutputFormat::Html);
        assert_eq!(cli.interval, 0.5);
    }
}
