//! CLI argument definitions
//!
//! Command-line flags, config file merging and validation into a [`Query`].

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::error::AppError;
use crate::utils::{Timezone, parse_date};

use super::query::Query;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// One cookie per line (default)
    #[default]
    Plain,
    /// JSON document with cookies and counts
    Json,
    /// Table of cookies with their counts
    Table,
}

#[derive(Debug, Parser)]
#[command(name = "most-active-cookie")]
#[command(
    about = "Find the most active cookie(s) for a day in a cookie log",
    version
)]
pub(crate) struct Cli {
    /// Path to the cookie log file ("-" reads stdin)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub(crate) file: String,

    /// Date to query (YYYY-MM-DD or YYYYMMDD)
    #[arg(short = 'd', long = "date", value_name = "DATE")]
    pub(crate) date: String,

    /// Timezone used to parse timestamps and match the date (e.g. "UTC", "Europe/Berlin", "local")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub(crate) format: Option<OutputFormat>,

    /// Output as JSON (shorthand for --format=json)
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Print skipped lines and scan statistics to stderr
    #[arg(long)]
    pub(crate) debug: bool,

    /// Suppress notices on stderr
    #[arg(short, long)]
    pub(crate) quiet: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.quiet && config.quiet {
            self.quiet = true;
        }
        if self.format.is_none() {
            self.format = config.format.map(OutputFormat::from);
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        self
    }

    pub(crate) fn output_format(&self) -> OutputFormat {
        if self.json {
            return OutputFormat::Json;
        }
        self.format.unwrap_or_default()
    }

    /// Validate arguments into a query
    pub(crate) fn to_query(&self) -> Result<Query, AppError> {
        let file = self.file.trim();
        if file.is_empty() {
            return Err(AppError::EmptyArgument { name: "file" });
        }
        if self.date.trim().is_empty() {
            return Err(AppError::EmptyArgument { name: "date" });
        }

        Ok(Query {
            path: PathBuf::from(file),
            date: parse_date(&self.date)?,
            timezone: Timezone::parse(self.timezone.as_deref())?,
            format: self.output_format(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigOutputFormat;
    use chrono::NaiveDate;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        let mut argv = vec!["most-active-cookie"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv)
    }

    fn cli_from(args: &[&str]) -> Cli {
        parse(args).unwrap()
    }

    #[test]
    fn valid_arguments() {
        let cli = cli_from(&["-f", "cookie_log.csv", "-d", "2018-12-09"]);
        let query = cli.to_query().unwrap();
        assert_eq!(query.path, PathBuf::from("cookie_log.csv"));
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2018, 12, 9).unwrap());
        assert_eq!(query.timezone, Timezone::Named(chrono_tz::UTC));
        assert_eq!(query.format, OutputFormat::Plain);
    }

    #[test]
    fn long_flags_are_accepted() {
        let cli = cli_from(&[
            "--file",
            "log.csv",
            "--date",
            "20181209",
            "--timezone",
            "Asia/Tokyo",
            "--format",
            "table",
        ]);
        let query = cli.to_query().unwrap();
        assert_eq!(query.timezone, Timezone::Named(chrono_tz::Asia::Tokyo));
        assert_eq!(query.format, OutputFormat::Table);
    }

    #[test]
    fn missing_file_argument() {
        assert!(parse(&["-d", "2018-12-09"]).is_err());
    }

    #[test]
    fn missing_date_argument() {
        assert!(parse(&["-f", "cookie_log.csv"]).is_err());
    }

    #[test]
    fn no_arguments() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn empty_file_argument() {
        let cli = cli_from(&["-f", "", "-d", "2018-12-09"]);
        let err = cli.to_query().unwrap_err();
        assert!(matches!(err, AppError::EmptyArgument { name: "file" }));
    }

    #[test]
    fn empty_date_argument() {
        let cli = cli_from(&["-f", "cookie_log.csv", "-d", " "]);
        let err = cli.to_query().unwrap_err();
        assert!(matches!(err, AppError::EmptyArgument { name: "date" }));
    }

    #[test]
    fn invalid_date_format() {
        let cli = cli_from(&["-f", "cookie_log.csv", "-d", "09-12-2018"]);
        let err = cli.to_query().unwrap_err();
        assert!(matches!(err, AppError::InvalidDate { .. }));
    }

    #[test]
    fn invalid_timezone() {
        let cli = cli_from(&["-f", "a.csv", "-d", "2018-12-09", "--timezone", "Nowhere"]);
        let err = cli.to_query().unwrap_err();
        assert!(matches!(err, AppError::InvalidTimezone { .. }));
    }

    #[test]
    fn json_flag_overrides_format() {
        let cli = cli_from(&["-f", "a.csv", "-d", "2018-12-09", "--format", "table", "-j"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn config_fills_unset_values() {
        let config = Config {
            timezone: Some("Europe/Berlin".to_string()),
            format: Some(ConfigOutputFormat::Table),
            debug: true,
            quiet: false,
        };
        let cli = cli_from(&["-f", "a.csv", "-d", "2018-12-09"]);
        let cli = cli.with_config(&config);
        assert!(cli.debug);
        assert_eq!(cli.timezone.as_deref(), Some("Europe/Berlin"));
        assert_eq!(cli.output_format(), OutputFormat::Table);
    }

    #[test]
    fn cli_values_beat_config() {
        let config = Config {
            timezone: Some("Europe/Berlin".to_string()),
            format: Some(ConfigOutputFormat::Table),
            debug: false,
            quiet: true,
        };
        let cli = cli_from(&[
            "-f",
            "a.csv",
            "-d",
            "2018-12-09",
            "--timezone",
            "UTC",
            "--format",
            "plain",
        ]);
        let cli = cli.with_config(&config);
        assert!(cli.quiet);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.output_format(), OutputFormat::Plain);
    }
}
