//! Command-line interface definition.
//!
//! Every path and the API key can also come from the environment, which
//! is how the scheduled sync job configures the tool.

use std::path::PathBuf;

use clap::Parser;

/// calsync - materialize Google Calendar feeds into the site event catalog
#[derive(Debug, Parser)]
#[command(name = "calsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the calendar sources configuration file
    #[arg(
        long,
        short = 'c',
        env = "CALENDAR_SOURCES",
        default_value = "calendar-sources.json"
    )]
    pub sources: PathBuf,

    /// Path to the base event catalog to merge into
    #[arg(long, env = "EVENTS_JSON", default_value = "events.json")]
    pub base: PathBuf,

    /// Path the merged catalog is written to
    #[arg(long, env = "OUTPUT_JSON", default_value = "events-materialized.json")]
    pub output: PathBuf,

    /// Google Calendar API key for public calendar access
    #[arg(long, env = "GOOGLE_CALENDAR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Months before the current month to include in the fetch window
    #[arg(long, default_value = "12")]
    pub past_months: u32,

    /// Months after the current month to include in the fetch window
    #[arg(long, default_value = "12")]
    pub future_months: u32,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_conventional_layout() {
        let cli = Cli::parse_from(["calsync"]);
        assert_eq!(cli.sources, PathBuf::from("calendar-sources.json"));
        assert_eq!(cli.base, PathBuf::from("events.json"));
        assert_eq!(cli.output, PathBuf::from("events-materialized.json"));
        assert!(cli.api_key.is_none());
        assert_eq!(cli.past_months, 12);
        assert_eq!(cli.future_months, 12);
        assert!(!cli.debug);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "calsync",
            "--sources",
            "conf/sources.json",
            "--output",
            "public/events.json",
            "--api-key",
            "secret",
            "--past-months",
            "3",
            "-v",
        ]);
        assert_eq!(cli.sources, PathBuf::from("conf/sources.json"));
        assert_eq!(cli.output, PathBuf::from("public/events.json"));
        assert_eq!(cli.api_key.as_deref(), Some("secret"));
        assert_eq!(cli.past_months, 3);
        assert!(cli.debug);
    }
}
