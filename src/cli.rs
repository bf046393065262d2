//! Command-line interface definitions.
//!
//! All options can be provided as flags; the listener port and source
//! URL also fall back to environment variables so the binary drops into
//! container setups without a wrapper script.

use clap::Parser;

use crate::extract::DEFAULT_STORY_COUNT;

/// Command-line arguments for the latest-stories server.
///
/// # Examples
///
/// ```sh
/// # Defaults: port 3000, scraping https://time.com
/// time_latest_stories
///
/// # Custom port and a larger story list
/// time_latest_stories --port 8080 -n 10
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Port for the HTTP listener
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Homepage URL to fetch and scan for stories
    #[arg(long, env = "TIME_URL", default_value = "https://time.com")]
    pub source_url: String,

    /// Number of stories to return per request
    #[arg(short = 'n', long, default_value_t = DEFAULT_STORY_COUNT)]
    pub story_count: usize,

    /// Maximum redirect hops to follow when fetching the homepage
    #[arg(long, default_value_t = 10)]
    pub max_redirects: usize,

    /// Fetch timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub fetch_timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        // Port and source URL have env fallbacks (PORT, TIME_URL), so
        // their defaults depend on the ambient environment; they are
        // exercised with explicit values in test_cli_overrides.
        let cli = Cli::parse_from(["time_latest_stories"]);
        assert_eq!(cli.story_count, 6);
        assert_eq!(cli.max_redirects, 10);
        assert_eq!(cli.fetch_timeout_secs, 30);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "time_latest_stories",
            "--port",
            "8080",
            "-n",
            "10",
            "--source-url",
            "https://staging.time.com",
        ]);
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.story_count, 10);
        assert_eq!(cli.source_url, "https://staging.time.com");
    }
}
