use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::feed::{LeftoverPolicy, SortMode};

/// Command-line configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "marketfeed")]
#[command(about = "Browse marketplace listings in a live-refreshing terminal feed")]
pub struct Config {
    /// Fixture directory, or an http(s):// base URL serving the same files.
    #[arg(long, default_value = "data")]
    pub data: String,

    /// Seconds between catalog refreshes.
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_secs: u64,

    /// Initial sort: popular, price_asc, price_desc or newest.
    #[arg(long, default_value = "popular")]
    pub sort: String,

    /// Seed for the shuffles, for a reproducible feed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Append sponsored listings that found no slot instead of dropping them.
    #[arg(long)]
    pub append_leftovers: bool,

    #[arg(long, default_value = "marketfeed.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value = ".marketfeed-theme.toml")]
    pub theme_file: PathBuf,

    #[arg(long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl Config {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    pub fn sort_mode(&self) -> SortMode {
        SortMode::parse(&self.sort)
    }

    pub fn leftover_policy(&self) -> LeftoverPolicy {
        if self.append_leftovers {
            LeftoverPolicy::Append
        } else {
            LeftoverPolicy::Drop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse_from(["marketfeed"]);
        assert_eq!(config.data, "data");
        assert_eq!(config.refresh_interval(), Duration::from_secs(300));
        assert_eq!(config.sort_mode(), SortMode::Popular);
        assert_eq!(config.leftover_policy(), LeftoverPolicy::Drop);
        assert!(config.seed.is_none());
    }

    #[test]
    fn unknown_sort_is_not_an_error() {
        let config = Config::parse_from(["marketfeed", "--sort", "hot"]);
        assert_eq!(config.sort_mode(), SortMode::Popular);
    }

    #[test]
    fn flags() {
        let config = Config::parse_from([
            "marketfeed",
            "--data",
            "https://fixtures.example/feed",
            "--sort",
            "price_desc",
            "--seed",
            "7",
            "--append-leftovers",
            "--refresh-secs",
            "30",
        ]);
        assert_eq!(config.sort_mode(), SortMode::PriceDescending);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.leftover_policy(), LeftoverPolicy::Append);
        assert_eq!(config.refresh_interval(), Duration::from_secs(30));
    }

    #[test]
    fn zero_refresh_is_rejected() {
        assert!(Config::try_parse_from(["marketfeed", "--refresh-secs", "0"]).is_err());
    }
}
