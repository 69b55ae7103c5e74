use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;

/// Catalog API used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://sportscar-springboot-api.onrender.com/cars";

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Browse the sports car catalog.
#[derive(Debug, Parser)]
#[command(name = "sports-car-hub", version, about)]
pub struct Cli {
    /// Catalog endpoint returning a JSON array of cars.
    #[arg(long, env = "SPORTSCAR_API_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Give up on the catalog request after this many seconds.
    /// Unset waits as long as the request takes.
    #[arg(long, env = "SPORTSCAR_API_TIMEOUT")]
    pub timeout_secs: Option<u64>,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Settings the data loader needs for its one request.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub endpoint: String,
    /// `None` disables the client timeout entirely.
    pub timeout: Option<Duration>,
}

impl TryFrom<Cli> for CatalogConfig {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let url = reqwest::Url::parse(&cli.endpoint)
            .with_context(|| format!("invalid endpoint URL: {}", cli.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("endpoint must be http or https, got {}", url.scheme());
        }
        if cli.timeout_secs == Some(0) {
            bail!("timeout must be at least one second");
        }

        Ok(Self {
            endpoint: cli.endpoint,
            timeout: cli.timeout_secs.map(Duration::from_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CatalogConfig> {
        let cli = Cli::try_parse_from(std::iter::once("sports-car-hub").chain(args.iter().copied()))?;
        CatalogConfig::try_from(cli)
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let config = parse(&["--endpoint", "http://localhost:8080/cars", "--timeout-secs", "5"]).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/cars");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn timeout_is_unset_unless_given() {
        let cli = Cli::try_parse_from(["sports-car-hub", "--endpoint", DEFAULT_ENDPOINT]).unwrap();
        if std::env::var_os("SPORTSCAR_API_TIMEOUT").is_none() {
            assert_eq!(cli.timeout_secs, None);
            assert_eq!(CatalogConfig::try_from(cli).unwrap().timeout, None);
        }
    }

    #[test]
    fn rejects_bad_endpoints() {
        assert!(parse(&["--endpoint", "not a url"]).is_err());
        assert!(parse(&["--endpoint", "ftp://example.com/cars"]).is_err());
    }

    #[test]
    fn endpoint_defaults_to_env_or_public_api() {
        let cli = Cli::try_parse_from(["sports-car-hub"]).unwrap();
        let expected =
            std::env::var("SPORTSCAR_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        assert_eq!(cli.endpoint, expected);
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(parse(&["--endpoint", DEFAULT_ENDPOINT, "--timeout-secs", "0"]).is_err());
    }
}
