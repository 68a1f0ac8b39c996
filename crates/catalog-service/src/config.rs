//! Runtime configuration for the `catalog-service` binary.

use clap::builder::RangedU64ValueParser;
use clap::Parser;

/// In-memory product and quote catalog served over HTTP.
///
/// Every flag can also be set through the environment variable shown in `--help`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[clap(name = "catalog-service", version)]
pub struct ServiceConfig {
    /// Interface to listen on
    #[clap(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[clap(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Capacity of each actor's request channel
    #[clap(
        long,
        env = "CATALOG_CHANNEL_CAPACITY",
        default_value_t = 32,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub channel_capacity: usize,

    /// Start the quote store with the built-in quotes
    #[clap(
        long,
        env = "CATALOG_SEED_QUOTES",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub seed_quotes: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            channel_capacity: 32,
            seed_quotes: true,
        }
    }
}

impl ServiceConfig {
    /// `host:port`, ready for `TcpListener::bind`.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = ServiceConfig::try_parse_from([
            "catalog-service",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--channel-capacity",
            "4",
            "--seed-quotes",
            "false",
        ])
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.channel_capacity, 4);
        assert!(!config.seed_quotes);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_zero_channel_capacity_is_rejected() {
        let result =
            ServiceConfig::try_parse_from(["catalog-service", "--channel-capacity", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_matches_documented_values() {
        let config = ServiceConfig::default();
        assert_eq!(config.socket_addr(), "127.0.0.1:3000");
        assert_eq!(config.channel_capacity, 32);
        assert!(config.seed_quotes);
    }
}
