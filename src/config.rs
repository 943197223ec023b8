//! Bridge configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::{BridgeError, Result};

/// Display address on the local network.
pub const DEFAULT_DESTINATION_IP: Ipv4Addr = Ipv4Addr::new(192, 168, 0, 26);
/// UDP port the display listens on.
pub const DEFAULT_DESTINATION_PORT: u16 = 5005;
/// SimHub's built-in web server port.
pub const DEFAULT_API_PORT: u16 = 8888;
pub const DEFAULT_API_HOST: &str = "localhost";
pub const DEFAULT_API_PATH: &str = "/api/getgamedata";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runtime settings for one bridge process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Where datagrams are sent.
    pub destination: SocketAddr,
    pub api_host: String,
    pub api_port: u16,
    pub api_path: String,
    /// Upper bound on a single API request.
    pub fetch_timeout: Duration,
    /// Pause between cycles, whatever their outcome.
    pub poll_interval: Duration,
    /// Dump the first successful API response.
    pub debug_dump: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            destination: SocketAddr::new(
                IpAddr::V4(DEFAULT_DESTINATION_IP),
                DEFAULT_DESTINATION_PORT,
            ),
            api_host: DEFAULT_API_HOST.to_string(),
            api_port: DEFAULT_API_PORT,
            api_path: DEFAULT_API_PATH.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            debug_dump: false,
        }
    }
}

impl BridgeConfig {
    /// Full URL of the game data endpoint.
    pub fn api_url(&self) -> String {
        format!("http://{}:{}{}", self.api_host, self.api_port, self.api_path)
    }

    /// Set the destination from a host string and port.
    ///
    /// The host must be an IP literal; the display has no DNS name.
    pub fn with_destination(mut self, host: &str, port: u16) -> Result<Self> {
        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|e| BridgeError::config(format!("destination host '{host}': {e}")))?;
        self.destination = SocketAddr::new(ip, port);
        Ok(self)
    }

    pub fn with_api_port(mut self, port: u16) -> Self {
        self.api_port = port;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_debug_dump(mut self, enabled: bool) -> Self {
        self.debug_dump = enabled;
        self
    }

    /// Reject settings the loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.destination.port() == 0 {
            return Err(BridgeError::config("destination port must be non-zero"));
        }
        if self.api_port == 0 {
            return Err(BridgeError::config("API port must be non-zero"));
        }
        if self.fetch_timeout.is_zero() {
            return Err(BridgeError::config("fetch timeout must be non-zero"));
        }
        if !self.api_path.starts_with('/') {
            return Err(BridgeError::config(format!(
                "API path '{}' must start with '/'",
                self.api_path
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_setup() {
        let config = BridgeConfig::default();
        assert_eq!(config.destination.to_string(), "192.168.0.26:5005");
        assert_eq!(config.api_url(), "http://localhost:8888/api/getgamedata");
        assert_eq!(config.fetch_timeout, Duration::from_secs(1));
        assert_eq!(config.poll_interval, Duration::from_millis(50));
        assert!(!config.debug_dump);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let config = BridgeConfig::default()
            .with_destination("10.0.0.7", 6000)
            .unwrap()
            .with_api_port(9999)
            .with_poll_interval(Duration::from_millis(20))
            .with_debug_dump(true);
        assert_eq!(config.destination.to_string(), "10.0.0.7:6000");
        assert_eq!(config.api_url(), "http://localhost:9999/api/getgamedata");
        assert_eq!(config.poll_interval, Duration::from_millis(20));
        assert!(config.debug_dump);
    }

    #[test]
    fn hostnames_are_rejected_as_destination() {
        let err = BridgeConfig::default().with_destination("esp32.local", 5005).unwrap_err();
        assert!(matches!(err, BridgeError::Config { .. }));
        assert!(err.to_string().contains("esp32.local"));
    }

    #[test]
    fn validate_catches_zero_values() {
        assert!(BridgeConfig::default().with_api_port(0).validate().is_err());
        assert!(BridgeConfig::default().with_fetch_timeout(Duration::ZERO).validate().is_err());
        let config = BridgeConfig::default().with_destination("127.0.0.1", 0).unwrap();
        assert!(config.validate().is_err());
    }
}
