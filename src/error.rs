//! Error types for the transport side of the bridge.
//!
//! Only the collaborators that touch the network return these errors: the
//! HTTP provider that fetches the telemetry document and the UDP sink that
//! emits the datagram. Field resolution, coercion, duration parsing and
//! encoding are total functions and never produce a [`BridgeError`].
//!
//! ## Error Categories
//!
//! - **Connection Errors**: SimHub not running, connection refused
//! - **HTTP Errors**: the API answered with a non-success status
//! - **Timeouts**: the API did not answer within the fetch timeout
//! - **Parse Errors**: the response body was not a JSON object
//! - **Send Errors**: the datagram could not be handed to the socket
//! - **Config Errors**: invalid destination or API address at startup
//!
//! ## Recovery and Retry
//!
//! ```rust
//! use simhub_bridge::BridgeError;
//!
//! let error = BridgeError::connection_failed("connection refused");
//! if error.is_retryable() {
//!     for suggestion in error.recovery_suggestions() {
//!         println!("  - {}", suggestion);
//!     }
//! }
//! ```

use std::time::Duration;
use thiserror::Error;

/// Result type alias for bridge operations.
pub type Result<T, E = BridgeError> = std::result::Result<T, E>;

/// Main error type for bridge transport operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BridgeError {
    #[error("Failed to reach telemetry API: {reason}")]
    Connection {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Telemetry API returned HTTP {status}")]
    Http { status: u16 },

    #[error("Operation timed out after {duration:?}")]
    Timeout { duration: Duration },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("Failed to send datagram to {destination}")]
    Send {
        destination: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },
}

impl BridgeError {
    /// Returns whether the next poll cycle can reasonably be expected to succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            BridgeError::Connection { .. } => true,
            BridgeError::Http { .. } => true,
            BridgeError::Timeout { .. } => true,
            BridgeError::Parse { .. } => true,
            BridgeError::Send { .. } => true,
            BridgeError::Config { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            BridgeError::Connection { .. } => vec![
                "Ensure SimHub is running",
                "Check the SimHub web server port setting",
                "Verify no firewall blocks localhost traffic",
            ],
            BridgeError::Http { .. } => vec![
                "Check the API path is /api/getgamedata",
                "Verify the SimHub version exposes the game data API",
            ],
            BridgeError::Timeout { .. } => vec![
                "Check SimHub is responsive",
                "Increase the fetch timeout",
                "Check system load",
            ],
            BridgeError::Parse { .. } => vec![
                "Start a game session so SimHub publishes telemetry",
                "Run with --debug to inspect the raw API response",
            ],
            BridgeError::Send { .. } => vec![
                "Check the destination address is reachable on the LAN",
                "Verify the network interface is up",
            ],
            BridgeError::Config { .. } => {
                vec!["Check the --host and --port arguments", "Check the API port argument"]
            }
        }
    }

    /// Helper constructor for connection errors.
    pub fn connection_failed(reason: impl Into<String>) -> Self {
        BridgeError::Connection { reason: reason.into(), source: None }
    }

    /// Helper constructor for connection errors with source.
    pub fn connection_failed_with_source(
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        BridgeError::Connection { reason: reason.into(), source: Some(source) }
    }

    /// Helper constructor for parse errors.
    pub fn parse(context: impl Into<String>, details: impl Into<String>) -> Self {
        BridgeError::Parse { context: context.into(), details: details.into() }
    }

    /// Helper constructor for send errors.
    pub fn send_failed(destination: impl ToString, source: std::io::Error) -> Self {
        BridgeError::Send { destination: destination.to_string(), source }
    }

    /// Helper constructor for configuration errors.
    pub fn config(reason: impl Into<String>) -> Self {
        BridgeError::Config { reason: reason.into() }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Parse { context: "telemetry document".to_string(), details: err.to_string() }
    }
}
