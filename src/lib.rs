//! SimHub telemetry bridge for small UDP displays.
//!
//! Polls SimHub's local game data API, reduces the loosely-structured JSON
//! it returns to sixteen integers, and forwards them as one ASCII datagram
//! per cycle to a display on the LAN (typically an ESP32).
//!
//! # Features
//!
//! - **Schema tolerance**: fields are found at the document root or inside
//!   the `NewData` envelope, under any of several names
//! - **Total normalization**: lap times in any `TimeSpan` granularity become
//!   milliseconds; malformed values become `0` instead of errors
//! - **Fire-and-forget transport**: one datagram per cycle, no retries, the
//!   display may be offline indefinitely
//!
//! ## Example (pure pipeline)
//!
//! ```rust
//! use simhub_bridge::{DocumentAdapter, TelemetryDocument, TelemetrySnapshot, encode};
//!
//! let doc = TelemetryDocument::from_slice(
//!     br#"{"SpeedKmh": 187.9, "BestLapTime": "1:32.456", "Position": 2}"#,
//! ).unwrap();
//! let snapshot = TelemetrySnapshot::adapt(&doc);
//!
//! assert!(encode(&snapshot).starts_with("speed=187,bestlap=92456,allbest=0,"));
//! ```

// Core types and error handling
pub mod adapters;
pub mod config;
mod error;
pub mod normalize;
pub mod types;

// Wire format and transport
pub mod datagram;
pub mod sink;

// Poll loop
pub mod driver;
pub mod provider;
pub mod providers;
pub mod status;

// Core exports
pub use adapters::{DocumentAdapter, resolve};
pub use config::BridgeConfig;
pub use error::*;
pub use normalize::{coerce_int, coerce_int_or, duration_to_ms};
pub use types::{SnapshotField, TelemetryDocument, TelemetrySnapshot};

// Main API exports
pub use datagram::{Datagram, encode};
pub use driver::{CycleOutcome, CycleState, Driver};
pub use provider::Provider;
pub use providers::HttpProvider;
pub use sink::{DatagramSink, UdpSink};

use std::io::Stdout;

/// Unified entry point for a live bridge.
pub struct Bridge;

impl Bridge {
    /// Build the live poll loop: HTTP provider, UDP sink, stdout status line.
    ///
    /// The UDP socket is bound here, once, and reused for every cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The HTTP client cannot be built
    /// - No local UDP port can be bound
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use simhub_bridge::{Bridge, BridgeConfig};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> simhub_bridge::Result<()> {
    /// let driver = Bridge::connect(&BridgeConfig::default()).await?;
    /// match driver.run().await {}
    /// # }
    /// ```
    pub async fn connect(
        config: &BridgeConfig,
    ) -> Result<Driver<HttpProvider, UdpSink, Stdout>> {
        config.validate()?;
        let provider = HttpProvider::from_config(config)?;
        let sink = UdpSink::bind().await?;
        Ok(Driver::new(provider, sink, std::io::stdout(), config))
    }
}
