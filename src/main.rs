//! SimHub -> ESP32 bridge
//!
//! Polls the SimHub game data API and forwards lap data over UDP until killed.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use simhub_bridge::config::{
    DEFAULT_API_PORT, DEFAULT_DESTINATION_IP, DEFAULT_DESTINATION_PORT, DEFAULT_FETCH_TIMEOUT,
    DEFAULT_POLL_INTERVAL,
};
use simhub_bridge::{Bridge, BridgeConfig, BridgeError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "simhub-bridge")]
#[command(about = "Forward SimHub telemetry to a UDP display", long_about = None)]
struct Args {
    /// Dump the first successful API response (first 3000 chars)
    #[arg(long)]
    debug: bool,

    /// Display IP address
    #[arg(long, default_value_t = DEFAULT_DESTINATION_IP.to_string())]
    host: String,

    /// Display UDP port
    #[arg(long, default_value_t = DEFAULT_DESTINATION_PORT)]
    port: u16,

    /// SimHub web server port
    #[arg(long, default_value_t = DEFAULT_API_PORT)]
    api_port: u16,

    /// Pause between poll cycles in milliseconds
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_millis() as u64)]
    poll_interval_ms: u64,

    /// API request timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT.as_millis() as u64)]
    timeout_ms: u64,
}

impl Args {
    fn into_config(self) -> anyhow::Result<BridgeConfig> {
        let config = BridgeConfig::default()
            .with_destination(&self.host, self.port)?
            .with_api_port(self.api_port)
            .with_poll_interval(Duration::from_millis(self.poll_interval_ms))
            .with_fetch_timeout(Duration::from_millis(self.timeout_ms))
            .with_debug_dump(self.debug);
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the stdout status line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().into_config()?;

    println!("SimHub -> ESP32 Bridge");
    println!("Sending to {}", config.destination);
    if config.debug_dump {
        println!("DEBUG mode: will dump first API response");
    }

    let driver = match Bridge::connect(&config).await {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("{}", startup_hints(&e));
            return Err(e).context("failed to start bridge");
        }
    };
    match driver.run().await {}
}

/// Recovery hints printed when the bridge cannot start.
fn startup_hints(error: &BridgeError) -> String {
    let mut hints = String::from(if error.is_retryable() {
        "Startup failed; this may succeed on a later attempt:"
    } else {
        "Startup failed; fix the arguments and try again:"
    });
    for suggestion in error.recovery_suggestions() {
        hints.push_str("\n  - ");
        hints.push_str(suggestion);
    }
    hints
}
