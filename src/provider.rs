//! Provider trait for telemetry document sources

use crate::Result;
use crate::types::TelemetryDocument;

/// Source of raw telemetry documents.
///
/// The driver calls `fetch()` once per cycle and treats every error the same
/// way: the cycle is skipped and the next one tries again. Implementations
/// bound their own waiting so a hung source cannot stall the loop.
#[async_trait::async_trait]
pub trait Provider: Send {
    /// Fetch the current document.
    ///
    /// Returns:
    /// - `Ok(document)` - A freshly decoded JSON object
    /// - `Err(e)` - Timeout, refused connection, bad status or bad body
    async fn fetch(&mut self) -> Result<TelemetryDocument>;
}
