//! Document adapter trait for building typed records from raw telemetry

use crate::types::TelemetryDocument;

/// Builds a typed record from one raw telemetry document.
///
/// `adapt()` runs once per poll cycle and must be total: a document missing
/// some or all fields still produces a value, with defaults substituted.
/// Implementations do no I/O so they can be tested against literal JSON.
pub trait DocumentAdapter: Sized {
    fn adapt(document: &TelemetryDocument) -> Self;
}
