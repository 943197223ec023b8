//! Field resolution and snapshot building.
//!
//! SimHub's game data API is loosely structured: depending on the version a
//! field may sit at the root of the document or inside the `NewData`
//! envelope, and may be spelled several ways. This module turns such a
//! document into a [`TelemetrySnapshot`]:
//!
//! - [`resolve`] finds the first present candidate name, root before envelope
//! - [`SNAPSHOT_FIELDS`] lists the candidate names and conversion per field
//! - [`DocumentAdapter`] is the build step, implemented by [`TelemetrySnapshot`]
//!
//! # Example Usage
//!
//! ```rust
//! use simhub_bridge::adapters::DocumentAdapter;
//! use simhub_bridge::types::{TelemetryDocument, TelemetrySnapshot};
//!
//! let doc = TelemetryDocument::from_slice(
//!     br#"{"NewData": {"SpeedKmh": 187.9, "BestLapTime": "00:01:32.4560000"}}"#,
//! ).unwrap();
//!
//! let snapshot = TelemetrySnapshot::adapt(&doc);
//! assert_eq!(snapshot.speed, 187);
//! assert_eq!(snapshot.best_lap_ms, 92_456);
//! assert_eq!(snapshot.position, 0);
//! ```

mod document_adapter;
mod fields;
mod resolver;

pub use document_adapter::DocumentAdapter;
pub use fields::{FieldKind, FieldSpec, SNAPSHOT_FIELDS, spec_for};
pub use resolver::resolve;

use crate::normalize::{coerce_int, duration_to_ms};
use crate::types::{TelemetryDocument, TelemetrySnapshot};

/// Resolve and convert a single field.
pub fn extract(document: &TelemetryDocument, spec: &FieldSpec) -> i64 {
    let value = resolve(document, spec.candidates);
    match spec.kind {
        FieldKind::Integer => coerce_int(value),
        FieldKind::Duration => duration_to_ms(value),
    }
}

impl DocumentAdapter for TelemetrySnapshot {
    fn adapt(document: &TelemetryDocument) -> Self {
        TelemetrySnapshot::from_fn(|field| extract(document, spec_for(field)))
    }
}
