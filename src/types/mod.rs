//! Core types for telemetry data representation.
//!
//! - [`TelemetryDocument`] is the loosely-structured JSON object returned by
//!   the SimHub API, produced fresh on every poll cycle
//! - [`TelemetrySnapshot`] is the fixed-shape record built from a document
//! - [`SnapshotField`] names each snapshot slot and its wire key
//!
//! ## Usage Example
//!
//! ```rust
//! use simhub_bridge::types::{SnapshotField, TelemetryDocument, TelemetrySnapshot};
//!
//! let doc = TelemetryDocument::from_slice(br#"{"SpeedKmh": 187.9}"#).unwrap();
//! assert!(doc.root("SpeedKmh").is_some());
//!
//! let snapshot = TelemetrySnapshot { speed: 187, ..Default::default() };
//! assert_eq!(snapshot.get(SnapshotField::Speed), 187);
//! ```

mod document;
mod snapshot;

pub use document::{ENVELOPE_KEY, TelemetryDocument};
pub use snapshot::{SnapshotField, TelemetrySnapshot};
