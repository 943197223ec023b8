//! Wire encoding of a snapshot
//!
//! The display firmware expects one ASCII line per datagram:
//!
//! ```text
//! speed=187,bestlap=92456,allbest=0,lastlap=0,lap=3,totallaps=10,pos=2,opponents=19,twfl=0,...,ttrr=0
//! ```
//!
//! All sixteen keys are always sent, in a fixed order, with decimal integer
//! values and no trailing delimiter. The receiver picks what its current view
//! needs.

use std::fmt::Write as _;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::types::TelemetrySnapshot;

/// Separator between `key=value` tokens.
pub const FIELD_SEPARATOR: char = ',';

/// Encode a snapshot into its wire text.
///
/// Pure: the same snapshot always gives the same bytes.
pub fn encode(snapshot: &TelemetrySnapshot) -> String {
    let mut out = String::with_capacity(192);
    for (index, (key, value)) in snapshot.wire_pairs().enumerate() {
        if index > 0 {
            out.push(FIELD_SEPARATOR);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{key}={value}");
    }
    out
}

/// One encoded snapshot addressed to the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    payload: Arc<[u8]>,
    destination: SocketAddr,
}

impl Datagram {
    /// Encode `snapshot` for `destination`.
    pub fn new(snapshot: &TelemetrySnapshot, destination: SocketAddr) -> Self {
        Self { payload: encode(snapshot).into_bytes().into(), destination }
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn destination(&self) -> SocketAddr {
        self.destination
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
