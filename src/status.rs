//! One-line terminal status rendering

use std::io::Write;
use tracing::trace;

use crate::types::{TelemetryDocument, TelemetrySnapshot};

/// Shown while the API is unreachable or returns something unusable.
pub const WAITING_STATUS: &str = "Waiting for SimHub...";

/// Maximum number of characters of the raw document shown by the debug dump.
pub const DEBUG_DUMP_CHARS: usize = 3000;

/// Trailing blanks that overwrite leftovers of a longer previous line.
const LINE_PADDING: &str = "        ";

/// Summarize a snapshot as `Spd:.. Pos:../.. Lap:../..[ Best:m:ss.fff]`.
///
/// The field count is the player plus the opponents. The best lap is only
/// shown once one has been set.
pub fn render_status(snapshot: &TelemetrySnapshot) -> String {
    let mut status = format!(
        "Spd:{} Pos:{}/{} Lap:{}/{}",
        snapshot.speed,
        snapshot.position,
        snapshot.opponents.saturating_add(1),
        snapshot.current_lap,
        snapshot.total_laps
    );
    if snapshot.best_lap_ms > 0 {
        status.push_str(&format!(" Best:{}", format_lap_time(snapshot.best_lap_ms)));
    }
    status
}

/// Format milliseconds as `m:ss.fff`.
pub fn format_lap_time(ms: i64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) as f64 / 1000.0;
    format!("{minutes}:{seconds:06.3}")
}

/// Pretty-printed raw document, cut to [`DEBUG_DUMP_CHARS`] characters.
pub fn render_debug_dump(document: &TelemetryDocument) -> String {
    let pretty = serde_json::to_string_pretty(document)
        .unwrap_or_else(|e| format!("<unprintable document: {e}>"));
    let cut = pretty.char_indices().nth(DEBUG_DUMP_CHARS).map_or(pretty.len(), |(i, _)| i);
    format!(
        "\n=== API Response (first {DEBUG_DUMP_CHARS} chars) ===\n{}\n=== End ===\n",
        &pretty[..cut]
    )
}

/// Terminal writer that keeps the status on a single, rewritten line.
///
/// Write failures are dropped: losing a status line never stops the loop.
pub struct StatusLine<W: Write> {
    out: W,
}

impl<W: Write> StatusLine<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Overwrite the current line with `status`.
    pub fn show(&mut self, status: &str) {
        let result = write!(self.out, "\r{status}{LINE_PADDING}").and_then(|()| self.out.flush());
        if let Err(e) = result {
            trace!("Status line write failed: {}", e);
        }
    }

    pub fn waiting(&mut self) {
        self.show(WAITING_STATUS);
    }

    /// Print a multi-line block below the status line.
    pub fn block(&mut self, text: &str) {
        let result = writeln!(self.out, "{text}").and_then(|()| self.out.flush());
        if let Err(e) = result {
            trace!("Status block write failed: {}", e);
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
