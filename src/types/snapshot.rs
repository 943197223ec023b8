//! Normalized per-cycle telemetry snapshot

use serde::{Deserialize, Serialize};

/// The sixteen values forwarded to the display on every cycle.
///
/// Every field always holds a value: missing or malformed source data maps
/// to `0`. Lap times are in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub speed: i64,
    pub best_lap_ms: i64,
    pub all_time_best_ms: i64,
    pub last_lap_ms: i64,
    pub current_lap: i64,
    pub total_laps: i64,
    pub position: i64,
    pub opponents: i64,
    /// Tyre wear, percentage remaining.
    pub tyre_wear_fl: i64,
    pub tyre_wear_fr: i64,
    pub tyre_wear_rl: i64,
    pub tyre_wear_rr: i64,
    /// Tyre temperature, whole degrees Celsius.
    pub tyre_temp_fl: i64,
    pub tyre_temp_fr: i64,
    pub tyre_temp_rl: i64,
    pub tyre_temp_rr: i64,
}

impl TelemetrySnapshot {
    /// Read one field by identifier.
    pub fn get(&self, field: SnapshotField) -> i64 {
        match field {
            SnapshotField::Speed => self.speed,
            SnapshotField::BestLap => self.best_lap_ms,
            SnapshotField::AllTimeBest => self.all_time_best_ms,
            SnapshotField::LastLap => self.last_lap_ms,
            SnapshotField::CurrentLap => self.current_lap,
            SnapshotField::TotalLaps => self.total_laps,
            SnapshotField::Position => self.position,
            SnapshotField::Opponents => self.opponents,
            SnapshotField::TyreWearFrontLeft => self.tyre_wear_fl,
            SnapshotField::TyreWearFrontRight => self.tyre_wear_fr,
            SnapshotField::TyreWearRearLeft => self.tyre_wear_rl,
            SnapshotField::TyreWearRearRight => self.tyre_wear_rr,
            SnapshotField::TyreTempFrontLeft => self.tyre_temp_fl,
            SnapshotField::TyreTempFrontRight => self.tyre_temp_fr,
            SnapshotField::TyreTempRearLeft => self.tyre_temp_rl,
            SnapshotField::TyreTempRearRight => self.tyre_temp_rr,
        }
    }

    /// Build a snapshot by evaluating `value` once per field.
    pub fn from_fn(mut value: impl FnMut(SnapshotField) -> i64) -> Self {
        Self {
            speed: value(SnapshotField::Speed),
            best_lap_ms: value(SnapshotField::BestLap),
            all_time_best_ms: value(SnapshotField::AllTimeBest),
            last_lap_ms: value(SnapshotField::LastLap),
            current_lap: value(SnapshotField::CurrentLap),
            total_laps: value(SnapshotField::TotalLaps),
            position: value(SnapshotField::Position),
            opponents: value(SnapshotField::Opponents),
            tyre_wear_fl: value(SnapshotField::TyreWearFrontLeft),
            tyre_wear_fr: value(SnapshotField::TyreWearFrontRight),
            tyre_wear_rl: value(SnapshotField::TyreWearRearLeft),
            tyre_wear_rr: value(SnapshotField::TyreWearRearRight),
            tyre_temp_fl: value(SnapshotField::TyreTempFrontLeft),
            tyre_temp_fr: value(SnapshotField::TyreTempFrontRight),
            tyre_temp_rl: value(SnapshotField::TyreTempRearLeft),
            tyre_temp_rr: value(SnapshotField::TyreTempRearRight),
        }
    }

    /// `(wire key, value)` pairs in wire order.
    pub fn wire_pairs(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        SnapshotField::ALL.into_iter().map(move |field| (field.wire_key(), self.get(field)))
    }
}

/// Identifies one of the sixteen snapshot fields.
///
/// Discriminants are wire positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum SnapshotField {
    Speed = 0,
    BestLap = 1,
    AllTimeBest = 2,
    LastLap = 3,
    CurrentLap = 4,
    TotalLaps = 5,
    Position = 6,
    Opponents = 7,
    TyreWearFrontLeft = 8,
    TyreWearFrontRight = 9,
    TyreWearRearLeft = 10,
    TyreWearRearRight = 11,
    TyreTempFrontLeft = 12,
    TyreTempFrontRight = 13,
    TyreTempRearLeft = 14,
    TyreTempRearRight = 15,
}

impl SnapshotField {
    /// All fields in wire order.
    pub const ALL: [SnapshotField; 16] = [
        SnapshotField::Speed,
        SnapshotField::BestLap,
        SnapshotField::AllTimeBest,
        SnapshotField::LastLap,
        SnapshotField::CurrentLap,
        SnapshotField::TotalLaps,
        SnapshotField::Position,
        SnapshotField::Opponents,
        SnapshotField::TyreWearFrontLeft,
        SnapshotField::TyreWearFrontRight,
        SnapshotField::TyreWearRearLeft,
        SnapshotField::TyreWearRearRight,
        SnapshotField::TyreTempFrontLeft,
        SnapshotField::TyreTempFrontRight,
        SnapshotField::TyreTempRearLeft,
        SnapshotField::TyreTempRearRight,
    ];

    /// Position of this field in the datagram.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Key used for this field in the datagram.
    pub const fn wire_key(self) -> &'static str {
        match self {
            SnapshotField::Speed => "speed",
            SnapshotField::BestLap => "bestlap",
            SnapshotField::AllTimeBest => "allbest",
            SnapshotField::LastLap => "lastlap",
            SnapshotField::CurrentLap => "lap",
            SnapshotField::TotalLaps => "totallaps",
            SnapshotField::Position => "pos",
            SnapshotField::Opponents => "opponents",
            SnapshotField::TyreWearFrontLeft => "twfl",
            SnapshotField::TyreWearFrontRight => "twfr",
            SnapshotField::TyreWearRearLeft => "twrl",
            SnapshotField::TyreWearRearRight => "twrr",
            SnapshotField::TyreTempFrontLeft => "ttfl",
            SnapshotField::TyreTempFrontRight => "ttfr",
            SnapshotField::TyreTempRearLeft => "ttrl",
            SnapshotField::TyreTempRearRight => "ttrr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn wire_keys_are_unique() {
        let keys: HashSet<_> = SnapshotField::ALL.iter().map(|f| f.wire_key()).collect();
        assert_eq!(keys.len(), 16);
    }

    #[test]
    fn from_fn_routes_each_field_to_its_slot() {
        let snapshot = TelemetrySnapshot::from_fn(|field| field.index() as i64 + 1);

        let values: Vec<i64> = snapshot.wire_pairs().map(|(_, v)| v).collect();
        assert_eq!(values, (1..=16).collect::<Vec<i64>>());
        assert_eq!(snapshot.speed, 1);
        assert_eq!(snapshot.opponents, 8);
        assert_eq!(snapshot.tyre_temp_rr, 16);
    }

    #[test]
    fn index_matches_wire_order() {
        for (position, field) in SnapshotField::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), position, "{field:?}");
        }
    }

    #[test]
    fn default_snapshot_is_all_zero() {
        assert!(TelemetrySnapshot::default().wire_pairs().all(|(_, v)| v == 0));
    }
}
