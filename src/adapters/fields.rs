//! Source field names for every snapshot field

use crate::types::SnapshotField;

/// How a resolved value is turned into the snapshot integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain numeric reading, coerced with a default of `0`.
    Integer,
    /// Lap time, normalized to milliseconds.
    Duration,
}

/// Extraction rule for one snapshot field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: SnapshotField,
    /// Alternative SimHub names, highest priority first.
    pub candidates: &'static [&'static str],
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn integer(field: SnapshotField, candidates: &'static [&'static str]) -> Self {
        Self { field, candidates, kind: FieldKind::Integer }
    }

    const fn duration(field: SnapshotField, candidates: &'static [&'static str]) -> Self {
        Self { field, candidates, kind: FieldKind::Duration }
    }
}

/// Extraction rules in wire order.
pub static SNAPSHOT_FIELDS: [FieldSpec; 16] = [
    FieldSpec::integer(SnapshotField::Speed, &["SpeedKmh", "speedKmh", "Speed"]),
    FieldSpec::duration(SnapshotField::BestLap, &["BestLapTime"]),
    FieldSpec::duration(SnapshotField::AllTimeBest, &["AllTimeBest"]),
    FieldSpec::duration(SnapshotField::LastLap, &["LastLapTime"]),
    FieldSpec::integer(SnapshotField::CurrentLap, &["CurrentLap"]),
    FieldSpec::integer(SnapshotField::TotalLaps, &["TotalLaps"]),
    FieldSpec::integer(SnapshotField::Position, &["Position", "PlayerLeaderboardPosition"]),
    FieldSpec::integer(SnapshotField::Opponents, &["OpponentsCount"]),
    FieldSpec::integer(SnapshotField::TyreWearFrontLeft, &["TyreWearFrontLeft"]),
    FieldSpec::integer(SnapshotField::TyreWearFrontRight, &["TyreWearFrontRight"]),
    FieldSpec::integer(SnapshotField::TyreWearRearLeft, &["TyreWearRearLeft"]),
    FieldSpec::integer(SnapshotField::TyreWearRearRight, &["TyreWearRearRight"]),
    FieldSpec::integer(SnapshotField::TyreTempFrontLeft, &["TyreTemperatureFrontLeft"]),
    FieldSpec::integer(SnapshotField::TyreTempFrontRight, &["TyreTemperatureFrontRight"]),
    FieldSpec::integer(SnapshotField::TyreTempRearLeft, &["TyreTemperatureRearLeft"]),
    FieldSpec::integer(SnapshotField::TyreTempRearRight, &["TyreTemperatureRearRight"]),
];

/// Extraction rule for `field`.
pub fn spec_for(field: SnapshotField) -> &'static FieldSpec {
    &SNAPSHOT_FIELDS[field.index()]
}
