//! Benchmarks for the per-cycle pure pipeline
//!
//! Measures what one poll cycle costs between the HTTP response and the UDP
//! send:
//! - Decoding the response body into a TelemetryDocument
//! - Building a TelemetrySnapshot (resolution, coercion, lap time parsing)
//! - Encoding the wire text
//!
//! Platform: Cross-platform (synthetic documents, CI-safe)

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use simhub_bridge::{DocumentAdapter, TelemetryDocument, TelemetrySnapshot, duration_to_ms, encode};
use std::hint::black_box;

/// Root-level document, the shape older SimHub versions return.
const ROOT_DOCUMENT: &str = r#"{
    "SpeedKmh": 187.9, "BestLapTime": "00:01:32.4560000", "AllTimeBest": "00:01:31.0020000",
    "LastLapTime": "00:01:33.1000000", "CurrentLap": 3, "TotalLaps": 10, "Position": 2,
    "OpponentsCount": 19, "TyreWearFrontLeft": 97.1, "TyreWearFrontRight": 96.4,
    "TyreWearRearLeft": 98.0, "TyreWearRearRight": 97.7, "TyreTemperatureFrontLeft": 85.2,
    "TyreTemperatureFrontRight": 86.9, "TyreTemperatureRearLeft": 80.3,
    "TyreTemperatureRearRight": 81.0
}"#;

/// Enveloped document with aliases, the worst case for resolution.
const ENVELOPED_DOCUMENT: &str = r#"{
    "GameRunning": true, "GameName": "AssettoCorsaCompetizione",
    "NewData": {
        "Speed": "187.9", "BestLapTime": "1:32.456", "PlayerLeaderboardPosition": 2,
        "OpponentsCount": 19, "TyreTemperatureRearRight": "81.0"
    }
}"#;

fn bench_document_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_decode");
    group.throughput(Throughput::Bytes(ROOT_DOCUMENT.len() as u64));

    group.bench_function("root_document", |b| {
        b.iter(|| {
            let doc = TelemetryDocument::from_slice(black_box(ROOT_DOCUMENT.as_bytes()));
            black_box(doc)
        })
    });

    group.finish();
}

fn bench_snapshot_build(c: &mut Criterion) {
    let root = TelemetryDocument::from_slice(ROOT_DOCUMENT.as_bytes()).expect("valid JSON");
    let enveloped =
        TelemetryDocument::from_slice(ENVELOPED_DOCUMENT.as_bytes()).expect("valid JSON");
    let empty = TelemetryDocument::default();

    let mut group = c.benchmark_group("snapshot_build");

    group.bench_function("root_document", |b| {
        b.iter(|| black_box(TelemetrySnapshot::adapt(black_box(&root))))
    });

    group.bench_function("enveloped_document", |b| {
        b.iter(|| black_box(TelemetrySnapshot::adapt(black_box(&enveloped))))
    });

    group.bench_function("empty_document", |b| {
        b.iter(|| black_box(TelemetrySnapshot::adapt(black_box(&empty))))
    });

    group.finish();
}

fn bench_duration_parsing(c: &mut Criterion) {
    let timespan = serde_json::json!("00:01:32.4560000");
    let short = serde_json::json!("1:32.456");

    c.bench_function("duration_to_ms_timespan", |b| {
        b.iter(|| black_box(duration_to_ms(black_box(Some(&timespan)))))
    });

    c.bench_function("duration_to_ms_short", |b| {
        b.iter(|| black_box(duration_to_ms(black_box(Some(&short)))))
    });
}

fn bench_full_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_cycle");

    group.bench_function("decode_build_encode", |b| {
        b.iter(|| {
            let doc = TelemetryDocument::from_slice(black_box(ROOT_DOCUMENT.as_bytes()))
                .expect("valid JSON");
            let snapshot = TelemetrySnapshot::adapt(&doc);
            black_box(encode(&snapshot))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_document_decode,
    bench_snapshot_build,
    bench_duration_parsing,
    bench_full_cycle
);
criterion_main!(benches);
