//! Lap time normalization to integer milliseconds
//!
//! SimHub reports lap times as .NET `TimeSpan` strings (`HH:MM:SS.fffffff`),
//! but the granularity varies between fields and versions: some values come
//! as `M:SS.fff`, some as bare seconds, some already as numbers.

use serde_json::Value;

use super::coerce::{as_finite_f64, truncate};

/// Literal SimHub uses for "no lap time yet".
const ZERO_TIMESPAN: &str = "00:00:00";

/// Convert a duration representation to whole milliseconds.
///
/// | input                    | result                                  |
/// |--------------------------|-----------------------------------------|
/// | absent, `null`, `""`     | `0`                                     |
/// | `"00:00:00"`             | `0`                                     |
/// | number                   | taken as milliseconds, truncated        |
/// | `"H:M:S[.f]"`            | `(H*3600 + M*60 + S) * 1000`, truncated |
/// | `"M:S[.f]"`              | `(M*60 + S) * 1000`, truncated          |
/// | `"S[.f]"`                | `S * 1000`, truncated                   |
/// | four or more segments    | first segment as seconds, rest ignored  |
/// | anything unparsable      | `0`                                     |
///
/// Hours and minutes must be whole numbers; seconds may be fractional.
/// The result is never negative.
pub fn duration_to_ms(value: Option<&Value>) -> i64 {
    let ms = match value {
        None | Some(Value::Null) => return 0,
        Some(Value::String(text)) => timespan_str_to_ms(text),
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => {
            as_finite_f64(scalar).map(truncate).unwrap_or(0)
        }
        Some(Value::Array(_) | Value::Object(_)) => return 0,
    };
    ms.max(0)
}

fn timespan_str_to_ms(text: &str) -> i64 {
    if text.is_empty() || text == ZERO_TIMESPAN {
        return 0;
    }
    timespan_seconds(text)
        .map(|seconds| seconds * 1000.0)
        .filter(|ms| ms.is_finite())
        .map(truncate)
        .unwrap_or(0)
}

fn timespan_seconds(text: &str) -> Option<f64> {
    let parts: Vec<&str> = text.split(':').collect();
    match parts.as_slice() {
        [hours, minutes, seconds] => {
            let base =
                whole(hours)?.checked_mul(3600)?.checked_add(whole(minutes)?.checked_mul(60)?)?;
            Some(base as f64 + fractional(seconds)?)
        }
        [minutes, seconds] => {
            let base = whole(minutes)?.checked_mul(60)?;
            Some(base as f64 + fractional(seconds)?)
        }
        // Single segment, or four and more: only the first one is read.
        [first, ..] => fractional(first),
        [] => None,
    }
}

fn whole(segment: &str) -> Option<i64> {
    segment.trim().parse().ok()
}

fn fractional(segment: &str) -> Option<f64> {
    segment.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn ms(text: &str) -> i64 {
        duration_to_ms(Some(&json!(text)))
    }

    #[test]
    fn empty_forms_are_zero() {
        assert_eq!(duration_to_ms(None), 0);
        assert_eq!(duration_to_ms(Some(&Value::Null)), 0);
        assert_eq!(ms(""), 0);
        assert_eq!(ms("00:00:00"), 0);
    }

    #[test]
    fn hours_minutes_seconds() {
        assert_eq!(ms("1:23:45.678"), 5_025_678);
        assert_eq!(ms("00:01:32.4560000"), 92_456);
    }

    #[test]
    fn minutes_seconds() {
        assert_eq!(ms("2:03.500"), 123_500);
        assert_eq!(ms("1:32.456"), 92_456);
    }

    #[test]
    fn bare_seconds() {
        assert_eq!(ms("45.2"), 45_200);
        assert_eq!(ms("0.001"), 1);
    }

    #[test]
    fn four_segments_read_only_the_first_as_seconds() {
        assert_eq!(ms("1:2:3:4"), 1000);
        assert_eq!(ms("2:0:0:0:0"), 2000);
    }

    #[test]
    fn garbage_is_zero() {
        assert_eq!(ms("garbage"), 0);
        assert_eq!(ms("1:xx"), 0);
        assert_eq!(ms("a:00:01"), 0);
        assert_eq!(ms(":"), 0);
        assert_eq!(ms("nan"), 0);
    }

    #[test]
    fn fractional_minutes_are_rejected() {
        assert_eq!(ms("1.5:00"), 0);
        assert_eq!(ms("0:1.5:00"), 0);
    }

    #[test]
    fn numbers_are_already_milliseconds() {
        assert_eq!(duration_to_ms(Some(&json!(92456))), 92_456);
        assert_eq!(duration_to_ms(Some(&json!(92456.9))), 92_456);
        assert_eq!(duration_to_ms(Some(&json!(0))), 0);
    }

    #[test]
    fn negative_durations_clamp_to_zero() {
        assert_eq!(duration_to_ms(Some(&json!(-250))), 0);
        assert_eq!(ms("-5"), 0);
        assert_eq!(ms("-1:00"), 0);
    }

    #[test]
    fn containers_are_zero() {
        assert_eq!(duration_to_ms(Some(&json!(["1:00"]))), 0);
        assert_eq!(duration_to_ms(Some(&json!({"ms": 1000}))), 0);
    }

    #[test]
    fn overflowing_hours_are_zero() {
        assert_eq!(ms("99999999999999999:00:00"), 0);
    }

    proptest! {
        #[test]
        fn never_negative_on_arbitrary_strings(s in ".*") {
            prop_assert!(ms(&s) >= 0);
        }

        #[test]
        fn minute_second_strings_are_exact(m in 0i64..600, millis in 0i64..60_000) {
            let text = format!("{}:{:02}.{:03}", m, millis / 1000, millis % 1000);
            let got = ms(&text);
            let expected = m * 60_000 + millis;
            prop_assert!((got - expected).abs() <= 1, "{} -> {} (expected {})", text, got, expected);
        }
    }
}
