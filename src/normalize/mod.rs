//! Total conversions from untyped JSON values to snapshot integers.
//!
//! Neither function here can fail. Input that cannot be read as a number
//! becomes `0` (or the caller's default).

mod coerce;
mod duration;

pub use coerce::{coerce_int, coerce_int_or};
pub use duration::duration_to_ms;
