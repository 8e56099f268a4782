use std::f64::consts::PI;

use chrono::{DateTime, Utc};

pub fn modulus(a: f64, b: f64) -> f64 {
    ((a % b) + b) % b
}

/// Reduces an angle in radians into (-PI, PI].
pub fn wrap_anomaly(angle: f64) -> f64 {
    PI - modulus(PI - angle, 2. * PI)
}

/// Unix seconds, keeping the sub-second part down to nanoseconds.
pub(crate) fn timestamp_seconds(time: &DateTime<Utc>) -> f64 {
    time.timestamp() as f64 + time.timestamp_subsec_nanos() as f64 / 1e9
}

#[cfg(test)]
pub fn assert_almost_eq(a: f64, b: f64, eps: f64) {
    if (a - b).abs() <= eps {
        assert!(true)
    } else {
        assert_eq!(a, b)
    }
}
