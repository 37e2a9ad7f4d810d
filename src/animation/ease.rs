//! Time-warp functions shared by every animation variant.
//!
//! Raw times are milliseconds; normalized forms take and return unitless fractions.

use std::f64::consts::{PI, TAU};

/// Sawtooth that ramps `0 -> 1` over the first `cutoff` fraction of each `duration` cycle and
/// rests at `0` for the remainder.
///
/// The remainder keeps the sign of `t`, so negative (phase-shifted) times yield a negative ramp.
pub fn ramp_with_plateau(t: f64, duration: f64, cutoff: f64) -> f64 {
    let rt = (t % duration) / duration;
    if rt < cutoff { rt / cutoff } else { 0.0 }
}

/// `0` below `cutoff`, `1` above `1 - cutoff`, linear in between.
pub fn clamped_ramp(t: f64, cutoff: f64) -> f64 {
    if t < cutoff {
        return 0.0;
    }
    if t > 1.0 - cutoff {
        return 1.0;
    }
    let span = 1.0 - 2.0 * cutoff;
    if span <= 0.0 {
        return 0.5;
    }
    (t - cutoff) / span
}

/// Ping-pong `0 -> 1 -> 0` over `t in [0, 1]`.
pub fn triangle_wave(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t
    } else {
        1.0 - 2.0 * (t - 0.5)
    }
}

/// `(sin(2 pi t / period) + 1) / 2`.
pub fn oscillate(t: f64, period: f64) -> f64 {
    ((TAU * t / period).sin() + 1.0) / 2.0
}

/// Bell over `k in [0, 1]`: `0` at both ends, `1` at `k = 0.5`.
pub fn glint(k: f64) -> f64 {
    1.0 - ((TAU * k).cos() + 1.0) / 2.0
}

/// `sin(pi * ramp_with_plateau(..))`: one smooth swell per cycle.
pub fn swell(t: f64, duration: f64, cutoff: f64) -> f64 {
    (PI * ramp_with_plateau(t, duration, cutoff)).sin()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
