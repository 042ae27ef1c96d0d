//! Unit-amplitude waveform primitives.
//!
//! Each function maps an angle in radians to a value in [-1, 1]. They are
//! stateless; callers compute the angle for every sample.

use std::f64::consts::PI;

/// Two times PI.
pub const TWO_PI: f64 = 2.0 * PI;

/// Position within the current cycle, in [0, 1).
#[inline]
pub fn cycle_position(theta: f64) -> f64 {
    let x = theta.rem_euclid(TWO_PI) / TWO_PI;
    // rem_euclid can round up to exactly TWO_PI for tiny negative angles
    if x >= 1.0 {
        0.0
    } else {
        x
    }
}

/// Sine wave.
#[inline]
pub fn sine(theta: f64) -> f64 {
    theta.sin()
}

/// Triangle wave aligned with `sine`: 0 at 0, crest at π/2, trough at 3π/2.
#[inline]
pub fn triangle(theta: f64) -> f64 {
    let x = cycle_position(theta);
    if x < 0.25 {
        4.0 * x
    } else if x < 0.75 {
        2.0 - 4.0 * x
    } else {
        4.0 * x - 4.0
    }
}

/// Square wave: +1 wherever `sin(theta) >= 0`, -1 elsewhere.
#[inline]
pub fn square(theta: f64) -> f64 {
    if theta.sin() >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Sawtooth wave: ramps from -1 to +1 over each cycle, then resets.
#[inline]
pub fn sawtooth(theta: f64) -> f64 {
    2.0 * cycle_position(theta) - 1.0
}

/// Pulse wave: +1 for the first `duty` fraction of each cycle, -1 after.
#[inline]
pub fn pulse(theta: f64, duty: f64) -> f64 {
    if cycle_position(theta) < duty {
        1.0
    } else {
        -1.0
    }
}
