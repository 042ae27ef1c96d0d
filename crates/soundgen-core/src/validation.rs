//! Parameter checks shared by the generators.
//!
//! Every public operation runs its checks before allocating output, so a
//! failure never leaves a partial buffer behind.

use crate::error::{AudioError, AudioResult};

/// Sample rate must be at least 1 Hz.
pub(crate) fn sample_rate(rate: u32) -> AudioResult<()> {
    if rate == 0 {
        return Err(AudioError::invalid_param(
            "sample_rate",
            "must be a positive number of samples per second",
        ));
    }
    Ok(())
}

/// Value must be finite and strictly positive.
pub(crate) fn positive(name: &str, value: f64) -> AudioResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AudioError::invalid_param(
            name,
            format!("must be finite and greater than 0, got {}", value),
        ));
    }
    Ok(())
}

/// Value must be finite and at least zero.
pub(crate) fn non_negative(name: &str, value: f64) -> AudioResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AudioError::invalid_param(
            name,
            format!("must be finite and non-negative, got {}", value),
        ));
    }
    Ok(())
}

/// Value must be at least zero; `+inf` is accepted.
pub(crate) fn non_negative_or_infinite(name: &str, value: f64) -> AudioResult<()> {
    if value.is_nan() || value < 0.0 {
        return Err(AudioError::invalid_param(
            name,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(())
}

/// Value must be a finite real number.
pub(crate) fn finite(name: &str, value: f64) -> AudioResult<()> {
    if !value.is_finite() {
        return Err(AudioError::invalid_param(
            name,
            format!("must be finite, got {}", value),
        ));
    }
    Ok(())
}

/// Value must lie in [0, 1].
pub(crate) fn unit_interval(name: &str, value: f64) -> AudioResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(AudioError::invalid_param(
            name,
            format!("must be between 0 and 1, got {}", value),
        ));
    }
    Ok(())
}

/// Converts a non-negative duration to a sample count.
///
/// Rounds to the nearest sample. Infinite durations saturate to `usize::MAX`.
pub(crate) fn samples_for(seconds: f64, sample_rate: u32) -> usize {
    (seconds * sample_rate as f64).round() as usize
}
