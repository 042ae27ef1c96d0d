//! White noise generation.

use rand::Rng;

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;
use crate::rng::{create_rng, resolve_seed};
use crate::validation;

use super::sample_count;

/// Generates uniform white noise in `[-amplitude, amplitude]`.
///
/// With `Some(seed)` the output is reproducible. With `None` a fresh seed is
/// drawn for this call only.
pub fn white_noise(
    amplitude: f64,
    seed: Option<u32>,
    duration: f64,
    sample_rate: u32,
) -> AudioResult<SampleBuffer> {
    validation::finite("amplitude", amplitude)?;
    let num_samples = sample_count(duration, sample_rate)?;

    let seed = resolve_seed(seed);
    tracing::trace!(seed, num_samples, "white noise");

    let mut rng = create_rng(seed);
    let samples = (0..num_samples)
        .map(|_| amplitude * rng.gen_range(-1.0..=1.0))
        .collect();

    Ok(SampleBuffer::from_parts(samples, sample_rate))
}
