//! Periodic oscillators (sine, triangle, square, sawtooth, pulse).
//!
//! Every sample is computed directly from its index, so there is no phase
//! drift over long renders: `θ = 2π·frequency·n/sample_rate + phase`.

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;
use crate::oscillator::{self, TWO_PI};
use crate::validation;

use super::sample_count;

/// Parameters shared by the periodic shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude. Not clamped.
    pub amplitude: f64,
    /// Phase offset in radians.
    pub phase: f64,
}

impl Tone {
    /// Creates a tone with zero phase.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
            phase: 0.0,
        }
    }

    /// Sets the phase offset in radians.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    fn validate(&self) -> AudioResult<()> {
        validation::positive("frequency", self.frequency)?;
        validation::finite("amplitude", self.amplitude)?;
        validation::finite("phase", self.phase)
    }

    /// Angle at sample `n`.
    #[inline]
    fn angle(&self, n: usize, sample_rate: u32) -> f64 {
        TWO_PI * self.frequency * (n as f64 / sample_rate as f64) + self.phase
    }
}

/// Renders `shape` for `duration` seconds.
fn render<F>(tone: &Tone, duration: f64, sample_rate: u32, shape: F) -> AudioResult<SampleBuffer>
where
    F: Fn(f64) -> f64,
{
    tone.validate()?;
    let num_samples = sample_count(duration, sample_rate)?;

    let samples = (0..num_samples)
        .map(|n| tone.amplitude * shape(tone.angle(n, sample_rate)))
        .collect();

    Ok(SampleBuffer::from_parts(samples, sample_rate))
}

/// Generates a sine wave.
pub fn sine_wave(tone: &Tone, duration: f64, sample_rate: u32) -> AudioResult<SampleBuffer> {
    render(tone, duration, sample_rate, oscillator::sine)
}

/// Generates a triangle wave in phase with [`sine_wave`].
pub fn triangle_wave(tone: &Tone, duration: f64, sample_rate: u32) -> AudioResult<SampleBuffer> {
    render(tone, duration, sample_rate, oscillator::triangle)
}

/// Generates a square wave. No band-limiting is applied.
pub fn square_wave(tone: &Tone, duration: f64, sample_rate: u32) -> AudioResult<SampleBuffer> {
    render(tone, duration, sample_rate, oscillator::square)
}

/// Generates a sawtooth wave. No band-limiting is applied.
pub fn sawtooth_wave(tone: &Tone, duration: f64, sample_rate: u32) -> AudioResult<SampleBuffer> {
    render(tone, duration, sample_rate, oscillator::sawtooth)
}

/// Generates a pulse wave that is high for `duty` of each cycle.
///
/// # Errors
/// `InvalidParameter` if `duty` lies outside [0, 1].
pub fn pulse_wave(
    tone: &Tone,
    duty: f64,
    duration: f64,
    sample_rate: u32,
) -> AudioResult<SampleBuffer> {
    validation::unit_interval("duty", duty)?;
    render(tone, duration, sample_rate, |theta| {
        oscillator::pulse(theta, duty)
    })
}
