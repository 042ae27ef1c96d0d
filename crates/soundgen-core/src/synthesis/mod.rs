//! Signal sources.
//!
//! - `periodic` - sine, triangle, square, sawtooth and pulse oscillators
//! - `noise` - seeded white noise
//! - `sweep` - phase-continuous sine sweeps
//!
//! [`Waveform`] selects one of them together with its parameters.

pub mod noise;
pub mod periodic;
pub mod sweep;

pub use noise::white_noise;
pub use periodic::{pulse_wave, sawtooth_wave, sine_wave, square_wave, triangle_wave, Tone};
pub use sweep::{sine_sweep, Sweep, SweepCurve};

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;
use crate::validation;

/// Number of samples an oscillator emits for `duration` seconds.
///
/// # Errors
/// `InvalidParameter` for a zero sample rate or a negative/non-finite duration.
pub fn sample_count(duration: f64, sample_rate: u32) -> AudioResult<usize> {
    validation::sample_rate(sample_rate)?;
    validation::non_negative("duration", duration)?;
    Ok(validation::samples_for(duration, sample_rate))
}

/// A signal shape and its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waveform {
    /// Sine wave.
    Sine(Tone),
    /// Triangle wave.
    Triangle(Tone),
    /// Square wave.
    Square(Tone),
    /// Sawtooth wave.
    Sawtooth(Tone),
    /// Pulse wave with variable duty cycle.
    Pulse {
        /// Frequency, amplitude and phase.
        tone: Tone,
        /// Fraction of each cycle spent high, in [0, 1].
        duty: f64,
    },
    /// Uniform white noise.
    WhiteNoise {
        /// Peak amplitude.
        amplitude: f64,
        /// Seed for reproducible output.
        seed: Option<u32>,
    },
    /// Phase-continuous sine sweep.
    Sweep(Sweep),
}

impl Waveform {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Waveform::Sine(_) => "sine",
            Waveform::Triangle(_) => "triangle",
            Waveform::Square(_) => "square",
            Waveform::Sawtooth(_) => "sawtooth",
            Waveform::Pulse { .. } => "pulse",
            Waveform::WhiteNoise { .. } => "white_noise",
            Waveform::Sweep(_) => "sweep",
        }
    }

    /// Renders `duration` seconds of this waveform.
    ///
    /// The result holds `round(duration * sample_rate)` samples.
    pub fn generate(&self, duration: f64, sample_rate: u32) -> AudioResult<SampleBuffer> {
        let buffer = match self {
            Waveform::Sine(tone) => sine_wave(tone, duration, sample_rate),
            Waveform::Triangle(tone) => triangle_wave(tone, duration, sample_rate),
            Waveform::Square(tone) => square_wave(tone, duration, sample_rate),
            Waveform::Sawtooth(tone) => sawtooth_wave(tone, duration, sample_rate),
            Waveform::Pulse { tone, duty } => pulse_wave(tone, *duty, duration, sample_rate),
            Waveform::WhiteNoise { amplitude, seed } => {
                white_noise(*amplitude, *seed, duration, sample_rate)
            }
            Waveform::Sweep(sweep) => sine_sweep(sweep, duration, sample_rate),
        }?;

        tracing::debug!(
            kind = self.kind(),
            samples = buffer.len(),
            sample_rate,
            "generated waveform"
        );
        Ok(buffer)
    }
}
