//! Phase-continuous sine sweeps.
//!
//! The angle is the integral of the instantaneous frequency, so the output has
//! no discontinuities however fast the frequency moves.

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;
use crate::oscillator::TWO_PI;
use crate::validation;

use super::sample_count;

/// Frequency sweep curve types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SweepCurve {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Exponential interpolation (perceptually linear for pitch).
    Exponential,
}

/// Sine sweep parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Frequency at t = 0, in Hz.
    pub start_frequency: f64,
    /// Frequency at t = duration, in Hz.
    pub end_frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
    /// Phase offset in radians.
    pub phase: f64,
    /// Sweep curve.
    pub curve: SweepCurve,
}

impl Sweep {
    /// Creates a linear sweep with zero phase.
    pub fn linear(start_frequency: f64, end_frequency: f64, amplitude: f64) -> Self {
        Self {
            start_frequency,
            end_frequency,
            amplitude,
            phase: 0.0,
            curve: SweepCurve::Linear,
        }
    }

    /// Creates an exponential sweep with zero phase.
    pub fn exponential(start_frequency: f64, end_frequency: f64, amplitude: f64) -> Self {
        Self {
            curve: SweepCurve::Exponential,
            ..Self::linear(start_frequency, end_frequency, amplitude)
        }
    }

    fn validate(&self) -> AudioResult<()> {
        validation::positive("start_frequency", self.start_frequency)?;
        validation::positive("end_frequency", self.end_frequency)?;
        validation::finite("amplitude", self.amplitude)?;
        validation::finite("phase", self.phase)
    }

    /// Instantaneous frequency at time `t` of a sweep lasting `duration`.
    pub fn frequency_at(&self, t: f64, duration: f64) -> f64 {
        let (f0, f1) = (self.start_frequency, self.end_frequency);
        let progress = t / duration;
        match self.curve {
            SweepCurve::Linear => f0 + (f1 - f0) * progress,
            SweepCurve::Exponential => f0 * (f1 / f0).powf(progress),
        }
    }

    /// Accumulated angle at time `t`, including the phase offset.
    pub fn angle_at(&self, t: f64, duration: f64) -> f64 {
        let (f0, f1) = (self.start_frequency, self.end_frequency);
        let cycles = match self.curve {
            SweepCurve::Exponential if (f1 / f0 - 1.0).abs() > 1e-12 => {
                let ln_k = (f1 / f0).ln();
                f0 * duration / ln_k * ((t / duration * ln_k).exp() - 1.0)
            }
            // A flat exponential sweep has no curvature; integrate it linearly.
            _ => f0 * t + (f1 - f0) * t * t / (2.0 * duration),
        };
        TWO_PI * cycles + self.phase
    }
}

/// Generates a sine sweep from `start_frequency` to `end_frequency`.
pub fn sine_sweep(sweep: &Sweep, duration: f64, sample_rate: u32) -> AudioResult<SampleBuffer> {
    sweep.validate()?;
    let num_samples = sample_count(duration, sample_rate)?;

    let samples = (0..num_samples)
        .map(|n| {
            let t = n as f64 / sample_rate as f64;
            sweep.amplitude * sweep.angle_at(t, duration).sin()
        })
        .collect();

    Ok(SampleBuffer::from_parts(samples, sample_rate))
}
