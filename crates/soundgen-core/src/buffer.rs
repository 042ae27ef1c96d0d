//! The shared waveform value type.

use crate::error::{AudioError, AudioResult};
use crate::validation;

/// An ordered run of mono samples at a fixed sample rate.
///
/// Buffers are values: every operation in this crate returns a new buffer and
/// leaves its inputs untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Wraps existing samples.
    ///
    /// # Errors
    /// `InvalidParameter` if `sample_rate` is 0.
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> AudioResult<Self> {
        validation::sample_rate(sample_rate)?;
        Ok(Self::from_parts(samples, sample_rate))
    }

    /// Creates a buffer of `len` zero samples.
    pub fn silence(len: usize, sample_rate: u32) -> AudioResult<Self> {
        Self::new(vec![0.0; len], sample_rate)
    }

    /// Wraps samples whose sample rate was already validated.
    pub(crate) fn from_parts(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Sample values.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Largest absolute sample value, 0 for an empty buffer.
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0, |peak, s| peak.max(s.abs()))
    }

    /// Consumes the buffer and returns its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Fails with `IncompatibleBuffers` unless both buffers share a sample rate.
    pub fn ensure_same_rate(&self, other: &SampleBuffer) -> AudioResult<()> {
        if self.sample_rate != other.sample_rate {
            return Err(AudioError::incompatible(self.sample_rate, other.sample_rate));
        }
        Ok(())
    }

    /// Multiplies a gain curve into this buffer.
    ///
    /// The result has this buffer's length. Samples past the end of `gain`
    /// are silenced.
    ///
    /// # Errors
    /// `IncompatibleBuffers` if the sample rates differ.
    pub fn apply_gain(&self, gain: &SampleBuffer) -> AudioResult<SampleBuffer> {
        self.ensure_same_rate(gain)?;

        let samples = self
            .samples
            .iter()
            .enumerate()
            .map(|(i, &s)| s * gain.samples.get(i).copied().unwrap_or(0.0))
            .collect();

        Ok(Self::from_parts(samples, self.sample_rate))
    }
}

impl AsRef<[f64]> for SampleBuffer {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}
