//! Encoded WAV output.

use std::io;

use crate::buffer::SampleBuffer;

use super::format::WavFormat;
use super::pcm::pcm_hash;
use super::writer::{samples_to_pcm16, write_wav_to_vec};

/// A buffer encoded as a complete WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a buffer as mono 16-bit PCM.
    pub fn from_buffer(buffer: &SampleBuffer) -> io::Result<Self> {
        let pcm = samples_to_pcm16(buffer.samples());
        let format = WavFormat::mono(buffer.sample_rate());

        Ok(Self {
            wav_data: write_wav_to_vec(&format, &pcm)?,
            pcm_hash: pcm_hash(&pcm),
            sample_rate: buffer.sample_rate(),
            num_samples: buffer.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
