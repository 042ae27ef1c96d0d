//! WAV export.
//!
//! Buffers are written as mono 16-bit PCM with no timestamps or variable
//! metadata, so identical buffers always produce identical files. The BLAKE3
//! hash of the PCM payload identifies a render independently of the header.

mod format;
mod pcm;
mod result;
mod writer;


use std::path::Path;
use std::time::Instant;

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;

pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm_hash};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec, HEADER_LEN};

/// Encodes `buffer` and writes it to `path`.
///
/// # Errors
/// `AudioError::Io` if the file cannot be written.
pub fn write_file(buffer: &SampleBuffer, path: impl AsRef<Path>) -> AudioResult<WavResult> {
    let path = path.as_ref();
    let start = Instant::now();

    let result = WavResult::from_buffer(buffer)?;
    std::fs::write(path, &result.wav_data)?;

    tracing::debug!(
        path = %path.display(),
        bytes = result.wav_data.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "wrote WAV file"
    );
    Ok(result)
}
