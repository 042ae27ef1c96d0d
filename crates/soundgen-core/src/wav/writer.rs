//! RIFF/WAVE framing and PCM conversion.

use std::io::{self, Write};

use super::format::WavFormat;

/// Size of the canonical PCM header in bytes.
pub const HEADER_LEN: usize = 44;

/// Builds the canonical 44-byte header for `data_len` bytes of PCM.
///
/// The layout is `RIFF` + size + `WAVE`, a 16-byte `fmt ` chunk (format tag 1),
/// then the `data` chunk preamble. The RIFF size field counts everything after
/// itself, which is `data_len + 36`.
pub(crate) fn header(format: &WavFormat, data_len: usize) -> io::Result<[u8; HEADER_LEN]> {
    let too_large = || {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} bytes of PCM exceed the 4 GiB WAV limit", data_len),
        )
    };
    let data_len = u32::try_from(data_len).map_err(|_| too_large())?;
    let riff_len = data_len.checked_add(HEADER_LEN as u32 - 8).ok_or_else(too_large)?;

    let fields: [&[u8]; 13] = [
        b"RIFF",
        &riff_len.to_le_bytes(),
        b"WAVE",
        b"fmt ",
        &16u32.to_le_bytes(),
        &1u16.to_le_bytes(),
        &format.channels.to_le_bytes(),
        &format.sample_rate.to_le_bytes(),
        &format.byte_rate().to_le_bytes(),
        &format.block_align().to_le_bytes(),
        &format.bits_per_sample.to_le_bytes(),
        b"data",
        &data_len.to_le_bytes(),
    ];

    let mut out = [0u8; HEADER_LEN];
    let mut pos = 0;
    for field in fields {
        out[pos..pos + field.len()].copy_from_slice(field);
        pos += field.len();
    }
    debug_assert_eq!(pos, HEADER_LEN);
    Ok(out)
}

/// Writes a complete WAV file (header then PCM payload) to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    writer.write_all(&header(format, pcm_data.len())?)?;
    writer.write_all(pcm_data)
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Converts f64 samples to 16-bit PCM bytes.
///
/// Samples outside [-1.0, 1.0] are clipped; NaN becomes silence.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        // Float-to-int casts saturate and map NaN to 0.
        let pcm_value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}
