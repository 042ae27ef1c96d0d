//! soundgen synthesis core
//!
//! Procedural waveform generation, shaping and export:
//!
//! - **Oscillators** - sine, triangle, square, sawtooth, pulse, white noise and
//!   phase-continuous sweeps, selected through [`Waveform`]
//! - **Envelope** - ADSR gain curves with a fixed truncation policy
//! - **Interpolator** - linear or weighted cross-fades between two buffers
//! - **Exporter** - mono 16-bit PCM WAV files
//!
//! # Determinism
//!
//! Every operation is a pure function of its arguments. Noise takes an explicit
//! seed and uses PCG32; an unseeded call draws a fresh seed for that call only.
//!
//! # Example
//!
//! ```
//! use soundgen_core::{crossfade, AdsrParams, Tone, Waveform};
//!
//! let a = Waveform::Sine(Tone::new(440.0, 0.5)).generate(0.25, 44100)?;
//! let b = Waveform::Triangle(Tone::new(220.0, 0.5)).generate(0.25, 44100)?;
//!
//! let shaped = AdsrParams::gate(0.01, 0.05, 0.7, 0.1).apply(&a)?;
//! let mixed = crossfade(&shaped, &b)?;
//! assert_eq!(mixed.len(), 11025);
//! # Ok::<(), soundgen_core::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`buffer`] - the [`SampleBuffer`] value type
//! - [`oscillator`] - single-sample waveform functions
//! - [`synthesis`] - buffer generators
//! - [`envelope`] - ADSR envelopes
//! - [`interpolate`] - cross-fades
//! - [`zero_crossing`] - splice point search
//! - [`render`] - recipe rendering
//! - [`rng`] - seeded RNG with seed derivation
//! - [`wav`] - deterministic WAV writer

pub mod buffer;
pub mod envelope;
pub mod error;
pub mod interpolate;
pub mod oscillator;
pub mod render;
pub mod rng;
pub mod synthesis;
pub mod wav;
pub mod zero_crossing;

mod validation;

// Re-export main types at crate root
pub use buffer::SampleBuffer;
pub use envelope::{AdsrParams, PhaseLengths};
pub use error::{AudioError, AudioResult};
pub use interpolate::{crossfade, interpolate, BlendCurve};
pub use render::{render, RenderResult};
pub use synthesis::{Sweep, SweepCurve, Tone, Waveform};
pub use wav::WavResult;
pub use zero_crossing::{find_nearest_zero_crossing, Slope};
