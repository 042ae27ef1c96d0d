//! soundgen CLI library.
//!
//! Command implementations for the `soundgen` binary: rendering JSON recipes
//! and quick single-shape tones to WAV files.

pub mod commands;
