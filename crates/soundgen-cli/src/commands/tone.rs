//! Tone command implementation
//!
//! Renders a single waveform straight from command-line flags.

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use soundgen_core::{Sweep, SweepCurve, Tone, Waveform};
use std::process::ExitCode;
use std::time::Instant;

use super::{generation_failed, write_output};

/// Waveform shape selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    Sine,
    Triangle,
    Square,
    Sawtooth,
    Pulse,
    Noise,
    Sweep,
}

/// Sweep curve selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Curve {
    Linear,
    Exponential,
}

/// Waveform flags of the `tone` command.
#[derive(Debug, Clone, Args)]
pub struct ToneArgs {
    /// Waveform shape
    #[arg(long, value_enum, default_value_t = Shape::Sine)]
    pub shape: Shape,

    /// Frequency in Hz (start frequency for sweeps)
    #[arg(long, default_value_t = soundgen_spec::DEFAULT_FREQUENCY)]
    pub frequency: f64,

    /// End frequency in Hz (sweeps only)
    #[arg(long)]
    pub end_frequency: Option<f64>,

    /// Sweep curve (sweeps only)
    #[arg(long, value_enum, default_value_t = Curve::Linear)]
    pub curve: Curve,

    /// Duration in seconds
    #[arg(long, default_value_t = soundgen_spec::DEFAULT_DURATION_SECONDS)]
    pub duration: f64,

    /// Peak amplitude
    #[arg(long, default_value_t = soundgen_spec::DEFAULT_AMPLITUDE, allow_negative_numbers = true)]
    pub amplitude: f64,

    /// Phase offset in radians
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub phase: f64,

    /// Fraction of each cycle spent high (pulse only)
    #[arg(long, default_value_t = 0.5)]
    pub duty: f64,

    /// Sample rate in Hz
    #[arg(long, default_value_t = soundgen_spec::DEFAULT_SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Noise seed (noise only, default: random)
    #[arg(long)]
    pub seed: Option<u32>,
}

impl ToneArgs {
    /// Builds the waveform these flags describe.
    ///
    /// Fails when a sweep has no end frequency.
    pub fn waveform(&self) -> Result<Waveform> {
        let tone = Tone::new(self.frequency, self.amplitude).with_phase(self.phase);

        Ok(match self.shape {
            Shape::Sine => Waveform::Sine(tone),
            Shape::Triangle => Waveform::Triangle(tone),
            Shape::Square => Waveform::Square(tone),
            Shape::Sawtooth => Waveform::Sawtooth(tone),
            Shape::Pulse => Waveform::Pulse {
                tone,
                duty: self.duty,
            },
            Shape::Noise => Waveform::WhiteNoise {
                amplitude: self.amplitude,
                seed: self.seed,
            },
            Shape::Sweep => {
                let Some(end_frequency) = self.end_frequency else {
                    bail!("--end-frequency is required for --shape sweep");
                };
                Waveform::Sweep(Sweep {
                    start_frequency: self.frequency,
                    end_frequency,
                    amplitude: self.amplitude,
                    phase: self.phase,
                    curve: match self.curve {
                        Curve::Linear => SweepCurve::Linear,
                        Curve::Exponential => SweepCurve::Exponential,
                    },
                })
            }
        })
    }
}

/// Run the tone command
///
/// # Arguments
/// * `args` - Waveform flags
/// * `output` - Output WAV path
///
/// # Returns
/// Exit code: 0 success, 2 generation error. Missing flags surface as errors.
pub fn run(args: &ToneArgs, output: &str) -> Result<ExitCode> {
    let start = Instant::now();
    let waveform = args.waveform()?;

    println!(
        "{} {} ({} s @ {} Hz)",
        "Rendering:".cyan().bold(),
        waveform.kind(),
        args.duration,
        args.sample_rate
    );

    let buffer = match waveform.generate(args.duration, args.sample_rate) {
        Ok(buffer) => buffer,
        Err(e) => return Ok(generation_failed(&e)),
    };

    Ok(write_output(&buffer, output, start))
}
