//! Render recipe types.
//!
//! A recipe describes exactly one render: a source shape, an optional ADSR
//! envelope, and an optional cross-fade into a second source.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RecipeError;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 48000;
/// Default render length in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 5.0;
/// Default oscillator frequency in Hz.
pub const DEFAULT_FREQUENCY: f64 = 440.0;
/// Default peak amplitude.
pub const DEFAULT_AMPLITUDE: f64 = 0.2;

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_duration() -> f64 {
    DEFAULT_DURATION_SECONDS
}

fn default_frequency() -> f64 {
    DEFAULT_FREQUENCY
}

fn default_amplitude() -> f64 {
    DEFAULT_AMPLITUDE
}

/// A single render request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    /// Length of the render in seconds.
    #[serde(default = "default_duration")]
    pub duration_seconds: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Primary signal source.
    pub source: Source,
    /// Optional ADSR envelope applied to the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope: Option<Envelope>,
    /// Optional cross-fade from the (enveloped) source into a second source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossfade: Option<Crossfade>,
}

impl Recipe {
    /// Creates a recipe with default duration and sample rate.
    pub fn new(source: Source) -> Self {
        Self {
            duration_seconds: DEFAULT_DURATION_SECONDS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            source,
            envelope: None,
            crossfade: None,
        }
    }

    /// Parses a recipe from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RecipeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a recipe file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RecipeError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serializes the recipe to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, RecipeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parameters shared by the periodic shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    /// Frequency in Hz.
    #[serde(default = "default_frequency")]
    pub frequency: f64,
    /// Peak amplitude.
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Phase offset in radians.
    #[serde(default)]
    pub phase: f64,
}

impl Default for Tone {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            amplitude: DEFAULT_AMPLITUDE,
            phase: 0.0,
        }
    }
}

/// Sweep curve type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepCurve {
    /// Frequency changes linearly over time.
    #[default]
    Linear,
    /// Frequency changes by a constant ratio per unit time.
    Exponential,
}

/// Signal source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Source {
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
        /// Frequency in Hz.
        #[serde(default = "default_frequency")]
        frequency: f64,
        /// Peak amplitude.
        #[serde(default = "default_amplitude")]
        amplitude: f64,
        /// Phase offset in radians.
        #[serde(default)]
        phase: f64,
        /// Fraction of each cycle spent high, in [0, 1].
        duty: f64,
    },
    /// Uniform white noise.
    WhiteNoise {
        /// Peak amplitude.
        #[serde(default = "default_amplitude")]
        amplitude: f64,
        /// Seed for reproducible output. Omit for a fresh draw on every render.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u32>,
    },
    /// Phase-continuous sine sweep.
    Sweep {
        /// Frequency at the start of the render in Hz.
        start_frequency: f64,
        /// Frequency at the end of the render in Hz.
        end_frequency: f64,
        /// Peak amplitude.
        #[serde(default = "default_amplitude")]
        amplitude: f64,
        /// Phase offset in radians.
        #[serde(default)]
        phase: f64,
        /// Sweep curve.
        #[serde(default)]
        curve: SweepCurve,
    },
}

impl Source {
    /// Short name used in logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Source::Sine(_) => "sine",
            Source::Triangle(_) => "triangle",
            Source::Square(_) => "square",
            Source::Sawtooth(_) => "sawtooth",
            Source::Pulse { .. } => "pulse",
            Source::WhiteNoise { .. } => "white_noise",
            Source::Sweep { .. } => "sweep",
        }
    }
}

/// ADSR envelope parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain time in seconds. Omit to hold until the release must begin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustain_time: Option<f64>,
    /// Sustain level (0.0 to 1.0).
    pub sustain_level: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.1,
            sustain_time: None,
            sustain_level: 0.5,
            release: 0.2,
        }
    }
}

/// Cross-fade into a second source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Crossfade {
    /// Source faded in over the render.
    pub to: Source,
    /// Mix weight curve.
    #[serde(default)]
    pub curve: Blend,
}

/// Mix weight curve for a cross-fade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Blend {
    /// Linear ramp from the first source to the second.
    #[default]
    Linear,
    /// Fixed mix weight.
    Constant {
        /// Weight of the second source, in [0, 1].
        weight: f64,
    },
    /// Explicit per-sample weights.
    Weights {
        /// Weight of the second source for each sample, in [0, 1].
        weights: Vec<f64>,
    },
}
