//! Recipe rendering.
//!
//! Runs the full chain for one [`Recipe`]: generate the source, apply the
//! envelope, then cross-fade into the second source.

use soundgen_spec::recipe::{self, Blend, Envelope, Recipe, Source};

use crate::buffer::SampleBuffer;
use crate::envelope::AdsrParams;
use crate::error::AudioResult;
use crate::interpolate::{interpolate, BlendCurve};
use crate::rng::{derive_component_seed, resolve_seed};
use crate::synthesis::{Sweep, SweepCurve, Tone, Waveform};

/// Result of rendering a recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    /// The rendered buffer.
    pub buffer: SampleBuffer,
    /// Seed that unseeded noise sources were derived from.
    pub base_seed: u32,
}

/// Renders a recipe.
///
/// Noise sources without their own seed get one derived from `base_seed`, so
/// passing the same base seed reproduces the render exactly. With `None` a
/// fresh base seed is drawn and reported in the result.
pub fn render(recipe: &Recipe, base_seed: Option<u32>) -> AudioResult<RenderResult> {
    let base_seed = resolve_seed(base_seed);
    let duration = recipe.duration_seconds;
    let sample_rate = recipe.sample_rate;

    let source = waveform_for(&recipe.source, derive_component_seed(base_seed, "source"));
    let mut buffer = source.generate(duration, sample_rate)?;

    if let Some(envelope) = &recipe.envelope {
        buffer = adsr_for(envelope).apply(&buffer)?;
    }

    if let Some(crossfade) = &recipe.crossfade {
        let target = waveform_for(&crossfade.to, derive_component_seed(base_seed, "crossfade"))
            .generate(duration, sample_rate)?;
        buffer = interpolate(&buffer, &target, &blend_for(&crossfade.curve))?;
    }

    tracing::debug!(
        source = recipe.source.kind(),
        envelope = recipe.envelope.is_some(),
        crossfade = recipe.crossfade.is_some(),
        samples = buffer.len(),
        base_seed,
        "rendered recipe"
    );

    Ok(RenderResult { buffer, base_seed })
}

/// Maps a recipe source onto a waveform. `fallback_seed` is used for noise
/// without an explicit seed.
pub fn waveform_for(source: &Source, fallback_seed: u32) -> Waveform {
    let tone = |t: &recipe::Tone| Tone::new(t.frequency, t.amplitude).with_phase(t.phase);

    match source {
        Source::Sine(t) => Waveform::Sine(tone(t)),
        Source::Triangle(t) => Waveform::Triangle(tone(t)),
        Source::Square(t) => Waveform::Square(tone(t)),
        Source::Sawtooth(t) => Waveform::Sawtooth(tone(t)),
        Source::Pulse {
            frequency,
            amplitude,
            phase,
            duty,
        } => Waveform::Pulse {
            tone: Tone::new(*frequency, *amplitude).with_phase(*phase),
            duty: *duty,
        },
        Source::WhiteNoise { amplitude, seed } => Waveform::WhiteNoise {
            amplitude: *amplitude,
            seed: Some(seed.unwrap_or(fallback_seed)),
        },
        Source::Sweep {
            start_frequency,
            end_frequency,
            amplitude,
            phase,
            curve,
        } => Waveform::Sweep(Sweep {
            start_frequency: *start_frequency,
            end_frequency: *end_frequency,
            amplitude: *amplitude,
            phase: *phase,
            curve: match curve {
                recipe::SweepCurve::Linear => SweepCurve::Linear,
                recipe::SweepCurve::Exponential => SweepCurve::Exponential,
            },
        }),
    }
}

fn adsr_for(envelope: &Envelope) -> AdsrParams {
    AdsrParams::new(
        envelope.attack,
        envelope.decay,
        envelope.sustain_time.unwrap_or(f64::INFINITY),
        envelope.sustain_level,
        envelope.release,
    )
}

fn blend_for(blend: &Blend) -> BlendCurve {
    match blend {
        Blend::Linear => BlendCurve::Linear,
        Blend::Constant { weight } => BlendCurve::Constant(*weight),
        Blend::Weights { weights } => BlendCurve::Weights(weights.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioError;
    use pretty_assertions::assert_eq;

    fn recipe(json: &str) -> Recipe {
        Recipe::from_json(json).unwrap()
    }

    #[test]
    fn test_render_plain_source() {
        let r = recipe(
            r#"{ "duration_seconds": 0.01, "sample_rate": 8000,
                 "source": { "type": "sine", "frequency": 2000, "amplitude": 1.0 } }"#,
        );
        let out = render(&r, Some(0)).unwrap();

        assert_eq!(out.buffer.len(), 80);
        assert_eq!(out.buffer.sample_rate(), 8000);
        assert!(out.buffer.samples()[2].abs() < 1e-9);
        assert!((out.buffer.samples()[1] - 1.0).abs() < 1e-9);
        assert_eq!(out.base_seed, 0);
    }

    #[test]
    fn test_render_applies_envelope() {
        let r = recipe(
            r#"{ "duration_seconds": 0.01, "sample_rate": 1000,
                 "source": { "type": "square", "frequency": 1, "amplitude": 1.0 },
                 "envelope": { "attack": 0.0, "decay": 0.0, "sustain_level": 0.5,
                               "release": 0.0 } }"#,
        );
        let out = render(&r, Some(0)).unwrap();
        assert_eq!(out.buffer.samples(), &[0.5; 10]);
    }

    #[test]
    fn test_render_crossfade_into_second_source() {
        let r = recipe(
            r#"{ "duration_seconds": 0.003, "sample_rate": 1000,
                 "source": { "type": "square", "frequency": 1, "amplitude": 1.0 },
                 "crossfade": { "to": { "type": "square", "frequency": 1, "amplitude": 0.0 } } }"#,
        );
        let out = render(&r, Some(0)).unwrap();
        assert_eq!(out.buffer.samples(), &[1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_unseeded_noise_follows_base_seed() {
        let r = recipe(
            r#"{ "duration_seconds": 0.01, "sample_rate": 8000,
                 "source": { "type": "white_noise" } }"#,
        );
        let a = render(&r, Some(7)).unwrap();
        let b = render(&r, Some(7)).unwrap();
        let c = render(&r, Some(8)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a.buffer, c.buffer);
    }

    #[test]
    fn test_crossfade_noise_uses_independent_stream() {
        let r = recipe(
            r#"{ "duration_seconds": 0.01, "sample_rate": 8000,
                 "source": { "type": "white_noise", "amplitude": 1.0 },
                 "crossfade": { "to": { "type": "white_noise", "amplitude": 1.0 },
                                "curve": { "type": "constant", "weight": 1.0 } } }"#,
        );
        let seed = 11;
        let out = render(&r, Some(seed)).unwrap();
        let source = Waveform::WhiteNoise {
            amplitude: 1.0,
            seed: Some(derive_component_seed(seed, "source")),
        }
        .generate(0.01, 8000)
        .unwrap();

        assert_ne!(out.buffer, source);
    }

    #[test]
    fn test_explicit_noise_seed_wins() {
        let source = Source::WhiteNoise {
            amplitude: 0.2,
            seed: Some(99),
        };
        assert_eq!(
            waveform_for(&source, 1),
            Waveform::WhiteNoise {
                amplitude: 0.2,
                seed: Some(99)
            }
        );
    }

    #[test]
    fn test_invalid_recipe_parameter_is_reported() {
        let r = recipe(
            r#"{ "duration_seconds": 1.0, "sample_rate": 8000,
                 "source": { "type": "pulse", "duty": 1.5 } }"#,
        );
        let err = render(&r, Some(0)).unwrap_err();
        assert!(matches!(err, AudioError::InvalidParameter { ref name, .. } if name == "duty"));
    }
}
