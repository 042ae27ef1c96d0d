//! Cross-fades between two buffers.

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};
use crate::validation;

/// Mix weight curve. A weight of 0 yields the first buffer, 1 the second.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BlendCurve {
    /// `w(n) = n / (N - 1)` over the shorter buffer's length `N`.
    #[default]
    Linear,
    /// The same weight for every sample.
    Constant(f64),
    /// One weight per output sample; extra weights are ignored.
    Weights(Vec<f64>),
}

impl BlendCurve {
    /// Checks the curve against an output length of `len` samples.
    fn validate(&self, len: usize) -> AudioResult<()> {
        match self {
            BlendCurve::Linear => Ok(()),
            BlendCurve::Constant(w) => validation::unit_interval("weight", *w),
            BlendCurve::Weights(weights) => {
                if weights.len() < len {
                    return Err(AudioError::invalid_param(
                        "weights",
                        format!("expected at least {} weights, got {}", len, weights.len()),
                    ));
                }
                weights[..len]
                    .iter()
                    .try_for_each(|w| validation::unit_interval("weights", *w))
            }
        }
    }

    /// Weight at sample `n` of an `len`-sample blend.
    #[inline]
    fn weight(&self, n: usize, len: usize) -> f64 {
        match self {
            BlendCurve::Linear if len > 1 => n as f64 / (len - 1) as f64,
            BlendCurve::Linear => 0.0,
            BlendCurve::Constant(w) => *w,
            BlendCurve::Weights(weights) => weights[n],
        }
    }
}

/// Linear cross-fade from `a` to `b` over the shorter of the two.
///
/// Shorthand for [`interpolate`] with [`BlendCurve::Linear`].
pub fn crossfade(a: &SampleBuffer, b: &SampleBuffer) -> AudioResult<SampleBuffer> {
    interpolate(a, b, &BlendCurve::Linear)
}

/// Blends `a` into `b` sample by sample: `a[n]·(1 - w(n)) + b[n]·w(n)`.
///
/// The output holds `min(a.len(), b.len())` samples at the shared sample rate.
///
/// # Errors
/// `IncompatibleBuffers` if the sample rates differ; `InvalidParameter` if a
/// weight lies outside [0, 1] or too few weights are supplied.
pub fn interpolate(
    a: &SampleBuffer,
    b: &SampleBuffer,
    curve: &BlendCurve,
) -> AudioResult<SampleBuffer> {
    a.ensure_same_rate(b)?;
    let len = a.len().min(b.len());
    curve.validate(len)?;

    if a.len() != b.len() {
        tracing::debug!(
            left = a.len(),
            right = b.len(),
            "cross-fade truncated to shorter buffer"
        );
    }

    let samples = a
        .samples()
        .iter()
        .zip(b.samples())
        .enumerate()
        .map(|(n, (&x, &y))| {
            let w = curve.weight(n, len);
            x * (1.0 - w) + y * w
        })
        .collect();

    Ok(SampleBuffer::from_parts(samples, a.sample_rate()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn buffer(samples: &[f64], rate: u32) -> SampleBuffer {
        SampleBuffer::new(samples.to_vec(), rate).unwrap()
    }

    #[test]
    fn test_linear_crossfade() {
        let a = buffer(&[1.0, 1.0, 1.0], 3);
        let b = buffer(&[0.0, 0.0, 0.0], 3);

        let out = crossfade(&a, &b).unwrap();
        assert_eq!(out.samples(), &[1.0, 0.5, 0.0]);
        assert_eq!(out.sample_rate(), 3);
    }

    #[test]
    fn test_output_length_is_shorter_input() {
        let a = buffer(&[1.0; 5], 10);
        let b = buffer(&[0.0; 3], 10);

        let out = crossfade(&a, &b).unwrap();
        assert_eq!(out.samples(), &[1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let a = buffer(&[], 10);
        let b = buffer(&[1.0, 2.0], 10);

        assert!(crossfade(&a, &b).unwrap().is_empty());
        assert!(interpolate(&b, &a, &BlendCurve::Weights(Vec::new()))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_single_sample_keeps_first_buffer() {
        let out = crossfade(&buffer(&[0.25], 10), &buffer(&[1.0], 10)).unwrap();
        assert_eq!(out.samples(), &[0.25]);
    }

    #[test]
    fn test_mismatched_rates() {
        let err = crossfade(&buffer(&[1.0], 44100), &buffer(&[1.0], 48000)).unwrap_err();
        assert!(matches!(
            err,
            AudioError::IncompatibleBuffers {
                left: 44100,
                right: 48000
            }
        ));
    }

    #[test]
    fn test_constant_weight() {
        let a = buffer(&[1.0, -1.0], 10);
        let b = buffer(&[0.0, 1.0], 10);

        let out = interpolate(&a, &b, &BlendCurve::Constant(0.25)).unwrap();
        assert_eq!(out.samples(), &[0.75, -0.5]);

        assert!(interpolate(&a, &b, &BlendCurve::Constant(1.5)).is_err());
    }

    #[test]
    fn test_explicit_weights() {
        let a = buffer(&[1.0, 1.0, 1.0], 10);
        let b = buffer(&[0.0, 0.0, 0.0], 10);

        let out = interpolate(&a, &b, &BlendCurve::Weights(vec![1.0, 0.0, 0.5, 0.9])).unwrap();
        assert_eq!(out.samples(), &[0.0, 1.0, 0.5]);
    }

    #[test]
    fn test_explicit_weights_validation() {
        let a = buffer(&[1.0, 1.0, 1.0], 10);
        let b = buffer(&[0.0, 0.0, 0.0], 10);

        let short = interpolate(&a, &b, &BlendCurve::Weights(vec![0.5, 0.5])).unwrap_err();
        assert!(matches!(short, AudioError::InvalidParameter { .. }));

        let out_of_range =
            interpolate(&a, &b, &BlendCurve::Weights(vec![0.5, -0.5, 0.5])).unwrap_err();
        assert!(matches!(out_of_range, AudioError::InvalidParameter { .. }));
    }
}
