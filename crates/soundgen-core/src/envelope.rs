//! ADSR envelopes.
//!
//! [`AdsrParams::apply`] shapes a finished buffer with an Attack-Decay-Sustain-
//! Release gain curve. Phases that do not fit are truncated in order (attack,
//! then decay, then release) and sustain takes whatever is left, so applying
//! an envelope never fails because of the buffer length.
//!
//! [`AdsrParams::press_curve`] instead builds a standalone curve for a key held
//! for a given time, for use with [`SampleBuffer::apply_gain`].

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};
use crate::validation::{self, samples_for};

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain time in seconds. `f64::INFINITY` holds until release must begin.
    pub sustain: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain_level: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for AdsrParams {
    fn default() -> Self {
        Self::gate(0.01, 0.1, 0.5, 0.2)
    }
}

impl AdsrParams {
    /// Creates envelope parameters with an explicit sustain time.
    pub fn new(attack: f64, decay: f64, sustain: f64, sustain_level: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain,
            sustain_level,
            release,
        }
    }

    /// Creates an envelope whose release ends exactly at the buffer's tail.
    pub fn gate(attack: f64, decay: f64, sustain_level: f64, release: f64) -> Self {
        Self::new(attack, decay, f64::INFINITY, sustain_level, release)
    }

    /// Creates a percussive envelope (no sustain).
    pub fn percussive(attack: f64, decay: f64) -> Self {
        Self::new(attack, decay, 0.0, 0.0, 0.0)
    }

    /// Checks durations and sustain level.
    ///
    /// # Errors
    /// `InvalidParameter` for a negative or NaN duration, or a sustain level
    /// outside [0, 1].
    pub fn validate(&self) -> AudioResult<()> {
        validation::non_negative("attack", self.attack)?;
        validation::non_negative("decay", self.decay)?;
        validation::non_negative_or_infinite("sustain", self.sustain)?;
        validation::non_negative("release", self.release)?;
        validation::unit_interval("sustain_level", self.sustain_level)
    }

    /// Lays the phases out over `len` samples, truncating whatever does not fit.
    pub fn phase_lengths(&self, len: usize, sample_rate: u32) -> PhaseLengths {
        let wanted_release = samples_for(self.release, sample_rate);

        let attack = samples_for(self.attack, sample_rate).min(len);
        let mut remaining = len - attack;
        let decay = samples_for(self.decay, sample_rate).min(remaining);
        remaining -= decay;
        let release = wanted_release.min(remaining);
        remaining -= release;
        let sustain = samples_for(self.sustain, sample_rate).min(remaining);
        let closed = remaining - sustain;

        let lengths = PhaseLengths {
            attack,
            decay,
            sustain,
            release,
            closed,
        };
        if release < wanted_release {
            tracing::debug!(?lengths, len, "envelope truncated to fit buffer");
        }
        lengths
    }

    /// Per-sample gain for a buffer of `len` samples.
    pub fn gain_curve(&self, len: usize, sample_rate: u32) -> AudioResult<Vec<f64>> {
        self.validate()?;
        validation::sample_rate(sample_rate)?;

        let phases = self.phase_lengths(len, sample_rate);
        let mut curve = Vec::with_capacity(len);
        ramp(&mut curve, 0.0, 1.0, phases.attack);
        ramp(&mut curve, 1.0, self.sustain_level, phases.decay);
        curve.extend(std::iter::repeat(self.sustain_level).take(phases.sustain));
        ramp(&mut curve, self.sustain_level, 0.0, phases.release);
        curve.extend(std::iter::repeat(0.0).take(phases.closed));

        debug_assert_eq!(curve.len(), len);
        Ok(curve)
    }

    /// Applies the envelope to `input`, returning a new buffer of the same
    /// length and sample rate.
    pub fn apply(&self, input: &SampleBuffer) -> AudioResult<SampleBuffer> {
        let curve = self.gain_curve(input.len(), input.sample_rate())?;
        let samples = input
            .samples()
            .iter()
            .zip(&curve)
            .map(|(s, g)| s * g)
            .collect();

        Ok(SampleBuffer::from_parts(samples, input.sample_rate()))
    }

    /// Builds the gain curve of a key held for `press_time` seconds.
    ///
    /// The sustain time is ignored; the key press decides how long the sustain
    /// level holds. Releasing the key early changes the shape:
    ///
    /// - during the attack: the attack still completes, then the release falls
    ///   from full level;
    /// - during the decay: the decay stops at the level it reached and the
    ///   release, shortened by the elapsed decay time, falls from there.
    ///
    /// The curve length is independent of any signal; combine it with
    /// [`SampleBuffer::apply_gain`].
    ///
    /// # Errors
    /// `InvalidParameter` for invalid envelope values, a negative or
    /// non-finite `press_time`, or a curve too long to allocate.
    pub fn press_curve(&self, press_time: f64, sample_rate: u32) -> AudioResult<SampleBuffer> {
        self.validate()?;
        validation::non_negative("press_time", press_time)?;
        validation::sample_rate(sample_rate)?;

        let released_in_attack = self.attack > press_time;
        let target = if released_in_attack {
            1.0
        } else {
            self.sustain_level
        };

        let decay = (press_time - self.attack).clamp(0.0, self.decay);
        let decay_fraction = if self.decay > 0.0 {
            decay / self.decay
        } else {
            1.0
        };
        let level = (1.0 - decay_fraction) + decay_fraction * target;
        let hold = (press_time - self.attack - decay).max(0.0);
        let release = if decay_fraction < 1.0 {
            (self.release - decay).max(0.0)
        } else {
            self.release
        };

        let attack_len = samples_for(self.attack, sample_rate);
        let decay_len = samples_for(decay, sample_rate);
        let hold_len = samples_for(hold, sample_rate);
        let release_len = samples_for(release, sample_rate);

        let total = [decay_len, hold_len, release_len]
            .into_iter()
            .try_fold(attack_len, usize::checked_add)
            .ok_or_else(|| AudioError::invalid_param("press_time", "curve length overflows"))?;

        let mut curve = Vec::new();
        curve.try_reserve_exact(total).map_err(|_| {
            AudioError::invalid_param(
                "press_time",
                format!("cannot allocate a {}-sample curve", total),
            )
        })?;
        ramp(&mut curve, 0.0, 1.0, attack_len);
        ramp(&mut curve, 1.0, level, decay_len);
        curve.extend(std::iter::repeat(level).take(hold_len));
        ramp(&mut curve, level, 0.0, release_len);

        Ok(SampleBuffer::from_parts(curve, sample_rate))
    }
}

/// Sample counts of each envelope phase after truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseLengths {
    /// Attack samples.
    pub attack: usize,
    /// Decay samples.
    pub decay: usize,
    /// Sustain samples.
    pub sustain: usize,
    /// Release samples.
    pub release: usize,
    /// Trailing samples after the release, held at zero gain.
    pub closed: usize,
}

/// Appends `len` values moving linearly from `from` to `to`, both inclusive.
///
/// A single-value ramp holds `to`.
fn ramp(out: &mut Vec<f64>, from: f64, to: f64, len: usize) {
    match len {
        0 => {}
        1 => out.push(to),
        _ => {
            let step = (to - from) / (len - 1) as f64;
            out.extend((0..len - 1).map(|i| from + step * i as f64));
            out.push(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    fn linspace(from: f64, to: f64, len: usize) -> Vec<f64> {
        let mut out = Vec::new();
        ramp(&mut out, from, to, len);
        out
    }

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(0.5, 0.0, 1), vec![0.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_adsr_default() {
        let params = AdsrParams::default();
        assert_eq!(params.attack, 0.01);
        assert_eq!(params.decay, 0.1);
        assert_eq!(params.sustain_level, 0.5);
        assert_eq!(params.release, 0.2);
        assert!(params.sustain.is_infinite());
    }

    #[test]
    fn test_phase_lengths_fit() {
        let params = AdsrParams::new(0.1, 0.2, 0.3, 0.5, 0.1);
        let phases = params.phase_lengths(1000, 1000);
        assert_eq!(
            phases,
            PhaseLengths {
                attack: 100,
                decay: 200,
                sustain: 300,
                release: 100,
                closed: 300,
            }
        );
    }

    #[test]
    fn test_phase_lengths_truncate_in_order() {
        let params = AdsrParams::new(0.4, 0.4, 0.4, 0.5, 0.4);

        // Release loses first, then sustain is squeezed out.
        let phases = params.phase_lengths(1000, 1000);
        assert_eq!((phases.attack, phases.decay), (400, 400));
        assert_eq!((phases.release, phases.sustain, phases.closed), (200, 0, 0));

        // Attack alone overflows a short buffer.
        let phases = params.phase_lengths(300, 1000);
        assert_eq!(
            (phases.attack, phases.decay, phases.release, phases.sustain),
            (300, 0, 0, 0)
        );
    }

    #[test]
    fn test_gate_release_ends_at_tail() {
        let params = AdsrParams::gate(0.1, 0.1, 0.5, 0.2);
        let curve = params.gain_curve(1000, 1000).unwrap();

        assert_eq!(curve.len(), 1000);
        assert_eq!(curve[0], 0.0);
        assert_eq!(curve[99], 1.0);
        assert_eq!(curve[199], 0.5);
        assert_eq!(curve[500], 0.5);
        assert_eq!(curve[800], 0.5);
        assert_eq!(curve[999], 0.0);
    }

    #[test]
    fn test_short_envelope_closes() {
        let params = AdsrParams::new(0.01, 0.01, 0.01, 0.5, 0.01);
        let curve = params.gain_curve(1000, 1000).unwrap();

        assert!(curve[40..].iter().all(|&g| g == 0.0));
        assert_eq!(curve[29], 0.5);
    }

    #[test]
    fn test_unit_envelope_is_identity() {
        let input = SampleBuffer::new(vec![0.7; 64], 64).unwrap();
        let params = AdsrParams::gate(0.0, 0.0, 1.0, 0.0);

        let output = params.apply(&input).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_overlong_envelope_keeps_length_and_closes() {
        let input = SampleBuffer::new(vec![1.0; 100], 100).unwrap();
        let params = AdsrParams::new(0.3, 0.3, 0.5, 0.5, 0.8);

        let output = params.apply(&input).unwrap();
        assert_eq!(output.len(), 100);
        assert_eq!(output.sample_rate(), 100);
        assert_eq!(*output.samples().last().unwrap(), 0.0);
    }

    #[test]
    fn test_attack_and_decay_filling_buffer_leave_no_release() {
        let input = SampleBuffer::new(vec![1.0; 100], 100).unwrap();
        let params = AdsrParams::gate(0.6, 0.6, 0.5, 0.3);

        assert_eq!(
            params.phase_lengths(100, 100),
            PhaseLengths {
                attack: 60,
                decay: 40,
                sustain: 0,
                release: 0,
                closed: 0,
            }
        );

        // Decay is squeezed into the last 40 samples; no release window is left.
        let output = params.apply(&input).unwrap();
        assert_eq!(output.len(), 100);
        assert_eq!(output.samples()[59], 1.0);
        assert_eq!(*output.samples().last().unwrap(), 0.5);
    }

    #[test]
    fn test_empty_buffer() {
        let input = SampleBuffer::new(Vec::new(), 44100).unwrap();
        let output = AdsrParams::default().apply(&input).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_invalid_sustain_level() {
        let input = SampleBuffer::new(vec![1.0; 10], 10).unwrap();
        let err = AdsrParams::gate(0.0, 0.0, 1.5, 0.0)
            .apply(&input)
            .unwrap_err();
        assert!(matches!(err, AudioError::InvalidParameter { ref name, .. } if name == "sustain_level"));
    }

    #[test]
    fn test_negative_duration() {
        let input = SampleBuffer::new(vec![1.0; 10], 10).unwrap();
        for params in [
            AdsrParams::gate(-0.1, 0.0, 0.5, 0.0),
            AdsrParams::gate(0.0, -0.1, 0.5, 0.0),
            AdsrParams::new(0.0, 0.0, -0.1, 0.5, 0.0),
            AdsrParams::gate(0.0, 0.0, 0.5, f64::NAN),
        ] {
            assert!(params.apply(&input).is_err());
        }
    }

    #[test]
    fn test_press_curve_regular() {
        let params = AdsrParams::gate(1.0, 1.0, 0.5, 1.0);
        let curve = params.press_curve(5.0, 400).unwrap();

        let mut expected = linspace(0.0, 1.0, 400);
        expected.extend(linspace(1.0, 0.5, 400));
        expected.extend(vec![0.5; 1200]);
        expected.extend(linspace(0.5, 0.0, 400));

        assert_eq!(curve.sample_rate(), 400);
        assert!(approx_eq(curve.samples(), &expected));
    }

    #[test]
    fn test_press_curve_released_during_attack() {
        let params = AdsrParams::gate(1.0, 1.0, 0.5, 2.0);
        let curve = params.press_curve(0.11, 400).unwrap();

        let mut expected = linspace(0.0, 1.0, 400);
        expected.extend(linspace(1.0, 0.0, 800));
        assert!(approx_eq(curve.samples(), &expected));
    }

    #[test]
    fn test_press_curve_released_at_attack_end() {
        let params = AdsrParams::gate(1.0, 1.0, 0.5, 2.0);
        let curve = params.press_curve(1.0, 400).unwrap();

        let mut expected = linspace(0.0, 1.0, 400);
        expected.extend(linspace(1.0, 0.0, 800));
        assert!(approx_eq(curve.samples(), &expected));
    }

    #[test]
    fn test_press_curve_released_during_decay() {
        let params = AdsrParams::gate(1.0, 1.0, 0.5, 2.0);
        let curve = params.press_curve(1.1, 400).unwrap();

        let mut expected = linspace(0.0, 1.0, 400);
        expected.extend(linspace(1.0, 0.95, 40));
        expected.extend(linspace(0.95, 0.0, 760));
        assert!(approx_eq(curve.samples(), &expected));
    }

    #[test]
    fn test_press_curve_released_at_decay_end() {
        let params = AdsrParams::gate(1.0, 1.0, 0.5, 2.0);
        let curve = params.press_curve(2.0, 400).unwrap();

        let mut expected = linspace(0.0, 1.0, 400);
        expected.extend(linspace(1.0, 0.5, 400));
        expected.extend(linspace(0.5, 0.0, 800));
        assert!(approx_eq(curve.samples(), &expected));
    }

    #[test]
    fn test_press_curve_rejects_unbounded_hold() {
        let params = AdsrParams::new(0.1, 0.1, 0.0, 0.5, 0.1);

        let err = params.press_curve(1e300, 48000).unwrap_err();
        assert!(matches!(err, AudioError::InvalidParameter { ref name, .. } if name == "press_time"));
    }

    #[test]
    fn test_press_curve_with_signal() {
        let params = AdsrParams::gate(0.0, 0.0, 1.0, 0.5);
        let curve = params.press_curve(0.5, 10).unwrap();
        assert_eq!(curve.len(), 10);

        let signal = SampleBuffer::new(vec![1.0; 20], 10).unwrap();
        let shaped = signal.apply_gain(&curve).unwrap();
        assert_eq!(shaped.samples()[0], 1.0);
        assert!(shaped.samples()[10..].iter().all(|&s| s == 0.0));
    }
}
