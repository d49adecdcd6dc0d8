//! The synthesized transfer function and its gain normalization.

use crate::filter::error::DesignError;
use crate::filter::polynomial::evaluate;
use crate::filter::spec::BandShape;
use num::Complex;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Denominator magnitudes below this leave the gain undefined.
pub const GAIN_EPS: f64 = 1e-10;

/// Complex response of the unnormalized transfer function at the three
/// frequencies the summary and gain stages care about: DC, the band
/// centre, and the Nyquist frequency.
#[derive(Clone, Copy, Debug)]
pub struct GainReport {
    pub dc: Complex<f64>,
    pub centre: Complex<f64>,
    pub hf: Complex<f64>,
}

/// A rational transfer function in recurrence form.
///
/// Coefficients are stored with the oldest-history term first
/// (ascending powers of `z`), matching the recurrence
/// `y[n] = sum(b_k * x[n-k]) + sum(a_k * y[n-k])`.  The denominator is
/// monic: its final (highest-degree) coefficient is exactly 1.
///
/// The numerator is *not* pre-divided by `gain`; consumers divide each
/// input sample by `gain` before running the recurrence, which is how
/// the emitted C code applies it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferFunction {
    pub numerator: Vec<f64>,
    pub denominator: Vec<f64>,
    pub gain: f64,
}

impl TransferFunction {
    pub fn num_zeros(&self) -> usize {
        self.numerator.len() - 1
    }

    pub fn num_poles(&self) -> usize {
        self.denominator.len() - 1
    }

    /// Feedback coefficients for the recurrence: the negated
    /// denominator, oldest term first.  The final entry is always -1
    /// and is not applied by consumers.
    pub fn feedback_coeffs(&self) -> Vec<f64> {
        self.denominator.iter().map(|c| -c).collect()
    }

    /// Unnormalized complex response `N(z) / D(z)`.
    pub fn response_at(&self, z: Complex<f64>) -> Complex<f64> {
        evaluate(&self.numerator, z) / evaluate(&self.denominator, z)
    }

    /// Response with the gain applied, i.e. `N(z) / (gain * D(z))`.
    /// Unit magnitude at the band's reference frequency.
    pub fn normalized_response(&self, z: Complex<f64>) -> Complex<f64> {
        self.response_at(z) / self.gain
    }
}

/// Reference points on the unit circle for gain measurement.  The band
/// centre angle comes from the raw (pre-warp) corner frequencies.
pub fn reference_points(alpha1: f64, alpha2: f64) -> (Complex<f64>, Complex<f64>, Complex<f64>) {
    let dc = Complex::new(1.0, 0.0);
    let theta = 2.0 * PI * 0.5 * (alpha1 + alpha2);
    let centre = Complex::new(0.0, theta).exp();
    let hf = Complex::new(-1.0, 0.0);
    (dc, centre, hf)
}

/// Evaluates the unnormalized response at the reference points and
/// derives the band-specific gain.
///
/// Low-pass measures at DC, high-pass at Nyquist, band-pass at the band
/// centre; band-stop takes the geometric mean of the DC and Nyquist
/// responses, its two passband edges.  A vanishing denominator at any
/// point used for the measurement is a `DegenerateGain` failure.
pub fn normalize_gain(
    band: BandShape,
    numerator: &[f64],
    denominator: &[f64],
    alpha1: f64,
    alpha2: f64,
) -> Result<(f64, GainReport), DesignError> {
    let (dc, centre, hf) = reference_points(alpha1, alpha2);

    let respond = |z: Complex<f64>, used: bool| -> Result<Complex<f64>, DesignError> {
        let bot = evaluate(denominator, z);
        if used && bot.norm() < GAIN_EPS {
            return Err(DesignError::DegenerateGain {
                reference: z,
                magnitude: bot.norm(),
            });
        }
        Ok(evaluate(numerator, z) / bot)
    };

    let report = GainReport {
        dc: respond(dc, band == BandShape::LowPass || band == BandShape::BandStop)?,
        centre: respond(centre, band == BandShape::BandPass)?,
        hf: respond(hf, band == BandShape::HighPass || band == BandShape::BandStop)?,
    };

    let gain = match band {
        BandShape::LowPass => report.dc.norm(),
        BandShape::HighPass => report.hf.norm(),
        BandShape::BandPass => report.centre.norm(),
        BandShape::BandStop => (report.dc * report.hf).sqrt().norm(),
    };
    Ok((gain, report))
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_feedback_coeffs_negate_denominator() {
        let tf = TransferFunction {
            numerator: vec![1.0, 2.0, 1.0],
            denominator: vec![0.25, -0.5, 1.0],
            gain: 2.0,
        };
        assert_eq!(tf.feedback_coeffs(), vec![-0.25, 0.5, -1.0]);
        assert_eq!(tf.num_zeros(), 2);
        assert_eq!(tf.num_poles(), 2);
    }

    #[test]
    fn test_normalized_response_is_unit_at_reference() {
        // y[n] driven by (z+1)^2 over (z^2 - 0.5z + 0.25): gain at DC.
        let num = vec![1.0, 2.0, 1.0];
        let den = vec![0.25, -0.5, 1.0];
        let (gain, report) = normalize_gain(BandShape::LowPass, &num, &den, 0.1, 0.1).unwrap();
        assert_approx_eq!(gain, report.dc.norm(), 1e-15);
        let tf = TransferFunction {
            numerator: num,
            denominator: den,
            gain,
        };
        assert_approx_eq!(
            tf.normalized_response(Complex::new(1.0, 0.0)).norm(),
            1.0,
            1e-12
        );
    }

    #[test]
    fn test_degenerate_gain_detected() {
        // Denominator (z - 1) vanishes at the low-pass reference.
        let num = vec![1.0, 1.0];
        let den = vec![-1.0, 1.0];
        let err = normalize_gain(BandShape::LowPass, &num, &den, 0.1, 0.1).unwrap_err();
        assert!(matches!(err, DesignError::DegenerateGain { .. }));
    }

    #[test]
    fn test_band_stop_uses_both_edges() {
        // (z - 1) vanishes at DC only; band-stop still fails because it
        // measures across both passband edges.
        let num = vec![1.0, 1.0];
        let den = vec![-1.0, 1.0];
        let err = normalize_gain(BandShape::BandStop, &num, &den, 0.1, 0.2).unwrap_err();
        assert!(matches!(err, DesignError::DegenerateGain { .. }));
    }
}
