//! Corner pre-warping and low-pass to band-shape transformation.
//!
//! The prototype lives at unit angular frequency; this stage moves it
//! to the requested corner(s) and band shape.  Band-pass and band-stop
//! substitutions split every prototype pole into a pair via the usual
//! quadratic, which doubles the denominator degree.

use crate::filter::roots::RootSet;
use crate::filter::spec::{BandShape, FilterSpec};
use log::debug;
use num::Complex;
use std::f64::consts::PI;

/// Pre-warps a corner frequency (cycles/sample) so that the bilinear
/// transform's frequency compression lands the digital corner exactly
/// where it was requested.
pub fn prewarp(alpha: f64) -> f64 {
    (PI * alpha).tan() / PI
}

/// Returns the corner frequencies to feed the band transformation:
/// pre-warped when the spec takes the bilinear path with pre-warping
/// enabled, untouched otherwise.
pub fn warped_corners(spec: &FilterSpec) -> (f64, f64) {
    if spec.prewarp && spec.is_bilinear() {
        (prewarp(spec.alpha1), prewarp(spec.alpha2))
    } else {
        (spec.alpha1, spec.alpha2)
    }
}

/// Maps the low-pass prototype poles onto the requested band shape.
///
/// # Arguments
///
/// * `band` - Target band shape.
/// * `prototype` - Prototype poles from the prototype generator.
/// * `alpha1`, `alpha2` - Corner frequencies in cycles/sample, already
///   pre-warped where applicable.  `alpha2` equals `alpha1` for
///   low-pass and high-pass.
///
/// Returns the analog pole/zero set at the real target frequencies.
pub fn band_transform(
    band: BandShape,
    prototype: &[Complex<f64>],
    alpha1: f64,
    alpha2: f64,
) -> RootSet {
    let w1 = 2.0 * PI * alpha1;
    let w2 = 2.0 * PI * alpha2;
    let set = match band {
        BandShape::LowPass => low_pass(prototype, w1),
        BandShape::HighPass => high_pass(prototype, w1),
        BandShape::BandPass => band_pass(prototype, w1, w2),
        BandShape::BandStop => band_stop(prototype, w1, w2),
    };
    debug!(
        "band transform {:?}: {} poles, {} zeros",
        band,
        set.num_poles(),
        set.num_zeros()
    );
    set
}

fn low_pass(prototype: &[Complex<f64>], w1: f64) -> RootSet {
    RootSet::from_poles(prototype.iter().map(|p| p.scale(w1)).collect())
}

fn high_pass(prototype: &[Complex<f64>], w1: f64) -> RootSet {
    let poles: Vec<Complex<f64>> = prototype.iter().map(|p| Complex::new(w1, 0.0) / p).collect();
    let zeros = vec![Complex::new(0.0, 0.0); poles.len()];
    RootSet::new(poles, zeros)
}

fn band_pass(prototype: &[Complex<f64>], w1: f64, w2: f64) -> RootSet {
    let w0 = (w1 * w2).sqrt();
    let bw = w2 - w1;
    let mut poles = Vec::with_capacity(2 * prototype.len());
    for p in prototype {
        // Each prototype pole splits into the two roots of the
        // quadratic band-pass substitution; a zero discriminant keeps
        // the duplicated root.
        let hba = p.scale(0.5 * bw);
        let ratio = Complex::new(w0, 0.0) / hba;
        let disc = (1.0 - ratio * ratio).sqrt();
        poles.push(hba * (1.0 + disc));
        poles.push(hba * (1.0 - disc));
    }
    let zeros = vec![Complex::new(0.0, 0.0); poles.len() / 2];
    RootSet::new(poles, zeros)
}

fn band_stop(prototype: &[Complex<f64>], w1: f64, w2: f64) -> RootSet {
    let w0 = (w1 * w2).sqrt();
    let bw = w2 - w1;
    let mut poles = Vec::with_capacity(2 * prototype.len());
    let mut zeros = Vec::with_capacity(2 * prototype.len());
    for p in prototype {
        let hba = Complex::new(0.5 * bw, 0.0) / p;
        let ratio = Complex::new(w0, 0.0) / hba;
        let disc = (1.0 - ratio * ratio).sqrt();
        poles.push(hba * (1.0 + disc));
        poles.push(hba * (1.0 - disc));
        // The notch centre contributes a conjugate zero pair per pole.
        zeros.push(Complex::new(0.0, w0));
        zeros.push(Complex::new(0.0, -w0));
    }
    RootSet::new(poles, zeros)
}
