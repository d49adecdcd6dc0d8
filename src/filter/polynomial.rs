//! Expansion of root sets into real polynomial coefficients.

use crate::filter::error::DesignError;
use num::Complex;
use num_traits::Zero;

/// Relative bound on the imaginary residue left after expanding a
/// conjugate-closed root set.
pub const IMAG_RESIDUE_TOL: f64 = 1e-9;

/// Expands `(x - r_0)(x - r_1)...` into real coefficients, constant
/// term first (ascending powers of `x`).
///
/// The accumulation is a plain fold: start from the scalar polynomial
/// `1` and multiply in one linear factor per root.  Because the input
/// roots are real or conjugate-paired, the imaginary parts must cancel;
/// a residue above [`IMAG_RESIDUE_TOL`] (relative to the largest
/// coefficient) means an upstream stage broke the pairing invariant and
/// is reported rather than truncated.
///
/// An empty root set expands to the polynomial `1`.
///
/// # Examples
///
/// ```
/// use iirgen_rs::filter::polynomial::expand;
/// use num::Complex;
///
/// // (x + 1)^2 = 1 + 2x + x^2
/// let roots = vec![Complex::new(-1.0, 0.0), Complex::new(-1.0, 0.0)];
/// assert_eq!(expand(&roots).unwrap(), vec![1.0, 2.0, 1.0]);
/// ```
pub fn expand(roots: &[Complex<f64>]) -> Result<Vec<f64>, DesignError> {
    let mut coeffs: Vec<Complex<f64>> = vec![Complex::new(1.0, 0.0)];
    for &root in roots {
        let mut next = vec![Complex::zero(); coeffs.len() + 1];
        next[0] = -root * coeffs[0];
        for i in 1..coeffs.len() {
            next[i] = coeffs[i - 1] - root * coeffs[i];
        }
        next[coeffs.len()] = coeffs[coeffs.len() - 1];
        coeffs = next;
    }

    let scale = coeffs
        .iter()
        .map(|c| c.re.abs())
        .fold(1.0_f64, f64::max);
    for c in &coeffs {
        if c.im.abs() > IMAG_RESIDUE_TOL * scale {
            return Err(DesignError::inconsistency(
                "polynomial expansion",
                format!(
                    "imaginary residue {} exceeds tolerance; root set is not conjugate-closed",
                    c.im
                ),
            ));
        }
    }
    Ok(coeffs.iter().map(|c| c.re).collect())
}

/// Evaluates a real-coefficient polynomial (constant term first) at a
/// complex point using Horner's rule.
pub fn evaluate(coeffs: &[f64], z: Complex<f64>) -> Complex<f64> {
    coeffs
        .iter()
        .rev()
        .fold(Complex::zero(), |acc, &c| acc * z + c)
}
