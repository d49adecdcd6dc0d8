//! Analog low-pass prototype generation.
//!
//! Every design starts from a normalized low-pass prototype: `n` poles
//! in the left half of the s-plane with the family's corner at unit
//! angular frequency.  Butterworth poles come from a closed form,
//! Bessel poles from a canonical table, and Chebyshev poles from a
//! sinh/cosh stretch of the Butterworth set driven by the requested
//! passband ripple.

use crate::filter::error::DesignError;
use crate::filter::spec::{FilterFamily, MAX_ORDER};
use crate::util::math::ripple_epsilon;
use lazy_static::lazy_static;
use num::Complex;
use std::f64::consts::PI;

lazy_static! {
    /// Roots of the reverse Bessel polynomials, normalized for unit
    /// group delay at DC.  One member of each conjugate pair is stored;
    /// entries for order `n` start at index `n*n/4`.  Built once and
    /// read-only afterwards, so concurrent designs share it freely.
    static ref BESSEL_POLES: Vec<Complex<f64>> = [
        (-1.00000000000e+00, 0.00000000000e+00),
        (-1.10160133059e+00, 6.36009824757e-01),
        (-1.32267579991e+00, 0.00000000000e+00),
        (-1.04740916101e+00, 9.99264436281e-01),
        (-1.37006783055e+00, 4.10249717494e-01),
        (-9.95208764350e-01, 1.25710573945e+00),
        (-1.50231627145e+00, 0.00000000000e+00),
        (-1.38087732586e+00, 7.17909587627e-01),
        (-9.57676548563e-01, 1.47112432073e+00),
        (-1.57149040362e+00, 3.20896374221e-01),
        (-1.38185809760e+00, 9.71471890712e-01),
        (-9.30656522947e-01, 1.66186326894e+00),
        (-1.68436817927e+00, 0.00000000000e+00),
        (-1.61203876622e+00, 5.89244506931e-01),
        (-1.37890321680e+00, 1.19156677780e+00),
        (-9.09867780623e-01, 1.83645135304e+00),
        (-1.75740840040e+00, 2.72867575103e-01),
        (-1.63693941813e+00, 8.22795625139e-01),
        (-1.37384121764e+00, 1.38835657588e+00),
        (-8.92869718847e-01, 1.99832584364e+00),
        (-1.85660050123e+00, 0.00000000000e+00),
        (-1.80717053496e+00, 5.12383730575e-01),
        (-1.65239648458e+00, 1.03138956698e+00),
        (-1.36758830979e+00, 1.56773371224e+00),
        (-8.78399276161e-01, 2.14980052431e+00),
        (-1.92761969145e+00, 2.41623471082e-01),
        (-1.84219624443e+00, 7.27257597722e-01),
        (-1.66181024140e+00, 1.22110021857e+00),
        (-1.36069227838e+00, 1.73350574267e+00),
        (-8.65756901707e-01, 2.29260483098e+00),
    ]
    .iter()
    .map(|&(re, im)| Complex::new(re, im))
    .collect();
}

/// Generates the `order` s-plane poles of the normalized low-pass
/// prototype for the given family.
///
/// # Arguments
///
/// * `family` - Prototype family; Chebyshev carries its ripple in dB.
/// * `order` - Filter order, 1 through [`MAX_ORDER`].
///
/// # Examples
///
/// ```
/// use iirgen_rs::filter::prototype::prototype_poles;
/// use iirgen_rs::filter::spec::FilterFamily;
///
/// let poles = prototype_poles(FilterFamily::Butterworth, 4).unwrap();
/// assert_eq!(poles.len(), 4);
/// assert!(poles.iter().all(|p| p.re < 0.0));
/// ```
pub fn prototype_poles(
    family: FilterFamily,
    order: usize,
) -> Result<Vec<Complex<f64>>, DesignError> {
    if order < 1 || order > MAX_ORDER {
        return Err(DesignError::invalid_spec(format!(
            "order {} out of range [1, {}]",
            order, MAX_ORDER
        )));
    }
    let poles = match family {
        FilterFamily::Butterworth => butterworth_poles(order),
        FilterFamily::Bessel => bessel_poles(order),
        FilterFamily::Chebyshev { ripple_db } => {
            if ripple_db >= 0.0 {
                return Err(DesignError::invalid_spec(format!(
                    "Chebyshev ripple is {} dB; must be < 0.0",
                    ripple_db
                )));
            }
            chebyshev_poles(order, ripple_db)?
        }
    };
    for p in &poles {
        if p.re >= 0.0 {
            return Err(DesignError::inconsistency(
                "prototype",
                format!("pole {} not in the left half-plane", p),
            ));
        }
    }
    Ok(poles)
}

/// Butterworth poles: the left-half-plane members of the unit circle
/// points `exp(i*theta)`, uniformly spaced so the magnitude response is
/// maximally flat.
fn butterworth_poles(order: usize) -> Vec<Complex<f64>> {
    let n = order as f64;
    let mut poles = Vec::with_capacity(order);
    for i in 0..2 * order {
        let theta = if order % 2 == 1 {
            (i as f64) * PI / n
        } else {
            (i as f64 + 0.5) * PI / n
        };
        let pole = Complex::new(0.0, theta).exp();
        if pole.re < 0.0 {
            poles.push(pole);
        }
    }
    poles
}

/// Bessel poles, looked up from the canonical table.  Odd orders take
/// the single real root first, then each tabulated complex root
/// contributes a conjugate pair.
fn bessel_poles(order: usize) -> Vec<Complex<f64>> {
    let mut idx = (order * order) / 4;
    let mut poles = Vec::with_capacity(order);
    if order % 2 == 1 {
        poles.push(BESSEL_POLES[idx]);
        idx += 1;
    }
    for _ in 0..order / 2 {
        let pole = BESSEL_POLES[idx];
        poles.push(pole);
        poles.push(pole.conj());
        idx += 1;
    }
    poles
}

/// Chebyshev poles: the Butterworth set with real parts compressed by
/// `sinh(y)` and imaginary parts expanded by `cosh(y)`, which trades
/// the flat passband for an equiripple one.
fn chebyshev_poles(order: usize, ripple_db: f64) -> Result<Vec<Complex<f64>>, DesignError> {
    let eps = ripple_epsilon(ripple_db);
    let y = (1.0 / eps).asinh() / order as f64;
    if y <= 0.0 {
        return Err(DesignError::inconsistency(
            "prototype",
            format!("Chebyshev stretch parameter {} not positive", y),
        ));
    }
    let (sh, ch) = (y.sinh(), y.cosh());
    Ok(butterworth_poles(order)
        .iter()
        .map(|p| Complex::new(p.re * sh, p.im * ch))
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::math::conjugate_paired;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_butterworth_order_four() {
        let poles = prototype_poles(FilterFamily::Butterworth, 4).unwrap();
        assert_eq!(poles.len(), 4);
        // Uniform spacing on the unit semicircle.
        for p in &poles {
            assert_approx_eq!(p.norm(), 1.0, 1e-12);
        }
        let angles: Vec<f64> = poles.iter().map(|p| p.arg()).collect();
        assert!(angles
            .iter()
            .any(|a| (a - 5.0 * PI / 8.0).abs() < 1e-12 || (a + 5.0 * PI / 8.0).abs() < 1e-12));
        assert!(conjugate_paired(&poles, 1e-12));
    }

    #[test]
    fn test_butterworth_odd_order_has_real_pole() {
        let poles = prototype_poles(FilterFamily::Butterworth, 5).unwrap();
        assert_eq!(poles.len(), 5);
        let real_poles: Vec<_> = poles.iter().filter(|p| p.im.abs() < 1e-12).collect();
        assert_eq!(real_poles.len(), 1);
        assert_approx_eq!(real_poles[0].re, -1.0, 1e-12);
    }

    #[test]
    fn test_bessel_matches_table() {
        let poles = prototype_poles(FilterFamily::Bessel, 2).unwrap();
        assert_eq!(poles.len(), 2);
        assert_approx_eq!(poles[0].re, -1.10160133059, 1e-11);
        assert_approx_eq!(poles[0].im, 0.636009824757, 1e-11);
        assert_eq!(poles[1], poles[0].conj());

        let poles = prototype_poles(FilterFamily::Bessel, 3).unwrap();
        assert_eq!(poles.len(), 3);
        assert_approx_eq!(poles[0].re, -1.32267579991, 1e-11);
        assert_approx_eq!(poles[0].im, 0.0, 1e-11);
    }

    #[test]
    fn test_bessel_all_orders_paired_and_stable() {
        for order in 1..=MAX_ORDER {
            let poles = prototype_poles(FilterFamily::Bessel, order).unwrap();
            assert_eq!(poles.len(), order);
            assert!(poles.iter().all(|p| p.re < 0.0));
            assert!(conjugate_paired(&poles, 1e-9));
        }
    }

    #[test]
    fn test_chebyshev_stretch() {
        let ripple = -3.0;
        let cheb = prototype_poles(FilterFamily::Chebyshev { ripple_db: ripple }, 4).unwrap();
        let butter = prototype_poles(FilterFamily::Butterworth, 4).unwrap();
        let eps = ripple_epsilon(ripple);
        let y = (1.0 / eps).asinh() / 4.0;
        for (c, b) in cheb.iter().zip(butter.iter()) {
            assert_approx_eq!(c.re, b.re * y.sinh(), 1e-12);
            assert_approx_eq!(c.im, b.im * y.cosh(), 1e-12);
        }
    }

    #[test]
    fn test_invalid_order_rejected() {
        assert!(prototype_poles(FilterFamily::Butterworth, 0).is_err());
        assert!(prototype_poles(FilterFamily::Butterworth, 11).is_err());
    }

    #[test]
    fn test_positive_ripple_rejected_before_computation() {
        let err = prototype_poles(FilterFamily::Chebyshev { ripple_db: 0.5 }, 4).unwrap_err();
        assert!(matches!(err, DesignError::InvalidSpec { .. }));
    }
}
