//! Analog to digital domain mapping.
//!
//! Takes the analog pole/zero set into the z-plane, either with the
//! bilinear transform or the matched z-transform, and rejects any
//! design whose digital poles do not sit strictly inside the unit
//! circle.

use crate::filter::error::DesignError;
use crate::filter::roots::RootSet;
use crate::filter::spec::Mapping;
use log::{debug, trace};
use num::Complex;

/// The bilinear map `z = (2 + s) / (2 - s)`.
pub fn bilinear(s: Complex<f64>) -> Complex<f64> {
    (2.0 + s) / (2.0 - s)
}

/// The matched-z map `z = exp(s)`.
pub fn matched_z(s: Complex<f64>) -> Complex<f64> {
    s.exp()
}

/// Maps every analog root into the z-plane.
///
/// On the bilinear path the substitution unbalances the polynomial
/// degrees, so the zero set is padded with roots at `z = -1` until it
/// matches the pole count; without the padding the recurrence would
/// come out the wrong length.  The matched-z path maps roots one to
/// one and pads nothing.
///
/// # Arguments
///
/// * `mapping` - Which s-to-z substitution to apply.
/// * `analog` - Analog pole/zero set from the band transformation.
///
/// Fails with `UnstableDesign` if any mapped pole has modulus >= 1.
pub fn map_to_z(mapping: Mapping, analog: &RootSet) -> Result<RootSet, DesignError> {
    let map: fn(Complex<f64>) -> Complex<f64> = match mapping {
        Mapping::Bilinear => bilinear,
        Mapping::MatchedZ => matched_z,
    };
    let poles: Vec<Complex<f64>> = analog.poles.iter().map(|&s| map(s)).collect();
    let mut zeros: Vec<Complex<f64>> = analog.zeros.iter().map(|&s| map(s)).collect();
    if mapping == Mapping::Bilinear {
        while zeros.len() < poles.len() {
            zeros.push(Complex::new(-1.0, 0.0));
        }
    }
    for p in &poles {
        let modulus = p.norm();
        trace!("z-plane pole {} modulus {}", p, modulus);
        if modulus >= 1.0 {
            return Err(DesignError::UnstableDesign { pole: *p, modulus });
        }
    }
    debug!(
        "domain mapping {:?}: {} poles, {} zeros",
        mapping,
        poles.len(),
        zeros.len()
    );
    Ok(RootSet::new(poles, zeros))
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_bilinear_maps_axis_to_circle() {
        // Purely imaginary s lands on the unit circle.
        let z = bilinear(Complex::new(0.0, 1.0));
        assert_approx_eq!(z.norm(), 1.0, 1e-12);
        // Left half-plane lands inside.
        let z = bilinear(Complex::new(-0.5, 0.3));
        assert!(z.norm() < 1.0);
    }

    #[test]
    fn test_matched_z_modulus_is_exp_re() {
        let s = Complex::new(-0.25, 1.1);
        let z = matched_z(s);
        assert_approx_eq!(z.norm(), (-0.25_f64).exp(), 1e-12);
        assert_approx_eq!(z.arg(), 1.1, 1e-12);
    }

    #[test]
    fn test_bilinear_pads_zeros_to_pole_count() {
        let analog = RootSet::from_poles(vec![
            Complex::new(-0.4, 0.3),
            Complex::new(-0.4, -0.3),
            Complex::new(-0.2, 0.0),
        ]);
        let digital = map_to_z(Mapping::Bilinear, &analog).unwrap();
        assert_eq!(digital.num_zeros(), 3);
        assert!(digital
            .zeros
            .iter()
            .all(|z| (z - Complex::new(-1.0, 0.0)).norm() < 1e-12));
    }

    #[test]
    fn test_matched_z_does_not_pad() {
        let analog = RootSet::from_poles(vec![Complex::new(-0.4, 0.0)]);
        let digital = map_to_z(Mapping::MatchedZ, &analog).unwrap();
        assert_eq!(digital.num_zeros(), 0);
        assert_eq!(digital.num_poles(), 1);
    }

    #[test]
    fn test_pole_barely_outside_circle_rejected() {
        // s with a vanishingly positive real part maps to |z| just
        // above 1; the strict check has to catch it.
        let eps = 1e-12;
        let analog = RootSet::from_poles(vec![Complex::new(eps, 0.0)]);
        let err = map_to_z(Mapping::Bilinear, &analog).unwrap_err();
        match err {
            DesignError::UnstableDesign { modulus, .. } => assert!(modulus >= 1.0),
            other => panic!("expected UnstableDesign, got {:?}", other),
        }
    }

    #[test]
    fn test_pole_on_circle_rejected() {
        let analog = RootSet::from_poles(vec![Complex::new(0.0, 0.5)]);
        let err = map_to_z(Mapping::Bilinear, &analog).unwrap_err();
        assert!(matches!(err, DesignError::UnstableDesign { .. }));
    }
}
