//! Pole/zero sets passed between synthesis stages.

use crate::filter::error::DesignError;
use crate::util::math::conjugate_paired;
use num::Complex;

/// Tolerance for deciding that two roots form a conjugate pair.
pub const PAIRING_TOL: f64 = 1e-9;

/// An ordered set of poles and zeros, either in the s-plane or the
/// z-plane depending on which stage produced it.
///
/// Values are owned; a stage never mutates its input set but builds a
/// replacement.  Non-real members must occur in conjugate pairs so the
/// expanded polynomial coefficients come out real.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RootSet {
    pub poles: Vec<Complex<f64>>,
    pub zeros: Vec<Complex<f64>>,
}

impl RootSet {
    pub fn new(poles: Vec<Complex<f64>>, zeros: Vec<Complex<f64>>) -> RootSet {
        RootSet { poles, zeros }
    }

    /// A set with the given poles and no zeros.
    pub fn from_poles(poles: Vec<Complex<f64>>) -> RootSet {
        RootSet {
            poles,
            zeros: Vec::new(),
        }
    }

    pub fn num_poles(&self) -> usize {
        self.poles.len()
    }

    pub fn num_zeros(&self) -> usize {
        self.zeros.len()
    }

    /// Verifies the conjugate-pair invariant on both poles and zeros,
    /// reporting a pipeline defect if it fails.
    pub fn check_conjugate_pairs(&self, stage: &'static str) -> Result<(), DesignError> {
        if !conjugate_paired(&self.poles, PAIRING_TOL) {
            return Err(DesignError::inconsistency(
                stage,
                "poles are not closed under conjugation",
            ));
        }
        if !conjugate_paired(&self.zeros, PAIRING_TOL) {
            return Err(DesignError::inconsistency(
                stage,
                "zeros are not closed under conjugation",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_check_conjugate_pairs() {
        let good = RootSet::new(
            vec![Complex::new(-0.3, 0.4), Complex::new(-0.3, -0.4)],
            vec![Complex::new(-1.0, 0.0)],
        );
        assert!(good.check_conjugate_pairs("test").is_ok());

        let bad = RootSet::from_poles(vec![Complex::new(-0.3, 0.4)]);
        let err = bad.check_conjugate_pairs("test").unwrap_err();
        assert!(matches!(
            err,
            DesignError::InternalInconsistency { stage: "test", .. }
        ));
    }
}
