//! The synthesis pipeline: prototype, band transform, domain mapping,
//! expansion, gain normalization, run strictly in sequence.

use crate::filter::band::{band_transform, warped_corners};
use crate::filter::error::DesignError;
use crate::filter::polynomial::expand;
use crate::filter::prototype::prototype_poles;
use crate::filter::roots::RootSet;
use crate::filter::spec::FilterSpec;
use crate::filter::transfer::{normalize_gain, GainReport, TransferFunction};
use crate::filter::zdomain::map_to_z;
use log::debug;

/// Everything a finished design exposes: the transfer function that
/// downstream consumers contract on, plus the intermediate root sets
/// and warped corners that the summary and emitters report.
#[derive(Clone, Debug)]
pub struct Design {
    pub spec: FilterSpec,
    /// Corner frequencies after pre-warping (equal to the raw corners
    /// when pre-warping does not apply).
    pub warped_alpha1: f64,
    pub warped_alpha2: f64,
    /// Analog pole/zero set at the target band and frequencies.
    pub analog: RootSet,
    /// Digital pole/zero set after domain mapping.
    pub digital: RootSet,
    pub gains: GainReport,
    pub transfer: TransferFunction,
}

/// Synthesizes the transfer function for a validated spec.
///
/// Stages run in a fixed order with no retries; the first invariant
/// violation or degenerate value aborts the design.
///
/// # Examples
///
/// ```
/// use iirgen_rs::filter::design::design;
/// use iirgen_rs::filter::spec::{BandShape, FilterFamily, FilterSpec, Mapping};
///
/// let spec = FilterSpec::new(
///     FilterFamily::Butterworth,
///     BandShape::LowPass,
///     4,
///     &[0.1],
///     Mapping::Bilinear,
///     true,
/// ).unwrap();
/// let design = design(&spec).unwrap();
/// assert_eq!(design.transfer.num_poles(), 4);
/// ```
pub fn design(spec: &FilterSpec) -> Result<Design, DesignError> {
    let prototype = prototype_poles(spec.family, spec.order)?;
    debug!("prototype: {} poles", prototype.len());

    let (warped_alpha1, warped_alpha2) = warped_corners(spec);
    let analog = band_transform(spec.band, &prototype, warped_alpha1, warped_alpha2);
    analog.check_conjugate_pairs("band transform")?;

    let digital = map_to_z(spec.mapping, &analog)?;
    digital.check_conjugate_pairs("domain mapping")?;

    let numerator = expand(&digital.zeros)?;
    let mut denominator = expand(&digital.poles)?;

    // The denominator stays monic: both sides are divided by its
    // highest-degree coefficient.
    let lead = denominator[denominator.len() - 1];
    let numerator: Vec<f64> = numerator.iter().map(|c| c / lead).collect();
    for c in denominator.iter_mut() {
        *c /= lead;
    }

    let (gain, gains) = normalize_gain(
        spec.band,
        &numerator,
        &denominator,
        spec.alpha1,
        spec.alpha2,
    )?;
    debug!("gain {} at {:?} reference", gain, spec.band);

    Ok(Design {
        spec: spec.clone(),
        warped_alpha1,
        warped_alpha2,
        analog,
        digital,
        gains,
        transfer: TransferFunction {
            numerator,
            denominator,
            gain,
        },
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::filter::spec::{BandShape, FilterFamily, Mapping};
    use assert_approx_eq::assert_approx_eq;
    use num::Complex;

    fn butter_lp4() -> Design {
        let spec = FilterSpec::new(
            FilterFamily::Butterworth,
            BandShape::LowPass,
            4,
            &[0.1],
            Mapping::Bilinear,
            true,
        )
        .unwrap();
        design(&spec).unwrap()
    }

    #[test]
    fn test_coefficient_counts_match_order() {
        let d = butter_lp4();
        assert_eq!(d.transfer.numerator.len(), 5);
        assert_eq!(d.transfer.denominator.len(), 5);
    }

    #[test]
    fn test_denominator_is_monic() {
        let d = butter_lp4();
        assert_eq!(d.transfer.denominator[4], 1.0);
    }

    #[test]
    fn test_all_poles_strictly_stable() {
        let d = butter_lp4();
        assert!(d.digital.poles.iter().all(|p| p.norm() < 1.0));
    }

    #[test]
    fn test_gain_normalization_idempotent() {
        let d = butter_lp4();
        let unit = d.transfer.normalized_response(Complex::new(1.0, 0.0));
        assert_approx_eq!(unit.norm(), 1.0, 1e-9);
    }
}
