use num::Complex;
use thiserror::Error;

/// Errors produced while synthesizing a filter.
///
/// Every error is raised by the first stage that observes the problem
/// and propagated straight to the caller; the pipeline is deterministic
/// so nothing is retried and no partial result is returned.
#[derive(Debug, Error)]
pub enum DesignError {
    /// The design request itself is malformed or out of range.
    #[error("invalid filter spec: {reason}")]
    InvalidSpec { reason: String },

    /// A synthesized pole landed on or outside the unit circle, so the
    /// resulting recurrence would not decay.
    #[error("unstable design: z-plane pole {pole} has modulus {modulus}")]
    UnstableDesign { pole: Complex<f64>, modulus: f64 },

    /// The denominator vanishes at the gain reference point, leaving the
    /// passband normalization undefined.
    #[error("degenerate gain: denominator magnitude {magnitude} at reference {reference}")]
    DegenerateGain {
        reference: Complex<f64>,
        magnitude: f64,
    },

    /// A numerical invariant of the pipeline was violated. This signals a
    /// defect in the synthesis itself, not a bad request.
    #[error("internal inconsistency in {stage}: {detail}")]
    InternalInconsistency { stage: &'static str, detail: String },
}

impl DesignError {
    pub fn invalid_spec<S: Into<String>>(reason: S) -> DesignError {
        DesignError::InvalidSpec {
            reason: reason.into(),
        }
    }

    pub fn inconsistency<S: Into<String>>(stage: &'static str, detail: S) -> DesignError {
        DesignError::InternalInconsistency {
            stage,
            detail: detail.into(),
        }
    }
}
