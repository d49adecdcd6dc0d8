//! Synthesis of infinite impulse response (IIR) filters.
//!
//! IIR filters are feedback based systems, and have all the caveats
//! associated with any feedback system.  If poorly designed they can be
//! unstable and unpredictable, and their phase and group delay
//! responses are non-linear.  In exchange they are extremely efficient:
//! a design that would take dozens of feedforward taps can often be
//! matched by a handful of recurrence coefficients from a well designed
//! IIR filter.
//!
//! This module turns a declarative design request -- family, band
//! shape, order, corner frequencies -- into such a recurrence.  The
//! work runs through a fixed sequence of stages, each consuming the
//! previous stage's output:
//!
//! * [`prototype`] places the normalized analog low-pass poles for the
//!   requested family.
//! * [`band`] pre-warps the corner frequencies where the bilinear
//!   transform calls for it and moves the prototype to the requested
//!   band shape and frequencies.
//! * [`zdomain`] maps the analog roots into the z-plane and rejects
//!   unstable results.
//! * [`polynomial`] expands the root sets into real recurrence
//!   coefficients.
//! * [`transfer`] measures the passband gain and packages the final
//!   [`TransferFunction`](transfer::TransferFunction).
//!
//! [`design::design`] drives all of the above from a validated
//! [`FilterSpec`](spec::FilterSpec).

pub mod band;
pub mod design;
pub mod error;
pub mod polynomial;
pub mod prototype;
pub mod roots;
pub mod spec;
pub mod transfer;
pub mod zdomain;

pub use self::design::{design, Design};
pub use self::error::DesignError;
pub use self::roots::RootSet;
pub use self::spec::{BandShape, FilterFamily, FilterSpec, Mapping};
pub use self::transfer::TransferFunction;
