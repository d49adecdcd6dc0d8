//! Consumers of the synthesized transfer function.
//!
//! Two output formats sit downstream of the synthesis pipeline: a C
//! stepping function that applies the recurrence to one sample at a
//! time, and a compact numeric listing meant for automated
//! post-processing.  Both reproduce coefficients in scientific notation
//! at full double precision.  A human-readable design summary is also
//! provided for inspection.

pub mod c_source;
pub mod listing;

pub use self::c_source::{c_source, CodeStyle};
pub use self::listing::{compact_listing, summary};
