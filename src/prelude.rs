//! This module provides an easy single import for those using this crate.

pub use crate::filter::design::{design, Design};
pub use crate::filter::error::DesignError;
pub use crate::filter::roots::RootSet;
pub use crate::filter::spec::{BandShape, FilterFamily, FilterSpec, Mapping};
pub use crate::filter::transfer::TransferFunction;
