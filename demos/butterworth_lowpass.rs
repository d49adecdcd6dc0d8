//! Designs a 4th order Butterworth low-pass filter with its corner at
//! one tenth of the sample rate and prints the design summary.

use iirgen_rs::codegen::summary;
use iirgen_rs::prelude::*;

fn main() {
    let spec = FilterSpec::new(
        FilterFamily::Butterworth,
        BandShape::LowPass,
        4,
        &[0.1],
        Mapping::Bilinear,
        true,
    )
    .expect("valid spec");
    let design = design(&spec).expect("design");
    print!("{}", summary(&design));
}
