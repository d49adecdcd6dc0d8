//! Designs a Chebyshev band-pass filter and prints the generated C
//! stepping function.

use iirgen_rs::codegen::{c_source, CodeStyle};
use iirgen_rs::prelude::*;

fn main() {
    let spec = FilterSpec::new(
        FilterFamily::Chebyshev { ripple_db: -1.0 },
        BandShape::BandPass,
        3,
        &[0.1, 0.2],
        Mapping::Bilinear,
        true,
    )
    .expect("valid spec");
    let design = design(&spec).expect("design");
    print!("{}", c_source(&design, CodeStyle::Unrolled));
}
