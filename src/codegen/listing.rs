//! Compact coefficient listing and human-readable design summary.

use crate::filter::design::Design;
use num::Complex;
use std::f64::consts::PI;
use std::fmt::Write;

const MAG_EPS: f64 = 1e-10;

/// Renders the compact numeric listing: gain line, zero count,
/// numerator values, pole count, feedback coefficient values.  Every
/// value is written in scientific notation at full double precision so
/// automated consumers can reparse it without loss.
pub fn compact_listing(design: &Design) -> String {
    let tf = &design.transfer;
    let mut out = String::new();
    writeln!(out, "G  = {:e}", tf.gain).unwrap();
    writeln!(out, "NZ = {}", tf.num_zeros()).unwrap();
    for c in &tf.numerator {
        writeln!(out, "{:>18e}", c).unwrap();
    }
    writeln!(out, "NP = {}", tf.num_poles()).unwrap();
    for c in &tf.feedback_coeffs() {
        writeln!(out, "{:>18e}", c).unwrap();
    }
    out
}

/// Renders the full design summary: raw and warped corners, gains at
/// the three reference frequencies, root listings for both planes, and
/// the recurrence relation.
pub fn summary(design: &Design) -> String {
    let tf = &design.transfer;
    let mut out = String::new();

    writeln!(out, "raw alpha1    = {:14.10}", design.spec.alpha1).unwrap();
    writeln!(out, "raw alpha2    = {:14.10}", design.spec.alpha2).unwrap();
    writeln!(out, "warped alpha1 = {:14.10}", design.warped_alpha1).unwrap();
    writeln!(out, "warped alpha2 = {:14.10}", design.warped_alpha2).unwrap();
    writeln!(out).unwrap();

    gain_line(&mut out, "gain at dc:    ", design.gains.dc);
    gain_line(&mut out, "gain at centre:", design.gains.centre);
    gain_line(&mut out, "gain at hf:    ", design.gains.hf);

    root_listing(&mut out, "S-plane zeros:", &design.analog.zeros);
    root_listing(&mut out, "S-plane poles:", &design.analog.poles);
    root_listing(&mut out, "Z-plane zeros:", &design.digital.zeros);
    root_listing(&mut out, "Z-plane poles:", &design.digital.poles);

    writeln!(out).unwrap();
    writeln!(out, "Recurrence relation:").unwrap();
    let nz = tf.num_zeros();
    write!(out, "y[n] = ").unwrap();
    for (i, c) in tf.numerator.iter().enumerate() {
        if i > 0 {
            write!(out, "     + ").unwrap();
        }
        writeln!(out, "({:14.10} * x[n-{:2}])", c, nz - i).unwrap();
    }
    writeln!(out).unwrap();
    let feedback = tf.feedback_coeffs();
    let np = tf.num_poles();
    for (i, c) in feedback[..np].iter().enumerate() {
        writeln!(out, "     + ({:14.10} * y[n-{:2}])", c, np - i).unwrap();
    }
    out
}

fn gain_line(out: &mut String, label: &str, value: Complex<f64>) {
    let mag = value.norm();
    write!(out, "{} mag = {:.9e}", label, mag).unwrap();
    if mag > MAG_EPS {
        write!(out, "   phase = {:14.10} pi", value.arg() / PI).unwrap();
    }
    writeln!(out).unwrap();
}

fn root_listing(out: &mut String, label: &str, roots: &[Complex<f64>]) {
    writeln!(out).unwrap();
    writeln!(out, "{}", label).unwrap();
    for r in roots {
        writeln!(out, "\t{:14.10} + j {:14.10}", r.re, r.im).unwrap();
    }
}
