//! Emission of the recurrence as a C stepping function.

use crate::filter::design::Design;
use std::fmt::Write;

/// Shape of the generated stepping function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeStyle {
    /// Fully unrolled shifts and multiply-accumulate terms, dropping
    /// terms whose coefficient is negligible.
    Unrolled,
    /// Coefficient arrays walked by plain loops.
    Looped,
}

const COEFF_EPS: f64 = 1e-10;

/// Renders the design as a self-contained C function stepping the
/// recurrence one sample at a time.
///
/// The generated code divides each input sample by `GAIN` before it
/// enters the delay line, matching the gain contract of the transfer
/// function (whose numerator is exported unscaled).
///
/// # Arguments
///
/// * `design` - A finished design.
/// * `style` - Unrolled or loop-based body.
pub fn c_source(design: &Design, style: CodeStyle) -> String {
    let tf = &design.transfer;
    let nzeros = tf.num_zeros();
    let npoles = tf.num_poles();
    let feedback = tf.feedback_coeffs();

    let mut out = String::new();
    writeln!(out, "/* Digital filter designed by iirgen */").unwrap();
    writeln!(
        out,
        "/* {} {} filter, order {} */",
        design.spec.family, design.spec.band, design.spec.order
    )
    .unwrap();
    writeln!(
        out,
        "/* alpha1={}, alpha2={} */",
        design.spec.alpha1, design.spec.alpha2
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(out, "#define NZEROS {}", nzeros).unwrap();
    writeln!(out, "#define NPOLES {}", npoles).unwrap();
    writeln!(out, "#define GAIN   {:e}", tf.gain).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "static float xv[NZEROS+1], yv[NPOLES+1];").unwrap();
    writeln!(out).unwrap();

    match style {
        CodeStyle::Unrolled => unrolled_body(&mut out, tf.numerator.as_slice(), &feedback),
        CodeStyle::Looped => looped_body(&mut out, tf.numerator.as_slice(), &feedback),
    }
    out
}

fn unrolled_body(out: &mut String, numerator: &[f64], feedback: &[f64]) {
    let nzeros = numerator.len() - 1;
    let npoles = feedback.len() - 1;

    writeln!(out, "static float filterStep(float input)").unwrap();
    writeln!(out, "{{").unwrap();
    for i in 0..nzeros {
        writeln!(out, "  xv[{}] = xv[{}];", i, i + 1).unwrap();
    }
    writeln!(out, "  xv[{}] = input / GAIN;", nzeros).unwrap();
    writeln!(out).unwrap();
    for i in 0..npoles {
        writeln!(out, "  yv[{}] = yv[{}];", i, i + 1).unwrap();
    }

    let mut terms = Vec::new();
    for (i, c) in numerator.iter().enumerate() {
        if c.abs() > COEFF_EPS {
            terms.push(format!("({:e} * xv[{}])", c, i));
        }
    }
    // The final feedback entry is the -1 standing for y[n] itself.
    for (i, c) in feedback[..npoles].iter().enumerate() {
        if c.abs() > COEFF_EPS {
            terms.push(format!("({:e} * yv[{}])", c, i));
        }
    }

    write!(out, "  yv[{}] = {}", npoles, terms[0]).unwrap();
    for term in &terms[1..] {
        write!(out, "\n           + {}", term).unwrap();
    }
    writeln!(out, ";").unwrap();
    writeln!(out, "  return yv[{}];", npoles).unwrap();
    writeln!(out, "}}").unwrap();
}

fn looped_body(out: &mut String, numerator: &[f64], feedback: &[f64]) {
    let npoles = feedback.len() - 1;

    coeff_array(out, "xcoeffs", numerator);
    coeff_array(out, "ycoeffs", &feedback[..npoles]);

    writeln!(out, "static float filterStep(float input)").unwrap();
    writeln!(out, "{{").unwrap();
    writeln!(out, "  int i;").unwrap();
    writeln!(out, "  for (i = 0; i < NZEROS; i++) xv[i] = xv[i+1];").unwrap();
    writeln!(out, "  xv[NZEROS] = input / GAIN;").unwrap();
    writeln!(out, "  for (i = 0; i < NPOLES; i++) yv[i] = yv[i+1];").unwrap();
    writeln!(out, "  yv[NPOLES] = 0.0;").unwrap();
    writeln!(
        out,
        "  for (i = 0; i <= NZEROS; i++) yv[NPOLES] += xcoeffs[i] * xv[i];"
    )
    .unwrap();
    writeln!(
        out,
        "  for (i = 0; i < NPOLES; i++) yv[NPOLES] += ycoeffs[i] * yv[i];"
    )
    .unwrap();
    writeln!(out, "  return yv[NPOLES];").unwrap();
    writeln!(out, "}}").unwrap();
}

fn coeff_array(out: &mut String, name: &str, coeffs: &[f64]) {
    writeln!(out, "static float {}[] = {{", name).unwrap();
    let mut line = String::from("  ");
    for (i, c) in coeffs.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            writeln!(out, "{}", line).unwrap();
            line = String::from("   ");
        }
        write!(line, " {:e},", c).unwrap();
    }
    writeln!(out, "{}", line).unwrap();
    writeln!(out, "}};").unwrap();
    writeln!(out).unwrap();
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::filter::design::design;
    use crate::filter::spec::{BandShape, FilterFamily, FilterSpec, Mapping};

    fn sample_design() -> Design {
        let spec = FilterSpec::new(
            FilterFamily::Butterworth,
            BandShape::LowPass,
            2,
            &[0.1],
            Mapping::Bilinear,
            true,
        )
        .unwrap();
        design(&spec).unwrap()
    }

    #[test]
    fn test_unrolled_structure() {
        let src = c_source(&sample_design(), CodeStyle::Unrolled);
        assert!(src.contains("#define NZEROS 2"));
        assert!(src.contains("#define NPOLES 2"));
        assert!(src.contains("#define GAIN"));
        assert!(src.contains("xv[2] = input / GAIN;"));
        assert!(src.contains("return yv[2];"));
        // One shift per delay slot.
        assert!(src.contains("xv[0] = xv[1];"));
        assert!(src.contains("yv[1] = yv[2];"));
    }

    #[test]
    fn test_looped_structure() {
        let src = c_source(&sample_design(), CodeStyle::Looped);
        assert!(src.contains("static float xcoeffs[] = {"));
        assert!(src.contains("static float ycoeffs[] = {"));
        assert!(src.contains("for (i = 0; i <= NZEROS; i++)"));
    }

    #[test]
    fn test_gain_rendered_in_scientific_notation() {
        let d = sample_design();
        let src = c_source(&d, CodeStyle::Unrolled);
        let line = src
            .lines()
            .find(|l| l.starts_with("#define GAIN"))
            .unwrap()
            .to_string();
        assert!(line.contains('e'));
    }
}
