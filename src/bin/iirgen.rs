//! Command-line front end for the filter synthesizer.
//!
//! Validates the raw request, runs the synthesis pipeline, and prints
//! one of the output formats.  Any failure is reported with its error
//! kind and the offending parameter, and nothing is emitted.

use clap::{Parser, ValueEnum};
use iirgen_rs::codegen::{c_source, compact_listing, summary, CodeStyle};
use iirgen_rs::prelude::*;
use log::debug;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FamilyArg {
    Butterworth,
    Bessel,
    Chebyshev,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BandArg {
    Lowpass,
    Highpass,
    Bandpass,
    Bandstop,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EmitArg {
    /// Human-readable design summary.
    Summary,
    /// Compact numeric listing for post-processing.
    List,
    /// C stepping function, unrolled.
    Code,
    /// C stepping function with coefficient loops.
    CodeSimple,
}

/// Designs digital Butterworth, Bessel, and Chebyshev filters.
#[derive(Debug, Parser)]
#[clap(name = "iirgen", version, author)]
struct Opts {
    /// Filter family.
    #[clap(long, value_enum)]
    family: FamilyArg,

    /// Band shape.
    #[clap(long, value_enum)]
    band: BandArg,

    /// Filter order (1-10).
    #[clap(short, long)]
    order: usize,

    /// Corner frequency as a fraction of the sample rate.
    #[clap(short, long)]
    alpha: Option<f64>,

    /// Upper corner frequency for bandpass/bandstop.
    #[clap(long)]
    alpha2: Option<f64>,

    /// Corner frequency in Hz (requires --rate-hz).
    #[clap(long)]
    corner_hz: Option<f64>,

    /// Upper corner frequency in Hz for bandpass/bandstop.
    #[clap(long)]
    corner2_hz: Option<f64>,

    /// Sample rate in Hz, for corners given in Hz.
    #[clap(long)]
    rate_hz: Option<f64>,

    /// Chebyshev passband ripple in dB (must be negative).
    #[clap(long, allow_hyphen_values = true)]
    ripple: Option<f64>,

    /// Use the matched z-transform instead of the bilinear transform.
    #[clap(long)]
    matched_z: bool,

    /// Do not pre-warp corner frequencies.
    #[clap(long)]
    no_prewarp: bool,

    /// Output format.
    #[clap(long, value_enum, default_value = "summary")]
    emit: EmitArg,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();
    match run(&opts) {
        Ok(text) => print!("{}", text),
        Err(err) => {
            eprintln!("iirgen: {}", err);
            std::process::exit(1);
        }
    }
}

fn run(opts: &Opts) -> Result<String, DesignError> {
    let spec = build_spec(opts)?;
    debug!("designing {:?}", spec);
    let design = iirgen_rs::filter::design(&spec)?;
    Ok(match opts.emit {
        EmitArg::Summary => summary(&design),
        EmitArg::List => compact_listing(&design),
        EmitArg::Code => c_source(&design, CodeStyle::Unrolled),
        EmitArg::CodeSimple => c_source(&design, CodeStyle::Looped),
    })
}

fn build_spec(opts: &Opts) -> Result<FilterSpec, DesignError> {
    let family = match opts.family {
        FamilyArg::Butterworth | FamilyArg::Bessel if opts.ripple.is_some() => {
            return Err(DesignError::InvalidSpec {
                reason: format!("--ripple only applies to chebyshev, not {:?}", opts.family),
            });
        }
        FamilyArg::Butterworth => FilterFamily::Butterworth,
        FamilyArg::Bessel => FilterFamily::Bessel,
        FamilyArg::Chebyshev => match opts.ripple {
            Some(ripple_db) => FilterFamily::Chebyshev { ripple_db },
            None => {
                return Err(DesignError::InvalidSpec {
                    reason: "chebyshev requires --ripple".into(),
                });
            }
        },
    };

    let band = match opts.band {
        BandArg::Lowpass => BandShape::LowPass,
        BandArg::Highpass => BandShape::HighPass,
        BandArg::Bandpass => BandShape::BandPass,
        BandArg::Bandstop => BandShape::BandStop,
    };

    let mapping = if opts.matched_z {
        Mapping::MatchedZ
    } else {
        Mapping::Bilinear
    };
    let prewarp = !opts.no_prewarp;

    match (opts.alpha, opts.corner_hz) {
        (Some(_), Some(_)) => Err(DesignError::InvalidSpec {
            reason: "give corners either as --alpha or as --corner-hz, not both".into(),
        }),
        (Some(a1), None) => {
            if opts.corner2_hz.is_some() || opts.rate_hz.is_some() {
                return Err(DesignError::InvalidSpec {
                    reason: "--corner2-hz/--rate-hz do not combine with --alpha".into(),
                });
            }
            let corners = collect_corners(a1, opts.alpha2);
            FilterSpec::new(family, band, opts.order, &corners, mapping, prewarp)
        }
        (None, Some(f1)) => {
            let rate = opts.rate_hz.ok_or_else(|| DesignError::InvalidSpec {
                reason: "--corner-hz requires --rate-hz".into(),
            })?;
            if opts.alpha2.is_some() {
                return Err(DesignError::InvalidSpec {
                    reason: "--alpha2 does not combine with --corner-hz".into(),
                });
            }
            let corners = collect_corners(f1, opts.corner2_hz);
            FilterSpec::from_hz(family, band, opts.order, &corners, rate, mapping, prewarp)
        }
        (None, None) => Err(DesignError::InvalidSpec {
            reason: "a corner frequency is required (--alpha or --corner-hz)".into(),
        }),
    }
}

fn collect_corners(first: f64, second: Option<f64>) -> Vec<f64> {
    match second {
        Some(s) => vec![first, s],
        None => vec![first],
    }
}
