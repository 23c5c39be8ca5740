//! Command-line arguments for both binaries.

use std::ffi::OsString;

use bellgrid_core::{DistributionParameters, GridError};
use bellgrid_validate::{Tolerance, ToleranceError};
use clap::{Args, Parser};

/// Surface parameters shared by both binaries.
#[derive(Debug, Clone, Copy, PartialEq, Args)]
pub struct SurfaceArgs {
    /// Half-width of the sampled square
    #[arg(long, default_value_t = 6.0, allow_negative_numbers = true)]
    pub domain: f64,

    /// Centre of the surface along both axes
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    pub mean: f64,

    /// Sampling increment along each axis
    #[arg(long, default_value_t = 0.25, allow_negative_numbers = true)]
    pub step: f64,
}

impl SurfaceArgs {
    /// Validates the arguments into distribution parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] for a non-positive domain or step.
    pub fn params(&self) -> Result<DistributionParameters, GridError> {
        DistributionParameters::new(self.domain, self.mean, self.step)
    }
}

/// Plot a sampled Gaussian surface.
#[derive(Debug, Parser)]
#[command(name = "bellgrid", version)]
pub struct DemoArgs {
    /// Run the self-check routine before plotting
    #[arg(long)]
    pub test: bool,

    /// How long the self-check pretends to work, in milliseconds
    #[arg(long, default_value_t = 3000)]
    pub test_delay_ms: u64,

    /// Close the plot window as soon as it is drawn
    #[arg(long)]
    pub no_block: bool,

    #[command(flatten)]
    pub surface: SurfaceArgs,

    /// Arguments that were accepted but not recognised
    #[arg(skip)]
    pub ignored: Vec<String>,
}

/// Demo flags that stand alone.
const DEMO_SWITCHES: [&str; 6] = ["--test", "--no-block", "--help", "-h", "--version", "-V"];

/// Demo flags that take a value, either as the next argument or after `=`.
const DEMO_OPTIONS: [&str; 4] = ["--domain", "--mean", "--step", "--test-delay-ms"];

impl DemoArgs {
    /// Parses arguments, accepting the legacy single-dash `-test` flag.
    ///
    /// Recognised flags are honoured wherever they appear. Everything else
    /// is collected into [`ignored`](Self::ignored).
    pub fn parse_with_legacy<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let (known, ignored) = split_known_flags(normalize_legacy_flags(args));
        let mut parsed = Self::parse_from(known);
        parsed.ignored = ignored;
        parsed
    }
}

/// Separates recognised demo flags (and their values) from everything else.
///
/// The first argument is the program name and is always kept.
fn split_known_flags(args: Vec<OsString>) -> (Vec<OsString>, Vec<String>) {
    let mut args = args.into_iter();
    let mut known: Vec<OsString> = args.next().into_iter().collect();
    let mut ignored = Vec::new();

    while let Some(arg) = args.next() {
        let text = arg.to_string_lossy().into_owned();
        if DEMO_SWITCHES.contains(&text.as_str()) {
            known.push(arg);
        } else if DEMO_OPTIONS.contains(&text.as_str()) {
            known.push(arg);
            known.extend(args.next());
        } else if DEMO_OPTIONS
            .iter()
            .any(|option| text.strip_prefix(option).is_some_and(|rest| rest.starts_with('=')))
        {
            known.push(arg);
        } else {
            ignored.push(text);
        }
    }

    (known, ignored)
}

/// Cross-check the sampled surface against an independent backend.
///
/// Exits with a non-zero status if any axis differs.
#[derive(Debug, Parser)]
#[command(name = "bellgrid-validate", version)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub surface: SurfaceArgs,

    /// Relative tolerance of the all-close comparison
    #[arg(long, default_value_t = 1e-5)]
    pub rel_tol: f64,

    /// Absolute tolerance of the all-close comparison
    #[arg(long, default_value_t = 1e-8)]
    pub abs_tol: f64,
}

impl ValidateArgs {
    /// Validates the comparison tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is negative or non-finite.
    pub fn tolerance(&self) -> Result<Tolerance, ToleranceError> {
        Tolerance::new(self.rel_tol, self.abs_tol)
    }
}

/// Rewrites `-test` to `--test`, leaving every other argument untouched.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| if arg == "-test" { "--test".into() } else { arg })
        .collect()
}
