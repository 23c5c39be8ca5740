//! Shared plumbing for the `bellgrid` and `bellgrid-validate` binaries.

pub mod args;

use std::{thread, time::Duration};

use bellgrid_validate::ComparisonResult;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
}

/// Stand-in self-check triggered by `--test`.
///
/// Waits for `delay` to mimic a long-running check, then reports and returns
/// `passes` unchanged.
pub fn self_check(passes: bool, delay: Duration) -> bool {
    info!("running a complex test...");
    thread::sleep(delay);

    if passes {
        info!("the function to test passes");
    } else {
        warn!("the function to test fails");
    }

    passes
}

/// Process exit status for a cross-check: `0` on success, `1` otherwise.
#[must_use]
pub fn exit_status(result: &ComparisonResult) -> u8 {
    u8::from(!result.success())
}

#[cfg(test)]
mod tests {
    use bellgrid_validate::AxisStatus;

    use super::*;

    #[test]
    fn exit_status_reflects_comparison() {
        let mut result = ComparisonResult {
            x: AxisStatus::Equal,
            y: AxisStatus::Equal,
            z: AxisStatus::Close { max_abs_diff: 1e-8 },
        };
        assert_eq!(exit_status(&result), 0);

        result.y = AxisStatus::Differ { max_abs_diff: 0.5 };
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn self_check_echoes_outcome() {
        assert!(self_check(true, Duration::ZERO));
        assert!(!self_check(false, Duration::ZERO));
    }
}
