//! Error types for usmarketcal.
//!
//! All failures are collapsed into a single `thiserror`-derived enum.  The
//! `ensure!` and `fail!` macros give precondition checks and hard failures a
//! uniform shape across the workspace.

use thiserror::Error;

/// The top-level error type used throughout usmarketcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// The underlying date primitive could not represent a date.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A roll kept landing on closed days past the configured safety cap.
    ///
    /// The calendar never produces closed runs this long, so hitting the cap
    /// points at a broken holiday rule rather than a caller mistake.
    #[error("roll from {start} exceeded {steps} consecutive closed days")]
    RollLimitExceeded {
        /// The date-time the roll started from.
        start: String,
        /// Number of closed days skipped before giving up.
        steps: u32,
    },
}

/// Shorthand `Result` type used throughout usmarketcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use usmc_core::{ensure, errors::Error};
/// fn positive(n: i64) -> usmc_core::errors::Result<i64> {
///     ensure!(n > 0, "n must be positive, got {n}");
///     Ok(n)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use usmc_core::{fail, errors::Error};
/// fn always_err() -> usmc_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
