//! Error types for the steam97 crate.

use thiserror::Error;

/// Errors that can occur while evaluating water/steam properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SteamError {
    /// The input state lies outside the IF97 range of validity.
    #[error("input outside IF97 validity range: {0}")]
    OutOfRange(String),

    /// The inputs are inside the overall validity box but no region
    /// matches them (e.g. an enthalpy/entropy pair above every region
    /// envelope).
    #[error("no IF97 region matches the given state: {0}")]
    UndefinedRegion(String),

    /// An iterative solver exhausted its iteration cap.
    #[error("{solver} did not converge within {iterations} iterations")]
    NotConverged {
        solver: &'static str,
        iterations: u32,
    },
}

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SteamError>;

/// The sentinel the legacy steam-table code returned in place of an
/// error.  Only produced when explicitly requested via [`or_sentinel`];
/// the typed API never emits it.
pub const LEGACY_ERROR_SENTINEL: f64 = 2015.0;

/// Map a property result onto the legacy error convention: any failure
/// becomes [`LEGACY_ERROR_SENTINEL`].
pub fn or_sentinel(result: Result<f64>) -> f64 {
    result.unwrap_or(LEGACY_ERROR_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convergence_error_message_is_distinct() {
        let e = SteamError::NotConverged { solver: "t4_hs", iterations: 120 };
        assert!(e.to_string().contains("did not converge"));
    }

    #[test]
    fn sentinel_mapping() {
        assert_eq!(or_sentinel(Err(SteamError::OutOfRange("p".into()))), 2015.0);
        assert_eq!(or_sentinel(Ok(1.5)), 1.5);
    }
}
