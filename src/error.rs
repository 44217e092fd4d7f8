//! Crate-level error types.

use std::fmt;

/// Errors produced by the cursor-companion crate.
#[derive(Debug)]
pub enum CompanionError {
    /// A configuration value was rejected during validation.
    InvalidOption {
        /// Dotted path of the offending field (e.g. `timing.idle_delay_ms`).
        field: &'static str,
        /// Human-readable reason the value was rejected.
        reason: String,
    },
    /// `start` was called on a companion that is already running.
    AlreadyStarted,
    /// The companion was disposed and cannot be restarted.
    Disposed,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl CompanionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CompanionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOption { field, reason } => {
                write!(f, "invalid option `{field}`: {reason}")
            }
            Self::AlreadyStarted => write!(f, "companion is already started"),
            Self::Disposed => write!(f, "companion has been disposed"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for CompanionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CompanionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_option_names_the_field() {
        let err = CompanionError::invalid("motion.speed_factor", "must be finite");
        assert_eq!(
            err.to_string(),
            "invalid option `motion.speed_factor`: must be finite"
        );
    }

    #[test]
    fn io_errors_expose_their_source() {
        let err = CompanionError::from(std::io::Error::other("disk gone"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&CompanionError::Disposed).is_none());
    }
}
