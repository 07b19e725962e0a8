/// Page replacement engine error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PagerError {
    /// The engine needs at least one frame.
    #[error("Invalid frame count: {0} (at least one frame is required)")]
    InvalidFrameCount(usize),

    /// Policy name does not match any of the supported policies.
    #[error("Unknown replacement policy: {0:?}")]
    UnknownPolicy(String),

    /// Miss path found neither an empty nor an occupied frame.
    ///
    /// Cannot happen for an engine with at least one frame; it means frame
    /// bookkeeping is corrupted and the engine must not be used any further.
    #[error("No candidate frame for the access at clock {clock}")]
    NoCandidateFrame {
        /// Clock value of the failed access.
        clock: u64,
    },

    /// Logical clock arrived at maximum value.
    #[error("Logical clock exhausted")]
    ClockExhausted,
}

impl PagerError {
    /// Whether the error was caused by invalid construction parameters.
    ///
    /// Configuration errors are reported before any engine exists; every other
    /// error means an existing engine is broken.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidFrameCount(_) | Self::UnknownPolicy(_))
    }
}

/// Page replacement engine result type.
pub type PagerResult<T> = Result<T, PagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            PagerError::InvalidFrameCount(0).to_string(),
            "Invalid frame count: 0 (at least one frame is required)"
        );
        assert_eq!(
            PagerError::UnknownPolicy("clock".into()).to_string(),
            "Unknown replacement policy: \"clock\""
        );
        assert_eq!(
            PagerError::NoCandidateFrame { clock: 7 }.to_string(),
            "No candidate frame for the access at clock 7"
        );
    }

    #[test]
    fn classification() {
        assert!(PagerError::InvalidFrameCount(0).is_configuration());
        assert!(PagerError::UnknownPolicy(String::new()).is_configuration());
        assert!(!PagerError::NoCandidateFrame { clock: 1 }.is_configuration());
        assert!(!PagerError::ClockExhausted.is_configuration());
    }
}
