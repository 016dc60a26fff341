//! Error types for roll analysis.
//!
//! All errors that can occur while analyzing a roll are represented
//! by the `RollError` enum. Extraction never fails; unparseable lines
//! are skipped.

use thiserror::Error;

/// Errors that can occur during roll analysis and rendering.
///
/// # Examples
///
/// ```rust
/// use rollgrade::RollError;
///
/// let err = RollError::InvalidActivationTime { activation_time: 0.0 };
/// println!("{}", err); // "Activation time must be positive, got 0"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RollError {
    /// The activation time used by a calculation was zero, negative or NaN.
    ///
    /// Raised for the merged activation time and for the boosted
    /// activation time produced by the bonus stack.
    #[error("Activation time must be positive, got {activation_time}")]
    InvalidActivationTime { activation_time: f64 },

    /// An export template referenced a placeholder that does not exist.
    #[error("Unknown template placeholder: {{{0}}}")]
    InvalidTemplate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RollError::InvalidActivationTime {
            activation_time: -3.5,
        };
        assert!(err.to_string().contains("-3.5"));
    }

    #[test]
    fn test_template_error_display() {
        let err = RollError::InvalidTemplate("bogus".to_string());
        assert_eq!(err.to_string(), "Unknown template placeholder: {bogus}");
    }
}
