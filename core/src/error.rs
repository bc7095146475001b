//! Error types for option table validation, scanning and binding.
//!
//! Every failure is fail-fast: the first problem found aborts the parse and
//! is returned to the caller. Nothing in this crate prints or exits.

use thiserror::Error;

use crate::ValueKind;

/// Errors raised while validating an option table or parsing a command line.
///
/// Short ids are carried as `char` and displayed with their leading dash;
/// tokens taken from the command line are carried verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Two descriptors share a long name or a short id.
    #[error("duplicate option descriptor: {0}")]
    DuplicateDescriptor(String),

    /// A descriptor's long name or short id cannot be scanned.
    #[error("invalid option descriptor: {0}")]
    InvalidDescriptor(String),

    /// The command line contains an option no descriptor declares.
    #[error("unrecognized option: {0}")]
    UnrecognizedOption(String),

    /// An option that requires an argument was given none.
    #[error("missing argument for option: -{0}")]
    MissingArgument(char),

    /// A bare token that no option consumed.
    #[error("argument with no corresponding option: {0}")]
    UnexpectedPositionalArgument(String),

    /// The same option appeared more than once.
    #[error("option given more than once: -{0}")]
    DuplicateOccurrence(char),

    /// A required option never appeared on the command line.
    #[error("missing required option in command line args: -{0}")]
    MissingRequiredOption(char),

    /// A scanned option has no descriptor. Indicates a defect, not a user error.
    #[error("parsed option has no matching descriptor: -{0}")]
    UnboundOption(char),

    /// Argument text could not be converted (strict coercion only).
    #[error("cannot convert '{text}' to {kind} for option -{option}")]
    Coercion {
        option: char,
        kind: ValueKind,
        text: String,
    },
}

impl ParseError {
    /// Returns `true` when the error was caused by the command line rather
    /// than by the option table or an internal inconsistency.
    ///
    /// # Examples
    ///
    /// ```
    /// use optbind_core::ParseError;
    ///
    /// assert!(ParseError::MissingArgument('a').is_user_error());
    /// assert!(!ParseError::DuplicateDescriptor("longName1".into()).is_user_error());
    /// ```
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            Self::DuplicateDescriptor(_) | Self::InvalidDescriptor(_) | Self::UnboundOption(_)
        )
    }
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        assert_eq!(
            ParseError::MissingRequiredOption('b').to_string(),
            "missing required option in command line args: -b"
        );
        assert_eq!(
            ParseError::UnrecognizedOption("z".into()).to_string(),
            "unrecognized option: z"
        );
        let err = ParseError::Coercion {
            option: 'c',
            kind: ValueKind::Int,
            text: "abc".into(),
        };
        assert_eq!(err.to_string(), "cannot convert 'abc' to int for option -c");
    }

    #[test]
    fn test_user_error_classification() {
        assert!(ParseError::DuplicateOccurrence('a').is_user_error());
        assert!(ParseError::UnexpectedPositionalArgument("x".into()).is_user_error());
        assert!(!ParseError::UnboundOption('q').is_user_error());
        assert!(!ParseError::InvalidDescriptor("bad name".into()).is_user_error());
    }
}
