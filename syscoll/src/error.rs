use thiserror::Error;

/// Result alias used by every fallible collection operation
pub type Result<T> = core::result::Result<T, CollectionError>;

/// Error types for collection, enumeration and query operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CollectionError {
    /// Index is outside the live window of a list
    #[error("Index out of range: index {index} is not valid for a list of count {count}")]
    IndexOutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current number of elements
        count: usize,
    },
    /// A size argument is outside the allowed range
    #[error("Argument out of range: {parameter} = {value}, {reason}")]
    ArgumentOutOfRange {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Value that was passed
        value: usize,
        /// Why the value was rejected
        reason: &'static str,
    },
    /// A callback argument does not carry an invocable target
    #[error("Invalid argument: {parameter} must be callable")]
    NotInvocable {
        /// Name of the offending parameter
        parameter: &'static str,
    },
    /// Strict add with a key that is already present
    #[error("An item with the same key has already been added")]
    DuplicateKey,
    /// Strict read of a key that is not present
    #[error("The given key was not present in the dictionary")]
    KeyNotFound,
    /// Null sentinel passed where a key is required
    #[error("Value cannot be null: parameter {parameter}")]
    NullArgument {
        /// Name of the offending parameter
        parameter: &'static str,
    },
    /// `current` read before the first `move_next`
    #[error("Enumeration has not started")]
    EnumerationNotStarted,
    /// `current` read after `move_next` returned false
    #[error("Enumeration already finished")]
    EnumerationEnded,
    /// First element requested from an empty sequence
    #[error("Sequence contains no elements")]
    EmptySequence,
    /// No element satisfied the predicate
    #[error("Sequence contains no matching element")]
    NoMatchingElement,
    /// Natural ordering requested for elements that do not compare
    #[error("Failed to compare two elements in the sequence")]
    NotComparable,
}

/// Coarse failure category of a [`CollectionError`]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ErrorKind {
    OutOfRange,
    InvalidArgument,
    DuplicateKey,
    KeyNotFound,
    InvalidState,
    NullArgument,
}

impl CollectionError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. } | Self::ArgumentOutOfRange { .. } => ErrorKind::OutOfRange,
            Self::NotInvocable { .. } => ErrorKind::InvalidArgument,
            Self::DuplicateKey => ErrorKind::DuplicateKey,
            Self::KeyNotFound => ErrorKind::KeyNotFound,
            Self::NullArgument { .. } => ErrorKind::NullArgument,
            Self::EnumerationNotStarted
            | Self::EnumerationEnded
            | Self::EmptySequence
            | Self::NoMatchingElement
            | Self::NotComparable => ErrorKind::InvalidState,
        }
    }
}
