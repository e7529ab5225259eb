//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures. Payload decoding and
/// transport concerns belong to the HTTP layer, which rejects malformed input
/// before the domain runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A lookup by item id yielded no match.
    ///
    /// The display string is the client-facing message and is surfaced
    /// verbatim to the caller.
    #[error("Item not found")]
    NotFound,
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_fixed_message() {
        assert_eq!(DomainError::not_found().to_string(), "Item not found");
    }
}
