use thiserror::Error;

/// A scope was closed on a stopwatch that had no open scope.
///
/// This violates the stack discipline of span nesting and is unreachable
/// through the public surface, where scopes close only when their guard
/// drops. The internal close path still guards the decrement so that a
/// misuse cannot corrupt either indent counter.
#[derive(Debug, Error)]
#[error("scope closed on channel '{channel}' that has no open scope")]
#[non_exhaustive]
pub struct UnderflowError {
    /// Name of the channel whose nesting discipline was violated.
    pub channel: String,
}

/// A specialized `Result` type for scope bookkeeping, returning the crate's
/// [`UnderflowError`] as the error value.
pub(crate) type Result<T> = std::result::Result<T, UnderflowError>;
