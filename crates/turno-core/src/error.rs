//! Error types for `turno-core`.

use thiserror::Error;

/// A user-correctable input failure. Surfaced as a modal notice; the store
/// is never touched when one of these is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  /// Add or Update with at least one empty entry field.
  #[error("all fields are required")]
  EmptyFields,

  /// Update or Delete with no listing row selected.
  #[error("select an appointment first")]
  NoSelection,
}

/// Failure mode of [`dispatch`](crate::controller::dispatch).
///
/// Validation failures are recoverable and never touch the store; store
/// failures are fatal and pass through unhandled.
#[derive(Debug, Error)]
pub enum DispatchError<E> {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("store error: {0}")]
  Store(#[source] E),
}
