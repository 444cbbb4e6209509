//! The `AppointmentStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `turno-store-sqlite`).
//! The presentation layer depends on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use crate::appointment::{Appointment, AppointmentId, NewAppointment};

/// Abstraction over the appointment record store.
///
/// The store never validates field content — empty strings are accepted at
/// this level. Non-emptiness is the presentation controller's job, and it
/// never reaches down here.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait AppointmentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new record and return it with its store-assigned id.
  fn create(
    &self,
    new: NewAppointment,
  ) -> impl Future<Output = Result<Appointment, Self::Error>> + Send + '_;

  /// Every record currently stored, in insertion (id) order.
  ///
  /// Each call re-executes a full scan; this is a snapshot, not a live view.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Appointment>, Self::Error>> + Send + '_;

  /// Overwrite all four mutable fields of the record matching `id`.
  /// Completes silently when no such record exists.
  fn update(
    &self,
    id: AppointmentId,
    new: NewAppointment,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Remove the record matching `id`. Completes silently when no such
  /// record exists.
  fn delete(
    &self,
    id: AppointmentId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
