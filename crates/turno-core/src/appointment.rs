//! Appointment — the sole entity of the store.
//!
//! Records are deliberately plain text: date and time are stored exactly as
//! the user typed them, with no calendar interpretation anywhere. The only
//! field the application ever inspects is the id.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on creation, immutable thereafter.
/// Assignment is monotonic per store file; an id freed by a delete is never
/// handed out again.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AppointmentId(pub i64);

impl std::fmt::Display for AppointmentId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

/// One persisted appointment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
  pub id:          AppointmentId,
  pub name:        String,
  pub date:        String,
  pub time:        String,
  pub description: String,
}

/// The four mutable fields without an id — input to
/// [`create`](crate::store::AppointmentStore::create) and
/// [`update`](crate::store::AppointmentStore::update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
  pub name:        String,
  pub date:        String,
  pub time:        String,
  pub description: String,
}
