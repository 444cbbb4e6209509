//! The command layer of the presentation controller.
//!
//! The three button-style actions are modelled as an explicit [`Command`]
//! dispatched through a single handler that takes the current form contents
//! and the current listing selection. The terminal surface stays a thin
//! shell around [`dispatch`], so every rule in here is testable without a
//! terminal.

use crate::{
  appointment::{AppointmentId, NewAppointment},
  error::{DispatchError, ValidationError},
  store::AppointmentStore,
};

// ─── Form state ──────────────────────────────────────────────────────────────

/// The four entry fields, exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
  pub name:        String,
  pub date:        String,
  pub time:        String,
  pub description: String,
}

impl FormState {
  /// True when every field is non-empty. Content is never inspected beyond
  /// presence — whitespace counts, and dates and times stay free-form.
  pub fn is_complete(&self) -> bool {
    !self.name.is_empty()
      && !self.date.is_empty()
      && !self.time.is_empty()
      && !self.description.is_empty()
  }

  /// Empty all four fields.
  pub fn clear(&mut self) {
    self.name.clear();
    self.date.clear();
    self.time.clear();
    self.description.clear();
  }

  fn to_new_appointment(&self) -> NewAppointment {
    NewAppointment {
      name:        self.name.clone(),
      date:        self.date.clone(),
      time:        self.time.clone(),
      description: self.description.clone(),
    }
  }
}

// ─── Commands ────────────────────────────────────────────────────────────────

/// The three user-triggered actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  Add,
  Update,
  Delete,
}

/// What the surface must do after a successful command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
  /// One-line acknowledgement for the modal notice.
  pub message:    &'static str,
  /// Add and Update clear the entry fields; Delete leaves them as they are.
  pub clear_form: bool,
}

// ─── Dispatch ────────────────────────────────────────────────────────────────

/// Run one command against `store`.
///
/// `selection` is the id taken from the currently selected listing row, if
/// any. Validation failures return before the store is touched. Updating or
/// deleting an id that no longer exists completes silently — the store
/// treats it as a no-op and so does this layer.
pub async fn dispatch<S>(
  store: &S,
  command: Command,
  form: &FormState,
  selection: Option<AppointmentId>,
) -> Result<Applied, DispatchError<S::Error>>
where
  S: AppointmentStore,
{
  match command {
    Command::Add => {
      if !form.is_complete() {
        return Err(ValidationError::EmptyFields.into());
      }
      store
        .create(form.to_new_appointment())
        .await
        .map_err(DispatchError::Store)?;
      Ok(Applied { message: "appointment added", clear_form: true })
    }

    Command::Update => {
      // The selection check runs before the field check; the two are
      // independent and both must pass.
      let id = selection.ok_or(ValidationError::NoSelection)?;
      if !form.is_complete() {
        return Err(ValidationError::EmptyFields.into());
      }
      store
        .update(id, form.to_new_appointment())
        .await
        .map_err(DispatchError::Store)?;
      Ok(Applied { message: "appointment updated", clear_form: true })
    }

    Command::Delete => {
      let id = selection.ok_or(ValidationError::NoSelection)?;
      store.delete(id).await.map_err(DispatchError::Store)?;
      Ok(Applied { message: "appointment deleted", clear_form: false })
    }
  }
}
