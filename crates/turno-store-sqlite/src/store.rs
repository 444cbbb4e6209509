//! [`SqliteStore`] — the SQLite implementation of [`AppointmentStore`].

use std::path::Path;

use turno_core::{
  appointment::{Appointment, AppointmentId, NewAppointment},
  store::AppointmentStore,
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An appointment store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  /// Idempotent: an existing store keeps all of its rows.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Map one `appointments` row, all five columns in schema order.
fn appointment_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Appointment> {
  Ok(Appointment {
    id:          AppointmentId(row.get(0)?),
    name:        row.get(1)?,
    date:        row.get(2)?,
    time:        row.get(3)?,
    description: row.get(4)?,
  })
}

// ─── AppointmentStore impl ───────────────────────────────────────────────────

impl AppointmentStore for SqliteStore {
  type Error = Error;

  async fn create(&self, new: NewAppointment) -> Result<Appointment> {
    let appointment = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO appointments (name, date, time, description)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![new.name, new.date, new.time, new.description],
        )?;
        Ok(Appointment {
          id:          AppointmentId(conn.last_insert_rowid()),
          name:        new.name,
          date:        new.date,
          time:        new.time,
          description: new.description,
        })
      })
      .await?;

    tracing::debug!(id = appointment.id.0, "appointment created");
    Ok(appointment)
  }

  async fn list_all(&self) -> Result<Vec<Appointment>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, date, time, description
           FROM appointments
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], appointment_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  async fn update(&self, id: AppointmentId, new: NewAppointment) -> Result<()> {
    let changed = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE appointments
           SET name = ?1, date = ?2, time = ?3, description = ?4
           WHERE id = ?5",
          rusqlite::params![new.name, new.date, new.time, new.description, id.0],
        )?;
        Ok(changed)
      })
      .await?;

    // Zero affected rows means the id was absent; at this level that is a
    // silent no-op, not an error.
    tracing::debug!(id = id.0, changed, "appointment updated");
    Ok(())
  }

  async fn delete(&self, id: AppointmentId) -> Result<()> {
    let changed = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "DELETE FROM appointments WHERE id = ?1",
          rusqlite::params![id.0],
        )?;
        Ok(changed)
      })
      .await?;

    tracing::debug!(id = id.0, changed, "appointment deleted");
    Ok(())
  }
}
