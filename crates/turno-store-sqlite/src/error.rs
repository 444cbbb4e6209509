//! Error type for `turno-store-sqlite`.

use thiserror::Error;

/// A fault of the backing SQLite store.
///
/// These are fatal by contract: nothing in this workspace retries or
/// recovers from one.
#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
