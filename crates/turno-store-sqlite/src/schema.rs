//! SQL schema for the turno SQLite store.
//!
//! Executed on every open via `execute_batch`. Future migrations will be
//! gated on the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`, so
/// reopening an existing store leaves its rows untouched.
///
/// The text columns are as permissive as the store contract: empty strings
/// are legal everywhere, and nothing here enforces field presence — that is
/// the presentation controller's job. `AUTOINCREMENT` keeps assigned ids
/// monotonic; an id freed by a delete is never handed out again, even after
/// the highest row is removed.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS appointments (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT,
    date        TEXT,
    time        TEXT,
    description TEXT
);

PRAGMA user_version = 1;
";
