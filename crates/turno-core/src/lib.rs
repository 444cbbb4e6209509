//! Core types and trait definitions for the turno appointment book.
//!
//! This crate is deliberately free of database and terminal dependencies.
//! All other crates depend on it; it depends on nothing heavier than serde.

pub mod appointment;
pub mod controller;
pub mod error;
pub mod store;

pub use error::{DispatchError, ValidationError};
