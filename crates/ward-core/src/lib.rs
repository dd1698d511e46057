//! Core types and logic for the Ward hospital administration system.
//!
//! This crate is deliberately free of I/O, async, and framework
//! dependencies. The three components — [`directory::Directory`],
//! [`schedule::Scheduler`], and [`records::RecordKeeper`] — never call one
//! another; all coordination happens in the session layer (`ward-cli`).

pub mod directory;
pub mod error;
pub mod person;
pub mod records;
pub mod schedule;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
