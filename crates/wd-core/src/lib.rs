//! # wd-core
//!
//! Core error and configuration types for workdays-rs.
//!
//! This crate provides the building blocks shared across the other crates
//! in the workspace: the error taxonomy with its `ensure!` / `fail!`
//! macros, and the configuration types that select which holidays are
//! observed and how period boundaries are counted.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Holiday toggles and boundary inclusivity.
pub mod config;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A calendar year as supplied by callers (may be out of range before
/// validation).
pub type Year = i32;

/// A count of working days.
pub type DayCount = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use config::{HolidayToggles, Inclusivity};
pub use errors::{Error, Result};
