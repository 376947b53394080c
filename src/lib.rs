//! Core library for the Firefly III automation setup utilities.
//!
//! Two independent tools share this crate: the spreadsheet-to-CSV converter
//! ([`convert`], backed by the adapters in [`io`] and the table in [`model`])
//! and the integration checklist ([`checklist`]). Each has its own binary
//! under `src/bin`.

pub mod checklist;
pub mod convert;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;

pub use error::{Result, ToolError};
