//! Commands module
//!
//! Interaction handlers organized by responsibility: one-shot search,
//! single-object inspection, and the interactive browse session.

pub mod browse;
pub mod inspect;
pub mod search;

use std::io::Write;

use serde::Serialize;

use crate::error::ExploreError;

/// How views are written to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Write a value as a pretty JSON document followed by a newline
fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), ExploreError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
