use crate::error::PrimerError;

use models::literals::{samples, visible_escapes};

use std::io::Write;

/// Print each sample as written and as the compiler stored it.
pub fn run<W: Write>(out: &mut W) -> Result<(), PrimerError> {
    for (label, text) in samples() {
        writeln!(out, "== {label} ==")?;
        writeln!(out, "{text}")?;
        writeln!(out, "stored as: \"{}\"", visible_escapes(text))?;
        writeln!(out, "length:    {} bytes", text.len())?;
    }
    Ok(())
}
