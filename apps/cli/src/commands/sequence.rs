use crate::cli::SequenceArgs;
use crate::error::PrimerError;

use models::{FrozenSeq, Sequence, index_from_signed};

use std::io::Write;

use log::debug;

/// Freeze the items and show what the container answers.
pub fn run<W: Write>(args: &SequenceArgs, out: &mut W) -> Result<(), PrimerError> {
    let items: FrozenSeq<String> = args.items.iter().cloned().collect();
    debug!("Built sequence of {} items", items.len());

    writeln!(out, "items:  {:?}", items.as_slice())?;
    writeln!(out, "len:    {}", items.len())?;
    writeln!(out, "first:  {:?}", Sequence::first(&items))?;
    writeln!(out, "last:   {:?}", Sequence::last(&items))?;

    if let Some(index) = args.index {
        let position = index_from_signed(index, items.len())?;
        let element = items.element_at(position)?;
        writeln!(out, "[{index}]: {element}")?;
    }

    Ok(())
}
