use crate::error::PrimerError;

use primer_core::input::{IntBounds, Prompter};

use std::io::{BufRead, Write};

use log::debug;

const MIN_AGE: i64 = 0;
const MAX_AGE: i64 = 150;

/// Walk through each kind of console read and echo what came back.
pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<(), PrimerError> {
    let name = prompter.read_line("What is your name? ")?;
    let languages = prompter.read_fields("Languages you know (comma separated): ", ',')?;
    let age = prompter.read_int(
        &format!("Your age ({MIN_AGE}-{MAX_AGE}): "),
        IntBounds::between(MIN_AGE, MAX_AGE),
    )?;
    let favourite = prompter.read_choice("Tabs or spaces? ", &["tabs", "spaces"])?;
    let secret = prompter.read_secret("A secret word (not echoed on a terminal): ")?;

    debug!("Input walkthrough answered by {name}");
    let languages: Vec<&str> = languages
        .iter()
        .map(String::as_str)
        .filter(|language| !language.is_empty())
        .collect();

    let out = prompter.writer_mut();
    writeln!(out)?;
    writeln!(out, "Hello, {name}!")?;
    writeln!(out, "You know {} language(s): {}", languages.len(), languages.join(", "))?;
    writeln!(out, "You are {age} and prefer {favourite}.")?;
    writeln!(out, "Your secret is {} characters long.", secret.len())?;
    Ok(())
}
