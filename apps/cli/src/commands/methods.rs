use crate::error::PrimerError;

use models::HttpMethod;

use std::io::Write;

/// One row per method: safe, idempotent, has a response body, purpose.
pub fn run<W: Write>(out: &mut W) -> Result<(), PrimerError> {
    writeln!(
        out,
        "{:<8} {:<5} {:<10} {:<5} DESCRIPTION",
        "METHOD", "SAFE", "IDEMPOTENT", "BODY"
    )?;
    for method in HttpMethod::ALL {
        writeln!(
            out,
            "{:<8} {:<5} {:<10} {:<5} {}",
            method.as_str(),
            yes_no(method.is_safe()),
            yes_no(method.is_idempotent()),
            yes_no(method.has_response_body()),
            method.description()
        )?;
    }
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
