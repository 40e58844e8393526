use crate::cli::CheckArgs;
use crate::error::PrimerError;

use primer_core::config::HttpConfig;
use primer_core::http::{HttpClient, UrlCheck, check_urls};

use std::io::Write;

/// GET each URL and print one verdict line per URL.
///
/// # Errors
///
/// [`PrimerError::Primer`] naming how many URLs failed, after all are reported.
pub async fn run<W: Write>(
    args: &CheckArgs,
    config: &HttpConfig,
    out: &mut W,
) -> Result<(), PrimerError> {
    let client = HttpClient::new(config)?;
    let results = check_urls(&client, &args.urls).await;

    let mut failed = 0;
    for (url, outcome) in &results {
        match outcome {
            UrlCheck::Success => writeln!(out, "{url}: Success!")?,
            UrlCheck::HttpStatus(err) => {
                failed += 1;
                writeln!(out, "{url}: HTTP error occurred: {err}")?
            }
            UrlCheck::Other(err) => {
                failed += 1;
                writeln!(out, "{url}: Other error occurred: {err}")?
            }
        }
    }

    if failed > 0 {
        return Err(PrimerError::primer(format!(
            "{failed} of {} URLs failed",
            results.len()
        )));
    }
    Ok(())
}
