pub mod check;
pub mod http;
pub mod input;
pub mod literals;
pub mod mail;
pub mod methods;
pub mod sequence;

use crate::cli::Command;
use crate::error::PrimerError;

use primer_core::AppConfig;
use primer_core::input::Prompter;

use std::io::stdout;

/// Run one parsed command against `config`, writing results to stdout.
pub async fn dispatch(command: Command, config: &AppConfig) -> Result<(), PrimerError> {
    let mut out = stdout();

    match command {
        Command::Sequence(args) => sequence::run(&args, &mut out),
        Command::Methods => methods::run(&mut out),
        Command::Http(args) => http::run(&args, &config.http, &mut out).await,
        Command::Check(args) => check::run(&args, &config.http, &mut out).await,
        Command::Input => input::run(&mut Prompter::stdio()),
        Command::Literals => literals::run(&mut out),
        Command::Mail(args) => mail::run(&args, &config.smtp, &mut out).await,
    }
}
