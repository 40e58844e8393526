use crate::cli::HttpArgs;
use crate::error::PrimerError;

use common::RedactedSecret;
use primer_core::config::HttpConfig;
use primer_core::http::{Auth, HttpClient, RequestOptions};
use primer_core::input::Prompter;

use std::io::Write;

use log::debug;
use serde_json::Value;

/// Prompt for the password or token if an auth flag needs one, then send.
pub async fn run<W: Write>(
    args: &HttpArgs,
    config: &HttpConfig,
    out: &mut W,
) -> Result<(), PrimerError> {
    let secret = match secret_prompt(args) {
        Some(prompt) => Some(Prompter::stdio().read_secret(prompt)?),
        None => None,
    };
    let options = request_options(args, secret)?;
    send(args, config, options, out).await
}

/// What to ask for, if the chosen auth needs a secret.
pub fn secret_prompt(args: &HttpArgs) -> Option<&'static str> {
    if args.basic.is_some() || args.digest.is_some() {
        Some("Password: ")
    } else if args.bearer {
        Some("Token: ")
    } else {
        None
    }
}

/// Translate the flags into request options.
///
/// # Errors
///
/// [`PrimerError::Usage`] for an unparseable `--json` body or an auth flag
/// without its secret.
pub fn request_options(
    args: &HttpArgs,
    secret: Option<RedactedSecret>,
) -> Result<RequestOptions, PrimerError> {
    let mut options = RequestOptions::new()
        .with_params(args.params.iter().cloned())
        .with_headers(args.headers.iter().cloned());

    if let Some(json) = &args.json {
        let body: Value = serde_json::from_str(json)
            .map_err(|e| PrimerError::usage(format!("--json is not valid JSON: {e}")))?;
        options = options.with_json(body);
    } else if !args.form.is_empty() {
        options = options.with_form(args.form.iter().cloned());
    }

    let auth = match (secret_prompt(args), secret) {
        (None, _) => None,
        (Some(_), None) => return Err(PrimerError::usage("Authentication needs a secret")),
        (Some(_), Some(secret)) => Some(if let Some(username) = &args.basic {
            Auth::Basic {
                username: username.clone(),
                password: secret,
            }
        } else if let Some(username) = &args.digest {
            Auth::Digest {
                username: username.clone(),
                password: secret,
            }
        } else {
            Auth::Bearer(secret)
        }),
    };
    if let Some(auth) = auth {
        options = options.with_auth(auth);
    }

    Ok(options)
}

/// Send the request and print status line, headers and body.
pub async fn send<W: Write>(
    args: &HttpArgs,
    config: &HttpConfig,
    options: RequestOptions,
    out: &mut W,
) -> Result<(), PrimerError> {
    let mut config = config.clone();
    if args.insecure {
        config.verify_tls = false;
    }

    let client = HttpClient::new(&config)?;
    let response = client.request(args.method, &args.url, options).await?;
    debug!("{} {} answered from {}", args.method, args.url, response.url());

    if args.raise {
        response.raise_for_status()?;
    }

    writeln!(out, "HTTP {} {}", response.status(), response.reason())?;
    for (name, value) in response.headers() {
        writeln!(out, "{name}: {}", value.to_str().unwrap_or("<binary>"))?;
    }
    writeln!(out)?;
    if args.method.has_response_body() {
        writeln!(out, "{}", response.text()?)?;
    }
    Ok(())
}
