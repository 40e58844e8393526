use crate::cli::MailArgs;
use crate::error::PrimerError;

use primer_core::config::SmtpConfig;
use primer_core::input::Prompter;
use primer_core::mail::{
    AsyncTransport, MailAttachment, MailSender, MessageDraft, SmtpLogin, resolve_password,
};

use std::fmt::Display;
use std::io::Write;

use log::info;

/// Compose from the flags, log in if a username is configured, send once.
pub async fn run<W: Write>(
    args: &MailArgs,
    config: &SmtpConfig,
    out: &mut W,
) -> Result<(), PrimerError> {
    let config = effective_config(args, config);
    let draft = draft(args, &config)?;

    let login = match &config.username {
        Some(username) => {
            let (password, source) = resolve_password(&config, || {
                Prompter::stdio().read_secret(&format!("SMTP password for {username}: "))
            })?;
            info!("Using SMTP password from {source:?}");
            Some(SmtpLogin::new(username.clone(), password))
        }
        None => None,
    };

    let sender = MailSender::smtp(&config, login)?;
    deliver(&sender, &draft, out).await
}

/// `config` with the `--provider` flag applied.
pub fn effective_config(args: &MailArgs, config: &SmtpConfig) -> SmtpConfig {
    let mut config = config.clone();
    if let Some(provider) = args.provider {
        config.provider = Some(provider);
    }
    config
}

/// Build the draft from flags, reading HTML and attachments from disk.
///
/// # Errors
///
/// [`PrimerError::Usage`] when no sender is known; attachment read errors
/// from the mail layer.
pub fn draft(args: &MailArgs, config: &SmtpConfig) -> Result<MessageDraft, PrimerError> {
    let from = args
        .from
        .clone()
        .or_else(|| config.from.clone())
        .or_else(|| config.username.clone())
        .ok_or_else(|| PrimerError::usage("No sender: pass --from or set smtp.from"))?;

    let mut draft = MessageDraft::new(from)
        .subject(args.subject.as_str())
        .text(args.body.as_str());
    for address in &args.to {
        draft = draft.to(address.as_str());
    }
    for address in &args.bcc {
        draft = draft.bcc(address.as_str());
    }
    if let Some(path) = &args.html {
        let html = std::fs::read_to_string(path).map_err(|e| {
            PrimerError::usage(format!("Cannot read HTML body {}: {e}", path.display()))
        })?;
        draft = draft.html(html);
    }
    for path in &args.attach {
        draft = draft.attach(MailAttachment::from_path(path)?);
    }

    Ok(draft)
}

/// Submit `draft` and confirm on `out`.
pub async fn deliver<T, W>(
    sender: &MailSender<T>,
    draft: &MessageDraft,
    out: &mut W,
) -> Result<(), PrimerError>
where
    T: AsyncTransport + Sync,
    T::Error: Display,
    W: Write,
{
    sender.send(draft).await?;
    writeln!(
        out,
        "Sent '{}' to {} recipient(s).",
        draft.subject,
        draft.recipient_count()
    )?;
    Ok(())
}
