//! Composing messages: plain text, text + HTML alternative, attachments.

use crate::error::MailError;

use std::panic::Location;
use std::path::Path;

use common::ErrorLocation;
use lettre::Message;
use lettre::message::header::{ContentTransferEncoding, ContentType};
use lettre::message::{Attachment, Body, Mailbox, MultiPart, SinglePart};
use log::debug;

const OCTET_STREAM: &str = "application/octet-stream";

/// A file to attach, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAttachment {
    pub filename: String,
    pub content: Vec<u8>,
    pub content_type: String,
}

impl MailAttachment {
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
            content_type: OCTET_STREAM.to_string(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Read a file from disk as `application/octet-stream`.
    #[track_caller]
    pub fn from_path(path: &Path) -> Result<Self, MailError> {
        let content = std::fs::read(path).map_err(|e| MailError::Attachment {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("attachment"));

        debug!("Read attachment {} ({} bytes)", path.display(), content.len());
        Ok(Self::new(filename, content))
    }

    fn into_part(self) -> Result<SinglePart, MailError> {
        let content_type = ContentType::parse(&self.content_type)
            .map_err(|e| MailError::build(format!("Invalid content type '{}': {e}", self.content_type)))?;
        // Binary payloads go out base64-encoded regardless of content.
        let body = Body::new_with_encoding(self.content, ContentTransferEncoding::Base64)
            .map_err(|_| MailError::build("Attachment cannot be base64 encoded"))?;
        Ok(Attachment::new(self.filename).body(body, content_type))
    }
}

/// Everything needed to build one message.
#[derive(Debug, Clone, Default)]
pub struct MessageDraft {
    pub from: String,
    pub to: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    pub text: String,
    pub html: Option<String>,
    pub attachments: Vec<MailAttachment>,
}

impl MessageDraft {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            ..Self::default()
        }
    }

    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to.push(address.into());
        self
    }

    pub fn bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc.push(address.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.text = body.into();
        self
    }

    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.html = Some(body.into());
        self
    }

    pub fn attach(mut self, attachment: MailAttachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// All envelope recipients, Bcc included.
    pub fn recipient_count(&self) -> usize {
        self.to.len() + self.bcc.len()
    }

    /// Build the MIME message.
    ///
    /// - text only: a single `text/plain` body
    /// - text + HTML: `multipart/alternative`, plain first so clients prefer HTML
    /// - with attachments: `multipart/mixed` holding the body and one
    ///   base64 part per file
    ///
    /// Bcc recipients end up in the envelope only, not in the headers.
    ///
    /// # Errors
    ///
    /// [`MailError::Address`] for an unparseable address,
    /// [`MailError::Build`] when there are no `to` recipients.
    #[track_caller]
    pub fn build(&self) -> Result<Message, MailError> {
        if self.to.is_empty() {
            return Err(MailError::build("Message needs at least one recipient"));
        }

        let mut builder = Message::builder()
            .from(self.from.parse::<Mailbox>()?)
            .subject(self.subject.as_str());
        for address in &self.to {
            builder = builder.to(address.parse::<Mailbox>()?);
        }
        for address in &self.bcc {
            builder = builder.bcc(address.parse::<Mailbox>()?);
        }

        if self.attachments.is_empty() {
            let message = match &self.html {
                None => builder
                    .header(ContentType::TEXT_PLAIN)
                    .body(self.text.clone())?,
                Some(html) => {
                    builder.multipart(MultiPart::alternative_plain_html(self.text.clone(), html.clone()))?
                }
            };
            return Ok(message);
        }

        let mut mixed = match &self.html {
            None => MultiPart::mixed().singlepart(SinglePart::plain(self.text.clone())),
            Some(html) => MultiPart::mixed().multipart(MultiPart::alternative_plain_html(
                self.text.clone(),
                html.clone(),
            )),
        };
        for attachment in &self.attachments {
            mixed = mixed.singlepart(attachment.clone().into_part()?);
        }

        Ok(builder.multipart(mixed)?)
    }
}
