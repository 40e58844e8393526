//! Command-line surface.

use models::{HttpMethod, MailProvider};

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "primer", version, about = "Language and protocol fundamentals, one command each")]
pub struct Cli {
    /// Config file (default: the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a read-only sequence from ITEMS and inspect it
    Sequence(SequenceArgs),
    /// Show every HTTP method and its semantics
    Methods,
    /// Send one HTTP request and print the response
    Http(HttpArgs),
    /// GET each URL and report success, HTTP error or other failure
    Check(CheckArgs),
    /// Interactive console input walkthrough
    Input,
    /// Compare escaped and raw string literals
    Literals,
    /// Send an e-mail over SMTP
    Mail(MailArgs),
}

#[derive(Debug, Args)]
pub struct SequenceArgs {
    pub items: Vec<String>,

    /// Element to look up; negative values are rejected
    #[arg(long, allow_negative_numbers = true)]
    pub index: Option<i64>,
}

#[derive(Debug, Args)]
pub struct HttpArgs {
    /// GET, POST, PUT, ... (case-insensitive)
    pub method: HttpMethod,

    pub url: String,

    /// Query parameter, repeatable
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Request header, repeatable
    #[arg(long = "header", value_name = "NAME:VALUE", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// JSON request body
    #[arg(long, conflicts_with = "form")]
    pub json: Option<String>,

    /// Form field, repeatable
    #[arg(long, value_name = "KEY=VALUE", value_parser = parse_param)]
    pub form: Vec<(String, String)>,

    /// Basic auth as USER; the password is prompted
    #[arg(long, value_name = "USER", group = "auth")]
    pub basic: Option<String>,

    /// Digest auth as USER; the password is prompted
    #[arg(long, value_name = "USER", group = "auth")]
    pub digest: Option<String>,

    /// Bearer token auth; the token is prompted
    #[arg(long, group = "auth")]
    pub bearer: bool,

    /// Accept invalid TLS certificates
    #[arg(long)]
    pub insecure: bool,

    /// Fail on 4xx/5xx responses
    #[arg(long)]
    pub raise: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(required = true)]
    pub urls: Vec<String>,
}

#[derive(Debug, Args)]
pub struct MailArgs {
    /// Recipient, repeatable
    #[arg(long, required = true)]
    pub to: Vec<String>,

    /// Hidden recipient, repeatable
    #[arg(long)]
    pub bcc: Vec<String>,

    /// Sender (default: smtp.from, then smtp.username)
    #[arg(long)]
    pub from: Option<String>,

    #[arg(long, default_value = "")]
    pub subject: String,

    /// Plain text body
    #[arg(long, default_value = "")]
    pub body: String,

    /// File holding an HTML alternative body
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// File to attach, repeatable
    #[arg(long, value_name = "FILE")]
    pub attach: Vec<PathBuf>,

    /// gmail, yahoo, outlook, aol or att
    #[arg(long)]
    pub provider: Option<MailProvider>,
}

pub fn parse_param(text: &str) -> Result<(String, String), String> {
    split_pair(text, '=')
}

pub fn parse_header(text: &str) -> Result<(String, String), String> {
    split_pair(text, ':')
}

fn split_pair(text: &str, separator: char) -> Result<(String, String), String> {
    let (key, value) = text
        .split_once(separator)
        .ok_or_else(|| format!("expected KEY{separator}VALUE, got '{text}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{text}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
