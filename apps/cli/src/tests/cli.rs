// Unit tests for argument parsing

use crate::cli::{Cli, Command, parse_header, parse_param};

use models::{HttpMethod, MailProvider};

use clap::{CommandFactory, Parser};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("primer").chain(args.iter().copied())).unwrap()
}

#[test]
fn given_cli_definition_when_debug_asserted_then_consistent() {
    Cli::command().debug_assert();
}

/// **VALUE**: Verifies a negative index parses as a value, not a flag.
///
/// **BUG THIS CATCHES**: `--index -1` rejected by clap as an unknown option,
/// so the "negative index" error path could never be reached.
#[test]
fn given_negative_index_when_parsed_then_kept_as_value() {
    let cli = parse(&["sequence", "a", "b", "--index", "-1"]);

    match cli.command {
        Command::Sequence(args) => {
            assert_eq!(args.items, vec!["a", "b"]);
            assert_eq!(args.index, Some(-1));
        }
        other => panic!("expected sequence, got {other:?}"),
    }
}

#[test]
fn given_http_flags_when_parsed_then_pairs_split() {
    let cli = parse(&[
        "-vv",
        "http",
        "post",
        "https://httpbin.org/post",
        "--param",
        "q=rust",
        "--header",
        "X-Trace: abc",
        "--form",
        "name=Ada",
        "--basic",
        "user",
    ]);

    assert_eq!(cli.verbose, 2);
    match cli.command {
        Command::Http(args) => {
            assert_eq!(args.method, HttpMethod::Post);
            assert_eq!(args.params, vec![("q".to_string(), "rust".to_string())]);
            assert_eq!(args.headers, vec![("X-Trace".to_string(), "abc".to_string())]);
            assert_eq!(args.form, vec![("name".to_string(), "Ada".to_string())]);
            assert_eq!(args.basic.as_deref(), Some("user"));
        }
        other => panic!("expected http, got {other:?}"),
    }
}

#[test]
fn given_two_auth_flags_when_parsed_then_rejected() {
    let result = Cli::try_parse_from([
        "primer", "http", "get", "https://x.test", "--basic", "u", "--bearer",
    ]);

    assert!(result.is_err());
}

#[test]
fn given_json_and_form_when_parsed_then_rejected() {
    let result = Cli::try_parse_from([
        "primer", "http", "post", "https://x.test", "--json", "{}", "--form", "a=b",
    ]);

    assert!(result.is_err());
}

#[test]
fn given_mail_flags_when_parsed_then_repeatable_and_provider_typed() {
    let cli = parse(&[
        "--config",
        "/tmp/primer.toml",
        "mail",
        "--to",
        "a@example.com",
        "--to",
        "b@example.com",
        "--bcc",
        "c@example.com",
        "--provider",
        "Gmail",
        "--attach",
        "report.pdf",
    ]);

    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/primer.toml")));
    match cli.command {
        Command::Mail(args) => {
            assert_eq!(args.to.len(), 2);
            assert_eq!(args.bcc, vec!["c@example.com"]);
            assert_eq!(args.provider, Some(MailProvider::Gmail));
            assert_eq!(args.attach.len(), 1);
            assert_eq!(args.subject, "");
        }
        other => panic!("expected mail, got {other:?}"),
    }
}

#[test]
fn given_pair_text_when_split_then_trimmed_or_rejected() {
    assert_eq!(parse_param("a=b=c"), Ok(("a".to_string(), "b=c".to_string())));
    assert_eq!(parse_header("Accept : text/html"), Ok(("Accept".to_string(), "text/html".to_string())));
    assert!(parse_param("novalue").is_err());
    assert!(parse_param("=x").is_err());
}
