use primer::cli::{CheckArgs, Cli, Command};
use primer::commands::{check, http, mail};
use primer::error::PrimerError;

use primer_core::config::HttpConfig;
use primer_core::http::RetryPolicy;
use primer_core::mail::{MailSender, MessageDraft};

use clap::Parser;
use lettre::transport::stub::AsyncStubTransport;
use wiremock::matchers::{body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for command handlers driving primer-core
// Arguments go through clap exactly as a user would type them
// ============================================================================

fn http_config() -> HttpConfig {
    HttpConfig {
        retry: RetryPolicy::none(),
        ..HttpConfig::default()
    }
}

fn http_args(args: &[&str]) -> primer::cli::HttpArgs {
    let cli = Cli::try_parse_from(["primer", "http"].into_iter().chain(args.iter().copied()))
        .expect("Failed to parse http arguments");
    match cli.command {
        Command::Http(args) => args,
        other => panic!("expected http, got {other:?}"),
    }
}

/// **VALUE**: Verifies `primer http` prints status line, headers and decoded body.
///
/// **WHY THIS MATTERS**: This is the whole HTTP path a user exercises: flag
/// parsing, option building, the request, and response rendering.
///
/// **BUG THIS CATCHES**: Would catch form flags not reaching the body or
/// `--param` pairs dropped between clap and reqwest.
#[tokio::test]
async fn given_post_with_form_and_params_when_sent_then_response_printed() {
    // GIVEN: A server expecting the exact form body and query
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/post"))
        .and(query_param("debug", "1"))
        .and(body_string("name=Ada"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-served-by", "mock")
                .set_body_string("accepted"),
        )
        .expect(1)
        .mount(&server)
        .await;
    let url = format!("{}/post", server.uri());
    let args = http_args(&["post", &url, "--param", "debug=1", "--form", "name=Ada"]);

    // WHEN: Running the command into a buffer
    let options = http::request_options(&args, None).unwrap();
    let mut out = Vec::new();
    http::send(&args, &http_config(), options, &mut out).await.unwrap();

    // THEN: Rendered like a raw HTTP response
    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with("HTTP 200 OK\n"));
    assert!(output.contains("x-served-by: mock"));
    assert!(output.ends_with("\naccepted\n"));
}

#[tokio::test]
async fn given_raise_flag_and_404_when_sent_then_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let args = http_args(&["get", &server.uri(), "--raise"]);

    let mut out = Vec::new();
    let result = http::send(&args, &http_config(), http::request_options(&args, None).unwrap(), &mut out).await;

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("HTTP Status Error: 404 Not Found"));
    assert!(out.is_empty());
}

#[tokio::test]
async fn given_failing_url_when_checked_then_all_reported_and_error_returned() {
    let server = MockServer::start().await;
    Mock::given(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(path("/boom"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let args = CheckArgs {
        urls: vec![format!("{}/ok", server.uri()), format!("{}/boom", server.uri())],
    };

    let mut out = Vec::new();
    let result = check::run(&args, &http_config(), &mut out).await;

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("/ok: Success!"));
    assert!(output.contains("/boom: HTTP error occurred: HTTP Status Error: 500"));
    assert!(matches!(result, Err(PrimerError::Primer { ref message, .. }) if message == "1 of 2 URLs failed"));
}

#[tokio::test]
async fn given_stub_transport_when_delivered_then_confirmation_printed() {
    let sender = MailSender::new(AsyncStubTransport::new_ok());
    let draft = MessageDraft::new("sender@example.com")
        .to("alice@example.com")
        .bcc("bob@example.com")
        .subject("Status")
        .text("All good");

    let mut out = Vec::new();
    mail::deliver(&sender, &draft, &mut out).await.unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Sent 'Status' to 2 recipient(s).\n");
    assert_eq!(sender.transport().messages().await.len(), 1);
}
