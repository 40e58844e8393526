use primer_core::error::MailError;
use primer_core::mail::{MailAttachment, MailSender, MessageDraft};

use lettre::transport::stub::AsyncStubTransport;

fn draft() -> MessageDraft {
    MessageDraft::new("sender@example.com")
        .to("alice@example.com")
        .bcc("hidden@example.com")
        .subject("Report")
        .text("See attached.")
        .html("<p>See attached.</p>")
        .attach(MailAttachment::new("report.csv", b"a,b\n1,2\n".to_vec()).with_content_type("text/csv"))
}

/// **VALUE**: Verifies a full message reaches the transport with a Bcc-aware envelope.
///
/// **WHY THIS MATTERS**: The envelope decides who receives the mail; the
/// headers decide who can see who received it.
///
/// **BUG THIS CATCHES**: Would catch Bcc recipients missing from delivery
/// or visible in the message.
#[tokio::test]
async fn given_stub_transport_when_sent_then_envelope_has_all_recipients() {
    // GIVEN: A transport that records messages
    let sender = MailSender::new(AsyncStubTransport::new_ok());

    // WHEN: Sending the draft
    sender.send(&draft()).await.unwrap();

    // THEN: One message, three-part structure, Bcc only in the envelope
    let messages = sender.transport().messages().await;
    assert_eq!(messages.len(), 1);
    let (envelope, raw) = &messages[0];
    let recipients: Vec<String> = envelope.to().iter().map(ToString::to_string).collect();
    assert_eq!(recipients, vec!["alice@example.com", "hidden@example.com"]);
    assert!(raw.contains("multipart/mixed"));
    assert!(raw.contains("multipart/alternative"));
    assert!(raw.contains("report.csv"));
    assert!(!raw.contains("hidden@example.com"));
}

#[tokio::test]
async fn given_failing_transport_when_sent_then_transport_error() {
    let sender = MailSender::new(AsyncStubTransport::new_error());

    let err = sender.send(&draft()).await.unwrap_err();

    match err {
        MailError::Transport { message, .. } => assert!(!message.is_empty()),
        other => panic!("expected a transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_invalid_draft_when_sent_then_nothing_submitted() {
    let sender = MailSender::new(AsyncStubTransport::new_ok());

    let err = sender
        .send(&MessageDraft::new("sender@example.com").text("no recipients"))
        .await
        .unwrap_err();

    assert!(matches!(err, MailError::Build { .. }));
    assert!(sender.transport().messages().await.is_empty());
}
