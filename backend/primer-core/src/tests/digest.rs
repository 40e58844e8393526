// Unit tests for Digest challenge parsing and response computation
// Uses the published RFC 2617 / RFC 7616 examples as fixed vectors

use crate::http::digest::{DigestAlgorithm, DigestChallenge, DigestRequest};

const RFC2617_CHALLENGE: &str = r#"Digest realm="testrealm@host.com", qop="auth,auth-int", nonce="dcd98b7102dd2f0e8b11d0f600bfb0c093", opaque="5ccc069c403ebaf9f0171e9517f40e41""#;

/// **VALUE**: Verifies the RFC 2617 example end-to-end.
///
/// **WHY THIS MATTERS**: A wrong hash input order produces a 401 from every
/// real server with no hint why.
#[test]
fn given_rfc2617_example_when_response_computed_then_matches_published_value() {
    // GIVEN: The RFC 2617 challenge
    let challenge = DigestChallenge::parse(RFC2617_CHALLENGE).unwrap();

    // WHEN: Computing the response for Mufasa
    let response = challenge.response(
        "Mufasa",
        "Circle Of Life",
        &DigestRequest {
            method: "GET",
            uri: "/dir/index.html",
            nonce_count: 1,
            cnonce: "0a4f113b",
        },
    );

    // THEN: Matches the RFC
    assert_eq!(response, "6629fae49393a05397450978507c4ef1");
}

#[test]
fn given_rfc7616_sha256_example_when_response_computed_then_matches_published_value() {
    let challenge = DigestChallenge::parse(
        r#"Digest realm="http-auth@example.org", qop="auth, auth-int", algorithm=SHA-256, nonce="7ypf/xlj9XXwfDPEoM4URrv/xwf94BcCAzFZH4GiTo0v", opaque="FQhe/qaU925kfnzjCev0ciny7QMkPqMAFRtzCUYo5tdS""#,
    )
    .unwrap();

    let response = challenge.response(
        "Mufasa",
        "Circle of Life",
        &DigestRequest {
            method: "GET",
            uri: "/dir/index.html",
            nonce_count: 1,
            cnonce: "f2/wE4q74E6zIJEtWaHKaf5wv/H5QzzpXusqGemxURZJ",
        },
    );

    assert_eq!(challenge.algorithm, DigestAlgorithm::Sha256);
    assert_eq!(
        response,
        "753927fa0e85d155564e2e272a28d1802ca10daf4496794697cf8db5856cb6c1"
    );
}

#[test]
fn given_challenge_when_parsed_then_extracts_all_fields() {
    let challenge = DigestChallenge::parse(RFC2617_CHALLENGE).unwrap();

    assert_eq!(challenge.realm, "testrealm@host.com");
    assert_eq!(challenge.nonce, "dcd98b7102dd2f0e8b11d0f600bfb0c093");
    assert_eq!(
        challenge.opaque.as_deref(),
        Some("5ccc069c403ebaf9f0171e9517f40e41")
    );
    assert_eq!(challenge.qop.as_deref(), Some("auth"));
    assert_eq!(challenge.algorithm, DigestAlgorithm::Md5);
}

#[test]
fn given_challenge_when_authorization_built_then_contains_every_directive() {
    let challenge = DigestChallenge::parse(RFC2617_CHALLENGE).unwrap();

    let header = challenge.authorization(
        "Mufasa",
        "Circle Of Life",
        &DigestRequest {
            method: "GET",
            uri: "/dir/index.html",
            nonce_count: 1,
            cnonce: "0a4f113b",
        },
    );

    assert!(header.starts_with("Digest username=\"Mufasa\""));
    assert!(header.contains("response=\"6629fae49393a05397450978507c4ef1\""));
    assert!(header.contains("qop=auth"));
    assert!(header.contains("nc=00000001"));
    assert!(header.contains("cnonce=\"0a4f113b\""));
    assert!(header.contains("opaque=\"5ccc069c403ebaf9f0171e9517f40e41\""));
}

#[test]
fn given_legacy_challenge_without_qop_when_authorized_then_omits_qop_directives() {
    let challenge = DigestChallenge::parse(r#"Digest realm="r", nonce="n""#).unwrap();

    let header = challenge.authorization(
        "u",
        "p",
        &DigestRequest {
            method: "GET",
            uri: "/",
            nonce_count: 1,
            cnonce: "c",
        },
    );

    assert_eq!(challenge.qop, None);
    assert!(!header.contains("qop="));
    assert!(!header.contains("cnonce="));
}

#[test]
fn given_non_digest_or_incomplete_challenge_when_parsed_then_fails() {
    assert!(DigestChallenge::parse(r#"Basic realm="r""#).is_err());
    assert!(DigestChallenge::parse(r#"Digest nonce="n""#).is_err());
    assert!(DigestChallenge::parse(r#"Digest realm="r", nonce="n", qop="auth-int""#).is_err());
    assert!(DigestChallenge::parse(r#"Digest realm="r", nonce="n", algorithm=SHA-512"#).is_err());
}

#[test]
fn given_md5_sess_challenge_when_response_computed_then_differs_from_plain_md5() {
    let plain = DigestChallenge::parse(r#"Digest realm="r", nonce="n", qop="auth""#).unwrap();
    let session =
        DigestChallenge::parse(r#"Digest realm="r", nonce="n", qop="auth", algorithm=MD5-sess"#)
            .unwrap();
    let request = DigestRequest {
        method: "GET",
        uri: "/",
        nonce_count: 1,
        cnonce: "c",
    };

    assert_ne!(
        plain.response("u", "p", &request),
        session.response("u", "p", &request)
    );
}
