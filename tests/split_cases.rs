//! Table-driven integration tests for `aturi::split` and `aturi::validate`.
//!
//! The grids below cross a set of representative authorities with every
//! combination of trailing bare delimiters, mirroring the behavior existing
//! consumers observe on the wire.

use aturi::{MAX_URI_LENGTH, ParseErrorKind, split, validate};

const AUTHORITIES: &[&str] = &[
    "localhost",
    "example.com",
    "example.com.",
    "apple.banana.cherry",
    "xn--ugbaf6g.example",
    "did:plc:scewmn2pl3oz36mxme2b6czz",
];

const COLLECTION: &str = "com.example.foorBar";
const RKEY: &str = "3jui7kd54zh2y";
const QUERY: &str = "once=1&twice=2&thrice=3&fource=4";
const FRAGMENT: &str = "path(/apple/banana/cherry)";

fn assert_parts(uri: &str, authority: &str, collection: &str, rkey: &str, query: &str, fragment: &str) {
    let parts = split(uri).unwrap_or_else(|e| panic!("split({uri:?}) failed: {e}"));
    assert_eq!(parts.authority(), authority, "authority of {uri:?}");
    assert_eq!(parts.collection(), collection, "collection of {uri:?}");
    assert_eq!(parts.rkey(), rkey, "rkey of {uri:?}");
    assert_eq!(parts.query(), query, "query of {uri:?}");
    assert_eq!(parts.fragment(), fragment, "fragment of {uri:?}");
}

#[test]
fn authority_only_with_trailing_delimiters() {
    for authority in AUTHORITIES {
        for suffix in ["", "/", "?", "#", "/?", "/#", "?#", "/?#"] {
            let uri = format!("at://{authority}{suffix}");
            assert_parts(&uri, authority, "", "", "", "");
        }
    }
}

#[test]
fn authority_and_collection_with_trailing_delimiters() {
    for authority in AUTHORITIES {
        for suffix in ["", "/", "?", "#", "/?", "/#", "?#", "/?#"] {
            let uri = format!("at://{authority}/{COLLECTION}{suffix}");
            assert_parts(&uri, authority, COLLECTION, "", "", "");
        }
    }
}

#[test]
fn authority_collection_and_rkey_with_trailing_delimiters() {
    // No "/" suffix here: a trailing slash is not a delimiter in the rkey
    // stage and would become part of the rkey itself.
    for authority in AUTHORITIES {
        for suffix in ["", "?", "#", "?#"] {
            let uri = format!("at://{authority}/{COLLECTION}/{RKEY}{suffix}");
            assert_parts(&uri, authority, COLLECTION, RKEY, "", "");
        }
    }
}

#[test]
fn rkey_keeps_trailing_slash() {
    let uri = format!("at://example.com/{COLLECTION}/{RKEY}/");
    assert_parts(&uri, "example.com", COLLECTION, &format!("{RKEY}/"), "", "");
}

#[test]
fn with_query() {
    for authority in AUTHORITIES {
        for suffix in ["", "#"] {
            let uri = format!("at://{authority}/{COLLECTION}/{RKEY}?{QUERY}{suffix}");
            assert_parts(&uri, authority, COLLECTION, RKEY, QUERY, "");
        }
    }
}

#[test]
fn with_query_and_fragment() {
    for authority in AUTHORITIES {
        let uri = format!("at://{authority}/{COLLECTION}/{RKEY}?{QUERY}#{FRAGMENT}");
        assert_parts(&uri, authority, COLLECTION, RKEY, QUERY, FRAGMENT);
    }
}

#[test]
fn fragment_without_query() {
    let uri = format!("at://example.com/{COLLECTION}/{RKEY}#{FRAGMENT}");
    assert_parts(&uri, "example.com", COLLECTION, RKEY, "", FRAGMENT);
}

#[test]
fn query_without_collection_or_rkey() {
    assert_parts("at://example.com?a=1&b=2", "example.com", "", "", "a=1&b=2", "");
}

#[test]
fn fragment_without_anything_else() {
    assert_parts("at://example.com#top", "example.com", "", "", "", "top");
}

#[test]
fn scheme_case_variants() {
    for scheme in ["at://", "AT://", "At://", "aT://"] {
        let uri = format!("{scheme}example.com");
        assert_parts(&uri, "example.com", "", "", "", "");
    }
}

#[test]
fn invalid_uris_fail() {
    let cases: &[(&str, ParseErrorKind)] = &[
        ("", ParseErrorKind::Empty),
        ("apple", ParseErrorKind::InvalidScheme),
        ("at", ParseErrorKind::InvalidScheme),
        ("at:", ParseErrorKind::InvalidScheme),
        ("at:/", ParseErrorKind::InvalidScheme),
        ("at:example.com", ParseErrorKind::InvalidScheme),
        ("https://example.com", ParseErrorKind::InvalidScheme),
        ("at://", ParseErrorKind::EmptyAuthority),
        ("at:///", ParseErrorKind::EmptyAuthority),
        ("at://?", ParseErrorKind::EmptyAuthority),
        ("at://#", ParseErrorKind::EmptyAuthority),
        (
            "at://@",
            ParseErrorKind::InvalidAuthority {
                authority: "@".to_string(),
            },
        ),
        (
            "at://@example.com",
            ParseErrorKind::InvalidAuthority {
                authority: "@example.com".to_string(),
            },
        ),
        (
            "at://user:pass@foo.com",
            ParseErrorKind::InvalidAuthority {
                authority: "user:pass@foo.com".to_string(),
            },
        ),
    ];

    for (uri, expected) in cases {
        let err = split(uri).unwrap_err();
        assert_eq!(&err.kind, expected, "uri: {uri:?}");
        assert_eq!(err.input, *uri);
        assert!(validate(uri).is_err(), "uri: {uri:?}");
    }
}

#[test]
fn too_long_fails_regardless_of_content() {
    for content in ["a", "\u{1F600}", "/"] {
        let uri: String = content.repeat(MAX_URI_LENGTH + 1);
        assert!(uri.len() > MAX_URI_LENGTH);
        let err = split(&uri).unwrap_err();
        assert!(
            matches!(err.kind, ParseErrorKind::TooLong { max, actual }
                if max == MAX_URI_LENGTH && actual == uri.len()),
            "content: {content:?}"
        );
    }
}

#[test]
fn short_collection_fails_nsid_validation() {
    let err = split("at://foo.com/example/123").unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::InvalidCollection { ref collection, .. } if collection == "example"
    ));

    let err = split("at://foo.com/example.com/123").unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::InvalidCollection { ref collection, .. } if collection == "example.com"
    ));
}

#[test]
fn valid_collection_passes() {
    assert_parts(
        "at://foo.com/com.example.foo/123",
        "foo.com",
        "com.example.foo",
        "123",
        "",
        "",
    );
}

#[test]
fn error_messages_are_verbatim() {
    let cases: &[(&str, &str)] = &[
        ("", "aturi: empty URI"),
        (
            "apple",
            "aturi: URI \"apple\" is not an at-uri because it does not begin with \"at://\"",
        ),
        ("at://", "aturi: URI \"at://\" has an empty 'authority'"),
        (
            "at://user@foo.com",
            "aturi: URI \"at://user@foo.com\" may not have an \"@\" in its authority \"user@foo.com\"",
        ),
        (
            "at://foo.com/example/123",
            "aturi: URI \"at://foo.com/example/123\" has a collection \"example\" that is not a valid NSID: NSID has 1 dot-separated segments but needs at least 3",
        ),
    ];

    for (uri, message) in cases {
        assert_eq!(&split(uri).unwrap_err().to_string(), message, "uri: {uri:?}");
    }

    let uri = format!("at://{}", "a".repeat(MAX_URI_LENGTH));
    let expected = format!(
        "aturi: URI is {} bytes long but an AT-URI may not be more than {MAX_URI_LENGTH} bytes long",
        uri.len()
    );
    assert_eq!(split(&uri).unwrap_err().to_string(), expected);
}

#[test]
fn priority_scan_is_observable() {
    // '/' later in the remainder outranks the earlier '?'.
    let err = split("at://host?x/y").unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::InvalidCollection { ref collection, .. } if collection == "y"
    ));
    assert!(err.to_string().contains("\"y\""));
}
