use super::{validate, Connection, Method, StatusCode, Validator, Version};
use crate::config::Config;
use crate::error::ParseError;
use crate::tree::ParseTree;

macro_rules! test {
    ($input:literal => $status:ident) => {{
        let tree = match ParseTree::parse($input) {
            Ok(tree) => tree,
            Err(err) => panic!("failed to parse {:?}: {err}", $input.escape_ascii().to_string()),
        };
        let request = validate(&tree);
        assert_eq!(
            request.status(),
            StatusCode::$status,
            "validating {:?}",
            $input.escape_ascii().to_string()
        );
        request
    }};
}

const _: () = {
    const fn is_send_sync<T: Send + Sync>() { }
    is_send_sync::<super::Request>();
    is_send_sync::<Validator<'static>>();
    is_send_sync::<StatusCode>();
};

#[test]
fn test_valid_request() {
    let request = test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\n\r\n" => OK);
    assert_eq!(request.method(), Some(Method::GET));
    assert_eq!(request.version(), Some(Version::HTTP_11));
    assert_eq!(request.host(), Some(0));
    assert_eq!(request.host_name(&Config::new()), Some("site1.fr"));
    assert_eq!(request.target(), b"/");
    assert_eq!(request.connection(), Connection::KeepAlive);
    assert!(request.is_valid());

    let request = test!(b"HEAD /index.html HTTP/1.0\r\n\r\n" => OK);
    assert_eq!(request.method(), Some(Method::HEAD));
    assert_eq!(request.version(), Some(Version::HTTP_10));
    assert_eq!(request.host(), None);
    assert_eq!(request.host_name(&Config::new()), Some("site1.fr"));
    assert_eq!(request.target(), b"/index.html");
    assert_eq!(request.connection(), Connection::Close);
}

#[test]
fn test_method() {
    let request = test!(b"FOO / HTTP/1.1\r\n\r\n" => NOT_IMPLEMENTED);
    assert_eq!(request.method(), None);
    assert_eq!(request.version(), None);
    assert_eq!(request.target(), b"");

    test!(b"get / HTTP/1.1\r\nHost: site1.fr\r\n\r\n" => NOT_IMPLEMENTED);
    test!(b"GETS / HTTP/1.1\r\nHost: site1.fr\r\n\r\n" => NOT_IMPLEMENTED);
    test!(b"POST / HTTP/1.1\r\nHost: site1.fr\r\nContent-Length: 2\r\n\r\nok" => NOT_IMPLEMENTED);

    assert_eq!(Method::from_bytes(b"GET"), Some(Method::GET));
    assert_eq!(Method::from_bytes(b"HEAD"), Some(Method::HEAD));
    assert_eq!(Method::from_bytes(b"GE"), None);
    assert_eq!(Method::HEAD.as_str(), "HEAD");
    assert!(Method::HEAD.is_head());
    assert!(!Method::GET.is_head());
}

#[test]
fn test_target() {
    let request = test!(b"GET /a/b/../c HTTP/1.1\r\nHost: site1.fr\r\n\r\n" => OK);
    assert_eq!(request.target(), b"/a/c");

    let request = test!(b"GET /a/%2e%2e/b HTTP/1.1\r\nHost: site1.fr\r\n\r\n" => OK);
    assert_eq!(request.target(), b"/b");

    let request = test!(b"GET /%2e%2e/%2e%2e/etc/passwd HTTP/1.1\r\nHost: site1.fr\r\n\r\n" => OK);
    assert_eq!(request.target(), b"/etc/passwd");

    let request = test!(b"GET /docs/?q=%2e%2e HTTP/1.1\r\nHost: site1.fr\r\n\r\n" => OK);
    assert_eq!(request.target(), b"/docs/");
    assert_eq!(request.target_str(), Some("/docs/"));

    // decoded bytes are kept exactly, even when not UTF-8
    let latin = test!(b"GET /caf%E9 HTTP/1.0\r\n\r\n" => OK);
    let high = test!(b"GET /caf%FF HTTP/1.0\r\n\r\n" => OK);
    assert_eq!(latin.target(), b"/caf\xE9");
    assert_eq!(high.target(), b"/caf\xFF");
    assert_ne!(latin.target(), high.target());
    assert_eq!(latin.target_str(), None);
}

#[test]
fn test_version() {
    let request = test!(b"GET / HTTP/1.2\r\nHost: site1.fr\r\n\r\n" => HTTP_VERSION_NOT_SUPPORTED);
    assert_eq!(request.method(), Some(Method::GET));
    assert_eq!(request.target(), b"/");
    assert_eq!(request.version(), None);

    test!(b"GET / HTTP/2.0\r\nHost: site1.fr\r\n\r\n" => HTTP_VERSION_NOT_SUPPORTED);
    test!(b"GET / http/1.1\r\nHost: site1.fr\r\n\r\n" => HTTP_VERSION_NOT_SUPPORTED);

    assert_eq!(Version::from_bytes(b"HTTP/1.1"), Some(Version::HTTP_11));
    assert_eq!(Version::from_bytes(b"HTTP/1.0"), Some(Version::HTTP_10));
    assert_eq!(Version::HTTP_10.as_str(), "HTTP/1.0");
}

#[test]
fn test_host() {
    test!(b"GET / HTTP/1.1\r\n\r\n" => BAD_REQUEST);
    test!(b"GET / HTTP/1.0\r\n\r\n" => OK);
    test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nHost: site1.fr\r\n\r\n" => BAD_REQUEST);
    test!(b"GET / HTTP/1.0\r\nHost: site1.fr\r\nHost: site2.fr\r\n\r\n" => BAD_REQUEST);

    let request = test!(b"GET / HTTP/1.1\r\nHost: site2.fr:8080\r\n\r\n" => OK);
    assert_eq!(request.host(), Some(1));
    assert_eq!(request.host_name(&Config::new()), Some("site2.fr"));

    let request = test!(b"GET / HTTP/1.1\r\nHost: www.fake.com\r\n\r\n" => OK);
    assert_eq!(request.host(), Some(3));

    // exact match only
    let request = test!(b"GET / HTTP/1.1\r\nHost: site1.fr.evil\r\n\r\n" => OK);
    assert_eq!(request.host(), None);
    let request = test!(b"GET / HTTP/1.1\r\nHost: SITE1.FR\r\n\r\n" => OK);
    assert_eq!(request.host(), None);

    let request = test!(b"GET / HTTP/1.1\r\nHost: 127.0.0.1\r\n\r\n" => OK);
    assert_eq!(request.host(), None);

    let request = test!(b"GET / HTTP/1.1\r\nHost: [::1]\r\n\r\n" => OK);
    assert_eq!(request.host(), None);
}

#[test]
fn test_host_config() {
    let config = Config::new()
        .with_hosts(["example.com", "example.org"])
        .with_default_host(1);
    let validator = Validator::new(&config);

    let tree = ParseTree::parse(b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
    let request = validator.validate(&tree);
    assert_eq!(request.status(), StatusCode::OK);
    assert_eq!(request.host(), Some(0));
    assert_eq!(request.host_name(&config), Some("example.com"));

    let tree = ParseTree::parse(b"GET / HTTP/1.1\r\nHost: site1.fr\r\n\r\n").unwrap();
    let request = validator.validate(&tree);
    assert_eq!(request.host(), None);
    assert_eq!(request.host_name(&config), Some("example.org"));

    let config = Config::new().with_default_host(42);
    assert_eq!(config.default_host(), 0);
    assert_eq!(config.hosts().len(), 4);
}

#[test]
fn test_framing() {
    test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nContent-Length: 3\r\nContent-Length: 4\r\n\r\nabcd" => BAD_REQUEST);
    test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nContent-Length: 4\r\nContent-Length: 4\r\n\r\nabcd" => OK);
    test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nContent-Length: 4\r\nContent-Length: 04\r\n\r\nabcd" => BAD_REQUEST);
    test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nContent-Length: 0\r\n\r\n" => OK);

    test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nTransfer-Encoding: chunked\r\n\r\n0\r\n\r\n" => OK);
    test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nTransfer-Encoding: gzip, chunked\r\n\r\n" => BAD_REQUEST);
    test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nTransfer-Encoding: Chunked\r\n\r\n" => BAD_REQUEST);
    test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nTransfer-Encoding: chunked\r\nContent-Length: 3\r\n\r\nabc" => BAD_REQUEST);
    test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nContent-Length: 3\r\nTransfer-Encoding: chunked\r\n\r\nabc" => BAD_REQUEST);

    // non numeric values still count as a Content-Length header
    test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nTransfer-Encoding: chunked\r\nContent-Length: abc\r\n\r\n" => BAD_REQUEST);
    test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\ncontent-length: abc\r\nTransfer-Encoding: chunked\r\n\r\n" => BAD_REQUEST);
    test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nContent-Length: 4\r\nContent-Length: abc\r\n\r\nabcd" => BAD_REQUEST);
    test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nContent-Length: abc\r\nContent-Length: abc\r\n\r\n" => OK);
}

#[test]
fn test_connection() {
    let request = test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nConnection: close\r\n\r\n" => OK);
    assert_eq!(request.connection(), Connection::Close);

    let request = test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nConnection: upgrade, CLOSE, keep-alive\r\n\r\n" => OK);
    assert_eq!(request.connection(), Connection::Close);

    let request = test!(b"GET / HTTP/1.1\r\nHost: site1.fr\r\nConnection: Keep-Alive\r\nConnection: close\r\n\r\n" => OK);
    assert_eq!(request.connection(), Connection::KeepAlive);

    let request = test!(b"GET / HTTP/1.0\r\nConnection: keep-alive\r\n\r\n" => OK);
    assert_eq!(request.connection(), Connection::KeepAlive);

    let request = test!(b"GET / HTTP/1.0\r\nConnection: upgrade\r\n\r\n" => OK);
    assert_eq!(request.connection(), Connection::Close);

    assert_eq!(Connection::KeepAlive.as_str(), "keep-alive");
    assert!(!Connection::Close.is_keep_alive());
}

#[test]
fn test_status() {
    assert_eq!(StatusCode::BAD_REQUEST.status_line(), "HTTP/1.1 400 Bad Request");
    assert_eq!(StatusCode::OK.as_str(), "200 OK");
    assert_eq!(StatusCode::HTTP_VERSION_NOT_SUPPORTED.message(), "HTTP Version Not Supported");
    assert_eq!(StatusCode::from_u16(404), Some(StatusCode::NOT_FOUND));
    assert_eq!(StatusCode::from_u16(418), None);
    assert_eq!(StatusCode::default(), StatusCode::OK);

    assert_eq!(ParseError::Syntax.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ParseError::Exhausted.status(), StatusCode::CONTENT_TOO_LARGE);
    assert_eq!(ParseError::Syntax.to_string(), "invalid request syntax");
}
