use bytes::Bytes;

use super::engine::{Engine, Match};
use super::{parse_message, parse_message_with};
use crate::config::{Config, DEFAULT_MAX_NODES};
use crate::error::ParseError;

/// Apply a single production at the start of `input`, returns the matched length.
fn matched<'a>(input: &'a [u8], rule: fn(&mut Engine<'a>, usize) -> Match) -> Option<usize> {
    let mut engine = Engine::new(input, DEFAULT_MAX_NODES);
    rule(&mut engine, 0).map(|id| engine.end_of(id))
}

#[test]
fn test_parse_message() {
    macro_rules! test {
        (#[error] $input:literal) => {
            match parse_message(Bytes::from_static($input)) {
                Ok(tree) => panic!("expected `Err` but returns `Ok` with {tree:?}"),
                Err(err) => assert_eq!(err, ParseError::Syntax),
            }
        };
        {
            $input:literal;
            $($label:literal => $value:literal),* $(,)?
        } => {
            let tree = match parse_message(Bytes::from_static($input)) {
                Ok(tree) => tree,
                Err(err) => panic!("failed to parse {:?}: {err}", $input.escape_ascii().to_string()),
            };
            let root = tree.root();
            assert_eq!(root.label(), "HTTP_message");
            assert_eq!(root.offset(), 0);
            assert_eq!(root.len(), $input.len());
            $(
                let found = tree.search($label);
                let Some(node) = found.first() else {
                    panic!("no {:?} in {tree:?}", $label);
                };
                assert_eq!(node.value(), $value, "value of {:?}", $label);
            )*
        };
    }

    test! {
        b"GET / HTTP/1.1\r\nHost: site1.fr\r\n\r\n";
        "method" => b"GET",
        "absolute_path" => b"/",
        "HTTP_version" => b"HTTP/1.1",
        "uri_host" => b"site1.fr",
        "reg_name" => b"site1.fr",
        "message_body" => b"",
    }
    test! {
        b"GET /index.html?a=1&b HTTP/1.0\r\n\r\n";
        "request_target" => b"/index.html?a=1&b",
        "absolute_path" => b"/index.html",
        "query" => b"a=1&b",
        "HTTP_version" => b"HTTP/1.0",
    }
    test! {
        b"HEAD /a//b/%41 HTTP/1.1\r\nHost: www.toto.com\r\n\r\n";
        "method" => b"HEAD",
        "absolute_path" => b"/a//b/%41",
        "pct_encoded" => b"%41",
    }
    test! {
        b"get / http/1.1\r\nhost: site1.fr\r\n\r\n";
        "method" => b"get",
        "HTTP_version" => b"http/1.1",
        "Host_header" => b"host: site1.fr",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: 127.0.0.1:8080\r\n\r\n";
        "Host_header" => b"Host: 127.0.0.1:8080",
        "host" => b"127.0.0.1",
        "IPv4address" => b"127.0.0.1",
        "port" => b"8080",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: [::1]:80\r\n\r\n";
        "IP_literal" => b"[::1]",
        "IPv6address" => b"::1",
        "port" => b"80",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: [2001:db8::ff00:42:8329]\r\n\r\n";
        "IPv6address" => b"2001:db8::ff00:42:8329",
        "ls32" => b"42:8329",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: [::ffff:192.0.2.1]\r\n\r\n";
        "IPv6address" => b"::ffff:192.0.2.1",
        "IPv4address" => b"192.0.2.1",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: [v1.fe80]\r\n\r\n";
        "IPvFuture" => b"v1.fe80",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: site1.fr\r\nConnection: keep-alive, Upgrade\r\n\r\n";
        "Connection_header" => b"Connection: keep-alive, Upgrade",
        "connection_option" => b"keep-alive",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: site1.fr\r\nContent-Type: text/html; charset=\"utf-8\"\r\n\r\n";
        "media_type" => b"text/html; charset=\"utf-8\"",
        "type" => b"text",
        "subtype" => b"html",
        "parameter" => b"charset=\"utf-8\"",
        "quoted_string" => b"\"utf-8\"",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: site1.fr\r\nCookie: a=1; b=\"x\"\r\n\r\n";
        "cookie_string" => b"a=1; b=\"x\"",
        "cookie_pair" => b"a=1",
        "cookie_name" => b"a",
        "cookie_value" => b"1",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: site1.fr\r\nTransfer-Encoding: gzip, chunked\r\n\r\n";
        "Transfer_Encoding" => b"gzip, chunked",
        "transfer_coding" => b"gzip",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: site1.fr\r\nTransfer-Encoding: foo;q=1\r\n\r\n";
        "transfer_extension" => b"foo;q=1",
        "transfer_parameter" => b"q=1",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: site1.fr\r\nExpect: 100-continue\r\n\r\n";
        "expect" => b"100-continue",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: site1.fr\r\nUser-Agent: curl/8.0 (x86_64)\r\n\r\n";
        "field_name" => b"User-Agent",
        "field_value" => b"curl/8.0 (x86_64)",
    }
    test! {
        b"GET / HTTP/1.1\r\nUser-Agent: Mozilla/5.0 (Macintosh; Intel Mac OS X 10.6) x\t\r\n\r\n";
        "field_value" => b"Mozilla/5.0 (Macintosh; Intel Mac OS X 10.6) x",
        "field_content" => b"Mozilla/5.0 (Macintosh; Intel Mac OS X 10.6) x",
        "OWS" => b" ",
    }
    test! {
        b"GET / HTTP/1.1\r\nX-Fold: a\r\n b\r\nX-Empty:\r\nX-Pad: v  \r\n\r\n";
        "field_value" => b"a\r\n b",
        "obs_fold" => b"\r\n ",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: site1.fr\r\nContent-Length: 5\r\n\r\nhello";
        "Content_Length" => b"5",
        "message_body" => b"hello",
    }
    test! {
        b"GET / HTTP/1.1\r\nHost: site1.fr\r\n\r\nGET / HTTP/1.1\r\n\r\n";
        "message_body" => b"GET / HTTP/1.1\r\n\r\n",
    }

    test!(#[error] b"");
    test!(#[error] b"GET / HTTP/1.1\r\n");
    test!(#[error] b"GET / HTTP/1.1\nHost: a\n\n");
    test!(#[error] b"GET  / HTTP/1.1\r\n\r\n");
    test!(#[error] b"GET /a b HTTP/1.1\r\n\r\n");
    test!(#[error] b"GET http://a/ HTTP/1.1\r\n\r\n");
    test!(#[error] b"GET / HTTP/11\r\n\r\n");
    test!(#[error] b"GET / HTTP/1.1\r\nHost site1.fr\r\n\r\n");
    test!(#[error] b"GET / HTTP/1.1\r\nHost: [::1\r\n\r\n");
    test!(#[error] b"GET / HTTP/1.1\r\nHost: [12345::1]\r\n\r\n");
    test!(#[error] b"GET / HTTP/1.1\r\nContent-Length: 12a\r\n\r\n");
    // committed to IPv4address, reg-name is never tried
    test!(#[error] b"GET / HTTP/1.1\r\nHost: 1.2.3.4.5\r\n\r\n");
    // committed to "chunked"
    test!(#[error] b"GET / HTTP/1.1\r\nTransfer-Encoding: chunkedx\r\n\r\n");
}

#[test]
fn test_node_budget() {
    let input = b"GET / HTTP/1.1\r\nHost: site1.fr\r\n\r\n";

    let config = Config::new().with_max_nodes(8);
    let err = parse_message_with(Bytes::from_static(input), &config).unwrap_err();
    assert_eq!(err, ParseError::Exhausted);
    assert_eq!(err.status().status(), 413);

    // failed alternatives hold nodes too, so the peak is above the final count
    let tree = parse_message_with(Bytes::from_static(input), &Config::new()).unwrap();
    let config = Config::new().with_max_nodes(tree.node_count() - 1);
    assert_eq!(
        parse_message_with(Bytes::from_static(input), &config).unwrap_err(),
        ParseError::Exhausted,
    );
}

#[test]
fn test_large_body() {
    const BODY_LEN: usize = 3 << 20;

    let mut input = format!("POST /upload HTTP/1.1\r\nHost: site1.fr\r\nContent-Length: {BODY_LEN}\r\n\r\n")
        .into_bytes();
    let head_len = input.len();
    input.resize(head_len + BODY_LEN, b'x');

    let tree = parse_message(input).unwrap();
    assert_eq!(tree.root().len(), head_len + BODY_LEN);

    let body = tree.search("message_body").first().unwrap();
    assert_eq!(body.offset(), head_len);
    assert_eq!(body.len(), BODY_LEN);
    assert!(body.first_child().is_none());

    // body size does not grow the tree
    let empty = parse_message(format!("POST /upload HTTP/1.1\r\nHost: site1.fr\r\nContent-Length: {BODY_LEN}\r\n\r\n")).unwrap();
    assert_eq!(tree.node_count(), empty.node_count());
}

#[test]
fn test_rule_h16() {
    assert_eq!(matched(b"0", Engine::h16), Some(1));
    assert_eq!(matched(b"abcd", Engine::h16), Some(4));
    assert_eq!(matched(b"ABCD:", Engine::h16), Some(4));
    assert_eq!(matched(b"12345", Engine::h16), None);
    assert_eq!(matched(b"g", Engine::h16), None);
    assert_eq!(matched(b"", Engine::h16), None);
}

#[test]
fn test_rule_dec_octet() {
    assert_eq!(matched(b"255", Engine::dec_octet), Some(3));
    assert_eq!(matched(b"249", Engine::dec_octet), Some(3));
    assert_eq!(matched(b"199", Engine::dec_octet), Some(3));
    assert_eq!(matched(b"256", Engine::dec_octet), Some(2));
    assert_eq!(matched(b"42", Engine::dec_octet), Some(2));
    assert_eq!(matched(b"09", Engine::dec_octet), Some(1));
    assert_eq!(matched(b"0", Engine::dec_octet), Some(1));
    assert_eq!(matched(b"x", Engine::dec_octet), None);
}

#[test]
fn test_rule_ip_address() {
    assert_eq!(matched(b"192.168.0.1", Engine::ipv4_address), Some(11));
    assert_eq!(matched(b"1.2.3", Engine::ipv4_address), None);

    assert_eq!(matched(b"::", Engine::ipv6_address), Some(2));
    assert_eq!(matched(b"::1", Engine::ipv6_address), Some(3));
    assert_eq!(matched(b"1::", Engine::ipv6_address), Some(3));
    assert_eq!(matched(b"fe80::1:2", Engine::ipv6_address), Some(9));
    assert_eq!(matched(b"1:2:3:4:5:6:7:8", Engine::ipv6_address), Some(15));
    assert_eq!(matched(b"1:2:3:4:5:6:1.2.3.4", Engine::ipv6_address), Some(19));
    assert_eq!(matched(b"1:2", Engine::ipv6_address), None);
    assert_eq!(matched(b"g::", Engine::ipv6_address), None);
}

#[test]
fn test_rule_tokens() {
    assert_eq!(matched(b"GET /", Engine::token), Some(3));
    assert_eq!(matched(b"keep-alive,", Engine::token), Some(10));
    assert_eq!(matched(b" ", Engine::token), None);

    assert_eq!(matched(b"\"a\\\"b\"", Engine::quoted_string), Some(6));
    assert_eq!(matched(b"\"open", Engine::quoted_string), None);

    assert_eq!(matched(b" \t x", Engine::ows), Some(3));
    assert_eq!(matched(b"x", Engine::ows), Some(0));
}

#[test]
fn test_rule_uri() {
    assert_eq!(matched(b"/a//b c", Engine::absolute_path), Some(5));
    assert_eq!(matched(b"a", Engine::absolute_path), None);
    assert_eq!(matched(b"www.toto.com:80", Engine::reg_name), Some(12));
    assert_eq!(matched(b"a%20b", Engine::reg_name), Some(5));
    assert_eq!(matched(b"%2", Engine::pct_encoded), None);
    assert_eq!(matched(b"a/b?c d", Engine::query), Some(5));
}

#[test]
fn test_rule_cookie_octet() {
    assert_eq!(matched(b"a", Engine::cookie_octet), Some(1));
    assert_eq!(matched(b"!", Engine::cookie_octet), Some(1));
    assert_eq!(matched(b",", Engine::cookie_octet), None);
    assert_eq!(matched(b";", Engine::cookie_octet), None);
    assert_eq!(matched(b"\\", Engine::cookie_octet), None);
    assert_eq!(matched(b"\"", Engine::cookie_octet), None);
    assert_eq!(matched(b" ", Engine::cookie_octet), None);
}

#[test]
fn test_failed_rule_leaves_nothing() {
    let mut engine = Engine::new(b"12345", DEFAULT_MAX_NODES);
    assert!(engine.h16(0).is_none());
    assert!(engine.into_nodes().is_empty());

    let mut engine = Engine::new(b"GET / HTTP/1.1\r\n", DEFAULT_MAX_NODES);
    assert!(engine.http_message(0).is_none());
    assert!(engine.into_nodes().is_empty());
}
