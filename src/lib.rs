//! Grammar driven HTTP/1.x request parser.
//!
//! A raw request buffer is matched against the HTTP message grammar, producing a labeled
//! [`ParseTree`]. The tree is queried by production label with [`search_tree`], and projected
//! into a validated [`Request`] by [`validate`].
//!
//! ```
//! use httptree::{parse_message, validate, Connection, StatusCode};
//!
//! let tree = parse_message(&b"GET /a/../index.html HTTP/1.1\r\nHost: site1.fr\r\n\r\n"[..])?;
//!
//! let headers = tree.search("header_field");
//! assert_eq!(headers.first().map(|node| node.value()), Some(&b"Host: site1.fr"[..]));
//!
//! let request = validate(&tree);
//! assert_eq!(request.status(), StatusCode::OK);
//! assert_eq!(request.target(), b"/index.html");
//! assert_eq!(request.connection(), Connection::KeepAlive);
//! # Ok::<_, httptree::ParseError>(())
//! ```
#![warn(missing_debug_implementations)]

mod log;

pub mod config;
pub mod error;
pub mod tree;
pub mod grammar;
pub mod path;
pub mod semantics;

pub use config::Config;
pub use error::ParseError;
pub use grammar::{parse_message, parse_message_with};
pub use path::normalize;
pub use semantics::{validate, Connection, Method, Request, StatusCode, Validator, Version};
pub use tree::{search_tree, NodeRef, ParseTree, Rule, TokenList};
