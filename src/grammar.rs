//! Grammar driven request parser.
//!
//! The grammar is an ordered choice backtracking parser over the HTTP/1.1 message grammar and
//! the parts of the URI grammar needed for the request target and the `Host` header.
//!
//! Alternatives are tried in declared order and the first one to match is committed, an
//! enclosing sequence that fails later never re-enters it with another alternative. Literals
//! compare ASCII case insensitively.
//!
//! No production is recursive, and every repetition is a loop, so the native stack depth is
//! bounded by the grammar nesting regardless of input size.
use bytes::Bytes;

use crate::{
    config::{Config, DEFAULT_MAX_NODES},
    error::ParseError,
    log,
    tree::ParseTree,
};
use engine::Engine;

mod engine;
mod abnf;
mod uri;
mod message;
mod header;

#[cfg(test)]
mod test;

/// Parse a complete HTTP request message.
///
/// The whole buffer must match the `HTTP-message` grammar. On success, the returned tree root is
/// labelled `HTTP_message` and spans the entire buffer.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] if the buffer does not match, or [`ParseError::Exhausted`] if
/// the default node budget is reached.
#[inline]
pub fn parse_message<B: Into<Bytes>>(buf: B) -> Result<ParseTree, ParseError> {
    parse(buf.into(), DEFAULT_MAX_NODES)
}

/// Parse a complete HTTP request message, with the node budget from [`Config`].
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] if the buffer does not match, or [`ParseError::Exhausted`] if
/// [`Config::max_nodes`] is reached.
#[inline]
pub fn parse_message_with<B: Into<Bytes>>(buf: B, config: &Config) -> Result<ParseTree, ParseError> {
    parse(buf.into(), config.max_nodes())
}

fn parse(buf: Bytes, max_nodes: usize) -> Result<ParseTree, ParseError> {
    let mut engine = Engine::new(&buf, max_nodes);
    let matched = engine.http_message(0);

    if engine.is_exhausted() {
        log::warning!("request rejected, node budget of {max_nodes} exhausted");
        return Err(ParseError::Exhausted);
    }

    let consumed = match matched {
        Some(root) => engine.end_of(root),
        None => {
            log::debug!("request rejected, syntax mismatch in {} bytes", buf.len());
            return Err(ParseError::Syntax);
        }
    };

    // body takes every remaining byte, so this only trips on a grammar bug
    if consumed != engine.input_len() {
        log::debug!("request rejected, {} trailing bytes", engine.input_len() - consumed);
        return Err(ParseError::Syntax);
    }

    let nodes = engine.into_nodes();
    log::debug!("request parsed, {consumed} bytes into {} nodes", nodes.len());
    Ok(ParseTree::from_parts(buf, nodes))
}
