//! Request validation.
//!
//! [`Validator`] projects a [`ParseTree`] into a [`Request`]. Checks run in a fixed order, and
//! the first failing check sets [`Request::status`] and stops the remaining ones:
//!
//! 1. method, `400` if missing, `501` if not `GET` or `HEAD`
//! 2. target, `400` if missing, otherwise normalized
//! 3. version, `400` if missing, `505` if not `HTTP/1.0` or `HTTP/1.1`
//! 4. host, `400` if more than one `Host` is given, or none on HTTP/1.1
//! 5. framing, `400` if `Transfer-Encoding` is not `chunked`, is combined with
//!    `Content-Length`, or if `Content-Length` values disagree
//! 6. connection, first `close` or `keep-alive` option, otherwise the version default
use crate::{
    config::{self, Config},
    log,
    path::normalize,
    tree::ParseTree,
};

mod method;
mod version;
mod status;
mod connection;
mod request;

#[cfg(test)]
mod test;

pub use method::Method;
pub use version::Version;
pub use status::StatusCode;
pub use connection::Connection;
pub use request::Request;

type Check<'c> = fn(&Validator<'c>, &ParseTree, &mut Request) -> Result<(), StatusCode>;

/// Validate a parse tree against the default [`Config`].
#[inline]
pub fn validate(tree: &ParseTree) -> Request {
    Validator::new(config::default_config()).validate(tree)
}

/// Request validator.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'c> {
    config: &'c Config,
}

impl<'c> Validator<'c> {
    /// Create new [`Validator`] with the known host table from `config`.
    #[inline]
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Validate the parse tree.
    ///
    /// Always returns a [`Request`], check [`Request::status`] for the outcome.
    pub fn validate(&self, tree: &ParseTree) -> Request {
        let checks: [(&str, Check<'c>); 6] = [
            ("method", Self::method),
            ("target", Self::target),
            ("version", Self::version),
            ("host", Self::host),
            ("framing", Self::framing),
            ("connection", Self::connection),
        ];

        let mut request = Request::new();

        for (name, check) in checks {
            if let Err(status) = check(self, tree, &mut request) {
                log::debug!("request invalid at {name} check: {status}");
                request.status = status;
                return request;
            }
        }

        request.status = StatusCode::OK;
        request
    }

    fn method(&self, tree: &ParseTree, request: &mut Request) -> Result<(), StatusCode> {
        let node = tree.search("method").first().ok_or(StatusCode::BAD_REQUEST)?;
        let method = Method::from_bytes(node.value()).ok_or(StatusCode::NOT_IMPLEMENTED)?;
        request.method = Some(method);
        Ok(())
    }

    fn target(&self, tree: &ParseTree, request: &mut Request) -> Result<(), StatusCode> {
        let node = tree.search("absolute_path").first().ok_or(StatusCode::BAD_REQUEST)?;
        request.target = normalize(node.value());
        Ok(())
    }

    fn version(&self, tree: &ParseTree, request: &mut Request) -> Result<(), StatusCode> {
        let node = tree.search("HTTP_version").first().ok_or(StatusCode::BAD_REQUEST)?;
        let version = Version::from_bytes(node.value()).ok_or(StatusCode::HTTP_VERSION_NOT_SUPPORTED)?;
        request.version = Some(version);
        Ok(())
    }

    fn host(&self, tree: &ParseTree, request: &mut Request) -> Result<(), StatusCode> {
        let hosts = tree.search("host");
        if hosts.len() > 1 {
            return Err(StatusCode::BAD_REQUEST);
        }
        if hosts.is_empty() && request.version == Some(Version::HTTP_11) {
            return Err(StatusCode::BAD_REQUEST);
        }
        if let Some(name) = tree.search("reg_name").first() {
            request.host = self.config.host_index(name.value());
        }
        Ok(())
    }

    fn framing(&self, tree: &ParseTree, _: &mut Request) -> Result<(), StatusCode> {
        let lengths = content_lengths(tree);

        if let Some(coding) = tree.search("transfer_coding").first() {
            if coding.value() != b"chunked" || !lengths.is_empty() {
                return Err(StatusCode::BAD_REQUEST);
            }
        } else if let Some((first, rest)) = lengths.split_first() {
            if rest.iter().any(|length| length != first) {
                return Err(StatusCode::BAD_REQUEST);
            }
        }

        Ok(())
    }

    fn connection(&self, tree: &ParseTree, request: &mut Request) -> Result<(), StatusCode> {
        let option = tree
            .search("connection_option")
            .iter()
            .find_map(|option| Connection::from_option(option.value()));

        request.connection = match (option, request.version) {
            (Some(connection), _) => connection,
            (None, Some(version)) => Connection::default_for(version),
            (None, None) => Connection::Close,
        };
        Ok(())
    }
}

/// Values of every `Content-Length` header.
///
/// A value that is not `1*DIGIT` misses the `Content_Length` production and is matched by the
/// generic field form instead, it is collected from the `field_value` following its name.
fn content_lengths(tree: &ParseTree) -> Vec<&[u8]> {
    let mut lengths: Vec<&[u8]> = tree.search("Content_Length").iter().map(|e| e.value()).collect();

    // field-name ":" OWS field-value
    let generic = tree
        .search("field_name")
        .into_iter()
        .filter(|name| name.value().eq_ignore_ascii_case(b"Content-Length"))
        .filter_map(|name| name.next_sibling()?.next_sibling()?.next_sibling())
        .map(|value| value.value());
    lengths.extend(generic);
    lengths
}
