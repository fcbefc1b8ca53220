use super::{Connection, Method, StatusCode, Version};
use crate::config::Config;

/// Validated request.
///
/// A [`Request`] is always produced, even when validation fails. The fields set before the
/// failing stage stay populated, the rest keep their initial value, and [`Request::status`]
/// carries the failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub(crate) method: Option<Method>,
    pub(crate) version: Option<Version>,
    pub(crate) host: Option<usize>,
    pub(crate) target: Vec<u8>,
    pub(crate) connection: Connection,
    pub(crate) status: StatusCode,
}

impl Request {
    pub(crate) fn new() -> Self {
        Self {
            method: None,
            version: None,
            host: None,
            target: Vec::new(),
            connection: Connection::Close,
            status: StatusCode::OK,
        }
    }

    /// Returns the request method, [`None`] if it was missing or not recognized.
    #[inline]
    pub fn method(&self) -> Option<Method> {
        self.method
    }

    /// Returns the HTTP version, [`None`] if it was missing or not supported.
    #[inline]
    pub fn version(&self) -> Option<Version> {
        self.version
    }

    /// Returns the index in the known host table, [`None`] if the request did not name a known
    /// host.
    #[inline]
    pub fn host(&self) -> Option<usize> {
        self.host
    }

    /// Returns the known host name, falling back to [`Config::default_host`].
    pub fn host_name<'c>(&self, config: &'c Config) -> Option<&'c str> {
        config.host(self.host.unwrap_or(config.default_host()))
    }

    /// Returns the normalized request path.
    ///
    /// Decoded bytes are kept as is, the path is not required to be UTF-8.
    #[inline]
    pub fn target(&self) -> &[u8] {
        &self.target
    }

    /// Returns the normalized request path as string slice, [`None`] if it is not UTF-8.
    #[inline]
    pub fn target_str(&self) -> Option<&str> {
        str::from_utf8(&self.target).ok()
    }

    /// Returns the connection persistence after the response.
    #[inline]
    pub fn connection(&self) -> Connection {
        self.connection
    }

    /// Returns the validation outcome, `200 OK` or the status of the first failing check.
    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns `true` if every validation check passed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.status.is_ok()
    }
}
