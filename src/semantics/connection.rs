use super::Version;

/// Connection persistence after the response is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connection {
    /// `keep-alive`, connection persists after the response.
    KeepAlive,
    /// `close`, connection is closed after the response.
    Close,
}

impl Connection {
    /// Create [`Connection`] from a `connection-option` token, case insensitive.
    ///
    /// Returns [`None`] for any option other than `close` and `keep-alive`.
    pub fn from_option(option: &[u8]) -> Option<Connection> {
        if option.eq_ignore_ascii_case(b"close") {
            Some(Self::Close)
        } else if option.eq_ignore_ascii_case(b"keep-alive") {
            Some(Self::KeepAlive)
        } else {
            None
        }
    }

    /// Returns the persistence a request of `version` defaults to.
    #[inline]
    pub fn default_for(version: Version) -> Connection {
        match version {
            Version::HTTP_11 => Self::KeepAlive,
            _ => Self::Close,
        }
    }

    /// Returns the `Connection` header value, e.g: `"keep-alive"`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::KeepAlive => "keep-alive",
            Self::Close => "close",
        }
    }

    /// Returns `true` if the connection persists after the response.
    #[inline]
    pub const fn is_keep_alive(&self) -> bool {
        matches!(self, Self::KeepAlive)
    }
}

impl std::fmt::Display for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
