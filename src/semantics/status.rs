use std::num::NonZeroU16;

/// HTTP [Status Code][rfc] of a validated request.
///
/// Only the statuses the parser, the validator, and the resource lookup answer with are
/// defined.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(NonZeroU16);

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

macro_rules! status_code {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident $msg:literal;
        )*
    ) => {
        impl StatusCode {
            /// Returns status code value, e.g: `200`.
            #[inline]
            pub const fn status(&self) -> u16 {
                self.0.get()
            }

            /// Returns status code and message as string slice, e.g: `"200 OK"`.
            #[inline]
            pub const fn as_str(&self) -> &'static str {
                match self.0.get() {
                    $(
                        $int => concat!(stringify!($int), " ", $msg),
                    )*
                    _ => unreachable!(),
                }
            }

            /// Returns status message, e.g: `"OK"`.
            #[inline]
            pub const fn message(&self) -> &'static str {
                match self.0.get() {
                    $(
                        $int => $msg,
                    )*
                    _ => unreachable!(),
                }
            }

            /// Returns the response status line without the trailing CRLF, e.g:
            /// `"HTTP/1.1 200 OK"`.
            #[inline]
            pub const fn status_line(&self) -> &'static str {
                match self.0.get() {
                    $(
                        $int => concat!("HTTP/1.1 ", stringify!($int), " ", $msg),
                    )*
                    _ => unreachable!(),
                }
            }

            /// Create [`StatusCode`] from its value, returns [`None`] for an undefined status.
            #[inline]
            pub const fn from_u16(status: u16) -> Option<Self> {
                match status {
                    $(
                        $int => Some(Self::$id),
                    )*
                    _ => None,
                }
            }
        }

        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $id: Self = match NonZeroU16::new($int) {
                    Some(status) => Self(status),
                    None => unreachable!(),
                };
            )*
        }
    };
}

status_code! {
    /// `200`. The request succeeded.
    200 OK "OK";
    /// `400`. The server cannot or will not process the request due to something that is perceived to be
    /// a client error.
    400 BAD_REQUEST "Bad Request";
    /// `403`. The client does not have access rights to the content.
    403 FORBIDDEN "Forbidden";
    /// `404`. The server cannot find the requested resource.
    404 NOT_FOUND "Not Found";
    /// `413`. The request is larger than limits defined by server.
    413 CONTENT_TOO_LARGE "Content Too Large";
    /// `501`. The request method is not supported by the server and cannot be handled. The only methods
    /// that servers are required to support (and therefore that must not return this code) are GET
    /// and HEAD.
    501 NOT_IMPLEMENTED "Not Implemented";
    /// `505`. The HTTP version used in the request is not supported by the server.
    505 HTTP_VERSION_NOT_SUPPORTED "HTTP Version Not Supported";
}

impl StatusCode {
    /// Returns `true` if the status is `200 OK`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.0.get() == 200
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("StatusCode").field(&self.as_str()).finish()
    }
}
