use crate::semantics::StatusCode;

/// A possible error value when parsing a request message.
///
/// Rule level mismatches are never reported individually, the grammar either matches the whole
/// buffer or the attempt is rejected with [`ParseError::Syntax`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Bytes does not match the HTTP message grammar.
    Syntax,
    /// Parse tree node budget exhausted, or the tree could not grow.
    Exhausted,
}

impl ParseError {
    /// Returns the response status a server should answer this error with.
    #[inline]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Syntax => StatusCode::BAD_REQUEST,
            Self::Exhausted => StatusCode::CONTENT_TOO_LARGE,
        }
    }
}

// ===== Error =====

macro_rules! gen_error {
    ($($variant:pat => $msg:literal),* $(,)?) => {
        impl std::fmt::Display for ParseError {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                use ParseError::*;
                match self {
                    $($variant => f.write_str($msg),)*
                }
            }
        }
    };
}

gen_error! {
    Syntax => "invalid request syntax",
    Exhausted => "request parse tree too large",
}

impl std::error::Error for ParseError { }

impl std::fmt::Debug for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
