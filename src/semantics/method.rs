/// Supported HTTP Method.
///
/// Only the methods a static resource server is [required][rfc] to implement are recognized,
/// any other method token is answered with `501 Not Implemented`.
///
/// [rfc]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-overview>
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Method(u8);

props! {
    /// The [GET] method requests transfer of a current [selected representation][sr] for the
    /// [target resource][tr].
    ///
    /// [GET]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-get>
    /// [sr]: <https://www.rfc-editor.org/rfc/rfc9110.html#selected.representation>
    /// [tr]: <https://www.rfc-editor.org/rfc/rfc9110.html#target.resource>
    pub const GET = (0, b"GET");
    /// The [HEAD] method is identical to GET except that the server MUST NOT send content in the
    /// response.
    ///
    /// [HEAD]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-head>
    pub const HEAD = (1, b"HEAD");
}

impl Method {
    /// Returns `true` if the response to this method carries no content.
    #[inline]
    pub const fn is_head(&self) -> bool {
        self.0 == Self::HEAD.0
    }
}

impl std::fmt::Debug for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        str::fmt(self.as_str(), f)
    }
}

impl std::fmt::Display for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        str::fmt(self.as_str(), f)
    }
}

// ===== Macros =====

macro_rules! props {
    (
        $(
           $(#[$doc:meta])*
           pub const $name:ident = ($idx:literal, $val:literal);
        )*
    ) => {
        impl Method {
            $(
               $(#[$doc])*
               pub const $name: Self = Self($idx);
            )*

            /// Create [`Method`] from bytes.
            ///
            /// Method is case sensitive, `get` is not [`Method::GET`].
            #[inline]
            pub const fn from_bytes(src: &[u8]) -> Option<Method> {
                match src {
                    $(
                        $val => Some(Self::$name),
                    )*
                    _ => None,
                }
            }

            /// Returns string representation of the method.
            #[inline]
            pub const fn as_str(&self) -> &'static str {
                match self.0 {
                    $(
                        $idx => stringify!($name),
                    )*
                    _ => unreachable!(),
                }
            }
        }
    };
}

use props;
