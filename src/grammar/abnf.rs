//! Core rules shared by the message and URI grammars.
//!
//! <https://www.rfc-editor.org/rfc/rfc5234.html#appendix-B.1>
//! <https://www.rfc-editor.org/rfc/rfc9110.html#name-tokens>
use super::engine::{Engine, Match};
use crate::tree::Rule;

const TCHAR_SYMBOLS: [&str; 15] = [
    "!", "#", "$", "%", "&", "'", "*", "+", "-", ".", "^", "_", "`", "|", "~",
];

impl Engine<'_> {
    /// `ALPHA = %x41-5A / %x61-7A`
    #[inline]
    pub(crate) fn alpha(&mut self, pos: usize) -> Match {
        self.class(Rule::Alpha, pos, |byte| byte.is_ascii_alphabetic())
    }

    /// `DIGIT = %x30-39`
    #[inline]
    pub(crate) fn digit(&mut self, pos: usize) -> Match {
        self.class(Rule::Digit, pos, |byte| byte.is_ascii_digit())
    }

    /// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
    pub(crate) fn hexdig(&mut self, pos: usize) -> Match {
        self.rule(Rule::Hexdig, pos, |e, f| {
            f.push(e, Self::digit)
                .or_else(|| f.one_of(e, &["A", "B", "C", "D", "E", "F"]))
        })
    }

    pub(crate) fn sp(&mut self, pos: usize) -> Match {
        self.rule(Rule::Sp, pos, |e, f| f.lit(e, " "))
    }

    pub(crate) fn htab(&mut self, pos: usize) -> Match {
        self.rule(Rule::Htab, pos, |e, f| f.lit(e, "\t"))
    }

    pub(crate) fn dquote(&mut self, pos: usize) -> Match {
        self.rule(Rule::Dquote, pos, |e, f| f.lit(e, "\""))
    }

    /// `VCHAR = %x21-7E`
    pub(crate) fn vchar(&mut self, pos: usize) -> Match {
        self.rule(Rule::Vchar, pos, |e, f| f.range(e, 0x21, 0x7E))
    }

    /// `obs-text = %x80-FF`
    pub(crate) fn obs_text(&mut self, pos: usize) -> Match {
        self.rule(Rule::ObsText, pos, |e, f| f.range(e, 0x80, 0xFF))
    }

    #[inline]
    pub(crate) fn crlf(&mut self, pos: usize) -> Match {
        self.keyword(Rule::Crlf, pos, "\r\n")
    }

    /// `OWS = *( SP / HTAB )`, matched as a single leaf.
    #[inline]
    pub(crate) fn ows(&mut self, pos: usize) -> Match {
        self.run(Rule::Ows, pos, |byte| matches!(byte, b' ' | b'\t'))
    }

    /// `BWS = OWS`
    pub(crate) fn bws(&mut self, pos: usize) -> Match {
        self.rule(Rule::Bws, pos, |e, f| f.push(e, Self::ows))
    }

    // ===== Tokens =====

    /// `token = 1*tchar`
    pub(crate) fn token(&mut self, pos: usize) -> Match {
        self.rule(Rule::Token, pos, |e, f| f.some(e, |e, f| f.push(e, Self::tchar)))
    }

    /// ```not_rust
    /// tchar = "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." / "^" / "_" / "`" / "|"
    ///       / "~" / DIGIT / ALPHA
    /// ```
    pub(crate) fn tchar(&mut self, pos: usize) -> Match {
        self.rule(Rule::Tchar, pos, |e, f| {
            f.one_of(e, &TCHAR_SYMBOLS)
                .or_else(|| f.push(e, Self::digit))
                .or_else(|| f.push(e, Self::alpha))
        })
    }

    /// `quoted-string = DQUOTE *( qdtext / quoted-pair ) DQUOTE`
    pub(crate) fn quoted_string(&mut self, pos: usize) -> Match {
        self.rule(Rule::QuotedString, pos, |e, f| {
            f.push(e, Self::dquote)?;
            f.any(e, |e, f| {
                f.push(e, Self::qdtext)
                    .or_else(|| f.push(e, Self::quoted_pair))
            })?;
            f.push(e, Self::dquote)
        })
    }

    /// `qdtext = HTAB / SP / "!" / %x23-5B / %x5D-7E / obs-text`
    pub(crate) fn qdtext(&mut self, pos: usize) -> Match {
        self.rule(Rule::Qdtext, pos, |e, f| {
            f.push(e, Self::htab)
                .or_else(|| f.push(e, Self::sp))
                .or_else(|| f.lit(e, "!"))
                .or_else(|| f.range(e, 0x23, 0x5B))
                .or_else(|| f.range(e, 0x5D, 0x7E))
                .or_else(|| f.push(e, Self::obs_text))
        })
    }

    /// `quoted-pair = "\" ( HTAB / SP / VCHAR / obs-text )`
    pub(crate) fn quoted_pair(&mut self, pos: usize) -> Match {
        self.rule(Rule::QuotedPair, pos, |e, f| {
            f.lit(e, "\\")?;
            f.push(e, Self::htab)
                .or_else(|| f.push(e, Self::sp))
                .or_else(|| f.push(e, Self::vchar))
                .or_else(|| f.push(e, Self::obs_text))
        })
    }
}
