//! URI rules used by the request target and the `Host` header.
//!
//! <https://www.rfc-editor.org/rfc/rfc3986.html#appendix-A>
use super::engine::{Engine, Frame, Match};
use crate::tree::Rule;

const SUB_DELIMS: [&str; 11] = ["!", "$", "&", "'", "(", ")", "*", "+", ",", ";", "="];

impl Engine<'_> {
    // ===== Path =====

    /// `absolute-path = 1*( "/" segment )`
    pub(crate) fn absolute_path(&mut self, pos: usize) -> Match {
        self.rule(Rule::AbsolutePath, pos, |e, f| {
            f.some(e, |e, f| {
                f.lit(e, "/")?;
                f.push(e, Self::segment)
            })
        })
    }

    /// `segment = *pchar`
    pub(crate) fn segment(&mut self, pos: usize) -> Match {
        self.rule(Rule::Segment, pos, |e, f| f.any(e, |e, f| f.push(e, Self::pchar)))
    }

    /// `query = *( pchar / "/" / "?" )`
    pub(crate) fn query(&mut self, pos: usize) -> Match {
        self.rule(Rule::Query, pos, |e, f| {
            f.any(e, |e, f| {
                f.push(e, Self::pchar)
                    .or_else(|| f.one_of(e, &["/", "?"]))
            })
        })
    }

    /// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
    pub(crate) fn pchar(&mut self, pos: usize) -> Match {
        self.rule(Rule::Pchar, pos, |e, f| {
            f.push(e, Self::unreserved)
                .or_else(|| f.push(e, Self::pct_encoded))
                .or_else(|| f.push(e, Self::sub_delims))
                .or_else(|| f.one_of(e, &[":", "@"]))
        })
    }

    /// `pct-encoded = "%" HEXDIG HEXDIG`
    pub(crate) fn pct_encoded(&mut self, pos: usize) -> Match {
        self.rule(Rule::PctEncoded, pos, |e, f| {
            f.lit(e, "%")?;
            f.push(e, Self::hexdig)?;
            f.push(e, Self::hexdig)
        })
    }

    /// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
    pub(crate) fn unreserved(&mut self, pos: usize) -> Match {
        self.rule(Rule::Unreserved, pos, |e, f| {
            f.push(e, Self::alpha)
                .or_else(|| f.push(e, Self::digit))
                .or_else(|| f.one_of(e, &["-", ".", "_", "~"]))
        })
    }

    /// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
    pub(crate) fn sub_delims(&mut self, pos: usize) -> Match {
        self.rule(Rule::SubDelims, pos, |e, f| f.one_of(e, &SUB_DELIMS))
    }

    // ===== Host =====

    /// `uri-host = host`
    pub(crate) fn uri_host(&mut self, pos: usize) -> Match {
        self.rule(Rule::UriHost, pos, |e, f| f.push(e, Self::host))
    }

    /// `host = IP-literal / IPv4address / reg-name`
    pub(crate) fn host(&mut self, pos: usize) -> Match {
        self.rule(Rule::HostName, pos, |e, f| {
            f.push(e, Self::ip_literal)
                .or_else(|| f.push(e, Self::ipv4_address))
                .or_else(|| f.push(e, Self::reg_name))
        })
    }

    /// `port = *DIGIT`
    pub(crate) fn port(&mut self, pos: usize) -> Match {
        self.rule(Rule::Port, pos, |e, f| f.any(e, |e, f| f.push(e, Self::digit)))
    }

    /// `IP-literal = "[" ( IPv6address / IPvFuture ) "]"`
    pub(crate) fn ip_literal(&mut self, pos: usize) -> Match {
        self.rule(Rule::IpLiteral, pos, |e, f| {
            f.lit(e, "[")?;
            f.push(e, Self::ipv6_address)
                .or_else(|| f.push(e, Self::ipv_future))?;
            f.lit(e, "]")
        })
    }

    /// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
    pub(crate) fn ipv_future(&mut self, pos: usize) -> Match {
        self.rule(Rule::IpvFuture, pos, |e, f| {
            f.lit(e, "v")?;
            f.some(e, |e, f| f.push(e, Self::hexdig))?;
            f.lit(e, ".")?;
            f.some(e, |e, f| {
                f.push(e, Self::unreserved)
                    .or_else(|| f.push(e, Self::sub_delims))
                    .or_else(|| f.lit(e, ":"))
            })
        })
    }

    /// ```not_rust
    /// IPv6address =                            6( h16 ":" ) ls32
    ///             /                       "::" 5( h16 ":" ) ls32
    ///             / [               h16 ] "::" 4( h16 ":" ) ls32
    ///             / [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32
    ///             / [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32
    ///             / [ *3( h16 ":" ) h16 ] "::"    h16 ":"   ls32
    ///             / [ *4( h16 ":" ) h16 ] "::"              ls32
    ///             / [ *5( h16 ":" ) h16 ] "::"              h16
    ///             / [ *6( h16 ":" ) h16 ] "::"
    /// ```
    pub(crate) fn ipv6_address(&mut self, pos: usize) -> Match {
        self.rule(Rule::Ipv6Address, pos, |e, f| {
            f.group(e, |e, f| {
                f.times(e, 6, h16_colon)?;
                f.push(e, Self::ls32)
            })
            .or_else(|| {
                f.group(e, |e, f| {
                    f.lit(e, "::")?;
                    f.times(e, 5, h16_colon)?;
                    f.push(e, Self::ls32)
                })
            })
            .or_else(|| {
                f.group(e, |e, f| {
                    compressed_prefix(e, f, 0)?;
                    f.times(e, 4, h16_colon)?;
                    f.push(e, Self::ls32)
                })
            })
            .or_else(|| {
                f.group(e, |e, f| {
                    compressed_prefix(e, f, 1)?;
                    f.times(e, 3, h16_colon)?;
                    f.push(e, Self::ls32)
                })
            })
            .or_else(|| {
                f.group(e, |e, f| {
                    compressed_prefix(e, f, 2)?;
                    f.times(e, 2, h16_colon)?;
                    f.push(e, Self::ls32)
                })
            })
            .or_else(|| {
                f.group(e, |e, f| {
                    compressed_prefix(e, f, 3)?;
                    h16_colon(e, f)?;
                    f.push(e, Self::ls32)
                })
            })
            .or_else(|| {
                f.group(e, |e, f| {
                    compressed_prefix(e, f, 4)?;
                    f.push(e, Self::ls32)
                })
            })
            .or_else(|| {
                f.group(e, |e, f| {
                    compressed_prefix(e, f, 5)?;
                    f.push(e, Self::h16)
                })
            })
            .or_else(|| f.group(e, |e, f| compressed_prefix(e, f, 6)))
        })
    }

    /// `h16 = 1*4HEXDIG`
    pub(crate) fn h16(&mut self, pos: usize) -> Match {
        self.rule(Rule::H16, pos, |e, f| f.repeat(e, 1, 4, |e, f| f.push(e, Self::hexdig)))
    }

    /// `ls32 = ( h16 ":" h16 ) / IPv4address`
    pub(crate) fn ls32(&mut self, pos: usize) -> Match {
        self.rule(Rule::Ls32, pos, |e, f| {
            f.group(e, |e, f| {
                h16_colon(e, f)?;
                f.push(e, Self::h16)
            })
            .or_else(|| f.push(e, Self::ipv4_address))
        })
    }

    /// `IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet`
    pub(crate) fn ipv4_address(&mut self, pos: usize) -> Match {
        self.rule(Rule::Ipv4Address, pos, |e, f| {
            f.push(e, Self::dec_octet)?;
            f.times(e, 3, |e, f| {
                f.lit(e, ".")?;
                f.push(e, Self::dec_octet)
            })
        })
    }

    /// ```not_rust
    /// dec-octet = "25" %x30-35      ; 250-255
    ///           / "2" %x30-34 DIGIT ; 200-249
    ///           / "1" 2DIGIT        ; 100-199
    ///           / %x31-39 DIGIT     ; 10-99
    ///           / DIGIT             ; 0-9
    /// ```
    pub(crate) fn dec_octet(&mut self, pos: usize) -> Match {
        self.rule(Rule::DecOctet, pos, |e, f| {
            f.group(e, |e, f| {
                f.lit(e, "25")?;
                f.range(e, b'0', b'5')
            })
            .or_else(|| {
                f.group(e, |e, f| {
                    f.lit(e, "2")?;
                    f.range(e, b'0', b'4')?;
                    f.push(e, Self::digit)
                })
            })
            .or_else(|| {
                f.group(e, |e, f| {
                    f.lit(e, "1")?;
                    f.times(e, 2, |e, f| f.push(e, Self::digit))
                })
            })
            .or_else(|| {
                f.group(e, |e, f| {
                    f.range(e, b'1', b'9')?;
                    f.push(e, Self::digit)
                })
            })
            .or_else(|| f.push(e, Self::digit))
        })
    }

    /// `reg-name = *( unreserved / pct-encoded / sub-delims )`
    pub(crate) fn reg_name(&mut self, pos: usize) -> Match {
        self.rule(Rule::RegName, pos, |e, f| {
            f.any(e, |e, f| {
                f.push(e, Self::unreserved)
                    .or_else(|| f.push(e, Self::pct_encoded))
                    .or_else(|| f.push(e, Self::sub_delims))
            })
        })
    }
}

/// `h16 ":"`
fn h16_colon(e: &mut Engine<'_>, f: &mut Frame) -> Option<()> {
    f.push(e, Engine::h16)?;
    f.lit(e, ":")
}

/// `[ *max( h16 ":" ) h16 ] "::"`
///
/// The optional prefix is matched as `h16 *( ":" h16 )`, it is dropped entirely when it holds
/// more than `max` separators.
fn compressed_prefix(e: &mut Engine<'_>, f: &mut Frame, max: usize) -> Option<()> {
    f.opt(e, |e, f| {
        f.push(e, Engine::h16)?;
        f.repeat(e, 0, max, |e, f| {
            f.lit(e, ":")?;
            f.push(e, Engine::h16)
        })
    })?;
    f.lit(e, "::")
}
