//! Known header field grammars.
//!
//! These are tried in order before the generic `field-name ":" OWS field-value OWS` form, the
//! first one to match commits the header field.
use super::engine::{Engine, Frame, Match};
use crate::tree::Rule;

/// `name ":" OWS value OWS`
fn field<'a>(
    e: &mut Engine<'a>,
    f: &mut Frame,
    name: &'static str,
    value: fn(&mut Engine<'a>, usize) -> Match,
) -> Option<()> {
    f.lit(e, name)?;
    f.lit(e, ":")?;
    f.push(e, Engine::ows)?;
    f.push(e, value)?;
    f.push(e, Engine::ows)
}

/// `*( "," OWS ) element *( OWS "," [ OWS element ] )`
fn list<'a>(e: &mut Engine<'a>, f: &mut Frame, element: fn(&mut Engine<'a>, usize) -> Match) -> Option<()> {
    f.any(e, |e, f| {
        f.lit(e, ",")?;
        f.push(e, Engine::ows)
    })?;
    f.push(e, element)?;
    f.any(e, |e, f| {
        f.push(e, Engine::ows)?;
        f.lit(e, ",")?;
        f.opt(e, |e, f| {
            f.push(e, Engine::ows)?;
            f.push(e, element)
        })
    })
}

impl<'a> Engine<'a> {
    // ===== Connection =====

    pub(crate) fn connection_header(&mut self, pos: usize) -> Match {
        self.rule(Rule::ConnectionHeader, pos, |e, f| {
            field(e, f, "Connection", Self::connection)
        })
    }

    /// `Connection = *( "," OWS ) connection-option *( OWS "," [ OWS connection-option ] )`
    pub(crate) fn connection(&mut self, pos: usize) -> Match {
        self.rule(Rule::Connection, pos, |e, f| list(e, f, Self::connection_option))
    }

    /// `connection-option = token`
    pub(crate) fn connection_option(&mut self, pos: usize) -> Match {
        self.rule(Rule::ConnectionOption, pos, |e, f| f.push(e, Self::token))
    }

    // ===== Content-Length =====

    pub(crate) fn content_length_header(&mut self, pos: usize) -> Match {
        self.rule(Rule::ContentLengthHeader, pos, |e, f| {
            field(e, f, "Content-Length", Self::content_length)
        })
    }

    /// `Content-Length = 1*DIGIT`
    pub(crate) fn content_length(&mut self, pos: usize) -> Match {
        self.rule(Rule::ContentLength, pos, |e, f| f.some(e, |e, f| f.push(e, Self::digit)))
    }

    // ===== Content-Type =====

    pub(crate) fn content_type_header(&mut self, pos: usize) -> Match {
        self.rule(Rule::ContentTypeHeader, pos, |e, f| {
            field(e, f, "Content-Type", Self::content_type)
        })
    }

    /// `Content-Type = media-type`
    pub(crate) fn content_type(&mut self, pos: usize) -> Match {
        self.rule(Rule::ContentType, pos, |e, f| f.push(e, Self::media_type))
    }

    /// `media-type = type "/" subtype *( OWS ";" OWS parameter )`
    pub(crate) fn media_type(&mut self, pos: usize) -> Match {
        self.rule(Rule::MediaType, pos, |e, f| {
            f.push(e, Self::media_kind)?;
            f.lit(e, "/")?;
            f.push(e, Self::subtype)?;
            f.any(e, |e, f| {
                f.push(e, Self::ows)?;
                f.lit(e, ";")?;
                f.push(e, Self::ows)?;
                f.push(e, Self::parameter)
            })
        })
    }

    /// `type = token`
    pub(crate) fn media_kind(&mut self, pos: usize) -> Match {
        self.rule(Rule::Type, pos, |e, f| f.push(e, Self::token))
    }

    /// `subtype = token`
    pub(crate) fn subtype(&mut self, pos: usize) -> Match {
        self.rule(Rule::Subtype, pos, |e, f| f.push(e, Self::token))
    }

    /// `parameter = token "=" ( token / quoted-string )`
    pub(crate) fn parameter(&mut self, pos: usize) -> Match {
        self.rule(Rule::Parameter, pos, |e, f| {
            f.push(e, Self::token)?;
            f.lit(e, "=")?;
            f.push(e, Self::token)
                .or_else(|| f.push(e, Self::quoted_string))
        })
    }

    // ===== Cookie =====

    pub(crate) fn cookie_header(&mut self, pos: usize) -> Match {
        self.rule(Rule::CookieHeader, pos, |e, f| {
            field(e, f, "Cookie", Self::cookie_string)
        })
    }

    /// `cookie-string = cookie-pair *( ";" SP cookie-pair )`
    pub(crate) fn cookie_string(&mut self, pos: usize) -> Match {
        self.rule(Rule::CookieString, pos, |e, f| {
            f.push(e, Self::cookie_pair)?;
            f.any(e, |e, f| {
                f.lit(e, ";")?;
                f.push(e, Self::sp)?;
                f.push(e, Self::cookie_pair)
            })
        })
    }

    /// `cookie-pair = cookie-name "=" cookie-value`
    pub(crate) fn cookie_pair(&mut self, pos: usize) -> Match {
        self.rule(Rule::CookiePair, pos, |e, f| {
            f.push(e, Self::cookie_name)?;
            f.lit(e, "=")?;
            f.push(e, Self::cookie_value)
        })
    }

    /// `cookie-name = token`
    pub(crate) fn cookie_name(&mut self, pos: usize) -> Match {
        self.rule(Rule::CookieName, pos, |e, f| f.push(e, Self::token))
    }

    /// `cookie-value = ( DQUOTE *cookie-octet DQUOTE ) / *cookie-octet`
    pub(crate) fn cookie_value(&mut self, pos: usize) -> Match {
        self.rule(Rule::CookieValue, pos, |e, f| {
            f.group(e, |e, f| {
                f.push(e, Self::dquote)?;
                f.any(e, |e, f| f.push(e, Self::cookie_octet))?;
                f.push(e, Self::dquote)
            })
            .or_else(|| f.any(e, |e, f| f.push(e, Self::cookie_octet)))
        })
    }

    /// `cookie-octet = %x21 / %x23-2B / %x2D-3A / %x3C-5B / %x5D-7E`
    pub(crate) fn cookie_octet(&mut self, pos: usize) -> Match {
        self.rule(Rule::CookieOctet, pos, |e, f| {
            f.range(e, 0x21, 0x21)
                .or_else(|| f.range(e, 0x23, 0x2B))
                .or_else(|| f.range(e, 0x2D, 0x3A))
                .or_else(|| f.range(e, 0x3C, 0x5B))
                .or_else(|| f.range(e, 0x5D, 0x7E))
        })
    }

    // ===== Transfer-Encoding =====

    pub(crate) fn transfer_encoding_header(&mut self, pos: usize) -> Match {
        self.rule(Rule::TransferEncodingHeader, pos, |e, f| {
            field(e, f, "Transfer-Encoding", Self::transfer_encoding)
        })
    }

    /// `Transfer-Encoding = *( "," OWS ) transfer-coding *( OWS "," [ OWS transfer-coding ] )`
    pub(crate) fn transfer_encoding(&mut self, pos: usize) -> Match {
        self.rule(Rule::TransferEncoding, pos, |e, f| list(e, f, Self::transfer_coding))
    }

    /// `transfer-coding = "chunked" / "compress" / "deflate" / "gzip" / transfer-extension`
    pub(crate) fn transfer_coding(&mut self, pos: usize) -> Match {
        self.rule(Rule::TransferCoding, pos, |e, f| {
            f.one_of(e, &["chunked", "compress", "deflate", "gzip"])
                .or_else(|| f.push(e, Self::transfer_extension))
        })
    }

    /// `transfer-extension = token *( OWS ";" OWS transfer-parameter )`
    pub(crate) fn transfer_extension(&mut self, pos: usize) -> Match {
        self.rule(Rule::TransferExtension, pos, |e, f| {
            f.push(e, Self::token)?;
            f.any(e, |e, f| {
                f.push(e, Self::ows)?;
                f.lit(e, ";")?;
                f.push(e, Self::ows)?;
                f.push(e, Self::transfer_parameter)
            })
        })
    }

    /// `transfer-parameter = token BWS "=" BWS ( token / quoted-string )`
    pub(crate) fn transfer_parameter(&mut self, pos: usize) -> Match {
        self.rule(Rule::TransferParameter, pos, |e, f| {
            f.push(e, Self::token)?;
            f.push(e, Self::bws)?;
            f.lit(e, "=")?;
            f.push(e, Self::bws)?;
            f.push(e, Self::token)
                .or_else(|| f.push(e, Self::quoted_string))
        })
    }

    // ===== Expect =====

    pub(crate) fn expect_header(&mut self, pos: usize) -> Match {
        self.rule(Rule::ExpectHeader, pos, |e, f| field(e, f, "Expect", Self::expect))
    }

    /// `expect = "100-continue"`
    pub(crate) fn expect(&mut self, pos: usize) -> Match {
        self.rule(Rule::Expect, pos, |e, f| f.lit(e, "100-continue"))
    }

    // ===== Host =====

    pub(crate) fn host_header(&mut self, pos: usize) -> Match {
        self.rule(Rule::HostHeader, pos, |e, f| field(e, f, "Host", Self::host_value))
    }

    /// `Host = uri-host [ ":" port ]`
    pub(crate) fn host_value(&mut self, pos: usize) -> Match {
        self.rule(Rule::Host, pos, |e, f| {
            f.push(e, Self::uri_host)?;
            f.opt(e, |e, f| {
                f.lit(e, ":")?;
                f.push(e, Self::port)
            })
        })
    }
}
