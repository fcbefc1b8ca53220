//! HTTP/1.1 message rules.
//!
//! <https://www.rfc-editor.org/rfc/rfc9112.html#name-message-format>
use super::engine::{Engine, Match};
use crate::tree::Rule;

impl Engine<'_> {
    /// `HTTP-message = start-line *( header-field CRLF ) CRLF message-body`
    pub(crate) fn http_message(&mut self, pos: usize) -> Match {
        self.rule(Rule::HttpMessage, pos, |e, f| {
            f.push(e, Self::start_line)?;
            f.any(e, |e, f| {
                f.push(e, Self::header_field)?;
                f.push(e, Self::crlf)
            })?;
            f.push(e, Self::crlf)?;
            f.push(e, Self::message_body)
        })
    }

    /// `start-line = request-line`
    pub(crate) fn start_line(&mut self, pos: usize) -> Match {
        self.rule(Rule::StartLine, pos, |e, f| f.push(e, Self::request_line))
    }

    /// `request-line = method SP request-target SP HTTP-version CRLF`
    pub(crate) fn request_line(&mut self, pos: usize) -> Match {
        self.rule(Rule::RequestLine, pos, |e, f| {
            f.push(e, Self::method)?;
            f.push(e, Self::sp)?;
            f.push(e, Self::request_target)?;
            f.push(e, Self::sp)?;
            f.push(e, Self::http_version)?;
            f.push(e, Self::crlf)
        })
    }

    /// `method = token`
    pub(crate) fn method(&mut self, pos: usize) -> Match {
        self.rule(Rule::Method, pos, |e, f| f.push(e, Self::token))
    }

    /// `request-target = origin-form`
    pub(crate) fn request_target(&mut self, pos: usize) -> Match {
        self.rule(Rule::RequestTarget, pos, |e, f| f.push(e, Self::origin_form))
    }

    /// `origin-form = absolute-path [ "?" query ]`
    pub(crate) fn origin_form(&mut self, pos: usize) -> Match {
        self.rule(Rule::OriginForm, pos, |e, f| {
            f.push(e, Self::absolute_path)?;
            f.opt(e, |e, f| {
                f.lit(e, "?")?;
                f.push(e, Self::query)
            })
        })
    }

    /// `HTTP-version = HTTP-name "/" DIGIT "." DIGIT`
    pub(crate) fn http_version(&mut self, pos: usize) -> Match {
        self.rule(Rule::HttpVersion, pos, |e, f| {
            f.push(e, Self::http_name)?;
            f.lit(e, "/")?;
            f.push(e, Self::digit)?;
            f.lit(e, ".")?;
            f.push(e, Self::digit)
        })
    }

    /// `HTTP-name = %s"HTTP"`
    #[inline]
    pub(crate) fn http_name(&mut self, pos: usize) -> Match {
        self.keyword(Rule::HttpName, pos, "HTTP")
    }

    // ===== Header field =====

    /// ```not_rust
    /// header-field = Connection-header / Content-Length-header / Content-Type-header
    ///              / Cookie-header / Transfer-Encoding-header / Expect-header / Host-header
    ///              / ( field-name ":" OWS field-value OWS )
    /// ```
    pub(crate) fn header_field(&mut self, pos: usize) -> Match {
        self.rule(Rule::HeaderField, pos, |e, f| {
            f.push(e, Self::connection_header)
                .or_else(|| f.push(e, Self::content_length_header))
                .or_else(|| f.push(e, Self::content_type_header))
                .or_else(|| f.push(e, Self::cookie_header))
                .or_else(|| f.push(e, Self::transfer_encoding_header))
                .or_else(|| f.push(e, Self::expect_header))
                .or_else(|| f.push(e, Self::host_header))
                .or_else(|| {
                    f.group(e, |e, f| {
                        f.push(e, Self::field_name)?;
                        f.lit(e, ":")?;
                        f.push(e, Self::ows)?;
                        f.push(e, Self::field_value)?;
                        f.push(e, Self::ows)
                    })
                })
        })
    }

    /// `field-name = token`
    pub(crate) fn field_name(&mut self, pos: usize) -> Match {
        self.rule(Rule::FieldName, pos, |e, f| f.push(e, Self::token))
    }

    /// `field-value = *( field-content / obs-fold )`
    pub(crate) fn field_value(&mut self, pos: usize) -> Match {
        self.rule(Rule::FieldValue, pos, |e, f| {
            f.any(e, |e, f| {
                f.push(e, Self::field_content)
                    .or_else(|| f.push(e, Self::obs_fold))
            })
        })
    }

    /// `field-content = field-vchar [ 1*( SP / HTAB / field-vchar ) field-vchar ]`
    ///
    /// Whitespace is only taken when a field-vchar follows it, trailing whitespace is left to the
    /// enclosing OWS.
    pub(crate) fn field_content(&mut self, pos: usize) -> Match {
        self.rule(Rule::FieldContent, pos, |e, f| {
            f.push(e, Self::field_vchar)?;
            f.any(e, |e, f| {
                f.any(e, |e, f| {
                    f.push(e, Self::sp)
                        .or_else(|| f.push(e, Self::htab))
                })?;
                f.push(e, Self::field_vchar)
            })
        })
    }

    /// `field-vchar = VCHAR / obs-text`
    pub(crate) fn field_vchar(&mut self, pos: usize) -> Match {
        self.rule(Rule::FieldVchar, pos, |e, f| {
            f.push(e, Self::vchar)
                .or_else(|| f.push(e, Self::obs_text))
        })
    }

    /// `obs-fold = CRLF 1*( SP / HTAB )`
    pub(crate) fn obs_fold(&mut self, pos: usize) -> Match {
        self.rule(Rule::ObsFold, pos, |e, f| {
            f.push(e, Self::crlf)?;
            f.some(e, |e, f| {
                f.push(e, Self::sp)
                    .or_else(|| f.push(e, Self::htab))
            })
        })
    }

    // ===== Body =====

    /// `message-body = *OCTET`, matched as a single leaf.
    ///
    /// Takes every remaining byte, framing headers are not consulted.
    #[inline]
    pub(crate) fn message_body(&mut self, pos: usize) -> Match {
        self.run(Rule::MessageBody, pos, |_| true)
    }
}
