/// Grammar production that produced a parse tree node.
///
/// Each production maps to a stable label string, see [`Rule::as_str`]. The label vocabulary is
/// what [`search_tree`][crate::tree::search_tree] filters on.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    // ===== Message =====
    HttpMessage,
    StartLine,
    RequestLine,
    Method,
    RequestTarget,
    OriginForm,
    AbsolutePath,
    Segment,
    Query,
    HttpVersion,
    HttpName,
    HeaderField,
    FieldName,
    FieldValue,
    FieldContent,
    FieldVchar,
    ObsFold,
    ObsText,
    MessageBody,

    // ===== Known headers =====
    ConnectionHeader,
    Connection,
    ConnectionOption,
    ContentLengthHeader,
    ContentLength,
    ContentTypeHeader,
    ContentType,
    MediaType,
    Type,
    Subtype,
    Parameter,
    CookieHeader,
    CookieString,
    CookiePair,
    CookieName,
    CookieValue,
    CookieOctet,
    TransferEncodingHeader,
    TransferEncoding,
    TransferCoding,
    TransferExtension,
    TransferParameter,
    ExpectHeader,
    Expect,
    HostHeader,
    Host,

    // ===== URI =====
    UriHost,
    HostName,
    Port,
    IpLiteral,
    IpvFuture,
    Ipv6Address,
    H16,
    Ls32,
    Ipv4Address,
    DecOctet,
    RegName,
    Pchar,
    PctEncoded,
    Unreserved,
    SubDelims,

    // ===== Tokens and whitespace =====
    Token,
    Tchar,
    QuotedString,
    Qdtext,
    QuotedPair,
    Ows,
    Bws,
    Sp,
    Htab,
    Dquote,
    Vchar,
    Hexdig,
    Digit,
    Alpha,
    Crlf,
    Range,

    /// Exact text match, labelled by the text itself.
    Literal(&'static str),
}

impl Rule {
    /// Returns the production label, e.g: `"absolute_path"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HttpMessage => "HTTP_message",
            Self::StartLine => "start_line",
            Self::RequestLine => "request_line",
            Self::Method => "method",
            Self::RequestTarget => "request_target",
            Self::OriginForm => "origin_form",
            Self::AbsolutePath => "absolute_path",
            Self::Segment => "segment",
            Self::Query => "query",
            Self::HttpVersion => "HTTP_version",
            Self::HttpName => "HTTP_name",
            Self::HeaderField => "header_field",
            Self::FieldName => "field_name",
            Self::FieldValue => "field_value",
            Self::FieldContent => "field_content",
            Self::FieldVchar => "field_vchar",
            Self::ObsFold => "obs_fold",
            Self::ObsText => "obs_text",
            Self::MessageBody => "message_body",

            Self::ConnectionHeader => "Connection_header",
            Self::Connection => "Connection",
            Self::ConnectionOption => "connection_option",
            Self::ContentLengthHeader => "Content_Length_header",
            Self::ContentLength => "Content_Length",
            Self::ContentTypeHeader => "Content_Type_header",
            Self::ContentType => "Content_Type",
            Self::MediaType => "media_type",
            Self::Type => "type",
            Self::Subtype => "subtype",
            Self::Parameter => "parameter",
            Self::CookieHeader => "Cookie_header",
            Self::CookieString => "cookie_string",
            Self::CookiePair => "cookie_pair",
            Self::CookieName => "cookie_name",
            Self::CookieValue => "cookie_value",
            Self::CookieOctet => "cookie_octet",
            Self::TransferEncodingHeader => "Transfer_Encoding_header",
            Self::TransferEncoding => "Transfer_Encoding",
            Self::TransferCoding => "transfer_coding",
            Self::TransferExtension => "transfer_extension",
            Self::TransferParameter => "transfer_parameter",
            Self::ExpectHeader => "Expect_header",
            Self::Expect => "expect",
            Self::HostHeader => "Host_header",
            Self::Host => "Host",

            Self::UriHost => "uri_host",
            Self::HostName => "host",
            Self::Port => "port",
            Self::IpLiteral => "IP_literal",
            Self::IpvFuture => "IPvFuture",
            Self::Ipv6Address => "IPv6address",
            Self::H16 => "h16",
            Self::Ls32 => "ls32",
            Self::Ipv4Address => "IPv4address",
            Self::DecOctet => "dec_octet",
            Self::RegName => "reg_name",
            Self::Pchar => "pchar",
            Self::PctEncoded => "pct_encoded",
            Self::Unreserved => "unreserved",
            Self::SubDelims => "sub_delims",

            Self::Token => "token",
            Self::Tchar => "tchar",
            Self::QuotedString => "quoted_string",
            Self::Qdtext => "qdtext",
            Self::QuotedPair => "quoted_pair",
            Self::Ows => "OWS",
            Self::Bws => "BWS",
            Self::Sp => "SP",
            Self::Htab => "HTAB",
            Self::Dquote => "DQUOTE",
            Self::Vchar => "VCHAR",
            Self::Hexdig => "HEXDIG",
            Self::Digit => "DIGIT",
            Self::Alpha => "ALPHA",
            Self::Crlf => "CRLF",
            Self::Range => "range",

            Self::Literal(text) => text,
        }
    }

    /// Returns `true` if the production is matched by a single primitive, and does not aggregate
    /// children.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(
            self,
            Self::Digit
                | Self::Alpha
                | Self::Range
                | Self::Crlf
                | Self::HttpName
                | Self::Ows
                | Self::MessageBody
                | Self::Literal(_)
        )
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
