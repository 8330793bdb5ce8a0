//! Wire-token vocabulary for HTTP requests and responses.
//!
//! Every enum here comes with an infallible `from_token` / `as_str` pair:
//! token text that matches no table entry maps to the `Unknown` variant
//! instead of raising an error, so callers always hold a valid value.
//! Matching is case-sensitive against the canonical upper-case tokens:
//! the parser folds the whole header block to upper-case once, so by the
//! time a token reaches this module it is already in canonical case.

/// HTTP request methods.
///
/// `Unknown` is the parse default; the static responder treats it like any
/// other non-GET method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Unknown,
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
}

impl Method {
    /// Maps a canonical method token to a `Method`.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::codec::Method;
    /// assert_eq!(Method::from_token("GET"), Method::Get);
    /// assert_eq!(Method::from_token("get"), Method::Unknown);
    /// ```
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "HEAD" => Method::Head,
            "OPTIONS" => Method::Options,
            "PATCH" => Method::Patch,
            _ => Method::Unknown,
        }
    }

    /// Canonical token for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Unknown => "UNKNOWN",
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
        }
    }
}

/// HTTP protocol versions appearing in the request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    Unknown,
    Http10,
    Http11,
    Http2,
}

impl Version {
    pub fn from_token(s: &str) -> Self {
        match s {
            "HTTP/1.0" => Version::Http10,
            "HTTP/1.1" => Version::Http11,
            "HTTP/2" => Version::Http2,
            _ => Version::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Version::Unknown => "UNKNOWN",
            Version::Http10 => "HTTP/1.0",
            Version::Http11 => "HTTP/1.1",
            Version::Http2 => "HTTP/2",
        }
    }
}

/// Connection directive negotiated per exchange.
///
/// `Unknown` (no header, or an unrecognized value) behaves like `Close`
/// wherever a keep-alive decision is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnDirective {
    Unknown,
    KeepAlive,
    Close,
}

impl ConnDirective {
    pub fn from_token(s: &str) -> Self {
        match s {
            "KEEP-ALIVE" => ConnDirective::KeepAlive,
            "CLOSE" => ConnDirective::Close,
            _ => ConnDirective::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnDirective::Unknown => "UNKNOWN",
            ConnDirective::KeepAlive => "KEEP-ALIVE",
            ConnDirective::Close => "CLOSE",
        }
    }
}

/// Response status codes emitted by this server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 500 Internal Server Error
    InternalServerError,
    /// 404 Not Found
    NotFound,
    /// 400 Bad Request
    BadRequest,
    /// 200 OK
    Ok,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::codec::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::InternalServerError => 500,
            StatusCode::NotFound => 404,
            StatusCode::BadRequest => 400,
            StatusCode::Ok => 200,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// The status line is always `"{code} {phrase}"`, e.g. `200 OK`.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotFound => "Not Found",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Ok => "OK",
        }
    }
}

/// Content types the responder can attach to a response.
///
/// The table is fixed; the responder only ever emits `TextPlain` and
/// `TextHtml`, but the full vocabulary is kept so the codec covers every
/// type the server recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Unknown,
    TextPlain,
    TextHtml,
    TextCss,
    TextJavascript,
    ImageJpeg,
    ImagePng,
    ImageGif,
    ImageSvg,
    ImageIcon,
    ApplicationJson,
    ApplicationXml,
    ApplicationZip,
    ApplicationPdf,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Unknown => "UNKNOWN",
            ContentType::TextPlain => "TEXT/PLAIN",
            ContentType::TextHtml => "TEXT/HTML",
            ContentType::TextCss => "TEXT/CSS",
            ContentType::TextJavascript => "TEXT/JAVASCRIPT",
            ContentType::ImageJpeg => "IMAGE/JPEG",
            ContentType::ImagePng => "IMAGE/PNG",
            ContentType::ImageGif => "IMAGE/GIF",
            ContentType::ImageSvg => "IMAGE/SVG+XML",
            ContentType::ImageIcon => "IMAGE/X-ICON",
            ContentType::ApplicationJson => "APPLICATION/JSON",
            ContentType::ApplicationXml => "APPLICATION/XML",
            ContentType::ApplicationZip => "APPLICATION/ZIP",
            ContentType::ApplicationPdf => "APPLICATION/PDF",
        }
    }
}
