use std::collections::HashMap;

use crate::http::codec::{ConnDirective, Method, Version};

/// A parsed HTTP request.
///
/// Produced by [`crate::http::parser::parse`]. Header names are upper-cased
/// by the parser's single case fold (values come out of the same fold, so
/// they are upper-cased as well); the path keeps the client's original
/// case. `CONTENT-LENGTH` and `CONNECTION` are pulled out of the header map
/// into their own fields during parsing.
///
/// The body may be partial: the parser stores whatever followed the header
/// block, and the session appends the remaining [`Request::unread`] bytes
/// in a second read phase before responding.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// The HTTP method, `Method::Unknown` if the request line was short
    /// or the token unrecognized.
    pub method: Method,
    /// Protocol version from the request line.
    pub version: Version,
    /// Connection directive, `Unknown` when no CONNECTION header was sent.
    pub conn: ConnDirective,
    /// Remaining headers, upper-cased names, last write wins.
    pub headers: HashMap<String, String>,
    /// Request path verbatim from the request line (no decoding, no
    /// normalization), empty until parsed.
    pub path: String,
    /// Declared Content-Length; 0 when absent or unparsable.
    pub content_length: usize,
    /// Body bytes received so far; `body.len() <= content_length` whenever
    /// a Content-Length header was present.
    pub body: Vec<u8>,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: Method::Unknown,
            version: Version::Unknown,
            conn: ConnDirective::Unknown,
            headers: HashMap::new(),
            path: String::new(),
            content_length: 0,
            body: Vec::new(),
        }
    }
}

impl Request {
    /// Retrieves a header value by its upper-cased name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Number of declared body bytes not yet received.
    ///
    /// Zero whenever `content_length` is zero, and never negative: a body
    /// that already holds everything the headers promised has nothing
    /// unread even if extra bytes were seen.
    pub fn unread(&self) -> usize {
        if self.content_length > 0 {
            self.content_length.saturating_sub(self.body.len())
        } else {
            0
        }
    }

    /// Whether the client asked to keep the connection open.
    ///
    /// Only an explicit `Connection: keep-alive` counts; a missing or
    /// unrecognized directive closes after one exchange.
    pub fn keep_alive(&self) -> bool {
        self.conn == ConnDirective::KeepAlive
    }
}
