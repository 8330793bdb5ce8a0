use std::fmt;

use crate::http::codec::{ConnDirective, Method, Version};
use crate::http::request::Request;

/// Parse failure. The only fatal condition is a buffer with no header
/// terminator; everything else (short request line, colon-less header
/// lines, unparsable Content-Length) degrades to field defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    MalformedRequest,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedRequest => write!(f, "no header terminator in request"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Offset of the first `\r\n\r\n` in `buf`, if any.
pub(crate) fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn find_crlf(buf: &[u8], from: usize) -> Option<usize> {
    buf[from..].windows(2).position(|w| w == b"\r\n").map(|p| from + p)
}

/// Parses one HTTP request from `raw`.
///
/// `raw` must contain the complete header block; bytes past the terminator
/// are taken as the initial body fragment (possibly partial relative to the
/// declared Content-Length; see [`Request::unread`]). Fails only when the
/// `\r\n\r\n` terminator is absent.
///
/// The header block is folded to upper-case in one pass, which makes the
/// request-line tokens and header names case-insensitive to match. Offsets
/// found in the folded copy are byte-for-byte valid in `raw`, so the path
/// is sliced from the raw bytes and keeps the client's case.
pub fn parse(raw: &[u8]) -> Result<Request, ParseError> {
    let boundary = find_header_end(raw).ok_or(ParseError::MalformedRequest)?;

    // Keep the first CRLF of the terminator so every line in the block,
    // including the last header, is CRLF-delimited.
    let mut head = raw[..boundary + 2].to_vec();
    head.make_ascii_uppercase();

    let mut req = Request::default();

    if raw.len() > boundary + 4 {
        req.body = raw[boundary + 4..].to_vec();
    }

    // Request line: split at the first two spaces. Fewer than two spaces
    // leaves method/path/version at their defaults; not a fatal error.
    let line_end = find_crlf(&head, 0).unwrap_or(head.len());
    parse_request_line(&mut req, &head[..line_end], raw);

    // Header lines, one per CRLF, name and value split at the first colon
    // with the conventional colon-space skipped. Colon-less lines are
    // ignored; a repeated name keeps the last value.
    let mut pos = line_end + 2;
    while let Some(eol) = find_crlf(&head, pos.min(head.len())) {
        let line = &head[pos..eol];
        if let Some(colon) = line.iter().position(|&b| b == b':') {
            let name = String::from_utf8_lossy(&line[..colon]).into_owned();
            let value = line.get(colon + 2..).unwrap_or_default();
            req.headers
                .insert(name, String::from_utf8_lossy(value).into_owned());
        }
        pos = eol + 2;
    }

    // CONTENT-LENGTH and CONNECTION move out of the general map into their
    // own fields; absence or a bad value is fine.
    if let Some(v) = req.headers.remove("CONTENT-LENGTH") {
        req.content_length = v.parse().unwrap_or(0);
    }
    if let Some(v) = req.headers.remove("CONNECTION") {
        req.conn = ConnDirective::from_token(&v);
    }

    // Anything past the declared length is not part of this request's body.
    if req.content_length > 0 && req.body.len() > req.content_length {
        req.body.truncate(req.content_length);
    }

    Ok(req)
}

fn parse_request_line(req: &mut Request, line: &[u8], raw: &[u8]) {
    let Some(sp1) = line.iter().position(|&b| b == b' ') else {
        return;
    };
    let Some(sp2) = line[sp1 + 1..]
        .iter()
        .position(|&b| b == b' ')
        .map(|p| sp1 + 1 + p)
    else {
        return;
    };

    req.method = Method::from_token(&String::from_utf8_lossy(&line[..sp1]));
    req.version = Version::from_token(&String::from_utf8_lossy(&line[sp2 + 1..]));
    // Path comes from the unfolded bytes at the same offsets; lookups on a
    // case-sensitive filesystem need the client's original case.
    req.path = String::from_utf8_lossy(&raw[sp1 + 1..sp2]).into_owned();
}
