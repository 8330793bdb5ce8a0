use crate::http::codec::{ConnDirective, ContentType, StatusCode};

/// An HTTP response ready for serialization.
///
/// Header names and layout are fixed by the serializer; a response only
/// carries the four values that vary between exchanges.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: ContentType,
    /// The negotiated directive for this exchange; the session loops on
    /// `KeepAlive` and terminates otherwise.
    pub conn: ConnDirective,
    pub body: Vec<u8>,
}

impl Default for Response {
    /// The pre-dispatch state: a 500 that only goes out if no outcome ever
    /// replaces it.
    fn default() -> Self {
        Self {
            status: StatusCode::InternalServerError,
            content_type: ContentType::TextPlain,
            conn: ConnDirective::Close,
            body: Vec::new(),
        }
    }
}

impl Response {
    /// Creates a 200 OK response with the given body and content type.
    pub fn ok(body: impl Into<Vec<u8>>, content_type: ContentType) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type,
            body: body.into(),
            ..Self::default()
        }
    }

    /// Creates a 404 Not Found response with the fixed plain-text body.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            body: b"404 Not Found".to_vec(),
            ..Self::default()
        }
    }

    /// Creates the 400 Bad Request response sent for any non-GET method.
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BadRequest,
            body: b"You are in the wrong place!".to_vec(),
            ..Self::default()
        }
    }
}
