//! Static file responder.
//!
//! Turns a parsed request plus a web root into a complete response. File
//! reads are synchronous on purpose: a session only suspends at its socket
//! operations, and serving runs to completion between them.

use std::path::Path;

use crate::http::codec::{ConnDirective, ContentType, Method};
use crate::http::request::Request;
use crate::http::response::Response;

/// Produces the response for one request.
///
/// The keep-alive decision is made first and independently of the outcome:
/// the client gets `KEEP-ALIVE` back iff it asked for it, on whichever
/// response is produced. Non-GET methods are answered 400 without touching
/// the filesystem; for GET, any resolution failure is a uniform 404.
///
/// Every file that resolves is served as TEXT/HTML regardless of its
/// extension; there is no extension-to-type table.
pub fn serve(req: &Request, root: &Path) -> Response {
    let conn = if req.keep_alive() {
        ConnDirective::KeepAlive
    } else {
        ConnDirective::Close
    };

    let mut rsp = if req.method != Method::Get {
        Response::bad_request()
    } else {
        match read_file(&req.path, root) {
            Some(contents) => Response::ok(contents, ContentType::TextHtml),
            None => Response::not_found(),
        }
    };

    rsp.conn = conn;
    rsp
}

/// Resolves `path` under `root` and reads the file whole (binary-safe).
///
/// A trailing `/` selects the directory's `index.html`. The joined path is
/// canonicalized first, which resolves `.`, `..` and symlinks; the
/// canonical result must still sit under the canonical root, so a symlink
/// pointing outside the tree cannot leak files. All failures (missing file,
/// unresolvable path, escape attempt, not a regular file, unreadable)
/// collapse to `None`.
pub fn read_file(path: &str, root: &Path) -> Option<Vec<u8>> {
    let joined = if path.ends_with('/') {
        root.join(format!("{}index.html", path.trim_start_matches('/')))
    } else {
        root.join(path.trim_start_matches('/'))
    };

    let root = std::fs::canonicalize(root).ok()?;
    let resolved = std::fs::canonicalize(joined).ok()?;
    if !resolved.starts_with(&root) {
        return None;
    }

    if !std::fs::metadata(&resolved).ok()?.is_file() {
        return None;
    }

    std::fs::read(&resolved).ok()
}
