//! End-to-end session tests over real sockets.

use std::fs;
use std::net::SocketAddr;
use std::time::Duration;

use staticd::config::StaticFilesConfig;
use staticd::http::connection::Session;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Binds an ephemeral port, serves a small web root from a tempdir and
/// spawns one `Session` per accepted socket, like the real listener does.
async fn spawn_server() -> (SocketAddr, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
    fs::write(dir.path().join("other.html"), "<p>other</p>").unwrap();

    let static_files = StaticFilesConfig {
        root: dir.path().to_path_buf(),
    };
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let (socket, _peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(_) => break,
            };
            let static_files = static_files.clone();
            tokio::spawn(async move {
                let _ = Session::new(socket, static_files).run().await;
            });
        }
    });

    (addr, dir)
}

/// Reads one full response: head until the blank line, then exactly
/// Content-Length body bytes.
async fn read_response(stream: &mut TcpStream) -> (String, Vec<u8>) {
    let mut buf = Vec::new();
    let mut tmp = [0u8; 1024];

    let boundary = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        let n = stream.read(&mut tmp).await.unwrap();
        assert!(n > 0, "connection closed before response head completed");
        buf.extend_from_slice(&tmp[..n]);
    };

    let head = String::from_utf8(buf[..boundary + 4].to_vec()).unwrap();
    let content_length: usize = head
        .lines()
        .find_map(|line| line.strip_prefix("Content-Length: "))
        .expect("response has no Content-Length header")
        .parse()
        .unwrap();

    let mut body = buf[boundary + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut tmp).await.unwrap();
        assert!(n > 0, "connection closed before response body completed");
        body.extend_from_slice(&tmp[..n]);
    }

    (head, body)
}

#[tokio::test]
async fn test_session_serves_file_then_closes_without_directive() {
    let (addr, _root) = spawn_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    stream
        .write_all(b"GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await
        .unwrap();

    let (head, body) = read_response(&mut stream).await;
    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("\r\nConnection: CLOSE\r\n"));
    assert_eq!(body, b"<h1>home</h1>".to_vec());

    // No keep-alive requested, so the server closes after one exchange.
    let mut tmp = [0u8; 16];
    let n = stream.read(&mut tmp).await.unwrap();
    assert_eq!(n, 0);
}

#[tokio::test]
async fn test_session_keep_alive_serves_two_requests() {
    let (addr, _root) = spawn_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    stream
        .write_all(b"GET /index.html HTTP/1.1\r\nConnection: keep-alive\r\n\r\n")
        .await
        .unwrap();
    let (head, body) = read_response(&mut stream).await;
    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("\r\nConnection: KEEP-ALIVE\r\n"));
    assert_eq!(body, b"<h1>home</h1>".to_vec());

    // Same socket, second request.
    stream
        .write_all(b"GET /other.html HTTP/1.1\r\nConnection: keep-alive\r\n\r\n")
        .await
        .unwrap();
    let (head, body) = read_response(&mut stream).await;
    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(body, b"<p>other</p>".to_vec());
}

#[tokio::test]
async fn test_session_close_directive_ends_keep_alive_connection() {
    let (addr, _root) = spawn_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    stream
        .write_all(b"GET /index.html HTTP/1.1\r\nConnection: keep-alive\r\n\r\n")
        .await
        .unwrap();
    let (head, _) = read_response(&mut stream).await;
    assert!(head.contains("\r\nConnection: KEEP-ALIVE\r\n"));

    stream
        .write_all(b"GET /other.html HTTP/1.1\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let (head, _) = read_response(&mut stream).await;
    assert!(head.contains("\r\nConnection: CLOSE\r\n"));

    let mut tmp = [0u8; 16];
    let n = stream.read(&mut tmp).await.unwrap();
    assert_eq!(n, 0);
}

#[tokio::test]
async fn test_session_missing_file_is_404_on_the_wire() {
    let (addr, _root) = spawn_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    stream
        .write_all(b"GET /nope.html HTTP/1.1\r\n\r\n")
        .await
        .unwrap();

    let (head, body) = read_response(&mut stream).await;
    assert!(head.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(head.contains("\r\nConnection: CLOSE\r\n"));
    assert_eq!(body, b"404 Not Found".to_vec());
}

#[tokio::test]
async fn test_session_drains_staggered_body_before_responding() {
    let (addr, _root) = spawn_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    // Header block plus the first 4 of 10 declared body bytes.
    stream
        .write_all(
            b"POST /index.html HTTP/1.1\r\nContent-Length: 10\r\nConnection: keep-alive\r\n\r\nhell",
        )
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    stream.write_all(b"o worl").await.unwrap();

    let (head, body) = read_response(&mut stream).await;
    assert!(head.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert_eq!(body, b"You are in the wrong place!".to_vec());

    // If the body had leaked into the next header read, this follow-up
    // request would not parse cleanly.
    stream
        .write_all(b"GET /index.html HTTP/1.1\r\nConnection: keep-alive\r\n\r\n")
        .await
        .unwrap();
    let (head, body) = read_response(&mut stream).await;
    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(body, b"<h1>home</h1>".to_vec());
}

#[tokio::test]
async fn test_session_eof_before_header_terminator_closes_quietly() {
    let (addr, _root) = spawn_server().await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    stream.write_all(b"GET /index.html HTT").await.unwrap();
    stream.shutdown().await.unwrap();

    // Server sends nothing back for an unfinished header block.
    let mut tmp = [0u8; 16];
    let n = stream.read(&mut tmp).await.unwrap();
    assert_eq!(n, 0);
}
