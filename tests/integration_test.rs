//! Tests de integración para el cliente HTTP
//! tests/integration_test.rs
//!
//! Cada test levanta un servidor de un solo uso en 127.0.0.1 (puerto
//! elegido por el sistema) que responde con bytes fijos y cierra la
//! conexión, como un servidor HTTP/1.0.

use http_client::{Client, ClientConfig, ClientError, Stage, Url};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Helper: sirve `response` a una conexión y retorna el request recibido
fn serve_once(response: &'static [u8]) -> (u16, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Failed to accept");

        // Leer el request hasta la línea vacía
        let mut request = Vec::new();
        let mut buf = [0u8; 512];
        while !request.ends_with(b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("Failed to read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        stream.write_all(response).expect("Failed to write response");
        // Al soltar el stream se cierra la conexión: fin del mensaje
        String::from_utf8(request).unwrap()
    });

    (port, handle)
}

fn client() -> Client {
    Client::new(ClientConfig::with_timeout(Duration::from_secs(5)))
}

#[test]
fn test_fetch_returns_body() {
    let (port, server) = serve_once(b"HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\n\r\nHello");

    let body = client()
        .fetch(&format!("http://127.0.0.1:{}/hello", port))
        .expect("Failed to fetch");

    assert_eq!(body, "Hello");
    assert_eq!(
        server.join().unwrap(),
        "GET /hello HTTP/1.0\r\nHost: 127.0.0.1\r\n\r\n"
    );
}

#[test]
fn test_get_returns_full_response() {
    let (port, server) = serve_once(
        b"HTTP/1.0 404 Not Found\r\nServer: test\r\nX-A: 1\r\nX-A: 2\r\n\r\n<h1>missing</h1>",
    );

    let url = Url::new(&format!("http://127.0.0.1:{}", port));
    let response = client().get(&url).expect("Failed to get");

    assert_eq!(response.version(), "HTTP/1.0");
    assert_eq!(response.status_code(), Some(404));
    assert_eq!(response.reason(), "Not Found");
    assert_eq!(response.header("server"), Some("test"));
    assert_eq!(response.header("x-a"), Some("2"));
    assert_eq!(response.body(), b"<h1>missing</h1>");

    // Un host sin path pide "/"
    assert!(server.join().unwrap().starts_with("GET / HTTP/1.0\r\n"));
}

#[test]
fn test_binary_body_survives_exchange() {
    let (port, server) =
        serve_once(b"HTTP/1.0 200 OK\r\nContent-Type: image/png\r\n\r\n\x89PNG\r\n\x1a\n\x00\xff");

    let url = Url::new(&format!("http://127.0.0.1:{}/logo.png", port));
    let response = client().get(&url).expect("Failed to get");

    assert_eq!(response.header("content-type"), Some("image/png"));
    assert_eq!(response.into_body(), b"\x89PNG\r\n\x1a\n\x00\xff".to_vec());
    server.join().unwrap();
}

#[test]
fn test_unsupported_encoding_is_rejected() {
    let (port, server) = serve_once(
        b"HTTP/1.1 200 OK\r\nContent-Encoding: gzip\r\n\r\n\x1f\x8b\x08\x00",
    );

    let result = client().fetch(&format!("http://127.0.0.1:{}/", port));

    assert!(matches!(
        result,
        Err(ClientError::UnsupportedHeader(ref name)) if name == "content-encoding"
    ));
    server.join().unwrap();
}

#[test]
fn test_empty_reply_gives_empty_body() {
    let (port, server) = serve_once(b"");

    let body = client()
        .fetch(&format!("http://127.0.0.1:{}/", port))
        .expect("Failed to fetch");

    assert!(body.is_empty());
    server.join().unwrap();
}

#[test]
fn test_large_body_is_read_until_close() {
    static RESPONSE: std::sync::OnceLock<Vec<u8>> = std::sync::OnceLock::new();
    let raw = RESPONSE.get_or_init(|| {
        let mut raw = b"HTTP/1.0 200 OK\r\n\r\n".to_vec();
        raw.extend(std::iter::repeat(b'a').take(100_000));
        raw
    });

    let (port, server) = serve_once(raw);

    let body = client()
        .fetch(&format!("http://127.0.0.1:{}/big", port))
        .expect("Failed to fetch");

    assert_eq!(body.len(), 100_000);
    server.join().unwrap();
}

#[test]
fn test_connection_refused() {
    // Puerto cerrado: bindear y soltar el listener
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let err = client()
        .fetch(&format!("http://127.0.0.1:{}/", port))
        .unwrap_err();

    assert!(matches!(err, ClientError::Connection { .. }));
    assert_eq!(err.stage(), Stage::Connecting);
}

#[test]
fn test_unresolvable_host() {
    let err = client().fetch("https://bad host/").unwrap_err();

    assert!(matches!(err, ClientError::DnsResolution { .. }));
}

#[test]
fn test_malformed_url_uses_fallback() {
    let url = Url::new("ftp://127.0.0.1/file");

    assert_eq!(url, Url::fallback());
    assert_eq!(url.to_string(), "https://browser.engineering/");
}
