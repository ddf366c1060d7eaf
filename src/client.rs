//! # Cliente HTTP(S)
//! src/client.rs
//!
//! Orquesta una petición completa:
//!
//! ```text
//! Idle → Resolving → Connecting → (TlsHandshaking) → Sending → Receiving
//!      → ParsingStatusLine → ParsingHeaders → Complete
//! ```
//!
//! Cualquier etapa puede pasar directamente a `Failed` con el error
//! correspondiente. Ninguna etapa se repite.
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http_client::Client;
//!
//! let client = Client::default();
//! let body = client.fetch("http://example.org/").expect("request failed");
//! println!("{}", body);
//! ```

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::http::{Request, Response};
use crate::net::Session;
use crate::url::Url;
use std::fmt;
use std::io::{self, Read, Write};

/// Tamaño del buffer de lectura del socket
const READ_BUFFER_SIZE: usize = 4096;

/// Etapas de una petición
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Resolving,
    Connecting,
    TlsHandshaking,
    Sending,
    Receiving,
    ParsingStatusLine,
    ParsingHeaders,
    Complete,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::Resolving => "resolving",
            Stage::Connecting => "connecting",
            Stage::TlsHandshaking => "tls-handshaking",
            Stage::Sending => "sending",
            Stage::Receiving => "receiving",
            Stage::ParsingStatusLine => "parsing-status-line",
            Stage::ParsingHeaders => "parsing-headers",
            Stage::Complete => "complete",
            Stage::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Cliente síncrono. Cada petición abre y cierra su propia `Session`.
#[derive(Debug, Clone, Default)]
pub struct Client {
    config: ClientConfig,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Pide `raw_url` y devuelve el body como texto
    ///
    /// Una URL malformada no es un error: se usa la URL de fallback.
    pub fn fetch(&self, raw_url: &str) -> Result<String> {
        let url = Url::new(raw_url);
        Ok(self.get(&url)?.into_text())
    }

    /// Pide `url` y devuelve la respuesta completa
    pub fn get(&self, url: &Url) -> Result<Response> {
        log::debug!("stage: {} ({})", Stage::Idle, url);

        // La sesión se suelta al salir de este bloque, con o sin error
        let result = Session::connect(url.host(), url.port(), url.is_tls(), &self.config)
            .and_then(|mut session| exchange(&mut session, url.host(), url.path()));

        match &result {
            Ok(_) => log::debug!("stage: {}", Stage::Complete),
            Err(e) => log::debug!("stage: {} (during {}): {}", Stage::Failed, e.stage(), e),
        }
        result
    }
}

/// Envía el `GET` por `session`, lee hasta que el servidor cierre y
/// parsea la respuesta.
///
/// `session` puede ser cualquier stream bidireccional, lo que permite
/// probar el intercambio sin red.
///
/// # Errores
///
/// - [`ClientError::SocketWrite`] si falla el envío del request
/// - [`ClientError::UnsupportedHeader`] si la respuesta usa
///   `Transfer-Encoding` o `Content-Encoding`
pub fn exchange<S: Read + Write>(session: &mut S, host: &str, path: &str) -> Result<Response> {
    log::debug!("stage: {}", Stage::Sending);
    let request = Request::get(host, path);
    session
        .write_all(&request.to_bytes())
        .and_then(|_| session.flush())
        .map_err(|source| ClientError::SocketWrite { source })?;

    log::debug!("stage: {}", Stage::Receiving);
    let raw = read_to_close(session);

    Response::parse(&raw)
}

/// Lee hasta EOF. Un error de lectura también termina la respuesta.
fn read_to_close<R: Read>(reader: &mut R) -> Vec<u8> {
    let mut response = Vec::new();
    let mut buffer = [0u8; READ_BUFFER_SIZE];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                log::debug!("received {} bytes", n);
                response.extend_from_slice(&buffer[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            // Muchos servidores cierran sin close_notify
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                log::debug!("connection closed without close_notify");
                break;
            }
            Err(e) => {
                log::warn!("read ended with error: {}", e);
                break;
            }
        }
    }

    response
}
