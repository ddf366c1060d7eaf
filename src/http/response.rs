//! # Parsing de Respuestas HTTP
//!
//! Convierte los bytes recibidos del servidor en un [`Response`].
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Type: text/html\r\n
//! \r\n
//! <html>...
//! ```
//!
//! Sólo la línea de estado y los headers se interpretan como texto. El
//! body se guarda byte a byte, sin decodificar.
//!
//! Los headers se guardan con el nombre en minúsculas (ASCII). Si un
//! nombre se repite, gana el último. `transfer-encoding` y
//! `content-encoding` no se decodifican: su presencia hace fallar el
//! parsing.

use super::StatusLine;
use crate::client::Stage;
use crate::error::{ClientError, Result};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::collections::HashMap;

/// Headers que indican una codificación que no soportamos
const UNSUPPORTED_HEADERS: [&str; 2] = ["transfer-encoding", "content-encoding"];

/// Respuesta HTTP completa, leída hasta que el servidor cerró la conexión
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Línea de estado (versión, código, razón)
    #[serde(flatten)]
    status_line: StatusLine,

    /// Headers con el nombre en minúsculas
    headers: HashMap<String, String>,

    /// Todo lo que viene después de la línea vacía, tal cual
    #[serde(serialize_with = "serialize_lossy")]
    body: Vec<u8>,
}

impl Response {
    /// Parsea una respuesta completa
    ///
    /// Si `raw` está vacío (el servidor no mandó nada) retorna una
    /// respuesta vacía. La línea de estado se emite como diagnóstico
    /// antes de revisar los headers.
    ///
    /// # Errores
    ///
    /// [`ClientError::UnsupportedHeader`] si la respuesta trae
    /// `Transfer-Encoding` o `Content-Encoding`.
    ///
    /// # Ejemplo
    /// ```
    /// use http_client::http::Response;
    ///
    /// let raw = b"HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\n\r\nHello";
    /// let response = Response::parse(raw).unwrap();
    ///
    /// assert_eq!(response.status(), "200");
    /// assert_eq!(response.header("content-type"), Some("text/plain"));
    /// assert_eq!(response.body(), b"Hello");
    /// ```
    pub fn parse(raw: &[u8]) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Self::default());
        }

        // 1. Status line
        log::debug!("stage: {}", Stage::ParsingStatusLine);
        let (line, mut rest) = split_line(raw);
        let status_line = StatusLine::parse(&String::from_utf8_lossy(line));
        log::info!(
            "version: {}, status: {}, explanation: {}",
            status_line.version,
            status_line.status,
            status_line.reason
        );

        // 2. Headers hasta la primera línea vacía
        log::debug!("stage: {}", Stage::ParsingHeaders);
        let mut headers = HashMap::new();
        while !rest.is_empty() {
            let (line, next) = split_line(rest);
            rest = next;

            if line.is_empty() {
                break;
            }

            // Líneas sin ':' se ignoran
            let line = String::from_utf8_lossy(line);
            if let Some((name, value)) = line.split_once(':') {
                let value = value.trim_start_matches([' ', '\t']);
                headers.insert(name.to_ascii_lowercase(), value.to_string());
            }
        }

        for name in UNSUPPORTED_HEADERS {
            if headers.contains_key(name) {
                return Err(ClientError::UnsupportedHeader(name.to_string()));
            }
        }

        // 3. Body: el resto, tal cual
        Ok(Self {
            status_line,
            headers,
            body: rest.to_vec(),
        })
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    /// Versión HTTP de la respuesta
    pub fn version(&self) -> &str {
        &self.status_line.version
    }

    /// Código de estado como texto
    pub fn status(&self) -> &str {
        &self.status_line.status
    }

    /// Código de estado numérico
    pub fn status_code(&self) -> Option<u16> {
        self.status_line.code()
    }

    pub fn reason(&self) -> &str {
        &self.status_line.reason
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (el nombre debe ir en minúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body sin decodificar
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body como texto; los bytes que no son UTF-8 se reemplazan por U+FFFD
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Consume la respuesta y devuelve el body como texto
    pub fn into_text(self) -> String {
        String::from_utf8(self.body)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }
}

/// Separa la primera línea del resto, quitando `\n` y un `\r` final
fn split_line(raw: &[u8]) -> (&[u8], &[u8]) {
    let (line, rest) = match raw.iter().position(|&b| b == b'\n') {
        Some(pos) => (&raw[..pos], &raw[pos + 1..]),
        None => (raw, &raw[raw.len()..]),
    };
    (line.strip_suffix(b"\r").unwrap_or(line), rest)
}

/// En JSON el body va como texto
fn serialize_lossy<S: Serializer>(body: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(body))
}
