//! # Línea de Estado HTTP
//!
//! La primera línea de una respuesta tiene el formato:
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! ```
//!
//! Se divide en los dos primeros espacios: versión, código y razón.
//! La razón se queda con el resto de la línea, espacios incluidos
//! (`404 Not Found`).

use serde::Serialize;

/// Línea de estado tal como llegó del servidor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    /// Versión del protocolo (ej: "HTTP/1.0")
    pub version: String,

    /// Código de estado como texto (ej: "200")
    pub status: String,

    /// Texto explicativo (ej: "Not Found")
    pub reason: String,
}

impl StatusLine {
    /// Parsea una línea de estado. Nunca falla: las piezas que falten
    /// quedan vacías.
    ///
    /// # Ejemplo
    /// ```
    /// use http_client::http::StatusLine;
    ///
    /// let line = StatusLine::parse("HTTP/1.0 404 Not Found\r");
    /// assert_eq!(line.version, "HTTP/1.0");
    /// assert_eq!(line.status, "404");
    /// assert_eq!(line.reason, "Not Found");
    /// ```
    pub fn parse(line: &str) -> Self {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut parts = line.splitn(3, ' ');

        Self {
            version: parts.next().unwrap_or_default().to_string(),
            status: parts.next().unwrap_or_default().to_string(),
            reason: parts.next().unwrap_or_default().to_string(),
        }
    }

    /// Código de estado numérico, si el texto es un número válido
    ///
    /// # Ejemplo
    /// ```
    /// use http_client::http::StatusLine;
    ///
    /// assert_eq!(StatusLine::parse("HTTP/1.0 200 OK").code(), Some(200));
    /// assert_eq!(StatusLine::parse("garbage").code(), None);
    /// ```
    pub fn code(&self) -> Option<u16> {
        self.status.parse().ok()
    }

    /// Verifica si el código indica éxito (2xx)
    pub fn is_success(&self) -> bool {
        matches!(self.code(), Some(200..=299))
    }
}
