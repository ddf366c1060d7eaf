//! # Construcción de Requests HTTP/1.0
//! src/http/request.rs
//!
//! El cliente sólo envía un tipo de petición: un `GET` sin body con el
//! header `Host` y nada más.
//!
//! ```text
//! GET /path?query HTTP/1.0\r\n
//! Host: example.com\r\n
//! \r\n
//! ```

/// Versión del protocolo que enviamos en la request line
pub const HTTP_VERSION: &str = "HTTP/1.0";

/// Request `GET` listo para serializar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Path de la petición, incluida la query (ej: "/index.html")
    path: String,

    /// Valor del header `Host` (sin puerto)
    host: String,
}

impl Request {
    /// Crea un request `GET` para `path` en `host`
    pub fn get(host: &str, path: &str) -> Self {
        Self {
            path: path.to_string(),
            host: host.to_string(),
        }
    }

    /// Convierte el request a bytes listos para enviar por el socket
    ///
    /// # Ejemplo
    /// ```
    /// use http_client::http::Request;
    ///
    /// let request = Request::get("example.com", "/index.html");
    /// assert_eq!(
    ///     request.to_bytes(),
    ///     b"GET /index.html HTTP/1.0\r\nHost: example.com\r\n\r\n".to_vec()
    /// );
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        format!(
            "GET {} {}\r\nHost: {}\r\n\r\n",
            self.path, HTTP_VERSION, self.host
        )
        .into_bytes()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}
