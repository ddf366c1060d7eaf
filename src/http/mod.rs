//! # Módulo HTTP
//!
//! Implementa el lado cliente de HTTP/1.0 desde cero, sin librerías de
//! alto nivel:
//!
//! - Construcción del request `GET`
//! - Parsing de la línea de estado
//! - Parsing de headers y body de la respuesta
//!
//! ## HTTP/1.0
//!
//! En HTTP/1.0 (RFC 1945) el fin del mensaje lo marca el servidor cerrando
//! la conexión. Por eso el cliente lee hasta EOF y no usa
//! `Content-Length`. Tampoco hay chunked transfer encoding.

pub mod request;   // Construcción del request GET
pub mod response;  // Parsing de la respuesta
pub mod status;    // Línea de estado

pub use request::Request;
pub use response::Response;
pub use status::StatusLine;
