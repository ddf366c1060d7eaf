//! # HTTP Client
//! src/lib.rs
//!
//! Cliente HTTP(S)/1.0 síncrono implementado desde cero para demostrar
//! conceptos de sistemas operativos: sockets, resolución de nombres,
//! manejo de recursos y parsing de protocolos.
//!
//! ## Arquitectura
//!
//! El cliente está dividido en módulos especializados:
//! - `url`: Parsing de URLs con fallback ante entradas malformadas
//! - `net`: Resolución, conexión TCP y sesión TLS
//! - `http`: Construcción del request y parsing de la respuesta
//! - `client`: Orquestación de una petición completa
//! - `config`: Configuración de la librería y del binario
//! - `error`: Errores de una petición
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http_client::{Client, ClientConfig};
//! use std::time::Duration;
//!
//! let client = Client::new(ClientConfig::with_timeout(Duration::from_secs(10)));
//! let body = client.fetch("https://browser.engineering/http.html")?;
//! println!("{}", body);
//! # Ok::<(), http_client::ClientError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod net;
pub mod url;

pub use client::{exchange, Client, Stage};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use url::Url;

/// Pide `url` con la configuración por defecto y devuelve el body
pub fn fetch(url: &str) -> Result<String> {
    Client::default().fetch(url)
}
