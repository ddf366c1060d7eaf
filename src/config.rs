//! # Configuración del Cliente
//! src/config.rs
//!
//! Dos niveles de configuración:
//!
//! - [`ClientConfig`]: lo que necesita la librería. Por defecto no hay
//!   timeout: un servidor que no responde bloquea la petición.
//! - [`Config`]: argumentos CLI y variables de entorno del binario.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./http_client https://example.org/ --timeout-ms 5000 --verbose
//! ./http_client http://example.org/ --json
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_CLIENT_TIMEOUT_MS=5000 RUST_LOG=debug ./http_client http://example.org/
//! ```

use crate::url::FALLBACK_URL;
use clap::Parser;
use std::time::Duration;

/// Máximo timeout aceptado (un día)
const MAX_TIMEOUT_MS: u64 = 86_400_000;

/// Configuración de la librería
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Timeout de conexión por dirección y de lectura/escritura del socket.
    /// `None` = sin límite.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Configuración con timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Configuración del binario
#[derive(Debug, Clone, Parser)]
#[command(name = "http_client")]
#[command(about = "Cliente HTTP(S)/1.0 síncrono: hace un GET e imprime el body")]
#[command(version = "0.1.0")]
pub struct Config {
    /// URL a pedir (http:// o https://)
    #[arg(default_value = FALLBACK_URL)]
    pub url: String,

    /// Timeout en milisegundos (0 = sin timeout)
    #[arg(long = "timeout-ms", default_value = "0", env = "HTTP_CLIENT_TIMEOUT_MS")]
    pub timeout_ms: u64,

    /// Muestra las etapas de la petición (nivel debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Imprime la respuesta completa como JSON en vez del body
    #[arg(long)]
    pub json: bool,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("URL must not be empty".to_string());
        }

        if self.timeout_ms > MAX_TIMEOUT_MS {
            return Err(format!("Timeout must be <= {} ms", MAX_TIMEOUT_MS));
        }

        Ok(())
    }

    /// Configuración de la librería derivada de los argumentos
    pub fn client_config(&self) -> ClientConfig {
        match self.timeout_ms {
            0 => ClientConfig::default(),
            ms => ClientConfig::with_timeout(Duration::from_millis(ms)),
        }
    }

    /// Filtro de logging por defecto (se puede sobrescribir con `RUST_LOG`)
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            url: FALLBACK_URL.to_string(),
            timeout_ms: 0,
            verbose: false,
            json: false,
        }
    }
}
