//! # Errores del Cliente
//! src/error.rs
//!
//! Taxonomía de errores de una petición. Todos son fatales y se propagan
//! al llamador, excepto la URL malformada, que se recupera en `url.rs`
//! sustituyendo la URL por la de fallback.

use crate::client::Stage;
use std::io;

/// Errores que pueden ocurrir durante una petición HTTP(S)
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No se pudo resolver host/puerto a ninguna dirección
    #[error("DNS resolution failed for {host}:{port}: {source}")]
    DnsResolution {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    /// Todas las direcciones candidatas rechazaron la conexión
    #[error("Connection failed (all {attempts} addresses attempted): {source}")]
    Connection {
        attempts: usize,
        #[source]
        source: io::Error,
    },

    /// No se pudo construir el contexto TLS (trust store, server name, etc.)
    #[error("Failed to create TLS context: {0}")]
    TlsContext(String),

    /// El handshake TLS no terminó correctamente
    #[error("TLS handshake failed: {source}")]
    TlsHandshake {
        #[source]
        source: io::Error,
    },

    /// El certificado del servidor no es válido para el host pedido
    #[error("Certificate verification failed: {0}")]
    CertificateVerification(String),

    /// No se pudo escribir el request en el socket
    #[error("Socket write failed: {source}")]
    SocketWrite {
        #[source]
        source: io::Error,
    },

    /// La respuesta declara una codificación que no implementamos
    #[error("Unsupported response header: {0}")]
    UnsupportedHeader(String),
}

impl ClientError {
    /// Etapa de la máquina de estados en la que se produce este error
    pub fn stage(&self) -> Stage {
        match self {
            ClientError::DnsResolution { .. } => Stage::Resolving,
            ClientError::Connection { .. } => Stage::Connecting,
            ClientError::TlsContext(_)
            | ClientError::TlsHandshake { .. }
            | ClientError::CertificateVerification(_) => Stage::TlsHandshaking,
            ClientError::SocketWrite { .. } => Stage::Sending,
            ClientError::UnsupportedHeader(_) => Stage::ParsingHeaders,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
