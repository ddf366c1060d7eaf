//! # Sesión TLS
//! src/net/tls.rs
//!
//! Capa TLS sobre un `TcpStream` ya conectado, usando rustls con las
//! raíces de confianza del sistema operativo.
//!
//! - SNI: se envía `host` como server name.
//! - Verificación: el certificado debe encadenar a una raíz del sistema y
//!   ser válido para `host`.

use crate::client::Stage;
use crate::error::{ClientError, Result};
use rustls::pki_types::ServerName;
use rustls::{ClientConnection, RootCertStore, StreamOwned};
use std::io;
use std::net::TcpStream;
use std::sync::Arc;

/// Stream TLS que es dueño del socket
pub type TlsStream = StreamOwned<ClientConnection, TcpStream>;

/// Construye el contexto TLS con el trust store del sistema
pub fn client_config() -> Result<Arc<rustls::ClientConfig>> {
    let native = rustls_native_certs::load_native_certs();
    for error in &native.errors {
        log::warn!("Failed to load a platform certificate: {}", error);
    }

    let mut roots = RootCertStore::empty();
    let (added, ignored) = roots.add_parsable_certificates(native.certs);
    log::debug!("trust store: {} roots loaded, {} ignored", added, ignored);

    if roots.is_empty() {
        return Err(ClientError::TlsContext(
            "no trusted root certificates found in the platform store".to_string(),
        ));
    }

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = rustls::ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| ClientError::TlsContext(e.to_string()))?
        .with_root_certificates(roots)
        .with_no_client_auth();

    Ok(Arc::new(config))
}

/// Crea la sesión TLS para `host` y completa el handshake
pub fn connect(
    mut stream: TcpStream,
    host: &str,
    config: Arc<rustls::ClientConfig>,
) -> Result<TlsStream> {
    log::debug!("stage: {}", Stage::TlsHandshaking);

    let server_name = server_name(host)?;
    let mut conn = ClientConnection::new(config, server_name)
        .map_err(|e| ClientError::TlsContext(e.to_string()))?;

    while conn.is_handshaking() {
        conn.complete_io(&mut stream).map_err(handshake_error)?;
    }

    // El handshake ya validó la cadena; además exigimos que el peer haya
    // presentado un certificado.
    match conn.peer_certificates() {
        Some(certs) if !certs.is_empty() => {}
        _ => {
            return Err(ClientError::CertificateVerification(
                "peer presented no certificate".to_string(),
            ))
        }
    }

    log::debug!(
        "TLS established with {} ({:?})",
        host,
        conn.protocol_version()
    );
    Ok(StreamOwned::new(conn, stream))
}

/// Server name para SNI y verificación de hostname
pub fn server_name(host: &str) -> Result<ServerName<'static>> {
    ServerName::try_from(host)
        .map(|name| name.to_owned())
        .map_err(|e| ClientError::TlsContext(format!("invalid server name {:?}: {}", host, e)))
}

/// Separa los rechazos de certificado del resto de fallos de handshake
fn handshake_error(error: io::Error) -> ClientError {
    let rejected = error
        .get_ref()
        .and_then(|inner| inner.downcast_ref::<rustls::Error>())
        .and_then(|tls| match tls {
            rustls::Error::InvalidCertificate(_) => Some(tls.to_string()),
            _ => None,
        });

    match rejected {
        Some(reason) => ClientError::CertificateVerification(reason),
        None => ClientError::TlsHandshake { source: error },
    }
}
