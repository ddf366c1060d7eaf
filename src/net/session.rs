//! # Sesión de Transporte
//! src/net/session.rs
//!
//! Una `Session` es dueña del socket conectado y, para https, de la
//! sesión TLS montada encima. Lecturas y escrituras pasan por TLS cuando
//! existe y directamente por el socket si no.
//!
//! Al soltar la `Session` (por cualquier camino, éxito o error) se cierran
//! el socket y el estado TLS.

use super::{tcp, tls};
use crate::config::ClientConfig;
use crate::error::Result;
use std::io::{self, Read, Write};
use std::net::TcpStream;

/// Conexión exclusiva de una sola petición
pub enum Session {
    /// TCP plano (http)
    Plain(TcpStream),

    /// TLS sobre TCP (https)
    Tls(Box<tls::TlsStream>),
}

impl Session {
    /// Resuelve, conecta y, si `use_tls`, completa el handshake TLS
    ///
    /// # Errores
    ///
    /// `DnsResolution`, `Connection`, `TlsContext`, `TlsHandshake` o
    /// `CertificateVerification`, según la etapa que falle.
    pub fn connect(host: &str, port: u16, use_tls: bool, config: &ClientConfig) -> Result<Self> {
        let addrs = tcp::resolve(host, port)?;
        let stream = tcp::connect(&addrs, config.timeout)?;

        if !use_tls {
            return Ok(Session::Plain(stream));
        }

        let tls_config = tls::client_config()?;
        let stream = tls::connect(stream, host, tls_config)?;
        Ok(Session::Tls(Box::new(stream)))
    }

    /// `true` si la sesión va sobre TLS
    pub fn is_tls(&self) -> bool {
        matches!(self, Session::Tls(_))
    }
}

impl Read for Session {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Session::Plain(stream) => stream.read(buf),
            Session::Tls(stream) => stream.read(buf),
        }
    }
}

impl Write for Session {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Session::Plain(stream) => stream.write(buf),
            Session::Tls(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Session::Plain(stream) => stream.flush(),
            Session::Tls(stream) => stream.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_plain_session_roundtrip() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4];
            stream.read_exact(&mut buf).unwrap();
            stream.write_all(&buf).unwrap();
        });

        let mut session = Session::connect("127.0.0.1", port, false, &ClientConfig::default()).unwrap();
        assert!(!session.is_tls());

        session.write_all(b"ping").unwrap();
        let mut echoed = Vec::new();
        session.read_to_end(&mut echoed).unwrap();
        assert_eq!(echoed, b"ping");

        server.join().unwrap();
    }
}
