//! # Conexión TCP
//! src/net/tcp.rs
//!
//! Resuelve host/puerto a una lista de direcciones (IPv4 o IPv6) y prueba
//! a conectar con cada una en orden hasta que una funcione. Una sola
//! pasada, sin reintentos.

use crate::client::Stage;
use crate::error::{ClientError, Result};
use std::io;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Resuelve `host:port` a las direcciones candidatas, en el orden del resolver
pub fn resolve(host: &str, port: u16) -> Result<Vec<SocketAddr>> {
    log::debug!("stage: {}", Stage::Resolving);

    let dns_error = |source| ClientError::DnsResolution {
        host: host.to_string(),
        port,
        source,
    };

    let addrs: Vec<SocketAddr> = (host, port).to_socket_addrs().map_err(dns_error)?.collect();
    if addrs.is_empty() {
        return Err(dns_error(io::Error::new(
            io::ErrorKind::NotFound,
            "no addresses found",
        )));
    }

    log::debug!("{}:{} resolved to {} address(es)", host, port, addrs.len());
    Ok(addrs)
}

/// Conecta con la primera dirección candidata que acepte la conexión
///
/// Con `timeout == None` cada intento puede bloquear indefinidamente.
pub fn connect(addrs: &[SocketAddr], timeout: Option<Duration>) -> Result<TcpStream> {
    log::debug!("stage: {}", Stage::Connecting);

    let mut last_error = None;
    for addr in addrs {
        let attempt = match timeout {
            Some(timeout) => TcpStream::connect_timeout(addr, timeout),
            None => TcpStream::connect(addr),
        };

        match attempt {
            Ok(stream) => {
                log::debug!("connected to {}", addr);
                return configure(stream, timeout).map_err(|source| ClientError::Connection {
                    attempts: addrs.len(),
                    source,
                });
            }
            Err(e) => {
                log::debug!("connect to {} failed: {}", addr, e);
                last_error = Some(e);
            }
        }
    }

    Err(ClientError::Connection {
        attempts: addrs.len(),
        source: last_error.unwrap_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no addresses to connect to")
        }),
    })
}

/// Aplica el timeout de lectura/escritura al socket ya conectado
fn configure(stream: TcpStream, timeout: Option<Duration>) -> io::Result<TcpStream> {
    stream.set_read_timeout(timeout)?;
    stream.set_write_timeout(timeout)?;
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn test_resolve_localhost_ip() {
        let addrs = resolve("127.0.0.1", 8080).unwrap();
        assert_eq!(addrs, vec!["127.0.0.1:8080".parse::<SocketAddr>().unwrap()]);
    }

    #[test]
    fn test_resolve_invalid_host() {
        let result = resolve("no such host", 80);
        assert!(matches!(result, Err(ClientError::DnsResolution { port: 80, .. })));
    }

    #[test]
    fn test_connect_first_working_address() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let good = listener.local_addr().unwrap();

        // Puerto cerrado: se obtiene bindeando y soltando un listener
        let closed = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

        let stream = connect(&[closed, good], None).unwrap();
        assert_eq!(stream.peer_addr().unwrap(), good);
    }

    #[test]
    fn test_connect_all_fail() {
        let closed = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

        let result = connect(&[closed], Some(Duration::from_secs(1)));
        assert!(matches!(result, Err(ClientError::Connection { attempts: 1, .. })));
    }

    #[test]
    fn test_connect_empty_list() {
        assert!(matches!(
            connect(&[], None),
            Err(ClientError::Connection { attempts: 0, .. })
        ));
    }
}
