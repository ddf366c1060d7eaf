//! # Módulo de Red
//! src/net/mod.rs
//!
//! Transporte del cliente:
//! 1. Resuelve el host a direcciones
//! 2. Conecta por TCP a la primera que responda
//! 3. Para https, monta TLS con SNI y verificación de hostname
//! 4. Expone lectura/escritura uniforme con `Session`

pub mod session;
pub mod tcp;
pub mod tls;

// Re-exportar para facilitar el uso
pub use session::Session;
