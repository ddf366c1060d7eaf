//! # Parsing de URLs
//! src/url.rs
//!
//! Convierte un string como `https://example.com:8443/a/b` en sus partes:
//! esquema, host, puerto y path.
//!
//! ## Política ante URLs malformadas
//!
//! El parsing nunca falla hacia el llamador. Si la URL no tiene `://`,
//! usa un esquema distinto de `http`/`https` o trae un puerto inválido,
//! el resultado es [`ParsedUrl::Fallback`] con la URL por defecto
//! (`https://browser.engineering`) y el motivo del descarte.
//!
//! ```
//! use http_client::url::Url;
//!
//! let url = Url::new("https://example.com:8443/a/b");
//! assert_eq!(url.host(), "example.com");
//! assert_eq!(url.port(), 8443);
//! assert_eq!(url.path(), "/a/b");
//! ```

use serde::Serialize;
use std::fmt;

/// URL usada cuando la entrada no se puede parsear
pub const FALLBACK_URL: &str = "https://browser.engineering";

const SCHEME_SEPARATOR: &str = "://";

/// Esquemas soportados
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    fn from_str(s: &str) -> Result<Self, UrlError> {
        match s {
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            _ => Err(UrlError::UnsupportedScheme(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// Puerto por defecto del esquema (80 / 443)
    pub fn default_port(&self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }
}

/// Motivo por el que una URL se consideró malformada
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    /// Falta el separador `://`
    #[error("Invalid url: missing \"://\"")]
    MissingSeparator,

    /// Esquema distinto de http/https
    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    /// Lo que sigue a `:` en el host no es un puerto válido
    #[error("Invalid port: {0}")]
    InvalidPort(String),
}

/// URL ya parseada. Inmutable una vez construida.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Url {
    scheme: Scheme,
    host: String,
    port: u16,
    path: String,
}

/// Resultado del parsing: la URL pedida o la de fallback con el motivo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedUrl {
    Parsed(Url),
    Fallback {
        url: Url,
        input: String,
        reason: UrlError,
    },
}

impl ParsedUrl {
    /// Devuelve la URL resultante, sea la pedida o la de fallback
    pub fn into_url(self) -> Url {
        match self {
            ParsedUrl::Parsed(url) => url,
            ParsedUrl::Fallback { url, .. } => url,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedUrl::Fallback { .. })
    }
}

impl Url {
    /// Parsea la URL y, si está malformada, registra un warning y
    /// devuelve la URL de fallback.
    pub fn new(raw: &str) -> Self {
        match Self::parse(raw) {
            ParsedUrl::Parsed(url) => url,
            ParsedUrl::Fallback { url, input, reason } => {
                log::warn!("Malformed URL found, falling back to {}", FALLBACK_URL);
                log::warn!("  URL was: {}", input);
                log::warn!("  Reason: {}", reason);
                url
            }
        }
    }

    /// Parsea la URL sin emitir diagnósticos
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http_client::url::{ParsedUrl, Url};
    ///
    /// assert!(matches!(Url::parse("http://example.com"), ParsedUrl::Parsed(_)));
    /// assert!(Url::parse("ftp://example.com").is_fallback());
    /// ```
    pub fn parse(raw: &str) -> ParsedUrl {
        match Self::parse_parts(raw) {
            Ok(url) => ParsedUrl::Parsed(url),
            Err(reason) => ParsedUrl::Fallback {
                url: Self::fallback(),
                input: raw.to_string(),
                reason,
            },
        }
    }

    /// URL por defecto (`https://browser.engineering`)
    pub fn fallback() -> Self {
        Url {
            scheme: Scheme::Https,
            host: "browser.engineering".to_string(),
            port: Scheme::Https.default_port(),
            path: "/".to_string(),
        }
    }

    fn parse_parts(raw: &str) -> Result<Self, UrlError> {
        // 1. Separar esquema del resto
        let (scheme, rest) = raw
            .split_once(SCHEME_SEPARATOR)
            .ok_or(UrlError::MissingSeparator)?;
        let scheme = Scheme::from_str(scheme)?;

        // 2. Separar host de path (un host sin path equivale a "/")
        let (host, path) = match rest.find('/') {
            Some(slash) => (&rest[..slash], &rest[slash..]),
            None => (rest, "/"),
        };

        // 3. Puerto explícito o por defecto
        let (host, port) = match host.split_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| UrlError::InvalidPort(port.to_string()))?;
                (host, port)
            }
            None => (host, scheme.default_port()),
        };

        Ok(Url {
            scheme,
            host: host.to_string(),
            port,
            path: path.to_string(),
        })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// `true` si la conexión debe ir sobre TLS
    pub fn is_tls(&self) -> bool {
        self.scheme == Scheme::Https
    }

    /// Resuelve un link (href/src) relativo a esta URL
    ///
    /// - `scheme://...`: URL absoluta, se parsea tal cual
    /// - `//host/path`: mismo esquema, otro host
    /// - `/path`: mismo host, path absoluto
    /// - `path`, `./path`, `../path`: relativo al directorio de `self.path`
    ///
    /// El resultado pasa por [`Url::new`], así que un link malformado
    /// termina en la URL de fallback.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http_client::url::Url;
    ///
    /// let base = Url::new("https://example.com/docs/guide/intro.html");
    /// assert_eq!(base.resolve("../style.css").path(), "/docs/style.css");
    /// assert_eq!(base.resolve("//cdn.example.com/a.js").host(), "cdn.example.com");
    /// ```
    pub fn resolve(&self, link: &str) -> Url {
        if let Some(rest) = link.strip_prefix("//") {
            return Url::new(&format!("{}://{}", self.scheme.as_str(), rest));
        }

        // Absoluta sólo si el "://" aparece antes de cualquier '/' o '?'
        let absolute = link
            .split_once(SCHEME_SEPARATOR)
            .is_some_and(|(scheme, _)| !scheme.is_empty() && !scheme.contains(['/', '?']));
        if absolute {
            return Url::new(link);
        }

        let path = if link.starts_with('/') {
            link.to_string()
        } else {
            // Directorio del path actual, sin query
            let base = self.path.split_once('?').map_or(self.path.as_str(), |(p, _)| p);
            let mut dir = base.rfind('/').map_or("", |pos| &base[..pos]);

            let mut rest = link;
            loop {
                if let Some(next) = rest.strip_prefix("../") {
                    rest = next;
                    dir = dir.rfind('/').map_or("", |pos| &dir[..pos]);
                } else if let Some(next) = rest.strip_prefix("./") {
                    rest = next;
                } else {
                    break;
                }
            }
            format!("{}/{}", dir, rest)
        };

        Url::new(&format!(
            "{}://{}:{}{}",
            self.scheme.as_str(),
            self.host,
            self.port,
            path
        ))
    }

    /// `host:port`, útil para logs
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme.as_str(), self.host)?;
        if self.port != self.scheme.default_port() {
            write!(f, ":{}", self.port)?;
        }
        write!(f, "{}", self.path)
    }
}
