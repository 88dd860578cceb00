//! HTTP listener configuration
//!
//! Part of the `http` section of the shelfdb config file:
//!
//! ```json
//! { "host": "127.0.0.1", "port": 8080 }
//! ```

use std::io;
use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

/// Address the product API listens on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface to bind (default: all, "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl HttpServerConfig {
    /// Default host with the given port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port` as written in the config
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parses `host` as an IP literal and pairs it with `port`.
    ///
    /// Hostnames are not resolved; `host` must be an IPv4 or IPv6 address.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        let ip = self.host.parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid listen host '{}': {}", self.host, e),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
