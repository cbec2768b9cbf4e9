use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::info;

use crate::{Error, Result};

pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub const DEFAULT_PORT: u16 = 3000;
    const HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").map(|v| v.trim().to_string()) {
            Some(raw) if !raw.is_empty() => {
                raw.parse::<u16>().map_err(|_| Error::InvalidPort(raw))?
            }
            _ => {
                info!("PORT not set, using default port {}", Self::DEFAULT_PORT);
                Self::DEFAULT_PORT
            }
        };

        Ok(Self {
            host: Self::HOST,
            port,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
