// shared/src/lib.rs

use std::net::SocketAddr;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
pub mod instance;

pub use instance::InstanceId;
