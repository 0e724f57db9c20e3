#![deny(unsafe_code)]
#![deny(warnings)]
//! Network client error types

use defmt::Format;

/// Network client operation errors
#[derive(Debug, Clone, Copy, Format)]
pub enum NetworkError {
    /// TCP connect was refused, reset, or unroutable
    ConnectFailed,
    /// Connect attempt exceeded the configured timeout
    ConnectTimeout,
    /// Read/write error on an established socket
    SocketError,
    /// Write completed short of the full greeting
    ShortWrite,
}

impl core::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ConnectFailed => write!(f, "Connect failed"),
            Self::ConnectTimeout => write!(f, "Connect timeout"),
            Self::SocketError => write!(f, "Socket error"),
            Self::ShortWrite => write!(f, "Short write"),
        }
    }
}

// Implement core::error::Error for no_std compatibility
impl core::error::Error for NetworkError {}

impl embedded_io_async::Error for NetworkError {
    fn kind(&self) -> embedded_io_async::ErrorKind {
        match self {
            Self::ConnectFailed => embedded_io_async::ErrorKind::ConnectionRefused,
            Self::ConnectTimeout => embedded_io_async::ErrorKind::TimedOut,
            Self::SocketError => embedded_io_async::ErrorKind::BrokenPipe,
            Self::ShortWrite => embedded_io_async::ErrorKind::WriteZero,
        }
    }
}
