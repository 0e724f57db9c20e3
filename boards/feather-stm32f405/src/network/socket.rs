#![deny(unsafe_code)]
#![deny(warnings)]
//! Async TCP socket wrapper
//!
//! This module provides an async wrapper around `embassy_net::tcp::TcpSocket`
//! that implements the `embedded-io-async` traits with [`NetworkError`] as
//! the error type, so protocol clients stay independent of the stack's own
//! error enums.

use defmt::Debug2Format;
use embassy_net::tcp::{ConnectError, TcpSocket};
use embassy_net::{IpEndpoint, Stack};
use embedded_io_async::{ErrorType, Read, Write};

use super::error::NetworkError;

/// Async TCP socket implementing `embedded-io-async` `Read`/`Write`
///
/// Dropping the socket releases it back to the stack; `close` only initiates
/// the TCP close handshake.
pub struct AsyncTcpSocket<'a> {
    socket: TcpSocket<'a>,
}

impl<'a> AsyncTcpSocket<'a> {
    /// Create a new async TCP socket on `stack`
    ///
    /// `rx_buffer` and `tx_buffer` back the stack's per-socket windows and
    /// must outlive the socket.
    pub fn new(stack: Stack<'a>, rx_buffer: &'a mut [u8], tx_buffer: &'a mut [u8]) -> Self {
        Self {
            socket: TcpSocket::new(stack, rx_buffer, tx_buffer),
        }
    }

    /// Connect to a remote endpoint
    pub async fn connect(&mut self, endpoint: IpEndpoint) -> Result<(), NetworkError> {
        self.socket.connect(endpoint).await.map_err(|e| {
            defmt::debug!("TCP connect error: {}", Debug2Format(&e));
            match e {
                ConnectError::TimedOut => NetworkError::ConnectTimeout,
                _ => NetworkError::ConnectFailed,
            }
        })
    }

    /// Initiate the TCP close handshake
    pub fn close(&mut self) {
        self.socket.close();
    }
}

impl ErrorType for AsyncTcpSocket<'_> {
    type Error = NetworkError;
}

impl Read for AsyncTcpSocket<'_> {
    /// `Ok(0)` means the remote side closed the connection.
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.socket
            .read(buf)
            .await
            .map_err(|_| NetworkError::SocketError)
    }
}

impl Write for AsyncTcpSocket<'_> {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.socket
            .write(buf)
            .await
            .map_err(|_| NetworkError::SocketError)
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        self.socket
            .flush()
            .await
            .map_err(|_| NetworkError::SocketError)
    }
}
