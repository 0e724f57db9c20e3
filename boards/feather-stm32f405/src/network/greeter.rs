#![deny(unsafe_code)]
#![deny(warnings)]
//! TCP greeter client implementing NetworkClient trait
//!
//! One `run` drives one connection lifecycle: wait out the reconnect gate,
//! connect to the configured server, send the greeting once, then log every
//! received chunk until the server closes the connection or the socket
//! errors. The caller invokes `run` in a loop; the gate enforces the fixed
//! spacing between connection attempts.

use defmt::{info, warn, Debug2Format};
use embassy_net::{IpEndpoint, Ipv4Address, Stack};
use embassy_time::{Duration, Timer};
use greeter_core::link::ReconnectGate;
use greeter_core::payload::preview;
use rtic_monotonics::fugit::ExtU64;
use rtic_monotonics::Monotonic;

use crate::Mono;

use super::client::NetworkClient;
use super::config::GreeterConfig;
use super::error::NetworkError;
use super::socket::AsyncTcpSocket;

/// Receive buffer for one read from the socket
const RECV_BUF_LEN: usize = 512;

/// TCP socket window sizes
const SOCKET_BUF_LEN: usize = 1024;

/// TCP greeter client
pub struct GreeterClient {
    config: GreeterConfig,
    gate: ReconnectGate,
}

impl GreeterClient {
    /// Create a new greeter client with default configuration
    pub fn new() -> Self {
        Self::with_config(GreeterConfig::default())
    }

    /// Create a new greeter client with custom configuration
    pub fn with_config(config: GreeterConfig) -> Self {
        Self {
            gate: ReconnectGate::new(config.reconnect_interval_ms),
            config,
        }
    }

    fn endpoint(&self) -> IpEndpoint {
        let [a, b, c, d] = self.config.server_addr;
        IpEndpoint::new(Ipv4Address::new(a, b, c, d).into(), self.config.server_port)
    }

    /// One connection lifecycle: connect, greet, log received data
    ///
    /// Returns `Ok(())` when the server closes the connection. On error paths
    /// the socket is dropped without a close handshake, which aborts the
    /// connection and releases it back to the stack.
    async fn session(&mut self, stack: &Stack<'static>) -> Result<(), NetworkError> {
        let mut rx_buffer = [0u8; SOCKET_BUF_LEN];
        let mut tx_buffer = [0u8; SOCKET_BUF_LEN];
        let mut socket = AsyncTcpSocket::new(*stack, &mut rx_buffer, &mut tx_buffer);

        let endpoint = self.endpoint();
        self.gate.attempt_started(now_ms());
        info!("Connecting to {}...", Debug2Format(&endpoint));

        let timeout = Timer::after(Duration::from_millis(self.config.connect_timeout_ms));
        match embassy_futures::select::select(timeout, socket.connect(endpoint)).await {
            embassy_futures::select::Either::First(_) => {
                warn!("Connect attempt timed out");
                return Err(NetworkError::ConnectTimeout);
            }
            embassy_futures::select::Either::Second(result) => result?,
        }
        self.gate.link_up();
        info!("Connected to server!");

        // Single best-effort write of the greeting; no send queueing.
        use embedded_io_async::{Read, Write};
        let sent = socket.write(self.config.greeting.as_bytes()).await?;
        socket.flush().await?;
        if sent < self.config.greeting.len() {
            warn!(
                "Greeting truncated: {} of {} bytes",
                sent,
                self.config.greeting.len()
            );
            return Err(NetworkError::ShortWrite);
        }
        info!("Greeting sent ({} bytes)", sent);

        let mut buf = [0u8; RECV_BUF_LEN];
        loop {
            let received = socket.read(&mut buf).await?;
            if received == 0 {
                info!("Server closed connection.");
                socket.close();
                // Drive the FIN out before the socket is dropped; drop
                // without a flush aborts the connection instead.
                if socket.flush().await.is_err() {
                    defmt::debug!("Close handshake cut short by peer");
                }
                return Ok(());
            }
            info!(
                "Received {} bytes: {}",
                received,
                preview(&buf[..received]).as_str()
            );
        }
    }
}

impl Default for GreeterClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkClient for GreeterClient {
    type Output = ();

    async fn run(&mut self, stack: &Stack<'static>) -> Result<Self::Output, NetworkError> {
        if let Some(wait) = self.gate.delay_before_attempt(now_ms()) {
            info!("Next connection attempt in {} ms", wait);
            Mono::delay(wait.millis()).await;
        }

        let result = self.session(stack).await;
        self.gate.link_down();
        result
    }
}

/// Milliseconds since boot from the TIM2 monotonic
fn now_ms() -> u64 {
    Mono::now().duration_since_epoch().to_millis()
}
