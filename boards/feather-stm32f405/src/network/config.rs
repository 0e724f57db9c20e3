#![deny(unsafe_code)]
#![deny(warnings)]
//! Network configuration structures

/// TCP greeter client configuration
#[derive(Debug, Clone, Copy)]
pub struct GreeterConfig {
    /// Server IPv4 address
    pub server_addr: [u8; 4],
    /// Server TCP port
    pub server_port: u16,
    /// Greeting sent once per established connection
    pub greeting: &'static str,
    /// Minimum spacing between connection attempts in milliseconds
    pub reconnect_interval_ms: u64,
    /// Connect timeout in milliseconds
    pub connect_timeout_ms: u64,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            server_addr: [192, 168, 1, 1],
            server_port: 7000,
            greeting: "Hello from feather-stm32f405!\r\n",
            reconnect_interval_ms: 5000,
            connect_timeout_ms: 10_000,
        }
    }
}

/// Network stack configuration
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// MAC address for Ethernet
    pub mac_addr: [u8; 6],
    /// Random seed for network stack
    pub seed: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            mac_addr: [0x02, 0x00, 0x00, 0x12, 0x34, 0x56],
            seed: 0x1234_5678_u64,
        }
    }
}
