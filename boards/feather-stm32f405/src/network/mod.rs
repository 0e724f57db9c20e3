#![deny(warnings)]
//! Network module with trait-based client architecture
//!
//! This module provides a modular network stack with:
//! - **`client`**: `NetworkClient` trait for protocol implementations
//! - **`config`**: Configuration structs with `Default` implementations
//! - **`error`**: Simple error enum for network operations
//! - **`greeter`**: TCP greeter client implementing `NetworkClient`
//! - **`manager`**: embassy-net stack-up handling
//! - **`socket`**: Async TCP socket wrapper for embedded-io-async
//!
//! ## Architecture
//!
//! The design follows the Open-Closed Principle: new protocols can be added
//! by implementing `NetworkClient` without modifying infrastructure code.
//! All TCP/IP protocol processing (connection establishment, retransmission,
//! flow control, buffering) belongs to `embassy-net`; this module only holds
//! client logic on top of it.

pub mod client;
pub mod config;
pub mod error;
pub mod greeter;
pub mod manager;
pub mod socket;

// Re-export commonly used types
pub use client::NetworkClient;
#[allow(unused_imports)]
pub use config::GreeterConfig;
#[allow(unused_imports)]
pub use config::NetworkConfig;
#[allow(unused_imports)]
pub use error::NetworkError;
pub use greeter::GreeterClient;
