#![deny(unsafe_code)]
#![deny(warnings)]
//! Network client trait and base types
//!
//! This module provides a trait-based abstraction for network protocol
//! clients. New protocols can be added by implementing `NetworkClient`
//! without modifying core infrastructure code.

use super::error::NetworkError;

/// Trait for network protocol clients
///
/// Implementors handle their own errors gracefully (log and continue)
/// rather than panicking, enabling robust operation in embedded systems.
pub trait NetworkClient {
    /// Output type for successful client operation
    type Output;

    /// Run the client operation once
    ///
    /// This is an async method that performs a single client operation
    /// (e.g., one connection lifecycle). For periodic operations, the caller
    /// should invoke this method in a loop.
    fn run(
        &mut self,
        stack: &embassy_net::Stack<'static>,
    ) -> impl core::future::Future<Output = Result<Self::Output, NetworkError>>;
}
