//! Platform-agnostic core logic for the TCP greeter client
//!
//! This crate contains the parts of the client that have NO hardware
//! dependencies and can be unit-tested on the host:
//!
//! - **`link`**: the timer-gated connection state machine
//!   (Disconnected → Connecting → Connected)
//! - **`payload`**: bounded, printable previews of received data for logging

#![no_std]
#![deny(unsafe_code)]
#![deny(warnings)]

pub mod link;
pub mod payload;

pub use link::{LinkState, ReconnectGate};
pub use payload::preview;
