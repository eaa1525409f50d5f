//! SPI loopback self-test.
//!
//! Jumper MOSI to MISO, hand [`runner::setup`] a [`console::Console`] and a
//! [`transport::SpiTransport`], and read the verdicts off the console:
//!
//! ```text
//! SPI loopback test
//! 8 bit data received 239
//! 8 bit loopback test passed
//! 16 bit data received 43981
//! 16 bit loopback test passed
//! 0	0	pass
//! ...
//! 21	21	pass
//! ```
#![no_std]

#[macro_use]
pub mod console;
pub mod config;
pub mod error;
pub mod hal;
pub mod loopback;
pub mod runner;
pub mod transaction;
pub mod transport;

#[cfg(test)]
mod testing;

pub use config::{BitOrder, ConsoleSettings, LoopbackConfig, SpiSettings};
pub use console::{Console, SerialConsole};
pub use error::Error;
pub use hal::HalTransport;
pub use runner::{idle, setup, Report};
pub use transport::SpiTransport;
