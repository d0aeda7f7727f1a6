#![cfg_attr(not(test), no_std)]

//! # envmon-core
//! ## Hardware-independent core of the envmon environmental monitor
//!
//! Features:
//! - Single-wire DHT11 protocol decoder with deadline-checked timing
//! - Gas threshold (MQ-2 comparator) state
//! - Display page state machine
//! - One-shot button debouncing
//! - 5x5 pixel grid alert patterns
//! - Serial telemetry line formatting
//!
//! Everything here is generic over `embedded-hal` 1.0 traits so it can
//! be exercised on the host; the firmware crate binds it to the RP2040.

pub mod debounce;
pub mod dht11;
pub mod gas;
pub mod matrix;
pub mod pages;
pub mod telemetry;

pub use dht11::{DecodeError, Dht11, MonotonicUs, SensorFrame};
pub use gas::GasState;
pub use matrix::{PixelGrid, Rgb};
pub use pages::Page;
