//! Blocking driver for the Adafruit I2C QT Rotary Encoder.
//!
//! This crate provides an `embedded-hal` 1.0 I2C driver for the Adafruit
//! Seesaw-based rotary encoder breakout with integrated push-button
//! (Product #4991).
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **`driver`** (crate-private) — Low-level Seesaw protocol primitives that
//!   handle I2C timing, endianness, and register addressing.
//! - **[`EncoderPoller`]** (public) — Polls position and button, turns them
//!   into deltas and press/release edges, and forwards them to an
//!   [`EncoderListener`].
//!
//! # Quick start
//!
//! ```no_run
//! # use embedded_hal::{delay::DelayNs, i2c::I2c};
//! # fn example(i2c: impl I2c, delay: impl DelayNs) {
//! use encoder_driver::{EncoderConfig, EncoderPoller};
//!
//! let mut encoder = EncoderPoller::new(i2c, delay, EncoderConfig::default());
//! encoder.init().unwrap();
//!
//! let position = encoder.position().unwrap();
//! let held = encoder.pressed().unwrap();
//! # }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on error types
//!   and debug logging of encoder events.

#![cfg_attr(not(test), no_std)]

pub use encoder::{signed_position, EncoderConfig, EncoderPoller, Error};
pub use error::EncoderError;
pub use listener::EncoderListener;
pub use registers::{DEFAULT_ADDRESS, DEFAULT_BUTTON_PIN};

mod driver;
mod encoder;
mod error;
mod listener;
mod registers;
