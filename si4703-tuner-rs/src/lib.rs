//! Blocking driver for the Silicon Labs Si4702/Si4703 FM tuner.
//!
//! # Architecture
//!
//! - **[`RegisterSet`]** — the 16-word register bank by logical index, plus
//!   the rotated big-endian wire encoding the chip uses.
//! - **[`RegisterMap`]** — one-transaction bank read and registers 2..=7
//!   write over any `embedded-hal` 1.0 I2C bus.
//! - **[`TunerController`]** — reset and power-up sequencing, tuning, and
//!   volume, each as a full read-modify-write of the bank.
//!
//! # Quick start
//!
//! ```no_run
//! # use embedded_hal::{delay::DelayNs, digital::OutputPin, i2c::I2c};
//! # fn example(i2c: impl I2c, reset: impl OutputPin, delay: impl DelayNs) {
//! use si4703_tuner::{TunerConfig, TunerController};
//!
//! let mut tuner = TunerController::new(i2c, reset, delay, TunerConfig::default());
//! tuner.init().unwrap();
//! tuner.tune(101.1).unwrap();
//! tuner.change_volume(3).unwrap();
//! # }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on public types
//!   and debug logging of power and tuning transitions.

#![cfg_attr(not(test), no_std)]

pub use driver::RegisterMap;
pub use error::TunerError;
pub use register_set::{channel_index, Band, RegisterSet, Spacing};
pub use registers::{DEFAULT_ADDRESS, MAX_VOLUME};
pub use tuner::{Error, TunerConfig, TunerController};

mod driver;
mod error;
mod register_set;
pub mod registers;
mod tuner;
