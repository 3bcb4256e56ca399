//! Encoder-to-tuner wiring for the FM radio.
//!
//! [`VolumeKnob`] owns a [`TunerController`] and implements
//! [`EncoderListener`], so every detent the encoder reports becomes a
//! relative volume step on the tuner:
//!
//! ```no_run
//! # use embedded_hal::{delay::DelayNs, digital::OutputPin, i2c::I2c};
//! # fn example<I: I2c, P: OutputPin, D: DelayNs>(tuner_i2c: I, encoder_i2c: I, reset: P, d1: D, d2: D) {
//! use encoder_driver::{EncoderConfig, EncoderPoller};
//! use radio_controls::VolumeKnob;
//! use si4703_tuner::{TunerConfig, TunerController};
//!
//! let mut tuner = TunerController::new(tuner_i2c, reset, d1, TunerConfig::default());
//! tuner.init().unwrap();
//!
//! let mut encoder = EncoderPoller::new(encoder_i2c, d2, EncoderConfig::default())
//!     .with_listener(VolumeKnob::new(tuner));
//! encoder.init().unwrap();
//! loop {
//!     encoder.update().unwrap();
//! }
//! # }
//! ```

#![cfg_attr(not(test), no_std)]

mod volume_knob;

pub use volume_knob::VolumeKnob;
