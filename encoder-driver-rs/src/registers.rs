//! Seesaw register address constants for the Adafruit I2C QT Rotary Encoder.
//!
//! The Seesaw firmware uses a two-byte register addressing scheme:
//! - Byte 1: Module ID
//! - Byte 2: Register offset within the module
//!
//! GPIO bulk registers take a 32-bit big-endian pin mask in which pin `n`
//! is bit `n`.

// ---------------------------------------------------------------------------
// Module IDs
// ---------------------------------------------------------------------------

/// Seesaw GPIO module identifier.
pub const MODULE_GPIO: u8 = 0x01;

/// Seesaw encoder module identifier.
pub const MODULE_ENCODER: u8 = 0x11;

// ---------------------------------------------------------------------------
// GPIO module registers
// ---------------------------------------------------------------------------

/// Configure the masked pins as inputs (write-only).
pub const GPIO_DIRCLR_BULK: u8 = 0x03;

/// Pin levels (32-bit, read).
pub const GPIO_BULK: u8 = 0x04;

/// Drive the masked pins high; with pulls enabled this selects pull-up.
pub const GPIO_BULK_SET: u8 = 0x05;

/// Enable pull resistors on the masked pins.
pub const GPIO_PULLENSET: u8 = 0x0B;

// ---------------------------------------------------------------------------
// Encoder module registers
// ---------------------------------------------------------------------------

/// Absolute encoder position (32-bit signed). The breakout has a single
/// encoder, index 0.
pub const ENCODER_POSITION: u8 = 0x30;

// ---------------------------------------------------------------------------
// Protocol constants
// ---------------------------------------------------------------------------

/// Required delay in microseconds between I2C write and read operations
/// as the Seesaw firmware requires.
pub const SEESAW_DELAY_US: u32 = 125;

/// Highest pin number addressable through the 32-bit bulk registers.
pub const MAX_BULK_PIN: u8 = 31;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default I2C address of the Adafruit I2C QT Rotary Encoder.
pub const DEFAULT_ADDRESS: u8 = 0x36;

/// Seesaw pin wired to the encoder's push-button.
pub const DEFAULT_BUTTON_PIN: u8 = 24;
