//! Low-level Seesaw protocol driver.
//!
//! Implements the I2C communication primitives required by the Seesaw firmware,
//! including the mandatory 125µs delay between write and read phases.
//!
//! This module is crate-private — consumers interact with [`EncoderPoller`]
//! in `encoder.rs` instead.
//!
//! [`EncoderPoller`]: crate::EncoderPoller

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::registers::SEESAW_DELAY_US;

/// Low-level Seesaw protocol driver.
///
/// Owns an I2C peripheral and a delay, and provides read/write primitives
/// that respect the Seesaw timing requirements.
pub(crate) struct SeesawDriver<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> SeesawDriver<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a new Seesaw driver.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `delay` — delay provider for the write→read gap
    /// * `address` — 7-bit I2C device address (typically 0x36)
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
        }
    }

    // -----------------------------------------------------------------------
    // Core protocol primitives
    // -----------------------------------------------------------------------

    /// Write a register address, wait the required delay, then read the response.
    ///
    /// Uses separate `write()` and `read()` operations rather than `write_read()`
    /// because many I2C implementations use a repeated-start for `write_read()`
    /// which does not allow sufficient delay for the Seesaw firmware.
    fn write_then_read(&mut self, register: [u8; 2], buffer: &mut [u8]) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &register)?;

        // Seesaw firmware needs time to prepare the response
        self.delay.delay_us(SEESAW_DELAY_US);

        self.i2c.read(self.address, buffer)
    }

    // -----------------------------------------------------------------------
    // Typed read/write helpers
    // -----------------------------------------------------------------------

    /// Read a big-endian 32-bit signed integer from a register.
    pub fn read_i32(&mut self, register: [u8; 2]) -> Result<i32, I2C::Error> {
        let mut buf = [0u8; 4];
        self.write_then_read(register, &mut buf)?;
        Ok(i32::from_be_bytes(buf))
    }

    /// Read a big-endian 32-bit bitmask from a register.
    pub fn read_u32(&mut self, register: [u8; 2]) -> Result<u32, I2C::Error> {
        let mut buf = [0u8; 4];
        self.write_then_read(register, &mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Write a 32-bit value to a register.
    ///
    /// Sends the 2-byte register address and the big-endian value in a
    /// single I2C write transaction.
    pub fn write_u32(&mut self, register: [u8; 2], value: u32) -> Result<(), I2C::Error> {
        // [register_hi, register_lo, b3, b2, b1, b0]
        let mut buf = [0u8; 6];
        buf[0..2].copy_from_slice(&register);
        buf[2..6].copy_from_slice(&value.to_be_bytes());

        self.i2c.write(self.address, &buf)
    }

    /// Give the I2C peripheral and delay back.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}
