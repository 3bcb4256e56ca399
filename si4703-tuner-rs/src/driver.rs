//! Register-bank transport.
//!
//! The Si4703 has no register pointer: a bus read always returns the whole
//! bank starting at register `0x0A`, and a bus write always starts at
//! register `0x02`. [`RegisterMap`] hides both quirks behind a logical
//! [`RegisterSet`].

use embedded_hal::i2c::I2c;

use crate::register_set::RegisterSet;
use crate::registers::{READ_LEN, WRITE_LEN};

/// Reads and writes the tuner's register bank over I2C.
pub struct RegisterMap<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> RegisterMap<I2C>
where
    I2C: I2c,
{
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address (typically 0x10)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Read the full bank in one 32-byte transaction.
    pub fn read(&mut self) -> Result<RegisterSet, I2C::Error> {
        let mut buf = [0u8; READ_LEN];
        self.i2c.read(self.address, &mut buf)?;
        Ok(RegisterSet::from_wire(&buf))
    }

    /// Write registers 2..=7 in one 12-byte transaction.
    ///
    /// Registers outside that window are ignored. Not retried on failure.
    pub fn write(&mut self, regs: &RegisterSet) -> Result<(), I2C::Error> {
        let payload: [u8; WRITE_LEN] = regs.write_payload();
        self.i2c.write(self.address, &payload)
    }

    /// Give the I2C peripheral back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn read_unscrambles_bank() {
        let mut wire = [0u8; READ_LEN];
        // Wire word 8 carries logical register 2.
        wire[16] = 0x40;
        wire[17] = 0x01;
        let expectations = [I2cTransaction::read(0x10, wire.to_vec())];
        let mut map = RegisterMap::new(I2cMock::new(&expectations), 0x10);

        let regs = map.read().unwrap();
        assert_eq!(regs[2], 0x4001);
        assert_eq!(regs[0], 0);

        map.release().done();
    }

    #[test]
    fn write_sends_registers_2_to_7() {
        let mut regs = RegisterSet::default();
        regs[0] = 0x1242;
        regs[2] = 0x0001;
        regs[5] = 0x0C10;
        regs[7] = 0x8100;
        regs[10] = 0xFFFF;

        let expectations = [I2cTransaction::write(
            0x10,
            vec![0x00, 0x01, 0, 0, 0, 0, 0x0C, 0x10, 0, 0, 0x81, 0x00],
        )];
        let mut map = RegisterMap::new(I2cMock::new(&expectations), 0x10);

        map.write(&regs).unwrap();

        map.release().done();
    }
}
