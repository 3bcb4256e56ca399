//! Error types for the tuner driver.

use core::fmt;

/// Errors that can occur when driving the tuner.
///
/// `E` is the I2C bus error, `P` the reset pin error.
#[derive(Debug)]
pub enum TunerError<E, P> {
    /// Underlying I2C bus error.
    I2c(E),

    /// Reset line could not be driven.
    Pin(P),

    /// Requested frequency lies outside the band configured in hardware.
    /// Nothing was written.
    FrequencyOutOfBand,

    /// SYSCONFIG2 holds a reserved band or spacing selector. Carries the raw
    /// register value. Nothing was written.
    ReservedConfiguration(u16),
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E, P> From<E> for TunerError<E, P> {
    fn from(error: E) -> Self {
        TunerError::I2c(error)
    }
}

impl<E: fmt::Debug, P: fmt::Debug> fmt::Display for TunerError<E, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TunerError::I2c(e) => write!(f, "I2C error: {:?}", e),
            TunerError::Pin(e) => write!(f, "Reset pin error: {:?}", e),
            TunerError::FrequencyOutOfBand => write!(f, "Frequency outside the configured band"),
            TunerError::ReservedConfiguration(reg) => {
                write!(f, "Reserved band/spacing selector (SYSCONFIG2 = {:#06x})", reg)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format, P: defmt::Format> defmt::Format for TunerError<E, P> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            TunerError::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            TunerError::Pin(e) => defmt::write!(f, "Reset pin error: {}", e),
            TunerError::FrequencyOutOfBand => defmt::write!(f, "Frequency out of band"),
            TunerError::ReservedConfiguration(reg) => {
                defmt::write!(f, "Reserved band/spacing selector: {=u16:#x}", *reg)
            }
        }
    }
}
