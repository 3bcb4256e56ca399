//! Error types for the encoder driver.

use core::convert::Infallible;
use core::fmt;

/// Errors that can occur when polling the encoder.
///
/// `E` is the I2C bus error, `L` the error type of the attached
/// [`EncoderListener`](crate::EncoderListener).
#[derive(Debug)]
pub enum EncoderError<E, L = Infallible> {
    /// Underlying I2C bus error.
    I2c(E),

    /// Button pin cannot be addressed through the 32-bit GPIO bulk registers
    /// (must be 0-31).
    InvalidPin,

    /// The listener rejected an event. Encoder state was already updated.
    Listener(L),
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E, L> From<E> for EncoderError<E, L> {
    fn from(error: E) -> Self {
        EncoderError::I2c(error)
    }
}

impl<E: fmt::Debug, L: fmt::Debug> fmt::Display for EncoderError<E, L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncoderError::I2c(e) => write!(f, "I2C error: {:?}", e),
            EncoderError::InvalidPin => write!(f, "Invalid button pin (must be 0-31)"),
            EncoderError::Listener(e) => write!(f, "Listener error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format, L: defmt::Format> defmt::Format for EncoderError<E, L> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EncoderError::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            EncoderError::InvalidPin => defmt::write!(f, "Invalid button pin"),
            EncoderError::Listener(e) => defmt::write!(f, "Listener error: {}", e),
        }
    }
}
