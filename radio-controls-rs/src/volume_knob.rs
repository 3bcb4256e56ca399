use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;

use encoder_driver::EncoderListener;
use si4703_tuner::{Error as TunerFailure, TunerController};

/// Turns encoder movement into tuner volume changes.
///
/// The button is ignored. Tuner errors surface from
/// [`EncoderPoller::update()`](encoder_driver::EncoderPoller::update) as
/// [`EncoderError::Listener`](encoder_driver::EncoderError::Listener).
pub struct VolumeKnob<I2C, RST, D> {
    tuner: TunerController<I2C, RST, D>,
}

impl<I2C, RST, D> VolumeKnob<I2C, RST, D>
where
    I2C: I2c,
    RST: OutputPin,
    D: DelayNs,
{
    /// Wrap an initialised tuner.
    pub fn new(tuner: TunerController<I2C, RST, D>) -> Self {
        Self { tuner }
    }

    /// The wrapped tuner.
    pub fn tuner(&self) -> &TunerController<I2C, RST, D> {
        &self.tuner
    }

    /// Access the tuner between polls, e.g. to retune.
    pub fn tuner_mut(&mut self) -> &mut TunerController<I2C, RST, D> {
        &mut self.tuner
    }

    /// Unwrap the tuner.
    pub fn into_inner(self) -> TunerController<I2C, RST, D> {
        self.tuner
    }
}

impl<I2C, RST, D> EncoderListener for VolumeKnob<I2C, RST, D>
where
    I2C: I2c,
    RST: OutputPin,
    D: DelayNs,
{
    type Error = TunerFailure<I2C, RST>;

    fn on_change(&mut self, delta: i32) -> Result<(), Self::Error> {
        let result = self.tuner.change_volume(delta);

        #[cfg(feature = "defmt")]
        if result.is_ok() {
            defmt::info!("volume {}", self.tuner.volume());
        }

        result
    }
}
