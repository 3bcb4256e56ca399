//! Polling interface for the Adafruit I2C QT Rotary Encoder.
//!
//! [`EncoderPoller`] turns the Seesaw's free-running position counter into
//! signed deltas and the active-low button level into press/release edges,
//! forwarding both to an [`EncoderListener`].

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{self, I2c};

use crate::driver::SeesawDriver;
use crate::error::EncoderError;
use crate::listener::EncoderListener;
use crate::registers::{
    DEFAULT_ADDRESS, DEFAULT_BUTTON_PIN, ENCODER_POSITION, GPIO_BULK, GPIO_BULK_SET,
    GPIO_DIRCLR_BULK, GPIO_PULLENSET, MAX_BULK_PIN, MODULE_ENCODER, MODULE_GPIO,
};

/// Error type returned by [`EncoderPoller`] operations.
pub type Error<I2C, L> =
    EncoderError<<I2C as i2c::ErrorType>::Error, <L as EncoderListener>::Error>;

/// Reinterpret the low 16 bits of the Seesaw position counter as a signed
/// value, so rotation through zero yields small negative positions.
///
/// ```
/// assert_eq!(encoder_driver::signed_position(65500), -36);
/// assert_eq!(encoder_driver::signed_position(-5), -5);
/// ```
pub fn signed_position(raw: i32) -> i16 {
    raw as u16 as i16
}

// ── EncoderConfig ────────────────────────────────────────────────────────

/// Construction-time settings for [`EncoderPoller`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    /// 7-bit I2C address. Default: `0x36`.
    pub address: u8,
    /// Seesaw pin wired to the push-button. Default: `24`.
    pub button_pin: u8,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            button_pin: DEFAULT_BUTTON_PIN,
        }
    }
}

// ── EncoderPoller ────────────────────────────────────────────────────────

/// Polls a single Seesaw rotary encoder with an integrated push-button.
///
/// The poller never sleeps between polls; call [`update()`](Self::update)
/// from your own loop at whatever rate suits the application.
///
/// # Example
///
/// ```no_run
/// # use embedded_hal::{delay::DelayNs, i2c::I2c};
/// # fn example(i2c: impl I2c, delay: impl DelayNs) {
/// use encoder_driver::{EncoderConfig, EncoderListener, EncoderPoller};
///
/// struct Printer;
///
/// impl EncoderListener for Printer {
///     type Error = core::convert::Infallible;
///
///     fn on_change(&mut self, delta: i32) -> Result<(), Self::Error> {
///         // react to `delta`
///         Ok(())
///     }
/// }
///
/// let mut encoder = EncoderPoller::new(i2c, delay, EncoderConfig::default())
///     .with_listener(Printer);
/// encoder.init().unwrap();
/// loop {
///     encoder.update().unwrap();
/// }
/// # }
/// ```
pub struct EncoderPoller<I2C, D, L = ()> {
    driver: SeesawDriver<I2C, D>,
    button_pin: u8,
    listener: L,
    last_position: i16,
    button_held: bool,
}

impl<I2C, D> EncoderPoller<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a poller with no listener.
    ///
    /// No I2C traffic is generated. Call [`init()`](Self::init) before the
    /// first [`update()`](Self::update) so the button pin has its pull-up.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `delay` — delay provider for the Seesaw write→read gap
    /// * `config` — device address and button pin
    pub fn new(i2c: I2C, delay: D, config: EncoderConfig) -> Self {
        Self {
            driver: SeesawDriver::new(i2c, delay, config.address),
            button_pin: config.button_pin,
            listener: (),
            last_position: 0,
            button_held: false,
        }
    }
}

impl<I2C, D, L> EncoderPoller<I2C, D, L>
where
    I2C: I2c,
    D: DelayNs,
    L: EncoderListener,
{
    /// Replace the listener, keeping the tracked position and button state.
    pub fn with_listener<M: EncoderListener>(self, listener: M) -> EncoderPoller<I2C, D, M> {
        EncoderPoller {
            driver: self.driver,
            button_pin: self.button_pin,
            listener,
            last_position: self.last_position,
            button_held: self.button_held,
        }
    }

    /// Configure the button pin as an input with pull-up.
    ///
    /// # Errors
    /// * [`EncoderError::InvalidPin`] if the button pin is above 31
    /// * [`EncoderError::I2c`] on communication failure
    pub fn init(&mut self) -> Result<(), Error<I2C, L>> {
        let Some(mask) = self.button_mask() else {
            return Err(EncoderError::InvalidPin);
        };

        self.driver.write_u32([MODULE_GPIO, GPIO_DIRCLR_BULK], mask)?;
        self.driver.write_u32([MODULE_GPIO, GPIO_PULLENSET], mask)?;
        self.driver.write_u32([MODULE_GPIO, GPIO_BULK_SET], mask)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("encoder: button pin {} configured", self.button_pin);

        Ok(())
    }

    /// Poll position and button once, notifying the listener of changes.
    ///
    /// 1. Read the position counter. If the signed position moved, call
    ///    [`on_change`](EncoderListener::on_change) with the delta (not the
    ///    absolute position).
    /// 2. Read the button (active-low). On a press or release edge, call
    ///    [`on_press`](EncoderListener::on_press) once with the new state.
    ///    Holding the button across polls produces no further events.
    ///
    /// Cached state is updated before the listener runs, so a listener error
    /// does not replay the same event on the next poll.
    ///
    /// # Errors
    /// * [`EncoderError::I2c`] on communication failure
    /// * [`EncoderError::InvalidPin`] if the button pin is above 31
    /// * [`EncoderError::Listener`] if the listener fails; the button is not
    ///   read in that poll when `on_change` failed
    pub fn update(&mut self) -> Result<(), Error<I2C, L>> {
        let raw = self.driver.read_i32([MODULE_ENCODER, ENCODER_POSITION])?;
        let position = signed_position(raw);

        if position != self.last_position {
            let delta = i32::from(position) - i32::from(self.last_position);
            self.last_position = position;

            #[cfg(feature = "defmt")]
            defmt::debug!("encoder: delta={}, position={}", delta, position);

            if let Err(e) = self.listener.on_change(delta) {
                return Err(EncoderError::Listener(e));
            }
        }

        let Some(mask) = self.button_mask() else {
            return Err(EncoderError::InvalidPin);
        };
        let levels = self.driver.read_u32([MODULE_GPIO, GPIO_BULK])?;
        let held = levels & mask == 0;

        if held != self.button_held {
            self.button_held = held;

            #[cfg(feature = "defmt")]
            defmt::debug!("encoder: button {}", if held { "pressed" } else { "released" });

            if let Err(e) = self.listener.on_press(held) {
                return Err(EncoderError::Listener(e));
            }
        }

        Ok(())
    }

    /// Poll, then return the signed position.
    pub fn position(&mut self) -> Result<i16, Error<I2C, L>> {
        self.update()?;
        Ok(self.last_position)
    }

    /// Poll, then return whether the button is held.
    pub fn pressed(&mut self) -> Result<bool, Error<I2C, L>> {
        self.update()?;
        Ok(self.button_held)
    }

    /// Position seen by the last poll. No I2C traffic.
    pub fn last_position(&self) -> i16 {
        self.last_position
    }

    /// Button state seen by the last poll. No I2C traffic.
    pub fn is_held(&self) -> bool {
        self.button_held
    }

    /// The attached listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable access to the listener between polls.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Give the peripherals and listener back: `(i2c, delay, listener)`.
    pub fn release(self) -> (I2C, D, L) {
        let (i2c, delay) = self.driver.release();
        (i2c, delay, self.listener)
    }

    fn button_mask(&self) -> Option<u32> {
        (self.button_pin <= MAX_BULK_PIN).then(|| 1u32 << self.button_pin)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
