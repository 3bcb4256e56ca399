//! High-level control of the Si4702/Si4703.
//!
//! [`TunerController`] owns the power-up state machine, the channel
//! computation, and the volume field. Every operation re-reads the whole
//! register bank, mutates it, and writes registers 2..=7 back, so bits the
//! chip changes on its own (seek/tune status, RDS flags) are never
//! overwritten with a stale copy.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::i2c::{self, I2c};

use crate::driver::RegisterMap;
use crate::error::TunerError;
use crate::register_set::{channel_index, Band, RegisterSet, Spacing};
use crate::registers::{
    CHANNEL_MASK, CHANNEL_TUNE, DEFAULT_ADDRESS, MAX_VOLUME, OSCILLATOR_SETTLE_MS,
    POWERCFG_ENABLE, POWERCFG_MUTE_DISABLE, POWERCFG_POWER_DOWN, POWER_SETTLE_MS, REG_CHANNEL,
    REG_POWERCFG, REG_SYSCONFIG1, REG_SYSCONFIG2, REG_SYSCONFIG3, REG_TEST1, RESET_PULSE_MS,
    RESET_RECOVERY_MS, RESET_SETTLE_MS, SYSCONFIG1_BLNDADJ_CLEAR, SYSCONFIG1_RDS_DE,
    SYSCONFIG2_POWER_UP, SYSCONFIG2_VOLUME_MASK, SYSCONFIG3_KEEP_MASK, SYSCONFIG3_POWER_UP,
    TEST1_XOSCEN,
};

/// Error type returned by [`TunerController`] operations.
pub type Error<I2C, RST> =
    TunerError<<I2C as i2c::ErrorType>::Error, <RST as digital::ErrorType>::Error>;

// ── TunerConfig ──────────────────────────────────────────────────────────

/// Construction-time settings for [`TunerController`].
///
/// [`TunerConfig::default()`] targets the standard Si4703 address and does
/// not tune during initialisation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TunerConfig {
    /// 7-bit I2C address. Default: `0x10`.
    pub address: u8,
    /// Frequency in MHz to tune to at the end of initialisation. Default: `None`.
    pub tuning: Option<f32>,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            tuning: None,
        }
    }
}

// ── TunerController ──────────────────────────────────────────────────────

/// Blocking driver for the Si4702/Si4703 FM tuner.
///
/// # Lifecycle
///
/// 1. [`TunerController::new()`] — stores the peripherals; no bus traffic.
/// 2. [`TunerController::init()`] — reset pulse, oscillator start, power
///    cycle, and the optional initial tune (about 1.2 s of settle delays).
/// 3. [`tune()`](Self::tune), [`set_volume()`](Self::set_volume),
///    [`change_volume()`](Self::change_volume) as needed.
///
/// # Example
///
/// ```no_run
/// # use embedded_hal::{delay::DelayNs, digital::OutputPin, i2c::I2c};
/// # fn example(i2c: impl I2c, reset: impl OutputPin, delay: impl DelayNs) {
/// use si4703_tuner::{TunerConfig, TunerController};
///
/// let config = TunerConfig { tuning: Some(93.9), ..TunerConfig::default() };
/// let mut tuner = TunerController::new(i2c, reset, delay, config);
/// tuner.init().unwrap();
/// tuner.set_volume(5).unwrap();
/// # }
/// ```
pub struct TunerController<I2C, RST, D> {
    registers: RegisterMap<I2C>,
    reset_pin: RST,
    delay: D,
    /// Last volume applied by this driver.
    volume: u8,
    /// Last frequency successfully tuned (or configured), re-applied by
    /// [`reinitialize()`](Self::reinitialize).
    tuning: Option<f32>,
}

impl<I2C, RST, D> TunerController<I2C, RST, D>
where
    I2C: I2c,
    RST: OutputPin,
    D: DelayNs,
{
    /// Construct the driver without touching the bus or the reset line.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `reset_pin` — output driving the chip's RST line
    /// * `delay` — delay provider for the settle times
    /// * `config` — address and optional initial frequency
    pub fn new(i2c: I2C, reset_pin: RST, delay: D, config: TunerConfig) -> Self {
        Self {
            registers: RegisterMap::new(i2c, config.address),
            reset_pin,
            delay,
            volume: 0,
            tuning: config.tuning,
        }
    }

    // -----------------------------------------------------------------------
    // Power-up sequencing
    // -----------------------------------------------------------------------

    /// Bring the chip from cold to a tuned, powered-up state.
    ///
    /// Equivalent to [`reinitialize()`](Self::reinitialize).
    pub fn init(&mut self) -> Result<(), Error<I2C, RST>> {
        self.reinitialize()
    }

    /// Run the full power-up sequence.
    ///
    /// 1. Reset pulse ([`reset()`](Self::reset))
    /// 2. Crystal oscillator start ([`enable_oscillator()`](Self::enable_oscillator))
    /// 3. Power down, then power up
    /// 4. Tune to the last requested frequency, if any
    ///
    /// The phases always run in this order; each waits for its settle delay.
    pub fn reinitialize(&mut self) -> Result<(), Error<I2C, RST>> {
        #[cfg(feature = "defmt")]
        defmt::info!("si4703: reinitialising");

        self.reset()?;
        self.enable_oscillator()?;
        self.power_down()?;
        self.power_up()?;

        if let Some(freq) = self.tuning {
            self.tune(freq)?;
        }

        #[cfg(feature = "defmt")]
        defmt::info!("si4703: ready");

        Ok(())
    }

    /// Pulse the reset line to boot the chip into 2-wire (I2C) mode.
    ///
    /// High for 500 ms to let power-on glitches settle, low for 1 ms, then
    /// high again with a 5 ms hold. No other device on the bus may be
    /// addressed during the pulse.
    pub fn reset(&mut self) -> Result<(), Error<I2C, RST>> {
        self.drive_reset(true)?;
        self.delay.delay_ms(RESET_SETTLE_MS);

        self.drive_reset(false)?;
        self.delay.delay_ms(RESET_PULSE_MS);

        self.drive_reset(true)?;
        self.delay.delay_ms(RESET_RECOVERY_MS);

        Ok(())
    }

    /// Set XOSCEN and wait for the crystal to stabilise (500 ms).
    pub fn enable_oscillator(&mut self) -> Result<(), Error<I2C, RST>> {
        self.modify(|regs| regs[REG_TEST1] |= TEST1_XOSCEN)?;
        self.delay.delay_ms(OSCILLATOR_SETTLE_MS);
        Ok(())
    }

    /// Enable the chip and load the power-up configuration.
    ///
    /// * POWERCFG = ENABLE only (muted, volume handled separately)
    /// * SYSCONFIG1: RDS and de-emphasis on, BLNDADJ cleared
    /// * SYSCONFIG2 = seek threshold 12, US/Europe band, 100 kHz spacing
    /// * SYSCONFIG3 low byte = RDSPRF, seek SNR 4, seek count 15
    pub fn power_up(&mut self) -> Result<(), Error<I2C, RST>> {
        self.modify(|regs| {
            regs[REG_POWERCFG] = POWERCFG_ENABLE;
            regs[REG_SYSCONFIG1] |= SYSCONFIG1_RDS_DE;
            regs[REG_SYSCONFIG1] &= SYSCONFIG1_BLNDADJ_CLEAR;
            regs[REG_SYSCONFIG2] = SYSCONFIG2_POWER_UP;
            regs[REG_SYSCONFIG3] &= SYSCONFIG3_KEEP_MASK;
            regs[REG_SYSCONFIG3] |= SYSCONFIG3_POWER_UP;
        })?;
        self.delay.delay_ms(POWER_SETTLE_MS);

        #[cfg(feature = "defmt")]
        defmt::debug!("si4703: powered up");

        Ok(())
    }

    /// Disable the chip (DISABLE | ENABLE pattern).
    pub fn power_down(&mut self) -> Result<(), Error<I2C, RST>> {
        self.modify(|regs| regs[REG_POWERCFG] = POWERCFG_POWER_DOWN)?;
        self.delay.delay_ms(POWER_SETTLE_MS);

        #[cfg(feature = "defmt")]
        defmt::debug!("si4703: powered down");

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Tuning
    // -----------------------------------------------------------------------

    /// Tune to `freq` MHz.
    ///
    /// Band and spacing are decoded from the live SYSCONFIG2 value, never
    /// from a cached copy. The channel index is rounded to the nearest
    /// channel and written to CHANNEL together with the TUNE bit.
    ///
    /// # Errors
    /// * [`TunerError::FrequencyOutOfBand`] if `freq` lies outside the
    ///   configured band; nothing is written
    /// * [`TunerError::ReservedConfiguration`] if SYSCONFIG2 holds a reserved
    ///   selector; nothing is written
    /// * [`TunerError::I2c`] on communication failure
    pub fn tune(&mut self, freq: f32) -> Result<(), Error<I2C, RST>> {
        let mut regs = self.registers.read()?;
        let Some((band, spacing)) = band_spacing(&regs) else {
            return Err(TunerError::ReservedConfiguration(regs[REG_SYSCONFIG2]));
        };
        let Some(channel) = channel_index(freq, band, spacing) else {
            return Err(TunerError::FrequencyOutOfBand);
        };

        regs[REG_CHANNEL] = CHANNEL_TUNE | (channel & CHANNEL_MASK);
        self.registers.write(&regs)?;
        self.tuning = Some(freq);

        #[cfg(feature = "defmt")]
        defmt::debug!("si4703: tune {} MHz -> channel {}", freq, channel);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Volume
    // -----------------------------------------------------------------------

    /// Set the volume, clamped to 0..=15.
    ///
    /// A non-zero volume releases both mutes; zero engages them. The upper
    /// twelve bits of SYSCONFIG2 (band, spacing, seek threshold) are kept.
    /// The extended-volume bit is never touched.
    pub fn set_volume(&mut self, vol: i32) -> Result<(), Error<I2C, RST>> {
        let volume = vol.clamp(0, i32::from(MAX_VOLUME)) as u8;

        self.modify(|regs| {
            if volume > 0 {
                regs[REG_POWERCFG] |= POWERCFG_MUTE_DISABLE;
            } else {
                regs[REG_POWERCFG] &= !POWERCFG_MUTE_DISABLE;
            }
            let config = regs[REG_SYSCONFIG2] & !SYSCONFIG2_VOLUME_MASK;
            regs[REG_SYSCONFIG2] = config | u16::from(volume);
        })?;
        self.volume = volume;

        #[cfg(feature = "defmt")]
        defmt::debug!("si4703: volume {}", volume);

        Ok(())
    }

    /// Adjust the volume relative to the last value this driver applied.
    pub fn change_volume(&mut self, delta: i32) -> Result<(), Error<I2C, RST>> {
        self.set_volume(i32::from(self.volume).saturating_add(delta))
    }

    // -----------------------------------------------------------------------
    // State
    // -----------------------------------------------------------------------

    /// Volume last applied by [`set_volume()`](Self::set_volume). No bus traffic.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Frequency last tuned, or configured for initialisation. No bus traffic.
    pub fn tuning(&self) -> Option<f32> {
        self.tuning
    }

    /// Read the register bank.
    pub fn registers(&mut self) -> Result<RegisterSet, Error<I2C, RST>> {
        Ok(self.registers.read()?)
    }

    /// Band currently configured in hardware.
    pub fn band(&mut self) -> Result<Band, Error<I2C, RST>> {
        let regs = self.registers.read()?;
        regs.band()
            .ok_or(TunerError::ReservedConfiguration(regs[REG_SYSCONFIG2]))
    }

    /// Channel spacing currently configured in hardware.
    pub fn spacing(&mut self) -> Result<Spacing, Error<I2C, RST>> {
        let regs = self.registers.read()?;
        regs.spacing()
            .ok_or(TunerError::ReservedConfiguration(regs[REG_SYSCONFIG2]))
    }

    /// Channel index currently held in the CHANNEL register.
    pub fn channel(&mut self) -> Result<u16, Error<I2C, RST>> {
        let regs = self.registers.read()?;
        Ok(regs[REG_CHANNEL] & CHANNEL_MASK)
    }

    /// Give the peripherals back: `(i2c, reset_pin, delay)`.
    pub fn release(self) -> (I2C, RST, D) {
        (self.registers.release(), self.reset_pin, self.delay)
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn drive_reset(&mut self, high: bool) -> Result<(), Error<I2C, RST>> {
        let result = if high {
            self.reset_pin.set_high()
        } else {
            self.reset_pin.set_low()
        };
        result.map_err(TunerError::Pin)
    }

    /// Read the bank, apply `f`, write registers 2..=7 back.
    fn modify<F>(&mut self, f: F) -> Result<(), I2C::Error>
    where
        F: FnOnce(&mut RegisterSet),
    {
        let mut regs = self.registers.read()?;
        f(&mut regs);
        self.registers.write(&regs)
    }
}

fn band_spacing(regs: &RegisterSet) -> Option<(Band, Spacing)> {
    Some((regs.band()?, regs.spacing()?))
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::{CheckedDelay, NoopDelay, Transaction as DelayTransaction};
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use embedded_hal_mock::eh1::MockError;
    use std::io::ErrorKind::NotConnected;

    const ADDR: u8 = DEFAULT_ADDRESS;

    type TestTuner<D> = TunerController<I2cMock, PinMock, D>;

    fn read(regs: &RegisterSet) -> I2cTransaction {
        I2cTransaction::read(ADDR, regs.to_wire().to_vec())
    }

    fn write(regs: &RegisterSet) -> I2cTransaction {
        I2cTransaction::write(ADDR, regs.write_payload().to_vec())
    }

    /// A bank as the chip reports it straight after reset.
    fn reset_bank() -> RegisterSet {
        let mut regs = RegisterSet::default();
        regs[0x00] = 0x1242;
        regs[0x01] = 0x1253;
        regs[REG_SYSCONFIG1] = 0x00C0;
        regs[REG_SYSCONFIG3] = 0x1200;
        regs[REG_TEST1] = 0x0100;
        regs
    }

    /// A bank as it looks after `power_up()`.
    fn powered_bank() -> RegisterSet {
        let mut regs = reset_bank();
        regs[REG_POWERCFG] = 0x0001;
        regs[REG_SYSCONFIG1] = 0x1800;
        regs[REG_SYSCONFIG2] = 0x0C10;
        regs[REG_SYSCONFIG3] = 0x124F;
        regs[REG_TEST1] = 0x8100;
        regs
    }

    fn tuner_with(expectations: &[I2cTransaction]) -> TestTuner<NoopDelay> {
        TunerController::new(
            I2cMock::new(expectations),
            PinMock::new(&[]),
            NoopDelay::new(),
            TunerConfig::default(),
        )
    }

    fn finish<D: DelayNs>(tuner: TestTuner<D>) {
        let (mut i2c, mut pin, _) = tuner.release();
        i2c.done();
        pin.done();
    }

    /// Read/write pairs for a full power-up, echoing each write back as the
    /// next read. Returns the transactions and the final bank.
    fn power_up_transactions(tune_to: Option<u16>) -> (Vec<I2cTransaction>, RegisterSet) {
        let mut transactions = Vec::new();
        let mut regs = reset_bank();

        // Oscillator
        transactions.push(read(&regs));
        regs[REG_TEST1] |= 0x8000;
        transactions.push(write(&regs));

        // Power down
        transactions.push(read(&regs));
        regs[REG_POWERCFG] = 0x0041;
        transactions.push(write(&regs));

        // Power up
        transactions.push(read(&regs));
        regs = powered_bank();
        transactions.push(write(&regs));

        if let Some(channel_reg) = tune_to {
            transactions.push(read(&regs));
            regs[REG_CHANNEL] = channel_reg;
            transactions.push(write(&regs));
        }

        (transactions, regs)
    }

    // ── Power-up sequencing ──────────────────────────────────────────

    #[test]
    fn init_runs_phases_in_order_with_settle_delays() {
        let (transactions, _) = power_up_transactions(Some(0x8040));
        let pin_expectations = [
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ];
        let delay_expectations = [
            DelayTransaction::delay_ms(500),
            DelayTransaction::delay_ms(1),
            DelayTransaction::delay_ms(5),
            DelayTransaction::delay_ms(500),
            DelayTransaction::delay_ms(110),
            DelayTransaction::delay_ms(110),
        ];

        let config = TunerConfig {
            tuning: Some(93.9),
            ..TunerConfig::default()
        };
        let mut tuner = TunerController::new(
            I2cMock::new(&transactions),
            PinMock::new(&pin_expectations),
            CheckedDelay::new(&delay_expectations),
            config,
        );

        tuner.init().unwrap();
        assert_eq!(tuner.tuning(), Some(93.9));

        let (mut i2c, mut pin, mut delay) = tuner.release();
        i2c.done();
        pin.done();
        delay.done();
    }

    #[test]
    fn init_without_tuning_skips_channel_write() {
        let (transactions, _) = power_up_transactions(None);
        let pin_expectations = [
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ];
        let mut tuner = TunerController::new(
            I2cMock::new(&transactions),
            PinMock::new(&pin_expectations),
            NoopDelay::new(),
            TunerConfig::default(),
        );

        tuner.init().unwrap();
        assert_eq!(tuner.tuning(), None);

        finish(tuner);
    }

    #[test]
    fn reinitialize_retunes_last_frequency() {
        let (mut transactions, regs) = power_up_transactions(None);
        // tune(101.1) after the first init
        let mut tuned = regs;
        tuned[REG_CHANNEL] = 0x8088;
        transactions.push(read(&regs));
        transactions.push(write(&tuned));
        // second init ends with the same channel write
        let (again, _) = power_up_transactions(Some(0x8088));
        transactions.extend(again);

        let pin_expectations: Vec<_> = (0..2)
            .flat_map(|_| {
                [
                    PinTransaction::set(State::High),
                    PinTransaction::set(State::Low),
                    PinTransaction::set(State::High),
                ]
            })
            .collect();
        let mut tuner = TunerController::new(
            I2cMock::new(&transactions),
            PinMock::new(&pin_expectations),
            NoopDelay::new(),
            TunerConfig::default(),
        );

        tuner.init().unwrap();
        tuner.tune(101.1).unwrap();
        tuner.reinitialize().unwrap();

        finish(tuner);
    }

    #[test]
    fn power_up_preserves_sysconfig3_high_byte() {
        let mut before = reset_bank();
        before[REG_SYSCONFIG3] = 0xA5FF;
        let mut after = before;
        after[REG_POWERCFG] = 0x0001;
        after[REG_SYSCONFIG1] = 0x1800;
        after[REG_SYSCONFIG2] = 0x0C10;
        after[REG_SYSCONFIG3] = 0xA74F;

        let mut tuner = tuner_with(&[read(&before), write(&after)]);
        tuner.power_up().unwrap();
        finish(tuner);
    }

    // ── Tuning ───────────────────────────────────────────────────────

    #[test]
    fn tune_writes_channel_with_tune_bit() {
        let regs = powered_bank();
        let mut tuned = regs;
        tuned[REG_CHANNEL] = 0x8088;

        let mut tuner = tuner_with(&[read(&regs), write(&tuned)]);
        tuner.tune(101.1).unwrap();
        assert_eq!(tuner.tuning(), Some(101.1));

        finish(tuner);
    }

    #[test]
    fn tune_follows_band_and_spacing_in_hardware() {
        let mut regs = powered_bank();
        // Japan band, 50 kHz spacing
        regs[REG_SYSCONFIG2] = 0x0C80;
        let mut tuned = regs;
        tuned[REG_CHANNEL] = 0x800A;

        let mut tuner = tuner_with(&[read(&regs), write(&tuned)]);
        tuner.tune(76.5).unwrap();

        finish(tuner);
    }

    #[test]
    fn tune_out_of_band_writes_nothing() {
        let regs = powered_bank();
        let mut tuner = tuner_with(&[read(&regs)]);

        assert!(matches!(tuner.tune(120.0), Err(TunerError::FrequencyOutOfBand)));
        assert_eq!(tuner.tuning(), None);

        finish(tuner);
    }

    #[test]
    fn tune_rejects_reserved_band() {
        let mut regs = powered_bank();
        regs[REG_SYSCONFIG2] = 0x0CD0;
        let mut tuner = tuner_with(&[read(&regs)]);

        assert!(matches!(
            tuner.tune(95.0),
            Err(TunerError::ReservedConfiguration(0x0CD0))
        ));

        finish(tuner);
    }

    // ── Volume ───────────────────────────────────────────────────────

    #[test]
    fn set_volume_clamps_to_nybble() {
        let cases = [(-5, 0u8), (0, 0), (7, 7), (15, 15), (16, 15), (100, 15), (i32::MIN, 0)];
        let mut transactions = Vec::new();
        let mut regs = powered_bank();
        for &(_, expected) in &cases {
            transactions.push(read(&regs));
            if expected > 0 {
                regs[REG_POWERCFG] |= 0xC000;
            } else {
                regs[REG_POWERCFG] &= 0x3FFF;
            }
            regs[REG_SYSCONFIG2] = 0x0C10 | u16::from(expected);
            transactions.push(write(&regs));
        }

        let mut tuner = tuner_with(&transactions);
        for &(requested, expected) in &cases {
            tuner.set_volume(requested).unwrap();
            assert_eq!(tuner.volume(), expected, "set_volume({})", requested);
        }

        finish(tuner);
    }

    #[test]
    fn zero_volume_engages_mute_and_keeps_config_bits() {
        let mut regs = powered_bank();
        regs[REG_POWERCFG] = 0xC001;
        regs[REG_SYSCONFIG2] = 0x0C1A;
        let mut muted = regs;
        muted[REG_POWERCFG] = 0x0001;
        muted[REG_SYSCONFIG2] = 0x0C10;

        let mut tuner = tuner_with(&[read(&regs), write(&muted)]);
        tuner.set_volume(0).unwrap();
        assert_eq!(tuner.volume(), 0);

        finish(tuner);
    }

    #[test]
    fn change_volume_is_relative_to_applied_volume() {
        let mut transactions = Vec::new();
        let mut regs = powered_bank();
        for volume in [5u16, 3, 0] {
            transactions.push(read(&regs));
            regs[REG_POWERCFG] = if volume > 0 { 0xC001 } else { 0x0001 };
            regs[REG_SYSCONFIG2] = 0x0C10 | volume;
            transactions.push(write(&regs));
        }

        let mut tuner = tuner_with(&transactions);
        tuner.change_volume(5).unwrap();
        assert_eq!(tuner.volume(), 5);
        tuner.change_volume(-2).unwrap();
        assert_eq!(tuner.volume(), 3);
        tuner.change_volume(-10).unwrap();
        assert_eq!(tuner.volume(), 0);

        finish(tuner);
    }

    // ── Errors and accessors ─────────────────────────────────────────

    #[test]
    fn bus_error_propagates_and_keeps_volume() {
        let expectations =
            [I2cTransaction::read(ADDR, vec![0; 32]).with_error(ErrorKind::Other)];
        let mut tuner = tuner_with(&expectations);

        assert!(matches!(
            tuner.set_volume(8),
            Err(TunerError::I2c(ErrorKind::Other))
        ));
        assert_eq!(tuner.volume(), 0);

        finish(tuner);
    }

    #[test]
    fn reset_pin_failure_stops_init_before_any_bus_traffic() {
        let mut tuner = TunerController::new(
            I2cMock::new(&[]),
            PinMock::new(&[
                PinTransaction::set(State::High).with_error(MockError::Io(NotConnected)),
            ]),
            NoopDelay::new(),
            TunerConfig {
                tuning: Some(101.1),
                ..TunerConfig::default()
            },
        );

        assert!(matches!(tuner.init(), Err(TunerError::Pin(MockError::Io(NotConnected)))));
        assert_eq!(tuner.tuning(), Some(101.1));

        finish(tuner);
    }

    #[test]
    fn accessors_decode_live_registers() {
        let mut regs = powered_bank();
        regs[REG_CHANNEL] = 0x8088;

        let mut tuner = tuner_with(&[read(&regs), read(&regs), read(&regs)]);
        assert_eq!(tuner.band().unwrap(), Band::UsEurope);
        assert_eq!(tuner.spacing().unwrap(), Spacing::Khz100);
        assert_eq!(tuner.channel().unwrap(), 136);

        finish(tuner);
    }
}
