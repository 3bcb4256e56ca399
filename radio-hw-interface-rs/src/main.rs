//! radio-hw-interface
//!
//! Encoder → volume firmware for the Raspberry Pi Pico 2. Wires the library
//! crates into a polling loop:
//!
//! 1. The Si4703 is reset, powered up, and tuned to [`TUNING_MHZ`].
//! 2. Every [`POLL_PERIOD_MS`] the rotary encoder is polled.
//! 3. Any movement is forwarded as a delta to `VolumeKnob`, which steps the
//!    tuner volume (0–15, zero mutes).
//!
//! Both devices share I2C0. All bus traffic happens on the main task, one
//! transaction at a time.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_embedded_hal::shared_bus::blocking::i2c::I2cDevice;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Delay, Duration, Ticker};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use encoder_driver::{EncoderConfig, EncoderPoller};
use radio_controls::VolumeKnob;
use si4703_tuner::{TunerConfig, TunerController};

// ---------------------------------------------------------------------------
// Boot block
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

type BlockingI2c = I2c<'static, I2C0, i2c::Blocking>;

/// Shared I2C0 bus. The tuner and the encoder access it through I2cDevice
/// wrappers; everything runs on one task so a no-op mutex suffices.
static I2C_BUS: StaticCell<Mutex<NoopRawMutex, RefCell<BlockingI2c>>> = StaticCell::new();

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Station tuned at power-up.
const TUNING_MHZ: f32 = 93.9;

/// Encoder polling period.
const POLL_PERIOD_MS: u64 = 100;

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("radio-hw-interface starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // I2C_SDA → GP20  (p.PIN_20)
    // I2C_SCL → GP21  (p.PIN_21)
    // FM_RST  → GP23  (p.PIN_23)
    // ———————————————————————————————————————————————————————————————————————

    let i2c = I2c::new_blocking(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        i2c::Config::default(),
    );
    let i2c_bus = I2C_BUS.init(Mutex::new(RefCell::new(i2c)));

    // —— Tuner ——————————————————————————————————————————————————————————————

    let reset_pin = Output::new(p.PIN_23, Level::High);
    let tuner_config = TunerConfig {
        tuning: Some(TUNING_MHZ),
        ..TunerConfig::default()
    };
    let mut tuner = TunerController::new(I2cDevice::new(i2c_bus), reset_pin, Delay, tuner_config);

    // About 1.2 s of settle delays. On failure the radio stays silent but the
    // loop still runs so a later volume change can be retried.
    match tuner.init() {
        Ok(()) => info!("Tuned to {} MHz", TUNING_MHZ),
        Err(e) => error!("Tuner init failed: {}", Debug2Format(&e)),
    }

    // —— Encoder ————————————————————————————————————————————————————————————

    let mut encoder = EncoderPoller::new(I2cDevice::new(i2c_bus), Delay, EncoderConfig::default())
        .with_listener(VolumeKnob::new(tuner));

    if let Err(e) = encoder.init() {
        warn!("Encoder button setup failed: {}", Debug2Format(&e));
    }

    // —— Poll loop ——————————————————————————————————————————————————————————

    let mut ticker = Ticker::every(Duration::from_millis(POLL_PERIOD_MS));
    loop {
        if let Err(e) = encoder.update() {
            error!("Encoder poll failed: {}", Debug2Format(&e));
        }
        ticker.next().await;
    }
}
