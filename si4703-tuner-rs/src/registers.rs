//! Register indices, bit masks, and timing constants for the Si4702/Si4703.
//!
//! All register indices are *logical* (datasheet numbering). The chip sends
//! its bank starting at register `0x0A`, so the wire order is rotated by
//! [`WIRE_OFFSET`]; only [`RegisterSet`](crate::RegisterSet) deals with that.

// ---------------------------------------------------------------------------
// Bank geometry
// ---------------------------------------------------------------------------

/// Number of 16-bit registers in the bank.
pub const REGISTER_COUNT: usize = 16;

/// Logical register `i` travels at wire position `(i + WIRE_OFFSET) % 16`.
pub const WIRE_OFFSET: usize = 6;

/// Bytes returned by a full-bank read.
pub const READ_LEN: usize = REGISTER_COUNT * 2;

/// First register written by a bus write. The chip auto-increments from here.
pub const WRITE_FIRST: usize = REG_POWERCFG;

/// Last register written by a bus write (inclusive).
pub const WRITE_LAST: usize = REG_TEST1;

/// Bytes sent by a bus write (registers 2..=7).
pub const WRITE_LEN: usize = (WRITE_LAST - WRITE_FIRST + 1) * 2;

// ---------------------------------------------------------------------------
// Logical register indices
// ---------------------------------------------------------------------------

pub const REG_POWERCFG: usize = 0x02;
pub const REG_CHANNEL: usize = 0x03;
pub const REG_SYSCONFIG1: usize = 0x04;
pub const REG_SYSCONFIG2: usize = 0x05;
pub const REG_SYSCONFIG3: usize = 0x06;
pub const REG_TEST1: usize = 0x07;

// ---------------------------------------------------------------------------
// POWERCFG (0x02)
// ---------------------------------------------------------------------------

/// Power-up enable bit.
pub const POWERCFG_ENABLE: u16 = 0x0001;

/// Power-down pattern: DISABLE together with ENABLE.
pub const POWERCFG_POWER_DOWN: u16 = 0x0041;

/// DSMUTE | DMUTE. Setting both bits *disables* soft mute and hard mute.
pub const POWERCFG_MUTE_DISABLE: u16 = 0xC000;

// ---------------------------------------------------------------------------
// CHANNEL (0x03)
// ---------------------------------------------------------------------------

/// "Tune now" command bit.
pub const CHANNEL_TUNE: u16 = 0x8000;

/// Channel index field.
pub const CHANNEL_MASK: u16 = 0x03FF;

// ---------------------------------------------------------------------------
// SYSCONFIG1 (0x04)
// ---------------------------------------------------------------------------

/// RDS enable | 50 µs de-emphasis.
pub const SYSCONFIG1_RDS_DE: u16 = 0x1800;

/// Mask that clears the BLNDADJ field (bits 7:6).
pub const SYSCONFIG1_BLNDADJ_CLEAR: u16 = 0xFF3F;

// ---------------------------------------------------------------------------
// SYSCONFIG2 (0x05)
// ---------------------------------------------------------------------------

/// Seek threshold 12, band 0 (US/Europe), spacing selector 1 (100 kHz), volume 0.
pub const SYSCONFIG2_POWER_UP: u16 = 0x0C10;

pub const SYSCONFIG2_BAND_SHIFT: u16 = 6;
pub const SYSCONFIG2_SPACE_SHIFT: u16 = 4;

/// Two-bit selector field mask, applied after shifting.
pub const SYSCONFIG2_SELECTOR_MASK: u16 = 0x0003;

/// Volume nybble.
pub const SYSCONFIG2_VOLUME_MASK: u16 = 0x000F;

// ---------------------------------------------------------------------------
// SYSCONFIG3 (0x06)
// ---------------------------------------------------------------------------

/// Bits preserved across power-up (high byte).
pub const SYSCONFIG3_KEEP_MASK: u16 = 0xFF00;

/// RDSPRF | seek SNR threshold 4 | seek impulse count 15.
pub const SYSCONFIG3_POWER_UP: u16 = 0x024F;

// ---------------------------------------------------------------------------
// TEST1 (0x07)
// ---------------------------------------------------------------------------

/// Crystal oscillator enable.
pub const TEST1_XOSCEN: u16 = 0x8000;

// ---------------------------------------------------------------------------
// Settle delays (milliseconds). Hardware-mandated, not tunable.
// ---------------------------------------------------------------------------

/// Reset line held high after power-on glitches.
pub const RESET_SETTLE_MS: u32 = 500;

/// Reset pulse width. SDIO must be low while reset rises to select 2-wire mode.
pub const RESET_PULSE_MS: u32 = 1;

/// Hold time after reset is released.
pub const RESET_RECOVERY_MS: u32 = 5;

/// Crystal oscillator stabilisation time.
pub const OSCILLATOR_SETTLE_MS: u32 = 500;

/// Required after any power-state change.
pub const POWER_SETTLE_MS: u32 = 110;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default 7-bit I2C address of the Si4702/Si4703.
pub const DEFAULT_ADDRESS: u8 = 0x10;

/// Largest value of the 4-bit volume field.
pub const MAX_VOLUME: u8 = 15;
