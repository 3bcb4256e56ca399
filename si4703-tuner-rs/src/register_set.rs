//! Logical view of the tuner's 16-register bank and the band/spacing fields
//! decoded from it.

use core::ops::{Index, IndexMut};

use crate::registers::{
    READ_LEN, REGISTER_COUNT, REG_SYSCONFIG2, SYSCONFIG2_BAND_SHIFT, SYSCONFIG2_SELECTOR_MASK,
    SYSCONFIG2_SPACE_SHIFT, WIRE_OFFSET, WRITE_FIRST, WRITE_LAST, WRITE_LEN,
};

// ── RegisterSet ──────────────────────────────────────────────────────────

/// The full register bank, indexed by logical (datasheet) register number.
///
/// The chip transmits the bank rotated: logical register `i` sits at wire
/// position `(i + 6) % 16`, each word big-endian. [`from_wire`](Self::from_wire)
/// and [`to_wire`](Self::to_wire) are the only places that know this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterSet([u16; REGISTER_COUNT]);

impl RegisterSet {
    /// Wrap logical register values.
    pub const fn new(values: [u16; REGISTER_COUNT]) -> Self {
        Self(values)
    }

    /// Decode the 32 bytes returned by a full-bank read.
    pub fn from_wire(bytes: &[u8; READ_LEN]) -> Self {
        let mut values = [0u16; REGISTER_COUNT];
        for (logical, value) in values.iter_mut().enumerate() {
            let wire = (logical + WIRE_OFFSET) % REGISTER_COUNT;
            *value = u16::from_be_bytes([bytes[2 * wire], bytes[2 * wire + 1]]);
        }
        Self(values)
    }

    /// Encode the full bank in the order the chip transmits it.
    ///
    /// The chip never accepts this layout as a write; it exists so the read
    /// path can be exercised against a known bank.
    pub fn to_wire(&self) -> [u8; READ_LEN] {
        let mut bytes = [0u8; READ_LEN];
        for (logical, value) in self.0.iter().enumerate() {
            let wire = (logical + WIRE_OFFSET) % REGISTER_COUNT;
            bytes[2 * wire..2 * wire + 2].copy_from_slice(&value.to_be_bytes());
        }
        bytes
    }

    /// Encode registers 2..=7, the only ones a bus write may touch.
    pub fn write_payload(&self) -> [u8; WRITE_LEN] {
        let mut bytes = [0u8; WRITE_LEN];
        for (chunk, value) in bytes
            .chunks_exact_mut(2)
            .zip(&self.0[WRITE_FIRST..=WRITE_LAST])
        {
            chunk.copy_from_slice(&value.to_be_bytes());
        }
        bytes
    }

    /// Band selected in SYSCONFIG2, or `None` for the reserved selector.
    pub fn band(&self) -> Option<Band> {
        Band::from_selector(selector(self.0[REG_SYSCONFIG2], SYSCONFIG2_BAND_SHIFT))
    }

    /// Channel spacing selected in SYSCONFIG2, or `None` for the reserved selector.
    pub fn spacing(&self) -> Option<Spacing> {
        Spacing::from_selector(selector(self.0[REG_SYSCONFIG2], SYSCONFIG2_SPACE_SHIFT))
    }
}

impl Index<usize> for RegisterSet {
    type Output = u16;

    fn index(&self, register: usize) -> &u16 {
        &self.0[register]
    }
}

impl IndexMut<usize> for RegisterSet {
    fn index_mut(&mut self, register: usize) -> &mut u16 {
        &mut self.0[register]
    }
}

fn selector(value: u16, shift: u16) -> u16 {
    (value >> shift) & SYSCONFIG2_SELECTOR_MASK
}

// ── Band ─────────────────────────────────────────────────────────────────

/// FM band limits selected by SYSCONFIG2 bits 7:6.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    /// 87.5–107.0 MHz.
    UsEurope,
    /// 76.0–108.0 MHz.
    JapanWide,
    /// 76.0–90.0 MHz.
    Japan,
}

impl Band {
    fn from_selector(selector: u16) -> Option<Self> {
        match selector {
            0 => Some(Band::UsEurope),
            1 => Some(Band::JapanWide),
            2 => Some(Band::Japan),
            _ => None,
        }
    }

    /// Lower band edge in kHz.
    pub const fn lower_khz(self) -> u32 {
        match self {
            Band::UsEurope => 87_500,
            Band::JapanWide | Band::Japan => 76_000,
        }
    }

    /// Upper band edge in kHz.
    pub const fn upper_khz(self) -> u32 {
        match self {
            Band::UsEurope => 107_000,
            Band::JapanWide => 108_000,
            Band::Japan => 90_000,
        }
    }
}

// ── Spacing ──────────────────────────────────────────────────────────────

/// Channel spacing selected by SYSCONFIG2 bits 5:4.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Spacing {
    Khz50,
    Khz100,
    Khz200,
}

impl Spacing {
    fn from_selector(selector: u16) -> Option<Self> {
        match selector {
            0 => Some(Spacing::Khz50),
            1 => Some(Spacing::Khz100),
            2 => Some(Spacing::Khz200),
            _ => None,
        }
    }

    /// Spacing in kHz.
    pub const fn khz(self) -> u32 {
        match self {
            Spacing::Khz50 => 50,
            Spacing::Khz100 => 100,
            Spacing::Khz200 => 200,
        }
    }
}

/// Channel index for `freq_mhz`, rounded to the nearest channel.
///
/// The frequency is rounded to whole kHz first and exact half-channel ties
/// round up, so 87.55 MHz on a 100 kHz grid gives channel 1, not 0.
///
/// Returns `None` when the frequency lies outside the band by more than half
/// a channel, or is not a finite, non-negative number.
pub fn channel_index(freq_mhz: f32, band: Band, spacing: Spacing) -> Option<u16> {
    let khz = freq_mhz * 1000.0;
    let half = spacing.khz() / 2;
    let lowest = band.lower_khz().saturating_sub(half) as f32;
    let highest = (band.upper_khz() + half) as f32;
    if !(khz >= lowest - 0.5 && khz < highest + 0.5) {
        return None;
    }
    // Round to whole kHz first so 101.1 MHz does not become 101_099.99.
    let khz = (khz + 0.5) as u32;

    if khz.saturating_add(half) < band.lower_khz() || khz > band.upper_khz() + half {
        return None;
    }

    let offset = khz.saturating_sub(band.lower_khz());
    u16::try_from((offset + half) / spacing.khz()).ok()
}
