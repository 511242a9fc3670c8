//! Register map of the ADS1015.
//!
//! Bit values are given in place, i.e. already shifted to where they sit in
//! the byte they belong to.

use crate::channel::Channel;
use crate::config::{DataRate, Gain};

/// Register address pointer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Reg {
    /// Last completed conversion, 12 bits left-justified.
    Conversion = 0x00,
    /// Conversion request and settings.
    Config = 0x01,
    /// Comparator low threshold, unused by the driver.
    LoThresh = 0x02,
    /// Comparator high threshold, unused by the driver.
    HiThresh = 0x03,
}

/// Bits of the first (most significant) config byte.
#[allow(missing_docs)]
pub mod cfg0 {
    /// Begin a single conversion when written.
    pub const OS_START: u8 = 0x80;
    pub const OS_NOP: u8 = 0x00;

    pub const MUX_MASK: u8 = 0x70;
    pub const PGA_MASK: u8 = 0x0E;

    pub const MODE_CONTINUOUS: u8 = 0x00;
    pub const MODE_SINGLE: u8 = 0x01;
}

/// Bits of the second (least significant) config byte.
#[allow(missing_docs)]
pub mod cfg1 {
    pub const DR_MASK: u8 = 0xE0;

    pub const COMP_MODE_TRADITIONAL: u8 = 0x00;
    pub const COMP_MODE_WINDOW: u8 = 0x10;

    pub const COMP_POL_LOW: u8 = 0x00;
    pub const COMP_POL_HIGH: u8 = 0x08;

    pub const COMP_LAT_OFF: u8 = 0x00;
    pub const COMP_LAT_ON: u8 = 0x04;

    pub const COMP_QUE_1: u8 = 0x00;
    pub const COMP_QUE_2: u8 = 0x01;
    pub const COMP_QUE_4: u8 = 0x02;
    /// Comparator disabled, ALERT/RDY pin high impedance.
    pub const COMP_QUE_DISABLE: u8 = 0x03;
}

/// Operating mode written alongside every conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Mode {
    Continuous,
    SingleShot,
}

/// Build the two bytes written to [`Reg::Config`] to start a conversion.
///
/// The comparator is always left disabled.
pub fn config_word(channel: Channel, gain: Gain, data_rate: DataRate, mode: Mode) -> [u8; 2] {
    let mode = match mode {
        Mode::Continuous => cfg0::MODE_CONTINUOUS,
        Mode::SingleShot => cfg0::MODE_SINGLE,
    };

    [
        cfg0::OS_START | channel.mux() | gain.code() | mode,
        data_rate.code() | cfg1::COMP_QUE_DISABLE,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_shot_word_defaults() {
        let word = config_word(Channel::A0, Gain::V6_144, DataRate::Sps1600, Mode::SingleShot);
        assert_eq!(word, [0xC1, 0x83]);
    }

    #[test]
    fn continuous_word_clears_mode_bit() {
        let word = config_word(
            Channel::A2A3,
            Gain::V0_256,
            DataRate::Sps128,
            Mode::Continuous,
        );
        assert_eq!(word, [0x80 | 0x30 | 0x0A, 0x03]);
        assert_eq!(word[0] & cfg0::MODE_SINGLE, 0);
    }

    #[test]
    fn fields_stay_inside_their_masks() {
        for channel in Channel::all() {
            for gain in Gain::all() {
                let [b0, _] = config_word(channel, gain, DataRate::Sps3300, Mode::SingleShot);
                assert_eq!(b0 & cfg0::MUX_MASK, channel.mux());
                assert_eq!(b0 & cfg0::PGA_MASK, gain.code());
            }
        }

        for rate in DataRate::all() {
            let [_, b1] = config_word(Channel::A1, Gain::V2_048, rate, Mode::SingleShot);
            assert_eq!(b1 & cfg1::DR_MASK, rate.code());
            assert_eq!(b1 & !cfg1::DR_MASK, cfg1::COMP_QUE_DISABLE);
        }
    }
}
