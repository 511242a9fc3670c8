//! Gain and data rate selection, plus the values derived from them.

use crate::channel::Channel;
use crate::error::InvalidArgument;

/// Programmable gain amplifier setting, named by its full-scale range.
///
/// Discriminants are the PGA field of the first config byte, in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Gain {
    /// ±6.144 V
    #[default]
    V6_144 = 0x00,
    /// ±4.096 V
    V4_096 = 0x02,
    /// ±2.048 V
    V2_048 = 0x04,
    /// ±1.024 V
    V1_024 = 0x06,
    /// ±0.512 V
    V0_512 = 0x08,
    /// ±0.256 V
    V0_256 = 0x0A,
}

impl Gain {
    /// Iterate over all gains, widest range first.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::V6_144,
            Self::V4_096,
            Self::V2_048,
            Self::V1_024,
            Self::V0_512,
            Self::V0_256,
        ]
        .into_iter()
    }

    /// PGA bits for the config register.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Full-scale range in volts.
    pub fn volts(self) -> f32 {
        match self {
            Self::V6_144 => 6.144,
            Self::V4_096 => 4.096,
            Self::V2_048 => 2.048,
            Self::V1_024 => 1.024,
            Self::V0_512 => 0.512,
            Self::V0_256 => 0.256,
        }
    }

    /// Full-scale range in millivolts.
    pub fn millivolts(self) -> u16 {
        match self {
            Self::V6_144 => 6144,
            Self::V4_096 => 4096,
            Self::V2_048 => 2048,
            Self::V1_024 => 1024,
            Self::V0_512 => 512,
            Self::V0_256 => 256,
        }
    }

    /// Look a gain up by its full-scale range in millivolts, e.g. `4096`.
    pub fn from_millivolts(mv: u16) -> Option<Self> {
        Self::all().find(|gain| gain.millivolts() == mv)
    }
}

impl TryFrom<u8> for Gain {
    type Error = InvalidArgument;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::all()
            .find(|gain| gain.code() == code)
            .ok_or(InvalidArgument {
                field: "gain",
                value: code,
            })
    }
}

/// Conversion rate.
///
/// Discriminants are the DR field of the second config byte, in place.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DataRate {
    Sps128 = 0x00,
    Sps250 = 0x20,
    Sps490 = 0x40,
    Sps920 = 0x60,
    #[default]
    Sps1600 = 0x80,
    Sps2400 = 0xA0,
    Sps3300 = 0xC0,
}

impl DataRate {
    /// Iterate over all rates, slowest first.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::Sps128,
            Self::Sps250,
            Self::Sps490,
            Self::Sps920,
            Self::Sps1600,
            Self::Sps2400,
            Self::Sps3300,
        ]
        .into_iter()
    }

    /// DR bits for the config register.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Conversions per second.
    pub fn samples_per_second(self) -> u16 {
        match self {
            Self::Sps128 => 128,
            Self::Sps250 => 250,
            Self::Sps490 => 490,
            Self::Sps920 => 920,
            Self::Sps1600 => 1600,
            Self::Sps2400 => 2400,
            Self::Sps3300 => 3300,
        }
    }

    /// Milliseconds to wait between starting a single-shot conversion and
    /// reading its result.
    pub fn wait_millis(self) -> u32 {
        match self {
            Self::Sps128 => 8,
            Self::Sps250 => 5,
            Self::Sps490 | Self::Sps920 => 2,
            Self::Sps1600 | Self::Sps2400 | Self::Sps3300 => 1,
        }
    }

    /// Look a rate up by its conversions per second, e.g. `1600`.
    pub fn from_samples_per_second(sps: u16) -> Option<Self> {
        Self::all().find(|rate| rate.samples_per_second() == sps)
    }
}

impl TryFrom<u8> for DataRate {
    type Error = InvalidArgument;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::all()
            .find(|rate| rate.code() == code)
            .ok_or(InvalidArgument {
                field: "samples per second",
                value: code,
            })
    }
}

/// Settings that shape every conversion request.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub gain: Gain,
    pub data_rate: DataRate,
}

impl Settings {
    /// Replace the given fields, leaving `None` ones untouched.
    pub fn update(&mut self, gain: Option<Gain>, data_rate: Option<DataRate>) {
        if let Some(gain) = gain {
            self.gain = gain;
        }
        if let Some(data_rate) = data_rate {
            self.data_rate = data_rate;
        }
    }

    /// Like [`Settings::update`], but from raw register codes.
    ///
    /// Both codes are checked before anything is stored, so a bad data rate
    /// does not leave a new gain behind.
    pub fn update_codes(
        &mut self,
        gain: Option<u8>,
        data_rate: Option<u8>,
    ) -> Result<(), InvalidArgument> {
        let gain = gain.map(Gain::try_from).transpose()?;
        let data_rate = data_rate.map(DataRate::try_from).transpose()?;
        self.update(gain, data_rate);
        Ok(())
    }
}

/// Snapshot of the device configuration.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub gain: Gain,
    /// Full-scale range of `gain`, in volts.
    pub gain_volts: f32,
    pub data_rate: DataRate,
    /// Single-shot wait for `data_rate`.
    pub wait_millis: u32,
    /// Channel being streamed, `None` when idle or after a single-shot read.
    pub streaming: Option<Channel>,
}

impl Config {
    pub(crate) fn new(settings: Settings, streaming: Option<Channel>) -> Self {
        Self {
            gain: settings.gain,
            gain_volts: settings.gain.volts(),
            data_rate: settings.data_rate,
            wait_millis: settings.data_rate.wait_millis(),
            streaming,
        }
    }
}
