//! Provides an async driver for the Texas Instruments ADS1015 12-bit I2C ADC
//! via the `embedded-hal-async` ecosystem.
//!
//! ```ignore
//! let mut adc = Ads1015::new(i2c, delay);
//! adc.configure(Some(Gain::V4_096), Some(DataRate::Sps250));
//!
//! let volts = adc.read_single_shot(Channel::A0).await?;
//!
//! adc.start_streaming(Channel::A0A1).await?;
//! let volts = adc.read_streaming().await?;
//! ```

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod channel;
pub mod config;
mod device;
pub mod error;
pub mod register;

pub use channel::{Channel, ParseChannelError};
pub use config::{Config, DataRate, Gain, Settings};
pub use device::{Ads1015, DEFAULT_ADDRESS};
pub use error::{Error, InvalidArgument};

/// Signed 12-bit count held in the two conversion register bytes.
pub fn raw_count(raw: [u8; 2]) -> i16 {
    let count = ((raw[0] as i16) << 4) | ((raw[1] >> 4) as i16);

    if count > 2047 {
        count - 4096
    } else {
        count
    }
}

/// Convert the conversion register bytes to volts for a gain of `full_scale`
/// volts.
///
/// Positive counts are scaled by 2047 and the rest by 2048, so both ends of
/// the code range land on exactly `±full_scale`.
pub fn decode(raw: [u8; 2], full_scale: f32) -> f32 {
    let count = raw_count(raw) as f32;
    let fraction = if count > 0.0 {
        count / 2047.0
    } else {
        count / 2048.0
    };

    fraction * full_scale
}
