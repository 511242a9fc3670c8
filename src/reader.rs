use std::time::Duration;

use ads1015::{Ads1015, Channel, Error};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::config::{Mode, ReaderSettings};

/// Delay provider backed by the tokio timer.
pub struct TokioDelay;

impl DelayNs for TokioDelay {
    async fn delay_ns(&mut self, ns: u32) {
        tokio::time::sleep(Duration::from_nanos(ns.into())).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        tokio::time::sleep(Duration::from_millis(ms.into())).await;
    }
}

/// Take readings as described by `settings`, handing each to `report`.
///
/// Returns the number of completed rounds once `settings.rounds` is reached.
/// Runs until the first bus error otherwise.
pub async fn run<I2C, D>(
    adc: &Ads1015<I2C, D>,
    settings: &ReaderSettings,
    mut report: impl FnMut(Channel, f32),
) -> Result<u64, Error<I2C::Error>>
where
    I2C: I2c,
    D: DelayNs,
{
    if let Mode::Streaming(channel) = settings.mode {
        adc.start_streaming(channel).await?;
    }

    let mut rounds = 0;

    loop {
        match &settings.mode {
            Mode::Streaming(channel) => report(*channel, adc.read_streaming().await?),
            Mode::SingleShot(channels) => {
                for &channel in channels {
                    report(channel, adc.read_single_shot(channel).await?);
                }
            }
        }

        rounds += 1;
        if settings.rounds.is_some_and(|limit| rounds >= limit) {
            return Ok(rounds);
        }

        tokio::time::sleep(settings.period).await;
    }
}
