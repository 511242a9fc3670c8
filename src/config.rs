use std::time::Duration;

use ads1015::{Channel, DataRate, Gain};
use anyhow::{anyhow, bail, Context};

/// Reader settings, read from `cfg.toml` at build time.
#[toml_cfg::toml_config]
pub struct Config {
    #[default(1)]
    i2c_bus: u8,

    #[default(0x48)]
    address: u8,

    #[default(6144)]
    gain_mv: u16,

    #[default(1600)]
    samples_per_second: u16,

    #[default("a0,a1,a2,a3")]
    channels: &'static str,

    #[default(false)]
    streaming: bool,

    #[default(500)]
    period_ms: u64,

    // 0 runs forever
    #[default(0)]
    samples: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// One conversion per channel per round.
    SingleShot(Vec<Channel>),
    Streaming(Channel),
}

/// Validated form of [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderSettings {
    pub bus: u8,
    pub address: u8,
    pub gain: Gain,
    pub data_rate: DataRate,
    pub mode: Mode,
    pub period: Duration,
    pub rounds: Option<u64>,
}

impl ReaderSettings {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        if config.address > 0x7F {
            bail!("address {:#04x} is not a 7-bit I2C address", config.address);
        }

        let gain = Gain::from_millivolts(config.gain_mv)
            .ok_or_else(|| anyhow!("gain_mv = {} is not a supported range", config.gain_mv))?;
        let data_rate = DataRate::from_samples_per_second(config.samples_per_second)
            .ok_or_else(|| {
                anyhow!(
                    "samples_per_second = {} is not a supported rate",
                    config.samples_per_second
                )
            })?;

        let channels = config
            .channels
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(|name| {
                name.parse::<Channel>()
                    .with_context(|| format!("parsing channel {:?}", name.trim()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let Some(&first) = channels.first() else {
            bail!("no channels configured");
        };

        let mode = if config.streaming {
            if channels.len() > 1 {
                log::warn!(
                    "streaming only {first}, ignoring {} other channel(s)",
                    channels.len() - 1
                );
            }
            Mode::Streaming(first)
        } else {
            Mode::SingleShot(channels)
        };

        Ok(Self {
            bus: config.i2c_bus,
            address: config.address,
            gain,
            data_rate,
            mode,
            period: Duration::from_millis(config.period_ms),
            rounds: (config.samples > 0).then_some(config.samples),
        })
    }
}
