//! Log voltages from an ADS1015 on the Raspberry Pi I2C bus.

#[cfg_attr(not(feature = "raspberry_pi"), allow(dead_code))]
mod config;
#[cfg_attr(not(feature = "raspberry_pi"), allow(dead_code))]
mod reader;

#[cfg(feature = "raspberry_pi")]
mod raspberry_pi;

use log::info;

use crate::config::{ReaderSettings, CONFIG};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = ReaderSettings::from_config(&CONFIG)?;
    info!("{settings:?}");

    read(settings).await
}

#[cfg(feature = "raspberry_pi")]
async fn read(settings: ReaderSettings) -> Result<(), anyhow::Error> {
    use anyhow::Context;

    use ads1015::Ads1015;
    use raspberry_pi::PiI2c;
    use reader::TokioDelay;

    let i2c = PiI2c::open(settings.bus)
        .with_context(|| format!("opening I2C bus {}", settings.bus))?;

    let mut adc = Ads1015::with_address(i2c, TokioDelay, settings.address);
    adc.configure(Some(settings.gain), Some(settings.data_rate));

    let rounds = reader::run(&adc, &settings, |channel, volts| {
        info!("{channel}: {volts:.4} V");
    })
    .await?;

    info!("finished after {rounds} rounds");
    Ok(())
}

#[cfg(not(feature = "raspberry_pi"))]
async fn read(_settings: ReaderSettings) -> Result<(), anyhow::Error> {
    anyhow::bail!("built without the `raspberry_pi` feature, no I2C bus to read from")
}
