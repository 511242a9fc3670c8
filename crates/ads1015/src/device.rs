use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use log::{debug, info};

use crate::channel::Channel;
use crate::config::{Config, DataRate, Gain, Settings};
use crate::decode;
use crate::error::Error;
use crate::register::{config_word, Mode, Reg};

/// Address with the ADDR pin tied to ground.
pub const DEFAULT_ADDRESS: u8 = 0x48;

/// Bus handle plus the state that only changes as a result of bus writes.
struct Bus<I2C> {
    i2c: I2C,
    streaming: Option<Channel>,
}

impl<I2C: I2c> Bus<I2C> {
    async fn write_register(
        &mut self,
        address: u8,
        reg: Reg,
        data: [u8; 2],
    ) -> Result<(), I2C::Error> {
        debug!("{address:#04x}: write {reg:?} {data:02x?}");
        self.i2c.write(address, &[reg as u8, data[0], data[1]]).await
    }

    async fn read_register(&mut self, address: u8, reg: Reg) -> Result<[u8; 2], I2C::Error> {
        let mut buffer = [0; 2];
        self.i2c.write_read(address, &[reg as u8], &mut buffer).await?;
        debug!("{address:#04x}: read {reg:?} {buffer:02x?}");
        Ok(buffer)
    }
}

/// ADS1015 driver
///
/// Reads take `&self`, so one driver can be shared between tasks. Each
/// single-shot read holds the device for its whole write, wait, read
/// sequence; streaming reads only hold it for the one transfer.
pub struct Ads1015<I2C, D> {
    address: u8,
    settings: Settings,
    bus: Mutex<CriticalSectionRawMutex, Bus<I2C>>,
    // Locking the delay provider is what serializes single-shot reads.
    delay: Mutex<CriticalSectionRawMutex, D>,
}

impl<I2C: I2c, D: DelayNs> Ads1015<I2C, D> {
    /// Creates a new driver for a device at [`DEFAULT_ADDRESS`].
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, DEFAULT_ADDRESS)
    }

    /// Creates a new driver for a device at `address`.
    ///
    /// Nothing is written to the device until the first read is requested.
    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            address,
            settings: Settings::default(),
            bus: Mutex::new(Bus {
                i2c,
                streaming: None,
            }),
            delay: Mutex::new(delay),
        }
    }

    /// 7-bit I2C address of the device.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Gain and data rate used for the next conversion request.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Snapshot of the current configuration.
    ///
    /// Waits for any in-flight bus transfer to finish so the streaming state
    /// is consistent with what was last written.
    pub async fn config(&self) -> Config {
        let streaming = self.bus.lock().await.streaming;
        Config::new(self.settings, streaming)
    }

    /// Change gain and/or data rate. `None` keeps the current value.
    ///
    /// Takes effect with the next conversion request; a running stream keeps
    /// the settings it was started with on the device, but is decoded with
    /// the new gain.
    pub fn configure(&mut self, gain: Option<Gain>, data_rate: Option<DataRate>) {
        self.settings.update(gain, data_rate);
        debug!("settings now {:?}", self.settings);
    }

    /// Change gain and/or data rate from raw register codes.
    ///
    /// Fails with [`Error::InvalidArgument`] on an unknown code, in which case
    /// nothing is changed.
    pub fn init(
        &mut self,
        gain: Option<u8>,
        data_rate: Option<u8>,
    ) -> Result<(), Error<I2C::Error>> {
        self.settings.update_codes(gain, data_rate)?;
        debug!("settings now {:?}", self.settings);
        Ok(())
    }

    /// Put the device in continuous conversion mode on `channel`.
    pub async fn start_streaming(&self, channel: Channel) -> Result<(), Error<I2C::Error>> {
        let Settings { gain, data_rate } = self.settings;
        let word = config_word(channel, gain, data_rate, Mode::Continuous);

        let mut bus = self.bus.lock().await;
        bus.write_register(self.address, Reg::Config, word)
            .await
            .map_err(Error::I2c)?;
        bus.streaming = Some(channel);

        info!("{:#04x}: streaming {channel}", self.address);
        Ok(())
    }

    /// Read the most recently completed conversion of the running stream.
    ///
    /// This does not trigger a conversion, so two quick calls may return the
    /// same sample.
    pub async fn read_streaming(&self) -> Result<f32, Error<I2C::Error>> {
        let gain = self.settings.gain;

        let mut bus = self.bus.lock().await;
        if bus.streaming.is_none() {
            return Err(Error::InvalidState);
        }

        let raw = bus
            .read_register(self.address, Reg::Conversion)
            .await
            .map_err(Error::I2c)?;

        Ok(decode(raw, gain.volts()))
    }

    /// Run one conversion on `channel` and return it in volts.
    ///
    /// Ends any running stream. The result is read after a fixed wait
    /// derived from the data rate; the device's ready flag is not polled.
    pub async fn read_single_shot(&self, channel: Channel) -> Result<f32, Error<I2C::Error>> {
        let Settings { gain, data_rate } = self.settings;
        let word = config_word(channel, gain, data_rate, Mode::SingleShot);

        let mut delay = self.delay.lock().await;

        {
            let mut bus = self.bus.lock().await;
            bus.write_register(self.address, Reg::Config, word)
                .await
                .map_err(Error::I2c)?;

            if let Some(previous) = bus.streaming.take() {
                info!("{:#04x}: single-shot read ended stream on {previous}", self.address);
            }
        }

        delay.delay_ms(data_rate.wait_millis()).await;

        let raw = self
            .bus
            .lock()
            .await
            .read_register(self.address, Reg::Conversion)
            .await
            .map_err(Error::I2c)?;

        Ok(decode(raw, gain.volts()))
    }

    /// Give back the I2C bus and delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.bus.into_inner().i2c, self.delay.into_inner())
    }
}
