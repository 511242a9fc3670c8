use embedded_hal_async::i2c::{ErrorType, I2c, Operation};
use rppal::i2c::{Error, I2c as PiBus};

/// Raspberry Pi I2C bus exposed through the async `embedded-hal` traits.
///
/// Transfers still block the calling thread; a register access at the
/// default 100 kHz bus speed is well under a millisecond.
pub struct PiI2c(PiBus);

impl PiI2c {
    /// Open `/dev/i2c-<bus>`.
    pub fn open(bus: u8) -> Result<Self, Error> {
        PiBus::with_bus(bus).map(Self)
    }
}

impl ErrorType for PiI2c {
    type Error = Error;
}

impl I2c for PiI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        embedded_hal::i2c::I2c::transaction(&mut self.0, address, operations)
    }
}
