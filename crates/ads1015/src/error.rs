use core::fmt::Debug;

/// A gain or data rate register code that the device does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field} specified: {value:#04x}")]
pub struct InvalidArgument {
    /// Which setting the code was given for.
    pub field: &'static str,
    /// The rejected code.
    pub value: u8,
}

/// Driver errors.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error<E: Debug> {
    /// Unknown gain or data rate code.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    /// A streaming read was requested before streaming was started, or
    /// after a single-shot read ended it.
    #[error("device not streaming")]
    InvalidState,
    /// I2C bus error, passed through unchanged.
    #[error("I2C transaction failed: {0:?}")]
    I2c(E),
}
