use core::fmt;
use core::str::FromStr;

/// Input multiplexer selection.
///
/// Discriminants are the MUX field of the first config byte, in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    /// AIN0 referenced to ground.
    A0 = 0x40,
    /// AIN1 referenced to ground.
    A1 = 0x50,
    /// AIN2 referenced to ground.
    A2 = 0x60,
    /// AIN3 referenced to ground.
    A3 = 0x70,
    /// AIN0 - AIN1.
    A0A1 = 0x00,
    /// AIN0 - AIN3.
    A0A3 = 0x10,
    /// AIN1 - AIN3.
    A1A3 = 0x20,
    /// AIN2 - AIN3.
    A2A3 = 0x30,
}

impl Channel {
    /// Iterate over all channels, single-ended inputs first.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::A0,
            Self::A1,
            Self::A2,
            Self::A3,
            Self::A0A1,
            Self::A0A3,
            Self::A1A3,
            Self::A2A3,
        ]
        .into_iter()
    }

    /// MUX bits for the config register.
    pub fn mux(self) -> u8 {
        self as u8
    }

    /// `true` for the four pin-pair inputs.
    pub fn is_differential(self) -> bool {
        self.mux() < Self::A0.mux()
    }

    fn name(self) -> &'static str {
        match self {
            Self::A0 => "a0",
            Self::A1 => "a1",
            Self::A2 => "a2",
            Self::A3 => "a3",
            Self::A0A1 => "a0-a1",
            Self::A0A3 => "a0-a3",
            Self::A1A3 => "a1-a3",
            Self::A2A3 => "a2-a3",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a channel name is not one of `a0`..`a3`, `a0-a1`, `a0-a3`,
/// `a1-a3` or `a2-a3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown channel, expected one of a0..a3, a0-a1, a0-a3, a1-a3, a2-a3")]
pub struct ParseChannelError;

impl FromStr for Channel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        Self::all()
            .find(|channel| channel.name().eq_ignore_ascii_case(wanted))
            .ok_or(ParseChannelError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mux_codes_are_distinct() {
        let mut seen = 0u8;
        for channel in Channel::all() {
            let bit = 1 << (channel.mux() >> 4);
            assert_eq!(seen & bit, 0, "{channel} shares a mux code");
            seen |= bit;
        }
        assert_eq!(seen, 0xFF);
    }

    #[test]
    fn differential_split() {
        let differential: Vec<_> = Channel::all().filter(|c| c.is_differential()).collect();
        assert_eq!(
            differential,
            [Channel::A0A1, Channel::A0A3, Channel::A1A3, Channel::A2A3]
        );
    }

    #[test]
    fn parse_names() {
        for channel in Channel::all() {
            assert_eq!(channel.to_string().parse(), Ok(channel));
        }
        assert_eq!(" A1-A3 ".parse(), Ok(Channel::A1A3));
        assert_eq!(
            "a1-a2".parse::<Channel>(),
            Err(ParseChannelError)
        );
    }
}
