//! Sample depth and channel configuration
//!
//! Values match `ALLEGRO_AUDIO_DEPTH` / `ALLEGRO_CHANNEL_CONF` bit for bit; the
//! wrappers only pass them through.

use al5_core::AllegroError;
use serde::{Deserialize, Serialize};

const DEPTH_UNSIGNED: u32 = 0x08;

/// Per-sample storage format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Depth {
    Int8 = 0x00,
    Int16 = 0x01,
    Int24 = 0x02,
    Float32 = 0x03,
    Uint8 = 0x08,
    Uint16 = 0x09,
    Uint24 = 0x0A,
}

impl Depth {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Bytes occupied by one sample of one channel.
    pub fn sample_size(self) -> usize {
        match self {
            Depth::Int8 | Depth::Uint8 => 1,
            Depth::Int16 | Depth::Uint16 => 2,
            Depth::Int24 | Depth::Uint24 => 3,
            Depth::Float32 => 4,
        }
    }

    pub fn is_unsigned(self) -> bool {
        self.as_u32() & DEPTH_UNSIGNED != 0
    }
}

impl Default for Depth {
    fn default() -> Self {
        Self::Int16
    }
}

impl TryFrom<u32> for Depth {
    type Error = AllegroError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            0x00 => Depth::Int8,
            0x01 => Depth::Int16,
            0x02 => Depth::Int24,
            0x03 => Depth::Float32,
            0x08 => Depth::Uint8,
            0x09 => Depth::Uint16,
            0x0A => Depth::Uint24,
            _ => {
                return Err(AllegroError::UnrecognizedValue {
                    kind: "audio depth",
                    value,
                });
            }
        })
    }
}

/// Speaker layout. The high nibble counts full-range channels, the low nibble
/// counts low-frequency channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ChannelConf {
    One = 0x10,
    Two = 0x20,
    Three = 0x30,
    Four = 0x40,
    FivePointOne = 0x51,
    SixPointOne = 0x61,
    SevenPointOne = 0x71,
}

impl ChannelConf {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Total number of channels, subwoofer included.
    pub fn channel_count(self) -> usize {
        let v = self.as_u32();
        ((v >> 4) + (v & 0xF)) as usize
    }
}

impl Default for ChannelConf {
    fn default() -> Self {
        Self::Two
    }
}

impl TryFrom<u32> for ChannelConf {
    type Error = AllegroError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            0x10 => ChannelConf::One,
            0x20 => ChannelConf::Two,
            0x30 => ChannelConf::Three,
            0x40 => ChannelConf::Four,
            0x51 => ChannelConf::FivePointOne,
            0x61 => ChannelConf::SixPointOne,
            0x71 => ChannelConf::SevenPointOne,
            _ => {
                return Err(AllegroError::UnrecognizedValue {
                    kind: "channel configuration",
                    value,
                });
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_counts() {
        assert_eq!(ChannelConf::One.channel_count(), 1);
        assert_eq!(ChannelConf::Two.channel_count(), 2);
        assert_eq!(ChannelConf::FivePointOne.channel_count(), 6);
        assert_eq!(ChannelConf::SevenPointOne.channel_count(), 8);
    }

    #[test]
    fn test_sample_sizes() {
        assert_eq!(Depth::Uint8.sample_size(), 1);
        assert_eq!(Depth::Int24.sample_size(), 3);
        assert_eq!(Depth::Float32.sample_size(), 4);
        assert!(Depth::Uint16.is_unsigned());
        assert!(!Depth::Float32.is_unsigned());
    }

    #[test]
    fn test_raw_values_convert_back() {
        for depth in [Depth::Int8, Depth::Int16, Depth::Float32, Depth::Uint24] {
            assert_eq!(Depth::try_from(depth.as_u32()), Ok(depth));
        }
        assert_eq!(ChannelConf::try_from(0x51), Ok(ChannelConf::FivePointOne));
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert_eq!(
            Depth::try_from(0x04),
            Err(AllegroError::UnrecognizedValue {
                kind: "audio depth",
                value: 0x04
            })
        );
        assert!(ChannelConf::try_from(0x22).is_err());
    }
}
