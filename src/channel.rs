use std::convert::TryFrom;

use crate::error::Ltc2309Error;

/// number of single-ended inputs of the LTC2309
pub const CHANNEL_COUNT: u8 = 8;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Channel {
    Ch0 = 0x0, Ch1, Ch2, Ch3, Ch4, Ch5, Ch6, Ch7
}

impl Channel {
    /// List of all channels to facilitate iteration and selection by integer indices
    pub const VALUES: [Channel; 8] = [
            Channel::Ch0, Channel::Ch1, Channel::Ch2, Channel::Ch3,
            Channel::Ch4, Channel::Ch5, Channel::Ch6, Channel::Ch7
            ];

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Try to convert an integer into a typed channel
impl TryFrom<u8> for Channel {
    type Error = Ltc2309Error;

    fn try_from(channel_index: u8) -> Result<Self, Self::Error> {
        if channel_index < CHANNEL_COUNT {
            Ok(Channel::VALUES[channel_index as usize])
        } else {
            Err(Ltc2309Error::ChannelOutOfRange(channel_index))
        }
    }
}

impl From<Channel> for u8 {
    fn from(channel: Channel) -> u8 {
        channel.index()
    }
}

/// How the converter interprets its input and therefore how the result code is scaled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PolarityMode {
    /// unsigned code, `0..vref`
    Unipolar,
    /// two's complement code, `-vref/2..vref/2`
    Bipolar,
}

impl Default for PolarityMode {
    fn default() -> Self {
        PolarityMode::Unipolar
    }
}
