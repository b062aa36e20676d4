use std::path::PathBuf;

use log::{debug, trace, warn};

use crate::bus::{Bus, I2cBus};
use crate::channel::{PolarityMode, CHANNEL_COUNT};
use crate::command::{self, CommandByte};
use crate::conversion;
use crate::error::{Ltc2309Error, TransferError};

/// default i2c address of the LTC2309 (AD1 = AD0 = low)
pub const DEFAULT_ADDRESS: u16 = 0x28;

/// default reference voltage in volts
pub const DEFAULT_VREF: f32 = 4.096;

pub const DEFAULT_BUS_PATH: &str = "/dev/i2c-1";

/// number of bytes the converter returns per conversion
const FRAME_BYTE_COUNT: usize = 2;

/// What to report when a channel is read several times in a row.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Readout {
    /// keep only the last conversion, earlier ones just let the input settle
    Last,
    /// mean of all conversions
    Average,
}

impl Default for Readout {
    fn default() -> Self {
        Readout::Last
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bus_path: PathBuf,
    pub address: u16,
    pub vref: f32,
    /// channels visited by a sweep, starting at 0
    pub channel_count: u8,
    pub readout: Readout,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bus_path: PathBuf::from(DEFAULT_BUS_PATH),
            address: DEFAULT_ADDRESS,
            vref: DEFAULT_VREF,
            channel_count: CHANNEL_COUNT,
            readout: Readout::Last,
        }
    }
}

/// One converted channel of a sweep.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reading {
    pub channel: u8,
    pub voltage: f32,
}

/// Exclusive owner of the bus for one LTC2309.
pub struct SamplingSession<B: Bus> {
    bus: B,
    config: Config,
}

impl SamplingSession<I2cBus> {
    /// Opens the bus named in `config` and binds it to the device address.
    pub fn open(config: Config) -> Result<Self, Ltc2309Error> {
        let bus = I2cBus::open(&config.bus_path, config.address)?;
        Ok(SamplingSession::new(bus, config))
    }
}

impl<B: Bus> SamplingSession<B> {
    /// Wraps an already bound transport.
    pub fn new(bus: B, config: Config) -> Self {
        SamplingSession { bus, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Ends the session and hands ownership of the transport back to the caller.
    pub fn into_inner(self) -> B {
        self.bus
    }

    /// Convert `channel` `repeat_count` times (at least once) and report according to
    /// the configured [`Readout`]. Channel indices wrap modulo 8; pass
    /// `Channel::try_from(index)?.into()` to reject them instead.
    pub fn sample_channel(
        &mut self,
        channel: u8,
        mode: PolarityMode,
        repeat_count: u32,
    ) -> Result<f32, Ltc2309Error> {
        let command = self.write_command(channel, mode)?;
        let mode = command.mode();
        let repeat_count = repeat_count.max(1);

        let mut voltage = 0.0;
        let mut sum = 0.0;
        for _ in 0..repeat_count {
            let code = self.read_result()?;
            voltage = conversion::to_voltage(code, self.config.vref, mode);
            sum += voltage;
        }

        match self.config.readout {
            Readout::Last => Ok(voltage),
            Readout::Average => Ok(sum / repeat_count as f32),
        }
    }

    /// Run one conversion of `channel` and return the raw 12-bit code.
    pub fn read_code(&mut self, channel: u8, mode: PolarityMode) -> Result<u16, Ltc2309Error> {
        self.write_command(channel, mode)?;
        self.read_result()
    }

    /// Sample channels `0..channel_count` in order, handing each reading to `report`
    /// as soon as it is taken. The first failing channel ends the sweep.
    pub fn sweep<F>(&mut self, mode: PolarityMode, repeat_count: u32, mut report: F) -> Result<(), Ltc2309Error>
    where
        F: FnMut(Reading),
    {
        for channel in 0..self.config.channel_count {
            let voltage = self.sample_channel(channel, mode, repeat_count)?;
            debug!("channel {}: {} V", channel, voltage);
            report(Reading { channel, voltage });
        }
        Ok(())
    }

    /// Like [`sweep`](Self::sweep) but keeps going past failed channels. Readings go to
    /// `report` as they are taken; the failed channels are returned in order.
    pub fn sweep_partial<F>(&mut self, mode: PolarityMode, repeat_count: u32, mut report: F) -> Vec<(u8, Ltc2309Error)>
    where
        F: FnMut(Reading),
    {
        let mut failures = Vec::new();
        for channel in 0..self.config.channel_count {
            match self.sample_channel(channel, mode, repeat_count) {
                Ok(voltage) => report(Reading { channel, voltage }),
                Err(err) => {
                    warn!("channel {} failed: {}", channel, err);
                    failures.push((channel, err));
                }
            }
        }
        failures
    }

    fn write_command(&mut self, channel: u8, mode: PolarityMode) -> Result<CommandByte, Ltc2309Error> {
        let command = command::encode(channel, mode);
        debug!("channel {}: command 0x{:02x}", channel, command.bits());

        let sent = self.bus
            .send(&[command.bits()])
            .map_err(|err| Ltc2309Error::WriteFailed(err.into()))?;
        if sent != 1 {
            return Err(Ltc2309Error::WriteFailed(TransferError::Short { transferred: sent, expected: 1 }));
        }
        Ok(command)
    }

    fn read_result(&mut self) -> Result<u16, Ltc2309Error> {
        let mut frame = [0u8; FRAME_BYTE_COUNT];
        let received = self.bus
            .recv(&mut frame)
            .map_err(|err| Ltc2309Error::ReadFailed(err.into()))?;
        if received != FRAME_BYTE_COUNT {
            return Err(Ltc2309Error::ReadFailed(TransferError::Short {
                transferred: received,
                expected: FRAME_BYTE_COUNT,
            }));
        }
        trace!("frame {:02x} {:02x}", frame[0], frame[1]);
        Ok(conversion::code_from_frame(frame))
    }
}
