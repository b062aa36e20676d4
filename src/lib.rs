//! `ltc2309` reads the eight single-ended inputs of a Linear Technology LTC2309 12-bit ADC
//! over a Linux `i2c-dev` bus and converts the result codes into volts.
//!
//! Every conversion is one write of a command byte (channel and polarity) followed by a
//! two byte read of the left-justified 12-bit result.

#[cfg(test)]
mod tests {
    use super::{PolarityMode, SamplingSession, Config};
    use std::path::Path;

    #[test]
    #[ignore = "needs an LTC2309 on /dev/i2c-1"]
    fn ltc2309_read_channel() {
        let config = Config::default();

        if cfg!(target_os = "linux") && Path::new(&config.bus_path).exists() {
            let mut session = SamplingSession::open(config).unwrap();

            let voltage = session.sample_channel(0, PolarityMode::Unipolar, 1).unwrap();
            assert!((0.0f32..=4.096).contains(&voltage));

            let voltage = session.sample_channel(0, PolarityMode::Bipolar, 1).unwrap();
            assert!((-2.048f32..=2.048).contains(&voltage));
        } else {
            panic!("can not test on current setup (no i2c interface)");
        }
    }
}

#[cfg(target_os = "linux")]
extern crate i2cdev;

mod bus;
mod channel;
mod command;
mod conversion;
mod error;
mod session;

pub use crate::bus::{Bus, I2cBus};
pub use crate::channel::{Channel, PolarityMode, CHANNEL_COUNT};
pub use crate::command::{encode, CommandByte, UNIPOLAR_BIT};
pub use crate::conversion::{code_from_frame, to_voltage};
pub use crate::error::{Ltc2309Error, TransferError};
pub use crate::session::{
    Config, Reading, Readout, SamplingSession, DEFAULT_ADDRESS, DEFAULT_BUS_PATH, DEFAULT_VREF,
};
