//! Byte transport to the converter.

use std::io;
use std::path::Path;

#[cfg(target_os = "linux")]
use i2cdev::core::I2CDevice;
#[cfg(target_os = "linux")]
use i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};
#[cfg(target_os = "linux")]
use log::debug;

use crate::error::Ltc2309Error;

/// A channel to one fixed peer that sends and receives whole messages.
pub trait Bus {
    /// Send `bytes` as one write transaction, returning how many were accepted
    fn send(&mut self, bytes: &[u8]) -> io::Result<usize>;

    /// Receive up to `buffer.len()` bytes as one read transaction, returning how many arrived
    fn recv(&mut self, buffer: &mut [u8]) -> io::Result<usize>;
}

impl<B: Bus + ?Sized> Bus for &mut B {
    fn send(&mut self, bytes: &[u8]) -> io::Result<usize> {
        (**self).send(bytes)
    }

    fn recv(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        (**self).recv(buffer)
    }
}

/// `/dev/i2c-N` character device bound to a single slave address.
///
/// The device node is closed when the value is dropped.
pub struct I2cBus {
    #[cfg(target_os = "linux")]
    device: LinuxI2CDevice,
}

impl I2cBus {
    /// Opens `bus_path` and binds it to the 7-bit `address`.
    #[cfg(target_os = "linux")]
    pub fn open<P: AsRef<Path>>(bus_path: P, address: u16) -> Result<I2cBus, Ltc2309Error> {
        debug!("opening {} for slave 0x{:02x}", bus_path.as_ref().display(), address);

        match LinuxI2CDevice::new(bus_path, address) {
            Ok(device) => Ok(I2cBus { device }),
            Err(LinuxI2CError::Io(err)) => Err(Ltc2309Error::BusOpenFailed(err)),
            Err(err) => Err(Ltc2309Error::BusBindFailed(err.into())),
        }
    }

    #[cfg(not(target_os = "linux"))]
    pub fn open<P: AsRef<Path>>(_bus_path: P, _address: u16) -> Result<I2cBus, Ltc2309Error> {
        Err(Ltc2309Error::UnsupportedOSError)
    }
}

#[cfg(target_os = "linux")]
impl Bus for I2cBus {
    // i2c-dev moves the whole message or fails
    fn send(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.device.write(bytes).map_err(io::Error::from)?;
        Ok(bytes.len())
    }

    fn recv(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        self.device.read(buffer).map_err(io::Error::from)?;
        Ok(buffer.len())
    }
}

#[cfg(not(target_os = "linux"))]
impl Bus for I2cBus {
    fn send(&mut self, _bytes: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "unsupported os"))
    }

    fn recv(&mut self, _buffer: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "unsupported os"))
    }
}
