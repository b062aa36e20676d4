use std::io;
use std::fmt;
use std::error::Error;

/// Why a single write or read of a conversion transaction did not complete.
#[derive(Debug)]
pub enum TransferError {
    /// the transport moved fewer (or more) bytes than the transaction needs
    Short { transferred: usize, expected: usize },
    Io(io::Error),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TransferError::Short { transferred, expected } => {
                write!(f, "transferred {} of {} bytes", transferred, expected)
            }
            TransferError::Io(ref err) => err.fmt(f),
        }
    }
}

impl Error for TransferError {

    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            TransferError::Short { .. } => None,
            TransferError::Io(ref err) => Some(err),
        }
    }
}

impl From<io::Error> for TransferError {
    fn from(err: io::Error) -> TransferError {
        TransferError::Io(err)
    }
}

#[derive(Debug)]
pub enum Ltc2309Error {
    BusOpenFailed(io::Error),
    /// the peer address could not be configured on the opened bus
    BusBindFailed(io::Error),
    WriteFailed(TransferError),
    ReadFailed(TransferError),
    ChannelOutOfRange(u8),
    UnsupportedOSError,
}

impl fmt::Display for Ltc2309Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Ltc2309Error::BusOpenFailed(ref err) => write!(f, "failed to open i2c bus: {}", err),
            Ltc2309Error::BusBindFailed(ref err) => {
                write!(f, "unable to get bus access to talk to the device: {}", err)
            }
            Ltc2309Error::WriteFailed(ref err) => write!(f, "error writing command byte: {}", err),
            Ltc2309Error::ReadFailed(ref err) => write!(f, "unable to read conversion result: {}", err),
            Ltc2309Error::ChannelOutOfRange(channel_index) => {
                write!(f, "invalid channel number ({})", channel_index)
            }
            Ltc2309Error::UnsupportedOSError => write!(f, "unsupported os"),
        }
    }
}

impl Error for Ltc2309Error {

    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Ltc2309Error::BusOpenFailed(ref err) => Some(err),
            Ltc2309Error::BusBindFailed(ref err) => Some(err),
            Ltc2309Error::WriteFailed(ref err) => Some(err),
            Ltc2309Error::ReadFailed(ref err) => Some(err),
            Ltc2309Error::ChannelOutOfRange(_) => None,
            Ltc2309Error::UnsupportedOSError => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_transfer_is_the_source_of_a_read_failure() {
        let err = Ltc2309Error::ReadFailed(TransferError::Short { transferred: 1, expected: 2 });

        let source = err.source().expect("transfer error as source");
        assert_eq!(source.to_string(), "transferred 1 of 2 bytes");
        assert!(source.source().is_none());
    }

    #[test]
    fn io_error_is_reachable_through_a_write_failure() {
        let err = Ltc2309Error::WriteFailed(io::Error::new(io::ErrorKind::BrokenPipe, "nack").into());

        let transfer = err.source().expect("transfer error as source");
        let io_err = transfer.source().expect("io error as source");
        assert_eq!(io_err.to_string(), "nack");
        assert_eq!(err.to_string(), "error writing command byte: nack");
    }
}
