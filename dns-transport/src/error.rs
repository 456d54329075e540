use std::fmt;
use std::io;


/// Something that can go wrong making a DNS request.
#[derive(Debug)]  // can't be PartialEq due to io::Error
pub enum Error {

    /// The nameserver address was not a literal IP address, with or
    /// without a port. No socket gets opened for these.
    InvalidAddress(String),

    /// No reply arrived before the timeout expired.
    Timeout,

    /// The nameserver could not be reached, or actively refused the
    /// request, such as when nothing is listening on its port.
    Unreachable(io::Error),

    /// There was some other problem with the network sending the request or
    /// receiving a response.
    NetworkError(io::Error),

    /// The request could not be encoded, or the data in the response did not
    /// parse correctly from the DNS wire protocol format.
    WireError(dns::WireError),
}


// From impls

impl From<dns::WireError> for Error {
    fn from(inner: dns::WireError) -> Self {
        Self::WireError(inner)
    }
}

impl From<io::Error> for Error {
    fn from(inner: io::Error) -> Self {
        match inner.kind() {
            io::ErrorKind::WouldBlock |
            io::ErrorKind::TimedOut => {
                Self::Timeout
            }
            io::ErrorKind::ConnectionRefused |
            io::ErrorKind::ConnectionReset |
            io::ErrorKind::AddrNotAvailable => {
                Self::Unreachable(inner)
            }
            _ => {
                Self::NetworkError(inner)
            }
        }
    }
}


impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAddress(addr)  => write!(f, "Invalid nameserver address {:?}", addr),
            Self::Timeout               => write!(f, "Timed out waiting for a reply"),
            Self::Unreachable(e)        => write!(f, "Nameserver unreachable: {}", e),
            Self::NetworkError(e)       => write!(f, "Network error: {}", e),
            Self::WireError(e)          => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreachable(e) |
            Self::NetworkError(e)  => Some(e),
            Self::WireError(e)     => Some(e),
            _                      => None,
        }
    }
}
