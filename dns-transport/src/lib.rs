//! Sending DNS messages to a nameserver and receiving its reply.

#![warn(deprecated_in_future)]
#![warn(future_incompatible)]
#![warn(missing_copy_implementations)]
#![warn(missing_docs)]
#![warn(nonstandard_style)]
#![warn(rust_2018_compatibility)]
#![warn(rust_2018_idioms)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused)]

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::wildcard_imports)]

#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_sign_loss)]
#![deny(unsafe_code)]

use std::time::Duration;

use dns::Message;


mod udp;
pub use self::udp::UdpTransport;

mod error;
pub use self::error::Error;


/// How long to wait for a reply before giving up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// The port nameservers listen on when an address doesn’t specify one.
pub const DNS_PORT: u16 = 53;


/// The trait implemented by transport types.
pub trait Transport {

    /// Convert the request to bytes, send it over the network, wait for a
    /// response, deserialise it from bytes, and return it.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] error if the request cannot be encoded, if
    /// there's an I/O error sending or receiving data, if no reply arrives
    /// in time, or if the DNS packet in the response contained invalid bytes
    /// and failed to parse.
    fn send(&self, request: &Message) -> Result<Message, Error>;
}


/// Sends an already-encoded message to the nameserver at the given address
/// over UDP, and returns the bytes of the first datagram that comes back.
///
/// The address must be a literal IP address, optionally with a port.
pub fn query(server: &str, bytes: &[u8]) -> Result<Vec<u8>, Error> {
    UdpTransport::new(server)?.query(bytes)
}
