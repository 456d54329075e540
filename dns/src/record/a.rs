use std::net::Ipv4Addr;

use log::*;

use crate::wire::*;
use super::utils::read_octets;


/// An **A** record type, which contains an `Ipv4Address`.
///
/// # References
///
/// - [RFC 1035 §3.4.1](https://tools.ietf.org/html/rfc1035) — Domain Names,
///   Implementation and Specification (November 1987)
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct A {

    /// The IPv4 address contained in the packet.
    pub address: Ipv4Addr,
}

impl Wire for A {
    const NAME: &'static str = "A";
    const RR_TYPE: u16 = 1;

    fn read(stated_length: u16, c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let address = Ipv4Addr::from(read_octets::<4>(stated_length, c)?);
        trace!("Parsed IPv4 address -> {:?}", address);
        Ok(Self { address })
    }

    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError> {
        bytes.extend_from_slice(&self.address.octets());
        Ok(())
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[
            0xC6, 0x33, 0x64, 0x07,  // IPv4 address
        ];

        assert_eq!(A::read(buf.len() as _, &mut Cursor::new(buf)),
                   Ok(A { address: Ipv4Addr::new(198, 51, 100, 7) }));
    }

    #[test]
    fn writes() {
        let mut bytes = Vec::new();
        A { address: Ipv4Addr::new(192, 0, 2, 33) }.write(&mut bytes).unwrap();

        assert_eq!(bytes, vec![ 0xC0, 0x00, 0x02, 0x21 ]);
    }

    #[test]
    fn wrong_lengths() {
        for stated_length in [ 0, 3, 5, 16 ] {
            let buf = vec![ 0x0A; usize::from(stated_length) ];

            assert_eq!(A::read(stated_length, &mut Cursor::new(&buf[..])),
                       Err(WireError::WrongRecordLength { stated_length, mandated_length: MandatedLength::Exactly(4) }));
        }
    }

    #[test]
    fn buffer_ends_abruptly() {
        let buf = &[
            0x0A, 0x00, 0x00,  // three quarters of an IPv4 address
        ];

        assert_eq!(A::read(4, &mut Cursor::new(buf)),
                   Err(WireError::BufferOverrun));
    }
}
