use log::*;

use crate::record::utils::check_length;
use crate::strings::{ReadLabels, WriteLabels};
use crate::wire::*;


/// An **MX** _(mail exchange)_ record, which contains the hostnames for mail
/// servers that handle mail sent to the domain.
///
/// # References
///
/// - [RFC 1035 §3.3.9](https://tools.ietf.org/html/rfc1035) — Domain Names,
///   Implementation and Specification (November 1987)
#[derive(PartialEq, Debug, Clone)]
pub struct MX {

    /// The preference that clients should give to this MX record amongst all
    /// that get returned.
    pub preference: u16,

    /// The domain name of the mail exchange server.
    pub exchange: String,
}

impl Wire for MX {
    const NAME: &'static str = "MX";
    const RR_TYPE: u16 = 15;

    fn read(stated_length: u16, c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let preference = c.read_u16::<BigEndian>()?;
        trace!("Parsed preference -> {:?}", preference);

        let (exchange, exchange_length) = c.read_labels()?;
        trace!("Parsed exchange address -> {:?}", exchange);

        check_length(stated_length, 2 + exchange_length)?;
        Ok(Self { preference, exchange })
    }

    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError> {
        bytes.write_u16::<BigEndian>(self.preference)?;
        bytes.write_labels(&self.exchange)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[
            0x00, 0x0A,  // preference
            0x05, 0x62, 0x73, 0x61, 0x67, 0x6f, 0x02, 0x6d, 0x65,  // exchange
            0x00,  // exchange terminator
        ];

        assert_eq!(MX::read(buf.len() as _, &mut Cursor::new(buf)).unwrap(),
                   MX {
                       preference: 10,
                       exchange: String::from("bsago.me"),
                   });
    }

    #[test]
    fn writes() {
        let mut bytes = Vec::new();
        MX { preference: 20, exchange: String::from("mx.io") }.write(&mut bytes).unwrap();

        assert_eq!(bytes, vec![ 0x00, 0x14,
                                0x02, b'm', b'x', 0x02, b'i', b'o', 0x00 ]);
    }

    #[test]
    fn incorrect_record_length() {
        let buf = &[
            0x00, 0x0A,  // preference
            0x03, 0x65, 0x66, 0x67,  // exchange
            0x00,  // exchange terminator
        ];

        assert_eq!(MX::read(6, &mut Cursor::new(buf)),
                   Err(WireError::WrongLabelLength { stated_length: 6, length_after_labels: 7 }));
    }

    #[test]
    fn record_empty() {
        assert_eq!(MX::read(0, &mut Cursor::new(&[])),
                   Err(WireError::BufferOverrun));
    }

    #[test]
    fn buffer_ends_abruptly() {
        let buf = &[
            0x00, 0x0A,  // half a preference
        ];

        assert_eq!(MX::read(23, &mut Cursor::new(buf)),
                   Err(WireError::BufferOverrun));
    }
}
