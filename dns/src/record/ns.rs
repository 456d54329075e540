use crate::record::utils::check_length;
use crate::strings::{ReadLabels, WriteLabels};
use crate::wire::*;

use log::*;


/// A **NS** _(name server)_ record, which is used to point domains to name
/// servers.
///
/// # References
///
/// - [RFC 1035 §3.3.11](https://tools.ietf.org/html/rfc1035) — Domain Names, Implementation and Specification (November 1987)
#[derive(PartialEq, Debug, Clone)]
pub struct NS {

    /// The address of a nameserver that provides this DNS response.
    pub nameserver: String,
}

impl Wire for NS {
    const NAME: &'static str = "NS";
    const RR_TYPE: u16 = 2;

    fn read(stated_length: u16, c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let (nameserver, nameserver_length) = c.read_labels()?;
        trace!("Parsed nameserver -> {:?}", nameserver);

        check_length(stated_length, nameserver_length)?;
        Ok(Self { nameserver })
    }

    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError> {
        bytes.write_labels(&self.nameserver)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[
            0x01, 0x61, 0x0c, 0x67, 0x74, 0x6c, 0x64, 0x2d, 0x73, 0x65, 0x72,
            0x76, 0x65, 0x72, 0x73, 0x03, 0x6e, 0x65, 0x74, 0x00,  // nameserver
        ];

        assert_eq!(NS::read(buf.len() as _, &mut Cursor::new(buf)).unwrap(),
                   NS {
                       nameserver: String::from("a.gtld-servers.net"),
                   });
    }

    #[test]
    fn writes() {
        let mut bytes = Vec::new();
        NS { nameserver: String::from("ns1.example.") }.write(&mut bytes).unwrap();

        assert_eq!(bytes, vec![ 0x03, b'n', b's', b'1',
                                0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e',
                                0x00 ]);
    }

    #[test]
    fn incorrect_record_length() {
        let buf = &[
            0x03, 0x65, 0x66, 0x67, 0x00,  // nameserver
        ];

        assert_eq!(NS::read(6, &mut Cursor::new(buf)),
                   Err(WireError::WrongLabelLength { stated_length: 6, length_after_labels: 5 }));
    }

    #[test]
    fn record_empty() {
        assert_eq!(NS::read(0, &mut Cursor::new(&[])),
                   Err(WireError::BufferOverrun));
    }

    #[test]
    fn buffer_ends_abruptly() {
        let buf = &[
            0x01,  // the first byte of a string
        ];

        assert_eq!(NS::read(23, &mut Cursor::new(buf)),
                   Err(WireError::BufferOverrun));
    }
}
