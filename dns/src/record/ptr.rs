use crate::record::utils::check_length;
use crate::strings::{ReadLabels, WriteLabels};
use crate::wire::*;

use log::*;


/// A **PTR** record, which holds a _pointer_ to a canonical name. This is
/// most often used for reverse DNS lookups.
///
/// # References
///
/// - [RFC 1035 §3.3.14](https://tools.ietf.org/html/rfc1035) — Domain Names, Implementation and Specification (November 1987)
#[derive(PartialEq, Debug, Clone)]
pub struct PTR {

    /// The CNAME contained in the record.
    pub cname: String,
}

impl Wire for PTR {
    const NAME: &'static str = "PTR";
    const RR_TYPE: u16 = 12;

    fn read(stated_length: u16, c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let (cname, cname_length) = c.read_labels()?;
        trace!("Parsed cname -> {:?}", cname);

        check_length(stated_length, cname_length)?;
        Ok(Self { cname })
    }

    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError> {
        bytes.write_labels(&self.cname)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[
            0x03, 0x64, 0x6e, 0x73, 0x06, 0x67, 0x6f, 0x6f, 0x67, 0x6c, 0x65,  // cname
            0x00,  // cname terminator
        ];

        assert_eq!(PTR::read(buf.len() as _, &mut Cursor::new(buf)).unwrap(),
                   PTR {
                       cname: String::from("dns.google"),
                   });
    }

    #[test]
    fn incorrect_record_length() {
        let buf = &[
            0x03, 0x65, 0x66, 0x67,  // cname
            0x00,  // cname terminator
        ];

        assert_eq!(PTR::read(4, &mut Cursor::new(buf)),
                   Err(WireError::WrongLabelLength { stated_length: 4, length_after_labels: 5 }));
    }

    #[test]
    fn record_empty() {
        assert_eq!(PTR::read(0, &mut Cursor::new(&[])),
                   Err(WireError::BufferOverrun));
    }

    #[test]
    fn buffer_ends_abruptly() {
        let buf = &[
            0x03, 0x64,  // the start of a cname
        ];

        assert_eq!(PTR::read(23, &mut Cursor::new(buf)),
                   Err(WireError::BufferOverrun));
    }
}
