use crate::record::utils::{check_length, read_character_string, string_length, write_character_string};
use crate::wire::*;


/// A (an?) **HINFO** _(host information)_ record, which contains the CPU and
/// OS information about a host.
///
/// It also gets used as the response for an `ANY` query, if it is blocked.
///
/// # References
///
/// - [RFC 1035 §3.3.2](https://tools.ietf.org/html/rfc1035) — Domain Names,
///   Implementation and Specification (November 1987)
/// - [RFC 8482 §6](https://tools.ietf.org/html/rfc8482#section-6) — Providing
///   Minimal-Sized Responses to DNS Queries That Have QTYPE=ANY (January 2019)
#[derive(PartialEq, Debug, Clone)]
pub struct HINFO {

    /// The CPU field, specifying the CPU type.
    pub cpu: Box<[u8]>,

    /// The OS field, specifying the operating system.
    pub os: Box<[u8]>,
}

impl Wire for HINFO {
    const NAME: &'static str = "HINFO";
    const RR_TYPE: u16 = 13;

    fn read(stated_length: u16, c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let cpu = read_character_string(c)?;
        let os = read_character_string(c)?;

        check_length(stated_length, string_length(&cpu) + string_length(&os))?;
        Ok(Self { cpu, os })
    }

    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError> {
        write_character_string(bytes, "HINFO cpu", &self.cpu)?;
        write_character_string(bytes, "HINFO os", &self.os)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses() {
        let buf = &[
            0x0e,  // cpu length
            0x73, 0x6f, 0x6d, 0x65, 0x2d, 0x6b, 0x69, 0x6e, 0x64, 0x61, 0x2d,
            0x63, 0x70, 0x75,  // cpu
            0x0d,  // os length
            0x73, 0x6f, 0x6d, 0x65, 0x2d, 0x6b, 0x69, 0x6e, 0x64, 0x61, 0x2d,
            0x6f, 0x73,  // os
        ];

        assert_eq!(HINFO::read(buf.len() as _, &mut Cursor::new(buf)).unwrap(),
                   HINFO {
                       cpu: Box::new(*b"some-kinda-cpu"),
                       os: Box::new(*b"some-kinda-os"),
                   });
    }

    #[test]
    fn writes() {
        let hinfo = HINFO { cpu: Box::new(*b"x86"), os: Box::new(*b"") };

        let mut bytes = Vec::new();
        hinfo.write(&mut bytes).unwrap();

        assert_eq!(bytes, vec![ 0x03, b'x', b'8', b'6', 0x00 ]);
    }

    #[test]
    fn incorrect_record_length() {
        let buf = &[
            0x03,  // cpu length
            0x65, 0x66, 0x67,  // cpu
            0x03,  // os length
            0x68, 0x69, 0x70,  // os
        ];

        assert_eq!(HINFO::read(6, &mut Cursor::new(buf)),
                   Err(WireError::WrongLabelLength { stated_length: 6, length_after_labels: 8 }));
    }

    #[test]
    fn record_empty() {
        assert_eq!(HINFO::read(0, &mut Cursor::new(&[])),
                   Err(WireError::BufferOverrun));
    }

    #[test]
    fn buffer_ends_abruptly() {
        let buf = &[
            0x14, 0x0A, 0x0B, 0x0C,  // 32-bit CPU
        ];

        assert_eq!(HINFO::read(23, &mut Cursor::new(buf)),
                   Err(WireError::BufferOverrun));
    }
}
