use std::net::Ipv4Addr;

use log::*;

use crate::wire::*;


/// A **WKS** _(well known services)_ record, which lists the ports that a
/// host offers services on for one protocol.
///
/// # References
///
/// - [RFC 1035 §3.4.2](https://tools.ietf.org/html/rfc1035) — Domain Names,
///   Implementation and Specification (November 1987)
#[derive(PartialEq, Debug, Clone)]
pub struct WKS {

    /// The IPv4 address of the host.
    pub address: Ipv4Addr,

    /// The IP protocol number these services run over, such as 6 for TCP.
    pub protocol: u8,

    /// One bit for each port, starting at port 0 with the most significant
    /// bit of the first byte.
    pub bitmap: Vec<u8>,
}

/// The most bitmap bytes a record can carry, with one bit for each of the
/// 65,536 ports.
pub const MAX_BITMAP_LENGTH: u16 = 8192;

impl WKS {

    /// Builds a record with the smallest bitmap that has the bit for each
    /// of the given ports set.
    pub fn from_ports(address: Ipv4Addr, protocol: u8, ports: &[u16]) -> Self {
        let length = ports.iter().max().map_or(0, |max| usize::from(*max) / 8 + 1);
        let mut bitmap = vec![0_u8; length];

        for port in ports {
            let port = usize::from(*port);
            bitmap[port / 8] |= 0b_1000_0000 >> (port % 8);
        }

        Self { address, protocol, bitmap }
    }

    /// Lists the ports whose bit is set, in ascending order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn ports(&self) -> Vec<u16> {
        // bits past the last port only exist in records built by hand
        self.bitmap.iter().take(usize::from(MAX_BITMAP_LENGTH)).enumerate()
            .flat_map(|(index, byte)| {
                (0 .. 8).filter(move |bit| byte & (0b_1000_0000 >> bit) != 0)
                        .map(move |bit| (index * 8 + bit) as u16)
            })
            .collect()
    }
}

impl Wire for WKS {
    const NAME: &'static str = "WKS";
    const RR_TYPE: u16 = 11;

    fn read(stated_length: u16, c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        if stated_length < 5 {
            warn!("Length is incorrect (record length {:?}, but should be at least five)", stated_length);
            let mandated_length = MandatedLength::AtLeast(5);
            return Err(WireError::WrongRecordLength { stated_length, mandated_length });
        }

        if stated_length - 5 > MAX_BITMAP_LENGTH {
            warn!("Length is incorrect (record length {:?}, but should be at most {})", stated_length, MAX_BITMAP_LENGTH + 5);
            let mandated_length = MandatedLength::AtMost(MAX_BITMAP_LENGTH + 5);
            return Err(WireError::WrongRecordLength { stated_length, mandated_length });
        }

        let mut buf = [0_u8; 4];
        c.read_exact(&mut buf)?;

        let address = Ipv4Addr::from(buf);
        trace!("Parsed IPv4 address -> {:?}", address);

        let protocol = c.read_u8()?;
        trace!("Parsed protocol -> {:?}", protocol);

        let mut bitmap = vec![0_u8; usize::from(stated_length - 5)];
        c.read_exact(&mut bitmap)?;
        trace!("Parsed bitmap -> {:?}", bitmap);

        Ok(Self { address, protocol, bitmap })
    }

    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError> {
        if self.bitmap.len() > usize::from(MAX_BITMAP_LENGTH) {
            warn!("The WKS bitmap is {} bytes long", self.bitmap.len());
            return Err(WireError::FieldTooLong { field: "WKS bitmap", length: self.bitmap.len() });
        }

        bytes.extend_from_slice(&self.address.octets());
        bytes.push(self.protocol);
        bytes.extend_from_slice(&self.bitmap);
        Ok(())
    }
}
