use crate::record::utils::check_length;
use crate::strings::{ReadLabels, WriteLabels};
use crate::wire::*;

use log::*;


/// A **CNAME** _(canonical name)_ record, which aliases one domain to another.
///
/// # References
///
/// - [RFC 1035 §3.3.1](https://tools.ietf.org/html/rfc1035) — Domain Names, Implementation and Specification (November 1987)
#[derive(PartialEq, Debug, Clone)]
pub struct CNAME {

    /// The domain name that this CNAME record is responding with.
    pub domain: String,
}

impl Wire for CNAME {
    const NAME: &'static str = "CNAME";
    const RR_TYPE: u16 = 5;

    fn read(stated_length: u16, c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let (domain, domain_length) = c.read_labels()?;
        trace!("Parsed domain -> {:?}", domain);

        check_length(stated_length, domain_length)?;
        Ok(Self { domain })
    }

    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError> {
        bytes.write_labels(&self.domain)
    }
}
