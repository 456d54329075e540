use log::*;

use crate::record::utils::{check_length, read_character_string, string_length, write_character_string};
use crate::strings::{ReadLabels, WriteLabels};
use crate::wire::*;


/// A **NAPTR** _(naming authority pointer)_ record, which holds a rule for
/// the Dynamic Delegation Discovery System.
///
/// # References
///
/// - [RFC 3403](https://tools.ietf.org/html/rfc3403) — Dynamic Delegation
///   Discovery System (DDDS) Part Three: The Domain Name System (DNS) Database
///   (October 2002)
#[derive(PartialEq, Debug, Clone)]
pub struct NAPTR {

    /// The order in which NAPTR records must be processed.
    pub order: u16,

    /// The DDDS priority.
    pub preference: u16,

    /// A set of characters that control the rewriting and interpretation of
    /// the other fields.
    pub flags: Box<[u8]>,

    /// The service parameters applicable to this delegation path.
    pub service: Box<[u8]>,

    /// A regular expression that gets applied to a string in order to
    /// construct the next domain name to look up using the DDDS algorithm.
    pub regex: Box<[u8]>,

    /// The replacement domain name as part of the DDDS algorithm.
    pub replacement: String,
}

impl Wire for NAPTR {
    const NAME: &'static str = "NAPTR";
    const RR_TYPE: u16 = 35;

    fn read(stated_length: u16, c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let order = c.read_u16::<BigEndian>()?;
        trace!("Parsed order -> {:?}", order);

        let preference = c.read_u16::<BigEndian>()?;
        trace!("Parsed preference -> {:?}", preference);

        let flags = read_character_string(c)?;
        let service = read_character_string(c)?;
        let regex = read_character_string(c)?;

        let (replacement, replacement_length) = c.read_labels()?;
        trace!("Parsed replacement -> {:?}", replacement);

        let length_after_labels = 2 + 2
            + string_length(&flags) + string_length(&service) + string_length(&regex)
            + replacement_length;

        check_length(stated_length, length_after_labels)?;
        Ok(Self { order, preference, flags, service, regex, replacement })
    }

    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError> {
        bytes.write_u16::<BigEndian>(self.order)?;
        bytes.write_u16::<BigEndian>(self.preference)?;
        write_character_string(bytes, "NAPTR flags", &self.flags)?;
        write_character_string(bytes, "NAPTR service", &self.service)?;
        write_character_string(bytes, "NAPTR regex", &self.regex)?;
        bytes.write_labels(&self.replacement)
    }
}
