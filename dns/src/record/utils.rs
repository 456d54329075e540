//! Reading and writing the pieces that several record types share.

use log::*;

use crate::wire::*;


/// The longest a character-string can be, as its length prefix is one byte.
pub(crate) const MAX_STRING_LENGTH: usize = 255;


/// Reads the entire data of a record that must be exactly `N` bytes long,
/// such as an address.
pub(crate) fn read_octets<const N: usize>(stated_length: u16, c: &mut Cursor<&[u8]>) -> Result<[u8; N], WireError> {
    if usize::from(stated_length) != N {
        warn!("Length is incorrect (record length {:?}, but should be {})", stated_length, N);
        #[allow(clippy::cast_possible_truncation)]
        let mandated_length = MandatedLength::Exactly(N as u16);
        return Err(WireError::WrongRecordLength { stated_length, mandated_length });
    }

    let mut octets = [0_u8; N];
    c.read_exact(&mut octets)?;
    Ok(octets)
}

/// Reads a length-prefixed character-string.
pub(crate) fn read_character_string(c: &mut Cursor<&[u8]>) -> Result<Box<[u8]>, WireError> {
    let length = c.read_u8()?;
    trace!("Parsed string length -> {:?}", length);

    let mut string = vec![0_u8; usize::from(length)].into_boxed_slice();
    c.read_exact(&mut string)?;
    trace!("Parsed string -> {:?}", String::from_utf8_lossy(&string));

    Ok(string)
}

/// Writes a length-prefixed character-string, failing if it is longer than
/// its one-byte length prefix can express.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn write_character_string(bytes: &mut Vec<u8>, field: &'static str, string: &[u8]) -> Result<(), WireError> {
    if string.len() > MAX_STRING_LENGTH {
        warn!("The {} field is {} bytes long", field, string.len());
        return Err(WireError::FieldTooLong { field, length: string.len() });
    }

    bytes.push(string.len() as u8);
    bytes.extend_from_slice(string);
    Ok(())
}

/// Checks that reading a record’s fields used up exactly its stated length.
pub(crate) fn check_length(stated_length: u16, length_after_labels: u16) -> Result<(), WireError> {
    if stated_length == length_after_labels {
        trace!("Length is correct");
        Ok(())
    }
    else {
        warn!("Length is incorrect (stated length {:?}, fields length {:?})", stated_length, length_after_labels);
        Err(WireError::WrongLabelLength { stated_length, length_after_labels })
    }
}

/// The number of bytes a character-string took up, including its prefix.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn string_length(string: &[u8]) -> u16 {
    1 + string.len() as u16
}
