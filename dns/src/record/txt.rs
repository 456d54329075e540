use log::*;

use crate::record::utils::{read_character_string, string_length, write_character_string, MAX_STRING_LENGTH};
use crate::wire::*;


/// A **TXT** record, which holds arbitrary descriptive text.
///
/// On the wire the text is split into character-strings of at most 255
/// bytes each. These get joined back together when the record is read, and
/// split again when it is written.
///
/// # Encoding
///
/// The text encoding is not specified, so the bytes are kept as they are.
///
/// # References
///
/// - [RFC 1035 §3.3.14](https://tools.ietf.org/html/rfc1035) — Domain Names,
///   Implementation and Specification (November 1987)
#[derive(PartialEq, Debug, Clone)]
pub struct TXT {

    /// The message contained in the record.
    pub message: Box<[u8]>,
}

/// An **SPF** record, which holds a Sender Policy Framework rule in the
/// same layout as a TXT record.
///
/// # References
///
/// - [RFC 4408 §3.1.1](https://tools.ietf.org/html/rfc4408) — Sender Policy
///   Framework (SPF) for Authorizing Use of Domains in E-Mail (April 2006)
#[derive(PartialEq, Debug, Clone)]
pub struct SPF {

    /// The policy contained in the record.
    pub message: Box<[u8]>,
}

impl Wire for TXT {
    const NAME: &'static str = "TXT";
    const RR_TYPE: u16 = 16;

    fn read(stated_length: u16, c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let message = read_segments(stated_length, c)?;
        Ok(Self { message })
    }

    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError> {
        write_segments(bytes, Self::NAME, &self.message)
    }
}

impl Wire for SPF {
    const NAME: &'static str = "SPF";
    const RR_TYPE: u16 = 99;

    fn read(stated_length: u16, c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let message = read_segments(stated_length, c)?;
        Ok(Self { message })
    }

    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError> {
        write_segments(bytes, Self::NAME, &self.message)
    }
}


/// Reads character-strings until the record’s data has been used up, and
/// joins them together.
fn read_segments(stated_length: u16, c: &mut Cursor<&[u8]>) -> Result<Box<[u8]>, WireError> {
    let mut message = Vec::with_capacity(usize::from(stated_length));
    let mut total_length = 0_u16;

    while total_length < stated_length {
        let segment = read_character_string(c)?;
        total_length = total_length.saturating_add(string_length(&segment));
        message.extend_from_slice(&segment);
    }

    if total_length != stated_length {
        warn!("Length is incorrect (stated length {:?}, segments length {:?})", stated_length, total_length);
        return Err(WireError::WrongLabelLength { stated_length, length_after_labels: total_length });
    }

    trace!("Parsed message -> {:?}", String::from_utf8_lossy(&message));
    Ok(message.into_boxed_slice())
}

/// Writes the message as one or more character-strings. Even an empty
/// message gets one (empty) segment.
fn write_segments(bytes: &mut Vec<u8>, field: &'static str, message: &[u8]) -> Result<(), WireError> {
    if message.is_empty() {
        bytes.push(0);
        return Ok(());
    }

    for segment in message.chunks(MAX_STRING_LENGTH) {
        write_character_string(bytes, field, segment)?;
    }

    Ok(())
}
