//! Reading and writing domain names in the DNS wire protocol.

use std::io::Write;
use std::str::Chars;

use log::*;

use crate::wire::*;


/// The longest a domain name can be once encoded, including the length
/// prefix of every label and the terminating zero-length label.
pub const MAX_NAME_LENGTH: usize = 255;

/// The longest a single label can be.
pub const MAX_LABEL_LENGTH: usize = 63;

/// A name of the maximum length made out of one-octet labels cannot
/// legitimately need more pointers than this.
const MAX_POINTER_JUMPS: usize = MAX_NAME_LENGTH / 2;


/// An extension for `Cursor` that enables reading compressed domain names
/// from DNS packets.
pub(crate) trait ReadLabels {

    /// Read and expand a compressed domain name, returning it along with
    /// the number of bytes it took up at the cursor’s position. Bytes
    /// reached by following compression pointers are not counted.
    fn read_labels(&mut self) -> Result<(String, u16), WireError>;
}

impl ReadLabels for Cursor<&[u8]> {
    #[allow(clippy::cast_possible_truncation)]
    fn read_labels(&mut self) -> Result<(String, u16), WireError> {
        let start = self.position();
        let mut resume_at = None;
        let mut jumps = Vec::new();

        let mut name = String::new();
        let mut encoded_length = 1;

        loop {
            let byte = self.read_u8()?;

            if byte == 0 {
                break;
            }

            else if byte >= 0b_1100_0000 {
                let name_one = byte - 0b_1100_0000;
                let name_two = self.read_u8()?;
                let offset = u16::from_be_bytes([name_one, name_two]);

                if resume_at.is_none() {
                    resume_at = Some(self.position());
                }

                if jumps.contains(&offset) || jumps.len() >= MAX_POINTER_JUMPS {
                    warn!("Compression pointer to {} would loop (visited {:?})", offset, jumps);
                    return Err(WireError::PointerLoop(jumps.into_boxed_slice()));
                }

                if usize::from(offset) >= self.get_ref().len() {
                    warn!("Compression pointer to {} is outside the packet", offset);
                    return Err(WireError::OutOfBounds(offset));
                }

                debug!("Backtracking to offset {}", offset);
                jumps.push(offset);
                self.set_position(u64::from(offset));
            }

            // Otherwise, treat the byte as the length of a label, and read
            // that many characters.
            else if usize::from(byte) <= MAX_LABEL_LENGTH {
                encoded_length += 1 + usize::from(byte);
                if encoded_length > MAX_NAME_LENGTH {
                    warn!("Name is at least {} bytes long", encoded_length);
                    return Err(WireError::NameTooLong(encoded_length));
                }

                let mut label = vec![0_u8; usize::from(byte)];
                self.read_exact(&mut label)?;

                if ! name.is_empty() {
                    name.push('.');
                }
                escape_label(&label, &mut name);
            }

            // 0b01 and 0b10 prefixes were extended label types, none of
            // which survived.
            else {
                warn!("Unknown label type {:#010b}", byte);
                return Err(WireError::BadLabelType(byte));
            }
        }

        if let Some(position) = resume_at {
            debug!("Coming back to {}", position);
            self.set_position(position);
        }

        // At most 255 bytes of labels and one pointer can come before the
        // cursor resumes.
        let consumed = (self.position() - start) as u16;

        if name.is_empty() {
            name.push('.');
        }

        trace!("Read name {:?} ({} bytes in place)", name, consumed);
        Ok((name, consumed))
    }
}


/// Appends a label to a name in its text form. Dots and backslashes inside
/// the label are escaped with a backslash, and any byte that is not
/// printable ASCII is written as a backslash and three decimal digits.
fn escape_label(label: &[u8], name: &mut String) {
    for &byte in label {
        match byte {
            b'.' | b'\\' => {
                name.push('\\');
                name.push(char::from(byte));
            }
            0x21 ..= 0x7E => {
                name.push(char::from(byte));
            }
            _ => {
                name.push_str(&format!("\\{:03}", byte));
            }
        }
    }
}


/// An extension for `Write` that enables writing domain names.
pub(crate) trait WriteLabels {

    /// Write a domain name.
    ///
    /// The names are written with one byte slice per domain segment,
    /// preceded by each segment’s length, with the whole thing ending with
    /// a segment of zero length. Names are never compressed.
    ///
    /// So “dns.example.com” would be encoded as:
    /// “3, dns, 7, example, 3, com, 0”.
    fn write_labels(&mut self, input: &str) -> Result<(), WireError>;
}

impl<W: Write> WriteLabels for W {
    fn write_labels(&mut self, input: &str) -> Result<(), WireError> {
        let bytes = encode_name(input)?;
        self.write_all(&bytes)?;
        Ok(())
    }
}


/// Encodes a dotted domain name into its uncompressed wire form.
///
/// A single trailing dot is allowed, and both `""` and `"."` mean the root.
/// A backslash makes the character after it part of the label, so `\.`
/// is a dot within a label, and `\DDD` is the byte with that decimal value.
pub fn encode_name(input: &str) -> Result<Vec<u8>, WireError> {
    let mut bytes = Vec::with_capacity(input.len() + 2);

    if ! input.is_empty() && input != "." {
        let mut label = Vec::new();
        let mut chars = input.chars();
        let mut ends_with_dot = false;

        while let Some(character) = chars.next() {
            ends_with_dot = character == '.';

            match character {
                '.' => {
                    write_label(&mut bytes, &label, input)?;
                    label.clear();
                }
                '\\' => {
                    unescape(&mut chars, &mut label)?;
                }
                _ => {
                    let mut buf = [0_u8; 4];
                    label.extend_from_slice(character.encode_utf8(&mut buf).as_bytes());
                }
            }
        }

        if ! ends_with_dot {
            write_label(&mut bytes, &label, input)?;
        }
    }

    bytes.push(0);  // terminate the string

    if bytes.len() > MAX_NAME_LENGTH {
        warn!("Name {:?} is {} bytes long once encoded", input, bytes.len());
        return Err(WireError::NameTooLong(bytes.len()));
    }

    Ok(bytes)
}

/// Writes one length-prefixed label of a name.
#[allow(clippy::cast_possible_truncation)]
fn write_label(bytes: &mut Vec<u8>, label: &[u8], input: &str) -> Result<(), WireError> {
    if label.is_empty() {
        warn!("Name {:?} contains an empty label", input);
        return Err(WireError::EmptyLabel);
    }

    if label.len() > MAX_LABEL_LENGTH {
        warn!("Label {:?} is {} bytes long", String::from_utf8_lossy(label), label.len());
        return Err(WireError::LabelTooLong(label.len()));
    }

    bytes.push(label.len() as u8);
    bytes.extend_from_slice(label);
    Ok(())
}

/// Reads what follows a backslash in a name, adding the byte or character
/// it stands for to the label.
fn unescape(chars: &mut Chars<'_>, label: &mut Vec<u8>) -> Result<(), WireError> {
    let first = chars.next().ok_or(WireError::BadEscape)?;

    if let Some(hundreds) = first.to_digit(10) {
        let tens = chars.next().and_then(|c| c.to_digit(10)).ok_or(WireError::BadEscape)?;
        let units = chars.next().and_then(|c| c.to_digit(10)).ok_or(WireError::BadEscape)?;

        let byte = u8::try_from(hundreds * 100 + tens * 10 + units).map_err(|_| WireError::BadEscape)?;
        label.push(byte);
    }
    else {
        let mut buf = [0_u8; 4];
        label.extend_from_slice(first.encode_utf8(&mut buf).as_bytes());
    }

    Ok(())
}


/// Decodes the domain name starting at `offset` in a complete message,
/// following any compression pointers, and returns it along with the number
/// of bytes it occupies at that offset.
pub fn decode_name(buffer: &[u8], offset: usize) -> Result<(String, usize), WireError> {
    let mut c = Cursor::new(buffer);
    c.set_position(offset as u64);

    let (name, consumed) = c.read_labels()?;
    Ok((name, usize::from(consumed)))
}


/// Converts an internationalised domain name into its ASCII form, so that
/// it can be encoded.
#[cfg(feature = "with_idna")]
pub fn idna_to_ascii(input: &str) -> Option<String> {
    use unic_idna::{to_ascii, Flags};

    let flags = Flags {
        use_std3_ascii_rules: false,
        transitional_processing: false,
        verify_dns_length: false,
    };

    match to_ascii(input, flags) {
        Ok(ascii) => {
            trace!("IDNA-encoded {:?} -> {:?}", input, ascii);
            Some(ascii)
        }
        Err(e) => {
            warn!("Could not IDNA-encode {:?}: {:?}", input, e);
            None
        }
    }
}
