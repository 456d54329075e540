//! Parsing and building the DNS wire protocol.

pub(crate) use std::io::{Cursor, Read};
pub(crate) use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use std::fmt;
use std::io;
use log::*;

use crate::record::{Record, RecordType};
use crate::strings::{ReadLabels, WriteLabels};
use crate::types::*;


/// The conventional maximum size of a DNS message sent over UDP, which is
/// the capacity `Message::to_bytes` encodes into.
pub const MAX_UDP_SIZE: usize = 512;

/// The size of the fixed header at the start of every message.
const HEADER_LENGTH: usize = 12;


impl Message {

    /// Converts this message to a vector of bytes, failing if it would not
    /// fit into a single UDP datagram.
    pub fn to_bytes(&self) -> Result<Vec<u8>, WireError> {
        self.to_bytes_with_capacity(MAX_UDP_SIZE)
    }

    /// Converts this message to a vector of bytes, failing if it would be
    /// longer than `capacity`. Nothing is returned when encoding fails part
    /// of the way through.
    pub fn to_bytes_with_capacity(&self, capacity: usize) -> Result<Vec<u8>, WireError> {
        info!("Encoding message (txid {:#06x})", self.transaction_id);
        let mut bytes = Vec::with_capacity(capacity.min(MAX_UDP_SIZE));

        bytes.write_u16::<BigEndian>(self.transaction_id)?;
        bytes.write_u16::<BigEndian>(self.flags.to_u16())?;

        // The counts always come from the sections themselves.
        bytes.write_u16::<BigEndian>(self.question_count())?;
        bytes.write_u16::<BigEndian>(section_count("answer", self.answer_count())?)?;
        bytes.write_u16::<BigEndian>(section_count("authority", self.authority_count())?)?;
        bytes.write_u16::<BigEndian>(section_count("additional", self.additional_count())?)?;

        if let Some(question) = &self.question {
            question.write(&mut bytes)?;
        }

        for answer in self.answers.iter().chain(&self.authorities).chain(&self.additionals) {
            answer.write(&mut bytes)?;
        }

        if bytes.len() > capacity {
            warn!("Encoded message is {} bytes, but only {} are available", bytes.len(), capacity);
            return Err(WireError::MessageTooLarge { length: bytes.len(), capacity });
        }

        trace!("Bytes -> {:?}", bytes);
        Ok(bytes)
    }

    /// Reads bytes off of the given slice, parsing them into a message.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WireError> {
        info!("Parsing message");
        trace!("Bytes -> {:?}", bytes);

        if bytes.len() < HEADER_LENGTH {
            warn!("Message is {} bytes, too short for a header", bytes.len());
            return Err(WireError::BufferOverrun);
        }

        let mut c = Cursor::new(bytes);

        let transaction_id = c.read_u16::<BigEndian>()?;
        trace!("Read txid -> {:?}", transaction_id);

        let flags = Flags::from_u16(c.read_u16::<BigEndian>()?);
        trace!("Read flags -> {:#?}", flags);

        let query_count      = c.read_u16::<BigEndian>()?;
        let answer_count     = c.read_u16::<BigEndian>()?;
        let authority_count  = c.read_u16::<BigEndian>()?;
        let additional_count = c.read_u16::<BigEndian>()?;

        if query_count > 1 {
            warn!("Message has {} questions", query_count);
            return Err(WireError::TooManyQuestions(query_count));
        }

        let question = if query_count == 1 {
            debug!("Reading question from message");
            Some(Question::from_bytes(&mut c)?)
        }
        else {
            None
        };

        debug!("Reading {}x answer from message", answer_count);
        let answers = read_section(&mut c, answer_count)?;

        debug!("Reading {}x authority from message", authority_count);
        let authorities = read_section(&mut c, authority_count)?;

        debug!("Reading {}x additional from message", additional_count);
        let additionals = read_section(&mut c, additional_count)?;

        let leftover = bytes.len() - c.position() as usize;
        if leftover > 0 {
            warn!("Ignoring {} trailing bytes", leftover);
        }

        Ok(Self { transaction_id, flags, question, answers, authorities, additionals })
    }
}

/// Converts the length of a section into the number that goes in the header.
fn section_count(section: &'static str, length: usize) -> Result<u16, WireError> {
    u16::try_from(length).map_err(|_| {
        warn!("The {} section has {} records", section, length);
        WireError::FieldTooLong { field: section, length }
    })
}

/// Reads `count` records in a row.
fn read_section(c: &mut Cursor<&[u8]>, count: u16) -> Result<Vec<Answer>, WireError> {

    // We can pre-allocate the vector by giving it an initial capacity based
    // on the count field. But because the count fields are user-controlled
    // (with a maximum of 2^16 - 1) we cannot trust them _entirely_, so cap
    // the pre-allocation if the count looks arbitrarily large (9 seems about
    // right).
    let mut answers = Vec::with_capacity(usize::from(count.min(9)));

    for _ in 0 .. count {
        answers.push(Answer::from_bytes(c)?);
    }

    Ok(answers)
}


impl Question {

    /// Reads bytes from the given cursor, and parses them into a question.
    fn from_bytes(c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let (qname, _) = c.read_labels()?;
        trace!("Read qname -> {:?}", qname);

        let qtype_number = c.read_u16::<BigEndian>()?;
        trace!("Read qtype number -> {:?}", qtype_number);

        let qtype = RecordType::from(qtype_number);
        trace!("Found qtype -> {:?}", qtype);

        let qclass = QClass::from_u16(c.read_u16::<BigEndian>()?);
        trace!("Read qclass -> {:?}", qclass);

        Ok(Self { qname, qtype, qclass })
    }

    /// Writes this question to the end of the buffer.
    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError> {
        bytes.write_labels(&self.qname)?;
        bytes.write_u16::<BigEndian>(self.qtype.type_number())?;
        bytes.write_u16::<BigEndian>(self.qclass.to_u16())?;
        Ok(())
    }
}


impl Answer {

    /// Reads bytes from the given cursor, and parses them into an answer.
    fn from_bytes(c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let (qname, _) = c.read_labels()?;
        trace!("Read qname -> {:?}", qname);

        let qtype_number = c.read_u16::<BigEndian>()?;
        trace!("Read qtype number -> {:?}", qtype_number);

        let qtype = RecordType::from(qtype_number);
        trace!("Found qtype -> {:?}", qtype);

        let qclass = QClass::from_u16(c.read_u16::<BigEndian>()?);
        trace!("Read qclass -> {:?}", qclass);

        let ttl = c.read_u32::<BigEndian>()?;
        trace!("Read TTL -> {:?}", ttl);

        let record_length = c.read_u16::<BigEndian>()?;
        trace!("Read record length -> {:?}", record_length);

        let record = Record::from_bytes(qtype, record_length, c)?;
        Ok(Self { qname, qclass, ttl, record })
    }

    /// Writes this answer, along with its record data, to the end of the
    /// buffer.
    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError> {
        let rdata = self.record.to_bytes()?;
        let record_length = u16::try_from(rdata.len())
            .map_err(|_| WireError::FieldTooLong { field: "rdata", length: rdata.len() })?;

        bytes.write_labels(&self.qname)?;
        bytes.write_u16::<BigEndian>(self.record.record_type().type_number())?;
        bytes.write_u16::<BigEndian>(self.qclass.to_u16())?;
        bytes.write_u32::<BigEndian>(self.ttl)?;
        bytes.write_u16::<BigEndian>(record_length)?;
        bytes.extend(rdata);
        Ok(())
    }
}


impl Record {

    /// Reads at most `len` bytes from the given curser, and parses them into
    /// a record structure depending on the type number, which has already been read.
    fn from_bytes(record_type: RecordType, len: u16, c: &mut Cursor<&[u8]>) -> Result<Self, WireError> {
        let remaining = (c.get_ref().len() as u64).saturating_sub(c.position());
        if u64::from(len) > remaining {
            warn!("Record claims {} bytes, but only {} remain", len, remaining);
            return Err(WireError::BufferOverrun);
        }

        macro_rules! read_record {
            ($record:tt) => { {
                info!("Parsing {} record (type {}, len {})", crate::record::$record::NAME, record_type.type_number(), len);
                Wire::read(len, c).map(Self::$record)
            } }
        }

        match record_type {
            RecordType::A      => read_record!(A),
            RecordType::AAAA   => read_record!(AAAA),
            RecordType::CNAME  => read_record!(CNAME),
            RecordType::GPOS   => read_record!(GPOS),
            RecordType::HINFO  => read_record!(HINFO),
            RecordType::LOC    => read_record!(LOC),
            RecordType::MX     => read_record!(MX),
            RecordType::NAPTR  => read_record!(NAPTR),
            RecordType::NS     => read_record!(NS),
            RecordType::PTR    => read_record!(PTR),
            RecordType::SOA    => read_record!(SOA),
            RecordType::SPF    => read_record!(SPF),
            RecordType::SRV    => read_record!(SRV),
            RecordType::TXT    => read_record!(TXT),
            RecordType::WKS    => read_record!(WKS),

            RecordType::Other(type_number) => {
                warn!("Skipping {} bytes of {} record", len, type_number);
                c.set_position(c.position() + u64::from(len));
                Ok(Self::Other { type_number })
            }
        }
    }

    /// Converts this record’s data to bytes, without the common fields that
    /// precede it.
    fn to_bytes(&self) -> Result<Vec<u8>, WireError> {
        let mut bytes = Vec::with_capacity(32);

        match self {
            Self::A(a)          => a.write(&mut bytes)?,
            Self::AAAA(aaaa)    => aaaa.write(&mut bytes)?,
            Self::CNAME(cname)  => cname.write(&mut bytes)?,
            Self::GPOS(gpos)    => gpos.write(&mut bytes)?,
            Self::HINFO(hinfo)  => hinfo.write(&mut bytes)?,
            Self::LOC(loc)      => loc.write(&mut bytes)?,
            Self::MX(mx)        => mx.write(&mut bytes)?,
            Self::NAPTR(naptr)  => naptr.write(&mut bytes)?,
            Self::NS(ns)        => ns.write(&mut bytes)?,
            Self::PTR(ptr)      => ptr.write(&mut bytes)?,
            Self::SOA(soa)      => soa.write(&mut bytes)?,
            Self::SPF(spf)      => spf.write(&mut bytes)?,
            Self::SRV(srv)      => srv.write(&mut bytes)?,
            Self::TXT(txt)      => txt.write(&mut bytes)?,
            Self::WKS(wks)      => wks.write(&mut bytes)?,

            Self::Other { type_number } => {
                warn!("Cannot encode a {} record", type_number);
                return Err(WireError::UnsupportedType(type_number.type_number()));
            }
        }

        Ok(bytes)
    }
}


impl QClass {
    fn from_u16(uu: u16) -> Self {
        match uu {
            0x0001 => Self::IN,
            0x0002 => Self::CS,
            0x0003 => Self::CH,
            0x0004 => Self::HS,
            0x00FE => Self::NONE,
            0x00FF => Self::ANY,
                 _ => Self::Other(uu),
        }
    }

    fn to_u16(self) -> u16 {
        match self {
            Self::IN        => 0x0001,
            Self::CS        => 0x0002,
            Self::CH        => 0x0003,
            Self::HS        => 0x0004,
            Self::NONE      => 0x00FE,
            Self::ANY       => 0x00FF,
            Self::Other(uu) => uu,
        }
    }
}


impl Flags {

    /// The set of flags that represents a query packet.
    pub fn query() -> Self {
        Self::from_u16(0b_0000_0001_0000_0000)
    }

    /// The set of flags that represents a successful response.
    pub fn standard_response() -> Self {
        Self::from_u16(0b_1000_0001_1000_0000)
    }

    /// Converts the flags into a two-byte number.
    pub fn to_u16(self) -> u16 {                 // 0123 4567 89AB CDEF
        let mut                          bits  = 0b_0000_0000_0000_0000;
        if self.response               { bits |= 0b_1000_0000_0000_0000; }
        bits |= u16::from(self.opcode.to_bits()) << 11;
        if self.authoritative          { bits |= 0b_0000_0100_0000_0000; }
        if self.truncated              { bits |= 0b_0000_0010_0000_0000; }
        if self.recursion_desired      { bits |= 0b_0000_0001_0000_0000; }
        if self.recursion_available    { bits |= 0b_0000_0000_1000_0000; }
        // (the Z bit is reserved)               0b_0000_0000_0100_0000
        if self.authentic_data         { bits |= 0b_0000_0000_0010_0000; }
        if self.checking_disabled      { bits |= 0b_0000_0000_0001_0000; }
        if let Some(code) = self.error_code {
            bits |= code.to_u16() & 0b_1111;
        }

        bits
    }

    /// Extracts the flags from the given two-byte number.
    pub fn from_u16(bits: u16) -> Self {
        let has_bit = |bit| { bits & bit == bit };

        Self {
            response:               has_bit(0b_1000_0000_0000_0000),
            opcode:                 Opcode::from_bits((bits.to_be_bytes()[0] & 0b_0111_1000) >> 3),
            authoritative:          has_bit(0b_0000_0100_0000_0000),
            truncated:              has_bit(0b_0000_0010_0000_0000),
            recursion_desired:      has_bit(0b_0000_0001_0000_0000),
            recursion_available:    has_bit(0b_0000_0000_1000_0000),
            authentic_data:         has_bit(0b_0000_0000_0010_0000),
            checking_disabled:      has_bit(0b_0000_0000_0001_0000),
            error_code:             ErrorCode::from_u16(bits & 0b_1111),
        }
    }
}


impl Opcode {

    /// Extracts the opcode from this four-bit number, which should have been
    /// extracted from the packet and shifted to be in the range 0–15.
    pub fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::Query,
            1 => Self::InverseQuery,
            2 => Self::Status,
            4 => Self::Notify,
            5 => Self::Update,
            n => Self::Other(n & 0b_1111),
        }
    }

    /// Returns the four bits that represent this opcode in a header.
    pub fn to_bits(self) -> u8 {
        match self {
            Self::Query         => 0,
            Self::InverseQuery  => 1,
            Self::Status        => 2,
            Self::Notify        => 4,
            Self::Update        => 5,
            Self::Other(n)      => n & 0b_1111,
        }
    }
}


/// Trait for encoding and decoding DNS record structures to and from the
/// bytes sent over the wire.
pub trait Wire: Sized {

    /// This record’s type as a string, such as `"A"` or `"CNAME"`.
    const NAME: &'static str;

    /// The number signifying that a record is of this type.
    /// See <https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4>
    const RR_TYPE: u16;

    /// Read at most `len` bytes from the given `Cursor`. This cursor travels
    /// throughout the complete data — by this point, we have read the entire
    /// response into a buffer.
    fn read(len: u16, c: &mut Cursor<&[u8]>) -> Result<Self, WireError>;

    /// Append this record’s data to the buffer, without its length.
    fn write(&self, bytes: &mut Vec<u8>) -> Result<(), WireError>;
}


/// Something that can go wrong encoding or decoding a message.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum WireError {

    /// There was an IO error reading from the cursor.
    /// Almost all the time, this means that the buffer was too short, or a
    /// length field claimed more bytes than were left in it.
    BufferOverrun,
    // (io::Error is not PartialEq so we don’t propagate it)

    /// When the DNS standard requires records of this type to have a certain
    /// fixed length, but the response specified a different length.
    ///
    /// This error should be returned regardless of the _content_ of the
    /// record, whatever it is.
    WrongRecordLength {

        /// The length of the record’s data, as specified in the packet.
        stated_length: u16,

        /// The length of the record that the DNS specification mandates.
        mandated_length: MandatedLength,
    },

    /// When the length of this record as specified in the packet differs from
    /// the computed length, as determined by reading labels.
    ///
    /// The DNS protocol uses both length-prefixed data (each record’s size
    /// is given up-front) and sentinel-terminated data (names keep going
    /// until a zero-length label). When the two disagree, there is no way
    /// to tell which one is wrong, so the record is rejected _after_ having
    /// read as many bytes as its contents asked for.
    WrongLabelLength {

        /// The length of the record’s data, as specified in the packet.
        stated_length: u16,

        /// The computed length of the record’s data, based on the number of
        /// bytes consumed by reading labels from the packet.
        length_after_labels: u16,
    },

    /// When the data contained a name whose compression pointers would never
    /// terminate. Contains the offsets that had already been jumped to.
    PointerLoop(Box<[u16]>),

    /// When the data contained a name with a pointer to an index outside of
    /// the packet. Contains the invalid index.
    OutOfBounds(u16),

    /// When a name contained a label whose length octet starts with one of
    /// the two reserved bit patterns.
    BadLabelType(u8),

    /// When a name to be encoded had two dots in a row, or began with one.
    EmptyLabel,

    /// When a name to be encoded had a backslash that was not followed by
    /// either a character or three decimal digits below 256.
    BadEscape,

    /// When a name would take up more than 255 bytes once encoded.
    NameTooLong(usize),

    /// When one label in a name would be longer than 63 bytes.
    LabelTooLong(usize),

    /// When a field is too long for the length prefix it gets written with.
    FieldTooLong {

        /// Which field is too long.
        field: &'static str,

        /// How long it was.
        length: usize,
    },

    /// When a field’s value cannot be represented in its wire format, or
    /// the text in a field could not be interpreted.
    FieldOutOfRange(&'static str),

    /// When a record in the packet contained a version field that specifies
    /// the format of its remaining fields, but this version is too recent to
    /// be supported, so we cannot parse it.
    WrongVersion {

        /// The version of the record layout, as specified in the packet
        stated_version: u8,

        /// The maximum version that this crate supports.
        maximum_supported_version: u8,
    },

    /// When a message has more than one question.
    TooManyQuestions(u16),

    /// When asked to encode a record of a type we can only skip over.
    UnsupportedType(u16),

    /// When an encoded message would not fit in the space it was given.
    MessageTooLarge {

        /// The length of the encoded message.
        length: usize,

        /// The space that was available.
        capacity: usize,
    },
}

/// The rule for how long a record in a packet should be.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum MandatedLength {

    /// The record should be exactly this many bytes in length.
    Exactly(u16),

    /// The record should be _at least_ this many bytes in length.
    AtLeast(u16),

    /// The record should be _at most_ this many bytes in length.
    AtMost(u16),
}

impl WireError {

    /// The response code that reports this error, either a standard one or
    /// one from the private-use range.
    pub fn rcode(&self) -> u16 {
        match self {
            Self::BufferOverrun              |
            Self::WrongRecordLength { .. }   |
            Self::WrongLabelLength { .. }    |
            Self::OutOfBounds(_)             |
            Self::BadLabelType(_)            |
            Self::FieldOutOfRange(_)         |
            Self::WrongVersion { .. }        |
            Self::TooManyQuestions(_)        => ErrorCode::FormatError.to_u16(),
            Self::UnsupportedType(_)         => ErrorCode::NotImplemented.to_u16(),
            Self::PointerLoop(_)             => RCODE_POINTER_LOOP,
            Self::EmptyLabel                 |
            Self::BadEscape                  |
            Self::NameTooLong(_)             |
            Self::LabelTooLong(_)            => RCODE_BAD_NAME,
            Self::FieldTooLong { .. }        => RCODE_FIELD_TOO_LONG,
            Self::MessageTooLarge { .. }     => RCODE_BUFFER_TOO_SMALL,
        }
    }
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", rcode_to_text(self.rcode()))?;

        match self {
            Self::BufferOverrun => {
                write!(f, "insufficient data")
            }
            Self::WrongRecordLength { stated_length, mandated_length: MandatedLength::Exactly(len) } => {
                write!(f, "record length should be {}, got {}", len, stated_length)
            }
            Self::WrongRecordLength { stated_length, mandated_length: MandatedLength::AtLeast(len) } => {
                write!(f, "record length should be at least {}, got {}", len, stated_length)
            }
            Self::WrongRecordLength { stated_length, mandated_length: MandatedLength::AtMost(len) } => {
                write!(f, "record length should be at most {}, got {}", len, stated_length)
            }
            Self::WrongLabelLength { stated_length, length_after_labels } => {
                write!(f, "length {} was specified, but read {} bytes", stated_length, length_after_labels)
            }
            Self::PointerLoop(offsets) => {
                write!(f, "pointers loop through {:?}", offsets)
            }
            Self::OutOfBounds(offset) => {
                write!(f, "pointer out of bounds ({})", offset)
            }
            Self::BadLabelType(byte) => {
                write!(f, "unknown label type {:#04x}", byte)
            }
            Self::EmptyLabel => {
                write!(f, "name contains an empty label")
            }
            Self::BadEscape => {
                write!(f, "name contains an invalid escape")
            }
            Self::NameTooLong(length) => {
                write!(f, "name is {} bytes long, limit is 255", length)
            }
            Self::LabelTooLong(length) => {
                write!(f, "label is {} bytes long, limit is 63", length)
            }
            Self::FieldTooLong { field, length } => {
                write!(f, "{} is {} long", field, length)
            }
            Self::FieldOutOfRange(field) => {
                write!(f, "invalid {}", field)
            }
            Self::WrongVersion { stated_version, maximum_supported_version } => {
                write!(f, "record specifies version {}, expected up to {}", stated_version, maximum_supported_version)
            }
            Self::TooManyQuestions(count) => {
                write!(f, "{} questions, expected at most one", count)
            }
            Self::UnsupportedType(type_number) => {
                write!(f, "cannot encode records of type {}", type_number)
            }
            Self::MessageTooLarge { length, capacity } => {
                write!(f, "message is {} bytes, buffer holds {}", length, capacity)
            }
        }
    }
}

impl std::error::Error for WireError {}

impl From<io::Error> for WireError {
    fn from(ioe: io::Error) -> Self {
        error!("IO error -> {:?}", ioe);
        Self::BufferOverrun
    }
}
