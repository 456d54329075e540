//! DNS queries and responses share a single message format: a header, at
//! most one question, and three sections of resource records. Requests
//! simply have empty record sections.

use std::collections::HashMap;
use std::fmt;

use crate::record::{Record, RecordType};


/// A DNS message, either a query that gets sent out over a transport or a
/// response that was received from one.
///
/// The four section counts in the header are not stored here: they are
/// computed from the lengths of the lists whenever the message is encoded,
/// so they can never disagree with the contents.
#[derive(PartialEq, Debug, Clone)]
pub struct Message {

    /// The transaction ID of this message. This is used to make sure
    /// different DNS packets don’t answer each other’s questions.
    pub transaction_id: u16,

    /// The flags that accompany every DNS packet.
    pub flags: Flags,

    /// The question that this message is asking or answering. Only one
    /// question is allowed per message, as traditionally, DNS servers only
    /// respond to the first question in a packet.
    pub question: Option<Question>,

    /// The answers section.
    pub answers: Vec<Answer>,

    /// The authoritative nameservers section.
    pub authorities: Vec<Answer>,

    /// The additional records section.
    pub additionals: Vec<Answer>,
}


/// A DNS question section.
#[derive(PartialEq, Debug, Clone)]
pub struct Question {

    /// The domain name being queried, in human-readable dotted notation.
    pub qname: String,

    /// The type number.
    pub qtype: RecordType,

    /// The class number.
    pub qclass: QClass,
}


/// A resource record from the answer, authority, or additional section.
#[derive(PartialEq, Debug, Clone)]
pub struct Answer {

    /// The domain name this record belongs to.
    pub qname: String,

    /// This record’s class.
    pub qclass: QClass,

    /// The time-to-live duration, in seconds.
    pub ttl: u32,

    /// The record contained in this answer. Its variant determines the
    /// type number that gets written.
    pub record: Record,
}


/// A DNS record class. Of these, the only one that’s in regular use anymore
/// is the Internet class.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum QClass {

    /// The **Internet** class.
    IN,

    /// The **CSNET** class, which is obsolete.
    CS,

    /// The **Chaosnet** class.
    CH,

    /// The **Hesiod** class.
    HS,

    /// The **NONE** class, used in dynamic updates.
    NONE,

    /// The **ANY** query class.
    ANY,

    /// A class number that does not map to any known class.
    Other(u16),
}


/// The flags that accompany every DNS packet.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Flags {

    /// Whether this packet is a response packet.
    pub response: bool,

    /// The operation being performed.
    pub opcode: Opcode,

    /// In a response, whether the server is providing authoritative DNS responses.
    pub authoritative: bool,

    /// In a response, whether this message has been truncated by the transport.
    pub truncated: bool,

    /// In a query, whether the server may query other nameservers recursively.
    /// It is up to the server whether it will actually do this.
    pub recursion_desired: bool,

    /// In a response, whether the server allows recursive query support.
    pub recursion_available: bool,

    /// In a response, whether the server is marking this data as authentic.
    pub authentic_data: bool,

    /// In a request, whether the server should disable its authenticity
    /// checking for the request’s queries.
    pub checking_disabled: bool,

    /// In a response, a code indicating an error if one occurred.
    pub error_code: Option<ErrorCode>,
}


/// A number representing the operation being performed.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Opcode {

    /// This request is a standard query, or this response is answering a
    /// standard query.
    Query,

    /// An inverse query, which has been obsolete since RFC 3425.
    InverseQuery,

    /// A server status request.
    Status,

    /// A zone change notification (RFC 1996).
    Notify,

    /// A dynamic update (RFC 2136).
    Update,

    /// Any other opcode. This can be from 0 to 15, as the opcode field is
    /// four bits wide, although decoding never produces the numbers that
    /// have a named variant.
    Other(u8),
}


/// A code indicating an error.
///
/// Only the lower four bits of this fit in a message header. The codes in
/// the private-use range never appear on the wire: they are how this crate
/// reports its own encoding and decoding failures.
///
/// # References
///
/// - [RFC 6895 §2.3](https://tools.ietf.org/html/rfc6895#section-2.3) — Domain
///   Name System (DNS) IANA Considerations (April 2013)
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ErrorCode {

    /// `FormErr` — The server was unable to interpret the query.
    FormatError,

    /// `ServFail` — There was a problem with the server.
    ServerFailure,

    /// `NXDomain` — The domain name referenced in the query does not exist.
    NXDomain,

    /// `NotImp` — The server does not support one of the requested features.
    NotImplemented,

    /// `Refused` — The server was able to interpret the query, but refused to
    /// fulfil it.
    QueryRefused,

    /// `YXDomain` — A name exists when it should not.
    YXDomain,

    /// `YXRRSet` — An RR set exists when it should not.
    YXRRSet,

    /// `NXRRSet` — An RR set that should exist does not.
    NXRRSet,

    /// `NotAuth` — The server is not authoritative for the zone.
    NotAuth,

    /// `NotZone` — A name is not contained in the zone.
    NotZone,

    /// `BADVERS` and `BADSIG` — The server did not accept the EDNS version,
    /// or failed to verify a signature. The same code is used for both.
    BadVersion,

    /// An error code with no currently-defined meaning.
    Other(u16),

    /// An error code within the ‘Reserved for Private Use’ range.
    Private(u16),
}


/// The private-use code for a domain name that could not be encoded or
/// decoded because of its size or shape.
pub const RCODE_BAD_NAME: u16 = 0x0F01;

/// The private-use code for a domain name whose compression pointers loop.
pub const RCODE_POINTER_LOOP: u16 = 0x0F02;

/// The private-use code for a record field too long for its length prefix.
pub const RCODE_FIELD_TOO_LONG: u16 = 0x0F03;

/// The private-use code for an encoded message that exceeds the capacity
/// it was given.
pub const RCODE_BUFFER_TOO_SMALL: u16 = 0x0F04;


impl Message {

    /// The number of questions that will be written in the header.
    pub fn question_count(&self) -> u16 {
        u16::from(self.question.is_some())
    }

    /// The number of answer records that will be written in the header.
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// The number of authority records that will be written in the header.
    pub fn authority_count(&self) -> usize {
        self.authorities.len()
    }

    /// The number of additional records that will be written in the header.
    pub fn additional_count(&self) -> usize {
        self.additionals.len()
    }

    /// Indexes the additional section by owner name, for looking up the
    /// glue that goes with an answer. When more than one record shares a
    /// name, the one that appears last in the section wins.
    pub fn additionals_by_name(&self) -> HashMap<&str, &Answer> {
        let mut index = HashMap::with_capacity(self.additionals.len());
        for additional in &self.additionals {
            index.insert(additional.qname.as_str(), additional);
        }
        index
    }
}


impl Question {

    /// Creates a question for the given name and type in the Internet class.
    pub fn new(qname: impl Into<String>, qtype: RecordType) -> Self {
        Self { qname: qname.into(), qtype, qclass: QClass::IN }
    }
}


impl Answer {

    /// The type of the record this answer contains.
    pub fn record_type(&self) -> RecordType {
        self.record.record_type()
    }
}


impl QClass {

    /// Searches the class mnemonics for the given name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        CLASSES.iter()
               .find(|(n, _)| n.eq_ignore_ascii_case(name))
               .map(|(_, class)| *class)
    }

    /// Returns the mnemonic for this class, if it has one.
    pub fn name(self) -> Option<&'static str> {
        CLASSES.iter()
               .find(|(_, class)| *class == self)
               .map(|(n, _)| *n)
    }
}

impl Default for QClass {
    fn default() -> Self {
        Self::IN
    }
}

impl fmt::Display for QClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name(), self) {
            (Some(name), _)            => write!(f, "{}", name),
            (None, Self::Other(num))   => write!(f, "CLASS{}", num),
            (None, _)                  => unreachable!("every named class is in the table"),
        }
    }
}

static CLASSES: &[(&str, QClass)] = &[
    ("IN",   QClass::IN),
    ("CS",   QClass::CS),
    ("CH",   QClass::CH),
    ("HS",   QClass::HS),
    ("NONE", QClass::NONE),
    ("ANY",  QClass::ANY),
];


impl Opcode {

    /// Searches the opcode mnemonics for the given name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        OPCODES.iter()
               .find(|(n, _)| n.eq_ignore_ascii_case(name))
               .map(|(_, opcode)| *opcode)
    }

    /// Returns the mnemonic for this opcode, if it has one.
    pub fn name(self) -> Option<&'static str> {
        OPCODES.iter()
               .find(|(_, opcode)| *opcode == self)
               .map(|(n, _)| *n)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name(), self) {
            (Some(name), _)            => write!(f, "{}", name),
            (None, Self::Other(num))   => write!(f, "OPCODE{}", num),
            (None, _)                  => unreachable!("every named opcode is in the table"),
        }
    }
}

static OPCODES: &[(&str, Opcode)] = &[
    ("QUERY",  Opcode::Query),
    ("IQUERY", Opcode::InverseQuery),
    ("STATUS", Opcode::Status),
    ("NOTIFY", Opcode::Notify),
    ("UPDATE", Opcode::Update),
];


/// Returns a human-readable description of a response code, or of one of
/// the private-use codes that describe encoding and decoding failures.
///
/// This accepts any number and never fails: codes without a meaning get a
/// generic description.
pub fn rcode_to_text(code: u16) -> &'static str {
    match code {
        0 => "No error",
        1 => "Format error",
        2 => "Server failure",
        3 => "Non-existent domain",
        4 => "Not implemented",
        5 => "Query refused",
        6 => "Name exists when it should not",
        7 => "RR set exists when it should not",
        8 => "RR set that should exist does not",
        9 => "Server not authoritative for zone",
       10 => "Name not contained in zone",
       16 => "Bad OPT version or TSIG signature failure",
       17 => "Key not recognized",
       18 => "Signature out of time window",
       19 => "Bad TKEY mode",
       20 => "Duplicate key name",
       21 => "Algorithm not supported",
       22 => "Bad truncation",
       RCODE_BAD_NAME          => "Bad domain name",
       RCODE_POINTER_LOOP      => "Domain name compression loop",
       RCODE_FIELD_TOO_LONG    => "Record field too long",
       RCODE_BUFFER_TOO_SMALL  => "Message too large for buffer",
        _ => "Unknown error",
    }
}


impl ErrorCode {

    /// Interprets a response code number, returning `None` for zero, which
    /// means there was no error.
    pub fn from_u16(bits: u16) -> Option<Self> {
        if (0x0F01 ..= 0x0FFF).contains(&bits) {
            return Some(Self::Private(bits));
        }

        match bits {
            0 => None,
            1 => Some(Self::FormatError),
            2 => Some(Self::ServerFailure),
            3 => Some(Self::NXDomain),
            4 => Some(Self::NotImplemented),
            5 => Some(Self::QueryRefused),
            6 => Some(Self::YXDomain),
            7 => Some(Self::YXRRSet),
            8 => Some(Self::NXRRSet),
            9 => Some(Self::NotAuth),
           10 => Some(Self::NotZone),
           16 => Some(Self::BadVersion),
            n => Some(Self::Other(n)),
        }
    }

    /// Returns the number behind this code.
    pub fn to_u16(self) -> u16 {
        match self {
            Self::FormatError     => 1,
            Self::ServerFailure   => 2,
            Self::NXDomain        => 3,
            Self::NotImplemented  => 4,
            Self::QueryRefused    => 5,
            Self::YXDomain        => 6,
            Self::YXRRSet         => 7,
            Self::NXRRSet         => 8,
            Self::NotAuth         => 9,
            Self::NotZone         => 10,
            Self::BadVersion      => 16,
            Self::Other(n)        |
            Self::Private(n)      => n,
        }
    }

    /// A human-readable description of this code.
    pub fn text(self) -> &'static str {
        rcode_to_text(self.to_u16())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
