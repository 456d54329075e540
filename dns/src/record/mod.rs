//! All the DNS record types, as well as how to parse each type.

use std::fmt;

use crate::wire::*;


mod a;
pub use self::a::A;

mod aaaa;
pub use self::aaaa::AAAA;

mod angle;
pub use self::angle::{Angle, Hemisphere};

mod cname;
pub use self::cname::CNAME;

mod gpos;
pub use self::gpos::GPOS;

mod hinfo;
pub use self::hinfo::HINFO;

mod loc;
pub use self::loc::{LOC, Size};

mod mx;
pub use self::mx::MX;

mod naptr;
pub use self::naptr::NAPTR;

mod ns;
pub use self::ns::NS;

mod ptr;
pub use self::ptr::PTR;

mod soa;
pub use self::soa::SOA;

mod srv;
pub use self::srv::SRV;

mod txt;
pub use self::txt::{TXT, SPF};

mod wks;
pub use self::wks::WKS;


mod others;
pub use self::others::UnknownQtype;

mod utils;


/// A record that’s been parsed from a byte buffer, or that is about to be
/// written to one.
#[derive(PartialEq, Debug, Clone)]
pub enum Record {

    /// An **A** record.
    A(A),

    /// An **AAAA** record.
    AAAA(AAAA),

    /// A **CNAME** record.
    CNAME(CNAME),

    /// A **GPOS** record.
    GPOS(GPOS),

    /// A **HINFO** record.
    HINFO(HINFO),

    /// A **LOC** record.
    LOC(LOC),

    /// A **MX** record.
    MX(MX),

    /// A **NAPTR** record.
    NAPTR(NAPTR),

    /// A **NS** record.
    NS(NS),

    /// A **PTR** record.
    PTR(PTR),

    /// A **SOA** record.
    SOA(SOA),

    /// A **SPF** record.
    SPF(SPF),

    /// A **SRV** record.
    SRV(SRV),

    /// A **TXT** record.
    TXT(TXT),

    /// A **WKS** record.
    WKS(WKS),

    /// A record with a type that we don’t parse. Its data gets skipped over,
    /// so records like this cannot be written back out.
    Other {

        /// The number that’s meant to represent the record type.
        type_number: UnknownQtype,
    },
}

impl Record {

    /// The type of this record.
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::A(_)      => RecordType::A,
            Self::AAAA(_)   => RecordType::AAAA,
            Self::CNAME(_)  => RecordType::CNAME,
            Self::GPOS(_)   => RecordType::GPOS,
            Self::HINFO(_)  => RecordType::HINFO,
            Self::LOC(_)    => RecordType::LOC,
            Self::MX(_)     => RecordType::MX,
            Self::NAPTR(_)  => RecordType::NAPTR,
            Self::NS(_)     => RecordType::NS,
            Self::PTR(_)    => RecordType::PTR,
            Self::SOA(_)    => RecordType::SOA,
            Self::SPF(_)    => RecordType::SPF,
            Self::SRV(_)    => RecordType::SRV,
            Self::TXT(_)    => RecordType::TXT,
            Self::WKS(_)    => RecordType::WKS,
            Self::Other { type_number } => RecordType::Other(*type_number),
        }
    }
}


/// The type of a record, which gets sent in questions as well as records.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
#[allow(missing_docs)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    GPOS,
    HINFO,
    LOC,
    MX,
    NAPTR,
    NS,
    PTR,
    SOA,
    SPF,
    SRV,
    TXT,
    WKS,

    /// A type that records do not get parsed for.
    Other(UnknownQtype),
}

impl From<u16> for RecordType {
    fn from(type_number: u16) -> Self {
        macro_rules! try_record {
            ($record:tt) => {
                if $record::RR_TYPE == type_number {
                    return RecordType::$record;
                }
            }
        }

        try_record!(A);
        try_record!(AAAA);
        try_record!(CNAME);
        try_record!(GPOS);
        try_record!(HINFO);
        try_record!(LOC);
        try_record!(MX);
        try_record!(NAPTR);
        try_record!(NS);
        try_record!(PTR);
        try_record!(SOA);
        try_record!(SPF);
        try_record!(SRV);
        try_record!(TXT);
        try_record!(WKS);

        RecordType::Other(UnknownQtype::from(type_number))
    }
}

impl RecordType {

    /// Determines the record type with a given name, or `None` if none is
    /// known. Matches names case-insensitively.
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        macro_rules! try_record {
            ($record:tt) => {
                if $record::NAME.eq_ignore_ascii_case(type_name) {
                    return Some(Self::$record);
                }
            }
        }

        try_record!(A);
        try_record!(AAAA);
        try_record!(CNAME);
        try_record!(GPOS);
        try_record!(HINFO);
        try_record!(LOC);
        try_record!(MX);
        try_record!(NAPTR);
        try_record!(NS);
        try_record!(PTR);
        try_record!(SOA);
        try_record!(SPF);
        try_record!(SRV);
        try_record!(TXT);
        try_record!(WKS);

        UnknownQtype::from_type_name(type_name).map(Self::Other)
    }

    /// Returns the record type number associated with this record type.
    pub fn type_number(self) -> u16 {
        match self {
            Self::A      => A::RR_TYPE,
            Self::AAAA   => AAAA::RR_TYPE,
            Self::CNAME  => CNAME::RR_TYPE,
            Self::GPOS   => GPOS::RR_TYPE,
            Self::HINFO  => HINFO::RR_TYPE,
            Self::LOC    => LOC::RR_TYPE,
            Self::MX     => MX::RR_TYPE,
            Self::NAPTR  => NAPTR::RR_TYPE,
            Self::NS     => NS::RR_TYPE,
            Self::PTR    => PTR::RR_TYPE,
            Self::SOA    => SOA::RR_TYPE,
            Self::SPF    => SPF::RR_TYPE,
            Self::SRV    => SRV::RR_TYPE,
            Self::TXT    => TXT::RR_TYPE,
            Self::WKS    => WKS::RR_TYPE,
            Self::Other(o) => o.type_number(),
        }
    }

    /// The mnemonic for this type, if it has one.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::A      => Some(A::NAME),
            Self::AAAA   => Some(AAAA::NAME),
            Self::CNAME  => Some(CNAME::NAME),
            Self::GPOS   => Some(GPOS::NAME),
            Self::HINFO  => Some(HINFO::NAME),
            Self::LOC    => Some(LOC::NAME),
            Self::MX     => Some(MX::NAME),
            Self::NAPTR  => Some(NAPTR::NAME),
            Self::NS     => Some(NS::NAME),
            Self::PTR    => Some(PTR::NAME),
            Self::SOA    => Some(SOA::NAME),
            Self::SPF    => Some(SPF::NAME),
            Self::SRV    => Some(SRV::NAME),
            Self::TXT    => Some(TXT::NAME),
            Self::WKS    => Some(WKS::NAME),
            Self::Other(UnknownQtype::HeardOf(name, _)) => Some(name),
            Self::Other(UnknownQtype::UnheardOf(_))     => None,
        }
    }
}

impl Default for RecordType {
    fn default() -> Self {
        Self::A
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(unknown) => write!(f, "{}", unknown),
            known                => write!(f, "{}", known.name().unwrap_or_default()),
        }
    }
}
