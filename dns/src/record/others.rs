use std::fmt;


/// A number representing a record type that can be queried for, but whose
/// records get skipped over rather than parsed.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum UnknownQtype {

    /// A type number with a well-known mnemonic.
    HeardOf(&'static str, u16),

    /// A completely unknown type number.
    UnheardOf(u16),
}

impl UnknownQtype {

    /// Searches the list for an unknown type with the given name, returning a
    /// `HeardOf` variant if one is found, and `None` otherwise.
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        let (name, num) = TYPES.iter().find(|t| t.0.eq_ignore_ascii_case(type_name))?;
        Some(Self::HeardOf(name, *num))
    }

    /// Returns the type number behind this unknown type.
    pub fn type_number(self) -> u16 {
        match self {
            Self::HeardOf(_, num) |
            Self::UnheardOf(num)  => num,
        }
    }
}

impl From<u16> for UnknownQtype {
    fn from(qtype: u16) -> Self {
        match TYPES.iter().find(|t| t.1 == qtype) {
            Some(tuple)  => Self::HeardOf(tuple.0, qtype),
            None         => Self::UnheardOf(qtype),
        }
    }
}

impl fmt::Display for UnknownQtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeardOf(name, _)  => write!(f, "{}", name),
            Self::UnheardOf(num)    => write!(f, "TYPE{}", num),
        }
    }
}


/// Mapping of record type names to their assigned numbers, for the types
/// that have no record structure of their own.
static TYPES: &[(&str, u16)] = &[
    ("MD",          3),
    ("MF",          4),
    ("MB",          7),
    ("MG",          8),
    ("MR",          9),
    ("NULL",       10),
    ("MINFO",      14),
    ("RP",         17),
    ("AFSDB",      18),
    ("X25",        19),
    ("ISDN",       20),
    ("RT",         21),
    ("NSAP",       22),
    ("NSAP-PTR",   23),
    ("SIG",        24),
    ("KEY",        25),
    ("PX",         26),
    ("NXT",        30),
    ("EID",        31),
    ("NIMLOC",     32),
    ("ATMA",       34),
    ("KX",         36),
    ("CERT",       37),
    ("A6",         38),
    ("DNAME",      39),
    ("SINK",       40),
    ("OPT",        41),
    ("APL",        42),
    ("DS",         43),
    ("SSHFP",      44),
    ("IPSECKEY",   45),
    ("RRSIG",      46),
    ("NSEC",       47),
    ("DNSKEY",     48),
    ("DHCID",      49),
    ("NSEC3",      50),
    ("NSEC3PARAM", 51),
    ("TLSA",       52),
    ("SMIMEA",     53),
    ("HIP",        55),
    ("CDS",        59),
    ("CDNSKEY",    60),
    ("OPENPGPKEY", 61),
    ("CSYNC",      62),
    ("ZONEMD",     63),
    ("SVCB",       64),
    ("HTTPS",      65),
    ("UINFO",     100),
    ("UID",       101),
    ("GID",       102),
    ("UNSPEC",    103),
    ("EUI48",     108),
    ("EUI64",     109),
    ("TKEY",      249),
    ("TSIG",      250),
    ("IXFR",      251),
    ("AXFR",      252),
    ("MAILB",     253),
    ("MAILA",     254),
    ("ANY",       255),
    ("URI",       256),
    ("CAA",       257),
    ("TA",      32768),
    ("DLV",     32769),
];
