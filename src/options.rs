//! Command-line option parsing.

use std::ffi::OsStr;
use std::fmt;

use log::*;

use dns::{Opcode, QClass};
use dns::record::RecordType;
use dns_transport::UdpTransport;

use crate::logger;
use crate::output::{OutputFormat, UseColours, TextFormat};
use crate::requests::{RequestGenerator, Inputs, ProtocolTweaks};
use crate::txid::TxidGenerator;


/// The command-line options used when running dnswire.
#[derive(PartialEq, Debug)]
pub struct Options {

    /// The questions to ask, and the header every request carries.
    pub requests: RequestGenerator,

    /// Whether to print the total time spent on the exchanges (`--time`).
    pub measure_time: bool,

    /// Whether to hex-dump the datagrams going each way (`--dump`).
    pub dump_bytes: bool,

    /// Text, short, or JSON.
    pub format: OutputFormat,
}

impl Options {

    /// Reads the command-line arguments. Asking for help or the version
    /// wins over everything else, and a query needs at least one domain
    /// and exactly one nameserver.
    #[allow(unused_results)]
    pub fn getopts<C>(args: C) -> OptionsResult
    where C: IntoIterator,
          C::Item: AsRef<OsStr>,
    {
        let mut opts = getopts::Options::new();

        // Question
        opts.optmulti("q", "query",       "Domain name to ask about", "DOMAIN");
        opts.optmulti("t", "type",        "Record type, by mnemonic (MX), TYPEn, or number", "TYPE");
        opts.optmulti("",  "class",       "Record class, by mnemonic (IN, CH, ANY...), CLASSn, or number", "CLASS");
        opts.optmulti("n", "nameserver",  "IP address of the nameserver, with an optional port", "ADDR");

        // Header
        opts.optopt  ("",  "txid",         "Transaction ID of the first request, in decimal or 0x hex", "ID");
        opts.optopt  ("",  "opcode",       "Opcode by mnemonic (QUERY, NOTIFY, UPDATE...) or number", "OPCODE");
        opts.optmulti("Z", "",             "Set a header flag (aa, ad, cd) or clear RD (norec)", "FLAG");

        // Output
        opts.optopt  ("",  "color",        "When to colour the output (always, auto, never)", "WHEN");
        opts.optopt  ("",  "colour",       "When to colour the output (always, auto, never)", "WHEN");
        opts.optflag ("J", "json",         "Print every response as JSON");
        opts.optflag ("",  "seconds",      "Print durations as plain seconds");
        opts.optflag ("1", "short",        "Print only the first answer of each response");
        opts.optflag ("",  "time",         "Print how long the exchanges took");
        opts.optflag ("",  "dump",         "Hex-dump every request and response to stderr");

        opts.optflag ("V", "version",      "Print the version and exit");
        opts.optflagmulti ("v", "",        "Log more, twice for trace output (-vv)");
        opts.optflag ("?", "help",         "Print the usage text and exit");

        let matches = match opts.parse(args) {
            Ok(m)  => m,
            Err(e) => return OptionsResult::InvalidOptionsFormat(e),
        };

        let uc = UseColours::deduce(&matches);

        match matches.opt_count("v") {
            0 => (),
            1 => logger::configure(Some("debug")),
            _ => logger::configure(Some("trace")),
        }

        if matches.opt_present("version") {
            OptionsResult::Version(uc)
        }
        else if matches.opt_present("help") {
            OptionsResult::Help(HelpReason::Flag, uc)
        }
        else {
            match Self::deduce(matches) {
                Ok(opts) => {
                    if opts.requests.inputs.domains.is_empty() {
                        OptionsResult::Help(HelpReason::NoDomains, uc)
                    }
                    else if opts.requests.inputs.nameserver.is_none() {
                        OptionsResult::InvalidOptions(OptionsError::MissingNameserver)
                    }
                    else {
                        OptionsResult::Ok(opts)
                    }
                }
                Err(e) => {
                    OptionsResult::InvalidOptions(e)
                }
            }
        }
    }

    fn deduce(matches: getopts::Matches) -> Result<Self, OptionsError> {
        let measure_time = matches.opt_present("time");
        let dump_bytes = matches.opt_present("dump");
        let format = OutputFormat::deduce(&matches);
        let requests = RequestGenerator::deduce(matches)?;

        Ok(Self { requests, measure_time, dump_bytes, format })
    }
}


impl RequestGenerator {
    fn deduce(matches: getopts::Matches) -> Result<Self, OptionsError> {
        let txid_generator = TxidGenerator::deduce(&matches)?;
        let opcode = deduce_opcode(&matches)?;
        let protocol_tweaks = ProtocolTweaks::deduce(&matches)?;
        let inputs = Inputs::deduce(matches)?;

        Ok(Self { inputs, txid_generator, opcode, protocol_tweaks })
    }
}


impl Inputs {
    fn deduce(matches: getopts::Matches) -> Result<Self, OptionsError> {
        let mut inputs = Self::default();
        inputs.load_named_args(&matches)?;
        inputs.load_free_args(matches)?;
        inputs.load_fallbacks();
        Ok(inputs)
    }

    fn load_named_args(&mut self, matches: &getopts::Matches) -> Result<(), OptionsError> {
        for domain in matches.opt_strs("query") {
            self.add_domain(&domain)?;
        }

        for qtype in matches.opt_strs("type") {
            self.add_type(&qtype)?;
        }

        for ns in matches.opt_strs("nameserver") {
            self.add_nameserver(&ns)?;
        }

        for qclass in matches.opt_strs("class") {
            self.add_class(&qclass)?;
        }

        Ok(())
    }

    fn add_domain(&mut self, input: &str) -> Result<(), OptionsError> {
        let domain = to_ascii(input)?;

        match dns::encode_name(&domain) {
            Ok(_) => {
                self.domains.push(domain);
                Ok(())
            }
            Err(e) => {
                warn!("Domain {:?} cannot be encoded: {}", input, e);
                Err(OptionsError::InvalidDomain(input.into()))
            }
        }
    }

    fn add_type(&mut self, input: &str) -> Result<(), OptionsError> {
        let qtype = RecordType::from_type_name(input)
            .or_else(|| input.strip_prefix("TYPE").and_then(|num| num.parse::<u16>().ok()).map(RecordType::from))
            .or_else(|| input.parse::<u16>().ok().map(RecordType::from));

        match qtype {
            Some(qtype)  => Ok(self.types.push(qtype)),
            None         => Err(OptionsError::InvalidQueryType(input.into())),
        }
    }

    fn add_nameserver(&mut self, input: &str) -> Result<(), OptionsError> {
        if self.nameserver.is_some() {
            return Err(OptionsError::TooManyNameservers);
        }

        if let Err(e) = UdpTransport::new(input) {
            debug!("Rejecting nameserver: {}", e);
            return Err(OptionsError::InvalidNameserver(input.into()));
        }

        self.nameserver = Some(input.into());
        Ok(())
    }

    fn parse_class_name(&self, input: &str) -> Option<QClass> {
        QClass::from_name(input)
    }

    fn add_class(&mut self, input: &str) -> Result<(), OptionsError> {
        let qclass = self.parse_class_name(input)
            .or_else(|| input.strip_prefix("CLASS").and_then(|num| num.parse().ok()).map(QClass::Other))
            .or_else(|| input.parse().ok().map(QClass::Other));

        match qclass {
            Some(c)  => Ok(self.classes.push(c)),
            None     => Err(OptionsError::InvalidQueryClass(input.into())),
        }
    }

    fn load_free_args(&mut self, matches: getopts::Matches) -> Result<(), OptionsError> {
        for a in matches.free {
            if let Some(nameserver) = a.strip_prefix('@') {
                trace!("Got nameserver -> {:?}", nameserver);
                self.add_nameserver(nameserver)?;
            }
            else if is_mnemonic(&a) {
                // ANY names both a class and a type, and means the type here
                let is_type = RecordType::from_type_name(&a).is_some();

                if let Some(class) = self.parse_class_name(&a).filter(|_| ! is_type) {
                    trace!("Got qclass -> {:?}", &a);
                    self.classes.push(class);
                }
                else {
                    trace!("Got qtype -> {:?}", &a);
                    self.add_type(&a)?;
                }
            }
            else {
                trace!("Got domain -> {:?}", &a);
                self.add_domain(&a)?;
            }
        }

        Ok(())
    }

    fn load_fallbacks(&mut self) {
        if self.types.is_empty() {
            self.types.push(RecordType::A);
        }

        if self.classes.is_empty() {
            self.classes.push(QClass::IN);
        }
    }
}

/// Whether a free argument looks like a type or class mnemonic, such as
/// `MX` or `TYPE65`, rather than a domain name.
fn is_mnemonic(input: &str) -> bool {
    input.starts_with(|c: char| c.is_ascii_uppercase())
        && input.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

#[cfg(feature = "with_idna")]
fn to_ascii(input: &str) -> Result<String, OptionsError> {
    dns::idna_to_ascii(input).ok_or_else(|| OptionsError::InvalidDomain(input.into()))
}

#[cfg(not(feature = "with_idna"))]
fn to_ascii(input: &str) -> Result<String, OptionsError> {
    Ok(input.into())
}


impl TxidGenerator {
    fn deduce(matches: &getopts::Matches) -> Result<Self, OptionsError> {
        match matches.opt_str("txid") {
            None         => Ok(Self::Random),
            Some(input)  => parse_txid(&input).map(Self::Sequence).ok_or(OptionsError::InvalidTxid(input)),
        }
    }
}

/// Reads a transaction ID, either in decimal or as hex after `0x`.
fn parse_txid(input: &str) -> Option<u16> {
    let parsed = match input.strip_prefix("0x") {
        Some(hex)  => u16::from_str_radix(hex, 16),
        None       => input.parse(),
    };

    parsed.map_err(|e| warn!("Could not read transaction ID {:?}: {}", input, e)).ok()
}

fn deduce_opcode(matches: &getopts::Matches) -> Result<Opcode, OptionsError> {
    let input = match matches.opt_str("opcode") {
        Some(i)  => i,
        None     => return Ok(Opcode::Query),
    };

    if let Some(opcode) = Opcode::from_name(&input) {
        return Ok(opcode);
    }

    match input.parse::<u8>() {
        Ok(num) if num <= 15  => Ok(Opcode::from_bits(num)),
        _                     => Err(OptionsError::InvalidOpcode(input)),
    }
}


impl OutputFormat {
    fn deduce(matches: &getopts::Matches) -> Self {
        let text_format = TextFormat::deduce(matches);

        // --short wins over --json
        if matches.opt_present("short") {
            Self::Short(text_format)
        }
        else if matches.opt_present("json") {
            Self::JSON
        }
        else {
            Self::Text(UseColours::deduce(matches), text_format)
        }
    }
}


impl UseColours {
    fn deduce(matches: &getopts::Matches) -> Self {
        let setting = matches.opt_str("color").or_else(|| matches.opt_str("colour"));

        match setting.as_deref() {
            None | Some("" | "auto" | "automatic")  => Self::Automatic,
            Some("always" | "yes")                  => Self::Always,
            Some("never" | "no")                    => Self::Never,
            Some(otherwise) => {
                warn!("Unknown colour setting {:?}, colouring automatically", otherwise);
                Self::Automatic
            }
        }
    }
}


impl TextFormat {
    fn deduce(matches: &getopts::Matches) -> Self {
        Self { format_durations: ! matches.opt_present("seconds") }
    }
}


impl ProtocolTweaks {
    fn deduce(matches: &getopts::Matches) -> Result<Self, OptionsError> {
        let mut tweaks = Self::default();

        for flag in matches.opt_strs("Z") {
            let setting = match flag.as_str() {
                "aa"     | "authoritative"      => &mut tweaks.set_authoritative_flag,
                "ad"     | "authentic"          => &mut tweaks.set_authentic_flag,
                "cd"     | "checking-disabled"  => &mut tweaks.set_checking_disabled_flag,
                "norec"  | "no-recursion"       => &mut tweaks.unset_recursion_desired_flag,
                _                               => return Err(OptionsError::InvalidTweak(flag)),
            };

            *setting = true;
        }

        Ok(tweaks)
    }
}


/// What `Options::getopts` made of the arguments.
#[derive(PartialEq, Debug)]
pub enum OptionsResult {

    /// A query to run.
    Ok(Options),

    /// `getopts` rejected the arguments, such as for an unknown flag.
    InvalidOptionsFormat(getopts::Fail),

    /// The flags parsed, but one of their values is unusable.
    InvalidOptions(OptionsError),

    /// Print the usage text instead of querying.
    Help(HelpReason, UseColours),

    /// Print the version instead of querying.
    Version(UseColours),
}

/// Why the usage text is being printed, which decides the exit status.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum HelpReason {

    /// `--help` was passed, so this is a success.
    Flag,

    /// No domain was given, so this is an options error.
    NoDomains,
}

/// A command-line value that cannot be turned into a query.
#[derive(PartialEq, Debug)]
pub enum OptionsError {
    InvalidDomain(String),
    InvalidQueryType(String),
    InvalidQueryClass(String),
    InvalidNameserver(String),
    InvalidOpcode(String),
    InvalidTxid(String),
    InvalidTweak(String),
    MissingNameserver,
    TooManyNameservers,
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain(domain)   => write!(f, "Invalid domain {:?}", domain),
            Self::InvalidQueryType(qt)    => write!(f, "Invalid query type {:?}", qt),
            Self::InvalidQueryClass(qc)   => write!(f, "Invalid query class {:?}", qc),
            Self::InvalidNameserver(ns)   => write!(f, "Invalid nameserver {:?} (it must be an IP address)", ns),
            Self::InvalidOpcode(op)       => write!(f, "Invalid opcode {:?}", op),
            Self::InvalidTxid(txid)       => write!(f, "Invalid transaction ID {:?}", txid),
            Self::InvalidTweak(tweak)     => write!(f, "Invalid protocol tweak {:?}", tweak),
            Self::MissingNameserver       => write!(f, "You must pass a nameserver address, such as @127.0.0.1"),
            Self::TooManyNameservers      => write!(f, "Only one nameserver can be queried at a time"),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use dns::record::UnknownQtype;

    impl Inputs {
        fn fallbacks() -> Self {
            Inputs {
                domains:    vec![ /* No domains by default */ ],
                types:      vec![ RecordType::A ],
                classes:    vec![ QClass::IN ],
                nameserver: Some(String::from("127.0.0.1")),
            }
        }
    }

    impl OptionsResult {
        fn unwrap(self) -> Options {
            match self {
                Self::Ok(o)  => o,
                _            => panic!("{:?}", self),
            }
        }
    }

    // help tests

    #[test]
    fn help() {
        assert_eq!(Options::getopts(&[ "--help" ]),
                   OptionsResult::Help(HelpReason::Flag, UseColours::Automatic));
    }

    #[test]
    fn help_no_colour() {
        assert_eq!(Options::getopts(&[ "--help", "--colour=never" ]),
                   OptionsResult::Help(HelpReason::Flag, UseColours::Never));
    }

    #[test]
    fn verbose() {
        assert_eq!(Options::getopts(&[ "-vv" ]),
                   OptionsResult::Help(HelpReason::NoDomains, UseColours::Automatic));
    }

    #[test]
    fn version() {
        assert_eq!(Options::getopts(&[ "--version" ]),
                   OptionsResult::Version(UseColours::Automatic));
    }

    #[test]
    fn version_yes_color() {
        assert_eq!(Options::getopts(&[ "--version", "--color", "always" ]),
                   OptionsResult::Version(UseColours::Always));
    }

    #[test]
    fn fail() {
        assert_eq!(Options::getopts(&[ "--pear" ]),
                   OptionsResult::InvalidOptionsFormat(getopts::Fail::UnrecognizedOption("pear".into())));
    }

    #[test]
    fn empty() {
        let nothing: Vec<&str> = vec![];
        assert_eq!(Options::getopts(nothing),
                   OptionsResult::Help(HelpReason::NoDomains, UseColours::Automatic));
    }

    #[test]
    fn an_unrelated_argument() {
        assert_eq!(Options::getopts(&[ "--time" ]),
                   OptionsResult::Help(HelpReason::NoDomains, UseColours::Automatic));
    }

    // query tests

    #[test]
    fn domain_and_nameserver() {
        let options = Options::getopts(&[ "lookup.dog", "@127.0.0.1" ]).unwrap();
        assert_eq!(options.requests.inputs, Inputs {
            domains:    vec![ String::from("lookup.dog") ],
            .. Inputs::fallbacks()
        });
    }

    #[test]
    fn just_named_domain() {
        let options = Options::getopts(&[ "-q", "lookup.dog", "-n", "127.0.0.1" ]).unwrap();
        assert_eq!(options.requests.inputs, Inputs {
            domains:    vec![ String::from("lookup.dog") ],
            .. Inputs::fallbacks()
        });
    }

    #[test]
    fn domain_and_type() {
        let options = Options::getopts(&[ "lookup.dog", "SOA", "@127.0.0.1" ]).unwrap();
        assert_eq!(options.requests.inputs, Inputs {
            domains:    vec![ String::from("lookup.dog") ],
            types:      vec![ RecordType::SOA ],
            .. Inputs::fallbacks()
        });
    }

    #[test]
    fn domain_and_class() {
        let options = Options::getopts(&[ "lookup.dog", "CH", "@127.0.0.1" ]).unwrap();
        assert_eq!(options.requests.inputs, Inputs {
            domains:    vec![ String::from("lookup.dog") ],
            classes:    vec![ QClass::CH ],
            .. Inputs::fallbacks()
        });
    }

    #[test]
    fn ipv6_nameserver_with_port() {
        let options = Options::getopts(&[ "lookup.dog", "@[::1]:5353" ]).unwrap();
        assert_eq!(options.requests.inputs.nameserver, Some(String::from("[::1]:5353")));
    }

    #[test]
    fn all_parameters() {
        let options = Options::getopts(&[ "-vv", "-q", "lookup.dog", "--class", "CH", "--type", "SOA", "--nameserver", "127.0.0.1" ]).unwrap();
        assert_eq!(options.requests.inputs, Inputs {
            domains:    vec![ String::from("lookup.dog") ],
            classes:    vec![ QClass::CH ],
            types:      vec![ RecordType::SOA ],
            .. Inputs::fallbacks()
        });
    }

    #[test]
    fn two_types() {
        let options = Options::getopts(&[ "-q", "lookup.dog", "--type", "SRV", "--type", "AAAA", "@127.0.0.1" ]).unwrap();
        assert_eq!(options.requests.inputs, Inputs {
            domains:    vec![ String::from("lookup.dog") ],
            types:      vec![ RecordType::SRV, RecordType::AAAA ],
            .. Inputs::fallbacks()
        });
    }

    #[test]
    fn lowercase_type() {
        let options = Options::getopts(&[ "lookup.dog", "--type", "mx", "@127.0.0.1" ]).unwrap();
        assert_eq!(options.requests.inputs.types, vec![ RecordType::MX ]);
    }

    #[test]
    fn unparsed_type() {
        let options = Options::getopts(&[ "lookup.dog", "DNSKEY", "@127.0.0.1" ]).unwrap();
        assert_eq!(options.requests.inputs.types,
                   vec![ RecordType::Other(UnknownQtype::HeardOf("DNSKEY", 48)) ]);
    }

    #[test]
    fn generic_type_and_class() {
        let options = Options::getopts(&[ "lookup.dog", "TYPE4444", "--class", "CLASS7", "@127.0.0.1" ]).unwrap();
        assert_eq!(options.requests.inputs.types, vec![ RecordType::Other(UnknownQtype::UnheardOf(4444)) ]);
        assert_eq!(options.requests.inputs.classes, vec![ QClass::Other(7) ]);
    }

    #[test]
    fn any_is_a_type() {
        let options = Options::getopts(&[ "lookup.dog", "ANY", "@127.0.0.1" ]).unwrap();
        assert_eq!(options.requests.inputs.types, vec![ RecordType::Other(UnknownQtype::HeardOf("ANY", 255)) ]);
        assert_eq!(options.requests.inputs.classes, vec![ QClass::IN ]);
    }

    #[test]
    fn explicit_numerics() {
        let options = Options::getopts(&[ "11", "--class", "22", "--type", "33", "@127.0.0.1" ]).unwrap();
        assert_eq!(options.requests.inputs, Inputs {
            domains:    vec![ String::from("11") ],
            classes:    vec![ QClass::Other(22) ],
            types:      vec![ RecordType::SRV ],
            .. Inputs::fallbacks()
        });
    }

    #[test]
    fn tweaks() {
        let options = Options::getopts(&[ "dom.ain", "@127.0.0.1", "-Z", "aa", "-Z", "cd", "-Z", "norec" ]).unwrap();
        assert_eq!(options.requests.protocol_tweaks, ProtocolTweaks {
            set_authoritative_flag: true,
            set_authentic_flag: false,
            set_checking_disabled_flag: true,
            unset_recursion_desired_flag: true,
        });
    }

    #[test]
    fn named_opcode() {
        let options = Options::getopts(&[ "dom.ain", "@127.0.0.1", "--opcode", "notify" ]).unwrap();
        assert_eq!(options.requests.opcode, Opcode::Notify);
    }

    #[test]
    fn numbered_opcode() {
        let options = Options::getopts(&[ "dom.ain", "@127.0.0.1", "--opcode", "9" ]).unwrap();
        assert_eq!(options.requests.opcode, Opcode::Other(9));
    }

    #[test]
    fn default_opcode() {
        let options = Options::getopts(&[ "dom.ain", "@127.0.0.1" ]).unwrap();
        assert_eq!(options.requests.opcode, Opcode::Query);
    }

    #[test]
    fn short_mode() {
        let tf = TextFormat { format_durations: true };
        let options = Options::getopts(&[ "dom.ain", "@127.0.0.1", "--short" ]).unwrap();
        assert_eq!(options.format, OutputFormat::Short(tf));

        let tf = TextFormat { format_durations: false };
        let options = Options::getopts(&[ "dom.ain", "@127.0.0.1", "--short", "--seconds" ]).unwrap();
        assert_eq!(options.format, OutputFormat::Short(tf));
    }

    #[test]
    fn json_output() {
        let options = Options::getopts(&[ "dom.ain", "@127.0.0.1", "--json" ]).unwrap();
        assert_eq!(options.format, OutputFormat::JSON);
    }

    #[test]
    fn dump() {
        let options = Options::getopts(&[ "dom.ain", "@127.0.0.1", "--dump" ]).unwrap();
        assert!(options.dump_bytes);
    }

    #[test]
    fn specific_txid() {
        let options = Options::getopts(&[ "dom.ain", "@127.0.0.1", "--txid", "1234" ]).unwrap();
        assert_eq!(options.requests.txid_generator,
                   TxidGenerator::Sequence(1234));
    }

    // invalid options tests

    #[test]
    fn missing_nameserver() {
        assert_eq!(Options::getopts(&[ "lookup.dog" ]),
                   OptionsResult::InvalidOptions(OptionsError::MissingNameserver));
    }

    #[test]
    fn hostname_nameserver() {
        assert_eq!(Options::getopts(&[ "lookup.dog", "@dns.google" ]),
                   OptionsResult::InvalidOptions(OptionsError::InvalidNameserver("dns.google".into())));
    }

    #[test]
    fn two_nameservers() {
        assert_eq!(Options::getopts(&[ "lookup.dog", "@1.1.1.1", "@1.0.0.1" ]),
                   OptionsResult::InvalidOptions(OptionsError::TooManyNameservers));
    }

    #[test]
    fn invalid_named_class() {
        assert_eq!(Options::getopts(&[ "lookup.dog", "--class", "tubes" ]),
                   OptionsResult::InvalidOptions(OptionsError::InvalidQueryClass("tubes".into())));
    }

    #[test]
    fn invalid_named_type() {
        assert_eq!(Options::getopts(&[ "lookup.dog", "--type", "tubes" ]),
                   OptionsResult::InvalidOptions(OptionsError::InvalidQueryType("tubes".into())));
    }

    #[test]
    fn invalid_capsword() {
        assert_eq!(Options::getopts(&[ "SMH", "lookup.dog" ]),
                   OptionsResult::InvalidOptions(OptionsError::InvalidQueryType("SMH".into())));
    }

    #[test]
    fn invalid_domain() {
        assert_eq!(Options::getopts(&[ "lookup..dog", "@127.0.0.1" ]),
                   OptionsResult::InvalidOptions(OptionsError::InvalidDomain("lookup..dog".into())));
    }

    #[test]
    fn invalid_txid() {
        assert_eq!(Options::getopts(&[ "lookup.dog", "--txid=0x10000" ]),
                   OptionsResult::InvalidOptions(OptionsError::InvalidTxid("0x10000".into())));
    }

    #[test]
    fn invalid_opcode() {
        assert_eq!(Options::getopts(&[ "lookup.dog", "--opcode", "16" ]),
                   OptionsResult::InvalidOptions(OptionsError::InvalidOpcode("16".into())));
    }

    #[test]
    fn invalid_tweaks() {
        assert_eq!(Options::getopts(&[ "-Zsleep" ]),
                   OptionsResult::InvalidOptions(OptionsError::InvalidTweak("sleep".into())));
    }

    // txid tests

    #[test]
    fn number_parsing() {
        assert_eq!(parse_txid("1234"),    Some(1234));
        assert_eq!(parse_txid("0x1234"),  Some(0x1234));
        assert_eq!(parse_txid("0xABcd"),  Some(0xABcd));

        assert_eq!(parse_txid("65536"),   None);
        assert_eq!(parse_txid("0x65536"), None);

        assert_eq!(parse_txid(""),        None);
        assert_eq!(parse_txid("0x"),      None);
    }
}
