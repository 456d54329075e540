//! Text and JSON output.

use std::fmt::Write as _;
use std::time::Duration;

use dns::{Message, Question, Answer, Flags, ErrorCode};
use dns::record::{Record, UnknownQtype};
use dns_transport::Error as TransportError;
use serde_json::{json, Value as JsonValue};

use crate::colours::Colours;
use crate::table::{Table, Section};


/// How to format the output data.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum OutputFormat {

    /// Format the output as plain text, optionally adding ANSI colours.
    Text(UseColours, TextFormat),

    /// Format the output as one line of plain text.
    Short(TextFormat),

    /// Format the entries as JSON.
    JSON,
}


/// When to use colours in the output.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum UseColours {

    /// Always use colours.
    Always,

    /// Use colours if output is to a terminal; otherwise, do not.
    Automatic,

    /// Never use colours.
    Never,
}

/// Options that govern how text should be rendered in record summaries.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct TextFormat {

    /// Whether to format TTLs as hours, minutes, and seconds.
    pub format_durations: bool,
}

impl UseColours {

    /// Whether we should use colours or not. This checks whether the user has
    /// overridden the colour setting, and if not, whether output is to a
    /// terminal.
    pub fn should_use_colours(self) -> bool {
        self == Self::Always || (atty::is(atty::Stream::Stdout) && self != Self::Never)
    }

    /// Creates a palette of colours depending on the user’s wishes or whether
    /// output is to a terminal.
    pub fn palette(self) -> Colours {
        if self.should_use_colours() {
            Colours::pretty()
        }
        else {
            Colours::plain()
        }
    }
}


impl OutputFormat {

    /// Prints the entirety of the output, formatted according to the
    /// settings. If the duration has been measured, it should also be
    /// printed. Returns `false` if there were no results to print, and `true`
    /// otherwise.
    pub fn print(self, responses: Vec<Message>, duration: Option<Duration>) -> bool {
        match self {
            Self::Short(tf) => {
                let all_answers = responses.into_iter().flat_map(|r| r.answers).collect::<Vec<_>>();

                if all_answers.is_empty() {
                    eprintln!("No results");
                    return false;
                }

                for answer in all_answers {
                    println!("{}", tf.record_payload_summary(&answer.record));
                }
            }
            Self::JSON => {
                let rs = responses.iter().map(json_response).collect::<Vec<_>>();

                if let Some(duration) = duration {
                    let object = json!({ "responses": rs, "duration": duration.as_secs_f64() });
                    println!("{}", object);
                }
                else {
                    let object = json!({ "responses": rs });
                    println!("{}", object);
                }
            }
            Self::Text(uc, tf) => {
                let colours = uc.palette();

                for response in &responses {
                    println!("{}", header_summary(response, &colours));

                    if let Some(rcode) = response.flags.error_code {
                        print_error_code(rcode, &colours);
                    }

                    if let Some(question) = &response.question {
                        println!("{}", question_summary(question, &colours));
                    }
                }

                let mut table = Table::new(colours, tf);

                for response in responses {
                    for a in response.answers {
                        table.add_row(a, Section::Answer);
                    }

                    for a in response.authorities {
                        table.add_row(a, Section::Authority);
                    }

                    for a in response.additionals {
                        table.add_row(a, Section::Additional);
                    }
                }

                table.print(duration);
            }
        }

        true
    }

    /// Print an error that’s ocurred while sending or receiving DNS packets
    /// to standard error.
    pub fn print_error(self, error: &TransportError) {
        match self {
            Self::Short(..) | Self::Text(..) => {
                eprintln!("Error [{}]: {}", erroneous_phase(error), error);
            }

            Self::JSON => {
                let object = json!({
                    "error": true,
                    "error_phase": erroneous_phase(error),
                    "error_message": error.to_string(),
                });

                eprintln!("{}", object);
            }
        }
    }
}

impl TextFormat {

    /// Formats a summary of a record in a received DNS response. Each record
    /// type contains wildly different data, so the format of the summary
    /// depends on what record it’s for.
    pub fn record_payload_summary(self, record: &Record) -> String {
        match *record {
            Record::A(ref a) => {
                format!("{}", a.address)
            }
            Record::AAAA(ref aaaa) => {
                format!("{}", aaaa.address)
            }
            Record::CNAME(ref cname) => {
                format!("{:?}", cname.domain)
            }
            Record::GPOS(ref gpos) => {
                format!("({}, {}, {}m)", gpos.latitude, gpos.longitude, gpos.altitude)
            }
            Record::HINFO(ref hinfo) => {
                format!("{} {}", quoted(&hinfo.cpu), quoted(&hinfo.os))
            }
            Record::LOC(ref loc) => {
                format!("{} ({}, {}) ({}, {}, {}m)",
                    loc.size,
                    loc.horizontal_precision,
                    loc.vertical_precision,
                    loc.latitude,
                    loc.longitude,
                    loc.altitude_metres(),
                )
            }
            Record::MX(ref mx) => {
                format!("{} {:?}", mx.preference, mx.exchange)
            }
            Record::NAPTR(ref naptr) => {
                format!("{} {} {} {} {} {:?}",
                    naptr.order,
                    naptr.preference,
                    quoted(&naptr.flags),
                    quoted(&naptr.service),
                    quoted(&naptr.regex),
                    naptr.replacement,
                )
            }
            Record::NS(ref ns) => {
                format!("{:?}", ns.nameserver)
            }
            Record::PTR(ref ptr) => {
                format!("{:?}", ptr.cname)
            }
            Record::SOA(ref soa) => {
                format!("{:?} {:?} {} {} {} {} {}",
                    soa.mname,
                    soa.rname,
                    soa.serial,
                    self.format_duration(soa.refresh_interval),
                    self.format_duration(soa.retry_interval),
                    self.format_duration(soa.expire_limit),
                    self.format_duration(soa.minimum_ttl),
                )
            }
            Record::SPF(ref spf) => {
                quoted(&spf.message)
            }
            Record::SRV(ref srv) => {
                format!("{} {} {:?}:{}", srv.priority, srv.weight, srv.target, srv.port)
            }
            Record::TXT(ref txt) => {
                quoted(&txt.message)
            }
            Record::WKS(ref wks) => {
                let ports = wks.ports().iter().map(u16::to_string).collect::<Vec<_>>();
                format!("{} {} [{}]", wks.address, wks.protocol, ports.join(" "))
            }
            Record::Other { .. } => {
                String::from("(record data not parsed)")
            }
        }
    }

    /// Formats a duration depending on whether it should be displayed as
    /// seconds, or as computed units.
    pub fn format_duration(self, seconds: u32) -> String {
        if self.format_durations {
            format_duration_hms(seconds)
        }
        else {
            format!("{}", seconds)
        }
    }
}

/// Formats a duration as days, hours, minutes, and seconds, skipping leading
/// zero units.
fn format_duration_hms(seconds: u32) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    }
    else if seconds < 60 * 60 {
        format!("{}m{:02}s",
            seconds / 60,
            seconds % 60)
    }
    else if seconds < 60 * 60 * 24 {
        format!("{}h{:02}m{:02}s",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60)
    }
    else {
        format!("{}d{}h{:02}m{:02}s",
            seconds / 86400,
            (seconds % 86400) / 3600,
            (seconds % 3600) / 60,
            seconds % 60)
    }
}

/// Renders a character-string in double quotes, escaping quotes and
/// backslashes, and writing any unprintable byte as a three-digit decimal
/// escape the way zone files do.
fn quoted(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');

    for &byte in bytes {
        match byte {
            b'"' | b'\\'         => { out.push('\\'); out.push(char::from(byte)); }
            0x20 ..= 0x7E        => out.push(char::from(byte)),
            _                    => { let _ = write!(out, "\\{:03}", byte); }
        }
    }

    out.push('"');
    out
}


/// The one-line summary of a message’s header fields.
fn header_summary(response: &Message, colours: &Colours) -> String {
    let status = match response.flags.error_code {
        Some(rcode)  => colours.error.paint(rcode.text()).to_string(),
        None         => String::from("No error"),
    };

    let flags = flag_names(response.flags).iter()
        .map(|(name, set)| {
            if *set { colours.flag_set.paint(*name).to_string() }
               else { colours.flag_unset.paint(*name).to_string() }
        })
        .collect::<Vec<_>>();

    format!("{} id {:#06x}, opcode {}, status {}, flags {}",
        colours.heading.paint("Header:"),
        response.transaction_id,
        response.flags.opcode,
        status,
        flags.join(" "))
}

/// The one-line summary of a message’s question.
fn question_summary(question: &Question, colours: &Colours) -> String {
    format!("{} {} {} {}",
        colours.heading.paint("Question:"),
        colours.qname.paint(&question.qname),
        question.qtype,
        question.qclass)
}

/// Every single-bit flag in the header, and whether it’s set.
fn flag_names(flags: Flags) -> [(&'static str, bool); 7] {
    [
        ("qr", flags.response),
        ("aa", flags.authoritative),
        ("tc", flags.truncated),
        ("rd", flags.recursion_desired),
        ("ra", flags.recursion_available),
        ("ad", flags.authentic_data),
        ("cd", flags.checking_disabled),
    ]
}


/// Serialises a received DNS message as a JSON value.
fn json_response(response: &Message) -> JsonValue {
    let flags = flag_names(response.flags).iter()
        .map(|(name, set)| ((*name).to_string(), JsonValue::from(*set)))
        .collect::<serde_json::Map<_, _>>();

    let status = response.flags.error_code.map_or(0, ErrorCode::to_u16);

    json!({
        "id": response.transaction_id,
        "opcode": response.flags.opcode.to_string(),
        "status": status,
        "status_text": dns::rcode_to_text(status),
        "flags": flags,
        "question": response.question.as_ref().map(json_question),
        "answers": json_answers(&response.answers),
        "authorities": json_answers(&response.authorities),
        "additionals": json_answers(&response.additionals),
    })
}

/// Serialises a DNS question as a JSON value.
fn json_question(question: &Question) -> JsonValue {
    json!({
        "name": question.qname,
        "class": question.qclass.to_string(),
        "type": question.qtype.to_string(),
    })
}

/// Serialises multiple received DNS answers as a JSON value.
fn json_answers(answers: &[Answer]) -> JsonValue {
    let answers = answers.iter().map(|a| {
        let mut object = json_record(&a.record);
        if let Some(omut) = object.as_object_mut() {
            omut.insert("name".into(), a.qname.clone().into());
            omut.insert("class".into(), a.qclass.to_string().into());
            omut.insert("ttl".into(), a.ttl.into());
        }
        object
    }).collect::<Vec<_>>();

    json!(answers)
}

/// Serialises a received DNS record as a JSON value.
fn json_record(record: &Record) -> JsonValue {
    match record {
        Record::A(a) => {
            json!({
                "type": "A",
                "address": a.address.to_string(),
            })
        }
        Record::AAAA(aaaa) => {
            json!({
                "type": "AAAA",
                "address": aaaa.address.to_string(),
            })
        }
        Record::CNAME(cname) => {
            json!({
                "type": "CNAME",
                "domain": cname.domain,
            })
        }
        Record::GPOS(gpos) => {
            json!({
                "type": "GPOS",
                "latitude": gpos.latitude.to_string(),
                "longitude": gpos.longitude.to_string(),
                "altitude": gpos.altitude,
            })
        }
        Record::HINFO(hinfo) => {
            json!({
                "type": "HINFO",
                "cpu": lossy(&hinfo.cpu),
                "os": lossy(&hinfo.os),
            })
        }
        Record::LOC(loc) => {
            json!({
                "type": "LOC",
                "size": loc.size.to_string(),
                "precision": {
                    "horizontal": loc.horizontal_precision.to_string(),
                    "vertical": loc.vertical_precision.to_string(),
                },
                "point": {
                    "latitude": loc.latitude.to_string(),
                    "longitude": loc.longitude.to_string(),
                    "altitude": loc.altitude_metres(),
                },
            })
        }
        Record::MX(mx) => {
            json!({
                "type": "MX",
                "preference": mx.preference,
                "exchange": mx.exchange,
            })
        }
        Record::NAPTR(naptr) => {
            json!({
                "type": "NAPTR",
                "order": naptr.order,
                "preference": naptr.preference,
                "flags": lossy(&naptr.flags),
                "service": lossy(&naptr.service),
                "regex": lossy(&naptr.regex),
                "replacement": naptr.replacement,
            })
        }
        Record::NS(ns) => {
            json!({
                "type": "NS",
                "nameserver": ns.nameserver,
            })
        }
        Record::PTR(ptr) => {
            json!({
                "type": "PTR",
                "cname": ptr.cname,
            })
        }
        Record::SOA(soa) => {
            json!({
                "type": "SOA",
                "mname": soa.mname,
                "rname": soa.rname,
                "serial": soa.serial,
                "refresh_interval": soa.refresh_interval,
                "retry_interval": soa.retry_interval,
                "expire_limit": soa.expire_limit,
                "minimum_ttl": soa.minimum_ttl,
            })
        }
        Record::SPF(spf) => {
            json!({
                "type": "SPF",
                "message": lossy(&spf.message),
            })
        }
        Record::SRV(srv) => {
            json!({
                "type": "SRV",
                "priority": srv.priority,
                "weight": srv.weight,
                "port": srv.port,
                "target": srv.target,
            })
        }
        Record::TXT(txt) => {
            json!({
                "type": "TXT",
                "message": lossy(&txt.message),
            })
        }
        Record::WKS(wks) => {
            json!({
                "type": "WKS",
                "address": wks.address.to_string(),
                "protocol": wks.protocol,
                "ports": wks.ports(),
            })
        }
        Record::Other { type_number } => {
            let type_name = match type_number {
                UnknownQtype::HeardOf(name, _) => json!(name),
                UnknownQtype::UnheardOf(num)   => json!(num),
            };

            json!({
                "unknown": true,
                "type": type_name,
            })
        }
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}


/// Prints a message describing the “error code” field of a DNS packet. This
/// happens when the packet was received correctly, but the server indicated
/// an error.
pub fn print_error_code(rcode: ErrorCode, colours: &Colours) {
    let text = match rcode {
        ErrorCode::Private(num)  => format!("Private Reason ({})", num),
        ErrorCode::Other(num)    => format!("Other Failure ({})", num),
        known                    => known.text().to_string(),
    };

    println!("{} {}", colours.heading.paint("Status:"), colours.error.paint(text));
}

/// Returns the “phase” of operation where an error occurred. This gets shown
/// to the user so they can debug what went wrong.
fn erroneous_phase(error: &TransportError) -> &'static str {
    match error {
        TransportError::InvalidAddress(_)  => "options",
        TransportError::WireError(_)       => "protocol",
        TransportError::Timeout            |
        TransportError::Unreachable(_)     |
        TransportError::NetworkError(_)    => "network",
    }
}


/// Prints a hex and ASCII dump of a packet’s bytes to standard error.
pub fn print_dump(label: &str, bytes: &[u8]) {
    eprintln!("{} ({} bytes):", label, bytes.len());
    for line in hex_dump(bytes) {
        eprintln!("{}", line);
    }
}

/// Lays out bytes sixteen to a line, with each line’s offset on the left
/// and the printable characters on the right.
fn hex_dump(bytes: &[u8]) -> Vec<String> {
    bytes.chunks(16).enumerate().map(|(index, chunk)| {
        let mut line = format!("{:04x} ", index * 16);

        for column in 0 .. 16 {
            if column == 8 {
                line.push(' ');
            }

            match chunk.get(column) {
                Some(byte)  => { let _ = write!(line, " {:02x}", byte); }
                None        => line.push_str("   "),
            }
        }

        line.push_str("  |");
        for &byte in chunk {
            if byte.is_ascii_graphic() || byte == b' ' {
                line.push(char::from(byte));
            }
            else {
                line.push('.');
            }
        }
        line.push('|');

        line
    }).collect()
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::net::Ipv4Addr;
    use dns::record::*;

    #[test]
    fn escape_free() {
        assert_eq!(quoted(b"v=spf1 -all"), "\"v=spf1 -all\"");
    }

    #[test]
    fn escapes() {
        assert_eq!(quoted(b"say \"hi\"\\\n"), "\"say \\\"hi\\\"\\\\\\010\"");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration_hms(59), "59s");
        assert_eq!(format_duration_hms(61), "1m01s");
        assert_eq!(format_duration_hms(3600), "1h00m00s");
        assert_eq!(format_duration_hms(90061), "1d1h01m01s");
    }

    #[test]
    fn seconds_durations() {
        let tf = TextFormat { format_durations: false };
        assert_eq!(tf.format_duration(3600), "3600");
    }

    #[test]
    fn wks_summary() {
        let tf = TextFormat { format_durations: true };
        let record = Record::WKS(WKS::from_ports(Ipv4Addr::new(192, 0, 2, 1), 6, &[ 25, 80 ]));
        assert_eq!(tf.record_payload_summary(&record), "192.0.2.1 6 [25 80]");
    }

    #[test]
    fn mx_summary() {
        let tf = TextFormat { format_durations: true };
        let record = Record::MX(MX { preference: 10, exchange: String::from("mail.lookup.dog") });
        assert_eq!(tf.record_payload_summary(&record), "10 \"mail.lookup.dog\"");
    }

    #[test]
    fn dump_one_line() {
        assert_eq!(hex_dump(&[ 0x12, 0x34, b'd', b'o', b'g' ]),
                   vec![ "0000  12 34 64 6f 67                                    |.4dog|" ]);
    }

    #[test]
    fn dump_two_lines() {
        let bytes = (0x41 ..= 0x51).collect::<Vec<u8>>();
        let lines = hex_dump(&bytes);

        assert_eq!(lines, vec![
            "0000  41 42 43 44 45 46 47 48  49 4a 4b 4c 4d 4e 4f 50  |ABCDEFGHIJKLMNOP|",
            "0010  51                                                |Q|",
        ]);
    }

    #[test]
    fn json_flags() {
        let message = Message {
            transaction_id: 0x0102,
            flags: Flags::standard_response(),
            question: None,
            answers: vec![],
            authorities: vec![],
            additionals: vec![],
        };

        let json = json_response(&message);
        assert_eq!(json["id"], 0x0102);
        assert_eq!(json["status"], 0);
        assert_eq!(json["flags"]["qr"], true);
        assert_eq!(json["flags"]["aa"], false);
        assert_eq!(json["question"], JsonValue::Null);
    }

    #[test]
    fn network_phase() {
        assert_eq!(erroneous_phase(&TransportError::Timeout), "network");
    }
}
