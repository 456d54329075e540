//! Rendering tables of DNS response results.

use std::time::Duration;

use ansi_term::ANSIString;

use dns::Answer;
use dns::record::Record;

use crate::colours::Colours;
use crate::output::TextFormat;


/// A **table** is built up from all the response records present in a DNS
/// packet. It then gets displayed to the user.
#[derive(Debug)]
pub struct Table {
    colours: Colours,
    text_format: TextFormat,
    rows: Vec<Row>,
}

/// A row of the table. This contains all the fields
#[derive(Debug)]
pub struct Row {
    qtype: ANSIString<'static>,
    qname: String,
    qclass: String,
    ttl: String,
    section: Section,
    summary: String,
}

/// The section of the DNS response that a record was read from.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Section {

    /// This record was found in the **Answer** section.
    Answer,

    /// This record was found in the **Authority** section.
    Authority,

    /// This record was found in the **Additional** section.
    Additional,
}


impl Table {

    /// Create a new table with no rows.
    pub fn new(colours: Colours, text_format: TextFormat) -> Self {
        Self { colours, text_format, rows: Vec::new() }
    }

    /// Adds a row to the table, containing the data in the given answer in
    /// the right section.
    pub fn add_row(&mut self, answer: Answer, section: Section) {
        let qtype = self.coloured_record_type(&answer.record);
        let summary = self.text_format.record_payload_summary(&answer.record);
        let ttl = self.text_format.format_duration(answer.ttl);
        let qclass = answer.qclass.to_string();
        self.rows.push(Row { qtype, qname: answer.qname, qclass, ttl, summary, section });
    }

    /// Prints the formatted table to stdout.
    pub fn print(self, duration: Option<Duration>) {
        for line in self.lines() {
            println!("{}", line);
        }

        if let Some(dur) = duration {
            println!("Ran in {}ms", dur.as_millis());
        }
    }

    /// Renders each row with its columns padded to the same widths.
    fn lines(&self) -> Vec<String> {
        let qtype_len  = self.rows.iter().map(|r| r.qtype.len()).max().unwrap_or(0);
        let qname_len  = self.rows.iter().map(|r| r.qname.len()).max().unwrap_or(0);
        let qclass_len = self.rows.iter().map(|r| r.qclass.len()).max().unwrap_or(0);
        let ttl_len    = self.rows.iter().map(|r| r.ttl.len()).max().unwrap_or(0);

        self.rows.iter().map(|r| {
            format!("{}{} {}{} {:<qclass_len$} {:>ttl_len$} {} {}",
                " ".repeat(qtype_len - r.qtype.len()),
                r.qtype,
                self.colours.qname.paint(&r.qname),
                " ".repeat(qname_len - r.qname.len()),
                r.qclass,
                r.ttl,
                self.format_section(r.section),
                r.summary,
                qclass_len = qclass_len,
                ttl_len = ttl_len)
        }).collect()
    }

    fn coloured_record_type(&self, record: &Record) -> ANSIString<'static> {
        match *record {
            Record::A(_)      => self.colours.a.paint("A"),
            Record::AAAA(_)   => self.colours.aaaa.paint("AAAA"),
            Record::CNAME(_)  => self.colours.cname.paint("CNAME"),
            Record::GPOS(_)   => self.colours.gpos.paint("GPOS"),
            Record::HINFO(_)  => self.colours.hinfo.paint("HINFO"),
            Record::LOC(_)    => self.colours.loc.paint("LOC"),
            Record::MX(_)     => self.colours.mx.paint("MX"),
            Record::NAPTR(_)  => self.colours.naptr.paint("NAPTR"),
            Record::NS(_)     => self.colours.ns.paint("NS"),
            Record::PTR(_)    => self.colours.ptr.paint("PTR"),
            Record::SOA(_)    => self.colours.soa.paint("SOA"),
            Record::SPF(_)    => self.colours.spf.paint("SPF"),
            Record::SRV(_)    => self.colours.srv.paint("SRV"),
            Record::TXT(_)    => self.colours.txt.paint("TXT"),
            Record::WKS(_)    => self.colours.wks.paint("WKS"),

            Record::Other { ref type_number, .. } => self.colours.unknown.paint(type_number.to_string()),
        }
    }

    fn format_section(&self, section: Section) -> ANSIString<'static> {
        match section {
            Section::Answer      => self.colours.answer.paint(" "),
            Section::Authority   => self.colours.authority.paint("A"),
            Section::Additional  => self.colours.additional.paint("+"),
        }
    }
}
