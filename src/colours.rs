//! Colours, colour schemes, and terminal styling.

use ansi_term::Style;
use ansi_term::Color::*;


/// The **colours** are used to paint the input.
#[derive(Debug, Default)]
pub struct Colours {
    pub qname: Style,
    pub heading: Style,

    pub answer: Style,
    pub authority: Style,
    pub additional: Style,

    pub flag_set: Style,
    pub flag_unset: Style,
    pub error: Style,

    pub a: Style,
    pub aaaa: Style,
    pub cname: Style,
    pub gpos: Style,
    pub hinfo: Style,
    pub loc: Style,
    pub mx: Style,
    pub naptr: Style,
    pub ns: Style,
    pub ptr: Style,
    pub soa: Style,
    pub spf: Style,
    pub srv: Style,
    pub txt: Style,
    pub wks: Style,
    pub unknown: Style,
}

impl Colours {

    /// Create a new colour palette that has a variety of different styles
    /// defined. This is used by default.
    pub fn pretty() -> Self {
        Self {
            qname: Blue.bold(),
            heading: Style::new().bold().underline(),

            answer: Style::default(),
            authority: Cyan.normal(),
            additional: Green.normal(),

            flag_set: Green.bold(),
            flag_unset: Fixed(244).normal(),
            error: Red.bold(),

            a: Green.bold(),
            aaaa: Green.bold(),
            cname: Yellow.normal(),
            gpos: Yellow.normal(),
            hinfo: Yellow.normal(),
            loc: Yellow.normal(),
            mx: Cyan.normal(),
            naptr: Green.normal(),
            ns: Red.normal(),
            ptr: Red.normal(),
            soa: Purple.normal(),
            spf: Yellow.normal(),
            srv: Cyan.normal(),
            txt: Yellow.normal(),
            wks: Purple.normal(),
            unknown: White.on(Red),
        }
    }

    /// Create a new colour palette where no styles are defined, causing
    /// output to be rendered as plain text without any formatting.
    /// This is used when output is not to a terminal.
    pub fn plain() -> Self {
        Self::default()
    }
}
