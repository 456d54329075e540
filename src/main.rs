//! dnswire, the command-line DNS message tool.

#![warn(deprecated_in_future)]
#![warn(future_incompatible)]
#![warn(missing_copy_implementations)]
#![warn(missing_docs)]
#![warn(nonstandard_style)]
#![warn(rust_2018_compatibility)]
#![warn(rust_2018_idioms)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused)]

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::enum_glob_use)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::wildcard_imports)]

#![deny(unsafe_code)]

use log::*;

use dns::Message;
use dns_transport::{Transport, UdpTransport, Error as TransportError};

mod colours;
mod logger;
mod output;
mod requests;
mod table;
mod txid;

mod options;
use self::options::*;


/// Configures logging, parses the command-line options, and handles any
/// errors before passing control over to the run function.
fn main() {
    use std::env;
    use std::process::exit;

    logger::configure(env::var_os("DNSWIRE_DEBUG"));

    #[cfg(windows)]
    if let Err(e) = ansi_term::enable_ansi_support() {
        warn!("Failed to enable ANSI support: {}", e);
    }

    match Options::getopts(env::args_os().skip(1)) {
        OptionsResult::Ok(options) => {
            info!("Running with options -> {:#?}", options);
            exit(run(options));
        }

        OptionsResult::Help(help_reason, use_colours) => {
            print_usage(use_colours.should_use_colours());

            if help_reason == HelpReason::NoDomains {
                exit(exits::OPTIONS_ERROR);
            }
            else {
                exit(exits::SUCCESS);
            }
        }

        OptionsResult::Version(use_colours) => {
            print_version(use_colours.should_use_colours());
            exit(exits::SUCCESS);
        }

        OptionsResult::InvalidOptionsFormat(oe) => {
            eprintln!("dnswire: Invalid options: {}", oe);
            exit(exits::OPTIONS_ERROR);
        }

        OptionsResult::InvalidOptions(why) => {
            eprintln!("dnswire: Invalid options: {}", why);
            exit(exits::OPTIONS_ERROR);
        }
    }
}


/// Runs dnswire with some options, returning the status to exit with.
fn run(Options { requests, format, measure_time, dump_bytes }: Options) -> i32 {
    use std::time::Instant;

    let nameserver = requests.inputs.nameserver.as_deref().unwrap_or_default();
    let transport = match UdpTransport::new(nameserver) {
        Ok(t) => t,
        Err(e) => {
            format.print_error(&e);
            return exits::OPTIONS_ERROR;
        }
    };

    let mut responses = Vec::new();
    let timer = if measure_time { Some(Instant::now()) } else { None };

    let mut errored = false;
    let mut server_error = false;

    for request in requests.generate() {
        match exchange(&transport, &request, dump_bytes) {
            Ok(response) => {
                if response.flags.error_code.is_some() {
                    server_error = true;
                }

                responses.push(response);
            }
            Err(e) => {
                format.print_error(&e);
                errored = true;
                break;
            }
        }
    }

    let duration = timer.map(|t| t.elapsed());
    let printed = format.print(responses, duration);

    if errored {
        exits::NETWORK_ERROR
    }
    else if server_error || ! printed {
        exits::SERVER_ERROR
    }
    else {
        exits::SUCCESS
    }
}


/// Sends one request and waits for its response, printing the bytes going
/// each way first if the user asked for them.
fn exchange(transport: &UdpTransport, request: &Message, dump_bytes: bool) -> Result<Message, TransportError> {
    if ! dump_bytes {
        return transport.send(request);
    }

    let bytes = request.to_bytes()?;
    output::print_dump("Request", &bytes);

    let reply = transport.query(&bytes)?;
    output::print_dump("Response", &reply);

    let response = Message::from_bytes(&reply)?;
    if response.transaction_id != request.transaction_id {
        warn!("Reply has transaction ID {:#06x}, but the request had {:#06x}",
              response.transaction_id, request.transaction_id);
    }

    Ok(response)
}


fn print_usage(pretty: bool) {
    let usage = include_str!("usage.txt");

    if pretty {
        for line in usage.lines() {
            if line.ends_with(':') && ! line.starts_with(' ') {
                println!("{}", ansi_term::Style::new().bold().underline().paint(line));
            }
            else {
                println!("{}", line);
            }
        }
    }
    else {
        print!("{}", usage);
    }
}

fn print_version(pretty: bool) {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    if pretty {
        println!("{} ● {}", ansi_term::Colour::Blue.bold().paint(name), env!("CARGO_PKG_DESCRIPTION"));
        println!("v{}", ansi_term::Colour::Green.paint(version));
    }
    else {
        println!("{} ● {}", name, env!("CARGO_PKG_DESCRIPTION"));
        println!("v{}", version);
    }
}


/// The possible status numbers dnswire can exit with.
mod exits {

    /// Exit code for when everything turns out OK.
    pub const SUCCESS: i32 = 0;

    /// Exit code for when there was at least one network error during
    /// execution, including replies that could not be decoded.
    pub const NETWORK_ERROR: i32 = 1;

    /// Exit code for when a server answered with an error code, or there is
    /// no result from the server when running in short mode.
    pub const SERVER_ERROR: i32 = 2;

    /// Exit code for when the command-line options are invalid.
    pub const OPTIONS_ERROR: i32 = 3;
}
