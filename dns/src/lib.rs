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
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::wildcard_imports)]

#![deny(unsafe_code)]


//! The DNS crate is the ‘library’ part of dnswire. It implements the DNS
//! message wire protocol: encoding messages into their byte structure, and
//! decoding received bytes back into messages.


mod types;
pub use self::types::*;

mod strings;
pub use self::strings::{encode_name, decode_name, MAX_LABEL_LENGTH, MAX_NAME_LENGTH};
#[cfg(feature = "with_idna")]
pub use self::strings::idna_to_ascii;

mod wire;
pub use self::wire::{Wire, WireError, MandatedLength, MAX_UDP_SIZE};

pub mod record;
