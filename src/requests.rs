//! Turning the user’s inputs into DNS request messages.

use dns::{Flags, Message, Opcode, QClass, Question};
use dns::record::RecordType;

use crate::txid::TxidGenerator;


/// All the information necessary to generate requests for one or more
/// queries to a nameserver.
#[derive(PartialEq, Debug)]
pub struct RequestGenerator {

    /// The input parameter matrix.
    pub inputs: Inputs,

    /// How to generate transaction IDs.
    pub txid_generator: TxidGenerator,

    /// The operation every request performs.
    pub opcode: Opcode,

    /// Other weird protocol options.
    pub protocol_tweaks: ProtocolTweaks,
}

/// Which things the user has specified they want queried.
#[derive(PartialEq, Debug, Default)]
pub struct Inputs {

    /// The list of domain names to query.
    pub domains: Vec<String>,

    /// The list of DNS record types to query for.
    pub types: Vec<RecordType>,

    /// The list of DNS classes to query for.
    pub classes: Vec<QClass>,

    /// The address of the nameserver to send every query to.
    pub nameserver: Option<String>,
}

/// Uncommon header flag settings that the protocol allows.
#[derive(PartialEq, Debug, Default, Copy, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct ProtocolTweaks {

    /// Set the `AA` flag (Authoritative Answer) in the header of each request.
    pub set_authoritative_flag: bool,

    /// Set the `AD` flag (Authentic Data) in the header of each request.
    pub set_authentic_flag: bool,

    /// Set the `CD` flag (Checking Disabled) in the header of each request.
    pub set_checking_disabled_flag: bool,

    /// Clear the `RD` flag (Recursion Desired), which is otherwise set.
    pub unset_recursion_desired_flag: bool,
}


impl RequestGenerator {

    /// Iterate through the inputs matrix, returning one DNS request for
    /// every combination of domain, type, and class.
    pub fn generate(&self) -> Vec<Message> {
        let mut requests = Vec::new();

        for domain in &self.inputs.domains {
            for qtype in self.inputs.types.iter().copied() {
                for qclass in self.inputs.classes.iter().copied() {
                    let transaction_id = self.txid_generator.generate(requests.len());
                    let flags = self.protocol_tweaks.flags(self.opcode);
                    let question = Some(Question { qname: domain.clone(), qtype, qclass });

                    requests.push(Message {
                        transaction_id,
                        flags,
                        question,
                        answers: Vec::new(),
                        authorities: Vec::new(),
                        additionals: Vec::new(),
                    });
                }
            }
        }

        requests
    }
}

impl ProtocolTweaks {

    /// The header flags for a request with these tweaks applied.
    fn flags(self, opcode: Opcode) -> Flags {
        let mut flags = Flags::query();
        flags.opcode = opcode;

        if self.set_authoritative_flag {
            flags.authoritative = true;
        }

        if self.set_authentic_flag {
            flags.authentic_data = true;
        }

        if self.set_checking_disabled_flag {
            flags.checking_disabled = true;
        }

        if self.unset_recursion_desired_flag {
            flags.recursion_desired = false;
        }

        flags
    }
}
