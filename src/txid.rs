//! Transaction ID generation.


/// A **transaction ID generator** is used to create unique ID numbers to
/// identify each packet, as part of the DNS protocol.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum TxidGenerator {

    /// Generate random transaction IDs each time.
    Random,

    /// Generate transaction IDs in a sequence, starting from the given value,
    /// wrapping around.
    Sequence(u16),
}

impl TxidGenerator {

    /// Returns the transaction ID for the request at the given position in
    /// the list of requests being sent.
    pub fn generate(self, index: usize) -> u16 {
        match self {
            Self::Random           => rand::random(),
            Self::Sequence(start)  => {
                #[allow(clippy::cast_possible_truncation)]
                let offset = (index % 0x1_0000) as u16;
                start.wrapping_add(offset)
            }
        }
    }
}
