#![no_main]
use libfuzzer_sys::fuzz_target;
use dns::Message;

fuzz_target!(|data: &[u8]| {
    if let Ok(message) = Message::from_bytes(data) {
        let _ = message.to_bytes_with_capacity(usize::from(u16::MAX));
    }
});
