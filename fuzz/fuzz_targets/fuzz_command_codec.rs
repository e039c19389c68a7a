//! Fuzz target: `Command` encode / decode
//!
//! Any 2-byte word decodes to fields that re-encode to the same word with
//! the reserved bits dropped.
//!
//! cargo fuzz run fuzz_command_codec

#![no_main]

use libfuzzer_sys::fuzz_target;
use pufflux::protocol::Command;
use pufflux::protocol::command::RESERVED_MASK;

fuzz_target!(|data: [u8; 2]| {
    let cmd = Command::from_bytes(data);
    let again = Command::encode(cmd.decode());
    assert_eq!(again.bits(), cmd.bits() & !RESERVED_MASK);
    assert_eq!(again.to_bytes()[0], data[0]);
});
