//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to the disassembler
//! to find edge cases and crashes in instruction decoding and formatting.

#![no_main]

use arbitrary::Arbitrary;
use lib8080::disassembler::format_listing;
use lib8080::{disassemble, format_instruction, DisassemblyOptions};
use libfuzzer_sys::fuzz_target;

/// Disassembly options for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzOptions {
    start_address: u16,
    hex_dump: bool,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    options: FuzzOptions,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let options = DisassemblyOptions {
        start_address: input.options.start_address,
        hex_dump: input.options.hex_dump,
    };

    let instructions = disassemble(&input.bytes, options);

    // Verify invariants
    let mut total_size: usize = 0;
    let mut expected_address = input.options.start_address;

    for instr in &instructions {
        assert_eq!(instr.address, expected_address);

        // Size should be 1-3 bytes
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 3);

        // Data bytes carry no operands; instructions carry size - 1
        if instr.is_data() {
            assert!(instr.operand_bytes.is_empty());
            assert_eq!(instr.size_bytes, 1);
        } else {
            assert_eq!(instr.operand_bytes.len(), instr.size_bytes as usize - 1);
        }

        assert!(!format_instruction(instr).is_empty());

        total_size += instr.size_bytes as usize;
        expected_address = expected_address.wrapping_add(instr.size_bytes as u16);
    }

    // Every input byte is accounted for
    assert_eq!(total_size, input.bytes.len());

    let listing = format_listing(&instructions, options);
    assert_eq!(listing.lines().count(), instructions.len());
});
