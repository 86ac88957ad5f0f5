//! Opcode table validation tests
//!
//! Verifies that the opcode metadata table is complete and agrees with the
//! decoder the CPU executes from.

use lib8080::{Instruction, DECODE_TABLE, OPCODE_TABLE};

#[test]
fn test_opcode_table_completeness() {
    assert_eq!(OPCODE_TABLE.len(), 256, "Opcode table must have exactly 256 entries");

    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        assert!(
            !metadata.mnemonic.is_empty(),
            "Opcode 0x{:02X} has empty mnemonic",
            opcode
        );
    }
}

#[test]
fn test_opcode_table_size_validation() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        assert!(
            (1..=3).contains(&metadata.size_bytes),
            "Opcode 0x{:02X} has invalid size: {} (must be 1-3)",
            opcode,
            metadata.size_bytes
        );
    }
}

#[test]
fn test_undocumented_opcode_count() {
    let undocumented: Vec<usize> = OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, metadata)| !metadata.documented)
        .map(|(opcode, _)| opcode)
        .collect();

    assert_eq!(
        undocumented,
        vec![0x08, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38, 0xCB, 0xD9, 0xDD, 0xED, 0xFD]
    );
}

#[test]
fn test_mnemonics_match_decoded_instructions() {
    for opcode in 0..=255usize {
        let mnemonic = OPCODE_TABLE[opcode].mnemonic;
        let consistent = match DECODE_TABLE[opcode] {
            Instruction::Nop => mnemonic == "NOP",
            Instruction::Hlt => mnemonic == "HLT",
            Instruction::Mov { .. } => mnemonic == "MOV",
            Instruction::Mvi(_) => mnemonic == "MVI",
            Instruction::Lxi(_) => mnemonic == "LXI",
            Instruction::Dad(_) => mnemonic == "DAD",
            Instruction::Inr(_) => mnemonic == "INR",
            Instruction::Dcr(_) => mnemonic == "DCR",
            Instruction::Inx(_) => mnemonic == "INX",
            Instruction::Dcx(_) => mnemonic == "DCX",
            Instruction::Push(_) => mnemonic == "PUSH",
            Instruction::Pop(_) => mnemonic == "POP",
            Instruction::Rst(_) => mnemonic == "RST",
            Instruction::Jmp(None) => mnemonic == "JMP",
            Instruction::Call(None) => mnemonic == "CALL",
            Instruction::Ret(None) => mnemonic == "RET",
            Instruction::Jmp(Some(_)) => mnemonic.starts_with('J'),
            Instruction::Call(Some(_)) => mnemonic.starts_with('C'),
            Instruction::Ret(Some(_)) => mnemonic.starts_with('R'),
            _ => true,
        };
        assert!(consistent, "Opcode 0x{:02X} decodes to {:?} but is named {}", opcode, DECODE_TABLE[opcode], mnemonic);
    }
}

#[test]
fn test_specific_opcodes() {
    let cases: &[(usize, &str, &str, u8)] = &[
        (0x00, "NOP", "", 1),
        (0x01, "LXI", "B", 3),
        (0x0A, "LDAX", "B", 1),
        (0x22, "SHLD", "", 3),
        (0x27, "DAA", "", 1),
        (0x36, "MVI", "M", 2),
        (0x39, "DAD", "SP", 1),
        (0x76, "HLT", "", 1),
        (0x7E, "MOV", "A,M", 1),
        (0x86, "ADD", "M", 1),
        (0xBF, "CMP", "A", 1),
        (0xC2, "JNZ", "", 3),
        (0xD3, "OUT", "", 2),
        (0xDB, "IN", "", 2),
        (0xE3, "XTHL", "", 1),
        (0xEA, "JPE", "", 3),
        (0xF1, "POP", "PSW", 1),
        (0xFE, "CPI", "", 2),
        (0xFF, "RST", "7", 1),
    ];

    for &(opcode, mnemonic, operands, size) in cases {
        let metadata = &OPCODE_TABLE[opcode];
        assert_eq!(metadata.mnemonic, mnemonic, "opcode 0x{:02X}", opcode);
        assert_eq!(metadata.operands, operands, "opcode 0x{:02X}", opcode);
        assert_eq!(metadata.size_bytes, size, "opcode 0x{:02X}", opcode);
        assert!(metadata.documented);
    }
}
