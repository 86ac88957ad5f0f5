//! Instruction decoder for the 8080 disassembler

use crate::disassembler::DisassembledInstruction;
use crate::opcodes::OPCODE_TABLE;

/// Mnemonic used for bytes that do not start a complete instruction.
pub const DATA_MNEMONIC: &str = "DB";

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// None if the slice is empty or shorter than the instruction. Every opcode
/// is defined on the 8080, so there are no illegal opcodes to reject.
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<DisassembledInstruction> {
    let &opcode = bytes.first()?;
    let metadata = &OPCODE_TABLE[opcode as usize];
    let size = metadata.size_bytes as usize;

    if bytes.len() < size {
        return None;
    }

    Some(DisassembledInstruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        operands: metadata.operands,
        operand_bytes: bytes[1..size].to_vec(),
        size_bytes: metadata.size_bytes,
        documented: metadata.documented,
    })
}

/// A one-byte `DB` entry.
pub fn data_byte(value: u8, address: u16) -> DisassembledInstruction {
    DisassembledInstruction {
        address,
        opcode: value,
        mnemonic: DATA_MNEMONIC,
        operands: "",
        operand_bytes: Vec::new(),
        size_bytes: 1,
        documented: true,
    }
}
