//! Formatting functions for disassembled instructions
//!
//! Output follows Intel assembler conventions: hexadecimal constants carry an
//! `H` suffix, and a leading `0` is added when the first digit is a letter so
//! the constant cannot be mistaken for a symbol (`0FFH`, `0C000H`).

use crate::disassembler::{DisassembledInstruction, DisassemblyOptions};
use std::fmt::Write;

/// Format a single instruction as assembly text
///
/// # Arguments
///
/// * `instr` - The instruction to format
///
/// # Returns
///
/// A string such as `MOV A,M`, `MVI B,0FFH` or `JNZ 0100H`
pub fn format_instruction(instr: &DisassembledInstruction) -> String {
    if instr.is_data() {
        return format!("{} {}", instr.mnemonic, hex_constant(instr.opcode as u16, 2));
    }

    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format a run of instructions as a listing, one line per instruction.
///
/// Each line holds the address, optionally the raw bytes, and the assembly
/// text.
///
/// # Examples
///
/// ```
/// use lib8080::disassembler::format_listing;
/// use lib8080::{disassemble, DisassemblyOptions};
///
/// let options = DisassemblyOptions { start_address: 0x0100, hex_dump: true };
/// let listing = disassemble(&[0x3A, 0x80, 0x00, 0x47], options);
///
/// assert_eq!(
///     format_listing(&listing, options),
///     "0100  3A 80 00  LDA 0080H\n0103  47        MOV B,A\n"
/// );
/// ```
pub fn format_listing(instructions: &[DisassembledInstruction], options: DisassemblyOptions) -> String {
    let mut out = String::new();

    for instr in instructions {
        let _ = write!(out, "{:04X}  ", instr.address);

        if options.hex_dump {
            let raw = std::iter::once(instr.opcode)
                .chain(instr.operand_bytes.iter().copied())
                .map(|b| format!("{:02X}", b))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(out, "{:<8}  ", raw);
        }

        let _ = writeln!(out, "{}", format_instruction(instr));
    }

    out
}

/// Combine the fixed operand text with any immediate data or address
fn format_operand(instr: &DisassembledInstruction) -> String {
    let immediate = match instr.operand_bytes.as_slice() {
        [] => None,
        [byte] => Some(hex_constant(*byte as u16, 2)),
        [low, high, ..] => Some(hex_constant(u16::from_le_bytes([*low, *high]), 4)),
    };

    match (instr.operands.is_empty(), immediate) {
        (true, None) => String::new(),
        (true, Some(value)) => value,
        (false, None) => instr.operands.to_string(),
        (false, Some(value)) => format!("{},{}", instr.operands, value),
    }
}

/// Render `value` as an Intel hex constant with `digits` digits.
fn hex_constant(value: u16, digits: usize) -> String {
    let hex = format!("{:0width$X}", value, width = digits);
    if hex.starts_with(|c: char| c.is_ascii_alphabetic()) {
        format!("0{}H", hex)
    } else {
        format!("{}H", hex)
    }
}
