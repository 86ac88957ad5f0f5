//! 8080 Disassembler Module
//!
//! Converts binary machine code into Intel-syntax assembly text, driven by
//! [`OPCODE_TABLE`](crate::OPCODE_TABLE).

pub mod decoder;
pub mod formatter;

pub use formatter::{format_instruction, format_listing};

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisassembledInstruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "MOV", "LXI", "JNZ"), or "DB" for a data byte
    pub mnemonic: &'static str,

    /// Fixed operand text from the opcode table (e.g., "B,C", "SP", "PSW")
    pub operands: &'static str,

    /// Immediate or address bytes following the opcode (0-2 bytes)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// False for undocumented opcodes
    pub documented: bool,
}

impl DisassembledInstruction {
    /// True for `DB` entries produced from bytes that do not form a whole instruction.
    pub fn is_data(&self) -> bool {
        self.mnemonic == decoder::DATA_MNEMONIC
    }
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy)]
pub struct DisassemblyOptions {
    /// Starting address for disassembly (affects address display)
    pub start_address: u16,

    /// Whether [`format_listing`] includes the raw instruction bytes
    pub hex_dump: bool,
}

impl Default for DisassemblyOptions {
    fn default() -> Self {
        Self {
            start_address: 0x0000,
            hex_dump: true,
        }
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// Every byte is accounted for. An instruction cut short by the end of the
/// slice is emitted as one `DB` entry per remaining byte.
///
/// # Examples
///
/// ```
/// use lib8080::{disassemble, format_instruction, DisassemblyOptions};
///
/// let code = [0x3E, 0x42, 0xC3, 0x00, 0x00, 0xCD];
/// let listing = disassemble(&code, DisassemblyOptions::default());
///
/// let text: Vec<String> = listing.iter().map(format_instruction).collect();
/// assert_eq!(text, ["MVI A,42H", "JMP 0000H", "DB 0CDH"]);
/// assert_eq!(listing[1].address, 0x0002);
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<DisassembledInstruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = options.start_address;

    while offset < bytes.len() {
        let instr = match decoder::decode_instruction(&bytes[offset..], address) {
            Some(instr) => instr,
            None => decoder::data_byte(bytes[offset], address),
        };

        offset += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}
