//! # Opcode Tables
//!
//! This module contains the two 256-entry tables that describe every 8080
//! opcode:
//!
//! - [`OPCODE_TABLE`]: static metadata (mnemonic, operand text, size) used for
//!   instruction length, disassembly and diagnostics
//! - [`DECODE_TABLE`]: every opcode decoded into an [`Instruction`], the value
//!   the CPU's single interpreter dispatches on
//!
//! The 8080 leaves twelve opcodes undocumented. On real silicon they behave as
//! other instructions, and both tables reproduce that:
//!
//! | Opcodes | Behave as |
//! |---------|-----------|
//! | 0x08, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38 | NOP |
//! | 0xCB | JMP |
//! | 0xD9 | RET |
//! | 0xDD, 0xED, 0xFD | CALL |

use crate::registers::{Register, RegisterPair};

/// Metadata for a single 8080 opcode.
///
/// # Examples
///
/// ```
/// use lib8080::OPCODE_TABLE;
///
/// let mvi_a = &OPCODE_TABLE[0x3E];
/// assert_eq!(mvi_a.mnemonic, "MVI");
/// assert_eq!(mvi_a.operands, "A");
/// assert_eq!(mvi_a.size_bytes, 2);
/// assert!(mvi_a.documented);
///
/// // 0xCB is an undocumented alias of JMP
/// assert_eq!(OPCODE_TABLE[0xCB].mnemonic, "JMP");
/// assert!(!OPCODE_TABLE[0xCB].documented);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "MOV", "LXI", "JNZ").
    pub mnemonic: &'static str,

    /// Fixed operand text, e.g. "B,C" for `MOV B,C`, "SP" for `LXI SP`.
    ///
    /// Immediate data and addresses are not included.
    pub operands: &'static str,

    /// Total instruction size in bytes (opcode + operands), 1 to 3.
    pub size_bytes: u8,

    /// False for the undocumented opcodes that alias documented ones.
    pub documented: bool,
}

const fn op(mnemonic: &'static str, operands: &'static str, size_bytes: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operands,
        size_bytes,
        documented: true,
    }
}

const fn alias(mnemonic: &'static str, operands: &'static str, size_bytes: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operands,
        size_bytes,
        documented: false,
    }
}

/// Source or destination of an 8-bit operation: a register or `M`, the byte
/// addressed by HL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Register(Register),
    Memory,
}

/// 16-bit operand of LXI, INX, DCX and DAD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WideRegister {
    Pair(RegisterPair),
    StackPointer,
}

/// 16-bit operand of PUSH and POP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOperand {
    Pair(RegisterPair),
    /// Accumulator (high byte) and status byte (low byte)
    ProgramStatusWord,
}

/// Branch condition, encoded in bits 3-5 of conditional jump/call/return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    NotZero,
    Zero,
    NoCarry,
    Carry,
    ParityOdd,
    ParityEven,
    Plus,
    Minus,
}

/// Accumulator operation, encoded in bits 3-5 of the 0x80-0xBF block and of
/// the immediate forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    AddWithCarry,
    Subtract,
    SubtractWithBorrow,
    And,
    Xor,
    Or,
    Compare,
}

/// A decoded 8080 instruction.
///
/// Variants are named after the 8080 mnemonics. Immediate bytes and addresses
/// are not part of the decoded value: they are fetched from the instruction
/// stream during execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Nop,
    /// Load a 16-bit immediate into a pair or SP
    Lxi(WideRegister),
    /// Store A at the address in BC or DE
    Stax(RegisterPair),
    /// Load A from the address in BC or DE
    Ldax(RegisterPair),
    /// Store L and H at a direct address
    Shld,
    /// Load L and H from a direct address
    Lhld,
    /// Store A at a direct address
    Sta,
    /// Load A from a direct address
    Lda,
    Inx(WideRegister),
    Dcx(WideRegister),
    Inr(Operand),
    Dcr(Operand),
    /// Move an immediate byte into a register or M
    Mvi(Operand),
    Rlc,
    Rrc,
    Ral,
    Rar,
    Daa,
    Cma,
    Stc,
    Cmc,
    /// Add a pair or SP into HL
    Dad(WideRegister),
    Mov { dst: Operand, src: Operand },
    Hlt,
    /// Accumulator operation with a register or M
    Alu(AluOp, Operand),
    /// Accumulator operation with an immediate byte
    AluImmediate(AluOp),
    /// RET, or Rcc when a condition is present
    Ret(Option<Condition>),
    /// JMP, or Jcc when a condition is present
    Jmp(Option<Condition>),
    /// CALL, or Ccc when a condition is present
    Call(Option<Condition>),
    Pop(StackOperand),
    Push(StackOperand),
    /// Call to the restart vector `8 * n`
    Rst(u8),
    Out,
    In,
    Xthl,
    Xchg,
    Pchl,
    Sphl,
    Di,
    Ei,
}

const fn operand(code: u8) -> Operand {
    match code & 0x07 {
        0 => Operand::Register(Register::B),
        1 => Operand::Register(Register::C),
        2 => Operand::Register(Register::D),
        3 => Operand::Register(Register::E),
        4 => Operand::Register(Register::H),
        5 => Operand::Register(Register::L),
        6 => Operand::Memory,
        _ => Operand::Register(Register::A),
    }
}

const fn wide_register(code: u8) -> WideRegister {
    match code & 0x03 {
        0 => WideRegister::Pair(RegisterPair::BC),
        1 => WideRegister::Pair(RegisterPair::DE),
        2 => WideRegister::Pair(RegisterPair::HL),
        _ => WideRegister::StackPointer,
    }
}

const fn stack_operand(code: u8) -> StackOperand {
    match code & 0x03 {
        0 => StackOperand::Pair(RegisterPair::BC),
        1 => StackOperand::Pair(RegisterPair::DE),
        2 => StackOperand::Pair(RegisterPair::HL),
        _ => StackOperand::ProgramStatusWord,
    }
}

const fn condition(code: u8) -> Condition {
    match code & 0x07 {
        0 => Condition::NotZero,
        1 => Condition::Zero,
        2 => Condition::NoCarry,
        3 => Condition::Carry,
        4 => Condition::ParityOdd,
        5 => Condition::ParityEven,
        6 => Condition::Plus,
        _ => Condition::Minus,
    }
}

const fn alu_op(code: u8) -> AluOp {
    match code & 0x07 {
        0 => AluOp::Add,
        1 => AluOp::AddWithCarry,
        2 => AluOp::Subtract,
        3 => AluOp::SubtractWithBorrow,
        4 => AluOp::And,
        5 => AluOp::Xor,
        6 => AluOp::Or,
        _ => AluOp::Compare,
    }
}

/// Decodes one opcode from its bit fields.
///
/// The 8080 opcode byte splits as `xx ddd sss`: `xx` picks the block, `ddd`
/// is a destination register, condition, ALU operation or restart number, and
/// `sss` a source register or sub-group. Register-pair instructions use bits
/// 4-5 as the pair and bit 3 to pick between two related instructions.
pub const fn decode(opcode: u8) -> Instruction {
    let ddd = (opcode >> 3) & 0x07;
    let sss = opcode & 0x07;
    let pair = (opcode >> 4) & 0x03;
    let bit3 = opcode & 0x08 != 0;

    match opcode >> 6 {
        0b00 => match sss {
            0 => Instruction::Nop,
            1 if bit3 => Instruction::Dad(wide_register(pair)),
            1 => Instruction::Lxi(wide_register(pair)),
            2 => match ddd {
                0 => Instruction::Stax(RegisterPair::BC),
                1 => Instruction::Ldax(RegisterPair::BC),
                2 => Instruction::Stax(RegisterPair::DE),
                3 => Instruction::Ldax(RegisterPair::DE),
                4 => Instruction::Shld,
                5 => Instruction::Lhld,
                6 => Instruction::Sta,
                _ => Instruction::Lda,
            },
            3 if bit3 => Instruction::Dcx(wide_register(pair)),
            3 => Instruction::Inx(wide_register(pair)),
            4 => Instruction::Inr(operand(ddd)),
            5 => Instruction::Dcr(operand(ddd)),
            6 => Instruction::Mvi(operand(ddd)),
            _ => match ddd {
                0 => Instruction::Rlc,
                1 => Instruction::Rrc,
                2 => Instruction::Ral,
                3 => Instruction::Rar,
                4 => Instruction::Daa,
                5 => Instruction::Cma,
                6 => Instruction::Stc,
                _ => Instruction::Cmc,
            },
        },
        // MOV M,M would be 0x76, which is HLT instead
        0b01 if opcode == 0x76 => Instruction::Hlt,
        0b01 => Instruction::Mov {
            dst: operand(ddd),
            src: operand(sss),
        },
        0b10 => Instruction::Alu(alu_op(ddd), operand(sss)),
        _ => match sss {
            0 => Instruction::Ret(Some(condition(ddd))),
            1 if !bit3 => Instruction::Pop(stack_operand(pair)),
            1 => match pair {
                0 | 1 => Instruction::Ret(None),
                2 => Instruction::Pchl,
                _ => Instruction::Sphl,
            },
            2 => Instruction::Jmp(Some(condition(ddd))),
            3 => match ddd {
                0 | 1 => Instruction::Jmp(None),
                2 => Instruction::Out,
                3 => Instruction::In,
                4 => Instruction::Xthl,
                5 => Instruction::Xchg,
                6 => Instruction::Di,
                _ => Instruction::Ei,
            },
            4 => Instruction::Call(Some(condition(ddd))),
            5 if !bit3 => Instruction::Push(stack_operand(pair)),
            5 => Instruction::Call(None),
            6 => Instruction::AluImmediate(alu_op(ddd)),
            _ => Instruction::Rst(ddd),
        },
    }
}

/// Every opcode decoded, indexed by opcode byte.
///
/// # Examples
///
/// ```
/// use lib8080::{Instruction, Operand, Register, DECODE_TABLE};
///
/// assert_eq!(
///     DECODE_TABLE[0x47],
///     Instruction::Mov {
///         dst: Operand::Register(Register::B),
///         src: Operand::Register(Register::A),
///     }
/// );
/// assert_eq!(DECODE_TABLE[0x76], Instruction::Hlt);
/// assert_eq!(DECODE_TABLE[0xD9], Instruction::Ret(None));
/// ```
pub const DECODE_TABLE: [Instruction; 256] = {
    let mut table = [Instruction::Nop; 256];
    let mut opcode = 0;
    while opcode < 256 {
        table[opcode] = decode(opcode as u8);
        opcode += 1;
    }
    table
};

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use lib8080::OPCODE_TABLE;
///
/// let lxi_sp = &OPCODE_TABLE[0x31];
/// assert_eq!(lxi_sp.mnemonic, "LXI");
/// assert_eq!(lxi_sp.operands, "SP");
/// assert_eq!(lxi_sp.size_bytes, 3);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    /* 0x00 */ op("NOP", "", 1),
    /* 0x01 */ op("LXI", "B", 3),
    /* 0x02 */ op("STAX", "B", 1),
    /* 0x03 */ op("INX", "B", 1),
    /* 0x04 */ op("INR", "B", 1),
    /* 0x05 */ op("DCR", "B", 1),
    /* 0x06 */ op("MVI", "B", 2),
    /* 0x07 */ op("RLC", "", 1),
    /* 0x08 */ alias("NOP", "", 1),
    /* 0x09 */ op("DAD", "B", 1),
    /* 0x0A */ op("LDAX", "B", 1),
    /* 0x0B */ op("DCX", "B", 1),
    /* 0x0C */ op("INR", "C", 1),
    /* 0x0D */ op("DCR", "C", 1),
    /* 0x0E */ op("MVI", "C", 2),
    /* 0x0F */ op("RRC", "", 1),
    /* 0x10 */ alias("NOP", "", 1),
    /* 0x11 */ op("LXI", "D", 3),
    /* 0x12 */ op("STAX", "D", 1),
    /* 0x13 */ op("INX", "D", 1),
    /* 0x14 */ op("INR", "D", 1),
    /* 0x15 */ op("DCR", "D", 1),
    /* 0x16 */ op("MVI", "D", 2),
    /* 0x17 */ op("RAL", "", 1),
    /* 0x18 */ alias("NOP", "", 1),
    /* 0x19 */ op("DAD", "D", 1),
    /* 0x1A */ op("LDAX", "D", 1),
    /* 0x1B */ op("DCX", "D", 1),
    /* 0x1C */ op("INR", "E", 1),
    /* 0x1D */ op("DCR", "E", 1),
    /* 0x1E */ op("MVI", "E", 2),
    /* 0x1F */ op("RAR", "", 1),
    /* 0x20 */ alias("NOP", "", 1),
    /* 0x21 */ op("LXI", "H", 3),
    /* 0x22 */ op("SHLD", "", 3),
    /* 0x23 */ op("INX", "H", 1),
    /* 0x24 */ op("INR", "H", 1),
    /* 0x25 */ op("DCR", "H", 1),
    /* 0x26 */ op("MVI", "H", 2),
    /* 0x27 */ op("DAA", "", 1),
    /* 0x28 */ alias("NOP", "", 1),
    /* 0x29 */ op("DAD", "H", 1),
    /* 0x2A */ op("LHLD", "", 3),
    /* 0x2B */ op("DCX", "H", 1),
    /* 0x2C */ op("INR", "L", 1),
    /* 0x2D */ op("DCR", "L", 1),
    /* 0x2E */ op("MVI", "L", 2),
    /* 0x2F */ op("CMA", "", 1),
    /* 0x30 */ alias("NOP", "", 1),
    /* 0x31 */ op("LXI", "SP", 3),
    /* 0x32 */ op("STA", "", 3),
    /* 0x33 */ op("INX", "SP", 1),
    /* 0x34 */ op("INR", "M", 1),
    /* 0x35 */ op("DCR", "M", 1),
    /* 0x36 */ op("MVI", "M", 2),
    /* 0x37 */ op("STC", "", 1),
    /* 0x38 */ alias("NOP", "", 1),
    /* 0x39 */ op("DAD", "SP", 1),
    /* 0x3A */ op("LDA", "", 3),
    /* 0x3B */ op("DCX", "SP", 1),
    /* 0x3C */ op("INR", "A", 1),
    /* 0x3D */ op("DCR", "A", 1),
    /* 0x3E */ op("MVI", "A", 2),
    /* 0x3F */ op("CMC", "", 1),
    /* 0x40 */ op("MOV", "B,B", 1),
    /* 0x41 */ op("MOV", "B,C", 1),
    /* 0x42 */ op("MOV", "B,D", 1),
    /* 0x43 */ op("MOV", "B,E", 1),
    /* 0x44 */ op("MOV", "B,H", 1),
    /* 0x45 */ op("MOV", "B,L", 1),
    /* 0x46 */ op("MOV", "B,M", 1),
    /* 0x47 */ op("MOV", "B,A", 1),
    /* 0x48 */ op("MOV", "C,B", 1),
    /* 0x49 */ op("MOV", "C,C", 1),
    /* 0x4A */ op("MOV", "C,D", 1),
    /* 0x4B */ op("MOV", "C,E", 1),
    /* 0x4C */ op("MOV", "C,H", 1),
    /* 0x4D */ op("MOV", "C,L", 1),
    /* 0x4E */ op("MOV", "C,M", 1),
    /* 0x4F */ op("MOV", "C,A", 1),
    /* 0x50 */ op("MOV", "D,B", 1),
    /* 0x51 */ op("MOV", "D,C", 1),
    /* 0x52 */ op("MOV", "D,D", 1),
    /* 0x53 */ op("MOV", "D,E", 1),
    /* 0x54 */ op("MOV", "D,H", 1),
    /* 0x55 */ op("MOV", "D,L", 1),
    /* 0x56 */ op("MOV", "D,M", 1),
    /* 0x57 */ op("MOV", "D,A", 1),
    /* 0x58 */ op("MOV", "E,B", 1),
    /* 0x59 */ op("MOV", "E,C", 1),
    /* 0x5A */ op("MOV", "E,D", 1),
    /* 0x5B */ op("MOV", "E,E", 1),
    /* 0x5C */ op("MOV", "E,H", 1),
    /* 0x5D */ op("MOV", "E,L", 1),
    /* 0x5E */ op("MOV", "E,M", 1),
    /* 0x5F */ op("MOV", "E,A", 1),
    /* 0x60 */ op("MOV", "H,B", 1),
    /* 0x61 */ op("MOV", "H,C", 1),
    /* 0x62 */ op("MOV", "H,D", 1),
    /* 0x63 */ op("MOV", "H,E", 1),
    /* 0x64 */ op("MOV", "H,H", 1),
    /* 0x65 */ op("MOV", "H,L", 1),
    /* 0x66 */ op("MOV", "H,M", 1),
    /* 0x67 */ op("MOV", "H,A", 1),
    /* 0x68 */ op("MOV", "L,B", 1),
    /* 0x69 */ op("MOV", "L,C", 1),
    /* 0x6A */ op("MOV", "L,D", 1),
    /* 0x6B */ op("MOV", "L,E", 1),
    /* 0x6C */ op("MOV", "L,H", 1),
    /* 0x6D */ op("MOV", "L,L", 1),
    /* 0x6E */ op("MOV", "L,M", 1),
    /* 0x6F */ op("MOV", "L,A", 1),
    /* 0x70 */ op("MOV", "M,B", 1),
    /* 0x71 */ op("MOV", "M,C", 1),
    /* 0x72 */ op("MOV", "M,D", 1),
    /* 0x73 */ op("MOV", "M,E", 1),
    /* 0x74 */ op("MOV", "M,H", 1),
    /* 0x75 */ op("MOV", "M,L", 1),
    /* 0x76 */ op("HLT", "", 1),
    /* 0x77 */ op("MOV", "M,A", 1),
    /* 0x78 */ op("MOV", "A,B", 1),
    /* 0x79 */ op("MOV", "A,C", 1),
    /* 0x7A */ op("MOV", "A,D", 1),
    /* 0x7B */ op("MOV", "A,E", 1),
    /* 0x7C */ op("MOV", "A,H", 1),
    /* 0x7D */ op("MOV", "A,L", 1),
    /* 0x7E */ op("MOV", "A,M", 1),
    /* 0x7F */ op("MOV", "A,A", 1),
    /* 0x80 */ op("ADD", "B", 1),
    /* 0x81 */ op("ADD", "C", 1),
    /* 0x82 */ op("ADD", "D", 1),
    /* 0x83 */ op("ADD", "E", 1),
    /* 0x84 */ op("ADD", "H", 1),
    /* 0x85 */ op("ADD", "L", 1),
    /* 0x86 */ op("ADD", "M", 1),
    /* 0x87 */ op("ADD", "A", 1),
    /* 0x88 */ op("ADC", "B", 1),
    /* 0x89 */ op("ADC", "C", 1),
    /* 0x8A */ op("ADC", "D", 1),
    /* 0x8B */ op("ADC", "E", 1),
    /* 0x8C */ op("ADC", "H", 1),
    /* 0x8D */ op("ADC", "L", 1),
    /* 0x8E */ op("ADC", "M", 1),
    /* 0x8F */ op("ADC", "A", 1),
    /* 0x90 */ op("SUB", "B", 1),
    /* 0x91 */ op("SUB", "C", 1),
    /* 0x92 */ op("SUB", "D", 1),
    /* 0x93 */ op("SUB", "E", 1),
    /* 0x94 */ op("SUB", "H", 1),
    /* 0x95 */ op("SUB", "L", 1),
    /* 0x96 */ op("SUB", "M", 1),
    /* 0x97 */ op("SUB", "A", 1),
    /* 0x98 */ op("SBB", "B", 1),
    /* 0x99 */ op("SBB", "C", 1),
    /* 0x9A */ op("SBB", "D", 1),
    /* 0x9B */ op("SBB", "E", 1),
    /* 0x9C */ op("SBB", "H", 1),
    /* 0x9D */ op("SBB", "L", 1),
    /* 0x9E */ op("SBB", "M", 1),
    /* 0x9F */ op("SBB", "A", 1),
    /* 0xA0 */ op("ANA", "B", 1),
    /* 0xA1 */ op("ANA", "C", 1),
    /* 0xA2 */ op("ANA", "D", 1),
    /* 0xA3 */ op("ANA", "E", 1),
    /* 0xA4 */ op("ANA", "H", 1),
    /* 0xA5 */ op("ANA", "L", 1),
    /* 0xA6 */ op("ANA", "M", 1),
    /* 0xA7 */ op("ANA", "A", 1),
    /* 0xA8 */ op("XRA", "B", 1),
    /* 0xA9 */ op("XRA", "C", 1),
    /* 0xAA */ op("XRA", "D", 1),
    /* 0xAB */ op("XRA", "E", 1),
    /* 0xAC */ op("XRA", "H", 1),
    /* 0xAD */ op("XRA", "L", 1),
    /* 0xAE */ op("XRA", "M", 1),
    /* 0xAF */ op("XRA", "A", 1),
    /* 0xB0 */ op("ORA", "B", 1),
    /* 0xB1 */ op("ORA", "C", 1),
    /* 0xB2 */ op("ORA", "D", 1),
    /* 0xB3 */ op("ORA", "E", 1),
    /* 0xB4 */ op("ORA", "H", 1),
    /* 0xB5 */ op("ORA", "L", 1),
    /* 0xB6 */ op("ORA", "M", 1),
    /* 0xB7 */ op("ORA", "A", 1),
    /* 0xB8 */ op("CMP", "B", 1),
    /* 0xB9 */ op("CMP", "C", 1),
    /* 0xBA */ op("CMP", "D", 1),
    /* 0xBB */ op("CMP", "E", 1),
    /* 0xBC */ op("CMP", "H", 1),
    /* 0xBD */ op("CMP", "L", 1),
    /* 0xBE */ op("CMP", "M", 1),
    /* 0xBF */ op("CMP", "A", 1),
    /* 0xC0 */ op("RNZ", "", 1),
    /* 0xC1 */ op("POP", "B", 1),
    /* 0xC2 */ op("JNZ", "", 3),
    /* 0xC3 */ op("JMP", "", 3),
    /* 0xC4 */ op("CNZ", "", 3),
    /* 0xC5 */ op("PUSH", "B", 1),
    /* 0xC6 */ op("ADI", "", 2),
    /* 0xC7 */ op("RST", "0", 1),
    /* 0xC8 */ op("RZ", "", 1),
    /* 0xC9 */ op("RET", "", 1),
    /* 0xCA */ op("JZ", "", 3),
    /* 0xCB */ alias("JMP", "", 3),
    /* 0xCC */ op("CZ", "", 3),
    /* 0xCD */ op("CALL", "", 3),
    /* 0xCE */ op("ACI", "", 2),
    /* 0xCF */ op("RST", "1", 1),
    /* 0xD0 */ op("RNC", "", 1),
    /* 0xD1 */ op("POP", "D", 1),
    /* 0xD2 */ op("JNC", "", 3),
    /* 0xD3 */ op("OUT", "", 2),
    /* 0xD4 */ op("CNC", "", 3),
    /* 0xD5 */ op("PUSH", "D", 1),
    /* 0xD6 */ op("SUI", "", 2),
    /* 0xD7 */ op("RST", "2", 1),
    /* 0xD8 */ op("RC", "", 1),
    /* 0xD9 */ alias("RET", "", 1),
    /* 0xDA */ op("JC", "", 3),
    /* 0xDB */ op("IN", "", 2),
    /* 0xDC */ op("CC", "", 3),
    /* 0xDD */ alias("CALL", "", 3),
    /* 0xDE */ op("SBI", "", 2),
    /* 0xDF */ op("RST", "3", 1),
    /* 0xE0 */ op("RPO", "", 1),
    /* 0xE1 */ op("POP", "H", 1),
    /* 0xE2 */ op("JPO", "", 3),
    /* 0xE3 */ op("XTHL", "", 1),
    /* 0xE4 */ op("CPO", "", 3),
    /* 0xE5 */ op("PUSH", "H", 1),
    /* 0xE6 */ op("ANI", "", 2),
    /* 0xE7 */ op("RST", "4", 1),
    /* 0xE8 */ op("RPE", "", 1),
    /* 0xE9 */ op("PCHL", "", 1),
    /* 0xEA */ op("JPE", "", 3),
    /* 0xEB */ op("XCHG", "", 1),
    /* 0xEC */ op("CPE", "", 3),
    /* 0xED */ alias("CALL", "", 3),
    /* 0xEE */ op("XRI", "", 2),
    /* 0xEF */ op("RST", "5", 1),
    /* 0xF0 */ op("RP", "", 1),
    /* 0xF1 */ op("POP", "PSW", 1),
    /* 0xF2 */ op("JP", "", 3),
    /* 0xF3 */ op("DI", "", 1),
    /* 0xF4 */ op("CP", "", 3),
    /* 0xF5 */ op("PUSH", "PSW", 1),
    /* 0xF6 */ op("ORI", "", 2),
    /* 0xF7 */ op("RST", "6", 1),
    /* 0xF8 */ op("RM", "", 1),
    /* 0xF9 */ op("SPHL", "", 1),
    /* 0xFA */ op("JM", "", 3),
    /* 0xFB */ op("EI", "", 1),
    /* 0xFC */ op("CM", "", 3),
    /* 0xFD */ alias("CALL", "", 3),
    /* 0xFE */ op("CPI", "", 2),
    /* 0xFF */ op("RST", "7", 1),
];
