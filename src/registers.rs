//! # Register File
//!
//! The 8080 has seven 8-bit registers: the accumulator (A) and six general
//! purpose registers (B, C, D, E, H, L). B/C, D/E and H/L can be addressed
//! together as the 16-bit pairs BC, DE and HL, with the first register holding
//! the high byte. H/L doubles as the memory pointer for the `M` operand.
//!
//! All seven registers live in one backing array indexed by their 3-bit
//! instruction encoding, so a pair is only ever a view over two slots and can
//! never drift out of sync with the single registers.

/// An 8-bit register, numbered by its 3-bit encoding in opcodes.
///
/// Encoding 6 selects the memory operand `M` and is therefore not a register;
/// see [`crate::Operand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    B = 0,
    C = 1,
    D = 2,
    E = 3,
    H = 4,
    L = 5,
    A = 7,
}

impl Register {
    /// All registers, in encoding order.
    pub const ALL: [Register; 7] = [
        Register::B,
        Register::C,
        Register::D,
        Register::E,
        Register::H,
        Register::L,
        Register::A,
    ];

    /// Assembler name of the register.
    pub const fn name(self) -> &'static str {
        match self {
            Register::B => "B",
            Register::C => "C",
            Register::D => "D",
            Register::E => "E",
            Register::H => "H",
            Register::L => "L",
            Register::A => "A",
        }
    }
}

/// A 16-bit view over two 8-bit registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterPair {
    BC,
    DE,
    HL,
}

impl RegisterPair {
    /// The (high, low) registers that make up this pair.
    pub const fn halves(self) -> (Register, Register) {
        match self {
            RegisterPair::BC => (Register::B, Register::C),
            RegisterPair::DE => (Register::D, Register::E),
            RegisterPair::HL => (Register::H, Register::L),
        }
    }
}

/// Register file: A, B, C, D, E, H, L plus the program counter and stack pointer.
///
/// # Examples
///
/// ```
/// use lib8080::{Register, RegisterPair, Registers};
///
/// let mut regs = Registers::default();
/// regs.set_pair(RegisterPair::HL, 0x1234);
/// assert_eq!(regs.get(Register::H), 0x12);
/// assert_eq!(regs.get(Register::L), 0x34);
///
/// regs.set(Register::L, 0xFF);
/// assert_eq!(regs.pair(RegisterPair::HL), 0x12FF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    /// B, C, D, E, H, L, (unused), A by encoding
    slots: [u8; 8],

    /// Program counter (address of next byte to fetch)
    pub pc: u16,

    /// Stack pointer (address of the last byte pushed; the stack grows down)
    pub sp: u16,
}

impl Registers {
    /// Reads a single register.
    pub fn get(&self, register: Register) -> u8 {
        self.slots[register as usize]
    }

    /// Writes a single register.
    pub fn set(&mut self, register: Register, value: u8) {
        self.slots[register as usize] = value;
    }

    /// Reads a register pair as `(high << 8) | low`.
    pub fn pair(&self, pair: RegisterPair) -> u16 {
        let (high, low) = pair.halves();
        ((self.get(high) as u16) << 8) | self.get(low) as u16
    }

    /// Writes a register pair, splitting the value across both registers.
    pub fn set_pair(&mut self, pair: RegisterPair, value: u16) {
        let (high, low) = pair.halves();
        self.set(high, (value >> 8) as u8);
        self.set(low, (value & 0xFF) as u8);
    }

    /// Accumulator shorthand.
    pub fn a(&self) -> u8 {
        self.get(Register::A)
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.set(Register::A, value);
    }
}
