//! # 8080 CPU Emulator Core
//!
//! An Intel 8080 CPU emulator designed for modularity, clarity, and
//! WebAssembly portability, aimed at Altair 8800 style machines.
//!
//! This crate provides the processor state, a trait-based memory bus
//! abstraction, a 256-entry table-driven instruction decoder, an accurate ALU,
//! and a port-based I/O bus that external devices plug into.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib8080::{CPU, FlatMemory};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//!
//! // MVI A,05H ; ADI 03H ; HLT
//! cpu.load(0x0000, &[0x3E, 0x05, 0xC6, 0x03, 0x76]).unwrap();
//!
//! cpu.step();
//! cpu.step();
//! assert_eq!(cpu.a(), 0x08);
//!
//! // HLT leaves the program counter on itself
//! cpu.step();
//! assert_eq!(cpu.pc(), 0x0004);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory implementation via the `MemoryBus` trait
//! - **WebAssembly Portability**: No OS dependencies, deterministic execution
//! - **Table-Driven Design**: Every opcode is decoded through a single 256-entry table
//! - **Total Execution**: No opcode can fail; undocumented opcodes alias documented ones
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `registers` / `flags` - register file and condition flags
//! - `alu` - pure arithmetic and logic functions
//! - `opcodes` - opcode metadata and decode tables
//! - `devices` - I/O port bus and the `Device` capability
//! - `disassembler` - machine code to 8080 mnemonics

pub mod alu;
pub mod config;
pub mod cpu;
pub mod devices;
pub mod disassembler;
pub mod flags;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use config::CpuConfig;
pub use cpu::CPU;
pub use devices::{BufferedDevice, Device, IoBus, SerialConsole};
pub use disassembler::{disassemble, format_instruction, DisassembledInstruction, DisassemblyOptions};
pub use flags::Flags;
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{
    AluOp, Condition, Instruction, OpcodeMetadata, Operand, StackOperand, WideRegister, DECODE_TABLE,
    OPCODE_TABLE,
};
pub use registers::{Register, RegisterPair, Registers};

/// Errors reported by the emulator.
///
/// Instruction execution itself never fails; the only checked failure is
/// handing the machine a program image that does not fit in memory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The image does not fit in the 64KB address space when placed at `origin`.
    #[error("image of {len} bytes at 0x{origin:04X} does not fit in the 64KB address space")]
    OutOfBounds {
        /// Requested load address
        origin: u16,
        /// Length of the rejected image
        len: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
