//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 8080 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A) and B, C, D, E, H, L, usable as pairs BC, DE, HL
//! - **Program counter** (PC): 16-bit address of the next byte to fetch
//! - **Stack pointer** (SP): 16-bit address of the top of a downward-growing stack
//! - **Status flags**: S, Z, AC, P, CY
//! - **Interrupt enable**: toggled by EI/DI
//! - **I/O bus**: 256 ports that external devices can be bound to
//!
//! ## Execution Model
//!
//! `step()` executes exactly one instruction. It fetches the opcode at PC,
//! moves PC past it, looks the opcode up in [`DECODE_TABLE`] and hands the
//! decoded [`crate::Instruction`] to the interpreter. Instructions fetch their
//! own immediate bytes, so PC always ends up past the whole instruction unless
//! the instruction itself transfers control. Execution cannot fail.

use crate::config::CpuConfig;
use crate::devices::{Device, IoBus};
use crate::flags::Flags;
use crate::instructions;
use crate::opcodes::{Operand, WideRegister};
use crate::registers::{Register, RegisterPair, Registers};
use crate::{MemoryBus, Result, DECODE_TABLE, OPCODE_TABLE};

/// 8080 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags,
/// program counter, stack pointer, interrupt enable, the I/O bus and the
/// memory. It is generic over the memory implementation via the `MemoryBus`
/// trait.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use lib8080::{CPU, FlatMemory};
///
/// let mut cpu = CPU::new(FlatMemory::new());
///
/// // LXI SP,2000H ; CALL 0010H
/// cpu.load(0x0000, &[0x31, 0x00, 0x20, 0xCD, 0x10, 0x00]).unwrap();
/// cpu.step();
/// cpu.step();
///
/// assert_eq!(cpu.pc(), 0x0010);
/// assert_eq!(cpu.sp(), 0x1FFE);
/// ```
pub struct CPU<M: MemoryBus> {
    /// A, B, C, D, E, H, L, PC and SP
    pub(crate) registers: Registers,

    /// Condition flags
    pub(crate) flags: Flags,

    /// Interrupt enable flip-flop (EI/DI)
    pub(crate) interrupts_enabled: bool,

    /// Set by EI; interrupts stay blocked until the next instruction completes
    pub(crate) ei_pending: bool,

    /// Set by HLT, cleared by any other instruction, a PC change or an interrupt
    pub(crate) halted: bool,

    /// Port-addressed devices (IN/OUT)
    pub(crate) io: IoBus,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// State restored by `reset()`
    config: CpuConfig,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and the default
    /// configuration (PC = 0, SP = 0, interrupts disabled).
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with the given memory bus and power-on state.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            registers: Registers::default(),
            flags: Flags::default(),
            interrupts_enabled: false,
            ei_pending: false,
            halted: false,
            io: IoBus::new(),
            memory,
            config,
        };
        cpu.reset();
        cpu
    }

    /// Returns registers, flags, PC, SP and interrupt enable to the configured
    /// power-on state. Memory contents and device bindings are kept.
    pub fn reset(&mut self) {
        self.registers = Registers::default();
        self.registers.pc = self.config.reset_pc;
        self.registers.sp = self.config.reset_sp;
        self.flags = Flags::default();
        self.interrupts_enabled = self.config.interrupts_enabled;
        self.ei_pending = false;
        self.halted = false;

        tracing::debug!(
            pc = self.registers.pc,
            sp = self.registers.sp,
            interrupts_enabled = self.interrupts_enabled,
            "cpu reset"
        );
    }

    /// The configuration this CPU resets to.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Executes one instruction.
    ///
    /// Fetches the opcode at PC, advances PC past it and any operand bytes,
    /// and applies the instruction's effects. Jumps, calls, returns, restarts
    /// and PCHL replace PC; HLT leaves PC pointing at itself so that repeated
    /// stepping makes no progress.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.load(0x0000, &[0x3E, 0x42]).unwrap(); // MVI A,42H
    ///
    /// cpu.step();
    /// assert_eq!(cpu.a(), 0x42);
    /// assert_eq!(cpu.pc(), 0x0002);
    /// ```
    pub fn step(&mut self) {
        let pc = self.registers.pc;
        let opcode = self.fetch_byte();

        tracing::trace!(
            pc,
            opcode,
            mnemonic = OPCODE_TABLE[opcode as usize].mnemonic,
            "execute"
        );

        // The instruction after EI has now started, so interrupts open up
        self.ei_pending = false;
        self.halted = false;
        instructions::execute(self, DECODE_TABLE[opcode as usize]);
    }

    /// Executes `steps` instructions.
    ///
    /// There is no pacing and no halt detection: a halted program simply
    /// keeps re-executing HLT.
    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Copies a program image into memory at `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the image does not fit in the
    /// address space; memory is left untouched.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) -> Result<()> {
        self.memory.load(origin, bytes)?;
        tracing::debug!(origin, len = bytes.len(), "program loaded");
        Ok(())
    }

    // ========== Instruction Stream ==========

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.registers.pc);
        self.registers.pc = self.registers.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let low = self.fetch_byte() as u16;
        let high = self.fetch_byte() as u16;
        (high << 8) | low
    }

    /// Reads a register or the byte at HL.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Register(register) => self.registers.get(register),
            Operand::Memory => self.memory.read(self.registers.pair(RegisterPair::HL)),
        }
    }

    /// Writes a register or the byte at HL.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Register(register) => self.registers.set(register, value),
            Operand::Memory => {
                let addr = self.registers.pair(RegisterPair::HL);
                self.memory.write(addr, value);
            }
        }
    }

    pub(crate) fn read_wide(&self, wide: WideRegister) -> u16 {
        match wide {
            WideRegister::Pair(pair) => self.registers.pair(pair),
            WideRegister::StackPointer => self.registers.sp,
        }
    }

    pub(crate) fn write_wide(&mut self, wide: WideRegister, value: u16) {
        match wide {
            WideRegister::Pair(pair) => self.registers.set_pair(pair, value),
            WideRegister::StackPointer => self.registers.sp = value,
        }
    }

    // ========== I/O Bus ==========

    /// Binds a device to an I/O port, returning the device previously bound there.
    pub fn bind_device(&mut self, port: u8, device: Box<dyn Device>) -> Option<Box<dyn Device>> {
        self.io.bind(port, device)
    }

    /// Removes and returns the device bound to an I/O port.
    pub fn unbind_device(&mut self, port: u8) -> Option<Box<dyn Device>> {
        self.io.unbind(port)
    }

    /// Returns a shared reference to the I/O bus.
    pub fn io(&self) -> &IoBus {
        &self.io
    }

    /// Returns a mutable reference to the I/O bus.
    pub fn io_mut(&mut self) -> &mut IoBus {
        &mut self.io
    }

    // ========== Memory ==========

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Register Getters/Setters ==========

    /// Returns the accumulator.
    pub fn a(&self) -> u8 {
        self.registers.get(Register::A)
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.registers.set(Register::A, value);
    }

    pub fn b(&self) -> u8 {
        self.registers.get(Register::B)
    }

    pub fn set_b(&mut self, value: u8) {
        self.registers.set(Register::B, value);
    }

    pub fn c(&self) -> u8 {
        self.registers.get(Register::C)
    }

    pub fn set_c(&mut self, value: u8) {
        self.registers.set(Register::C, value);
    }

    pub fn d(&self) -> u8 {
        self.registers.get(Register::D)
    }

    pub fn set_d(&mut self, value: u8) {
        self.registers.set(Register::D, value);
    }

    pub fn e(&self) -> u8 {
        self.registers.get(Register::E)
    }

    pub fn set_e(&mut self, value: u8) {
        self.registers.set(Register::E, value);
    }

    pub fn h(&self) -> u8 {
        self.registers.get(Register::H)
    }

    pub fn set_h(&mut self, value: u8) {
        self.registers.set(Register::H, value);
    }

    pub fn l(&self) -> u8 {
        self.registers.get(Register::L)
    }

    pub fn set_l(&mut self, value: u8) {
        self.registers.set(Register::L, value);
    }

    /// Reads any 8-bit register.
    pub fn register(&self, register: Register) -> u8 {
        self.registers.get(register)
    }

    /// Writes any 8-bit register.
    pub fn set_register(&mut self, register: Register, value: u8) {
        self.registers.set(register, value);
    }

    /// Reads a register pair.
    pub fn pair(&self, pair: RegisterPair) -> u16 {
        self.registers.pair(pair)
    }

    /// Writes a register pair.
    pub fn set_pair(&mut self, pair: RegisterPair, value: u16) {
        self.registers.set_pair(pair, value);
    }

    pub fn bc(&self) -> u16 {
        self.registers.pair(RegisterPair::BC)
    }

    pub fn set_bc(&mut self, value: u16) {
        self.registers.set_pair(RegisterPair::BC, value);
    }

    pub fn de(&self) -> u16 {
        self.registers.pair(RegisterPair::DE)
    }

    pub fn set_de(&mut self, value: u16) {
        self.registers.set_pair(RegisterPair::DE, value);
    }

    pub fn hl(&self) -> u16 {
        self.registers.pair(RegisterPair::HL)
    }

    pub fn set_hl(&mut self, value: u16) {
        self.registers.set_pair(RegisterPair::HL, value);
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.registers.pc
    }

    /// Sets the program counter. A halted CPU stops being halted.
    pub fn set_pc(&mut self, value: u16) {
        self.registers.pc = value;
        self.halted = false;
    }

    /// Returns the stack pointer value.
    ///
    /// The stack grows downward: a push stores at SP-1 and SP-2.
    pub fn sp(&self) -> u16 {
        self.registers.sp
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u16) {
        self.registers.sp = value;
    }

    /// Returns a copy of the whole register file.
    pub fn registers(&self) -> Registers {
        self.registers
    }

    // ========== Status Flags ==========

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (S Z 0 AC 0 P 1 CY):
    /// - Bit 7: S (Sign)
    /// - Bit 6: Z (Zero)
    /// - Bit 5: always 0
    /// - Bit 4: AC (Auxiliary carry)
    /// - Bit 3: always 0
    /// - Bit 2: P (Parity)
    /// - Bit 1: always 1
    /// - Bit 0: CY (Carry)
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// assert_eq!(cpu.status(), 0x02);
    ///
    /// cpu.set_flag_z(true);
    /// cpu.set_flag_c(true);
    /// assert_eq!(cpu.status(), 0x43);
    /// ```
    pub fn status(&self) -> u8 {
        self.flags.to_byte()
    }

    /// Loads all flags from a packed status byte; the constant bits are ignored.
    pub fn set_status(&mut self, status: u8) {
        self.flags = Flags::from_byte(status);
    }

    /// Returns a copy of the flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Replaces all flags.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flags.carry
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flags.carry = value;
    }

    /// Returns true if the Auxiliary Carry flag is set.
    pub fn flag_ac(&self) -> bool {
        self.flags.aux_carry
    }

    pub fn set_flag_ac(&mut self, value: bool) {
        self.flags.aux_carry = value;
    }

    /// Returns true if the Sign flag is set.
    pub fn flag_s(&self) -> bool {
        self.flags.sign
    }

    pub fn set_flag_s(&mut self, value: bool) {
        self.flags.sign = value;
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flags.zero
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flags.zero = value;
    }

    /// Returns true if the Parity flag is set (even parity).
    pub fn flag_p(&self) -> bool {
        self.flags.parity
    }

    pub fn set_flag_p(&mut self, value: bool) {
        self.flags.parity = value;
    }

    /// Returns true if interrupts are enabled (EI executed since the last DI,
    /// reset or accepted interrupt).
    pub fn interrupts_enabled(&self) -> bool {
        self.interrupts_enabled
    }

    /// Sets the interrupt enable flip-flop, taking effect immediately.
    ///
    /// Unlike EI there is no one-instruction delay.
    pub fn set_interrupts_enabled(&mut self, enabled: bool) {
        self.interrupts_enabled = enabled;
        self.ei_pending = false;
    }

    /// True while an EI has not yet been followed by another instruction.
    /// Interrupts are not accepted in that window.
    pub fn interrupt_enable_pending(&self) -> bool {
        self.ei_pending
    }

    /// True if the last instruction executed was HLT and PC has not been
    /// changed since.
    pub fn is_halted(&self) -> bool {
        self.halted
    }
}
