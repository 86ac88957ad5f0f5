//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP/Jcc: Jump to a direct address, optionally on a condition
//! - CALL/Ccc: Push the return address and jump
//! - RET/Rcc: Pop the return address
//! - RST: Call one of the eight restart vectors
//! - PCHL: Jump to the address in HL
//! - HLT: Halt
//!
//! Conditional jumps and calls always consume their two address bytes, so a
//! branch not taken leaves PC on the next instruction.
//!
//! The eight conditions test a single flag:
//!
//! | Condition | Mnemonic suffix | Holds when |
//! |-----------|-----------------|------------|
//! | NotZero   | NZ | Z = 0 |
//! | Zero      | Z  | Z = 1 |
//! | NoCarry   | NC | CY = 0 |
//! | Carry     | C  | CY = 1 |
//! | ParityOdd | PO | P = 0 |
//! | ParityEven| PE | P = 1 |
//! | Plus      | P  | S = 0 |
//! | Minus     | M  | S = 1 |

use crate::flags::Flags;
use crate::opcodes::Condition;
use crate::registers::RegisterPair;
use crate::{MemoryBus, CPU};

impl Condition {
    /// Evaluates the condition against a set of flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::{Condition, Flags};
    ///
    /// let flags = Flags { zero: true, ..Flags::default() };
    /// assert!(Condition::Zero.holds(&flags));
    /// assert!(!Condition::NotZero.holds(&flags));
    /// assert!(Condition::Plus.holds(&flags));
    /// ```
    pub fn holds(self, flags: &Flags) -> bool {
        match self {
            Condition::NotZero => !flags.zero,
            Condition::Zero => flags.zero,
            Condition::NoCarry => !flags.carry,
            Condition::Carry => flags.carry,
            Condition::ParityOdd => !flags.parity,
            Condition::ParityEven => flags.parity,
            Condition::Plus => !flags.sign,
            Condition::Minus => flags.sign,
        }
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Sets PC to `addr`.
    pub fn jump_absolute(&mut self, addr: u16) {
        self.registers.pc = addr;
    }

    /// Pushes the current PC and jumps to `addr`.
    ///
    /// When called from the CALL instruction, PC already points past the
    /// address operand, so the pushed value is the return address.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_sp(0x0100);
    /// cpu.set_pc(0x1003);
    ///
    /// cpu.call_absolute(0x2000);
    /// assert_eq!(cpu.pc(), 0x2000);
    /// assert_eq!(cpu.sp(), 0x00FE);
    ///
    /// cpu.return_from_call();
    /// assert_eq!(cpu.pc(), 0x1003);
    /// assert_eq!(cpu.sp(), 0x0100);
    /// ```
    pub fn call_absolute(&mut self, addr: u16) {
        let return_address = self.registers.pc;
        self.push(return_address);
        self.registers.pc = addr;
    }

    /// Pops PC from the stack.
    pub fn return_from_call(&mut self) {
        self.registers.pc = self.pop();
    }

    /// RST n: calls address `8 * n`. Only the low three bits of `vector` are used.
    pub fn restart(&mut self, vector: u8) {
        self.call_absolute(((vector & 0x07) as u16) * 8);
    }

    /// Accepts an external interrupt carrying `RST vector`.
    ///
    /// If interrupts are enabled, disables them, pushes the return address,
    /// jumps to `8 * vector` and returns `true`. The return address is the
    /// current PC, or the byte after the HLT when the CPU is halted. Otherwise
    /// nothing changes and `false` is returned.
    ///
    /// Interrupts are also refused during the instruction that follows EI.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_sp(0x0100);
    /// cpu.set_pc(0x0400);
    ///
    /// assert!(!cpu.interrupt(7));
    /// assert_eq!(cpu.pc(), 0x0400);
    ///
    /// cpu.set_interrupts_enabled(true);
    /// assert!(cpu.interrupt(7));
    /// assert_eq!(cpu.pc(), 0x0038);
    /// assert!(!cpu.interrupts_enabled());
    /// ```
    pub fn interrupt(&mut self, vector: u8) -> bool {
        if !self.interrupts_enabled || self.ei_pending {
            tracing::trace!(vector, "interrupt refused");
            return false;
        }

        self.interrupts_enabled = false;
        if self.halted {
            self.registers.pc = self.registers.pc.wrapping_add(1);
            self.halted = false;
        }
        let return_address = self.registers.pc;
        self.restart(vector);

        tracing::debug!(vector, return_address, "interrupt accepted");
        true
    }
}

/// Executes JMP and Jcc.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, condition: Option<Condition>) {
    let addr = cpu.fetch_word();
    if condition.map_or(true, |c| c.holds(&cpu.flags)) {
        cpu.jump_absolute(addr);
    }
}

/// Executes CALL and Ccc.
pub(crate) fn execute_call<M: MemoryBus>(cpu: &mut CPU<M>, condition: Option<Condition>) {
    let addr = cpu.fetch_word();
    if condition.map_or(true, |c| c.holds(&cpu.flags)) {
        cpu.call_absolute(addr);
    }
}

/// Executes RET and Rcc.
pub(crate) fn execute_ret<M: MemoryBus>(cpu: &mut CPU<M>, condition: Option<Condition>) {
    if condition.map_or(true, |c| c.holds(&cpu.flags)) {
        cpu.return_from_call();
    }
}

/// Executes PCHL (0xE9).
pub(crate) fn execute_pchl<M: MemoryBus>(cpu: &mut CPU<M>) {
    let addr = cpu.pair(RegisterPair::HL);
    cpu.jump_absolute(addr);
}

/// Executes HLT (0x76).
///
/// PC is moved back onto the HLT opcode, so the CPU keeps executing HLT
/// until the host changes PC or accepts an interrupt. An accepted interrupt
/// returns to the instruction after the HLT.
pub(crate) fn execute_hlt<M: MemoryBus>(cpu: &mut CPU<M>) {
    let pc = cpu.pc().wrapping_sub(1);
    cpu.jump_absolute(pc);
    cpu.halted = true;
}
