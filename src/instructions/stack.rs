//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PUSH: Push BC, DE, HL or PSW
//! - POP: Pop BC, DE, HL or PSW
//! - XTHL: Exchange HL with the top of the stack
//! - SPHL: Load SP from HL
//!
//! The 8080 stack can live anywhere in memory and grows downward. A push
//! stores the high byte at SP-1 and the low byte at SP-2, leaving SP pointing
//! at the low byte; a pop reads them back in the opposite order. SP wraps
//! modulo 65536.
//!
//! PSW is the accumulator (high byte) together with the packed status byte
//! (low byte).

use crate::flags::Flags;
use crate::opcodes::StackOperand;
use crate::registers::RegisterPair;
use crate::{MemoryBus, CPU};

impl<M: MemoryBus> CPU<M> {
    /// Pushes a 16-bit value onto the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_sp(0x2000);
    /// cpu.push(0xABCD);
    ///
    /// assert_eq!(cpu.sp(), 0x1FFE);
    /// assert_eq!(cpu.memory().read(0x1FFF), 0xAB);
    /// assert_eq!(cpu.memory().read(0x1FFE), 0xCD);
    /// assert_eq!(cpu.pop(), 0xABCD);
    /// assert_eq!(cpu.sp(), 0x2000);
    /// ```
    pub fn push(&mut self, value: u16) {
        let sp = self.registers.sp;
        self.memory.write(sp.wrapping_sub(1), (value >> 8) as u8);
        self.memory.write(sp.wrapping_sub(2), value as u8);
        self.registers.sp = sp.wrapping_sub(2);
    }

    /// Pops a 16-bit value from the stack.
    pub fn pop(&mut self) -> u16 {
        let value = self.memory.read_word(self.registers.sp);
        self.registers.sp = self.registers.sp.wrapping_add(2);
        value
    }
}

/// Executes PUSH (0xC5, 0xD5, 0xE5, 0xF5).
pub(crate) fn execute_push<M: MemoryBus>(cpu: &mut CPU<M>, src: StackOperand) {
    let value = match src {
        StackOperand::Pair(pair) => cpu.pair(pair),
        StackOperand::ProgramStatusWord => ((cpu.a() as u16) << 8) | cpu.status() as u16,
    };
    cpu.push(value);
}

/// Executes POP (0xC1, 0xD1, 0xE1, 0xF1).
///
/// POP PSW restores every flag from the low byte; the constant status bits
/// are normalized on the next read.
pub(crate) fn execute_pop<M: MemoryBus>(cpu: &mut CPU<M>, dst: StackOperand) {
    let value = cpu.pop();
    match dst {
        StackOperand::Pair(pair) => cpu.set_pair(pair, value),
        StackOperand::ProgramStatusWord => {
            cpu.set_a((value >> 8) as u8);
            cpu.flags = Flags::from_byte(value as u8);
        }
    }
}

/// Executes XTHL (0xE3): swaps L with (SP) and H with (SP+1). SP is unchanged.
pub(crate) fn execute_xthl<M: MemoryBus>(cpu: &mut CPU<M>) {
    let sp = cpu.sp();
    let top = cpu.memory.read_word(sp);
    let hl = cpu.pair(RegisterPair::HL);
    cpu.memory.write_word(sp, hl);
    cpu.set_pair(RegisterPair::HL, top);
}

/// Executes SPHL (0xF9).
pub(crate) fn execute_sphl<M: MemoryBus>(cpu: &mut CPU<M>) {
    let hl = cpu.pair(RegisterPair::HL);
    cpu.set_sp(hl);
}
