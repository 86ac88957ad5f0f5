//! # Flag Instructions
//!
//! This module implements the instructions that set flags directly:
//! - STC: Set Carry
//! - CMC: Complement Carry
//! - EI: Enable Interrupts
//! - DI: Disable Interrupts

use crate::{MemoryBus, CPU};

impl<M: MemoryBus> CPU<M> {
    /// STC: sets the carry flag. No other flag is affected.
    pub fn set_carry(&mut self) {
        self.flags.carry = true;
    }

    /// CMC: inverts the carry flag. No other flag is affected.
    pub fn complement_carry(&mut self) {
        self.flags.carry = !self.flags.carry;
    }
}

/// Executes STC (0x37).
pub(crate) fn execute_stc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_carry();
}

/// Executes CMC (0x3F).
pub(crate) fn execute_cmc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.complement_carry();
}

/// Executes EI (0xFB).
///
/// Interrupts are held off until the following instruction has executed, so
/// a handler ending in `EI; RET` returns before the next interrupt nests.
pub(crate) fn execute_ei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_interrupts_enabled(true);
    cpu.ei_pending = true;
}

/// Executes DI (0xF3).
pub(crate) fn execute_di<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_interrupts_enabled(false);
}
