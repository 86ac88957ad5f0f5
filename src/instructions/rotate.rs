//! # Rotate Instructions
//!
//! The four accumulator rotates. Each moves one bit into the carry flag and
//! leaves every other flag alone.
//!
//! | Opcode | Mnemonic | Bit 0 / bit 7 receives |
//! |--------|----------|------------------------|
//! | 0x07   | RLC      | old bit 7              |
//! | 0x0F   | RRC      | old bit 0              |
//! | 0x17   | RAL      | old carry              |
//! | 0x1F   | RAR      | old carry              |

use crate::{MemoryBus, CPU};

pub(crate) fn execute_rlc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.rotate_left(false);
}

pub(crate) fn execute_rrc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.rotate_right(false);
}

pub(crate) fn execute_ral<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.rotate_left(true);
}

pub(crate) fn execute_rar<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.rotate_right(true);
}
