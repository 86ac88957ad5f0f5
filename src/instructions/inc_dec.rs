//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INR: Increment register or M (S, Z, AC, P; carry untouched)
//! - DCR: Decrement register or M (S, Z, AC, P; carry untouched)
//! - INX: Increment register pair or SP (no flags)
//! - DCX: Decrement register pair or SP (no flags)
//!
//! The 16-bit forms wrap modulo 65536, so DCX of 0x0000 yields 0xFFFF with the
//! borrow carried across both halves of the pair.

use crate::opcodes::{Operand, WideRegister};
use crate::{MemoryBus, CPU};

/// Executes INR (0x04, 0x0C, ... 0x3C).
pub(crate) fn execute_inr<M: MemoryBus>(cpu: &mut CPU<M>, dst: Operand) {
    let value = cpu.read_operand(dst);
    let result = cpu.increment(value);
    cpu.write_operand(dst, result);
}

/// Executes DCR (0x05, 0x0D, ... 0x3D).
pub(crate) fn execute_dcr<M: MemoryBus>(cpu: &mut CPU<M>, dst: Operand) {
    let value = cpu.read_operand(dst);
    let result = cpu.decrement(value);
    cpu.write_operand(dst, result);
}

/// Executes INX (0x03, 0x13, 0x23, 0x33).
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>, wide: WideRegister) {
    let value = cpu.read_wide(wide).wrapping_add(1);
    cpu.write_wide(wide, value);
}

/// Executes DCX (0x0B, 0x1B, 0x2B, 0x3B).
pub(crate) fn execute_dcx<M: MemoryBus>(cpu: &mut CPU<M>, wide: WideRegister) {
    let value = cpu.read_wide(wide).wrapping_sub(1);
    cpu.write_wide(wide, value);
}
