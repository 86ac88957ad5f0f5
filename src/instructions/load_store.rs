//! # Load and Store Instructions
//!
//! This module implements data movement between registers and memory:
//! - MOV: register/M to register/M
//! - MVI: immediate to register/M
//! - LXI: immediate to register pair or SP
//! - LDA/STA: accumulator from/to a direct address
//! - LDAX/STAX: accumulator from/to the address in BC or DE
//! - LHLD/SHLD: HL from/to a direct address
//! - XCHG: swap HL and DE
//!
//! None of these instructions affect the flags.

use crate::opcodes::{Operand, WideRegister};
use crate::registers::RegisterPair;
use crate::{MemoryBus, CPU};

/// Executes MOV (0x40-0x7F except 0x76).
pub(crate) fn execute_mov<M: MemoryBus>(cpu: &mut CPU<M>, dst: Operand, src: Operand) {
    let value = cpu.read_operand(src);
    cpu.write_operand(dst, value);
}

/// Executes MVI: stores the byte following the opcode.
pub(crate) fn execute_mvi<M: MemoryBus>(cpu: &mut CPU<M>, dst: Operand) {
    let value = cpu.fetch_byte();
    cpu.write_operand(dst, value);
}

/// Executes LXI: loads the little-endian word following the opcode.
pub(crate) fn execute_lxi<M: MemoryBus>(cpu: &mut CPU<M>, dst: WideRegister) {
    let value = cpu.fetch_word();
    cpu.write_wide(dst, value);
}

/// Executes LDA (0x3A).
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>) {
    let addr = cpu.fetch_word();
    let value = cpu.memory.read(addr);
    cpu.set_a(value);
}

/// Executes STA (0x32).
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>) {
    let addr = cpu.fetch_word();
    let value = cpu.a();
    cpu.memory.write(addr, value);
}

/// Executes LDAX B (0x0A) and LDAX D (0x1A).
pub(crate) fn execute_ldax<M: MemoryBus>(cpu: &mut CPU<M>, pair: RegisterPair) {
    let addr = cpu.pair(pair);
    let value = cpu.memory.read(addr);
    cpu.set_a(value);
}

/// Executes STAX B (0x02) and STAX D (0x12).
pub(crate) fn execute_stax<M: MemoryBus>(cpu: &mut CPU<M>, pair: RegisterPair) {
    let addr = cpu.pair(pair);
    let value = cpu.a();
    cpu.memory.write(addr, value);
}

/// Executes LHLD (0x2A): L from `addr`, H from `addr + 1`.
pub(crate) fn execute_lhld<M: MemoryBus>(cpu: &mut CPU<M>) {
    let addr = cpu.fetch_word();
    let value = cpu.memory.read_word(addr);
    cpu.set_pair(RegisterPair::HL, value);
}

/// Executes SHLD (0x22): L to `addr`, H to `addr + 1`.
pub(crate) fn execute_shld<M: MemoryBus>(cpu: &mut CPU<M>) {
    let addr = cpu.fetch_word();
    let value = cpu.pair(RegisterPair::HL);
    cpu.memory.write_word(addr, value);
}

/// Executes XCHG (0xEB).
pub(crate) fn execute_xchg<M: MemoryBus>(cpu: &mut CPU<M>) {
    let de = cpu.pair(RegisterPair::DE);
    let hl = cpu.pair(RegisterPair::HL);
    cpu.set_pair(RegisterPair::DE, hl);
    cpu.set_pair(RegisterPair::HL, de);
}
