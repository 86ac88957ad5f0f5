//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements the accumulator operations:
//! - ADD/ADC/SUB/SBB/ANA/XRA/ORA/CMP with a register or M (0x80-0xBF)
//! - ADI/ACI/SUI/SBI/ANI/XRI/ORI/CPI with an immediate byte
//! - DAA: Decimal Adjust Accumulator
//! - CMA: Complement Accumulator
//! - DAD: Double Add into HL
//!
//! The arithmetic itself lives in [`crate::alu`]; the methods here apply it to
//! the CPU's accumulator and flags.

use crate::alu;
use crate::opcodes::{AluOp, WideRegister};
use crate::registers::RegisterPair;
use crate::{MemoryBus, CPU};

impl<M: MemoryBus> CPU<M> {
    /// ADD/ADC: adds `value` (plus the carry flag when `with_carry`) to A.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_a(128);
    /// cpu.add(129, false);
    ///
    /// assert_eq!(cpu.a(), 1);
    /// assert!(cpu.flag_c());
    /// assert!(!cpu.flag_p());
    /// ```
    pub fn add(&mut self, value: u8, with_carry: bool) {
        let carry_in = with_carry && self.flags.carry;
        let result = alu::add(self.a(), value, carry_in, &mut self.flags);
        self.set_a(result);
    }

    /// SUB/SBB: subtracts `value` (plus the carry flag when `with_borrow`) from A.
    /// Carry is set when the subtraction borrows.
    pub fn subtract(&mut self, value: u8, with_borrow: bool) {
        let borrow_in = with_borrow && self.flags.carry;
        let result = alu::subtract(self.a(), value, borrow_in, &mut self.flags);
        self.set_a(result);
    }

    /// ANA: A &= value.
    pub fn logical_and(&mut self, value: u8) {
        let result = alu::logical_and(self.a(), value, &mut self.flags);
        self.set_a(result);
    }

    /// ORA: A |= value.
    pub fn logical_or(&mut self, value: u8) {
        let result = alu::logical_or(self.a(), value, &mut self.flags);
        self.set_a(result);
    }

    /// XRA: A ^= value.
    pub fn logical_xor(&mut self, value: u8) {
        let result = alu::logical_xor(self.a(), value, &mut self.flags);
        self.set_a(result);
    }

    /// CMP: sets the flags of `A - value` and leaves A unchanged.
    pub fn compare(&mut self, value: u8) {
        alu::compare(self.a(), value, &mut self.flags);
    }

    /// RLC or RAL on the accumulator.
    pub fn rotate_left(&mut self, through_carry: bool) {
        let result = alu::rotate_left(self.a(), through_carry, &mut self.flags);
        self.set_a(result);
    }

    /// RRC or RAR on the accumulator.
    pub fn rotate_right(&mut self, through_carry: bool) {
        let result = alu::rotate_right(self.a(), through_carry, &mut self.flags);
        self.set_a(result);
    }

    /// DAA: corrects A to packed BCD after an addition.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_a(0x99);
    /// cpu.add(0x01, false);
    /// cpu.decimal_adjust();
    ///
    /// assert_eq!(cpu.a(), 0x00);
    /// assert!(cpu.flag_c());
    /// ```
    pub fn decimal_adjust(&mut self) {
        let result = alu::decimal_adjust(self.a(), &mut self.flags);
        self.set_a(result);
    }

    /// 16-bit addition that only affects the carry flag.
    pub fn double_add(&mut self, a: u16, b: u16) -> u16 {
        alu::double_add(a, b, &mut self.flags)
    }

    /// Increments a byte, updating S, Z, P and AC. Carry is untouched.
    pub fn increment(&mut self, value: u8) -> u8 {
        alu::increment(value, &mut self.flags)
    }

    /// Decrements a byte, updating S, Z, P and AC. Carry is untouched.
    pub fn decrement(&mut self, value: u8) -> u8 {
        alu::decrement(value, &mut self.flags)
    }

    /// CMA: A = !A. No flags are affected.
    pub fn complement_accumulator(&mut self) {
        let a = self.a();
        self.set_a(!a);
    }
}

/// Executes one of the eight accumulator operations against `value`.
///
/// `value` is either a register, the byte at HL, or an immediate byte already
/// fetched from the instruction stream.
pub(crate) fn execute_alu<M: MemoryBus>(cpu: &mut CPU<M>, op: AluOp, value: u8) {
    match op {
        AluOp::Add => cpu.add(value, false),
        AluOp::AddWithCarry => cpu.add(value, true),
        AluOp::Subtract => cpu.subtract(value, false),
        AluOp::SubtractWithBorrow => cpu.subtract(value, true),
        AluOp::And => cpu.logical_and(value),
        AluOp::Xor => cpu.logical_xor(value),
        AluOp::Or => cpu.logical_or(value),
        AluOp::Compare => cpu.compare(value),
    }
}

/// Executes DAA (0x27).
pub(crate) fn execute_daa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.decimal_adjust();
}

/// Executes CMA (0x2F).
pub(crate) fn execute_cma<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.complement_accumulator();
}

/// Executes DAD (0x09, 0x19, 0x29, 0x39): HL += pair or SP.
///
/// Flags affected: CY only
pub(crate) fn execute_dad<M: MemoryBus>(cpu: &mut CPU<M>, wide: WideRegister) {
    let hl = cpu.pair(RegisterPair::HL);
    let value = cpu.read_wide(wide);
    let result = cpu.double_add(hl, value);
    cpu.set_pair(RegisterPair::HL, result);
}
