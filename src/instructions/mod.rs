//! # 8080 Instruction Implementations
//!
//! This module contains the implementations of all 8080 instructions, organized by category.
//! [`execute`] is the single interpreter: it matches on a decoded
//! [`Instruction`] and hands the work to one function per instruction group.
//! Every handler receives the CPU with PC already past the opcode byte and
//! fetches its own immediate operands.
//!
//! ## Categories
//!
//! - **alu**: Accumulator arithmetic and logic (ADD, ADC, SUB, SBB, ANA, XRA, ORA, CMP, immediates, DAA, CMA, DAD)
//! - **rotate**: Accumulator rotates (RLC, RRC, RAL, RAR)
//! - **load_store**: Data movement (MOV, MVI, LXI, LDA, STA, LDAX, STAX, LHLD, SHLD, XCHG)
//! - **inc_dec**: Increment and decrement (INR, DCR, INX, DCX)
//! - **control**: Jumps, calls, returns, restarts, PCHL, HLT, NOP
//! - **stack**: PUSH, POP, XTHL, SPHL
//! - **flags**: Carry and interrupt-enable manipulation (STC, CMC, EI, DI)
//! - **io**: Port input and output (IN, OUT)

pub(crate) mod alu;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod io;
pub(crate) mod load_store;
pub(crate) mod rotate;
pub(crate) mod stack;

use crate::opcodes::Instruction;
use crate::{MemoryBus, CPU};

/// Applies one decoded instruction to the CPU.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, instruction: Instruction) {
    match instruction {
        Instruction::Nop => {}
        Instruction::Hlt => control::execute_hlt(cpu),

        Instruction::Mov { dst, src } => load_store::execute_mov(cpu, dst, src),
        Instruction::Mvi(dst) => load_store::execute_mvi(cpu, dst),
        Instruction::Lxi(wide) => load_store::execute_lxi(cpu, wide),
        Instruction::Lda => load_store::execute_lda(cpu),
        Instruction::Sta => load_store::execute_sta(cpu),
        Instruction::Ldax(pair) => load_store::execute_ldax(cpu, pair),
        Instruction::Stax(pair) => load_store::execute_stax(cpu, pair),
        Instruction::Lhld => load_store::execute_lhld(cpu),
        Instruction::Shld => load_store::execute_shld(cpu),
        Instruction::Xchg => load_store::execute_xchg(cpu),

        Instruction::Alu(op, src) => {
            let value = cpu.read_operand(src);
            alu::execute_alu(cpu, op, value);
        }
        Instruction::AluImmediate(op) => {
            let value = cpu.fetch_byte();
            alu::execute_alu(cpu, op, value);
        }
        Instruction::Daa => alu::execute_daa(cpu),
        Instruction::Cma => alu::execute_cma(cpu),
        Instruction::Dad(wide) => alu::execute_dad(cpu, wide),

        Instruction::Rlc => rotate::execute_rlc(cpu),
        Instruction::Rrc => rotate::execute_rrc(cpu),
        Instruction::Ral => rotate::execute_ral(cpu),
        Instruction::Rar => rotate::execute_rar(cpu),

        Instruction::Inr(dst) => inc_dec::execute_inr(cpu, dst),
        Instruction::Dcr(dst) => inc_dec::execute_dcr(cpu, dst),
        Instruction::Inx(wide) => inc_dec::execute_inx(cpu, wide),
        Instruction::Dcx(wide) => inc_dec::execute_dcx(cpu, wide),

        Instruction::Jmp(condition) => control::execute_jmp(cpu, condition),
        Instruction::Call(condition) => control::execute_call(cpu, condition),
        Instruction::Ret(condition) => control::execute_ret(cpu, condition),
        Instruction::Rst(vector) => cpu.restart(vector),
        Instruction::Pchl => control::execute_pchl(cpu),

        Instruction::Push(src) => stack::execute_push(cpu, src),
        Instruction::Pop(dst) => stack::execute_pop(cpu, dst),
        Instruction::Xthl => stack::execute_xthl(cpu),
        Instruction::Sphl => stack::execute_sphl(cpu),

        Instruction::Stc => flags::execute_stc(cpu),
        Instruction::Cmc => flags::execute_cmc(cpu),
        Instruction::Ei => flags::execute_ei(cpu),
        Instruction::Di => flags::execute_di(cpu),

        Instruction::In => io::execute_in(cpu),
        Instruction::Out => io::execute_out(cpu),
    }
}
