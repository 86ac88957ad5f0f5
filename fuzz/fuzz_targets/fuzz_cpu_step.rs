//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents,
//! then executes a few instructions to find edge cases and crashes.

#![no_main]

use arbitrary::Arbitrary;
use lib8080::{
    BufferedDevice, FlatMemory, Instruction, MemoryBus, CPU, DECODE_TABLE, OPCODE_TABLE,
};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    bc: u16,
    de: u16,
    hl: u16,
    pc: u16,
    sp: u16,
    /// Packed status byte; the constant bits are ignored on load
    status: u8,
    interrupts_enabled: bool,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Bytes around the stack pointer
    stack: [u8; 16],
    /// Bytes around HL, the memory operand
    around_hl: [u8; 16],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    port_input: Vec<u8>,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let state = &input.cpu_state;
    let mut memory = FlatMemory::new();

    for (i, &byte) in input.memory.around_hl.iter().enumerate() {
        memory.write(state.hl.wrapping_add(i as u16), byte);
    }
    for (i, &byte) in input.memory.stack.iter().enumerate() {
        memory.write(state.sp.wrapping_add(i as u16), byte);
    }
    // Written last so the instruction under test is intact
    for (i, &byte) in input.memory.instruction_bytes.iter().enumerate() {
        memory.write(state.pc.wrapping_add(i as u16), byte);
    }

    let mut cpu = CPU::new(memory);
    cpu.set_a(state.a);
    cpu.set_bc(state.bc);
    cpu.set_de(state.de);
    cpu.set_hl(state.hl);
    cpu.set_pc(state.pc);
    cpu.set_sp(state.sp);
    cpu.set_status(state.status);
    cpu.set_interrupts_enabled(state.interrupts_enabled);

    let mut device = BufferedDevice::new();
    for &byte in &input.port_input {
        device.push_input(byte);
    }
    cpu.bind_device(input.memory.instruction_bytes[1], Box::new(device));

    let opcode = input.memory.instruction_bytes[0];
    let size = OPCODE_TABLE[opcode as usize].size_bytes as u16;

    // Execution is total: stepping must never panic
    cpu.step();

    // Constant status bits hold after every instruction
    assert_eq!(cpu.status() & 0b0010_1010, 0b0000_0010);

    // Straight-line instructions advance PC by exactly their size
    let transfers_control = matches!(
        DECODE_TABLE[opcode as usize],
        Instruction::Jmp(_)
            | Instruction::Call(_)
            | Instruction::Ret(_)
            | Instruction::Rst(_)
            | Instruction::Pchl
            | Instruction::Hlt
    );
    if !transfers_control {
        assert_eq!(cpu.pc(), state.pc.wrapping_add(size));
    }

    cpu.run(input.steps as usize);
});
