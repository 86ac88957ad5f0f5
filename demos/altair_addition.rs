//! The addition program from part 3-B of the Altair 8800 operator's manual.
//!
//! Loads two numbers from memory, adds them, stores the sum and jumps back to
//! the start.
//! Run with: `cargo run --example altair_addition`

use lib8080::{disassemble, format_instruction, DisassemblyOptions, FlatMemory, MemoryBus, CPU};

fn main() {
    println!("Altair 8800 Addition Program");
    println!("============================\n");

    let program = [
        0x3A, 0x80, 0x00, // LDA 0080H
        0x47, // MOV B,A
        0x3A, 0x81, 0x00, // LDA 0081H
        0x80, // ADD B
        0x32, 0x82, 0x00, // STA 0082H
        0xC3, 0x00, 0x00, // JMP 0000H
    ];

    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load(0x0000, &program).unwrap();
    cpu.memory_mut().write(0x0080, 4);
    cpu.memory_mut().write(0x0081, 2);

    println!("Program:");
    for instr in disassemble(&program, DisassemblyOptions::default()) {
        println!("  {:04X}: {}", instr.address, format_instruction(&instr));
    }
    println!();

    // Six instructions, the last being the jump back to 0000H
    for _ in 0..6 {
        let pc = cpu.pc();
        cpu.step();
        println!(
            "PC={:04X}  A={:02X} B={:02X}  status={:08b}",
            pc,
            cpu.a(),
            cpu.b(),
            cpu.status()
        );
    }

    println!(
        "\n{} + {} = {}",
        cpu.memory().read(0x0080),
        cpu.memory().read(0x0081),
        cpu.memory().read(0x0082)
    );
    println!("PC is back at {:04X}H", cpu.pc());
}
