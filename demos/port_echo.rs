//! Example demonstrating port I/O with shared buffered devices.
//!
//! This example shows how to:
//! - Bind devices to I/O ports
//! - Keep a host-side handle to a bound device with `Rc<RefCell<_>>`
//! - Feed input to a program and collect its output
//!
//! Port layout:
//! - Port 01H: input device (keyboard)
//! - Port 02H: output device (printer)
//!
//! Run with: `cargo run --example port_echo`

use lib8080::{BufferedDevice, FlatMemory, CPU};
use std::cell::RefCell;
use std::rc::Rc;

fn main() {
    println!("8080 Port Echo Example");
    println!("======================\n");

    // Copy bytes from port 1 to port 2 until a zero byte arrives
    let program = [
        0xDB, 0x01, // 0000: IN 01H
        0xB7, // 0002: ORA A
        0xCA, 0x0B, 0x00, // 0003: JZ 000BH
        0xD3, 0x02, // 0006: OUT 02H
        0xC3, 0x00, 0x00, // 0008: JMP 0000H
        0x76, // 000B: HLT
    ];

    let keyboard = Rc::new(RefCell::new(BufferedDevice::new()));
    let printer = Rc::new(RefCell::new(BufferedDevice::new()));

    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load(0x0000, &program).unwrap();
    cpu.bind_device(0x01, Box::new(Rc::clone(&keyboard)));
    cpu.bind_device(0x02, Box::new(Rc::clone(&printer)));

    let input = "Hello, Altair!";
    println!("Keyboard input: {:?}", input);
    keyboard.borrow_mut().push_str(input);

    // Run until the program halts on HLT
    let mut steps = 0;
    loop {
        let pc = cpu.pc();
        cpu.step();
        steps += 1;
        if cpu.pc() == pc || steps > 10_000 {
            break;
        }
    }

    let output = printer.borrow_mut().take_output();
    println!("Printer output: {:?}", String::from_utf8_lossy(&output));
    println!("Halted at {:04X}H after {} instructions", cpu.pc(), steps);
}
