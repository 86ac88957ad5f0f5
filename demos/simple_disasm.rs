//! Basic disassembler usage example

use lib8080::disassembler::format_listing;
use lib8080::{disassemble, DisassemblyOptions};

fn main() {
    // Example machine code bytes
    let code = &[
        0x31, 0x00, 0x20, // LXI SP,2000H
        0x21, 0x00, 0x01, // LXI H,0100H
        0x7E, // MOV A,M
        0xFE, 0x0D, // CPI 0DH
        0xCA, 0x10, 0x01, // JZ 0110H
        0xCD, 0x00, 0xF0, // CALL 0F000H
        0x23, // INX H
        0xC3, // truncated JMP
    ];

    let options = DisassemblyOptions {
        start_address: 0x0100,
        hex_dump: true,
    };

    let instructions = disassemble(code, options);

    println!("Disassembled code:");
    print!("{}", format_listing(&instructions, options));
}
