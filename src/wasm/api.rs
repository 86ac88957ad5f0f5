//! WASM API for the 8080 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! disassembly and a serial console.
//!
//! The console is a [`SerialConsole`] on ports 10H (status) and 11H (data),
//! with transmitted characters forwarded to a JavaScript callback.

use crate::devices::console::{SerialConsole, CONSOLE_DATA_PORT, CONSOLE_STATUS_PORT};
use crate::memory::image_end;
use crate::{disassemble, format_instruction, DisassemblyOptions, FlatMemory, MemoryBus, CPU};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// One line of disassembly
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator8080 {
    cpu: CPU<FlatMemory>,
    console: Rc<RefCell<SerialConsole>>,
    program_start: u16,
    program_end: u32,
}

#[wasm_bindgen]
impl Emulator8080 {
    /// Create a new 8080 emulator with 64KB of RAM and a serial console
    /// whose output is passed, one character at a time, to `on_transmit`.
    #[wasm_bindgen(constructor)]
    pub fn new(on_transmit: js_sys::Function) -> Self {
        let console = Rc::new(RefCell::new(SerialConsole::new()));
        console.borrow_mut().set_transmit_callback(move |byte| {
            let text = char::from(byte).to_string();
            let _ = on_transmit.call1(&JsValue::NULL, &JsValue::from_str(&text));
        });

        let mut cpu = CPU::new(FlatMemory::new());
        SerialConsole::attach(&console, &mut cpu, CONSOLE_STATUS_PORT, CONSOLE_DATA_PORT);

        Emulator8080 {
            cpu,
            console,
            program_start: 0x0000,
            program_end: 0x0000,
        }
    }

    /// Execute a single instruction
    pub fn step(&mut self) {
        self.cpu.step();
    }

    /// Execute `steps` instructions
    pub fn run(&mut self, steps: u32) {
        self.cpu.run(steps as usize);
    }

    /// Reset registers and flags; memory and pending console input are kept
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn b(&self) -> u8 {
        self.cpu.b()
    }

    #[wasm_bindgen(getter)]
    pub fn c(&self) -> u8 {
        self.cpu.c()
    }

    #[wasm_bindgen(getter)]
    pub fn d(&self) -> u8 {
        self.cpu.d()
    }

    #[wasm_bindgen(getter)]
    pub fn e(&self) -> u8 {
        self.cpu.e()
    }

    #[wasm_bindgen(getter)]
    pub fn h(&self) -> u8 {
        self.cpu.h()
    }

    #[wasm_bindgen(getter)]
    pub fn l(&self) -> u8 {
        self.cpu.l()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u16 {
        self.cpu.sp()
    }

    /// Packed status byte (S Z 0 AC 0 P 1 CY)
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_s(&self) -> bool {
        self.cpu.flag_s()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_ac(&self) -> bool {
        self.cpu.flag_ac()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_p(&self) -> bool {
        self.cpu.flag_p()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    #[wasm_bindgen(getter)]
    pub fn interrupts_enabled(&self) -> bool {
        self.cpu.interrupts_enabled()
    }

    // Register setters

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    /// Set the stack pointer
    pub fn set_sp(&mut self, addr: u16) {
        self.cpu.set_sp(addr);
    }

    /// Deliver an interrupt carrying `RST vector`; returns whether it was accepted
    pub fn interrupt(&mut self, vector: u8) -> bool {
        self.cpu.interrupt(vector)
    }

    // Console methods

    /// Queue a character typed at the terminal
    pub fn receive_char(&mut self, byte: u8) {
        self.console.borrow_mut().receive_byte(byte);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as usize) << 8;
        js_sys::Uint8Array::from(&self.cpu.memory().as_slice()[start..start + 256])
    }

    /// Load a program into memory and point PC at it
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) -> Result<(), JsError> {
        self.cpu
            .load(start_addr, program)
            .map_err(|e| JsError::new(&e.to_string()))?;

        self.cpu.set_pc(start_addr);
        self.program_start = start_addr;
        self.program_end = image_end(start_addr, program.len()) as u32;
        Ok(())
    }

    /// Disassemble memory starting at an address
    pub fn disassemble(&self, start_addr: u16, num_instructions: u32) -> Vec<JsValue> {
        let memory = &self.cpu.memory().as_slice()[start_addr as usize..];

        let opts = DisassemblyOptions {
            start_address: start_addr,
            hex_dump: false,
        };

        disassemble(memory, opts)
            .iter()
            .take(num_instructions as usize)
            .map(|instr| {
                let mut bytes = vec![instr.opcode];
                bytes.extend_from_slice(&instr.operand_bytes);

                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes,
                    text: format_instruction(instr),
                })
            })
            .collect()
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// One past the last byte of the loaded program (0x10000 for a full image)
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u32 {
        self.program_end
    }
}
