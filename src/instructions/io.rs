//! # I/O Instructions
//!
//! - IN (0xDB): A = byte read from the port named by the immediate operand
//! - OUT (0xD3): A is written to the port named by the immediate operand
//!
//! Unbound ports read as zero and swallow writes.

use crate::{MemoryBus, CPU};

pub(crate) fn execute_in<M: MemoryBus>(cpu: &mut CPU<M>) {
    let port = cpu.fetch_byte();
    let value = cpu.io.input(port);
    cpu.set_a(value);
}

pub(crate) fn execute_out<M: MemoryBus>(cpu: &mut CPU<M>) {
    let port = cpu.fetch_byte();
    let value = cpu.a();
    cpu.io.output(port, value);
}
