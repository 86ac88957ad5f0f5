//! Serial console laid out like the Altair 88-2SIO.
//!
//! The board occupies two consecutive ports:
//! - Status port: bit 0 set when a received byte is waiting, bit 1 set when the
//!   transmitter can accept a byte (always, here)
//! - Data port: IN takes the oldest received byte, OUT transmits one
//!
//! Transmitted bytes are 7-bit ASCII. Bit 7 is stripped before the byte reaches
//! the host, since Altair software often sends characters with it set.

use super::Device;
use crate::{MemoryBus, CPU};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Default console status port.
pub const CONSOLE_STATUS_PORT: u8 = 0x10;

/// Default console data port.
pub const CONSOLE_DATA_PORT: u8 = 0x11;

/// Status bit: a received byte is waiting.
pub const STATUS_RECEIVE_READY: u8 = 0x01;

/// Status bit: the transmitter is ready.
pub const STATUS_TRANSMIT_READY: u8 = 0x02;

type TransmitCallback = Box<dyn FnMut(u8)>;

/// Console state shared by the status and data ports.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use lib8080::devices::console::{SerialConsole, CONSOLE_DATA_PORT, CONSOLE_STATUS_PORT};
/// use lib8080::{CPU, FlatMemory};
///
/// let printed = Rc::new(RefCell::new(Vec::new()));
/// let console = Rc::new(RefCell::new(SerialConsole::new()));
/// let sink = Rc::clone(&printed);
/// console
///     .borrow_mut()
///     .set_transmit_callback(move |byte| sink.borrow_mut().push(byte));
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// SerialConsole::attach(&console, &mut cpu, CONSOLE_STATUS_PORT, CONSOLE_DATA_PORT);
///
/// // MVI A,'K' ; OUT 11H
/// cpu.load(0x0000, &[0x3E, b'K', 0xD3, 0x11]).unwrap();
/// cpu.run(2);
///
/// assert_eq!(*printed.borrow(), b"K");
/// ```
#[derive(Default)]
pub struct SerialConsole {
    receive_buffer: VecDeque<u8>,
    on_transmit: Option<TransmitCallback>,
}

impl SerialConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the function that receives every transmitted character.
    pub fn set_transmit_callback<F>(&mut self, callback: F)
    where
        F: FnMut(u8) + 'static,
    {
        self.on_transmit = Some(Box::new(callback));
    }

    /// Queues a byte typed at the terminal.
    pub fn receive_byte(&mut self, value: u8) {
        self.receive_buffer.push_back(value);
    }

    /// Number of received bytes not yet read by the program.
    pub fn pending_input(&self) -> usize {
        self.receive_buffer.len()
    }

    /// Current value of the status register.
    pub fn status(&self) -> u8 {
        if self.receive_buffer.is_empty() {
            STATUS_TRANSMIT_READY
        } else {
            STATUS_TRANSMIT_READY | STATUS_RECEIVE_READY
        }
    }

    fn read_data(&mut self) -> u8 {
        self.receive_buffer.pop_front().unwrap_or(0x00)
    }

    fn transmit(&mut self, value: u8) {
        let ascii = value & 0x7F;
        match self.on_transmit.as_mut() {
            Some(callback) => callback(ascii),
            None => tracing::trace!(value, "console output dropped, no callback"),
        }
    }

    /// Binds the status and data ports of `console` on `cpu`.
    pub fn attach<M: MemoryBus>(
        console: &Rc<RefCell<Self>>,
        cpu: &mut CPU<M>,
        status_port: u8,
        data_port: u8,
    ) {
        cpu.bind_device(status_port, Box::new(ConsoleStatusPort(Rc::clone(console))));
        cpu.bind_device(data_port, Box::new(ConsoleDataPort(Rc::clone(console))));
    }
}

impl fmt::Debug for SerialConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialConsole")
            .field("pending_input", &self.receive_buffer.len())
            .field("has_callback", &self.on_transmit.is_some())
            .finish()
    }
}

/// Status half of the console.
#[derive(Debug)]
pub struct ConsoleStatusPort(pub Rc<RefCell<SerialConsole>>);

impl Device for ConsoleStatusPort {
    fn read_byte(&mut self) -> u8 {
        self.0.borrow().status()
    }

    // Control writes (UART reset, word format) have no effect
    fn write_byte(&mut self, _value: u8) {}
}

/// Data half of the console.
#[derive(Debug)]
pub struct ConsoleDataPort(pub Rc<RefCell<SerialConsole>>);

impl Device for ConsoleDataPort {
    fn read_byte(&mut self) -> u8 {
        self.0.borrow_mut().read_data()
    }

    fn write_byte(&mut self, value: u8) {
        self.0.borrow_mut().transmit(value);
    }
}
