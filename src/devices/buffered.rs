//! FIFO port device for test harnesses and host consoles.

use super::Device;
use std::collections::VecDeque;

/// A device backed by an input queue and an output log.
///
/// IN pops the oldest queued byte, or returns 0x00 when the queue is empty.
/// OUT appends to the output log, which the host drains with
/// [`take_output`](Self::take_output).
///
/// # Example
///
/// ```rust
/// use lib8080::{BufferedDevice, Device};
///
/// let mut device = BufferedDevice::new();
/// device.push_str("hi");
///
/// assert_eq!(device.read_byte(), b'h');
/// assert_eq!(device.read_byte(), b'i');
/// assert_eq!(device.read_byte(), 0x00);
///
/// device.write_byte(b'o');
/// device.write_byte(b'k');
/// assert_eq!(device.take_output(), b"ok");
/// assert!(device.output().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedDevice {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl BufferedDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one byte for a later IN.
    pub fn push_input(&mut self, value: u8) {
        self.input.push_back(value);
    }

    /// Queues every byte of `text`.
    pub fn push_str(&mut self, text: &str) {
        self.input.extend(text.bytes());
    }

    /// Number of bytes still waiting to be read.
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Bytes written so far and not yet taken.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Drains and returns everything written so far.
    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }
}

impl Device for BufferedDevice {
    fn read_byte(&mut self) -> u8 {
        self.input.pop_front().unwrap_or(0x00)
    }

    fn write_byte(&mut self, value: u8) {
        self.output.push(value);
    }
}
