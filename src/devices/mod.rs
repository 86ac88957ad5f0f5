//! Port-mapped device support for the 8080 emulator.
//!
//! The 8080 addresses peripherals through a separate 8-bit port space reached
//! only by the IN and OUT instructions. This module provides the bus that
//! routes those transfers to host-supplied devices.
//!
//! # Architecture
//!
//! - **Device trait**: Byte-in/byte-out interface for a port-attached peripheral
//! - **IoBus**: 256 port slots, each empty or holding one device
//! - **Device implementations**: [`BufferedDevice`], a FIFO harness device, and
//!   [`SerialConsole`], an 88-2SIO style status/data port pair
//!
//! Ports without a device read as 0x00 and ignore writes.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use lib8080::{BufferedDevice, CPU, FlatMemory};
//!
//! let console = Rc::new(RefCell::new(BufferedDevice::new()));
//! let mut cpu = CPU::new(FlatMemory::new());
//!
//! // The host keeps one handle, the CPU owns the other
//! cpu.bind_device(0x01, Box::new(Rc::clone(&console)));
//!
//! // MVI A,'!' ; OUT 01H
//! cpu.load(0x0000, &[0x3E, b'!', 0xD3, 0x01]).unwrap();
//! cpu.run(2);
//!
//! assert_eq!(console.borrow_mut().take_output(), b"!");
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

// Device implementations
pub mod buffered;
pub mod console;

// Re-export device types
pub use buffered::BufferedDevice;
pub use console::SerialConsole;

/// Abstract interface for port-mapped hardware devices.
///
/// A device sees only the bytes transferred through its port. Both methods
/// take `&mut self` because reading a port commonly consumes input (a
/// keyboard buffer, a receive register).
///
/// # Examples
///
/// ```rust
/// use lib8080::Device;
///
/// /// Reports a fixed value, like front-panel sense switches.
/// struct SenseSwitches(u8);
///
/// impl Device for SenseSwitches {
///     fn read_byte(&mut self) -> u8 {
///         self.0
///     }
///
///     fn write_byte(&mut self, _value: u8) {}
/// }
/// ```
pub trait Device {
    /// Returns the next byte for an IN instruction.
    fn read_byte(&mut self) -> u8;

    /// Accepts the byte written by an OUT instruction.
    fn write_byte(&mut self, value: u8);
}

/// Shared devices: the host keeps a clone of the `Rc` to inspect or feed the
/// device while the bus owns another.
impl<D: Device + ?Sized> Device for Rc<RefCell<D>> {
    fn read_byte(&mut self) -> u8 {
        self.borrow_mut().read_byte()
    }

    fn write_byte(&mut self, value: u8) {
        self.borrow_mut().write_byte(value);
    }
}

impl<D: Device + ?Sized> Device for Box<D> {
    fn read_byte(&mut self) -> u8 {
        (**self).read_byte()
    }

    fn write_byte(&mut self, value: u8) {
        (**self).write_byte(value);
    }
}

/// Number of addressable I/O ports.
pub const PORT_COUNT: usize = 256;

/// Port bus that routes IN/OUT transfers to bound devices.
///
/// # Examples
///
/// ```rust
/// use lib8080::{BufferedDevice, IoBus};
///
/// let mut bus = IoBus::new();
/// assert_eq!(bus.input(5), 0x00);
/// bus.output(5, 0x42); // unbound: ignored
///
/// let mut device = BufferedDevice::new();
/// device.push_input(0x7F);
/// bus.bind(5, Box::new(device));
///
/// assert!(bus.is_bound(5));
/// assert_eq!(bus.input(5), 0x7F);
/// ```
pub struct IoBus {
    ports: [Option<Box<dyn Device>>; PORT_COUNT],
}

impl IoBus {
    /// Creates a bus with every port unbound.
    pub fn new() -> Self {
        Self {
            ports: std::array::from_fn(|_| None),
        }
    }

    /// Binds a device to `port`, returning the device previously bound there.
    pub fn bind(&mut self, port: u8, device: Box<dyn Device>) -> Option<Box<dyn Device>> {
        tracing::debug!(port, "device bound");
        self.ports[port as usize].replace(device)
    }

    /// Unbinds and returns the device on `port`, if any.
    pub fn unbind(&mut self, port: u8) -> Option<Box<dyn Device>> {
        let previous = self.ports[port as usize].take();
        if previous.is_some() {
            tracing::debug!(port, "device unbound");
        }
        previous
    }

    /// Returns true if a device is bound to `port`.
    pub fn is_bound(&self, port: u8) -> bool {
        self.ports[port as usize].is_some()
    }

    /// Iterates over the numbers of all bound ports, in ascending order.
    pub fn bound_ports(&self) -> impl Iterator<Item = u8> + '_ {
        self.ports
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(port, _)| port as u8)
    }

    /// Delivers `value` to the device on `port`; unbound ports drop it.
    pub fn output(&mut self, port: u8, value: u8) {
        match self.ports[port as usize].as_mut() {
            Some(device) => device.write_byte(value),
            None => tracing::trace!(port, value, "write to unbound port"),
        }
    }

    /// Reads a byte from the device on `port`; unbound ports read as 0x00.
    pub fn input(&mut self, port: u8) -> u8 {
        match self.ports[port as usize].as_mut() {
            Some(device) => device.read_byte(),
            None => {
                tracing::trace!(port, "read from unbound port");
                0x00
            }
        }
    }
}

impl Default for IoBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IoBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IoBus")
            .field("bound_ports", &self.bound_ports().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Simple test device for unit testing
    struct Latch {
        value: u8,
    }

    impl Device for Latch {
        fn read_byte(&mut self) -> u8 {
            self.value
        }

        fn write_byte(&mut self, value: u8) {
            self.value = value;
        }
    }

    #[test]
    fn test_empty_bus() {
        let mut bus = IoBus::new();

        assert_eq!(bus.bound_ports().count(), 0);
        assert_eq!(bus.input(0x00), 0x00);
        assert_eq!(bus.input(0xFF), 0x00);

        // Writing to an unbound port should not panic
        bus.output(0x10, 0x42);
        assert!(!bus.is_bound(0x10));
    }

    #[test]
    fn test_bound_device_round_trip() {
        let mut bus = IoBus::new();
        bus.bind(0x10, Box::new(Latch { value: 0 }));

        bus.output(0x10, 0x5A);
        assert_eq!(bus.input(0x10), 0x5A);

        // Neighbouring ports are unaffected
        assert_eq!(bus.input(0x11), 0x00);
    }

    #[test]
    fn test_rebind_returns_previous_device() {
        let mut bus = IoBus::new();

        assert!(bus.bind(3, Box::new(Latch { value: 1 })).is_none());
        let mut previous = bus.bind(3, Box::new(Latch { value: 2 })).unwrap();

        assert_eq!(previous.read_byte(), 1);
        assert_eq!(bus.input(3), 2);
    }

    #[test]
    fn test_unbind() {
        let mut bus = IoBus::new();
        bus.bind(7, Box::new(Latch { value: 9 }));

        let mut removed = bus.unbind(7).unwrap();
        assert_eq!(removed.read_byte(), 9);
        assert!(!bus.is_bound(7));
        assert!(bus.unbind(7).is_none());
        assert_eq!(bus.input(7), 0x00);
    }

    #[test]
    fn test_shared_device_handle() {
        let latch = Rc::new(RefCell::new(Latch { value: 0 }));
        let mut bus = IoBus::new();
        bus.bind(1, Box::new(Rc::clone(&latch)));

        bus.output(1, 0x33);
        assert_eq!(latch.borrow().value, 0x33);

        latch.borrow_mut().value = 0x44;
        assert_eq!(bus.input(1), 0x44);
    }

    #[test]
    fn test_bound_ports_listing() {
        let mut bus = IoBus::new();
        bus.bind(0xFF, Box::new(Latch { value: 0 }));
        bus.bind(0x00, Box::new(Latch { value: 0 }));

        assert_eq!(bus.bound_ports().collect::<Vec<_>>(), vec![0x00, 0xFF]);
        assert_eq!(format!("{:?}", bus), "IoBus { bound_ports: [0, 255] }");
    }
}
