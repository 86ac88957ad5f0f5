//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, plus `FlatMemory`, the 64KB store an Altair 8800
//! with a full complement of RAM cards presents to the processor.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 8080 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Addresses are 16-bit, so every address is in range by construction
//! - Only program loading can fail, when the image is larger than the space left

use crate::{Error, Result};

/// Number of addressable bytes (0x0000-0xFFFF).
pub const MEMORY_SIZE: usize = 0x1_0000;

/// One past the last address an image of `len` bytes loaded at `origin`
/// occupies.
///
/// The result is wider than an address: a full 64KB image at 0x0000 ends at
/// 0x10000. An image fits when the result is at most [`MEMORY_SIZE`].
///
/// # Examples
///
/// ```
/// use lib8080::memory::image_end;
///
/// assert_eq!(image_end(0x0100, 3), 0x0103);
/// assert_eq!(image_end(0x0000, 0x1_0000), 0x1_0000);
/// ```
pub fn image_end(origin: u16, len: usize) -> usize {
    (origin as usize).saturating_add(len)
}

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// Instruction fetches, operand reads, stack traffic and data accesses all go
/// through this abstraction. Port I/O does not; see [`crate::IoBus`].
///
/// # Examples
///
/// ```
/// use lib8080::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use lib8080::MemoryBus;
///
/// struct RomRamMemory {
///     ram: Vec<u8>, // 0x0000-0xDFFF
///     rom: Vec<u8>, // 0xE000-0xFFFF
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0xE000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0xE000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0xE000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only regions may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    ///
    /// The second address wraps from 0xFFFF to 0x0000.
    fn read_word(&self, addr: u16) -> u16 {
        let low = self.read(addr) as u16;
        let high = self.read(addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Writes a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Copies a program image into memory starting at `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `origin + bytes.len()` exceeds the
    /// 64KB address space. Nothing is written in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::{Error, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x0100, &[0x3E, 0x42]).unwrap();
    /// assert_eq!(mem.read(0x0101), 0x42);
    ///
    /// let err = mem.load(0xFFFF, &[0x00, 0x00]).unwrap_err();
    /// assert_eq!(err, Error::OutOfBounds { origin: 0xFFFF, len: 2 });
    /// ```
    fn load(&mut self, origin: u16, bytes: &[u8]) -> Result<()> {
        if image_end(origin, bytes.len()) > MEMORY_SIZE {
            return Err(Error::OutOfBounds {
                origin,
                len: bytes.len(),
            });
        }

        for (offset, &byte) in bytes.iter().enumerate() {
            self.write(origin.wrapping_add(offset as u16), byte);
        }

        Ok(())
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to a single contiguous RAM
/// array initialized to 0x00.
///
/// # Examples
///
/// ```
/// use lib8080::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0000, 0x00); // NOP
///
/// let mut cpu = CPU::new(memory);
/// cpu.step();
/// assert_eq!(cpu.pc(), 0x0001);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Returns the whole address space as a slice, for inspection.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("size", &MEMORY_SIZE)
            .finish()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn load(&mut self, origin: u16, bytes: &[u8]) -> Result<()> {
        let start = origin as usize;
        let end = image_end(origin, bytes.len());
        if end > MEMORY_SIZE {
            return Err(Error::OutOfBounds {
                origin,
                len: bytes.len(),
            });
        }

        self.data[start..end].copy_from_slice(bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_word_access_wraps() {
        let mut mem = FlatMemory::new();

        mem.write_word(0xFFFF, 0xBEEF);
        assert_eq!(mem.read(0xFFFF), 0xEF);
        assert_eq!(mem.read(0x0000), 0xBE);
        assert_eq!(mem.read_word(0xFFFF), 0xBEEF);
    }

    #[test]
    fn test_load_fits_exactly_at_top() {
        let mut mem = FlatMemory::new();

        mem.load(0xFFFE, &[0x11, 0x22]).unwrap();
        assert_eq!(mem.read(0xFFFE), 0x11);
        assert_eq!(mem.read(0xFFFF), 0x22);
    }

    #[test]
    fn test_load_out_of_bounds_writes_nothing() {
        let mut mem = FlatMemory::new();

        let result = mem.load(0xFFFE, &[0x11, 0x22, 0x33]);
        assert_eq!(
            result,
            Err(Error::OutOfBounds {
                origin: 0xFFFE,
                len: 3
            })
        );
        assert_eq!(mem.read(0xFFFE), 0x00);
        assert_eq!(mem.read(0x0000), 0x00);
    }

    #[test]
    fn test_load_full_address_space() {
        let mut mem = FlatMemory::new();
        let image = vec![0xAA; MEMORY_SIZE];

        mem.load(0x0000, &image).unwrap();
        assert_eq!(mem.read(0x0000), 0xAA);
        assert_eq!(mem.read(0xFFFF), 0xAA);
        assert_eq!(image_end(0x0000, image.len()), MEMORY_SIZE);
        assert!(mem.load(0x0001, &image).is_err());
    }

    #[test]
    fn test_load_empty_image() {
        let mut mem = FlatMemory::new();
        assert!(mem.load(0xFFFF, &[]).is_ok());
    }

    /// Memory that only implements the required methods, to exercise the
    /// provided `load`.
    struct Sparse(std::collections::HashMap<u16, u8>);

    impl MemoryBus for Sparse {
        fn read(&self, addr: u16) -> u8 {
            self.0.get(&addr).copied().unwrap_or(0)
        }

        fn write(&mut self, addr: u16, value: u8) {
            self.0.insert(addr, value);
        }
    }

    #[test]
    fn test_default_load_checks_bounds() {
        let mut mem = Sparse(Default::default());

        mem.load(0x8000, &[1, 2, 3]).unwrap();
        assert_eq!(mem.read(0x8002), 3);

        assert!(mem.load(0xFFFF, &[1, 2]).is_err());
        assert!(mem.0.get(&0xFFFF).is_none());
    }
}
