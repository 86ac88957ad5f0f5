//! # Power-On Configuration
//!
//! The state the CPU starts in, and returns to on [`crate::CPU::reset`].

/// Initial processor state.
///
/// A real 8080 clears the program counter and the interrupt enable flip-flop
/// on RESET and leaves every other register undefined. The emulator zeroes
/// the registers and flags and lets the host pick the rest.
///
/// # Examples
///
/// ```
/// use lib8080::{CPU, CpuConfig, FlatMemory};
///
/// let config = CpuConfig {
///     reset_pc: 0x0100,
///     reset_sp: 0xF000,
///     ..CpuConfig::default()
/// };
///
/// let cpu = CPU::with_config(FlatMemory::new(), config);
/// assert_eq!(cpu.pc(), 0x0100);
/// assert_eq!(cpu.sp(), 0xF000);
/// assert!(!cpu.interrupts_enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Program counter after reset
    pub reset_pc: u16,

    /// Stack pointer after reset. 0x0000 makes the first push land at 0xFFFF.
    pub reset_sp: u16,

    /// Whether interrupts are accepted after reset
    pub interrupts_enabled: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            reset_pc: 0x0000,
            reset_sp: 0x0000,
            interrupts_enabled: false,
        }
    }
}
