//! # Condition Flags
//!
//! The five 8080 condition flags and their packed status byte.
//!
//! Bit layout (S Z 0 AC 0 P 1 CY):
//! - Bit 7: S (Sign)
//! - Bit 6: Z (Zero)
//! - Bit 5: always 0
//! - Bit 4: AC (Auxiliary carry)
//! - Bit 3: always 0
//! - Bit 2: P (Parity, set on even parity)
//! - Bit 1: always 1
//! - Bit 0: CY (Carry)

const CARRY: u8 = 0b0000_0001;
const ALWAYS_ONE: u8 = 0b0000_0010;
const PARITY: u8 = 0b0000_0100;
const AUX_CARRY: u8 = 0b0001_0000;
const ZERO: u8 = 0b0100_0000;
const SIGN: u8 = 0b1000_0000;

/// The processor's condition flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// Carry out of bit 7 (or borrow, for subtraction)
    pub carry: bool,

    /// Carry out of bit 3, consumed by DAA
    pub aux_carry: bool,

    /// Copy of bit 7 of the result
    pub sign: bool,

    /// Set if the result is zero
    pub zero: bool,

    /// Set if the result has an even number of 1 bits
    pub parity: bool,
}

impl Flags {
    /// Packs the flags into the status byte pushed by `PUSH PSW`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::Flags;
    ///
    /// assert_eq!(Flags::default().to_byte(), 0x02);
    ///
    /// let flags = Flags { carry: true, zero: true, ..Flags::default() };
    /// assert_eq!(flags.to_byte(), 0x43);
    /// ```
    pub fn to_byte(self) -> u8 {
        let mut status = ALWAYS_ONE;

        if self.carry {
            status |= CARRY;
        }
        if self.parity {
            status |= PARITY;
        }
        if self.aux_carry {
            status |= AUX_CARRY;
        }
        if self.zero {
            status |= ZERO;
        }
        if self.sign {
            status |= SIGN;
        }

        status
    }

    /// Unpacks a status byte. Bits 1, 3 and 5 are ignored.
    pub fn from_byte(status: u8) -> Self {
        Self {
            carry: status & CARRY != 0,
            aux_carry: status & AUX_CARRY != 0,
            sign: status & SIGN != 0,
            zero: status & ZERO != 0,
            parity: status & PARITY != 0,
        }
    }

    /// Sets sign, zero and parity from an 8-bit result.
    pub fn set_szp(&mut self, result: u8) {
        self.sign = result & 0x80 != 0;
        self.zero = result == 0;
        self.parity = even_parity(result);
    }
}

/// True when `value` has an even number of set bits.
pub fn even_parity(value: u8) -> bool {
    value.count_ones() % 2 == 0
}
