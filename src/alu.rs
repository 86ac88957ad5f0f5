//! # Arithmetic Logic Unit
//!
//! Pure functions computing 8080 arithmetic and logic results. Each takes the
//! operands by value and the flags by `&mut`, returns the result, and touches
//! only the flags the real instruction touches. Flags not mentioned in an
//! operation's documentation keep their previous value.
//!
//! Subtraction is performed the way the hardware does it: as addition of the
//! one's complement with the inverted borrow as carry-in. The auxiliary carry
//! of a subtraction is therefore the carry out of bit 3 of that addition, and
//! the carry flag is the inverted carry out of bit 7 (a borrow).

use crate::flags::Flags;

/// Two's complement of an 8-bit value.
pub fn twos_complement(value: u8) -> u8 {
    (!value).wrapping_add(1)
}

/// The shared adder: `a + b + carry_in`, setting every flag.
fn add_with_flags(a: u8, b: u8, carry_in: bool, flags: &mut Flags) -> (u8, bool) {
    let carry_in = carry_in as u16;
    let sum = a as u16 + b as u16 + carry_in;
    let result = sum as u8;

    flags.aux_carry = (a as u16 & 0x0F) + (b as u16 & 0x0F) + carry_in > 0x0F;
    flags.set_szp(result);

    (result, sum > 0xFF)
}

/// ADD/ADC: `accumulator + value + carry_in`.
///
/// Sets carry if the unsigned sum exceeds 255, auxiliary carry if the low
/// nibbles sum past 15, and sign, zero and parity from the result.
///
/// # Examples
///
/// ```
/// use lib8080::{alu, Flags};
///
/// let mut flags = Flags::default();
/// let result = alu::add(128, 129, false, &mut flags);
///
/// assert_eq!(result, 1);
/// assert!(flags.carry);
/// assert!(!flags.zero);
/// assert!(!flags.sign);
/// assert!(!flags.parity); // one set bit: odd parity
/// ```
pub fn add(accumulator: u8, value: u8, carry_in: bool, flags: &mut Flags) -> u8 {
    let (result, carry) = add_with_flags(accumulator, value, carry_in, flags);
    flags.carry = carry;
    result
}

/// SUB/SBB: `accumulator - value - borrow_in`.
///
/// Carry is set when the subtraction borrows, i.e. when
/// `value + borrow_in > accumulator`.
pub fn subtract(accumulator: u8, value: u8, borrow_in: bool, flags: &mut Flags) -> u8 {
    let (result, carry) = add_with_flags(accumulator, !value, !borrow_in, flags);
    flags.carry = !carry;
    result
}

/// CMP: the flags of `subtract(accumulator, value, false)`.
///
/// The accumulator is not modified; zero is set iff `accumulator == value`
/// and carry iff `accumulator < value`.
pub fn compare(accumulator: u8, value: u8, flags: &mut Flags) {
    subtract(accumulator, value, false, flags);
}

/// ANA: bitwise AND.
///
/// Carry is cleared. The auxiliary carry follows the 8080 rule for ANA, which
/// is the OR of bit 3 of both operands.
pub fn logical_and(accumulator: u8, value: u8, flags: &mut Flags) -> u8 {
    let result = accumulator & value;
    flags.carry = false;
    flags.aux_carry = (accumulator | value) & 0x08 != 0;
    flags.set_szp(result);
    result
}

/// ORA: bitwise OR. Carry and auxiliary carry are cleared.
pub fn logical_or(accumulator: u8, value: u8, flags: &mut Flags) -> u8 {
    let result = accumulator | value;
    flags.carry = false;
    flags.aux_carry = false;
    flags.set_szp(result);
    result
}

/// XRA: bitwise exclusive OR. Carry and auxiliary carry are cleared.
pub fn logical_xor(accumulator: u8, value: u8, flags: &mut Flags) -> u8 {
    let result = accumulator ^ value;
    flags.carry = false;
    flags.aux_carry = false;
    flags.set_szp(result);
    result
}

/// INR: increment without touching carry.
pub fn increment(value: u8, flags: &mut Flags) -> u8 {
    let result = value.wrapping_add(1);
    flags.aux_carry = value & 0x0F == 0x0F;
    flags.set_szp(result);
    result
}

/// DCR: decrement without touching carry.
///
/// The hardware adds 0xFF, so the auxiliary carry is set unless the low
/// nibble was zero.
pub fn decrement(value: u8, flags: &mut Flags) -> u8 {
    let result = value.wrapping_sub(1);
    flags.aux_carry = value & 0x0F != 0;
    flags.set_szp(result);
    result
}

/// RLC (`through_carry == false`) and RAL (`through_carry == true`).
///
/// Bit 7 moves into carry. RLC feeds the same bit into bit 0; RAL feeds the
/// previous carry. No other flag is affected.
pub fn rotate_left(accumulator: u8, through_carry: bool, flags: &mut Flags) -> u8 {
    let outgoing = accumulator & 0x80 != 0;
    let incoming = if through_carry { flags.carry } else { outgoing };
    flags.carry = outgoing;
    (accumulator << 1) | incoming as u8
}

/// RRC (`through_carry == false`) and RAR (`through_carry == true`).
///
/// Bit 0 moves into carry. RRC feeds the same bit into bit 7; RAR feeds the
/// previous carry. No other flag is affected.
pub fn rotate_right(accumulator: u8, through_carry: bool, flags: &mut Flags) -> u8 {
    let outgoing = accumulator & 0x01 != 0;
    let incoming = if through_carry { flags.carry } else { outgoing };
    flags.carry = outgoing;
    (accumulator >> 1) | ((incoming as u8) << 7)
}

/// DAA: decimal adjust the accumulator after a packed-BCD addition.
///
/// 1. If the low nibble is above 9 or auxiliary carry is set, add 6; the
///    auxiliary carry becomes the carry out of the low nibble.
/// 2. If the high nibble of that value is above 9 or carry is set, add 0x60
///    and set carry.
///
/// Both corrections land in the returned value. Sign, zero and parity follow
/// the result.
///
/// # Examples
///
/// ```
/// use lib8080::{alu, Flags};
///
/// let mut flags = Flags::default();
/// let sum = alu::add(0x38, 0x45, false, &mut flags); // 0x7D
/// let bcd = alu::decimal_adjust(sum, &mut flags);
///
/// assert_eq!(bcd, 0x83);
/// assert!(!flags.carry);
/// ```
pub fn decimal_adjust(accumulator: u8, flags: &mut Flags) -> u8 {
    let mut value = accumulator as u16;

    let low = value & 0x0F;
    if low > 9 || flags.aux_carry {
        flags.aux_carry = low + 6 > 0x0F;
        value += 0x06;
    } else {
        flags.aux_carry = false;
    }

    if (value >> 4) > 9 || flags.carry {
        value += 0x60;
        flags.carry = true;
    }

    let result = value as u8;
    flags.set_szp(result);
    result
}

/// DAD: 16-bit addition. Only carry is affected.
pub fn double_add(a: u16, b: u16, flags: &mut Flags) -> u16 {
    let (result, carry) = a.overflowing_add(b);
    flags.carry = carry;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twos_complement() {
        assert_eq!(twos_complement(0x00), 0x00);
        assert_eq!(twos_complement(0x01), 0xFF);
        assert_eq!(twos_complement(0x80), 0x80);
        assert_eq!(twos_complement(0x13), 0xED);
    }

    #[test]
    fn test_add_aux_carry() {
        let mut flags = Flags::default();

        add(0x0F, 0x01, false, &mut flags);
        assert!(flags.aux_carry);

        add(0x0E, 0x01, false, &mut flags);
        assert!(!flags.aux_carry);

        // The carry-in participates in the nibble sum
        add(0x0E, 0x01, true, &mut flags);
        assert!(flags.aux_carry);
    }

    #[test]
    fn test_add_with_carry_in_overflow() {
        let mut flags = Flags::default();

        let result = add(0xFF, 0x00, true, &mut flags);
        assert_eq!(result, 0x00);
        assert!(flags.carry);
        assert!(flags.zero);
        assert!(flags.aux_carry);
    }

    #[test]
    fn test_subtract_borrow() {
        let mut flags = Flags::default();

        let result = subtract(18, 19, false, &mut flags);
        assert_eq!(result, 0xFF);
        assert!(flags.carry);
        assert!(flags.sign);
        assert!(!flags.zero);
        assert!(flags.parity);
        assert!(!flags.aux_carry);
    }

    #[test]
    fn test_subtract_to_zero() {
        let mut flags = Flags::default();

        let result = subtract(18, 18, false, &mut flags);
        assert_eq!(result, 0);
        assert!(!flags.carry);
        assert!(flags.zero);
        assert!(flags.parity);
        assert!(flags.aux_carry);
    }

    #[test]
    fn test_subtract_with_borrow_in() {
        let mut flags = Flags::default();

        let result = subtract(0x10, 0x0F, true, &mut flags);
        assert_eq!(result, 0x00);
        assert!(!flags.carry);
        assert!(flags.zero);

        let result = subtract(0x10, 0x10, true, &mut flags);
        assert_eq!(result, 0xFF);
        assert!(flags.carry);
    }

    #[test]
    fn test_compare_sets_carry_when_less() {
        let mut flags = Flags::default();

        compare(0x05, 0x0A, &mut flags);
        assert!(flags.carry);
        assert!(!flags.zero);

        compare(0x0A, 0x05, &mut flags);
        assert!(!flags.carry);
        assert!(!flags.zero);

        compare(0x0A, 0x0A, &mut flags);
        assert!(!flags.carry);
        assert!(flags.zero);
    }

    #[test]
    fn test_logical_and_aux_carry_rule() {
        let mut flags = Flags {
            carry: true,
            ..Flags::default()
        };

        let result = logical_and(0x08, 0x00, &mut flags);
        assert_eq!(result, 0);
        assert!(flags.aux_carry);
        assert!(!flags.carry);
        assert!(flags.zero);

        logical_and(0xF0, 0xF0, &mut flags);
        assert!(!flags.aux_carry);
    }

    #[test]
    fn test_or_xor_clear_carries() {
        let mut flags = Flags {
            carry: true,
            aux_carry: true,
            ..Flags::default()
        };

        assert_eq!(logical_or(0x0F, 0xF0, &mut flags), 0xFF);
        assert!(!flags.carry);
        assert!(!flags.aux_carry);
        assert!(flags.sign);
        assert!(flags.parity);

        flags.carry = true;
        assert_eq!(logical_xor(0xAA, 0xAA, &mut flags), 0x00);
        assert!(!flags.carry);
        assert!(flags.zero);
    }

    #[test]
    fn test_increment_keeps_carry() {
        let mut flags = Flags {
            carry: true,
            ..Flags::default()
        };

        assert_eq!(increment(0xFF, &mut flags), 0x00);
        assert!(flags.zero);
        assert!(flags.aux_carry);
        assert!(flags.carry);

        flags.carry = false;
        assert_eq!(increment(0xFF, &mut flags), 0x00);
        assert!(!flags.carry);
    }

    #[test]
    fn test_decrement_aux_carry() {
        let mut flags = Flags::default();

        assert_eq!(decrement(0x10, &mut flags), 0x0F);
        assert!(!flags.aux_carry);

        assert_eq!(decrement(0x01, &mut flags), 0x00);
        assert!(flags.aux_carry);
        assert!(flags.zero);

        assert_eq!(decrement(0x00, &mut flags), 0xFF);
        assert!(flags.sign);
        assert!(!flags.carry);
    }

    #[test]
    fn test_rotates() {
        let mut flags = Flags::default();

        assert_eq!(rotate_left(0x81, false, &mut flags), 0x03);
        assert!(flags.carry);

        flags.carry = false;
        assert_eq!(rotate_left(0x81, true, &mut flags), 0x02);
        assert!(flags.carry);

        assert_eq!(rotate_right(0x01, false, &mut flags), 0x80);
        assert!(flags.carry);

        flags.carry = false;
        assert_eq!(rotate_right(0x01, true, &mut flags), 0x00);
        assert!(flags.carry);

        assert_eq!(rotate_right(0x02, true, &mut flags), 0x81);
        assert!(!flags.carry);
    }

    #[test]
    fn test_rotate_leaves_other_flags() {
        let mut flags = Flags {
            zero: true,
            sign: true,
            parity: true,
            aux_carry: true,
            carry: false,
        };

        rotate_left(0x00, false, &mut flags);
        assert!(flags.zero && flags.sign && flags.parity && flags.aux_carry);
    }

    #[test]
    fn test_decimal_adjust_low_nibble() {
        let mut flags = Flags::default();

        assert_eq!(decimal_adjust(0x0A, &mut flags), 0x10);
        assert!(flags.aux_carry);
        assert!(!flags.carry);
    }

    #[test]
    fn test_decimal_adjust_both_nibbles() {
        // 0x9B: low nibble correction carries into a high nibble of 0xA
        let mut flags = Flags::default();

        assert_eq!(decimal_adjust(0x9B, &mut flags), 0x01);
        assert!(flags.carry);
        assert!(flags.aux_carry);
    }

    #[test]
    fn test_decimal_adjust_after_half_carry() {
        // 0x09 + 0x09 = 0x12 with AC set; BCD answer is 18
        let mut flags = Flags::default();
        let sum = add(0x09, 0x09, false, &mut flags);

        assert_eq!(decimal_adjust(sum, &mut flags), 0x18);
        assert!(!flags.carry);
    }

    #[test]
    fn test_decimal_adjust_keeps_carry() {
        // 0x99 + 0x99 = 0x132: A = 0x32, CY and AC set; BCD answer is 198
        let mut flags = Flags::default();
        let sum = add(0x99, 0x99, false, &mut flags);

        assert_eq!(decimal_adjust(sum, &mut flags), 0x98);
        assert!(flags.carry);
    }

    #[test]
    fn test_double_add_only_touches_carry() {
        let mut flags = Flags {
            zero: true,
            ..Flags::default()
        };

        assert_eq!(double_add(0xFFFF, 0x0002, &mut flags), 0x0001);
        assert!(flags.carry);
        assert!(flags.zero);

        assert_eq!(double_add(0x1000, 0x0234, &mut flags), 0x1234);
        assert!(!flags.carry);
    }
}
