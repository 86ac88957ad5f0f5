//! Tests for the accumulator instructions.
//!
//! Tests cover:
//! - ADD, ADC, SUB, SBB, ANA, XRA, ORA, CMP with registers and M
//! - The immediate forms ADI, ACI, SUI, SBI, ANI, XRI, ORI, CPI
//! - DAA, CMA and DAD
//! - The rotates RLC, RRC, RAL, RAR and the carry instructions STC, CMC
//! - Exact flag results (S, Z, AC, P, CY) and flags left untouched

use lib8080::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

/// Loads `program` at 0x0000 and executes one instruction.
fn step_with(cpu: &mut CPU<FlatMemory>, program: &[u8]) {
    cpu.load(0x0000, program).unwrap();
    cpu.set_pc(0x0000);
    cpu.step();
}

// ========== ADD / ADC ==========

#[test]
fn test_add_register_basic() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x10);
    cpu.set_b(0x05);

    step_with(&mut cpu, &[0x80]); // ADD B

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_s());
    assert!(!cpu.flag_p()); // three set bits
    assert!(!cpu.flag_ac());
    assert_eq!(cpu.pc(), 0x0001);
}

#[test]
fn test_add_carry_out_and_odd_parity() {
    let mut cpu = setup_cpu();
    cpu.set_a(128);
    cpu.set_b(129);

    step_with(&mut cpu, &[0x80]); // ADD B

    assert_eq!(cpu.a(), 1);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_s());
    assert!(!cpu.flag_p());
    assert!(!cpu.flag_ac());
}

#[test]
fn test_add_memory_operand() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x11);
    cpu.set_hl(0x2000);
    cpu.memory_mut().write(0x2000, 0x22);

    step_with(&mut cpu, &[0x86]); // ADD M

    assert_eq!(cpu.a(), 0x33);
    assert!(cpu.flag_p());
}

#[test]
fn test_add_accumulator_to_itself() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x44);

    step_with(&mut cpu, &[0x87]); // ADD A

    assert_eq!(cpu.a(), 0x88);
    assert!(cpu.flag_s());
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_uses_carry_in() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x10);
    cpu.set_c(0x05);
    cpu.set_flag_c(true);

    step_with(&mut cpu, &[0x89]); // ADC C

    assert_eq!(cpu.a(), 0x16);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_carry_in_causes_carry_out() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xFF);
    cpu.set_flag_c(true);

    step_with(&mut cpu, &[0xCE, 0x00]); // ACI 00H

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(cpu.flag_ac());
}

#[test]
fn test_adi_aux_carry() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);

    step_with(&mut cpu, &[0xC6, 0x0F]); // ADI 0FH

    assert_eq!(cpu.a(), 0x10);
    assert!(cpu.flag_ac());
    assert!(!cpu.flag_p());
    assert_eq!(cpu.pc(), 0x0002);
}

// ========== SUB / SBB ==========

#[test]
fn test_sub_with_borrow_out() {
    let mut cpu = setup_cpu();
    cpu.set_a(18);
    cpu.set_b(19);

    step_with(&mut cpu, &[0x90]); // SUB B

    assert_eq!(cpu.a(), 0xFF);
    assert!(cpu.flag_c());
    assert!(cpu.flag_s());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_p());
    assert!(!cpu.flag_ac());
}

#[test]
fn test_sub_a_clears_accumulator() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x3E);
    cpu.set_flag_c(true);

    step_with(&mut cpu, &[0x97]); // SUB A

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_p());
    assert!(cpu.flag_ac());
}

#[test]
fn test_sbb_subtracts_borrow() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x04);
    cpu.set_c(0x02);
    cpu.set_flag_c(true);

    step_with(&mut cpu, &[0x99]); // SBB C

    assert_eq!(cpu.a(), 0x01);
    assert!(!cpu.flag_c());
}

#[test]
fn test_sbi_borrow_chain() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x00);
    cpu.set_flag_c(true);

    step_with(&mut cpu, &[0xDE, 0x01]); // SBI 01H

    assert_eq!(cpu.a(), 0xFE);
    assert!(cpu.flag_c());
}

#[test]
fn test_sui_immediate() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x00);

    step_with(&mut cpu, &[0xD6, 0x01]); // SUI 01H

    assert_eq!(cpu.a(), 0xFF);
    assert!(cpu.flag_c());
    assert_eq!(cpu.pc(), 0x0002);
}

// ========== Logical ==========

#[test]
fn test_ana_aux_carry_from_bit_3() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xFC);
    cpu.set_b(0x0F);
    cpu.set_flag_c(true);

    step_with(&mut cpu, &[0xA0]); // ANA B

    assert_eq!(cpu.a(), 0x0C);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_ac());
    assert!(cpu.flag_p());
}

#[test]
fn test_ani_zero_result() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x02);

    step_with(&mut cpu, &[0xE6, 0x01]); // ANI 01H

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_ac());
}

#[test]
fn test_xra_a_clears_everything() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x55);
    cpu.set_flag_c(true);
    cpu.set_flag_ac(true);

    step_with(&mut cpu, &[0xAF]); // XRA A

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_p());
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_ac());
}

#[test]
fn test_xri_inverts_bits() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x0F);

    step_with(&mut cpu, &[0xEE, 0xFF]); // XRI 0FFH

    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag_s());
}

#[test]
fn test_ora_register() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x30);
    cpu.set_c(0x03);
    cpu.set_flag_c(true);

    step_with(&mut cpu, &[0xB1]); // ORA C

    assert_eq!(cpu.a(), 0x33);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_ac());
}

#[test]
fn test_ori_sign_and_parity() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);

    step_with(&mut cpu, &[0xF6, 0x80]); // ORI 80H

    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag_s());
    assert!(cpu.flag_p());
}

// ========== Compare ==========

#[test]
fn test_cmp_greater() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x0A);
    cpu.set_b(0x05);

    step_with(&mut cpu, &[0xB8]); // CMP B

    assert_eq!(cpu.a(), 0x0A);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_cmp_less_sets_carry() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x02);
    cpu.set_b(0x05);

    step_with(&mut cpu, &[0xB8]); // CMP B

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_cpi_equal_sets_zero() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x40);

    step_with(&mut cpu, &[0xFE, 0x40]); // CPI 40H

    assert_eq!(cpu.a(), 0x40);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_c());
}

// ========== DAA / CMA ==========

#[test]
fn test_daa_both_corrections() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x9B);

    step_with(&mut cpu, &[0x27]); // DAA

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(cpu.flag_ac());
}

#[test]
fn test_daa_after_bcd_addition() {
    let mut cpu = setup_cpu();

    // MVI A,38H ; ADI 45H ; DAA
    cpu.load(0x0000, &[0x3E, 0x38, 0xC6, 0x45, 0x27]).unwrap();
    cpu.run(3);

    assert_eq!(cpu.a(), 0x83);
    assert!(!cpu.flag_c());
}

#[test]
fn test_daa_uses_aux_carry() {
    let mut cpu = setup_cpu();

    // MVI A,09H ; ADI 09H ; DAA  (0x12 with AC set, corrected to 0x18)
    cpu.load(0x0000, &[0x3E, 0x09, 0xC6, 0x09, 0x27]).unwrap();
    cpu.run(3);

    assert_eq!(cpu.a(), 0x18);
    assert!(!cpu.flag_c());
}

#[test]
fn test_daa_decimal_overflow() {
    let mut cpu = setup_cpu();

    // MVI A,99H ; ADI 99H ; DAA
    cpu.load(0x0000, &[0x3E, 0x99, 0xC6, 0x99, 0x27]).unwrap();
    cpu.run(3);

    assert_eq!(cpu.a(), 0x98);
    assert!(cpu.flag_c());
}

#[test]
fn test_cma_leaves_flags() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x51);
    cpu.set_flag_c(true);
    cpu.set_flag_z(true);
    let status = cpu.status();

    step_with(&mut cpu, &[0x2F]); // CMA

    assert_eq!(cpu.a(), 0xAE);
    assert_eq!(cpu.status(), status);
}

// ========== DAD ==========

#[test]
fn test_dad_b_no_carry() {
    let mut cpu = setup_cpu();
    cpu.set_hl(0x1234);
    cpu.set_bc(0x1111);
    cpu.set_flag_c(true);

    step_with(&mut cpu, &[0x09]); // DAD B

    assert_eq!(cpu.hl(), 0x2345);
    assert!(!cpu.flag_c());
}

#[test]
fn test_dad_d_carry_only() {
    let mut cpu = setup_cpu();
    cpu.set_hl(0xFFFF);
    cpu.set_de(0x0001);

    step_with(&mut cpu, &[0x19]); // DAD D

    assert_eq!(cpu.hl(), 0x0000);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z()); // only carry is affected
}

#[test]
fn test_dad_h_doubles() {
    let mut cpu = setup_cpu();
    cpu.set_hl(0x8001);

    step_with(&mut cpu, &[0x29]); // DAD H

    assert_eq!(cpu.hl(), 0x0002);
    assert!(cpu.flag_c());
}

#[test]
fn test_dad_sp() {
    let mut cpu = setup_cpu();
    cpu.set_hl(0x0100);
    cpu.set_sp(0x0200);

    step_with(&mut cpu, &[0x39]); // DAD SP

    assert_eq!(cpu.hl(), 0x0300);
    assert_eq!(cpu.sp(), 0x0200);
}

// ========== Rotates ==========

#[test]
fn test_rlc() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);
    cpu.set_flag_z(true);

    step_with(&mut cpu, &[0x07]); // RLC

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z()); // untouched

    cpu.set_a(0x01);
    step_with(&mut cpu, &[0x07]);
    assert_eq!(cpu.a(), 0x02);
    assert!(!cpu.flag_c());
}

#[test]
fn test_rrc() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);

    step_with(&mut cpu, &[0x0F]); // RRC

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_s()); // untouched
}

#[test]
fn test_ral_through_carry() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);
    cpu.set_flag_c(false);

    step_with(&mut cpu, &[0x17]); // RAL

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z()); // untouched even though the result is zero

    step_with(&mut cpu, &[0x17]); // RAL again: carry re-enters at bit 0
    assert_eq!(cpu.a(), 0x01);
    assert!(!cpu.flag_c());
}

#[test]
fn test_rar_through_carry() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x01);
    cpu.set_flag_c(false);

    step_with(&mut cpu, &[0x1F]); // RAR

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());

    step_with(&mut cpu, &[0x1F]);
    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_c());
}

// ========== Carry instructions ==========

#[test]
fn test_stc_and_cmc() {
    let mut cpu = setup_cpu();

    step_with(&mut cpu, &[0x37]); // STC
    assert!(cpu.flag_c());

    step_with(&mut cpu, &[0x3F]); // CMC
    assert!(!cpu.flag_c());

    step_with(&mut cpu, &[0x3F]); // CMC
    assert!(cpu.flag_c());

    // Only carry changes
    assert_eq!(cpu.status(), 0x03);
}
