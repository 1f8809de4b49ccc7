//! Tests for the PLA (Pull Accumulator) instruction.
//!
//! Tests cover:
//! - Stack pointer incremented before the read
//! - Z and N flags set from the pulled value
//! - Push/pull round trips
//! - Underflow guard at top-of-stack

use lite6502::{ExecutionError, FlatMemory, Machine, MemoryBus, Status};

/// Helper function to create a machine with `program` at 0x0600
fn setup_machine(program: &[u8]) -> Machine<FlatMemory> {
    let mut machine = Machine::new(FlatMemory::new());
    machine.load_program(program).unwrap();
    machine
}

#[test]
fn test_pla_basic_operation() {
    let mut machine = setup_machine(&[0x68]);
    machine.set_sp(0x01FE);
    machine.memory_mut().write(0x01FF, 0x42);

    let cycles = machine.step().unwrap();

    assert_eq!(machine.a(), 0x42);
    assert_eq!(machine.sp(), 0x01FF);
    assert_eq!(machine.pc(), 0x0601);
    assert_eq!(cycles, 4);
}

#[test]
fn test_pla_zero_sets_zero_flag() {
    let mut machine = setup_machine(&[0x68]);
    machine.set_a(0x55);
    machine.set_sp(0x01FE);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x00);
    assert!(machine.flag(Status::ZERO));
}

#[test]
fn test_pla_negative_flag() {
    let mut machine = setup_machine(&[0x68]);
    machine.set_sp(0x01FE);
    machine.memory_mut().write(0x01FF, 0x40);

    machine.step().unwrap();

    assert!(machine.flag(Status::NEGATIVE));
}

#[test]
fn test_push_then_pull_restores_accumulator() {
    // PHA; LDA #$00; PLA
    let mut machine = setup_machine(&[0x48, 0xA9, 0x00, 0x68]);
    machine.set_a(0xC3);
    let initial_sp = machine.sp();

    machine.step().unwrap();
    machine.step().unwrap();
    assert_eq!(machine.a(), 0x00);

    machine.step().unwrap();
    assert_eq!(machine.a(), 0xC3);
    assert_eq!(machine.sp(), initial_sp);
}

#[test]
fn test_pulls_come_back_in_reverse_order() {
    // LDA #$01; PHA; LDA #$02; PHA; PLA; STA $00; PLA; STA $01
    let mut machine = setup_machine(&[
        0xA9, 0x01, 0x48, 0xA9, 0x02, 0x48, 0x68, 0x85, 0x00, 0x68, 0x85, 0x01,
    ]);

    machine.run_to_sentinel().unwrap();

    assert_eq!(machine.memory().read(0x0000), 0x02);
    assert_eq!(machine.memory().read(0x0001), 0x01);
    assert_eq!(machine.sp(), 0x01FF);
}

#[test]
fn test_pla_underflow_is_reported() {
    let mut machine = setup_machine(&[0x68]);
    machine.set_a(0x12);

    assert_eq!(
        machine.step(),
        Err(ExecutionError::StackUnderflow { sp: 0x01FF })
    );

    assert_eq!(machine.a(), 0x12);
    assert_eq!(machine.sp(), 0x01FF);
    assert_eq!(machine.status(), Status::empty());
}
