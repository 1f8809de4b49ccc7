//! Execution loop tests
//!
//! Verifies the budgeted and run-to-sentinel loops, unknown opcode handling and
//! cycle counting.

use lite6502::{
    ExecutionError, FlatMemory, Machine, MachineConfig, MemoryBus, Status, UnknownOpcodePolicy,
};

/// Helper function to create a machine with `program` at 0x0600
fn setup_machine(program: &[u8]) -> Machine<FlatMemory> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut machine = Machine::new(FlatMemory::new());
    machine.load_program(program).unwrap();
    machine
}

fn skipping_machine(program: &[u8]) -> Machine<FlatMemory> {
    let config = MachineConfig::default().with_unknown_opcode(UnknownOpcodePolicy::Skip);
    let mut machine = Machine::with_config(FlatMemory::new(), config);
    machine.load_program(program).unwrap();
    machine
}

// ========== Program Scenarios ==========

#[test]
fn test_store_and_reload_scenario() {
    // LDA #$0A; STA $05; LDA #$00; LDA $05
    let mut machine = setup_machine(&[0xA9, 0x0A, 0x85, 0x05, 0xA9, 0x00, 0xA5, 0x05]);

    let consumed = machine.run_to_sentinel().unwrap();

    assert_eq!(machine.a(), 0x0A);
    assert_eq!(machine.memory().read(0x0005), 0x0A);
    assert_eq!(consumed, 2 + 3 + 2 + 3);
    assert_eq!(machine.pc(), 0x0609);
    // Z was set by LDA #$00 and is never cleared
    assert!(machine.flag(Status::ZERO));
}

#[test]
fn test_push_pull_scenario() {
    // LDA #$42; PHA; LDA #$00; PLA
    let mut machine = setup_machine(&[0xA9, 0x42, 0x48, 0xA9, 0x00, 0x68]);
    let initial_sp = machine.sp();

    let consumed = machine.run_to_sentinel().unwrap();

    assert_eq!(machine.a(), 0x42);
    assert_eq!(machine.sp(), initial_sp);
    assert_eq!(consumed, 2 + 3 + 2 + 4);
}

#[test]
fn test_budget_covers_exactly_one_instruction() {
    // LDA #$01
    let mut machine = setup_machine(&[0xA9, 0x01]);

    let consumed = machine.run(2).unwrap();

    assert_eq!(consumed, 2);
    assert_eq!(2u64.saturating_sub(consumed), 0);
    assert_eq!(machine.a(), 0x01);
    assert_eq!(machine.pc(), 0x0602, "Exactly one instruction should run");
}

// ========== Budgeted Mode ==========

#[test]
fn test_run_zero_budget_does_nothing() {
    let mut machine = setup_machine(&[0xA9, 0x01]);

    assert_eq!(machine.run(0), Ok(0));
    assert_eq!(machine.pc(), 0x0600);
    assert_eq!(machine.a(), 0x00);
}

#[test]
fn test_run_overshoots_by_at_most_one_instruction() {
    // LDA #$01; LDA $1234
    let mut machine = setup_machine(&[0xA9, 0x01, 0xAD, 0x12, 0x34]);

    // 3 cycles left after the first load, so the 4-cycle load still runs
    let consumed = machine.run(3).unwrap();

    assert_eq!(consumed, 6);
    assert_eq!(machine.pc(), 0x0605);
}

#[test]
fn test_run_treats_zero_byte_as_unknown() {
    let mut machine = setup_machine(&[0xA9, 0x01]);

    assert_eq!(
        machine.run(10),
        Err(ExecutionError::UnknownOpcode {
            opcode: 0x00,
            address: 0x0602,
        })
    );
    assert_eq!(machine.a(), 0x01);
    assert_eq!(machine.cycles(), 2);
}

#[test]
fn test_cycle_counter_accumulates_across_runs() {
    let mut machine = setup_machine(&[0xA9, 0x01, 0xA9, 0x02]);

    machine.run(2).unwrap();
    machine.run(2).unwrap();

    assert_eq!(machine.cycles(), 4);
    assert_eq!(machine.a(), 0x02);
}

// ========== Sentinel Mode ==========

#[test]
fn test_run_to_sentinel_on_empty_program() {
    let mut machine = setup_machine(&[]);

    assert_eq!(machine.run_to_sentinel(), Ok(0));
    assert_eq!(machine.pc(), 0x0601, "The halt byte is consumed");
}

#[test]
fn test_run_to_sentinel_stops_at_first_halt() {
    // LDA #$01; BRK-byte; LDA #$02
    let mut machine = setup_machine(&[0xA9, 0x01, 0x00, 0xA9, 0x02]);

    machine.run_to_sentinel().unwrap();
    assert_eq!(machine.a(), 0x01);

    // Resuming continues after the halt byte
    machine.run_to_sentinel().unwrap();
    assert_eq!(machine.a(), 0x02);
}

#[test]
fn test_run_to_sentinel_operand_zero_is_not_a_halt() {
    // LDA #$00 carries a zero operand; LDX #$05
    let mut machine = setup_machine(&[0xA9, 0x00, 0xA2, 0x05]);

    machine.run_to_sentinel().unwrap();

    assert_eq!(machine.x(), 0x05);
}

#[test]
fn test_run_to_sentinel_propagates_errors() {
    // PLA on an empty stack
    let mut machine = setup_machine(&[0x68, 0xA9, 0x01]);

    assert_eq!(
        machine.run_to_sentinel(),
        Err(ExecutionError::StackUnderflow { sp: 0x01FF })
    );
    assert_eq!(machine.a(), 0x00);
}

// ========== Unknown Opcodes ==========

#[test]
fn test_unknown_opcode_error_by_default() {
    // ADC #$01 is not modeled
    let mut machine = setup_machine(&[0x69, 0x01]);

    match machine.step() {
        Err(ExecutionError::UnknownOpcode { opcode, address }) => {
            assert_eq!(opcode, 0x69);
            assert_eq!(address, 0x0600);
        }
        other => panic!("Expected UnknownOpcode(0x69), got {:?}", other),
    }

    assert_eq!(machine.pc(), 0x0601);
    assert_eq!(machine.cycles(), 0);
}

#[test]
fn test_unknown_opcode_error_message() {
    let err = ExecutionError::UnknownOpcode {
        opcode: 0x69,
        address: 0x0600,
    };

    assert_eq!(err.to_string(), "unknown opcode 0x69 at 0x0600");
}

#[test]
fn test_skip_policy_consumes_byte_as_no_op() {
    let mut machine = skipping_machine(&[0xEA, 0xA9, 0x07]);

    assert_eq!(machine.step(), Ok(1));
    assert_eq!(machine.pc(), 0x0601);
    assert_eq!(machine.a(), 0x00);
    assert_eq!(machine.status(), Status::empty());

    machine.step().unwrap();
    assert_eq!(machine.a(), 0x07);
}

#[test]
fn test_skip_policy_in_sentinel_mode() {
    // CLC; CLI; CLV; CLD are not modeled
    let mut machine = skipping_machine(&[0x18, 0x58, 0xB8, 0xD8, 0xA9, 0x09]);
    machine.set_status(Status::from_bits_retain(0xFF));

    machine.run_to_sentinel().unwrap();

    assert_eq!(machine.a(), 0x09);
    assert_eq!(machine.status().bits(), 0xFF);
    assert_eq!(machine.pc(), 0x0607);
}

#[test]
fn test_skip_policy_budget_terminates_on_empty_memory() {
    let mut machine = skipping_machine(&[]);

    let consumed = machine.run(5).unwrap();

    assert_eq!(consumed, 5);
    assert_eq!(machine.pc(), 0x0605);
}
