//! Fuzz target for program loading and budgeted execution.
//!
//! Loads an arbitrary program image at an arbitrary origin over arbitrary
//! zero page and stack contents, then runs it for a bounded cycle budget.

#![no_main]

use arbitrary::Arbitrary;
use lite6502::{
    FlatMemory, LoadError, Machine, MachineConfig, MemoryBus, UnknownOpcodePolicy,
};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Program image
    program: Vec<u8>,
    /// Load address for the program
    origin: u16,
    /// Zero page contents
    zero_page: [u8; 256],
    /// Initial accumulator
    a: u8,
    /// Cycle budget (kept small so every input terminates quickly)
    budget: u8,
    /// Skip unknown opcodes instead of stopping on them
    skip_unknown: bool,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    for (i, &byte) in input.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }

    let policy = if input.skip_unknown {
        UnknownOpcodePolicy::Skip
    } else {
        UnknownOpcodePolicy::Error
    };
    let config = MachineConfig::default()
        .with_load_address(input.origin)
        .with_unknown_opcode(policy);
    let mut machine = Machine::with_config(memory, config);
    machine.set_a(input.a);

    match machine.load_program(&input.program) {
        Ok(()) => {}
        Err(LoadError::OutOfRange { .. }) => {
            // All-or-nothing: nothing past the zero page was written
            assert!(input.origin as usize + input.program.len() > 0x10000);
            return;
        }
    }

    // Errors are fine, panics are bugs
    let _ = machine.run(input.budget as u64);

    // The stack pointer never leaves the stack region
    assert!(machine.sp() >= 0x00FF && machine.sp() <= 0x01FF);
});
