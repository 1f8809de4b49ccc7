//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PLA: Pull Accumulator from Stack
//!
//! The stack pointer holds the full address the next push writes to. The stack
//! grows downward from the configured top-of-stack (0x01FF by default) and may
//! not move outside `stack_floor..=stack_top`; a push or pull that would do so
//! fails and leaves the machine unchanged.

use super::update_load_flags;
use crate::{ExecutionError, Machine, MemoryBus, Operation};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Stack operation:
/// 1. Write accumulator value to SP
/// 2. Decrement SP
///
/// Addressing Mode: Implied (opcode 0x48)
/// Cycles: 3
///
/// Flags affected: None
///
/// # Examples
///
/// ```
/// use lite6502::{FlatMemory, Machine, MemoryBus};
///
/// let mut machine = Machine::new(FlatMemory::new());
/// machine.load_program(&[0x48]).unwrap(); // PHA
/// machine.set_a(0x42);
///
/// assert_eq!(machine.step(), Ok(3));
/// assert_eq!(machine.memory().read(0x01FF), 0x42);
/// assert_eq!(machine.sp(), 0x01FE);
/// ```
pub(crate) fn push_accumulator<M: MemoryBus>(
    machine: &mut Machine<M>,
) -> Result<u8, ExecutionError> {
    let sp = machine.sp;
    if sp < machine.config.stack_floor || sp > machine.config.stack_top {
        return Err(ExecutionError::StackOverflow { sp });
    }

    machine.memory.write(sp, machine.a);
    machine.sp = sp.wrapping_sub(1);

    Ok(Operation::PushAccumulator.cycles())
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Stack operation:
/// 1. Increment SP
/// 2. Load accumulator from SP
///
/// Addressing Mode: Implied (opcode 0x68)
/// Cycles: 4
///
/// Flags affected: Z and N, as for loads
pub(crate) fn pull_accumulator<M: MemoryBus>(
    machine: &mut Machine<M>,
) -> Result<u8, ExecutionError> {
    let sp = machine.sp;
    if sp >= machine.config.stack_top || sp.wrapping_add(1) < machine.config.stack_floor {
        return Err(ExecutionError::StackUnderflow { sp });
    }

    let sp = sp + 1;
    machine.sp = sp;
    let value = machine.memory.read(sp);
    machine.a = value;
    update_load_flags(machine, value);

    Ok(Operation::PullAccumulator.cycles())
}
