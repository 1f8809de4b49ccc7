//! # Instruction Implementations
//!
//! Handlers for the modeled instruction subset, organized by category. Each
//! handler takes a mutable reference to the machine (and, for families shared
//! by several registers, the register it operates on) and returns its cycle
//! cost.
//!
//! ## Categories
//!
//! - **load_store**: LDA, LDX, LDY (immediate, zero page, absolute), STA (zero page)
//! - **stack**: PHA, PLA
//! - **control**: JMP (absolute)

pub mod control;
pub mod load_store;
pub mod stack;

use crate::config::FlagPolicy;
use crate::{ExecutionError, Machine, MemoryBus, Operation, Status};

/// Bit tested by the Negative flag computation.
const NEGATIVE_PROBE: u8 = 0x40;

/// Runs the handler bound to `operation`.
pub(crate) fn execute<M: MemoryBus>(
    machine: &mut Machine<M>,
    operation: Operation,
) -> Result<u8, ExecutionError> {
    match operation {
        Operation::LoadImmediate(register) => load_store::load_immediate(machine, register),
        Operation::LoadZeroPage(register) => load_store::load_zero_page(machine, register),
        Operation::LoadAbsolute(register) => load_store::load_absolute(machine, register),
        Operation::StoreZeroPage(register) => load_store::store_zero_page(machine, register),
        Operation::PushAccumulator => stack::push_accumulator(machine),
        Operation::PullAccumulator => stack::pull_accumulator(machine),
        Operation::JumpAbsolute => control::jump_absolute(machine),
    }
}

/// Updates Zero and Negative from a freshly loaded value.
///
/// Zero is set when the value is 0; Negative when `value & 0x40` is nonzero.
/// Under `FlagPolicy::Sticky` neither flag is ever cleared.
pub(crate) fn update_load_flags<M: MemoryBus>(machine: &mut Machine<M>, value: u8) {
    if machine.config.flag_policy == FlagPolicy::Recompute {
        machine.status.remove(Status::ZERO | Status::NEGATIVE);
    }

    if value == 0 {
        machine.status.insert(Status::ZERO);
    }
    if value & NEGATIVE_PROBE != 0 {
        machine.status.insert(Status::NEGATIVE);
    }
}
