//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA, LDX, LDY: Load register (immediate, zero page, absolute)
//! - STA: Store accumulator (zero page)
//!
//! One handler serves each addressing mode; the register is a parameter.

use super::update_load_flags;
use crate::{ExecutionError, Machine, MemoryBus, Operation, Register};

/// Loads the byte following the opcode into `register`.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if value = 0
/// - Negative (N): Set if bit 6 of value is set
/// - Other flags: Not affected
///
/// Cycles: 2
pub(crate) fn load_immediate<M: MemoryBus>(
    machine: &mut Machine<M>,
    register: Register,
) -> Result<u8, ExecutionError> {
    let value = machine.read_next_byte();
    load(machine, register, value);
    Ok(Operation::LoadImmediate(register).cycles())
}

/// Loads the byte at a zero page address into `register`.
///
/// The operand byte is the address (0x0000-0x00FF). Flags as for
/// `load_immediate`.
///
/// Cycles: 3
pub(crate) fn load_zero_page<M: MemoryBus>(
    machine: &mut Machine<M>,
    register: Register,
) -> Result<u8, ExecutionError> {
    let addr = machine.read_next_byte() as u16;
    let value = machine.memory.read(addr);
    load(machine, register, value);
    Ok(Operation::LoadZeroPage(register).cycles())
}

/// Loads the byte at a full 16-bit address into `register`.
///
/// The address operand is read high byte first. Flags as for
/// `load_immediate`.
///
/// Cycles: 4
pub(crate) fn load_absolute<M: MemoryBus>(
    machine: &mut Machine<M>,
    register: Register,
) -> Result<u8, ExecutionError> {
    let addr = machine.read_next_word();
    let value = machine.memory.read(addr);
    load(machine, register, value);
    Ok(Operation::LoadAbsolute(register).cycles())
}

/// Writes `register` to a zero page address.
///
/// # Flag Behavior
///
/// - No flags affected
///
/// Cycles: 3
pub(crate) fn store_zero_page<M: MemoryBus>(
    machine: &mut Machine<M>,
    register: Register,
) -> Result<u8, ExecutionError> {
    let addr = machine.read_next_byte() as u16;
    let value = machine.register(register);
    machine.memory.write(addr, value);
    Ok(Operation::StoreZeroPage(register).cycles())
}

fn load<M: MemoryBus>(machine: &mut Machine<M>, register: Register, value: u8) {
    *machine.register_mut(register) = value;
    update_load_flags(machine, value);
}
