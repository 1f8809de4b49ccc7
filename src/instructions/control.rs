//! # Control Flow Instructions
//!
//! - JMP: Jump to absolute address

use crate::{ExecutionError, Machine, MemoryBus, Operation};

/// Executes the JMP (Jump) instruction with absolute addressing.
///
/// Reads a 16-bit address (high byte first) and sets PC to it.
///
/// Opcode: 0x4C
/// Cycles: 3
///
/// Flags affected: None
///
/// # Examples
///
/// ```
/// use lite6502::{FlatMemory, Machine};
///
/// let mut machine = Machine::new(FlatMemory::new());
/// machine.load_program(&[0x4C, 0x12, 0x34]).unwrap(); // JMP $1234
///
/// assert_eq!(machine.step(), Ok(3));
/// assert_eq!(machine.pc(), 0x1234);
/// ```
pub(crate) fn jump_absolute<M: MemoryBus>(
    machine: &mut Machine<M>,
) -> Result<u8, ExecutionError> {
    machine.pc = machine.read_next_word();
    Ok(Operation::JumpAbsolute.cycles())
}
