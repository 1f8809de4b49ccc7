//! # lite6502
//!
//! A small interpreter core for a 6502-style, accumulator-based instruction subset.
//!
//! The crate models the processor registers, a flat 64KB address space and a
//! fetch-decode-execute loop driven by a 256-entry opcode table. Callers load a
//! program image, drive execution with a cycle budget or until the halt byte is
//! fetched, and read back the register state.
//!
//! ## Quick Start
//!
//! ```rust
//! use lite6502::{FlatMemory, Machine, MemoryBus};
//!
//! let mut machine = Machine::new(FlatMemory::new());
//!
//! // LDA #$0A; STA $05; LDA #$00; LDA $05
//! machine
//!     .load_program(&[0xA9, 0x0A, 0x85, 0x05, 0xA9, 0x00, 0xA5, 0x05])
//!     .unwrap();
//!
//! machine.run_to_sentinel().unwrap();
//!
//! assert_eq!(machine.a(), 0x0A);
//! assert_eq!(machine.memory().read(0x0005), 0x0A);
//! ```
//!
//! ## Modules
//!
//! - `machine` - Machine state and the fetch-decode-execute loop
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - Opcode table and instruction kinds
//! - `addressing` - Addressing mode enumeration
//! - `status` - Status register flags
//! - `config` - Machine configuration and execution policies

pub mod addressing;
pub mod config;
pub mod machine;
pub mod memory;
pub mod opcodes;
pub mod status;

// Instruction handlers (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use config::{FlagPolicy, MachineConfig, UnknownOpcodePolicy};
pub use machine::{Machine, Register, Registers, HALT_OPCODE};
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{lookup, OpcodeEntry, Operation, OPCODES, OPCODE_TABLE};
pub use status::Status;

use thiserror::Error;

/// Errors that can occur while loading a program image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The program does not fit between `origin` and the end of memory.
    ///
    /// Nothing is written to memory when this is returned.
    #[error("program of {len} bytes at 0x{origin:04X} overruns {capacity} bytes of memory")]
    OutOfRange {
        origin: u16,
        len: usize,
        capacity: usize,
    },
}

/// Errors that can occur during execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// A fetched byte has no entry in the opcode table.
    ///
    /// `address` is where the byte was fetched from; the program counter has
    /// already moved past it.
    #[error("unknown opcode 0x{opcode:02X} at 0x{address:04X}")]
    UnknownOpcode { opcode: u8, address: u16 },

    /// A push was attempted with the stack pointer outside the stack region.
    ///
    /// This is normally a push past the floor of a full stack. It is also
    /// reported when the stack pointer was set above top-of-stack.
    #[error("stack overflow: push with stack pointer at 0x{sp:04X}")]
    StackOverflow { sp: u16 },

    /// A pull was attempted with the stack pointer already at top-of-stack.
    #[error("stack underflow: pull with stack pointer at 0x{sp:04X}")]
    StackUnderflow { sp: u16 },
}
