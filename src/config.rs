//! # Machine Configuration
//!
//! Startup values and execution policies for a [`Machine`](crate::Machine).
//! The defaults reproduce the conventional layout: programs load at `0x0600`,
//! the stack occupies `0x0100-0x01FF` and grows down from `0x01FF`.

use crate::Status;

/// Default address programs are loaded at and execution starts from.
pub const DEFAULT_LOAD_ADDRESS: u16 = 0x0600;

/// Default top-of-stack address (stack pointer after reset).
pub const DEFAULT_STACK_TOP: u16 = 0x01FF;

/// Default lowest address a push may write to.
pub const DEFAULT_STACK_FLOOR: u16 = 0x0100;

/// What the dispatch engine does with a byte that has no opcode table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownOpcodePolicy {
    /// Fail the step with [`ExecutionError::UnknownOpcode`](crate::ExecutionError::UnknownOpcode).
    #[default]
    Error,

    /// Consume the byte as a one-cycle no-op and log a warning.
    Skip,
}

/// How load-class instructions update the Zero and Negative flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagPolicy {
    /// Flags are only ever set; a flag set by an earlier load stays set.
    #[default]
    Sticky,

    /// Zero and Negative are cleared before being recomputed from the loaded value.
    Recompute,
}

/// Configuration applied on construction and on every [`reset`](crate::Machine::reset).
///
/// # Examples
///
/// ```
/// use lite6502::{FlatMemory, Machine, MachineConfig, UnknownOpcodePolicy};
///
/// let config = MachineConfig::default()
///     .with_load_address(0x8000)
///     .with_unknown_opcode(UnknownOpcodePolicy::Skip);
///
/// let machine = Machine::with_config(FlatMemory::new(), config);
/// assert_eq!(machine.pc(), 0x8000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// Program counter after reset and default origin for `load_program`
    pub load_address: u16,

    /// Stack pointer after reset; pulls never move above it
    pub stack_top: u16,

    /// Pushes never write below it
    pub stack_floor: u16,

    /// Status register after reset
    pub reset_status: Status,

    pub unknown_opcode: UnknownOpcodePolicy,

    pub flag_policy: FlagPolicy,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            load_address: DEFAULT_LOAD_ADDRESS,
            stack_top: DEFAULT_STACK_TOP,
            stack_floor: DEFAULT_STACK_FLOOR,
            reset_status: Status::empty(),
            unknown_opcode: UnknownOpcodePolicy::default(),
            flag_policy: FlagPolicy::default(),
        }
    }
}

impl MachineConfig {
    pub fn with_load_address(mut self, address: u16) -> Self {
        self.load_address = address;
        self
    }

    /// Sets the stack region to `floor..=top`.
    pub fn with_stack(mut self, floor: u16, top: u16) -> Self {
        self.stack_floor = floor;
        self.stack_top = top;
        self
    }

    pub fn with_reset_status(mut self, status: Status) -> Self {
        self.reset_status = status;
        self
    }

    pub fn with_unknown_opcode(mut self, policy: UnknownOpcodePolicy) -> Self {
        self.unknown_opcode = policy;
        self
    }

    pub fn with_flag_policy(mut self, policy: FlagPolicy) -> Self {
        self.flag_policy = policy;
        self
    }
}
