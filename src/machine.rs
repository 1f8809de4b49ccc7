//! # Machine State and Execution
//!
//! This module contains the `Machine` struct representing processor state and
//! the fetch-decode-execute loop.
//!
//! ## Machine State
//!
//! The machine maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction byte
//! - **Stack pointer** (SP): 16-bit stack address, growing down from top-of-stack
//! - **Status flags**: packed `Status` register
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction
//! - `run()`: Execute until the cycle budget is exhausted
//! - `run_to_sentinel()`: Execute until the halt byte (0x00) is fetched

use crate::config::{MachineConfig, UnknownOpcodePolicy};
use crate::{instructions, lookup, ExecutionError, LoadError, MemoryBus, Status, MEMORY_SIZE};

/// Opcode byte that stops `run_to_sentinel`.
pub const HALT_OPCODE: u8 = 0x00;

/// Cycles charged for a byte skipped under `UnknownOpcodePolicy::Skip`.
const SKIPPED_OPCODE_CYCLES: u8 = 1;

/// Identifies one of the 8-bit data registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Accumulator
    A,
    /// X index register
    X,
    /// Y index register
    Y,
}

/// Snapshot of the register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub status: Status,
    pub sp: u16,
    pub pc: u16,
}

/// Processor state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use lite6502::{FlatMemory, Machine};
///
/// let machine = Machine::new(FlatMemory::new());
///
/// assert_eq!(machine.pc(), 0x0600);
/// assert_eq!(machine.sp(), 0x01FF);
/// assert_eq!(machine.a(), 0x00);
/// assert_eq!(machine.status().bits(), 0x00);
/// assert_eq!(machine.cycles(), 0);
/// ```
pub struct Machine<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction byte)
    pub(crate) pc: u16,

    /// Stack pointer (address the next push writes to)
    pub(crate) sp: u16,

    pub(crate) status: Status,

    /// Total cycles executed since the last reset
    pub(crate) cycles: u64,

    pub(crate) config: MachineConfig,

    pub(crate) memory: M,
}

impl<M: MemoryBus> Machine<M> {
    /// Creates a machine with the default configuration.
    ///
    /// Registers are put in their reset state; the memory contents are kept
    /// as supplied.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, MachineConfig::default())
    }

    /// Creates a machine with the given configuration.
    pub fn with_config(memory: M, config: MachineConfig) -> Self {
        let mut machine = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            status: Status::empty(),
            cycles: 0,
            config,
            memory,
        };
        machine.reset();
        machine
    }

    /// Puts the registers in their startup state.
    ///
    /// A, X and Y are zeroed, the status register takes the configured reset
    /// pattern, SP moves to top-of-stack and PC to the load address. Memory is
    /// left untouched.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.status = self.config.reset_status;
        self.sp = self.config.stack_top;
        self.pc = self.config.load_address;
        self.cycles = 0;

        log::debug!(
            "Reset machine, PC set to: 0x{:04X}, SP set to: 0x{:04X}",
            self.pc,
            self.sp
        );
    }

    /// Zeroes every backed memory cell.
    ///
    /// Only the 16-bit address space is walked, even if the bus reports more.
    pub fn clear_memory(&mut self) {
        for addr in 0..self.memory.size().min(MEMORY_SIZE) {
            self.memory.write(addr as u16, 0x00);
        }
    }

    /// Copies a program image to the configured load address.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), LoadError> {
        self.load_program_at(program, self.config.load_address)
    }

    /// Copies a program image into memory starting at `origin`.
    ///
    /// Fails without writing anything when the image would run past the end
    /// of memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite6502::{FlatMemory, LoadError, Machine, MemoryBus};
    ///
    /// let mut machine = Machine::new(FlatMemory::new());
    ///
    /// machine.load_program_at(&[0xA9, 0x42], 0xFFFE).unwrap();
    /// assert_eq!(machine.memory().read(0xFFFF), 0x42);
    ///
    /// let err = machine.load_program_at(&[0x01, 0x02, 0x03], 0xFFFE).unwrap_err();
    /// assert!(matches!(err, LoadError::OutOfRange { .. }));
    /// ```
    pub fn load_program_at(&mut self, program: &[u8], origin: u16) -> Result<(), LoadError> {
        let capacity = self.memory.size();
        let end = origin as usize + program.len();
        if end > capacity {
            return Err(LoadError::OutOfRange {
                origin,
                len: program.len(),
                capacity,
            });
        }

        for (offset, &byte) in program.iter().enumerate() {
            self.memory.write(origin.wrapping_add(offset as u16), byte);
        }

        log::debug!(
            "Loaded {} bytes at 0x{:04X}-0x{:04X}",
            program.len(),
            origin,
            end.saturating_sub(1)
        );

        Ok(())
    }

    /// Returns the byte at PC and advances PC by one, wrapping at 0xFFFF.
    pub fn read_next_byte(&mut self) -> u8 {
        let data = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        data
    }

    /// Returns the next two bytes as a big-endian word and advances PC by two.
    ///
    /// The first byte is the high byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite6502::{FlatMemory, Machine};
    ///
    /// let mut machine = Machine::new(FlatMemory::new());
    /// machine.load_program(&[0x13, 0x37]).unwrap();
    ///
    /// assert_eq!(machine.read_next_word(), 0x1337);
    /// assert_eq!(machine.pc(), 0x0602);
    /// ```
    pub fn read_next_word(&mut self) -> u16 {
        let hi = self.read_next_byte() as u16;
        let lo = self.read_next_byte() as u16;
        (hi << 8) | lo
    }

    /// Executes one instruction and returns its cycle cost.
    ///
    /// Fetches the byte at PC, looks it up in the opcode table and runs the
    /// bound handler. There is no halt check here; 0x00 is an unknown opcode
    /// like any other unsupported byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite6502::{ExecutionError, FlatMemory, Machine};
    ///
    /// let mut machine = Machine::new(FlatMemory::new());
    /// machine.load_program(&[0xA9, 0x42, 0x69]).unwrap();
    ///
    /// assert_eq!(machine.step(), Ok(2));
    /// assert_eq!(machine.a(), 0x42);
    ///
    /// match machine.step() {
    ///     Err(ExecutionError::UnknownOpcode { opcode, address }) => {
    ///         assert_eq!(opcode, 0x69);
    ///         assert_eq!(address, 0x0602);
    ///     }
    ///     other => panic!("expected UnknownOpcode, got {:?}", other),
    /// }
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        let address = self.pc;
        let opcode = self.read_next_byte();
        self.dispatch(opcode, address)
    }

    /// Runs until the cycle budget is exhausted.
    ///
    /// Each instruction's cost is subtracted from the remaining budget; the
    /// loop stops once nothing remains. Returns the cycles consumed, which can
    /// exceed the budget by at most one instruction's cost.
    ///
    /// # Examples
    ///
    /// ```
    /// use lite6502::{FlatMemory, Machine};
    ///
    /// let mut machine = Machine::new(FlatMemory::new());
    /// machine.load_program(&[0xA9, 0x01]).unwrap();
    ///
    /// assert_eq!(machine.run(2), Ok(2));
    /// assert_eq!(machine.pc(), 0x0602);
    /// ```
    pub fn run(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let mut remaining = cycle_budget;
        let mut consumed = 0u64;

        while remaining > 0 {
            let cost = self.step()? as u64;
            remaining = remaining.saturating_sub(cost);
            consumed += cost;
        }

        Ok(consumed)
    }

    /// Runs until the halt byte (0x00) is fetched.
    ///
    /// The halt byte is consumed, so PC ends one past it. There is no other
    /// bound: a program that never reaches a halt byte runs forever.
    ///
    /// Returns the cycles consumed.
    pub fn run_to_sentinel(&mut self) -> Result<u64, ExecutionError> {
        let mut consumed = 0u64;

        loop {
            let address = self.pc;
            let opcode = self.read_next_byte();
            if opcode == HALT_OPCODE {
                log::debug!(
                    "Halt at 0x{:04X} after {} cycles",
                    address,
                    consumed
                );
                return Ok(consumed);
            }

            consumed += self.dispatch(opcode, address)? as u64;
        }
    }

    /// Decodes and executes an already fetched opcode.
    fn dispatch(&mut self, opcode: u8, address: u16) -> Result<u8, ExecutionError> {
        let Some(entry) = lookup(opcode) else {
            return self.unknown_opcode(opcode, address);
        };

        log::trace!(
            "PC: 0x{:04X}, Op: 0x{:02X} ({})",
            address,
            opcode,
            entry.mnemonic
        );

        let cycles = instructions::execute(self, entry.operation)?;
        self.cycles += cycles as u64;
        Ok(cycles)
    }

    fn unknown_opcode(&mut self, opcode: u8, address: u16) -> Result<u8, ExecutionError> {
        match self.config.unknown_opcode {
            UnknownOpcodePolicy::Error => Err(ExecutionError::UnknownOpcode { opcode, address }),
            UnknownOpcodePolicy::Skip => {
                log::warn!("Skipping unknown opcode 0x{:02X} at 0x{:04X}", opcode, address);
                self.cycles += SKIPPED_OPCODE_CYCLES as u64;
                Ok(SKIPPED_OPCODE_CYCLES)
            }
        }
    }

    // ========== Register Access ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    pub fn sp(&self) -> u16 {
        self.sp
    }

    /// Returns the status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true if every flag in `flag` is set.
    pub fn flag(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    /// Returns the total number of cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the configuration the machine was built with.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Returns a snapshot of all registers.
    pub fn registers(&self) -> Registers {
        Registers {
            a: self.a,
            x: self.x,
            y: self.y,
            status: self.status,
            sp: self.sp,
            pc: self.pc,
        }
    }

    /// Returns the value of a data register.
    pub fn register(&self, register: Register) -> u8 {
        match register {
            Register::A => self.a,
            Register::X => self.x,
            Register::Y => self.y,
        }
    }

    /// Returns a mutable reference to a data register.
    pub fn register_mut(&mut self, register: Register) -> &mut u8 {
        match register {
            Register::A => &mut self.a,
            Register::X => &mut self.x,
            Register::Y => &mut self.y,
        }
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer. No range check is made here; PHA and PLA
    /// report a pointer outside the stack region.
    pub fn set_sp(&mut self, value: u16) {
        self.sp = value;
    }

    /// Replaces the whole status register.
    pub fn set_status(&mut self, value: Status) {
        self.status = value;
    }

    // ========== Memory Access ==========

    /// Returns the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns the memory bus mutably.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}

impl Default for Machine<crate::FlatMemory> {
    fn default() -> Self {
        Self::new(crate::FlatMemory::new())
    }
}
