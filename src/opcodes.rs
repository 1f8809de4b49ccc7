//! # Opcode Table
//!
//! The dispatch table mapping a one-byte instruction code to an instruction
//! kind. `OPCODES` is the flat list of supported instructions; `OPCODE_TABLE`
//! is the same data spread over 256 slots at compile time so decoding is a
//! single index.
//!
//! Supporting a new instruction means adding an `Operation` variant (the
//! compiler then flags the dispatch `match` until a handler exists) and an
//! entry in `OPCODES`.

use crate::{AddressingMode, Register};

/// Instruction kind, one variant per handler family.
///
/// Families that serve several registers carry the register they operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Load the next byte into a register.
    LoadImmediate(Register),

    /// Load from a zero page address into a register.
    LoadZeroPage(Register),

    /// Load from a full 16-bit address into a register.
    LoadAbsolute(Register),

    /// Write a register to a zero page address.
    StoreZeroPage(Register),

    /// Push the accumulator onto the stack.
    PushAccumulator,

    /// Pull the accumulator from the stack.
    PullAccumulator,

    /// Set the program counter to a full 16-bit address.
    JumpAbsolute,
}

impl Operation {
    pub const fn addressing_mode(self) -> AddressingMode {
        match self {
            Operation::LoadImmediate(_) => AddressingMode::Immediate,
            Operation::LoadZeroPage(_) | Operation::StoreZeroPage(_) => AddressingMode::ZeroPage,
            Operation::LoadAbsolute(_) | Operation::JumpAbsolute => AddressingMode::Absolute,
            Operation::PushAccumulator | Operation::PullAccumulator => AddressingMode::Implied,
        }
    }

    /// Cycle cost returned by the handler for this operation.
    pub const fn cycles(self) -> u8 {
        match self {
            Operation::LoadImmediate(_) => 2,
            Operation::LoadZeroPage(_) => 3,
            Operation::LoadAbsolute(_) => 4,
            Operation::StoreZeroPage(_) => 3,
            Operation::PushAccumulator => 3,
            Operation::PullAccumulator => 4,
            Operation::JumpAbsolute => 3,
        }
    }

    /// The register this operation reads or writes, if any.
    pub const fn register(self) -> Option<Register> {
        match self {
            Operation::LoadImmediate(register)
            | Operation::LoadZeroPage(register)
            | Operation::LoadAbsolute(register)
            | Operation::StoreZeroPage(register) => Some(register),
            Operation::PushAccumulator | Operation::PullAccumulator => Some(Register::A),
            Operation::JumpAbsolute => None,
        }
    }
}

/// A single opcode table entry.
///
/// # Examples
///
/// ```
/// use lite6502::{lookup, AddressingMode, Operation, Register};
///
/// let lda_imm = lookup(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::LoadImmediate(Register::A));
/// assert_eq!(lda_imm.addressing_mode(), AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles(), 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// The instruction byte
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA")
    pub mnemonic: &'static str,

    pub operation: Operation,
}

impl OpcodeEntry {
    const fn new(opcode: u8, mnemonic: &'static str, operation: Operation) -> Self {
        Self {
            opcode,
            mnemonic,
            operation,
        }
    }

    pub const fn addressing_mode(&self) -> AddressingMode {
        self.operation.addressing_mode()
    }

    pub const fn base_cycles(&self) -> u8 {
        self.operation.cycles()
    }

    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode().operand_bytes()
    }
}

/// Every supported instruction.
pub const OPCODES: &[OpcodeEntry] = &[
    // LDA
    OpcodeEntry::new(0xA9, "LDA", Operation::LoadImmediate(Register::A)),
    OpcodeEntry::new(0xA5, "LDA", Operation::LoadZeroPage(Register::A)),
    OpcodeEntry::new(0xAD, "LDA", Operation::LoadAbsolute(Register::A)),
    // LDX
    OpcodeEntry::new(0xA2, "LDX", Operation::LoadImmediate(Register::X)),
    OpcodeEntry::new(0xA6, "LDX", Operation::LoadZeroPage(Register::X)),
    OpcodeEntry::new(0xAE, "LDX", Operation::LoadAbsolute(Register::X)),
    // LDY
    OpcodeEntry::new(0xA0, "LDY", Operation::LoadImmediate(Register::Y)),
    OpcodeEntry::new(0xA4, "LDY", Operation::LoadZeroPage(Register::Y)),
    OpcodeEntry::new(0xAC, "LDY", Operation::LoadAbsolute(Register::Y)),
    // STA
    OpcodeEntry::new(0x85, "STA", Operation::StoreZeroPage(Register::A)),
    // PHA / PLA
    OpcodeEntry::new(0x48, "PHA", Operation::PushAccumulator),
    OpcodeEntry::new(0x68, "PLA", Operation::PullAccumulator),
    // JMP
    OpcodeEntry::new(0x4C, "JMP", Operation::JumpAbsolute),
];

/// 256-slot opcode table indexed by opcode byte; `None` for unsupported bytes.
///
/// # Examples
///
/// ```
/// use lite6502::OPCODE_TABLE;
///
/// assert!(OPCODE_TABLE[0x48].is_some()); // PHA
/// assert!(OPCODE_TABLE[0x69].is_none()); // ADC is not modeled
/// ```
pub static OPCODE_TABLE: [Option<OpcodeEntry>; 256] = build_table(OPCODES);

const fn build_table(entries: &[OpcodeEntry]) -> [Option<OpcodeEntry>; 256] {
    let mut table: [Option<OpcodeEntry>; 256] = [None; 256];
    let mut i = 0;
    while i < entries.len() {
        let entry = entries[i];
        assert!(
            table[entry.opcode as usize].is_none(),
            "duplicate opcode in OPCODES"
        );
        table[entry.opcode as usize] = Some(entry);
        i += 1;
    }
    table
}

/// Looks up the table entry for an opcode byte.
pub fn lookup(opcode: u8) -> Option<&'static OpcodeEntry> {
    OPCODE_TABLE[opcode as usize].as_ref()
}
