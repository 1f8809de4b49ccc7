//! # Addressing Modes
//!
//! The addressing modes used by the modeled instruction subset. Each mode
//! determines how many operand bytes follow the opcode and how the operand is
//! interpreted.

/// Addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied
/// - **1 byte**: Immediate, ZeroPage
/// - **2 bytes**: Absolute (read high byte first)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, target fixed by the instruction.
    ///
    /// Examples: PHA, PLA
    Implied,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied => 0,
            AddressingMode::Immediate | AddressingMode::ZeroPage => 1,
            AddressingMode::Absolute => 2,
        }
    }
}
