//! # Status Register
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: (unused)
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

use bitflags::bitflags;

bitflags! {
    /// Processor status flags.
    ///
    /// Each flag is an independent bit of the packed 8-bit status register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const NEGATIVE = 0b1000_0000;
        const OVERFLOW = 0b0100_0000;
        const BREAK = 0b0001_0000;
        const DECIMAL = 0b0000_1000;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const ZERO = 0b0000_0010;
        const CARRY = 0b0000_0001;
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::empty()
    }
}
