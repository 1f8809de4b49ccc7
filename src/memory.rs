//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the machine from a
//! specific memory implementation, and `FlatMemory`, a single 64KB RAM array
//! covering the whole address space.
//!
//! ## Design Principles
//!
//! - No bus errors - reads/writes always succeed
//! - Addresses are `u16`, so every access is in range of a 64KB backing store
//! - `size()` reports how many bytes are backed, which bounds program loads

/// Size of the full 16-bit address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Memory bus trait for the machine to read/write bytes.
///
/// # Examples
///
/// ```
/// use lite6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use lite6502::MemoryBus;
///
/// struct SmallMemory {
///     ram: [u8; 0x0800],
/// }
///
/// impl MemoryBus for SmallMemory {
///     fn read(&self, addr: u16) -> u8 {
///         // Mirror the 2KB of RAM across the address space
///         self.ram[(addr as usize) % 0x0800]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         self.ram[(addr as usize) % 0x0800] = value;
///     }
///
///     fn size(&self) -> usize {
///         0x0800
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic.
    fn write(&mut self, addr: u16, value: u8);

    /// Number of addressable bytes backed by this bus, starting at address 0.
    ///
    /// Program loads must fit below this bound. Defaults to the full 64KB
    /// address space.
    fn size(&self) -> usize {
        MEMORY_SIZE
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to one contiguous RAM array,
/// initialized to 0x00.
///
/// # Examples
///
/// ```
/// use lite6502::{FlatMemory, MemoryBus};
///
/// let mem = FlatMemory::new();
/// assert_eq!(mem.read(0x0000), 0x00);
/// assert_eq!(mem.read(0xFFFF), 0x00);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Returns the whole backing array.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    /// Returns up to `len` bytes starting at `start`, clamped to the end of memory.
    pub fn window(&self, start: u16, len: u32) -> &[u8] {
        let start = start as usize;
        let end = start.saturating_add(len as usize).min(MEMORY_SIZE);
        &self.data[start..end]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("size", &MEMORY_SIZE)
            .finish_non_exhaustive()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
