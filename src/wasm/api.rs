//! WASM API for the interpreter.
//!
//! Provides JavaScript-callable interfaces for machine control and state
//! inspection.

use crate::{FlatMemory, Machine, MemoryBus};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl<E: std::error::Error> From<E> for JsError {
    fn from(err: E) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator {
    machine: Machine<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator {
    /// Create an emulator with zeroed memory and registers in reset state
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator {
            machine: Machine::new(FlatMemory::new()),
        }
    }

    /// Copy a program into memory at `origin`
    pub fn load_program(&mut self, program: &[u8], origin: u16) -> Result<(), JsError> {
        self.machine.load_program_at(program, origin)?;
        Ok(())
    }

    /// Execute a single instruction and return its cycle cost
    pub fn step(&mut self) -> Result<u8, JsError> {
        Ok(self.machine.step()?)
    }

    /// Execute until the cycle budget is exhausted and return cycles consumed
    pub fn run(&mut self, cycle_budget: u32) -> Result<u32, JsError> {
        let consumed = self.machine.run(cycle_budget as u64)?;
        Ok(consumed as u32)
    }

    /// Execute until the halt byte is fetched and return cycles consumed
    pub fn run_to_sentinel(&mut self) -> Result<f64, JsError> {
        let consumed = self.machine.run_to_sentinel()?;
        Ok(consumed as f64)
    }

    /// Reset registers to their startup values
    pub fn reset(&mut self) {
        self.machine.reset();
    }

    /// Zero all memory
    pub fn clear_memory(&mut self) {
        self.machine.clear_memory();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.machine.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.machine.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.machine.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.machine.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u16 {
        self.machine.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.machine.status().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.machine.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.machine.memory().read(addr)
    }

    /// Copy `len` bytes starting at `start`, clamped to the end of memory
    pub fn memory_range(&self, start: u16, len: u32) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.machine.memory().window(start, len))
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
