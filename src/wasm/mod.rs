//! WebAssembly bindings for the lite6502 interpreter.
//!
//! This module provides JavaScript-callable interfaces to the machine, so a
//! browser page can load a program image, run it and inspect the registers.

pub mod api;

pub use api::Emulator;
