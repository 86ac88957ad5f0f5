//! WebAssembly bindings for the lib8080 emulator.
//!
//! This module provides JavaScript-callable interfaces to the 8080 CPU emulator,
//! enabling browser-based execution of Altair 8800 programs.

pub mod api;

pub use api::Emulator8080;
