//! Driver for 12 LEDs behind an MCP23017 16-bit I2C I/O expander.
//!
//! LEDs 1..=6 sit on bank A pins GPA0..GPA5 and LEDs 7..=12 on bank B pins
//! GPB0..GPB5. The driver mirrors both output registers in memory and turns
//! LED operations (single LED, all LEDs, bar graph, pixel pattern) into
//! minimal single-register writes. Blocking and async variants are provided
//! over the `embedded-hal` / `embedded-hal-async` I2C traits.

#![no_std]

mod config;
mod state;

pub mod mcp23017;

#[cfg(test)]
mod test_utils;

pub use config::{Address, Bank, Register, LED_COUNT, MAX_LED_INDEX};
pub use mcp23017::{
    Async, Blocking, LedState, Mcp23017Error, Mcp23017Leds, Mode,
};
