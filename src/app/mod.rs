//! Application core — pure game logic, zero I/O.
//!
//! Owns the rules of the pet's life: FSM orchestration, input routing,
//! death detection, and the frame handed to the display.  All interaction
//! with peripherals happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without a screen or a buzzer.

pub mod events;
pub mod frame;
pub mod ports;
pub mod service;
