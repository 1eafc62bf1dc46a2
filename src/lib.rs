//! PocketPet game engine library.
//!
//! Exposes the pure game core (pet model, animation, input routing,
//! lifecycle FSM, game loop) plus reference drivers and host adapters for
//! integration testing and the simulator binary.

#![deny(unused_must_use)]

pub mod adapters;
pub mod anim;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod fsm;
pub mod input;
pub mod pet;
pub mod scheduler;
pub mod tone;

pub use error::{Error, Result};
