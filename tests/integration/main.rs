//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a slice of the game
//! against mock adapters.  All tests run on the host with no display,
//! buzzer, or buttons attached.

mod game_loop_tests;
mod game_scenarios;
mod mock_hw;
