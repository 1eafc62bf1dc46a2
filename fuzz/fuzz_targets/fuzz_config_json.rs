//! Fuzz target: `GameConfig` JSON parsing and validation
//!
//! Any document that deserializes and passes `validate()` must produce a
//! game that can start and run a few seconds without panicking.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use pocketpet::app::ports::NoopSink;
use pocketpet::app::service::PetGame;
use pocketpet::config::GameConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(config) = serde_json::from_slice::<GameConfig>(data) else {
        return;
    };
    if config.validate().is_err() {
        return;
    }

    let mut game = PetGame::new(config, 0);
    game.start(&mut NoopSink);
    for t in (0..5000).step_by(30) {
        game.tick(t, &mut NoopSink);
        game.animate(t, &mut NoopSink);
    }
});
