//! Fuzz target: `PetGame` driven by arbitrary input edges and time gaps
//!
//! Each byte is one operation: the low two bits pick a kind (press,
//! release, motion, wait) and the rest pick the button or the gap.
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - Every stat stays within 0..=100
//! - The menu index stays below 3
//! - The frame reports dead exactly when the activity is `Dead`
//!
//! cargo fuzz run fuzz_game_inputs

#![no_main]

use libfuzzer_sys::fuzz_target;
use pocketpet::app::ports::NoopSink;
use pocketpet::app::service::PetGame;
use pocketpet::config::GameConfig;
use pocketpet::fsm::Activity;
use pocketpet::input::{ButtonId, InputEvent};
use pocketpet::pet::Stats;

fuzz_target!(|data: &[u8]| {
    let Some((&seed, ops)) = data.split_first() else {
        return;
    };

    let mut game = PetGame::new(GameConfig::default(), 0);
    game.start(&mut NoopSink);
    // Odd seeds start exhausted so death and revival get exercised.
    if seed & 1 == 1 {
        game.context_mut().pet.stats = Stats::new(0, 0, 0, 100);
    }

    let mut now: u32 = 0;
    let mut next_tick: u32 = 1000;
    for &byte in ops {
        let button = ButtonId::ALL[usize::from(byte >> 2) % 3];
        match byte & 0b11 {
            0 => {
                game.handle_input(InputEvent::Pressed(button), now, &mut NoopSink);
            }
            1 => {
                game.handle_input(InputEvent::Released(button), now, &mut NoopSink);
            }
            2 => {
                game.handle_input(InputEvent::MotionTripped, now, &mut NoopSink);
            }
            _ => {
                now = now.wrapping_add(u32::from(byte >> 2) * 50);
                if now.wrapping_sub(next_tick) < u32::MAX / 2 {
                    game.tick(now, &mut NoopSink);
                    next_tick = now.wrapping_add(1000);
                }
                game.animate(now, &mut NoopSink);
            }
        }

        let (h, ha, e, d) = game.pet().stats.values();
        assert!(h <= 100 && ha <= 100 && e <= 100 && d <= 100);
        assert!(game.menu().index() < 3);
        assert_eq!(game.frame().is_dead, game.activity() == Activity::Dead);
    }
});
