//! Shared helpers for integration tests.
//!
//! Logging is quiet by default. Set `TEST_LOG` (or `RUST_LOG`) to see the
//! engine's tracing output:
//!
//! ```bash
//! TEST_LOG=rust_palace=debug cargo test --test game_flow_tests -- --nocapture
//! ```

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use rust_palace::{Card, Deck, GameState, Participant, Phase, Pile};
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the test subscriber once per test binary. Safe to call from every test.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Parse a whitespace-separated card list such as `"10S QH 6d"`.
pub fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace()
        .map(|c| c.parse().expect("valid card"))
        .collect()
}

/// Build a position from card lists; the deck is drawn from its end.
pub fn position(human: [&str; 3], bot: [&str; 3], pile: &str, deck: &str, phase: Phase) -> GameState {
    let seat = |zones: [&str; 3]| Participant::from_zones(cards(zones[0]), cards(zones[1]), cards(zones[2]));
    GameState::from_parts(
        Deck::from_cards(cards(deck)),
        seat(human),
        seat(bot),
        Pile::from_cards(cards(pile)),
        phase,
    )
}
