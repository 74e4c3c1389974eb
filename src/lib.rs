//! blackjack-rs: terminal blackjack
//!
//! Goals:
//! - A small, testable round engine: deck, scoring and the turn state machine
//! - Decisions and rendering behind traits so any frontend can drive a round
//! - No panics in the engine; misuse of the step API returns `Result`
//!
//! ## Quick start: play a scripted round
//! ```
//! use blackjack_rs::agents::ThresholdAgent;
//! use blackjack_rs::session::{Session, TableConfig};
//!
//! let config = TableConfig { starting_chips: 100, seed: Some(42), ..TableConfig::default() };
//! let mut session = Session::new(&config);
//! let record = session.play_round(10, &mut ThresholdAgent::dealer_rules(), &mut ()).unwrap();
//! assert_eq!(session.balance() as i64, 100 + record.delta);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin blackjack-rs
//! ```
//! When stdout is not a terminal the binary falls back to a line-based console game.

pub mod agents;
pub mod cards;
pub mod console;
pub mod deck;
pub mod engine;
pub mod game;
pub mod logging;
pub mod score;
pub mod session;
pub mod tui;
pub mod wallet;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
