// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard Poker hand evaluator.
//!
//! Classifies five cards hands into one of ten categories, from high card to
//! royal flush, and compares hands breaking ties between hands of the same
//! category. Aces are always high, so `A 2 3 4 5` is not a straight, and
//! suits never break ties.
//!
//! To use the evaluator create a hand, [classify] it to get its category, or
//! [compare] it with another hand:
//!
//! ```
//! # use fivecard_eval::*;
//! let h1 = "2H 2D 4C 4D 4S".parse::<Hand>().unwrap();
//! let h2 = "3C 3D 3S 9S 9D".parse::<Hand>().unwrap();
//!
//! let result = classify(&h1);
//! assert_eq!(result.category(), WinCategory::FullHouse);
//! assert_eq!(result.to_string(), "FullHouse (4,2)");
//!
//! assert_eq!(compare(&h1, &h2), Outcome::AWins);
//! assert_eq!(compare(&h2, &h1), Outcome::BWins);
//! ```
//!
//! A [OneDeckGame] plays two hands parsed from a line of ten cards:
//!
//! ```
//! # use fivecard_eval::*;
//! let game = "5H 5C 6S 7S KD 2C 3S 8S 8D TD".parse::<OneDeckGame>().unwrap();
//! assert_eq!(game.winner(), Outcome::BWins);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub use category::{CategoryResult, WinCategory, classify};

pub mod compare;
pub use compare::{Outcome, compare};

pub mod game;
pub use game::OneDeckGame;

// Reexport cards types.
pub use fivecard_cards::{Card, CardError, Deck, Hand, Rank, Suit, parse_card};
