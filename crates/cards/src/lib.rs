// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use fivecard_cards::{Card, Rank, Suit, parse_card};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let ad = parse_card("AD").unwrap();
//!
//! // Cards compare by rank only.
//! assert_eq!(ah, ad);
//! assert!(!ah.is_same(&ad));
//! ```
//!
//! a [Hand] type holding exactly five cards:
//!
//! ```
//! # use fivecard_cards::{CardError, Hand};
//! let hand = "TD JD QD KD AS".parse::<Hand>().unwrap();
//! assert_eq!(hand.to_string(), "AS KD QD JD TD");
//!
//! let err = "TD JD".parse::<Hand>().unwrap_err();
//! assert_eq!(err, CardError::InvalidHandSize(2));
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating hands in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use fivecard_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to sample 10 random 5-cards hands:
//!
//! ```
//! # use fivecard_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(10, 5, &mut rand::rng(), |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, CardError, Rank, Suit, parse_card};

mod deck;
pub use deck::Deck;

mod hand;
pub use hand::Hand;
