// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of cards for enumerating and sampling hands.
use rand::prelude::*;

use crate::{Card, Hand, Rank, Suit};

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns None if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    ///
    /// Only the card with the same rank and suit is removed.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| !c.is_same(&card));
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=Hand::SIZE).contains(&k), "1 <= k <= 5");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Lexicographic k-subsets of indices, c[i] < c[i + 1].
        let mut c = (0..k).collect::<Vec<_>>();
        let mut h = c.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&h);

            // Find the rightmost index that can still move right.
            let Some(i) = (0..k).rev().find(|&i| c[i] < n - k + i) else {
                return;
            };

            c[i] += 1;
            h[i] = self.cards[c[i]];
            for j in (i + 1)..k {
                c[j] = c[j - 1] + 1;
                h[j] = self.cards[c[j]];
            }
        }
    }

    /// Calls the `f` closure for `n` random k-cards hands.
    ///
    /// The cards in each hand are distinct, hands are sampled independently.
    /// Panics if k is not 1 <= k <= 5.
    pub fn sample<R, F>(&self, n: usize, k: usize, rng: &mut R, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        assert!((1..=Hand::SIZE).contains(&k), "1 <= k <= 5");

        if k > self.cards.len() {
            return;
        }

        let mut h = Vec::with_capacity(k);
        for _ in 0..n {
            h.clear();
            h.extend(self.cards.choose_multiple(rng, k).copied());
            f(&h);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
