// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand.
use std::{fmt, str::FromStr};

use crate::{Card, CardError, Rank};

/// A five cards Poker hand.
///
/// The cards are kept sorted by rank from highest to lowest, cards with the
/// same rank are sorted by suit, so that neither the evaluation nor the
/// display depend on the order used to build the hand.
///
/// Two hands are equal if they hold the same cards, suits included.
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    cards: [Card; Hand::SIZE],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from exactly five cards.
    pub fn new(cards: &[Card]) -> Result<Self, CardError> {
        let mut cards = <[Card; Hand::SIZE]>::try_from(cards)
            .map_err(|_| CardError::InvalidHandSize(cards.len()))?;
        cards.sort_unstable_by_key(|c| std::cmp::Reverse(c.id()));
        Ok(Self { cards })
    }

    /// The hand cards sorted by rank, highest first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hand ranks, highest first.
    pub fn ranks(&self) -> impl DoubleEndedIterator<Item = Rank> + '_ {
        self.cards.iter().map(Card::rank)
    }

    /// The highest card in the hand.
    pub fn highest(&self) -> Card {
        self.cards[0]
    }

    /// The lowest card in the hand.
    pub fn lowest(&self) -> Card {
        self.cards[Hand::SIZE - 1]
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cards
            .iter()
            .zip(&other.cards)
            .all(|(a, b)| a.is_same(b))
    }
}

impl Eq for Hand {}

impl FromStr for Hand {
    type Err = CardError;

    /// Parses a space separated list of cards like `"AS KD QD JD TD"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Hand::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Suit, parse_card};

    #[test]
    fn sorted_highest_first() {
        let hand = "5H 5C 6S 7S KD".parse::<Hand>().unwrap();
        assert_eq!(hand.highest().rank(), Rank::King);
        assert_eq!(hand.lowest().rank(), Rank::Five);

        let ranks = hand.ranks().collect::<Vec<_>>();
        assert_eq!(
            ranks,
            vec![Rank::King, Rank::Seven, Rank::Six, Rank::Five, Rank::Five]
        );
    }

    #[test]
    fn hand_to_string() {
        let hand = "TD JD AS QD KD".parse::<Hand>().unwrap();
        assert_eq!(hand.to_string(), "AS KD QD JD TD");
    }

    #[test]
    fn construction_order_does_not_matter() {
        let h1 = "JH KH TH AH QH".parse::<Hand>().unwrap();
        let h2 = "AH KH QH JH TH".parse::<Hand>().unwrap();
        assert_eq!(h1.to_string(), h2.to_string());
    }

    #[test]
    fn equality_includes_suits() {
        let flush = "AS KS QS JS 9S".parse::<Hand>().unwrap();
        let high_card = "AS KD QS JS 9S".parse::<Hand>().unwrap();
        assert_ne!(flush, high_card);
        assert_eq!(flush, "9S JS QS KS AS".parse::<Hand>().unwrap());

        // Same rank cards are ordered by suit.
        let h1 = "8S 8D 3C 3H 2C".parse::<Hand>().unwrap();
        let h2 = "8D 8S 3H 3C 2C".parse::<Hand>().unwrap();
        assert_eq!(h1, h2);
        assert_eq!(h1.to_string(), h2.to_string());
    }

    #[test]
    fn invalid_hand_size() {
        let cards = [parse_card("8S").unwrap(), parse_card("8D").unwrap()];
        assert_eq!(Hand::new(&cards), Err(CardError::InvalidHandSize(2)));

        let cards = vec![Card::new(Rank::Ace, Suit::Spades); 6];
        assert_eq!(Hand::new(&cards), Err(CardError::InvalidHandSize(6)));

        assert_eq!("".parse::<Hand>(), Err(CardError::InvalidHandSize(0)));
    }

    #[test]
    fn invalid_card_in_hand() {
        assert_eq!(
            "AS KD QD JD 1D".parse::<Hand>(),
            Err(CardError::InvalidCardFormat("1D".to_string()))
        );
    }
}
