// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands comparison.
//!
//! Two hands are compared by category first, hands with the same category
//! are compared with the category tie-break rules:
//!
//! | Category | Tie-break |
//! |---|---|
//! | High card, straight, flush, straight flush | ranks pairwise, highest first |
//! | Pair, three of a kind, four of a kind | the matching rank, then high card |
//! | Two pair | the higher pair, the lower pair, then high card |
//! | Full house | the three of a kind rank, then the pair rank |
//! | Royal flush | always a draw |
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::{CategoryResult, Hand, Rank, WinCategory, classify};

/// The result of comparing hand A with hand B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Hand A is stronger.
    AWins,
    /// Hand B is stronger.
    BWins,
    /// The hands have the same strength.
    Draw,
}

impl Outcome {
    /// The outcome with the hands swapped.
    pub fn reverse(self) -> Outcome {
        match self {
            Outcome::AWins => Outcome::BWins,
            Outcome::BWins => Outcome::AWins,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::AWins,
            Ordering::Less => Outcome::BWins,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

impl From<Outcome> for Ordering {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::AWins => Ordering::Greater,
            Outcome::BWins => Ordering::Less,
            Outcome::Draw => Ordering::Equal,
        }
    }
}

/// Compares two hands.
pub fn compare(a: &Hand, b: &Hand) -> Outcome {
    let (ra, rb) = (classify(a), classify(b));
    let outcome = ra.trumps(&rb);
    debug!("{a} {ra} vs {b} {rb}: {outcome:?}");
    outcome
}

impl CategoryResult<'_> {
    /// Compares this classified hand with another classified hand.
    pub fn trumps(&self, other: &CategoryResult<'_>) -> Outcome {
        if self.category() != other.category() {
            return self.category().cmp(&other.category()).into();
        }

        let (a, b) = (self.values(), other.values());
        let ord = match self.category() {
            WinCategory::HighCard
            | WinCategory::Straight
            | WinCategory::Flush
            | WinCategory::StraightFlush => high_card(self.hand(), other.hand()),
            WinCategory::Pair | WinCategory::ThreeOfAKind | WinCategory::FourOfAKind => {
                by_ranks(a.iter().copied(), b.iter().copied())
                    .then_with(|| high_card(self.hand(), other.hand()))
            }
            WinCategory::TwoPair => by_ranks(a.iter().rev().copied(), b.iter().rev().copied())
                .then_with(|| high_card(self.hand(), other.hand())),
            WinCategory::FullHouse => by_ranks(a.iter().copied(), b.iter().copied()),
            // Only one royal flush per suit and suits don't break ties.
            WinCategory::RoyalFlush => Ordering::Equal,
        };

        ord.into()
    }
}

/// Compares the hands cards pairwise, highest first.
fn high_card(a: &Hand, b: &Hand) -> Ordering {
    by_ranks(a.ranks(), b.ranks())
}

/// First rank that differs decides.
fn by_ranks(a: impl Iterator<Item = Rank>, b: impl Iterator<Item = Rank>) -> Ordering {
    a.zip(b)
        .map(|(x, y)| x.cmp(&y))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(a: &str, b: &str, expected: Outcome) {
        let (a, b) = (a.parse::<Hand>().unwrap(), b.parse::<Hand>().unwrap());
        assert_eq!(compare(&a, &b), expected, "{a} vs {b}");
        assert_eq!(compare(&b, &a), expected.reverse(), "{b} vs {a}");
    }

    #[test]
    fn outcome_ordering() {
        for ord in [Ordering::Less, Ordering::Equal, Ordering::Greater] {
            assert_eq!(Ordering::from(Outcome::from(ord)), ord);
            assert_eq!(Outcome::from(ord.reverse()), Outcome::from(ord).reverse());
        }
    }

    #[test]
    fn higher_category_wins() {
        check("2S 2H 3S 3H 4D", "KS KH 6S 5H 4C", Outcome::AWins);
        check("2S 2D 2H 3S 4D", "AS AD KH KS QD", Outcome::AWins);
        check("3S 4S 5S 6S 7S", "AH AD AC AS KH", Outcome::AWins);
        check("2C 3D 4H 5S 6C", "AH KH QH JH 9H", Outcome::BWins);
    }

    #[test]
    fn high_card_tie() {
        check("5D 8C 9S JS AC", "2C 5C 7D 8S QH", Outcome::AWins);
        check("AD KC 9S 7S 3C", "AC KD 9H 7D 2H", Outcome::AWins);
        check("AD KC 9S 7S 3C", "AC KD 9H 7D 3H", Outcome::Draw);
    }

    #[test]
    fn pair_tie() {
        check("8S 8D 2C 3D 4H", "5H 5C AD KD QS", Outcome::AWins);
        check("5H 5C 6S 7S KD", "2C 3S 8S 8D TD", Outcome::BWins);
        check("TH 8H 5C QS TC", "9H 4D JC KS JS", Outcome::BWins);

        // Same pair, kickers decide.
        check("8S 8D AC 3D 2H", "8H 8C KD QD JS", Outcome::AWins);
        check("8S 8D AC 3D 2H", "8H 8C AD 3S 2C", Outcome::Draw);
    }

    #[test]
    fn two_pair_tie() {
        // Higher pair first even when the lower pair is weaker.
        check("KS KH 2S 2H 3D", "QS QH JS JH AD", Outcome::AWins);
        check("KS KH 5S 5H 3D", "KD KC 4S 4H AD", Outcome::AWins);

        // Same pairs, the kicker decides.
        check("KS KH 5S 5H 3D", "KD KC 5D 5C 2D", Outcome::AWins);
        check("KS KH 5S 5H 3D", "KD KC 5D 5C 3C", Outcome::Draw);
    }

    #[test]
    fn three_of_a_kind_tie() {
        check("2S 2D 2H 3S 4D", "3H 3D 3C 8S 9D", Outcome::BWins);
        check("9S 9D 9H 3S 4D", "9C 9D 9H 2S 4H", Outcome::AWins);
    }

    #[test]
    fn straight_tie() {
        check("6H 3S 4H 2C 5H", "7D 3D 4C 6C 5D", Outcome::BWins);
        check("AS KD QH JS TC", "AD KS QC JD TH", Outcome::Draw);
    }

    #[test]
    fn flush_tie() {
        check("2H 4H 5H 6H 7H", "2C 4C 5C 6C 8C", Outcome::BWins);
        check("9C JC QC KC AC", "8H JH QH KH AH", Outcome::AWins);
    }

    #[test]
    fn full_house_tie() {
        check("2H 2D 4C 4D 4S", "3C 3D 3S 9S 9D", Outcome::AWins);
        check("4C 4D 4S 2H 2D", "4C 4D 4S 9S 9D", Outcome::BWins);
        check("4C 4D 4S 2H 2D", "4C 4D 4S 2S 2C", Outcome::Draw);
    }

    #[test]
    fn four_of_a_kind_tie() {
        check("5H 5S 5C 5D QH", "KH KS KC KD 2H", Outcome::BWins);
        check("5H 5S 5C 5D QH", "5H 5S 5C 5D JH", Outcome::AWins);
    }

    #[test]
    fn straight_flush_tie() {
        check("3S 4S 5S 6S 7S", "2H 3H 4H 5H 6H", Outcome::AWins);
        check("2H 3H 4H 5H 6H", "3S 4S 5S 6S 7S", Outcome::BWins);
    }

    #[test]
    fn royal_flush_tie() {
        check("AS KS QS JS TS", "AH KH QH JH TH", Outcome::Draw);
        check("AS KS QS JS TS", "KH QH JH TH 9H", Outcome::AWins);
    }
}
