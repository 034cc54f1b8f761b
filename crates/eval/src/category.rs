// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories detection.
//!
//! A five cards hand belongs to exactly one [WinCategory]. The criteria are
//! not exclusive on their own (a straight flush is also a straight and a
//! flush), so [classify] tests them from the strongest category down to
//! [WinCategory::HighCard] and stops at the first match.
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, Hand, Rank};

/// Hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WinCategory {
    /// No other category matches.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards with consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

impl WinCategory {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// Detection order, strongest first.
    const DETECTION_ORDER: [WinCategory; WinCategory::COUNT] = {
        use WinCategory::*;
        [
            RoyalFlush,
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            Pair,
            HighCard,
        ]
    };

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = WinCategory> {
        Self::DETECTION_ORDER.into_iter().rev()
    }

    /// Checks this category criterion on its own.
    ///
    /// The criteria of weaker categories do not exclude stronger patterns,
    /// a full house also matches [WinCategory::Pair], use [classify] to get
    /// the category of a hand.
    pub fn matches(&self, cards: &[Card]) -> bool {
        self.criterion(cards, &RankCounts::new(cards))
    }

    fn criterion(&self, cards: &[Card], counts: &RankCounts) -> bool {
        match self {
            WinCategory::RoyalFlush => {
                WinCategory::StraightFlush.criterion(cards, counts)
                    && cards.iter().max().is_some_and(|c| c.rank() == Rank::Ace)
            }
            WinCategory::StraightFlush => is_straight(cards) && is_flush(cards),
            WinCategory::FourOfAKind => counts.count_with(4) > 0,
            WinCategory::FullHouse => {
                WinCategory::Pair.criterion(cards, counts)
                    && WinCategory::ThreeOfAKind.criterion(cards, counts)
            }
            WinCategory::Flush => is_flush(cards),
            WinCategory::Straight => is_straight(cards),
            WinCategory::ThreeOfAKind => counts.count_with(3) > 0,
            WinCategory::TwoPair => counts.count_with(2) == 2,
            WinCategory::Pair => counts.count_with(2) == 1,
            WinCategory::HighCard => true,
        }
    }

    /// The ranks used to break ties between hands of this category.
    fn values(&self, hand: &Hand, counts: &RankCounts) -> Vec<Rank> {
        match self {
            WinCategory::HighCard => hand.ranks().collect(),
            WinCategory::Pair | WinCategory::TwoPair => counts.ranks_with(2).collect(),
            WinCategory::ThreeOfAKind => counts.ranks_with(3).collect(),
            WinCategory::FullHouse => counts.ranks_with(3).chain(counts.ranks_with(2)).collect(),
            WinCategory::FourOfAKind => counts.ranks_with(4).collect(),
            WinCategory::Straight
            | WinCategory::Flush
            | WinCategory::StraightFlush
            | WinCategory::RoyalFlush => Vec::new(),
        }
    }
}

impl fmt::Display for WinCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WinCategory::HighCard => "HighCard",
            WinCategory::Pair => "Pair",
            WinCategory::TwoPair => "TwoPair",
            WinCategory::ThreeOfAKind => "ThreeOfAKind",
            WinCategory::Straight => "Straight",
            WinCategory::Flush => "Flush",
            WinCategory::FullHouse => "FullHouse",
            WinCategory::FourOfAKind => "FourOfAKind",
            WinCategory::StraightFlush => "StraightFlush",
            WinCategory::RoyalFlush => "RoyalFlush",
        };

        f.write_str(name)
    }
}

/// The category of a hand with the ranks that break ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryResult<'a> {
    category: WinCategory,
    values: Vec<Rank>,
    hand: &'a Hand,
}

impl<'a> CategoryResult<'a> {
    /// The hand category.
    pub fn category(&self) -> WinCategory {
        self.category
    }

    /// The category ranks used to break ties.
    ///
    /// - high card: all ranks, highest first.
    /// - pair, three and four of a kind: the rank of the matching cards.
    /// - two pair: the pairs ranks, lowest first.
    /// - full house: the three of a kind rank then the pair rank.
    /// - straights and flushes: empty, ties are broken on the hand cards.
    pub fn values(&self) -> &[Rank] {
        &self.values
    }

    /// The classified hand.
    pub fn hand(&self) -> &'a Hand {
        self.hand
    }
}

impl fmt::Display for CategoryResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (high, low) = (self.hand.highest(), self.hand.lowest());

        write!(f, "{} (", self.category)?;
        match self.category {
            WinCategory::HighCard => write!(f, "{high}")?,
            WinCategory::Straight => write!(f, "{}-{}", low.rank(), high.rank())?,
            WinCategory::StraightFlush => {
                write!(f, "{}-{}{}", low.rank(), high.rank(), high.suit())?
            }
            WinCategory::Flush | WinCategory::RoyalFlush => write!(f, "{}", high.suit())?,
            _ => {
                for (idx, rank) in self.values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{rank}")?;
                }
            }
        }
        f.write_str(")")
    }
}

/// Classifies a hand.
pub fn classify(hand: &Hand) -> CategoryResult<'_> {
    let cards = hand.cards();
    let counts = RankCounts::new(cards);

    let category = WinCategory::DETECTION_ORDER
        .into_iter()
        .find(|c| c.criterion(cards, &counts))
        .unwrap_or(WinCategory::HighCard);

    let result = CategoryResult {
        category,
        values: category.values(hand, &counts),
        hand,
    };

    trace!("Classified {hand} as {result}");
    result
}

/// Number of cards for each rank.
struct RankCounts([u8; Rank::COUNT]);

impl RankCounts {
    fn new(cards: &[Card]) -> Self {
        let mut counts = [0; Rank::COUNT];
        for card in cards {
            counts[card.rank() as usize] += 1;
        }
        Self(counts)
    }

    /// Ranks that appear exactly `n` times, lowest first.
    fn ranks_with(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(move |(_, count)| **count == n)
            .filter_map(|(idx, _)| Rank::from_index(idx))
    }

    /// Number of ranks that appear exactly `n` times.
    fn count_with(&self, n: u8) -> usize {
        self.0.iter().filter(|&&count| count == n).count()
    }
}

fn is_flush(cards: &[Card]) -> bool {
    cards
        .split_first()
        .is_some_and(|(first, rest)| rest.iter().all(|c| c.suit() == first.suit()))
}

/// Five distinct ranks in a row, the ace only counts high.
fn is_straight(cards: &[Card]) -> bool {
    if cards.len() != Hand::SIZE {
        return false;
    }

    let mask = cards.iter().fold(0u16, |mask, c| mask | c.rank_mask());
    mask.count_ones() as usize == Hand::SIZE && mask >> mask.trailing_zeros() == 0b11111
}
