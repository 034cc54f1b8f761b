// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Two players game played with a single deck.
use log::debug;
use std::{fmt, str::FromStr};

use crate::{Card, CardError, Hand, Outcome, compare};

/// A game between two hands dealt from the same deck.
#[derive(Debug, Clone, Copy)]
pub struct OneDeckGame {
    hand_1: Hand,
    hand_2: Hand,
}

impl OneDeckGame {
    /// Creates a game for player one and player two hands.
    pub fn new(hand_1: Hand, hand_2: Hand) -> Self {
        Self { hand_1, hand_2 }
    }

    /// Player one hand.
    pub fn hand_1(&self) -> &Hand {
        &self.hand_1
    }

    /// Player two hand.
    pub fn hand_2(&self) -> &Hand {
        &self.hand_2
    }

    /// Compares the hands, [Outcome::AWins] means player one wins.
    pub fn winner(&self) -> Outcome {
        let outcome = compare(&self.hand_1, &self.hand_2);
        debug!("Game {self}: {outcome:?}");
        outcome
    }

    /// Checks if player one has the stronger hand.
    ///
    /// Calls [OneDeckGame::winner], match on its outcome to check more than
    /// one result without classifying the hands again.
    pub fn player_one_wins(&self) -> bool {
        self.winner() == Outcome::AWins
    }

    /// Checks if player two has the stronger hand.
    ///
    /// Calls [OneDeckGame::winner], match on its outcome to check more than
    /// one result without classifying the hands again.
    pub fn player_two_wins(&self) -> bool {
        self.winner() == Outcome::BWins
    }

    /// Checks if the hands have the same strength.
    ///
    /// Calls [OneDeckGame::winner], match on its outcome to check more than
    /// one result without classifying the hands again.
    pub fn is_draw(&self) -> bool {
        self.winner() == Outcome::Draw
    }
}

impl FromStr for OneDeckGame {
    type Err = CardError;

    /// Parses a line of ten cards, the first five cards are player one
    /// hand and the last five are player two hand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;

        let (cards_1, cards_2) = cards.split_at(cards.len().min(Hand::SIZE));
        Ok(Self::new(Hand::new(cards_1)?, Hand::new(cards_2)?))
    }
}

impl fmt::Display for OneDeckGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] vs [{}]", self.hand_1, self.hand_2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(s: &str) -> OneDeckGame {
        s.parse().unwrap()
    }

    #[test]
    fn player_one_has_high_card() {
        let g = game("5D 8C 9S JS AC 2C 5C 7D 8S QH");
        assert_eq!(g.winner(), Outcome::AWins);
        assert!(g.player_one_wins());
        assert!(!g.player_two_wins());
    }

    #[test]
    fn player_two_has_high_pair() {
        let g = game("5H 5C 6S 7S KD 2C 3S 8S 8D TD");
        assert!(g.player_two_wins());
        assert!(!g.player_one_wins());
    }

    #[test]
    fn three_of_a_kind_beats_two_pair() {
        let g = game("2S 2D 2H 3S 4D AS AD KH KS QD");
        assert!(g.player_one_wins());
    }

    #[test]
    fn draw_is_not_a_win() {
        let g = game("AD KC 9S 7S 3C AC KD 9H 7D 3H");
        assert_eq!(g.winner(), Outcome::Draw);
        assert!(g.is_draw());
        assert!(!g.player_one_wins());
        assert!(!g.player_two_wins());
    }

    #[test]
    fn game_to_string() {
        let g = game("TD JD QD KD AS 2C 3S 8S 8D TD");
        assert_eq!(g.to_string(), "[AS KD QD JD TD] vs [TD 8D 8S 3S 2C]");
    }

    #[test]
    fn invalid_game_line() {
        assert_eq!(
            "5D 8C 9S JS AC 2C 5C 7D 8S".parse::<OneDeckGame>().unwrap_err(),
            CardError::InvalidHandSize(4)
        );
        assert_eq!(
            "5D 8C".parse::<OneDeckGame>().unwrap_err(),
            CardError::InvalidHandSize(2)
        );
        assert_eq!(
            "5D 8C 9S JS AC 2C 5C 7D 8S QH KH".parse::<OneDeckGame>().unwrap_err(),
            CardError::InvalidHandSize(6)
        );
        assert_eq!(
            "5D 8C 9S JS AC 2C 5C 7D 8S Q".parse::<OneDeckGame>().unwrap_err(),
            CardError::InvalidCardFormat("Q".to_string())
        );
    }
}
