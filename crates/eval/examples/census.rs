// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example census
// ...
// Total hands      2598960
// Elapsed:         0.412s
// Hands/sec:       6308155
//
// HighCard:        1303560
// Pair:            1098240
// TwoPair:         123552
// ThreeOfAKind:    54912
// Straight:        9180
// Flush:           5112
// FullHouse:       3744
// FourOfAKind:     624
// StraightFlush:   32
// RoyalFlush:      4
// ```
use anyhow::Result;
use std::time::Instant;

use fivecard_eval::*;

fn main() -> Result<()> {
    // Classify all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; WinCategory::COUNT];

    let mut result = Ok(());
    Deck::default().for_each(5, |cards| match Hand::new(cards) {
        Ok(hand) => counts[classify(&hand).category() as usize] += 1,
        Err(e) => result = Err(e),
    });
    result?;

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in WinCategory::categories() {
        let name = format!("{category}:");
        println!("{name:<17}{}", counts[category as usize]);
    }

    Ok(())
}
