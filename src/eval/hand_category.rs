use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

use super::poker_hand;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    /// Все категории, кроме HighCard, по возрастанию силы.
    pub const MADE_HANDS: [HandCategory; 8] = [
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    /// Выполняется ли категория для набора карт.
    /// HighCard выполняется всегда.
    pub fn matches(self, cards: &[Card]) -> bool {
        match self {
            HandCategory::HighCard => true,
            HandCategory::OnePair => poker_hand::has_pair(cards),
            HandCategory::TwoPair => poker_hand::has_two_pair(cards),
            HandCategory::ThreeOfAKind => poker_hand::has_three_of_a_kind(cards),
            HandCategory::Straight => poker_hand::has_straight(cards),
            HandCategory::Flush => poker_hand::has_flush(cards),
            HandCategory::FullHouse => poker_hand::has_full_house(cards),
            HandCategory::FourOfAKind => poker_hand::has_four_of_a_kind(cards),
            HandCategory::StraightFlush => poker_hand::has_straight_flush(cards),
        }
    }
}

/// Все выполненные категории (без HighCard), от слабой к сильной.
pub fn categories(cards: &[Card]) -> Vec<HandCategory> {
    let found: Vec<HandCategory> = HandCategory::MADE_HANDS
        .into_iter()
        .filter(|cat| cat.matches(cards))
        .collect();
    log::trace!("{} cards -> {:?}", cards.len(), found);
    found
}

/// Сильнейшая выполненная категория; HighCard, если ничего нет.
///
/// Описывает одну руку, руки между собой не сравнивает.
pub fn best_category(cards: &[Card]) -> HandCategory {
    HandCategory::MADE_HANDS
        .into_iter()
        .rev()
        .find(|cat| cat.matches(cards))
        .unwrap_or(HandCategory::HighCard)
}

/// Человеческое описание категории.
pub fn describe_category(category: HandCategory) -> &'static str {
    match category {
        HandCategory::HighCard => "High card",
        HandCategory::OnePair => "One pair",
        HandCategory::TwoPair => "Two pair",
        HandCategory::ThreeOfAKind => "Three of a kind",
        HandCategory::Straight => "Straight",
        HandCategory::Flush => "Flush",
        HandCategory::FullHouse => "Full house",
        HandCategory::FourOfAKind => "Four of a kind",
        HandCategory::StraightFlush => "Straight flush",
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(describe_category(*self))
    }
}
