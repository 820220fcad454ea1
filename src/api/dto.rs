use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::eval::HandCategory;

/// DTO карты: исходные поля плюс готовые строки для вывода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub rank: Rank,
    pub suit: Suit,
    /// `"Ace of Diamonds"`.
    pub name: String,
    /// `"Ad"`.
    pub short: String,
}

/// DTO разобранной руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandReportDto {
    pub label: String,
    pub cards: Vec<CardDto>,
    /// Все выполненные категории, от слабой к сильной.
    pub categories: Vec<HandCategory>,
    pub best: HandCategory,
}

impl From<&Card> for CardDto {
    fn from(card: &Card) -> Self {
        Self {
            rank: card.rank,
            suit: card.suit,
            name: card.to_string(),
            short: card.short(),
        }
    }
}
