use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::CardPile;

/// Рука: именованная стопка карт без ограничений на размер и состав.
/// Обычно наполняется через `move_cards` из колоды.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    label: String,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            cards: Vec::new(),
        }
    }

    pub fn from_cards(label: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            label: label.into(),
            cards,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl CardPile for Hand {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
