use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Размер колоды, из которой раздаём.
pub const DECK_SIZE: usize = 52;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Количество рук должно быть больше нуля")]
    NoHands,

    #[error("Количество карт в руке должно быть больше нуля")]
    NoCards,

    #[error("{hands} рук по {cards_per_hand} карт не помещаются в колоду из 52 карт")]
    TooManyCards { hands: usize, cards_per_hand: usize },
}

/// Параметры раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealConfig {
    pub hands: usize,
    pub cards_per_hand: usize,
    /// `None`: системный RNG, `Some(seed)`: воспроизводимая раздача.
    pub seed: Option<u64>,
}

impl Default for DealConfig {
    /// 5 рук по 7 карт.
    fn default() -> Self {
        Self {
            hands: 5,
            cards_per_hand: 7,
            seed: None,
        }
    }
}

impl DealConfig {
    pub fn new(hands: usize, cards_per_hand: usize) -> Self {
        Self {
            hands,
            cards_per_hand,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn total_cards(&self) -> usize {
        self.hands.saturating_mul(self.cards_per_hand)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hands == 0 {
            return Err(ConfigError::NoHands);
        }
        if self.cards_per_hand == 0 {
            return Err(ConfigError::NoCards);
        }
        if self.total_cards() > DECK_SIZE {
            return Err(ConfigError::TooManyCards {
                hands: self.hands,
                cards_per_hand: self.cards_per_hand,
            });
        }
        Ok(())
    }
}
