use thiserror::Error;

use crate::domain::DeckError;
use crate::infra::ConfigError;

/// Ошибки раздачи.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DealError {
    #[error("Неверная конфигурация: {0}")]
    Config(#[from] ConfigError),

    #[error("Ошибка колоды: {0}")]
    Deck(#[from] DeckError),
}
