use thiserror::Error;

use crate::domain::card::Card;

/// Ошибки операций над колодой / рукой.
///
/// `CardNotFound`, `IndexOutOfBounds` и `Empty`: семейство "карты нет",
/// `InsufficientCards`: попытка переложить больше карт, чем осталось.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("Карта {0} не найдена")]
    CardNotFound(Card),

    #[error("Индекс {index} вне колоды из {len} карт")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Колода пуста")]
    Empty,

    #[error("Недостаточно карт: запрошено {requested}, осталось {available}")]
    InsufficientCards { requested: usize, available: usize },
}

/// Ошибки разбора короткой записи карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("Строка карты должна быть длиной 2: {0:?}")]
    BadLength(String),

    #[error("Неверный ранг: {0}")]
    BadRank(char),

    #[error("Неверная масть: {0}")]
    BadSuit(char),

    #[error("Ранг {0} вне диапазона 1..=13")]
    RankOutOfRange(u8),
}
