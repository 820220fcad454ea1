//! Классификация покерных рук.
//!
//! Основной тип: `PokerHand`, набор независимых предикатов
//! (`has_pair`, `has_flush`, ...) и сводка `categories` / `best_category`.

pub mod hand_category;
pub mod histogram;
pub mod poker_hand;
pub mod straight;

pub use hand_category::{best_category, categories, describe_category, HandCategory};
pub use histogram::{RankHistogram, SuitHistogram};
pub use poker_hand::PokerHand;
