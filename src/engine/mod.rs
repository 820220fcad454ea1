//! Раздача: перемешивание колоды и раскладка карт по рукам.

pub mod dealer;
pub mod errors;

pub use dealer::{deal, deal_with_rng};
pub use errors::DealError;
