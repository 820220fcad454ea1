//! Колода из 52 карт и классификация покерных рук.
//!
//! Поток: `Deck` перемешивается, карты пачками перекладываются в
//! `PokerHand`, у каждой руки спрашиваем категории (`has_pair`, `has_flush`, ...).

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{Card, CardPile, Deck, DeckError, Hand, Rank, Suit};
pub use eval::{HandCategory, PokerHand};
