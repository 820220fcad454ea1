//! Инфраструктура вокруг домена:
//! - RNG-реализации;
//! - конфигурация раздачи.

pub mod config;
pub mod rng;

pub use config::*;
pub use rng::*;
