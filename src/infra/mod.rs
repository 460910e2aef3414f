//! Инфраструктура вокруг анализатора: RNG-реализации для выборки примеров.

pub mod rng;

pub use rng::*;
