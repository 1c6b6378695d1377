pub mod cards;
pub mod histogram;
pub mod showdown;
pub mod util;

pub use cards::{best, card, deck, hand, hole};
