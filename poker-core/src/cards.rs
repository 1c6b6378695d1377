pub mod best;
pub mod card;
pub mod deck;
pub mod hand;
pub mod hole;

pub use best::NCardHand;
pub use card::Card;
pub use deck::Deck;
pub use hand::{FiveCardHand, HandClass};
pub use hole::HoleCards;
