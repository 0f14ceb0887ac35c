pub mod client;
pub mod error;
pub mod parse;

pub use client::PickupClient;
pub use error::PickupError;
