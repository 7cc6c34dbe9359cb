//! Token and secret models handed to the provider by the embedding application.

pub mod secret;
pub mod token;

pub use secret::*;
pub use token::*;
