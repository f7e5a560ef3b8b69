#[macro_use]
mod macros;

pub mod cart_client;

pub use cart_client::*;
