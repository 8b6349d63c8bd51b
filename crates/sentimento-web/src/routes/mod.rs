//! Route handlers.

pub mod client;
pub mod health;
pub mod sentiment;
