//! Infrastructure - adapters for time, randomness, chat and actor files

pub mod actor_store;
pub mod chat;
pub mod clock;
pub mod config;
pub mod ports;
