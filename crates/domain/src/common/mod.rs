//! Common utilities shared across the domain.
//!
//! Pure functions and small containers only - no side effects, no I/O.

pub mod keyed;
pub mod string;

pub use keyed::KeyedMap;
pub use string::{none_if_blank, normalize_key};
