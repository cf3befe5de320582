//! Hypermall Engine library.
//!
//! ## Structure
//!
//! - `evaluator` - Turns roll expressions into die faces
//! - `use_cases/` - Roll checks and sheet field updates
//! - `infrastructure/` - Ports and their adapters (clock, random, chat, config, actor files)
//! - `app` - Application composition

pub mod app;
pub mod evaluator;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
