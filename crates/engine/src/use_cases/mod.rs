//! Use cases - the operations the front end drives

pub mod roll;
pub mod sheet;

pub use roll::{RollCheck, RollCheckError};
pub use sheet::{SheetError, SheetField, SheetFieldUpdate};
