//! Value objects - Immutable objects defined by their attributes

mod dice_pool;
mod roll_data;
mod roll_expression;
mod roll_outcome;
mod threshold;

pub use dice_pool::{resolve_dice_pool, resolve_pool, DicePool, RollRequest};
pub use roll_data::RollData;
pub use roll_expression::{
    build_roll_expression, count_successes, RollExpression, DIE_FACES, MAX_DICE_POOL,
    SUCCESS_THRESHOLD,
};
pub use roll_outcome::RollOutcome;
pub use threshold::{
    clamp_to_range, parse_numeric_field, sanitize_attribute, ResourceTracker,
};
