//! Roll expressions for success-counting dice pools.
//!
//! Grammar (case-insensitive, surrounding whitespace ignored):
//!
//! ```text
//! expression := count "d" faces "cs>=" threshold
//! count      := digit+        ; 1 to MAX_DICE_POOL
//! faces      := digit+        ; at least 2
//! threshold  := digit+        ; between 1 and faces
//! ```
//!
//! `6d6cs>=5` reads "roll six six-sided dice, count a success for every face
//! of 5 or more". Anything after the threshold is rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RollError;

/// Faces on a Hypermall die.
pub const DIE_FACES: u8 = 6;

/// Lowest face that counts as a success.
pub const SUCCESS_THRESHOLD: u8 = 5;

/// Largest pool a single check may roll.
pub const MAX_DICE_POOL: u32 = 100;

/// A parsed "count successes" roll like `4d6cs>=5`.
///
/// Serialized as its expression text; deserializing goes through [`parse`].
///
/// [`parse`]: RollExpression::parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RollExpression {
    /// Number of dice to roll
    pub dice_count: u32,
    /// Size of each die
    pub die_faces: u8,
    /// Faces at or above this value are successes
    pub threshold: u8,
}

impl RollExpression {
    /// Standard Hypermall check: `dice_pool` d6, successes on 5+.
    ///
    /// Pools below one die or above [`MAX_DICE_POOL`] cannot be rolled.
    pub fn for_pool(dice_pool: i32) -> Result<Self, RollError> {
        let dice_count = u32::try_from(dice_pool)
            .ok()
            .filter(|n| (1..=MAX_DICE_POOL).contains(n))
            .ok_or_else(|| {
                RollError::malformed(format!(
                    "dice pool must be between 1 and {}, got {}",
                    MAX_DICE_POOL, dice_pool
                ))
            })?;
        Ok(Self {
            dice_count,
            die_faces: DIE_FACES,
            threshold: SUCCESS_THRESHOLD,
        })
    }

    pub fn parse(input: &str) -> Result<Self, RollError> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(RollError::malformed("empty expression"));
        }

        let (count_str, rest) = input
            .split_once('d')
            .ok_or_else(|| RollError::malformed(format!("missing 'd' in '{}'", input)))?;
        let (faces_str, threshold_str) = rest
            .split_once("cs>=")
            .ok_or_else(|| RollError::malformed(format!("missing 'cs>=' in '{}'", input)))?;

        let dice_count: u32 = parse_digits(count_str, "dice count")?;
        let die_faces: u8 = parse_digits(faces_str, "die size")?;
        let threshold: u8 = parse_digits(threshold_str, "success threshold")?;

        if dice_count == 0 || dice_count > MAX_DICE_POOL {
            return Err(RollError::malformed(format!(
                "dice count {} outside 1..={}",
                dice_count, MAX_DICE_POOL
            )));
        }
        if die_faces < 2 {
            return Err(RollError::malformed("die size must be at least 2"));
        }
        if threshold == 0 || threshold > die_faces {
            return Err(RollError::malformed(format!(
                "success threshold {} outside 1..={}",
                threshold, die_faces
            )));
        }

        Ok(Self {
            dice_count,
            die_faces,
            threshold,
        })
    }

    /// Count faces at or above the threshold, validating each face.
    pub fn count_successes(&self, faces: &[i32]) -> Result<u32, RollError> {
        let mut successes = 0;
        for &face in faces {
            if face < 1 || face > i32::from(self.die_faces) {
                return Err(RollError::InvalidFace {
                    face,
                    faces: self.die_faces,
                });
            }
            if face >= i32::from(self.threshold) {
                successes += 1;
            }
        }
        Ok(successes)
    }
}

impl fmt::Display for RollExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d{}cs>={}",
            self.dice_count, self.die_faces, self.threshold
        )
    }
}

impl FromStr for RollExpression {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RollExpression {
    type Error = RollError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RollExpression> for String {
    fn from(expression: RollExpression) -> Self {
        expression.to_string()
    }
}

fn parse_digits<T: FromStr>(s: &str, what: &str) -> Result<T, RollError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RollError::malformed(format!("invalid {}: '{}'", what, s)));
    }
    s.parse()
        .map_err(|_| RollError::malformed(format!("{} out of range: '{}'", what, s)))
}

/// Build the roll expression for a resolved dice pool.
pub fn build_roll_expression(dice_pool: i32) -> Result<RollExpression, RollError> {
    RollExpression::for_pool(dice_pool)
}

/// Count successes on Hypermall d6 faces.
pub fn count_successes(faces: &[i32]) -> Result<u32, RollError> {
    let standard = RollExpression {
        dice_count: 1,
        die_faces: DIE_FACES,
        threshold: SUCCESS_THRESHOLD,
    };
    standard.count_successes(faces)
}
