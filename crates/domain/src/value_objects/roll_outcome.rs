//! Result of a resolved dice-pool check.

use serde::{Deserialize, Serialize};

use super::roll_expression::RollExpression;
use crate::error::RollError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollOutcome {
    /// Dice pool before it was turned into an expression
    pub dice_pool: i32,
    /// Expression handed to the die evaluator
    pub expression: RollExpression,
    /// Individual faces as reported by the evaluator
    pub faces: Vec<i32>,
    /// Faces at or above the expression's threshold
    pub successes: u32,
}

impl RollOutcome {
    /// Interpret evaluated faces. Fails if any face is off the die.
    pub fn from_faces(
        dice_pool: i32,
        expression: RollExpression,
        faces: Vec<i32>,
    ) -> Result<Self, RollError> {
        let successes = expression.count_successes(&faces)?;
        Ok(Self {
            dice_pool,
            expression,
            faces,
            successes,
        })
    }

    pub fn is_success(&self) -> bool {
        self.successes > 0
    }

    /// Format as a breakdown string (e.g., "3d6cs>=5[2, 5, 6] = 2 successes")
    pub fn breakdown(&self) -> String {
        let faces: Vec<String> = self.faces.iter().map(|f| f.to_string()).collect();
        let noun = if self.successes == 1 {
            "success"
        } else {
            "successes"
        };
        format!(
            "{}[{}] = {} {}",
            self.expression,
            faces.join(", "),
            self.successes,
            noun
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_faces() {
        let expr = RollExpression::for_pool(3).unwrap();
        let outcome = RollOutcome::from_faces(3, expr, vec![2, 5, 6]).unwrap();
        assert_eq!(outcome.successes, 2);
        assert!(outcome.is_success());
        assert_eq!(outcome.breakdown(), "3d6cs>=5[2, 5, 6] = 2 successes");
    }

    #[test]
    fn single_success_wording() {
        let expr = RollExpression::for_pool(2).unwrap();
        let outcome = RollOutcome::from_faces(2, expr, vec![1, 5]).unwrap();
        assert_eq!(outcome.breakdown(), "2d6cs>=5[1, 5] = 1 success");
    }

    #[test]
    fn rejects_bad_face() {
        let expr = RollExpression::for_pool(1).unwrap();
        assert!(matches!(
            RollOutcome::from_faces(1, expr, vec![9]),
            Err(RollError::InvalidFace { face: 9, .. })
        ));
    }
}
