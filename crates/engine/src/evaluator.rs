//! Die evaluation.
//!
//! The evaluator is the only place that turns a roll expression into faces.
//! It accepts the expression as text, exactly as it would cross a process
//! boundary, so a malformed expression fails here rather than being trusted.

use std::sync::Arc;

use hypermall_domain::{RollError, RollExpression};

use crate::infrastructure::ports::RandomPort;

/// Faces rolled for one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub expression: RollExpression,
    pub faces: Vec<i32>,
}

pub struct DiceEvaluator {
    random: Arc<dyn RandomPort>,
}

impl DiceEvaluator {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    pub fn evaluate(&self, expression: &str) -> Result<Evaluation, RollError> {
        let expression = RollExpression::parse(expression)?;
        let max = i32::from(expression.die_faces);
        let faces = (0..expression.dice_count)
            .map(|_| self.random.gen_range(1, max))
            .collect();
        Ok(Evaluation { expression, faces })
    }
}
