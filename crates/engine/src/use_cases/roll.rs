//! Roll check use case.
//!
//! The flow is:
//! 1. Resolve the dice pool from the actor's abilities
//! 2. Build the roll expression for that pool
//! 3. Evaluate it into faces
//! 4. Count successes
//! 5. Post the result to chat

use std::sync::Arc;

use thiserror::Error;

use hypermall_domain::{
    build_roll_expression, Ability, Actor, RollError, RollId, RollOutcome, RollRequest,
};

use crate::evaluator::DiceEvaluator;
use crate::infrastructure::ports::{ChatError, ChatPort, ClockPort, RandomPort, RollMessage, Speaker};

#[derive(Debug, Error)]
pub enum RollCheckError {
    #[error(transparent)]
    Roll(#[from] RollError),
    #[error("Failed to post roll: {0}")]
    Chat(#[from] ChatError),
}

pub struct RollCheck {
    evaluator: Arc<DiceEvaluator>,
    chat: Arc<dyn ChatPort>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
    speaker_alias: Option<String>,
}

impl RollCheck {
    pub fn new(
        evaluator: Arc<DiceEvaluator>,
        chat: Arc<dyn ChatPort>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            evaluator,
            chat,
            clock,
            random,
            speaker_alias: None,
        }
    }

    /// Post every roll under this alias instead of the actor's name.
    pub fn with_speaker_alias(mut self, alias: Option<String>) -> Self {
        self.speaker_alias = alias;
        self
    }

    pub async fn execute(
        &self,
        actor: &Actor,
        request: &RollRequest,
    ) -> Result<RollOutcome, RollCheckError> {
        let pool = actor.dice_pool(request).inspect_err(|e| {
            tracing::warn!(actor = %actor.name, error = %e, "Rejected roll request");
        })?;
        let dice_pool = pool.total();
        tracing::debug!(
            actor = %actor.name,
            stat = pool.stat_value,
            skill = pool.skill_value,
            passions = pool.passions_modifier,
            dice_pool,
            "Resolved dice pool"
        );

        let expression = build_roll_expression(dice_pool)?;
        let evaluation = self.evaluator.evaluate(&expression.to_string())?;
        let outcome = RollOutcome::from_faces(dice_pool, evaluation.expression, evaluation.faces)?;

        let message = RollMessage {
            id: RollId::from_uuid(self.random.gen_uuid()),
            speaker: Speaker {
                actor_id: actor.id,
                alias: self
                    .speaker_alias
                    .clone()
                    .unwrap_or_else(|| actor.name.clone()),
            },
            flavor: flavor(actor, request),
            dice_pool,
            expression: outcome.expression.to_string(),
            faces: outcome.faces.clone(),
            successes: outcome.successes,
            timestamp: self.clock.now(),
        };
        self.chat.post_roll(&message).await?;

        tracing::info!(
            actor = %actor.name,
            roll_id = %message.id,
            breakdown = %outcome.breakdown(),
            success = outcome.is_success(),
            "Roll check complete"
        );
        Ok(outcome)
    }
}

/// Chat flavor line such as "Physick + Fast Talk (+1 passions)".
fn flavor(actor: &Actor, request: &RollRequest) -> String {
    let stat = Ability::lookup(&request.stat_key)
        .map(|a| a.display_name().to_string())
        .unwrap_or_else(|| request.stat_key.clone());
    let skill = actor
        .abilities()
        .iter()
        .find_map(|(_, ability)| ability.skill(&request.skill_key))
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| request.skill_key.clone());

    match request.passions_modifier {
        0 => format!("{} + {}", stat, skill),
        m if m > 0 => format!("{} + {} (+{} passions)", stat, skill, m),
        m => format!("{} + {} ({} passions)", stat, skill, m),
    }
}
