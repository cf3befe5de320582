//! Application state and composition.

use std::sync::Arc;

use crate::evaluator::DiceEvaluator;
use crate::infrastructure::{
    clock::{SeededRandom, SystemClock, SystemRandom},
    config::EngineConfig,
    ports::{ChatPort, ClockPort, RandomPort},
};
use crate::use_cases::{RollCheck, SheetFieldUpdate};

/// Main application state.
///
/// Holds the use cases wired to their ports.
pub struct App {
    pub roll: Arc<RollCheck>,
    pub sheet: SheetFieldUpdate,
}

impl App {
    pub fn new(config: &EngineConfig, chat: Arc<dyn ChatPort>) -> Self {
        let random: Arc<dyn RandomPort> = match config.roll_seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded dice");
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(SystemRandom::new()),
        };
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        Self::with_ports(config, chat, clock, random)
    }

    pub fn with_ports(
        config: &EngineConfig,
        chat: Arc<dyn ChatPort>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let evaluator = Arc::new(DiceEvaluator::new(random.clone()));
        let roll = RollCheck::new(evaluator, chat, clock, random)
            .with_speaker_alias(config.speaker.clone());

        Self {
            roll: Arc::new(roll),
            sheet: SheetFieldUpdate::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::chat::JsonLinesChat;
    use hypermall_domain::{AbilityScore, Actor, ActorKind, NpcData, RollRequest};

    fn npc() -> Actor {
        let abilities = [("thinkitude", AbilityScore::new(2).with_skill("Hacking", 2))]
            .into_iter()
            .collect();
        Actor::new("Terminal", ActorKind::Npc(NpcData { abilities }))
    }

    #[tokio::test]
    async fn seeded_apps_roll_identically() {
        let config = EngineConfig {
            roll_seed: Some(7),
            ..Default::default()
        };
        let request = RollRequest::new("thinkitude", "hacking", 2);

        let first = App::new(&config, Arc::new(JsonLinesChat::new(Vec::<u8>::new())))
            .roll
            .execute(&npc(), &request)
            .await
            .unwrap();
        let second = App::new(&config, Arc::new(JsonLinesChat::new(Vec::<u8>::new())))
            .roll
            .execute(&npc(), &request)
            .await
            .unwrap();

        assert_eq!(first.dice_pool, 6);
        assert_eq!(first.faces, second.faces);
        assert_eq!(first.successes, second.successes);
    }
}
