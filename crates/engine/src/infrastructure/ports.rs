//! Port traits for everything the roll flow does not compute itself:
//! time, randomness and the chat log that displays results.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use hypermall_domain::{ActorId, RollId};

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform integer in `min..=max`.
    fn gen_range(&self, min: i32, max: i32) -> i32;
    fn gen_uuid(&self) -> Uuid;
}

// =============================================================================
// Chat Port
// =============================================================================

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Chat sink unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to encode chat message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Who a chat message is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub actor_id: ActorId,
    pub alias: String,
}

/// A resolved check as posted to the chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollMessage {
    pub id: RollId,
    pub speaker: Speaker,
    /// Short description of what was rolled, e.g. "Physick + Fast Talk"
    pub flavor: String,
    pub dice_pool: i32,
    pub expression: String,
    pub faces: Vec<i32>,
    pub successes: u32,
    pub timestamp: DateTime<Utc>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatPort: Send + Sync {
    async fn post_roll(&self, message: &RollMessage) -> Result<(), ChatError>;
}
