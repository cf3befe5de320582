//! Chat sinks.

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::infrastructure::ports::{ChatError, ChatPort, RollMessage};

/// Posts roll messages to the tracing log only.
#[derive(Debug, Default)]
pub struct LogChat;

#[async_trait]
impl ChatPort for LogChat {
    async fn post_roll(&self, message: &RollMessage) -> Result<(), ChatError> {
        tracing::info!(
            roll_id = %message.id,
            speaker = %message.speaker.alias,
            expression = %message.expression,
            successes = message.successes,
            "{}",
            message.flavor
        );
        Ok(())
    }
}

/// Writes each roll message as one JSON line.
pub struct JsonLinesChat<W> {
    writer: Mutex<W>,
}

impl<W> JsonLinesChat<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W> ChatPort for JsonLinesChat<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn post_roll(&self, message: &RollMessage) -> Result<(), ChatError> {
        let mut line = serde_json::to_vec(message)?;
        line.push(b'\n');

        let mut writer = self.writer.lock().await;
        writer
            .write_all(&line)
            .await
            .map_err(|e| ChatError::Unavailable(e.to_string()))?;
        writer
            .flush()
            .await
            .map_err(|e| ChatError::Unavailable(e.to_string()))
    }
}
