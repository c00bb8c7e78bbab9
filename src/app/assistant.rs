use crate::core::formatter::format_reply;
use crate::domain::model::ChatMessage;
use crate::domain::ports::{Assistant, Classifier};
use crate::utils::error::{AssistError, Result};
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Canned-reply assistant: waits the artificial "thinking" delay, then
/// answers with the bucket picked by the classifier.
pub struct PhysioAssistant<C: Classifier> {
    classifier: C,
    reply_delay: Duration,
}

impl<C: Classifier> PhysioAssistant<C> {
    pub fn new(classifier: C, reply_delay: Duration) -> Self {
        Self {
            classifier,
            reply_delay,
        }
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }
}

#[async_trait]
impl<C: Classifier> Assistant for PhysioAssistant<C> {
    async fn respond(&self, input: &str) -> Result<ChatMessage> {
        if input.trim().is_empty() {
            return Err(AssistError::EmptyInput);
        }

        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }

        let result = self.classifier.classify(input);
        tracing::info!(
            "🩺 Recommending {} exercises from the {} bucket",
            result.exercises.len(),
            result.region
        );

        Ok(ChatMessage::bot(format_reply(&result)))
    }
}
