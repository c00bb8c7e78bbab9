use crate::domain::model::ChatMessage;
use crate::domain::ports::{Assistant, Storage};
use crate::utils::error::{AssistError, Result};

pub const DEFAULT_GREETING: &str = "Hello! I'm your AI Physiotherapy Assistant. Please describe your symptoms or area of concern, and I'll suggest appropriate exercises for you.";

/// One conversation: the greeting followed by user/bot turns in arrival order.
pub struct ChatSession<A: Assistant> {
    assistant: A,
    greeting: String,
    transcript: Vec<ChatMessage>,
}

impl<A: Assistant> ChatSession<A> {
    pub fn new(assistant: A, greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        let transcript = vec![ChatMessage::bot(greeting.clone())];
        Self {
            assistant,
            greeting,
            transcript,
        }
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Blank input is rejected and leaves the transcript untouched.
    /// The user message is recorded before the reply is awaited.
    pub async fn submit(&mut self, input: &str) -> Result<ChatMessage> {
        if input.trim().is_empty() {
            return Err(AssistError::EmptyInput);
        }

        self.transcript.push(ChatMessage::user(input));
        let reply = self.assistant.respond(input).await?;
        self.transcript.push(reply.clone());

        tracing::debug!("Transcript now holds {} messages", self.transcript.len());
        Ok(reply)
    }

    pub fn clear(&mut self) {
        self.transcript.clear();
        self.transcript.push(ChatMessage::bot(self.greeting.clone()));
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.transcript)?)
    }

    pub async fn save_transcript<S: Storage>(&self, storage: &S, path: &str) -> Result<()> {
        let json = self.to_json()?;
        storage.write_file(path, json.as_bytes()).await?;
        tracing::info!("💾 Transcript with {} messages saved to {}", self.transcript.len(), path);
        Ok(())
    }
}
