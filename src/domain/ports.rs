use crate::domain::model::{ChatMessage, ClassificationResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Maps free text to exactly one recommendation bucket. Must be pure.
pub trait Classifier: Send + Sync {
    fn classify(&self, input: &str) -> ClassificationResult;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn reply_delay(&self) -> Duration;
    fn greeting(&self) -> &str;
    fn transcript_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Assistant: Send + Sync {
    async fn respond(&self, input: &str) -> Result<ChatMessage>;
}
