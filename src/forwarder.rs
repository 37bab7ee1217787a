use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

/// Outbound boundary to the generation service: given a prompt, returns
/// generated text or fails.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

pub struct PromptForwarder {
    generator: Arc<dyn TextGenerator>,
}

impl PromptForwarder {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Forwards `prompt` to the generation service and returns the generated
    /// text. Any failure is logged once and collapsed into `None`.
    pub async fn forward(&self, prompt: &str) -> Option<String> {
        match self.generator.generate(prompt).await {
            Ok(text) => Some(text),
            Err(err) => {
                error!("error generating content: {:#}", err);
                None
            }
        }
    }
}
