use crate::errors::RecapResult;

/// Text completion capability (chat-style model behind a narrow interface).
pub trait ICompletionProvider: Send + Sync {
    /// Complete `prompt` under `system_instruction`. Fails with a
    /// `CompletionError` on provider failure.
    fn complete(
        &self,
        prompt: &str,
        system_instruction: &str,
        temperature: f32,
    ) -> RecapResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
