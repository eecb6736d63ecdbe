use std::collections::VecDeque;
use std::sync::Mutex;

use recap_core::errors::{CompletionError, RecapResult};
use recap_core::traits::ICompletionProvider;

/// One call made to a [`ScriptedCompletion`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub system_instruction: String,
    pub temperature: f32,
}

type Responder = Box<dyn Fn(&str) -> RecapResult<String> + Send + Sync>;

/// Completion fake answering from a script, then from a fallback responder.
///
/// Scripted answers are consumed in order; `None` entries fail the call.
pub struct ScriptedCompletion {
    script: Mutex<VecDeque<Option<String>>>,
    fallback: Responder,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedCompletion {
    /// Answers every prompt with `summary of: <first 40 chars>`.
    pub fn echo() -> Self {
        Self::with_responder(|prompt| {
            let head: String = prompt.chars().take(40).collect();
            Ok(format!("summary of: {head}"))
        })
    }

    /// Answers every prompt with the same text.
    pub fn constant(answer: impl Into<String>) -> Self {
        let answer = answer.into();
        Self::with_responder(move |_| Ok(answer.clone()))
    }

    /// Fails every call.
    pub fn failing() -> Self {
        Self::with_responder(|_| {
            Err(CompletionError::RequestFailed {
                reason: "scripted failure".to_string(),
            }
            .into())
        })
    }

    pub fn with_responder(
        responder: impl Fn(&str) -> RecapResult<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue answers consumed before the fallback; `None` means "fail this call".
    pub fn then(self, answers: impl IntoIterator<Item = Option<&'static str>>) -> Self {
        {
            let mut script = self.script.lock().unwrap_or_else(|e| e.into_inner());
            script.extend(answers.into_iter().map(|a| a.map(str::to_string)));
        }
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl ICompletionProvider for ScriptedCompletion {
    fn complete(
        &self,
        prompt: &str,
        system_instruction: &str,
        temperature: f32,
    ) -> RecapResult<String> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedCall {
                prompt: prompt.to_string(),
                system_instruction: system_instruction.to_string(),
                temperature,
            });

        let scripted = self
            .script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        match scripted {
            Some(Some(answer)) => Ok(answer),
            Some(None) => Err(CompletionError::EmptyResponse.into()),
            None => (self.fallback)(prompt),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
