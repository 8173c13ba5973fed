//! Confirmation capability for destructive actions
//!
//! The unregister flow asks a synchronous yes/no question before issuing
//! any network request. The capability is injected so embedders can wire a
//! real prompt and tests can substitute a deterministic answer.

/// A blocking yes/no decision.
pub trait ConfirmPrompt: Send + Sync {
    /// Present `prompt` and return whether the user accepted.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Default capability that accepts every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ConfirmPrompt for AcceptAll {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
