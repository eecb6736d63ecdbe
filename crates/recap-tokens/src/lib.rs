//! # recap-tokens
//!
//! Token counting that matches the completion model's tokenizer, so budget
//! cutoffs line up with what the provider will actually bill and truncate.
//! Caches results per content hash; running context is re-counted every scene.

pub mod budget;
pub mod counter;

pub use budget::{BudgetCheck, TokenBudget};
pub use counter::TokenCounter;
