use super::counter::TokenCounter;

/// Outcome of checking a projected request against the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetCheck {
    /// Tokens the request would use.
    pub projected: usize,
    pub budget: usize,
}

impl BudgetCheck {
    pub fn fits(&self) -> bool {
        self.projected <= self.budget
    }
}

/// Token budget accounting over a shared counter.
pub struct TokenBudget<'a> {
    counter: &'a TokenCounter,
    budget: usize,
}

impl<'a> TokenBudget<'a> {
    pub fn new(counter: &'a TokenCounter, budget: usize) -> Self {
        Self { counter, budget }
    }

    /// Project the cost of sending all `parts` and compare it to the budget.
    /// Each part is counted separately, matching how the parts are billed.
    pub fn check(&self, parts: &[&str]) -> BudgetCheck {
        let projected = parts.iter().map(|p| self.counter.count_cached(p)).sum();
        BudgetCheck {
            projected,
            budget: self.budget,
        }
    }
}
