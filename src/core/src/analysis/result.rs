use crate::catalog::Player;
use crate::squad::BUDGET_CEILING;

/// Spend across every filled slot, starters and bench alike. `remaining`
/// goes negative when over the ceiling; it is never clamped, the caller
/// decides how to flag it.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total_spent: f32,
    pub remaining: f32,
}

impl BudgetSummary {
    pub fn new(total_spent: f32) -> Self {
        BudgetSummary {
            total_spent,
            remaining: BUDGET_CEILING - total_spent,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Captain pick and weakest link among the resolved starting XI.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptainReport {
    pub captain: Player,
    pub weakest: Player,
}
