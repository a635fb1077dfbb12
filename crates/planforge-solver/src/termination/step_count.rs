//! Step count termination.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates after a step count (expansions or rollouts).
///
/// # Example
///
/// ```
/// use planforge_solver::termination::StepCountTermination;
///
/// // Terminate after 1000 rollouts
/// let term = StepCountTermination::new(1000);
/// ```
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for StepCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.step_count() >= self.limit
    }
}
