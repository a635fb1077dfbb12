//! Termination conditions for search engines.

mod composite;
mod step_count;
mod time;

use std::fmt::Debug;
use std::time::Duration;

use crate::scope::SearchScope;

pub use composite::OrTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop searching.
pub trait Termination: Debug {
    /// Returns true if searching should terminate.
    fn is_terminated(&self, scope: &SearchScope) -> bool;

    /// Wall-clock limit this condition enforces, if any.
    fn time_limit(&self) -> Option<Duration> {
        None
    }
}

impl<T: Termination + ?Sized> Termination for &T {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        (**self).is_terminated(scope)
    }

    fn time_limit(&self) -> Option<Duration> {
        (**self).time_limit()
    }
}

#[cfg(test)]
mod tests;
