//! Tests for termination conditions.

use std::time::Duration;

use super::*;

#[test]
fn test_step_count_termination() {
    let mut scope = SearchScope::new();
    let term = StepCountTermination::new(3);

    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    scope.increment_step_count();
    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_time_termination() {
    let scope = SearchScope::new();
    assert!(!TimeTermination::seconds(60).is_terminated(&scope));
    assert!(TimeTermination::new(Duration::ZERO).is_terminated(&scope));

    std::thread::sleep(Duration::from_millis(20));
    assert!(TimeTermination::millis(10).is_terminated(&scope));
}

#[test]
fn test_or_termination_any() {
    let mut scope = SearchScope::new();
    let term = OrTermination((TimeTermination::seconds(60), StepCountTermination::new(2)));

    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    scope.increment_step_count();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_termination_single() {
    let scope = SearchScope::new();
    let term = OrTermination::new((StepCountTermination::new(0),));
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_time_limit_reported() {
    assert_eq!(
        TimeTermination::millis(250).time_limit(),
        Some(Duration::from_millis(250))
    );
    assert_eq!(StepCountTermination::new(5).time_limit(), None);

    let term = OrTermination((
        TimeTermination::seconds(60),
        StepCountTermination::new(5),
        TimeTermination::millis(10),
    ));
    assert_eq!(term.time_limit(), Some(Duration::from_millis(10)));
    assert_eq!((&term).time_limit(), Some(Duration::from_millis(10)));
}
