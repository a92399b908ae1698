//! Status machines
//!
//! Every status enum lists the statuses it may move to. The tables are
//! permissive today: an admin may move any record to any status, including
//! reverting a terminal one. Tightening a machine means editing its table.

use super::{DomainError, DomainResult};

pub trait Lifecycle: Copy + PartialEq + std::fmt::Debug + 'static {
    /// Statuses reachable from `self`
    fn allowed_next(&self) -> &'static [Self];

    /// Whether no further business step follows this status
    fn is_terminal(&self) -> bool;

    fn label(&self) -> &'static str;

    /// Moving out of a terminal status into a different one
    fn reopens(&self, next: Self) -> bool {
        self.is_terminal() && *self != next
    }

    fn can_transition_to(&self, next: Self) -> bool {
        *self == next || self.allowed_next().contains(&next)
    }

    /// Validate `self -> next`, returning the new status
    fn transition(&self, next: Self) -> DomainResult<Self> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(DomainError::validation(format!(
                "Cannot change status from {} to {}",
                self.label(),
                next.label()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Door {
        Open,
        Closed,
        Welded,
    }

    impl Lifecycle for Door {
        fn allowed_next(&self) -> &'static [Self] {
            match self {
                Door::Open => &[Door::Closed],
                Door::Closed => &[Door::Open, Door::Welded],
                Door::Welded => &[],
            }
        }

        fn is_terminal(&self) -> bool {
            matches!(self, Door::Welded)
        }

        fn label(&self) -> &'static str {
            match self {
                Door::Open => "Open",
                Door::Closed => "Closed",
                Door::Welded => "Welded",
            }
        }
    }

    #[test]
    fn staying_put_is_always_allowed() {
        assert_eq!(Door::Welded.transition(Door::Welded).unwrap(), Door::Welded);
    }

    #[test]
    fn leaving_a_terminal_status_reopens() {
        assert!(Door::Welded.reopens(Door::Open));
        assert!(!Door::Welded.reopens(Door::Welded));
        assert!(!Door::Closed.reopens(Door::Open));
    }

    #[test]
    fn transitions_outside_the_table_are_rejected() {
        let err = Door::Welded.transition(Door::Open).unwrap_err();
        assert_eq!(err.to_string(), "Cannot change status from Welded to Open");
        assert!(Door::Open.transition(Door::Closed).is_ok());
    }
}
