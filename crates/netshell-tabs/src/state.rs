//! Tab state machine
//!
//! ```text
//! Created
//!   ↓ first activation
//! Active ⇄ Inactive
//!   ↓ close
//! Closed
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabState {
    /// Tab exists but has not been focused yet
    Created,
    /// Tab is the one currently shown; its navigation drives the address bar
    Active,
    /// Tab is open in the background
    Inactive,
    /// Tab is being torn down
    Closed,
}

impl TabState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: TabState) -> bool {
        match (self, target) {
            // A fresh tab gets focused or parked in the background
            (TabState::Created, TabState::Active) => true,
            (TabState::Created, TabState::Inactive) => true,
            // Focus moves freely between open tabs
            (TabState::Active, TabState::Inactive) => true,
            (TabState::Inactive, TabState::Active) => true,
            // Any open tab can be closed
            (TabState::Active, TabState::Closed) => true,
            (TabState::Inactive, TabState::Closed) => true,
            // Same state is always valid (no-op)
            (a, b) if *a == b => true,
            // Closed is terminal; nothing else is reachable
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TabState::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabState::Created => "created",
            TabState::Active => "active",
            TabState::Inactive => "inactive",
            TabState::Closed => "closed",
        }
    }
}

impl std::fmt::Display for TabState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert!(TabState::Created.can_transition_to(TabState::Active));
        assert!(TabState::Active.can_transition_to(TabState::Inactive));
        assert!(TabState::Inactive.can_transition_to(TabState::Active));
        assert!(TabState::Active.can_transition_to(TabState::Closed));
        assert!(TabState::Inactive.can_transition_to(TabState::Closed));
    }

    #[test]
    fn test_invalid_transitions() {
        // Closed is terminal
        assert!(!TabState::Closed.can_transition_to(TabState::Active));
        assert!(!TabState::Closed.can_transition_to(TabState::Inactive));
        // No way back to Created
        assert!(!TabState::Active.can_transition_to(TabState::Created));
    }
}
