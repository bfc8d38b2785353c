//! Tab data structure

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::TabError;
use crate::state::TabState;
use crate::surface::ContentSurface;
use crate::Result;

pub struct Tab {
    /// Unique identifier, passed through every engine event
    pub id: String,
    /// Last URL this tab navigated to or reported
    pub url: String,
    /// Page title, updated on load completion
    pub title: String,
    /// Current state in the state machine
    pub state: TabState,
    /// When the tab was created
    pub created_at: DateTime<Utc>,
    /// The external rendering collaborator bound to this tab
    surface: Box<dyn ContentSurface>,
}

impl Tab {
    pub fn new(surface: Box<dyn ContentSurface>, url: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            url,
            title: String::new(),
            state: TabState::Created,
            created_at: Utc::now(),
            surface,
        }
    }

    /// Attempt to transition to a new state
    pub fn transition_to(&mut self, new_state: TabState) -> Result<()> {
        if !self.state.can_transition_to(new_state) {
            return Err(TabError::InvalidTransition {
                from: self.state.to_string(),
                to: new_state.to_string(),
            });
        }

        tracing::debug!(
            tab_id = %self.id,
            from = %self.state,
            to = %new_state,
            "Tab state transition"
        );

        self.state = new_state;

        Ok(())
    }

    /// Mark tab as active (user selected it)
    pub fn activate(&mut self) -> Result<()> {
        self.transition_to(TabState::Active)
    }

    /// Move tab to the background
    pub fn deactivate(&mut self) -> Result<()> {
        self.transition_to(TabState::Inactive)
    }

    /// Update page title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Drive the surface to a new URL
    pub fn navigate(&mut self, url: &str) {
        self.url = url.to_string();
        self.title = String::new(); // Reset title until the page loads
        self.surface.navigate(url);
    }

    pub fn surface(&self) -> &dyn ContentSurface {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> &mut dyn ContentSurface {
        self.surface.as_mut()
    }

    /// Get display title (with fallback to URL)
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullSurface {
        url: String,
    }

    impl ContentSurface for NullSurface {
        fn navigate(&mut self, url: &str) {
            self.url = url.to_string();
        }
        fn back(&mut self) {}
        fn forward(&mut self) {}
        fn reload(&mut self) {}
        fn current_url(&self) -> String {
            self.url.clone()
        }
        fn title(&self) -> String {
            String::new()
        }
    }

    fn new_tab(url: &str) -> Tab {
        Tab::new(Box::new(NullSurface { url: String::new() }), url.to_string())
    }

    #[test]
    fn test_new_tab() {
        let tab = new_tab("https://example.com");
        assert_eq!(tab.state, TabState::Created);
        assert_eq!(tab.url, "https://example.com");
        assert!(tab.title.is_empty());
    }

    #[test]
    fn test_navigate_resets_title() {
        let mut tab = new_tab("https://example.com");
        tab.set_title("Example".to_string());

        tab.navigate("https://other.example");
        assert_eq!(tab.url, "https://other.example");
        assert!(tab.title.is_empty());
        assert_eq!(tab.surface().current_url(), "https://other.example");
    }

    #[test]
    fn test_display_title_falls_back_to_url() {
        let mut tab = new_tab("https://example.com");
        assert_eq!(tab.display_title(), "https://example.com");

        tab.set_title("Example".to_string());
        assert_eq!(tab.display_title(), "Example");
    }

    #[test]
    fn test_closed_is_terminal() {
        let mut tab = new_tab("https://example.com");
        tab.activate().unwrap();
        tab.transition_to(TabState::Closed).unwrap();

        assert!(tab.activate().is_err());
    }
}
