//! Tab Manager
//!
//! Owns the ordered tab collection and the focus invariant: exactly one
//! active tab whenever the collection is non-empty, and never zero tabs
//! once the first one is open.

use crate::error::TabError;
use crate::state::TabState;
use crate::surface::SurfaceFactory;
use crate::tab::Tab;
use crate::Result;

pub struct TabManager {
    /// Tabs in display order
    tabs: Vec<Tab>,
    /// Creates a content surface for each new tab
    surfaces: Box<dyn SurfaceFactory>,
}

impl TabManager {
    pub fn new(surfaces: Box<dyn SurfaceFactory>) -> Self {
        Self {
            tabs: Vec::new(),
            surfaces,
        }
    }

    /// Open a new tab bound to a fresh content surface, make it active and
    /// navigate it to `url`. Returns the new tab's id.
    pub fn open_tab(&mut self, url: &str) -> String {
        let surface = self.surfaces.create_surface();
        let mut tab = Tab::new(surface, url.to_string());
        tab.navigate(url);

        let id = tab.id.clone();
        self.tabs.push(tab);

        // The fresh tab takes focus; infallible since Created -> Active holds.
        if let Err(err) = self.activate(&id) {
            tracing::error!(tab_id = %id, error = %err, "Failed to activate new tab");
        }

        tracing::info!(tab_id = %id, url = %url, "Opened new tab");
        self.check_invariants();

        id
    }

    /// Close a tab. Refused with [`TabError::LastTab`] when only one tab
    /// remains; the collection never drops to zero. When the active tab is
    /// removed, the previous neighbor (or the next, at index zero) takes over.
    pub fn close_tab(&mut self, id: &str) -> Result<()> {
        if self.tabs.len() < 2 {
            return Err(TabError::LastTab);
        }

        let index = self
            .index_of(id)
            .ok_or_else(|| TabError::NotFound(id.to_string()))?;

        let mut tab = self.tabs.remove(index);
        let was_active = tab.state.is_active();
        tab.transition_to(TabState::Closed)?;

        if was_active {
            // Previous index if there is one, else the tab now at index zero
            let neighbor = index.saturating_sub(1);
            let neighbor_id = self.tabs[neighbor].id.clone();
            self.activate(&neighbor_id)?;
        }

        tracing::info!(tab_id = %id, "Closed tab");
        self.check_invariants();

        Ok(())
    }

    /// Mark one tab active and all others inactive.
    pub fn activate(&mut self, id: &str) -> Result<()> {
        if self.index_of(id).is_none() {
            return Err(TabError::NotFound(id.to_string()));
        }

        for tab in &mut self.tabs {
            if tab.id == id {
                tab.activate()?;
            } else if tab.state.is_active() || tab.state == TabState::Created {
                tab.deactivate()?;
            }
        }

        self.check_invariants();

        Ok(())
    }

    /// Update a tab's display title. A stale id is a silent no-op: a close
    /// can race a delayed load-completion signal.
    pub fn set_title(&mut self, id: &str, title: String) {
        if let Some(tab) = self.get_mut(id) {
            tab.set_title(title);
        }
    }

    /// Track a URL change reported by the engine. Stale ids are ignored.
    pub fn set_url(&mut self, id: &str, url: String) {
        if let Some(tab) = self.get_mut(id) {
            tab.url = url;
        }
    }

    /// Pull the surface's reported title into the tab, returning the new
    /// title. `None` when the tab no longer exists.
    pub fn refresh_title(&mut self, id: &str) -> Option<String> {
        let tab = self.get_mut(id)?;
        let title = tab.surface().title();
        tab.set_title(title.clone());
        Some(title)
    }

    /// Navigate the active tab.
    pub fn navigate_active(&mut self, url: &str) {
        if let Some(tab) = self.active_mut() {
            tab.navigate(url);
        }
    }

    pub fn back(&mut self) {
        if let Some(tab) = self.active_mut() {
            tab.surface_mut().back();
        }
    }

    pub fn forward(&mut self) {
        if let Some(tab) = self.active_mut() {
            tab.surface_mut().forward();
        }
    }

    pub fn reload(&mut self) {
        if let Some(tab) = self.active_mut() {
            tab.surface_mut().reload();
        }
    }

    pub fn active(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.state.is_active())
    }

    pub fn active_mut(&mut self) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.state.is_active())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().is_some_and(|t| t.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Standing invariant, checked at every mutation boundary.
    fn check_invariants(&self) {
        debug_assert!(
            self.tabs.is_empty()
                || self.tabs.iter().filter(|t| t.state.is_active()).count() == 1,
            "tab collection must hold exactly one active tab"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::ContentSurface;

    struct FakeSurface {
        url: String,
    }

    impl ContentSurface for FakeSurface {
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
            format!("title of {}", self.url)
        }
    }

    struct FakeFactory;

    impl SurfaceFactory for FakeFactory {
        fn create_surface(&mut self) -> Box<dyn ContentSurface> {
            Box::new(FakeSurface { url: String::new() })
        }
    }

    fn manager() -> TabManager {
        TabManager::new(Box::new(FakeFactory))
    }

    fn active_count(manager: &TabManager) -> usize {
        manager.iter().filter(|t| t.state.is_active()).count()
    }

    #[test]
    fn test_open_tab_takes_focus() {
        let mut tabs = manager();

        let first = tabs.open_tab("https://a.example");
        let second = tabs.open_tab("https://b.example");

        assert_eq!(tabs.len(), 2);
        assert_eq!(active_count(&tabs), 1);
        assert!(tabs.is_active(&second));
        assert!(!tabs.is_active(&first));
    }

    #[test]
    fn test_close_last_tab_refused() {
        let mut tabs = manager();
        let only = tabs.open_tab("https://a.example");

        assert!(matches!(tabs.close_tab(&only), Err(TabError::LastTab)));
        assert_eq!(tabs.len(), 1);
        assert!(tabs.is_active(&only));
    }

    #[test]
    fn test_close_active_promotes_neighbor() {
        let mut tabs = manager();
        let first = tabs.open_tab("https://a.example");
        let second = tabs.open_tab("https://b.example");
        let third = tabs.open_tab("https://c.example");

        // Closing the active tail tab promotes the previous one
        tabs.close_tab(&third).unwrap();
        assert!(tabs.is_active(&second));

        tabs.activate(&first).unwrap();
        tabs.close_tab(&first).unwrap();
        assert!(tabs.is_active(&second));
        assert_eq!(active_count(&tabs), 1);
    }

    #[test]
    fn test_close_active_middle_promotes_previous() {
        let mut tabs = manager();
        let first = tabs.open_tab("https://a.example");
        let second = tabs.open_tab("https://b.example");
        let third = tabs.open_tab("https://c.example");

        tabs.activate(&second).unwrap();
        tabs.close_tab(&second).unwrap();

        assert!(tabs.is_active(&first));
        assert!(!tabs.is_active(&third));
        assert_eq!(active_count(&tabs), 1);
    }

    #[test]
    fn test_close_active_head_promotes_next() {
        let mut tabs = manager();
        let first = tabs.open_tab("https://a.example");
        let second = tabs.open_tab("https://b.example");

        tabs.activate(&first).unwrap();
        tabs.close_tab(&first).unwrap();

        assert!(tabs.is_active(&second));
    }

    #[test]
    fn test_close_inactive_keeps_focus() {
        let mut tabs = manager();
        let first = tabs.open_tab("https://a.example");
        let second = tabs.open_tab("https://b.example");

        tabs.close_tab(&first).unwrap();
        assert!(tabs.is_active(&second));
    }

    #[test]
    fn test_never_empty_under_any_sequence() {
        let mut tabs = manager();
        let mut ids = vec![tabs.open_tab("https://a.example")];

        for i in 0..5 {
            ids.push(tabs.open_tab(&format!("https://t{i}.example")));
        }
        for id in ids {
            let _ = tabs.close_tab(&id);
        }

        assert_eq!(tabs.len(), 1);
        assert_eq!(active_count(&tabs), 1);
    }

    #[test]
    fn test_stale_title_update_is_noop() {
        let mut tabs = manager();
        tabs.open_tab("https://a.example");

        // Simulates a load-finished signal racing a close
        tabs.set_title("gone", "Late Title".to_string());
        assert_eq!(tabs.len(), 1);
    }

    #[test]
    fn test_refresh_title_pulls_from_surface() {
        let mut tabs = manager();
        let id = tabs.open_tab("https://a.example");

        let title = tabs.refresh_title(&id).unwrap();
        assert_eq!(title, "title of https://a.example");
        assert_eq!(tabs.get(&id).unwrap().title, title);

        assert!(tabs.refresh_title("gone").is_none());
    }

    #[test]
    fn test_activate_unknown_tab_errors() {
        let mut tabs = manager();
        tabs.open_tab("https://a.example");

        assert!(matches!(tabs.activate("gone"), Err(TabError::NotFound(_))));
    }
}
