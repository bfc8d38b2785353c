//! Content surface collaborator
//!
//! The external rendering engine owns loading, display and page execution.
//! The shell only drives navigation and reads back the current URL and title.

/// A rendering-engine-backed view hosting one navigable resource.
pub trait ContentSurface {
    fn navigate(&mut self, url: &str);
    fn back(&mut self);
    fn forward(&mut self);
    fn reload(&mut self);
    fn current_url(&self) -> String;
    fn title(&self) -> String;
}

/// Creates a fresh content surface for each new tab.
pub trait SurfaceFactory {
    fn create_surface(&mut self) -> Box<dyn ContentSurface>;
}
