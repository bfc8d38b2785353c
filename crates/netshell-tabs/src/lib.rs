//! netshell Tab Management
//!
//! The tab collection is never empty once populated and exactly one tab is
//! active at any time. Rendering is delegated to an external content surface
//! behind the [`ContentSurface`] trait; tabs only track identity and focus.

mod error;
mod manager;
mod state;
mod surface;
mod tab;

pub use error::TabError;
pub use manager::TabManager;
pub use state::TabState;
pub use surface::{ContentSurface, SurfaceFactory};
pub use tab::Tab;

pub type Result<T> = std::result::Result<T, TabError>;
