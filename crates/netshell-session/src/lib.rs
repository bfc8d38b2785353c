//! netshell Session Layer
//!
//! The [`SessionController`] is the single place where user actions and
//! engine callbacks meet shell state. Engine callbacks may originate on the
//! engine's own threads; they are queued through [`EventQueue`] and applied
//! one at a time on the controller's sequence.

mod controller;
mod event;
mod queue;

pub use controller::SessionController;
pub use event::EngineEvent;
pub use queue::EventQueue;
