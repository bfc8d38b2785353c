//! netshell Navigation
//!
//! Address bar input resolution:
//! 1. Input starting with `http` → navigate directly
//! 2. Anything else → search via the configured template

mod input;

pub use input::{resolve, InputResolution, QUERY_PLACEHOLDER};
