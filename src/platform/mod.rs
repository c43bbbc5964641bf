//! Process-level services: logging setup and frame pacing.

mod desktop;
pub use desktop::*;
