//! Visual-mode state: one boolean flag per session, restored from persisted
//! storage at startup and mirrored back to storage and the document on every
//! change.

mod environment;
mod provider;
mod store;

#[cfg(not(target_arch = "wasm32"))]
pub use environment::{process_environment, MemoryEnvironment};
#[cfg(target_arch = "wasm32")]
pub use environment::WebEnvironment;
pub use environment::{session_environment, ThemeEnvironment};
pub use provider::{use_theme, ThemeHandle, ThemeProvider};
pub use store::{ThemeState, ThemeStore, STORAGE_KEY};
