use crate::error::ThemeError;

#[cfg(not(target_arch = "wasm32"))]
use std::sync::{Arc, Mutex};

/// Side-effect surface the store synchronizes against: one persisted record
/// and one document-wide visual-mode marker.
pub trait ThemeEnvironment {
    fn read_saved(&self) -> Result<Option<String>, ThemeError>;
    fn write_saved(&self, value: &str) -> Result<(), ThemeError>;
    fn apply_marker(&self, dark: bool) -> Result<(), ThemeError>;
}

// Every dark: rule in the stylesheet keys off this class on the root element.
#[cfg(target_arch = "wasm32")]
pub const DARK_CLASS: &str = "dark";

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct WebEnvironment;

#[cfg(target_arch = "wasm32")]
impl WebEnvironment {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<web_sys::Storage, ThemeError> {
        let window = web_sys::window()
            .ok_or_else(|| ThemeError::Storage("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(|error| ThemeError::Storage(format!("{:?}", error)))?
            .ok_or_else(|| ThemeError::Storage("local storage unavailable".to_string()))
    }

    fn document_root(&self) -> Result<web_sys::Element, ThemeError> {
        let window = web_sys::window()
            .ok_or_else(|| ThemeError::Document("no window object".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| ThemeError::Document("no document object".to_string()))?;
        document
            .document_element()
            .ok_or_else(|| ThemeError::Document("document has no root element".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl ThemeEnvironment for WebEnvironment {
    fn read_saved(&self) -> Result<Option<String>, ThemeError> {
        self.storage()?
            .get_item(super::store::STORAGE_KEY)
            .map_err(|error| ThemeError::Storage(format!("{:?}", error)))
    }

    fn write_saved(&self, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(super::store::STORAGE_KEY, value)
            .map_err(|error| ThemeError::Storage(format!("{:?}", error)))
    }

    fn apply_marker(&self, dark: bool) -> Result<(), ThemeError> {
        let classes = self.document_root()?.class_list();
        let result = if dark {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        result.map_err(|error| ThemeError::Document(format!("{:?}", error)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
struct MemoryState {
    saved: Option<String>,
    marker: bool,
}

// In-process stand-in for the browser storage and document marker. Clones
// share state, so tests can keep a handle after boxing one for a store.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct MemoryEnvironment {
    state: Arc<Mutex<MemoryState>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved(value: &str) -> Self {
        let environment = Self::new();
        if let Ok(mut state) = environment.state.lock() {
            state.saved = Some(value.to_string());
        }
        environment
    }

    pub fn saved_value(&self) -> Option<String> {
        self.state.lock().ok().and_then(|state| state.saved.clone())
    }

    pub fn marker_applied(&self) -> bool {
        self.state.lock().map(|state| state.marker).unwrap_or(false)
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, ThemeError> {
        self.state
            .lock()
            .map_err(|error| ThemeError::Storage(error.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ThemeEnvironment for MemoryEnvironment {
    fn read_saved(&self) -> Result<Option<String>, ThemeError> {
        Ok(self.locked()?.saved.clone())
    }

    fn write_saved(&self, value: &str) -> Result<(), ThemeError> {
        self.locked()?.saved = Some(value.to_string());
        Ok(())
    }

    fn apply_marker(&self, dark: bool) -> Result<(), ThemeError> {
        self.locked()?.marker = dark;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
lazy_static::lazy_static! {
    static ref PROCESS_ENVIRONMENT: MemoryEnvironment = MemoryEnvironment::new();
}

// Plays the role of localStorage when there is no browser: outlives any one
// provider, so the theme holds for the rest of the process.
#[cfg(not(target_arch = "wasm32"))]
pub fn process_environment() -> MemoryEnvironment {
    PROCESS_ENVIRONMENT.clone()
}

#[cfg(target_arch = "wasm32")]
pub fn session_environment() -> Box<dyn ThemeEnvironment> {
    Box::new(WebEnvironment::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn session_environment() -> Box<dyn ThemeEnvironment> {
    Box::new(process_environment())
}
