use crate::error::ThemeError;
use crate::theme::{MemoryEnvironment, ThemeEnvironment};

/// Environment whose surfaces can be made to fail one at a time. Calls that
/// are not failing pass through to the inner in-memory environment, which the
/// test keeps a clone of for inspection.
#[derive(Clone, Debug, Default)]
pub struct FlakyEnvironment {
    pub inner: MemoryEnvironment,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub fail_marker: bool,
}

impl ThemeEnvironment for FlakyEnvironment {
    fn read_saved(&self) -> Result<Option<String>, ThemeError> {
        if self.fail_reads {
            return Err(ThemeError::Storage("storage offline".to_string()));
        }
        self.inner.read_saved()
    }

    fn write_saved(&self, value: &str) -> Result<(), ThemeError> {
        if self.fail_writes {
            return Err(ThemeError::Storage("storage offline".to_string()));
        }
        self.inner.write_saved(value)
    }

    fn apply_marker(&self, dark: bool) -> Result<(), ThemeError> {
        if self.fail_marker {
            return Err(ThemeError::Document("document root missing".to_string()));
        }
        self.inner.apply_marker(dark)
    }
}
