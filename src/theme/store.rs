use crate::theme::environment::ThemeEnvironment;

pub const STORAGE_KEY: &str = "theme";

const DARK_VALUE: &str = "dark";
const LIGHT_VALUE: &str = "light";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    // Anything but the exact string "dark", including no record at all,
    // means light mode.
    pub fn from_saved(saved: Option<&str>) -> Self {
        Self {
            is_dark: saved == Some(DARK_VALUE),
        }
    }

    pub fn storage_value(self) -> &'static str {
        if self.is_dark {
            DARK_VALUE
        } else {
            LIGHT_VALUE
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            is_dark: !self.is_dark,
        }
    }
}

/// Session store for the visual mode; the provider creates one at startup
/// and every consumer shares it.
pub struct ThemeStore {
    state: ThemeState,
    environment: Box<dyn ThemeEnvironment>,
}

impl ThemeStore {
    pub fn initialize(environment: Box<dyn ThemeEnvironment>) -> Self {
        // A failed read falls back to light; startup never blocks on storage.
        let state = match environment.read_saved() {
            Ok(saved) => ThemeState::from_saved(saved.as_deref()),
            Err(error) => {
                log::warn!("could not read saved theme, defaulting to light: {}", error);
                ThemeState::default()
            }
        };
        log::debug!("theme initialized, dark mode: {}", state.is_dark);

        let store = Self { state, environment };
        store.synchronize();
        store
    }

    pub fn is_dark(&self) -> bool {
        self.state.is_dark
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
        self.synchronize();
    }

    // Best effort on both surfaces: log and move on, no retry, no rollback.
    fn synchronize(&self) {
        if let Err(error) = self.environment.write_saved(self.state.storage_value()) {
            log::warn!("failed to persist theme {:?}: {}", self.state.storage_value(), error);
        }
        if let Err(error) = self.environment.apply_marker(self.state.is_dark) {
            log::warn!("failed to update visual-mode marker: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_means_light() {
        assert!(!ThemeState::from_saved(None).is_dark);
    }

    #[test]
    fn saved_dark_means_dark() {
        assert!(ThemeState::from_saved(Some("dark")).is_dark);
    }

    #[test]
    fn comparison_is_exact() {
        // The persisted contract is the literal lowercase string.
        assert!(!ThemeState::from_saved(Some("Dark")).is_dark);
        assert!(!ThemeState::from_saved(Some("light")).is_dark);
        assert!(!ThemeState::from_saved(Some("solarized")).is_dark);
        assert!(!ThemeState::from_saved(Some("")).is_dark);
    }

    #[test]
    fn storage_value_round_trips() {
        let dark = ThemeState { is_dark: true };
        let light = ThemeState { is_dark: false };
        assert_eq!(dark.storage_value(), "dark");
        assert_eq!(light.storage_value(), "light");
        assert_eq!(ThemeState::from_saved(Some(dark.storage_value())), dark);
        assert_eq!(ThemeState::from_saved(Some(light.storage_value())), light);
    }

    #[test]
    fn toggled_flips_both_ways() {
        let light = ThemeState::default();
        assert!(light.toggled().is_dark);
        assert!(!light.toggled().toggled().is_dark);
    }
}
