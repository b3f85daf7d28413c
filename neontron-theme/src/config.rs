//! # Theme Configuration
//!
//! Environment-driven setup for the showcase, resolved once at startup:
//!
//! - `NEONTRON_MODE` — `light` or `dark`; the startup appearance mode.
//! - `NEONTRON_THEME` — path to a theme file replacing the built-in
//!   NeonTron spec.
//!
//! Programmatic settings take precedence over the environment, and the
//! built-in theme in dark mode is the fallback when nothing is set.

use std::path::PathBuf;

use crate::error::{ThemeError, ThemeResult};
use crate::loader::ThemeLoader;
use crate::mode::Mode;
use crate::spec::ThemeSpec;

/// Environment variable selecting the startup appearance mode.
pub const ENV_MODE: &str = "NEONTRON_MODE";
/// Environment variable pointing at a theme file.
pub const ENV_THEME: &str = "NEONTRON_THEME";

/// Startup theme configuration.
#[derive(Debug, Clone, Default)]
pub struct ThemeConfig {
    mode: Option<Mode>,
    theme_path: Option<PathBuf>,
}

impl ThemeConfig {
    /// Create an empty configuration (built-in theme, default mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the configuration from the environment.
    ///
    /// An unset variable is simply absent; a set-but-invalid mode is a
    /// hard error so typos do not silently fall back.
    pub fn from_env() -> ThemeResult<Self> {
        let mut config = Self::new();

        if let Ok(value) = std::env::var(ENV_MODE) {
            config.mode = Some(
                Mode::from_str(&value).ok_or(ThemeError::InvalidMode { value })?,
            );
        }
        if let Ok(value) = std::env::var(ENV_THEME) {
            config.theme_path = Some(PathBuf::from(value));
        }

        Ok(config)
    }

    /// Force a startup mode, overriding the environment.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Force a theme file, overriding the environment.
    pub fn with_theme_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.theme_path = Some(path.into());
        self
    }

    /// Resolve the configured theme spec and startup mode.
    pub fn resolve(&self) -> ThemeResult<(ThemeSpec, Mode)> {
        let spec = match &self.theme_path {
            Some(path) => ThemeLoader::load_from_file(path)?,
            None => {
                log::info!("using built-in NeonTron theme");
                ThemeSpec::neon_tron()
            }
        };
        Ok((spec, self.mode.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::WidgetId;

    #[test]
    fn defaults_to_builtin_theme_in_dark_mode() {
        let (spec, mode) = ThemeConfig::new().resolve().unwrap();
        assert_eq!(mode, Mode::Dark);
        assert!(spec.of(&WidgetId::neontron("Button")).is_some());
    }

    #[test]
    fn programmatic_settings_win() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.toml");
        std::fs::write(&path, "[Button]\ncorner_radius = 2\n").unwrap();

        let (spec, mode) = ThemeConfig::new()
            .with_mode(Mode::Light)
            .with_theme_file(&path)
            .resolve()
            .unwrap();
        assert_eq!(mode, Mode::Light);
        assert_eq!(spec.len(), 1);
    }

    /// Scoped env var override; restores the previous value on drop so
    /// parallel tests never observe leftover state.
    struct EnvGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let previous = std::env::var(key).ok();
            std::env::set_var(key, value);
            Self { key, previous }
        }

        fn unset(key: &'static str) -> Self {
            let previous = std::env::var(key).ok();
            std::env::remove_var(key);
            Self { key, previous }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match self.previous.take() {
                Some(value) => std::env::set_var(self.key, value),
                None => std::env::remove_var(self.key),
            }
        }
    }

    #[test]
    fn environment_is_read_and_validated() {
        // One test owns both variables so the overrides never race.
        let _theme = EnvGuard::unset(ENV_THEME);

        let mode = EnvGuard::set(ENV_MODE, "light");
        let config = ThemeConfig::from_env().unwrap();
        assert_eq!(config.resolve().unwrap().1, Mode::Light);
        drop(mode);

        let _mode = EnvGuard::set(ENV_MODE, "solarized");
        assert!(matches!(
            ThemeConfig::from_env().unwrap_err(),
            ThemeError::InvalidMode { .. }
        ));
    }
}
