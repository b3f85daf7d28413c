//! The light/dark appearance variant.

use std::fmt::{Display, Formatter};

/// The appearance variant currently active.
///
/// Mode-dependent style entries carry one value per variant; everything
/// else ignores the mode entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Light appearance.
    Light,
    /// Dark appearance.
    Dark,
}

impl Mode {
    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark variant.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Parse a mode name as used in configuration (`light` / `dark`).
    pub fn from_str(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl Default for Mode {
    // The showcase starts dark, matching the built-in theme's accent.
    fn default() -> Self {
        Self::Dark
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Mode::Light.toggled().toggled(), Mode::Light);
        assert_eq!(Mode::Dark.toggled().toggled(), Mode::Dark);
    }

    #[test]
    fn parses_config_names() {
        assert_eq!(Mode::from_str("light"), Some(Mode::Light));
        assert_eq!(Mode::from_str(" DARK "), Some(Mode::Dark));
        assert_eq!(Mode::from_str("midnight"), None);
    }
}
