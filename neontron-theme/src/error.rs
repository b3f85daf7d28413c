//! Error types for the theming system.
//!
//! Two families exist and they never mix: [ThemeError] covers theme
//! loading and configuration, which only runs at startup and is surfaced
//! to the user once; [ConfigureError] covers a single widget rejecting a
//! single style attribute, which the applier recovers from locally.

use std::path::PathBuf;
use thiserror::Error;

use crate::properties::StyleProperty;

/// Errors that can occur while loading or resolving a theme.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme file was not found.
    #[error("theme file not found: {path:?}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Theme file could not be parsed.
    #[error("failed to parse theme file {path:?}: {details}")]
    ParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Theme file extension maps to no known format.
    #[error("unsupported theme file format: {path:?} (expected .toml or .json)")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// Theme file names a widget type the showcase does not know.
    #[error("unknown widget type '{name}' in theme file")]
    UnknownWidget {
        /// The unrecognized widget table name.
        name: String,
    },

    /// Theme file names a style property the showcase does not know.
    #[error("unknown style property '{name}' for widget '{widget}'")]
    UnknownProperty {
        /// The widget table the property appeared in.
        widget: String,
        /// The unrecognized property key.
        name: String,
    },

    /// A color value could not be parsed.
    #[error("invalid color value '{value}'")]
    InvalidColor {
        /// The offending color string.
        value: String,
    },

    /// An attribute value has a shape the theme model cannot represent.
    #[error("invalid value for '{property}' in widget '{widget}': {details}")]
    InvalidValue {
        /// The widget table the value appeared in.
        widget: String,
        /// The property carrying the value.
        property: String,
        /// What was wrong with it.
        details: String,
    },

    /// The configured mode name is not `light` or `dark`.
    #[error("invalid appearance mode '{value}' (expected 'light' or 'dark')")]
    InvalidMode {
        /// The offending mode string.
        value: String,
    },

    /// Generic I/O error.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

/// A widget instance rejecting one configured style attribute.
///
/// Style maps are shared per widget *type*, so a map may list attributes
/// not valid for every instance; the applier treats these as expected
/// outcomes and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigureError {
    /// The widget does not support the property at all.
    #[error("property '{property}' is not supported by this widget")]
    UnsupportedProperty {
        /// The rejected property.
        property: StyleProperty,
    },

    /// The widget supports the property but not the value's type.
    #[error("value for '{property}' has the wrong type for this widget")]
    InvalidValue {
        /// The property whose value was rejected.
        property: StyleProperty,
    },
}
