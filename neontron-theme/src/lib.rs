#![warn(missing_docs)]

//! # NeonTron Theming
//!
//! The theming core of the NeonTron showcase. This crate knows nothing
//! about windows or rendering; it owns the static theme description and
//! the machinery that pushes resolved style values onto live widgets.
//!
//! The crate is built around a few small pieces:
//!
//! - **[spec::ThemeSpec]**: the immutable mapping from widget type to
//!   style attributes, with per-mode color variants.
//! - **[mode::Mode]**: the light/dark appearance variant.
//! - **[manager::ThemeManager]**: owns the spec and the current mode and
//!   applies resolved values to registered widgets, best-effort.
//! - **[registry::WidgetRegistry]**: an arena of registered widget
//!   handles, re-styled in insertion order on every mode change.
//! - **[widget::Configurable]**: the capability every themeable widget
//!   exposes to the applier.
//!
//! ## Quick start
//!
//! ```
//! use neontron_theme::id::WidgetId;
//! use neontron_theme::manager::ThemeManager;
//! use neontron_theme::mode::Mode;
//! use neontron_theme::spec::ThemeSpec;
//!
//! let manager = ThemeManager::new(ThemeSpec::neon_tron(), Mode::Dark);
//! let style = manager.spec().of(&WidgetId::neontron("Button"));
//! assert!(style.is_some());
//! ```
//!
//! Styles for widget types without a spec entry simply resolve to
//! [None]; the applier treats that as a no-op, not an error.

/// Contains the [config::ThemeConfig] struct for environment-driven setup.
pub mod config;
/// Contains the error types of the theming system.
pub mod error;
/// Contains the [id::WidgetId] struct.
pub mod id;
/// Contains theme file loading from TOML and JSON.
pub mod loader;
/// Contains the [manager::ThemeManager].
pub mod manager;
/// Contains the [mode::Mode] appearance variant.
pub mod mode;
/// Contains the [palette::NeonPalette] color tables.
pub mod palette;
/// Contains type-safe style property keys.
pub mod properties;
/// Contains the [registry::WidgetRegistry] widget arena.
pub mod registry;
/// Contains hex color parsing and formatting helpers.
pub mod serde_color;
/// Contains the [spec::ThemeSpec] store and the built-in theme.
pub mod spec;
/// Contains styling values and per-widget style maps.
pub mod style;
/// Contains the [widget::Configurable] capability trait.
pub mod widget;
