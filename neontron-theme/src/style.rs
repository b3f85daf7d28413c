//! # Style Values and Maps
//!
//! This module provides the value side of the theming system:
//!
//! - **[StyleVal]**: a single scalar style value (color, number, flag).
//! - **[StyleEntry]**: the tagged union stored in a theme spec; either a
//!   mode-independent scalar or a `(light, dark)` pair.
//! - **[Style]**: the insertion-ordered attribute map of one widget type.
//!
//! A `ModePair` always holds exactly one value per mode; resolution picks
//! the matching side:
//!
//! ```
//! use neontron_theme::mode::Mode;
//! use neontron_theme::style::{StyleEntry, StyleVal};
//! use peniko::Color;
//!
//! let entry = StyleEntry::color_pair(Color::WHITE, Color::BLACK);
//! assert_eq!(entry.resolve(Mode::Light), &StyleVal::Color(Color::WHITE));
//! assert_eq!(entry.resolve(Mode::Dark), &StyleVal::Color(Color::BLACK));
//! ```

use indexmap::IndexMap;
use peniko::Color;

use crate::mode::Mode;
use crate::properties::StyleProperty;

/// A single style value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleVal {
    /// A color style value.
    Color(Color),
    /// A float style value.
    Float(f32),
    /// An int style value.
    Int(i32),
    /// An unsigned int style value.
    UInt(u32),
    /// A bool style value.
    Bool(bool),
}

impl StyleVal {
    /// Get the value as a color, if it is one.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Get the value as a dimension in pixels.
    ///
    /// Numeric variants coerce; colors and flags do not.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f32),
            Self::UInt(v) => Some(*v as f32),
            _ => None,
        }
    }

    /// Get the value as a bool, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

/// A style attribute entry: either mode-independent or a light/dark pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleEntry {
    /// A single value used in both modes.
    Scalar(StyleVal),
    /// One value per appearance mode.
    ModePair {
        /// The value used in [Mode::Light].
        light: StyleVal,
        /// The value used in [Mode::Dark].
        dark: StyleVal,
    },
}

impl StyleEntry {
    /// Shorthand for a scalar color entry.
    pub fn color(color: Color) -> Self {
        Self::Scalar(StyleVal::Color(color))
    }

    /// Shorthand for a light/dark color pair.
    pub fn color_pair(light: Color, dark: Color) -> Self {
        Self::ModePair {
            light: StyleVal::Color(light),
            dark: StyleVal::Color(dark),
        }
    }

    /// Shorthand for a scalar unsigned dimension entry.
    pub fn uint(value: u32) -> Self {
        Self::Scalar(StyleVal::UInt(value))
    }

    /// Resolve the effective value for the given mode.
    pub fn resolve(&self, mode: Mode) -> &StyleVal {
        match self {
            Self::Scalar(value) => value,
            Self::ModePair { light, dark } => match mode {
                Mode::Light => light,
                Mode::Dark => dark,
            },
        }
    }
}

/// Styling map describing one widget type's appearance.
///
/// Uses an [IndexMap] so attributes are applied in definition order,
/// which keeps theme application deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    map: IndexMap<StyleProperty, StyleEntry>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self {
            map: IndexMap::with_capacity(8),
        }
    }

    /// Insert an entry, builder-style.
    pub fn with(mut self, property: StyleProperty, entry: StyleEntry) -> Self {
        self.map.insert(property, entry);
        self
    }

    /// Set an entry by property key.
    pub fn set(&mut self, property: StyleProperty, entry: StyleEntry) {
        self.map.insert(property, entry);
    }

    /// Get an entry by property key.
    pub fn get(&self, property: StyleProperty) -> Option<&StyleEntry> {
        self.map.get(&property)
    }

    /// Whether the style defines the given property.
    pub fn has(&self, property: StyleProperty) -> bool {
        self.map.contains_key(&property)
    }

    /// Iterate entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &StyleEntry)> {
        self.map.iter().map(|(property, entry)| (*property, entry))
    }

    /// Number of defined attributes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the style defines no attributes at all.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_resolves_identically_in_both_modes() {
        let entry = StyleEntry::uint(6);
        assert_eq!(entry.resolve(Mode::Light), &StyleVal::UInt(6));
        assert_eq!(entry.resolve(Mode::Dark), &StyleVal::UInt(6));
    }

    #[test]
    fn mode_pair_resolves_by_mode() {
        let entry = StyleEntry::color_pair(
            Color::from_rgb8(0xea, 0xea, 0xea),
            Color::from_rgb8(0x00, 0x00, 0x00),
        );
        assert_eq!(
            entry.resolve(Mode::Light).as_color(),
            Some(Color::from_rgb8(0xea, 0xea, 0xea))
        );
        assert_eq!(
            entry.resolve(Mode::Dark).as_color(),
            Some(Color::from_rgb8(0x00, 0x00, 0x00))
        );
    }

    #[test]
    fn numeric_values_coerce_to_dimensions() {
        assert_eq!(StyleVal::UInt(1000).as_f32(), Some(1000.0));
        assert_eq!(StyleVal::Int(-2).as_f32(), Some(-2.0));
        assert_eq!(StyleVal::Float(3.5).as_f32(), Some(3.5));
        assert_eq!(StyleVal::Color(Color::WHITE).as_f32(), None);
    }

    #[test]
    fn styles_preserve_definition_order() {
        let style = Style::new()
            .with(StyleProperty::CornerRadius, StyleEntry::uint(6))
            .with(StyleProperty::BorderWidth, StyleEntry::uint(0))
            .with(StyleProperty::FgColor, StyleEntry::color(Color::WHITE));

        let order: Vec<StyleProperty> = style.iter().map(|(p, _)| p).collect();
        assert_eq!(
            order,
            vec![
                StyleProperty::CornerRadius,
                StyleProperty::BorderWidth,
                StyleProperty::FgColor,
            ]
        );
    }
}
