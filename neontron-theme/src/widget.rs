//! The configure capability themeable widgets expose to the applier.

use crate::error::ConfigureError;
use crate::id::WidgetId;
use crate::properties::StyleProperty;
use crate::style::StyleVal;

/// A live widget the theme applier can push style values onto.
///
/// Widgets are created and owned by the presentation layer; the theme
/// components only ever see them through this trait. An implementation
/// accepts exactly the properties it supports and rejects everything
/// else with a [ConfigureError] — rejection is an expected outcome, not
/// a bug, because style maps are shared per widget type.
pub trait Configurable {
    /// The widget type id used for theme spec lookups.
    fn widget_id(&self) -> WidgetId;

    /// Set one resolved style value on this widget.
    fn configure(&mut self, property: StyleProperty, value: &StyleVal)
        -> Result<(), ConfigureError>;
}
