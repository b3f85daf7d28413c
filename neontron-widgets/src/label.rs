use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// A static text label.
///
/// ### Theming
/// - `corner_radius`
/// - `fg_color` - background fill (usually transparent).
/// - `text_color`
pub struct Label {
    text: String,
    font_size: Option<f32>,
    style: LabelStyle,
}

/// Style state of a [Label].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelStyle {
    /// Corner rounding radius.
    pub corner_radius: f32,
    /// Background fill color.
    pub fg_color: Option<Color>,
    /// Text color.
    pub text_color: Option<Color>,
}

impl Label {
    /// Create a new label with the given text.
    pub fn new(text: impl ToString) -> Self {
        Self {
            text: text.to_string(),
            font_size: None,
            style: LabelStyle::default(),
        }
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Replace the label text.
    pub fn set_text(&mut self, text: impl ToString) {
        self.text = text.to_string();
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The font size, if overridden.
    pub fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    /// The current style state.
    pub fn style(&self) -> &LabelStyle {
        &self.style
    }
}

impl Configurable for Label {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("Label")
    }

    fn configure(
        &mut self,
        property: StyleProperty,
        value: &StyleVal,
    ) -> Result<(), ConfigureError> {
        use crate::helpers::{assign_color, assign_dimension};
        match property {
            StyleProperty::CornerRadius => {
                assign_dimension(&mut self.style.corner_radius, property, value)
            }
            StyleProperty::FgColor => assign_color(&mut self.style.fg_color, property, value),
            StyleProperty::TextColor => assign_color(&mut self.style.text_color, property, value),
            _ => Err(ConfigureError::UnsupportedProperty { property }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_text_can_track_mode_changes() {
        let mut label = Label::new("Dark Mode");
        label.set_text("Light Mode");
        assert_eq!(label.text(), "Light Mode");
    }

    #[test]
    fn rejects_border_properties() {
        let mut label = Label::new("x");
        assert!(matches!(
            label.configure(StyleProperty::BorderWidth, &StyleVal::UInt(1)),
            Err(ConfigureError::UnsupportedProperty { .. })
        ));
    }
}
