use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// A clickable push button with a text caption.
///
/// ### Theming
/// Styling the button uses the following properties:
/// - `corner_radius`, `border_width`
/// - `fg_color` - idle fill.
/// - `selected_fg_color` - fill while pressed.
/// - `hover_color` - fill while hovered.
/// - `text_color`, `text_color_disabled`, `fg_color_disabled`
pub struct Button {
    text: String,
    font_size: Option<f32>,
    disabled: bool,
    style: ButtonStyle,
}

/// Style state of a [Button], written by the theme applier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonStyle {
    /// Corner rounding radius.
    pub corner_radius: f32,
    /// Border stroke width.
    pub border_width: f32,
    /// Idle fill color.
    pub fg_color: Option<Color>,
    /// Fill color while pressed.
    pub selected_fg_color: Option<Color>,
    /// Fill color while hovered.
    pub hover_color: Option<Color>,
    /// Caption color.
    pub text_color: Option<Color>,
    /// Caption color while disabled.
    pub text_color_disabled: Option<Color>,
    /// Fill color while disabled.
    pub fg_color_disabled: Option<Color>,
}

impl Button {
    /// Create a new button with the given caption.
    pub fn new(text: impl ToString) -> Self {
        Self {
            text: text.to_string(),
            font_size: None,
            disabled: false,
            style: ButtonStyle::default(),
        }
    }

    /// Set the caption font size in points.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set whether the button is disabled.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Pre-set a fill color before any theme pass runs.
    ///
    /// A later theme application overwrites this.
    pub fn with_fg_color(mut self, color: Color) -> Self {
        self.style.fg_color = Some(color);
        self
    }

    /// Pre-set a hover color before any theme pass runs.
    pub fn with_hover_color(mut self, color: Color) -> Self {
        self.style.hover_color = Some(color);
        self
    }

    /// The button caption.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The caption font size, if overridden.
    pub fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    /// Whether the button is disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// The current style state.
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }
}

impl Configurable for Button {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("Button")
    }

    fn configure(
        &mut self,
        property: StyleProperty,
        value: &StyleVal,
    ) -> Result<(), ConfigureError> {
        use crate::helpers::{assign_color, assign_dimension};
        let style = &mut self.style;
        match property {
            StyleProperty::CornerRadius => {
                assign_dimension(&mut style.corner_radius, property, value)
            }
            StyleProperty::BorderWidth => {
                assign_dimension(&mut style.border_width, property, value)
            }
            StyleProperty::FgColor => assign_color(&mut style.fg_color, property, value),
            StyleProperty::SelectedFgColor => {
                assign_color(&mut style.selected_fg_color, property, value)
            }
            StyleProperty::HoverColor => assign_color(&mut style.hover_color, property, value),
            StyleProperty::TextColor => assign_color(&mut style.text_color, property, value),
            StyleProperty::TextColorDisabled => {
                assign_color(&mut style.text_color_disabled, property, value)
            }
            StyleProperty::FgColorDisabled => {
                assign_color(&mut style.fg_color_disabled, property, value)
            }
            _ => Err(ConfigureError::UnsupportedProperty { property }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_its_documented_properties() {
        let mut button = Button::new("Normal");
        button
            .configure(StyleProperty::CornerRadius, &StyleVal::UInt(6))
            .unwrap();
        button
            .configure(
                StyleProperty::FgColor,
                &StyleVal::Color(Color::from_rgb8(0x00, 0xd1, 0xd1)),
            )
            .unwrap();

        assert_eq!(button.style().corner_radius, 6.0);
        assert_eq!(
            button.style().fg_color,
            Some(Color::from_rgb8(0x00, 0xd1, 0xd1))
        );
    }

    #[test]
    fn rejects_foreign_properties_and_wrong_types() {
        let mut button = Button::new("Normal");
        assert_eq!(
            button.configure(StyleProperty::CheckmarkColor, &StyleVal::UInt(1)),
            Err(ConfigureError::UnsupportedProperty {
                property: StyleProperty::CheckmarkColor
            })
        );
        assert_eq!(
            button.configure(StyleProperty::FgColor, &StyleVal::UInt(6)),
            Err(ConfigureError::InvalidValue {
                property: StyleProperty::FgColor
            })
        );
        // Neither rejection touched the style state.
        assert_eq!(button.style(), &ButtonStyle::default());
    }
}
