use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// A labeled checkbox.
///
/// ### Theming
/// - `corner_radius`, `border_width`
/// - `fg_color` - box fill while checked.
/// - `border_color`, `hover_color`, `checkmark_color`
/// - `text_color`, `text_color_disabled`
pub struct CheckBox {
    text: String,
    checked: bool,
    disabled: bool,
    style: CheckBoxStyle,
}

/// Style state of a [CheckBox].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckBoxStyle {
    /// Corner rounding radius of the box.
    pub corner_radius: f32,
    /// Border stroke width of the box.
    pub border_width: f32,
    /// Box fill while checked.
    pub fg_color: Option<Color>,
    /// Box border color.
    pub border_color: Option<Color>,
    /// Box fill while hovered.
    pub hover_color: Option<Color>,
    /// Checkmark color.
    pub checkmark_color: Option<Color>,
    /// Caption color.
    pub text_color: Option<Color>,
    /// Caption color while disabled.
    pub text_color_disabled: Option<Color>,
}

impl CheckBox {
    /// Create a new unchecked checkbox with the given caption.
    pub fn new(text: impl ToString) -> Self {
        Self {
            text: text.to_string(),
            checked: false,
            disabled: false,
            style: CheckBoxStyle::default(),
        }
    }

    /// Set the initial checked state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set whether the checkbox is disabled.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The caption.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The checked state.
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Mutable checked state for the presentation layer.
    pub fn checked_mut(&mut self) -> &mut bool {
        &mut self.checked
    }

    /// Whether the checkbox is disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// The current style state.
    pub fn style(&self) -> &CheckBoxStyle {
        &self.style
    }
}

impl Configurable for CheckBox {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("CheckBox")
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
            StyleProperty::BorderColor => assign_color(&mut style.border_color, property, value),
            StyleProperty::HoverColor => assign_color(&mut style.hover_color, property, value),
            StyleProperty::CheckmarkColor => {
                assign_color(&mut style.checkmark_color, property, value)
            }
            StyleProperty::TextColor => assign_color(&mut style.text_color, property, value),
            StyleProperty::TextColorDisabled => {
                assign_color(&mut style.text_color_disabled, property, value)
            }
            _ => Err(ConfigureError::UnsupportedProperty { property }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkmark_color_is_checkbox_specific() {
        let mut checkbox = CheckBox::new("Checked").with_checked(true);
        checkbox
            .configure(
                StyleProperty::CheckmarkColor,
                &StyleVal::Color(Color::WHITE),
            )
            .unwrap();
        assert_eq!(checkbox.style().checkmark_color, Some(Color::WHITE));
        assert!(checkbox.checked());
    }
}
