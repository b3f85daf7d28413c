use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// One labeled option of a radio group.
///
/// The group's selected value lives in the presentation layer; each
/// button only knows its own value.
///
/// ### Theming
/// - `corner_radius`
/// - `border_width_checked`, `border_width_unchecked`
/// - `fg_color`, `border_color`, `hover_color`
/// - `text_color`, `text_color_disabled`
pub struct RadioButton {
    text: String,
    value: i32,
    style: RadioButtonStyle,
}

/// Style state of a [RadioButton].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadioButtonStyle {
    /// Corner rounding radius (1000 = fully round).
    pub corner_radius: f32,
    /// Ring width while checked.
    pub border_width_checked: f32,
    /// Ring width while unchecked.
    pub border_width_unchecked: f32,
    /// Dot fill color.
    pub fg_color: Option<Color>,
    /// Ring color.
    pub border_color: Option<Color>,
    /// Dot fill while hovered.
    pub hover_color: Option<Color>,
    /// Caption color.
    pub text_color: Option<Color>,
    /// Caption color while disabled.
    pub text_color_disabled: Option<Color>,
}

impl RadioButton {
    /// Create a new radio button carrying the given group value.
    pub fn new(text: impl ToString, value: i32) -> Self {
        Self {
            text: text.to_string(),
            value,
            style: RadioButtonStyle::default(),
        }
    }

    /// The caption.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The group value this button selects.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The current style state.
    pub fn style(&self) -> &RadioButtonStyle {
        &self.style
    }
}

impl Configurable for RadioButton {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("RadioButton")
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
            StyleProperty::BorderWidthChecked => {
                assign_dimension(&mut style.border_width_checked, property, value)
            }
            StyleProperty::BorderWidthUnchecked => {
                assign_dimension(&mut style.border_width_unchecked, property, value)
            }
            StyleProperty::FgColor => assign_color(&mut style.fg_color, property, value),
            StyleProperty::BorderColor => assign_color(&mut style.border_color, property, value),
            StyleProperty::HoverColor => assign_color(&mut style.hover_color, property, value),
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
    fn checked_and_unchecked_ring_widths_are_distinct() {
        let mut radio = RadioButton::new("Option 1", 1);
        radio
            .configure(StyleProperty::BorderWidthChecked, &StyleVal::UInt(6))
            .unwrap();
        radio
            .configure(StyleProperty::BorderWidthUnchecked, &StyleVal::UInt(2))
            .unwrap();
        assert_eq!(radio.style().border_width_checked, 6.0);
        assert_eq!(radio.style().border_width_unchecked, 2.0);
    }
}
