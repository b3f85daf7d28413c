use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// An entry-styled field with a drop-down of suggested values.
///
/// Unlike [crate::option_menu::OptionMenu] the body reads like an entry
/// field and keeps a border.
///
/// ### Theming
/// - `corner_radius`, `border_width`
/// - `fg_color`, `border_color` - the field body.
/// - `button_color`, `button_hover_color` - the drop-down button.
/// - `text_color`, `text_color_disabled`
pub struct ComboBox {
    values: Vec<String>,
    text: String,
    style: ComboBoxStyle,
}

/// Style state of a [ComboBox].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComboBoxStyle {
    /// Corner rounding radius.
    pub corner_radius: f32,
    /// Border stroke width.
    pub border_width: f32,
    /// Field body fill.
    pub fg_color: Option<Color>,
    /// Border color.
    pub border_color: Option<Color>,
    /// Drop-down button fill.
    pub button_color: Option<Color>,
    /// Drop-down button fill while hovered.
    pub button_hover_color: Option<Color>,
    /// Text color.
    pub text_color: Option<Color>,
    /// Text color while disabled.
    pub text_color_disabled: Option<Color>,
}

impl ComboBox {
    /// Create a combo box over the given values, text set to the first.
    pub fn new(values: impl IntoIterator<Item = impl ToString>) -> Self {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        let text = values.first().cloned().unwrap_or_default();
        Self {
            values,
            text,
            style: ComboBoxStyle::default(),
        }
    }

    /// The suggested values.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text with one of the suggested values.
    pub fn select(&mut self, index: usize) {
        if let Some(value) = self.values.get(index) {
            self.text = value.clone();
        }
    }

    /// The current style state.
    pub fn style(&self) -> &ComboBoxStyle {
        &self.style
    }
}

impl Configurable for ComboBox {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("ComboBox")
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
            StyleProperty::ButtonColor => assign_color(&mut style.button_color, property, value),
            StyleProperty::ButtonHoverColor => {
                assign_color(&mut style.button_hover_color, property, value)
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
    fn text_starts_at_first_value_and_follows_selection() {
        let mut combo = ComboBox::new(["Choice 1", "Choice 2"]);
        assert_eq!(combo.text(), "Choice 1");
        combo.select(1);
        assert_eq!(combo.text(), "Choice 2");
    }

    #[test]
    fn empty_value_list_yields_empty_text() {
        let combo = ComboBox::new(Vec::<String>::new());
        assert_eq!(combo.text(), "");
    }
}
