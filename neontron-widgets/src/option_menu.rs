use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// A drop-down menu showing one selected value.
///
/// ### Theming
/// - `corner_radius`
/// - `fg_color` - body fill.
/// - `button_color`, `button_hover_color` - the arrow button.
/// - `text_color`, `text_color_disabled`
pub struct OptionMenu {
    values: Vec<String>,
    selected: usize,
    style: OptionMenuStyle,
}

/// Style state of an [OptionMenu].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionMenuStyle {
    /// Corner rounding radius.
    pub corner_radius: f32,
    /// Body fill color.
    pub fg_color: Option<Color>,
    /// Arrow button fill.
    pub button_color: Option<Color>,
    /// Arrow button fill while hovered.
    pub button_hover_color: Option<Color>,
    /// Text color.
    pub text_color: Option<Color>,
    /// Text color while disabled.
    pub text_color_disabled: Option<Color>,
}

impl OptionMenu {
    /// Create an option menu over the given values, first one selected.
    pub fn new(values: impl IntoIterator<Item = impl ToString>) -> Self {
        Self {
            values: values.into_iter().map(|v| v.to_string()).collect(),
            selected: 0,
            style: OptionMenuStyle::default(),
        }
    }

    /// The selectable values.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The selected value, if any values exist.
    pub fn selected(&self) -> Option<&str> {
        self.values.get(self.selected).map(String::as_str)
    }

    /// Select a value by index; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.values.len() {
            self.selected = index;
        }
    }

    /// The selected index.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The current style state.
    pub fn style(&self) -> &OptionMenuStyle {
        &self.style
    }
}

impl Configurable for OptionMenu {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("OptionMenu")
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
            StyleProperty::FgColor => assign_color(&mut style.fg_color, property, value),
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
    fn selection_stays_in_range() {
        let mut menu = OptionMenu::new(["Menu 1", "Menu 2", "Menu 3"]);
        assert_eq!(menu.selected(), Some("Menu 1"));
        menu.select(2);
        assert_eq!(menu.selected(), Some("Menu 3"));
        menu.select(9);
        assert_eq!(menu.selected(), Some("Menu 3"));
    }
}
