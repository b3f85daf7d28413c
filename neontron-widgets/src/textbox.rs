use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// A multi-line scrollable text area.
///
/// ### Theming
/// - `corner_radius`, `border_width`
/// - `fg_color`, `border_color`, `text_color`
/// - `scrollbar_button_color`, `scrollbar_button_hover_color`
pub struct TextBox {
    text: String,
    read_only: bool,
    style: TextBoxStyle,
}

/// Style state of a [TextBox].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBoxStyle {
    /// Corner rounding radius.
    pub corner_radius: f32,
    /// Border stroke width.
    pub border_width: f32,
    /// Body fill color.
    pub fg_color: Option<Color>,
    /// Border color.
    pub border_color: Option<Color>,
    /// Text color.
    pub text_color: Option<Color>,
    /// Scrollbar grab color.
    pub scrollbar_button_color: Option<Color>,
    /// Scrollbar grab color while hovered.
    pub scrollbar_button_hover_color: Option<Color>,
}

impl TextBox {
    /// Create an empty, editable text box.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            read_only: false,
            style: TextBoxStyle::default(),
        }
    }

    /// Set the initial text, builder-style.
    pub fn with_text(mut self, text: impl ToString) -> Self {
        self.text = text.to_string();
        self
    }

    /// Make the text box read-only, builder-style.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable text buffer for the presentation layer.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Whether editing is disabled.
    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// The current style state.
    pub fn style(&self) -> &TextBoxStyle {
        &self.style
    }
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for TextBox {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("TextBox")
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
            StyleProperty::TextColor => assign_color(&mut style.text_color, property, value),
            StyleProperty::ScrollbarButtonColor => {
                assign_color(&mut style.scrollbar_button_color, property, value)
            }
            StyleProperty::ScrollbarButtonHoverColor => {
                assign_color(&mut style.scrollbar_button_hover_color, property, value)
            }
            _ => Err(ConfigureError::UnsupportedProperty { property }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_box_keeps_its_text_accessible() {
        let textbox = TextBox::new()
            .with_text("NeonTron Theme v1.0")
            .with_read_only(true);
        assert!(textbox.read_only());
        assert_eq!(textbox.text(), "NeonTron Theme v1.0");
    }
}
