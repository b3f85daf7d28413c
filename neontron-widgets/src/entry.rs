use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// A single-line text entry field.
///
/// ### Theming
/// - `corner_radius`, `border_width`
/// - `fg_color` - field fill.
/// - `border_color`, `text_color`, `placeholder_text_color`
pub struct Entry {
    text: String,
    placeholder: Option<String>,
    /// Mask input with `*`, for password fields.
    password: bool,
    style: EntryStyle,
}

/// Style state of an [Entry].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryStyle {
    /// Corner rounding radius.
    pub corner_radius: f32,
    /// Border stroke width.
    pub border_width: f32,
    /// Field fill color.
    pub fg_color: Option<Color>,
    /// Border color.
    pub border_color: Option<Color>,
    /// Text color.
    pub text_color: Option<Color>,
    /// Placeholder text color.
    pub placeholder_text_color: Option<Color>,
}

impl Entry {
    /// Create a new empty entry.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            placeholder: None,
            password: false,
            style: EntryStyle::default(),
        }
    }

    /// Set the placeholder shown while the entry is empty.
    pub fn with_placeholder(mut self, placeholder: impl ToString) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    /// Pre-fill the entry with text.
    pub fn with_text(mut self, text: impl ToString) -> Self {
        self.text = text.to_string();
        self
    }

    /// Mask the entry contents.
    pub fn with_password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    /// The current contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for the presentation layer's text editing.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// The placeholder, if any.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Whether contents are masked.
    pub fn password(&self) -> bool {
        self.password
    }

    /// The current style state.
    pub fn style(&self) -> &EntryStyle {
        &self.style
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for Entry {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("Entry")
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
            StyleProperty::PlaceholderTextColor => {
                assign_color(&mut style.placeholder_text_color, property, value)
            }
            _ => Err(ConfigureError::UnsupportedProperty { property }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_and_password_state() {
        let entry = Entry::new()
            .with_placeholder("Type something...")
            .with_password(true);
        assert_eq!(entry.placeholder(), Some("Type something..."));
        assert!(entry.password());
        assert!(entry.text().is_empty());
    }

    #[test]
    fn text_can_be_prefilled() {
        let entry = Entry::new().with_text("neon");
        assert_eq!(entry.text(), "neon");
    }

    #[test]
    fn rejects_hover_color() {
        let mut entry = Entry::new();
        assert!(matches!(
            entry.configure(
                StyleProperty::HoverColor,
                &StyleVal::Color(Color::WHITE)
            ),
            Err(ConfigureError::UnsupportedProperty { .. })
        ));
    }
}
