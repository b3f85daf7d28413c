use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// The application's root window surface.
///
/// ### Theming
/// - `fg_color` - window background.
pub struct Window {
    title: String,
    style: WindowStyle,
}

/// Style state of a [Window].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowStyle {
    /// Window background color.
    pub fg_color: Option<Color>,
}

impl Window {
    /// Create a window with the given title.
    pub fn new(title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            style: WindowStyle::default(),
        }
    }

    /// The window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The current style state.
    pub fn style(&self) -> &WindowStyle {
        &self.style
    }
}

impl Configurable for Window {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("Window")
    }

    fn configure(
        &mut self,
        property: StyleProperty,
        value: &StyleVal,
    ) -> Result<(), ConfigureError> {
        use crate::helpers::assign_color;
        match property {
            StyleProperty::FgColor => assign_color(&mut self.style.fg_color, property, value),
            _ => Err(ConfigureError::UnsupportedProperty { property }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_background_is_themable() {
        let mut window = Window::new("NeonTron Theme Showcase");
        window
            .configure(
                StyleProperty::FgColor,
                &StyleVal::Color(Color::from_rgb8(0x0a, 0x0a, 0x0f)),
            )
            .unwrap();
        assert!(window.style().fg_color.is_some());
        assert!(matches!(
            window.configure(StyleProperty::CornerRadius, &StyleVal::UInt(6)),
            Err(ConfigureError::UnsupportedProperty { .. })
        ));
    }
}
