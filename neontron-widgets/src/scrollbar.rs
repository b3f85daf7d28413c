use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// A scrollbar track with a draggable grab button.
///
/// ### Theming
/// - `corner_radius`, `border_spacing`
/// - `fg_color` - the track, usually transparent.
/// - `button_color`, `button_hover_color` - the grab.
pub struct Scrollbar {
    offset: f32,
    style: ScrollbarStyle,
}

/// Style state of a [Scrollbar].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollbarStyle {
    /// Corner rounding radius.
    pub corner_radius: f32,
    /// Padding between the track edge and the grab.
    pub border_spacing: f32,
    /// Track fill color.
    pub fg_color: Option<Color>,
    /// Grab fill color.
    pub button_color: Option<Color>,
    /// Grab fill while hovered.
    pub button_hover_color: Option<Color>,
}

impl Scrollbar {
    /// Create a scrollbar at offset 0.
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            style: ScrollbarStyle::default(),
        }
    }

    /// Scroll offset as a fraction of the scrollable range.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Update the offset, clamped to `0..=1`.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, 1.0);
    }

    /// The current style state.
    pub fn style(&self) -> &ScrollbarStyle {
        &self.style
    }
}

impl Default for Scrollbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for Scrollbar {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("Scrollbar")
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
            StyleProperty::BorderSpacing => {
                assign_dimension(&mut style.border_spacing, property, value)
            }
            StyleProperty::FgColor => assign_color(&mut style.fg_color, property, value),
            StyleProperty::ButtonColor => assign_color(&mut style.button_color, property, value),
            StyleProperty::ButtonHoverColor => {
                assign_color(&mut style.button_hover_color, property, value)
            }
            _ => Err(ConfigureError::UnsupportedProperty { property }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_a_clamped_fraction() {
        let mut bar = Scrollbar::new();
        bar.set_offset(0.4);
        assert_eq!(bar.offset(), 0.4);
        bar.set_offset(1.7);
        assert_eq!(bar.offset(), 1.0);
        bar.set_offset(-0.2);
        assert_eq!(bar.offset(), 0.0);
    }

    #[test]
    fn accepts_a_transparent_track() {
        let mut bar = Scrollbar::new();
        bar.configure(StyleProperty::FgColor, &StyleVal::Color(Color::TRANSPARENT))
            .unwrap();
        assert_eq!(bar.style().fg_color, Some(Color::TRANSPARENT));
    }
}
