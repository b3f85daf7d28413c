use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// A rounded container panel.
///
/// Frames nested inside another frame use `top_fg_color` so adjacent
/// panels stay visually distinct.
///
/// ### Theming
/// - `corner_radius`, `border_width`
/// - `fg_color` - fill at the window level.
/// - `top_fg_color` - fill when nested inside another frame.
/// - `border_color`
pub struct Frame {
    transparent: bool,
    nested: bool,
    style: FrameStyle,
}

/// Style state of a [Frame].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameStyle {
    /// Corner rounding radius.
    pub corner_radius: f32,
    /// Border stroke width.
    pub border_width: f32,
    /// Fill at the window level.
    pub fg_color: Option<Color>,
    /// Fill when nested inside another frame.
    pub top_fg_color: Option<Color>,
    /// Border color.
    pub border_color: Option<Color>,
}

impl Frame {
    /// Create an opaque top-level frame.
    pub fn new() -> Self {
        Self {
            transparent: false,
            nested: false,
            style: FrameStyle::default(),
        }
    }

    /// Make the frame draw no fill at all, builder-style.
    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    /// Mark the frame as nested inside another frame, builder-style.
    pub fn with_nested(mut self, nested: bool) -> Self {
        self.nested = nested;
        self
    }

    /// Whether the frame draws no fill.
    pub fn transparent(&self) -> bool {
        self.transparent
    }

    /// The fill the presentation layer should use, honoring nesting
    /// and transparency.
    pub fn fill(&self) -> Option<Color> {
        if self.transparent {
            return None;
        }
        if self.nested {
            self.style.top_fg_color.or(self.style.fg_color)
        } else {
            self.style.fg_color
        }
    }

    /// The current style state.
    pub fn style(&self) -> &FrameStyle {
        &self.style
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for Frame {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("Frame")
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
            StyleProperty::TopFgColor => assign_color(&mut style.top_fg_color, property, value),
            StyleProperty::BorderColor => assign_color(&mut style.border_color, property, value),
            _ => Err(ConfigureError::UnsupportedProperty { property }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_frames_prefer_the_top_fill() {
        let mut frame = Frame::new().with_nested(true);
        let base = Color::from_rgb8(0x14, 0x14, 0x1e);
        let top = Color::from_rgb8(0x1c, 0x1c, 0x28);
        frame
            .configure(StyleProperty::FgColor, &StyleVal::Color(base))
            .unwrap();
        frame
            .configure(StyleProperty::TopFgColor, &StyleVal::Color(top))
            .unwrap();
        assert_eq!(frame.fill(), Some(top));
        assert_eq!(Frame::new().with_transparent(true).fill(), None);
    }
}
