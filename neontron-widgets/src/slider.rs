use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// A horizontal value slider.
///
/// ### Theming
/// - `corner_radius`, `button_corner_radius`, `border_width`, `button_length`
/// - `fg_color` - unfilled track.
/// - `progress_color` - filled track.
/// - `button_color`, `button_hover_color` - the grab.
pub struct Slider {
    min: f32,
    max: f32,
    value: f32,
    style: SliderStyle,
}

/// Style state of a [Slider].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderStyle {
    /// Corner rounding radius of the track.
    pub corner_radius: f32,
    /// Corner rounding radius of the grab.
    pub button_corner_radius: f32,
    /// Border stroke width.
    pub border_width: f32,
    /// Grab length (0 = round).
    pub button_length: f32,
    /// Unfilled track color.
    pub fg_color: Option<Color>,
    /// Filled track color.
    pub progress_color: Option<Color>,
    /// Grab fill color.
    pub button_color: Option<Color>,
    /// Grab fill while hovered.
    pub button_hover_color: Option<Color>,
}

impl Slider {
    /// Create a slider over `min..=max` starting at `value`.
    pub fn new(min: f32, max: f32, value: f32) -> Self {
        Self {
            min,
            max,
            value: value.clamp(min, max),
            style: SliderStyle::default(),
        }
    }

    /// The lower bound.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// The upper bound.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// The current value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Mutable value for the presentation layer's dragging.
    pub fn value_mut(&mut self) -> &mut f32 {
        &mut self.value
    }

    /// The current style state.
    pub fn style(&self) -> &SliderStyle {
        &self.style
    }
}

impl Configurable for Slider {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("Slider")
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
            StyleProperty::ButtonCornerRadius => {
                assign_dimension(&mut style.button_corner_radius, property, value)
            }
            StyleProperty::BorderWidth => {
                assign_dimension(&mut style.border_width, property, value)
            }
            StyleProperty::ButtonLength => {
                assign_dimension(&mut style.button_length, property, value)
            }
            StyleProperty::FgColor => assign_color(&mut style.fg_color, property, value),
            StyleProperty::ProgressColor => {
                assign_color(&mut style.progress_color, property, value)
            }
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
    fn initial_value_is_clamped_to_range() {
        let slider = Slider::new(0.0, 100.0, 250.0);
        assert_eq!(slider.value(), 100.0);
    }

    #[test]
    fn rejects_text_color() {
        let mut slider = Slider::new(0.0, 100.0, 25.0);
        assert!(matches!(
            slider.configure(StyleProperty::TextColor, &StyleVal::Color(Color::WHITE)),
            Err(ConfigureError::UnsupportedProperty { .. })
        ));
    }
}
