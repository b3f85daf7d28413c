use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// A determinate progress bar.
///
/// ### Theming
/// - `corner_radius`, `border_width`
/// - `fg_color` - unfilled track.
/// - `progress_color` - filled part.
/// - `border_color`
pub struct ProgressBar {
    fraction: f32,
    style: ProgressBarStyle,
}

/// Style state of a [ProgressBar].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressBarStyle {
    /// Corner rounding radius (1000 = pill shape).
    pub corner_radius: f32,
    /// Border stroke width.
    pub border_width: f32,
    /// Unfilled track color.
    pub fg_color: Option<Color>,
    /// Filled part color.
    pub progress_color: Option<Color>,
    /// Border color.
    pub border_color: Option<Color>,
}

impl ProgressBar {
    /// Create a progress bar at the given fraction, clamped to `0..=1`.
    pub fn new(fraction: f32) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
            style: ProgressBarStyle::default(),
        }
    }

    /// Update the fraction, clamped to `0..=1`.
    pub fn set_fraction(&mut self, fraction: f32) {
        self.fraction = fraction.clamp(0.0, 1.0);
    }

    /// The current fraction.
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// The current style state.
    pub fn style(&self) -> &ProgressBarStyle {
        &self.style
    }
}

impl Configurable for ProgressBar {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("ProgressBar")
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
            StyleProperty::ProgressColor => {
                assign_color(&mut style.progress_color, property, value)
            }
            StyleProperty::BorderColor => assign_color(&mut style.border_color, property, value),
            _ => Err(ConfigureError::UnsupportedProperty { property }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(ProgressBar::new(1.7).fraction(), 1.0);
        let mut bar = ProgressBar::new(0.3);
        bar.set_fraction(-0.5);
        assert_eq!(bar.fraction(), 0.0);
    }
}
