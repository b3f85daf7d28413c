use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// A row of mutually exclusive segments, one selected.
///
/// ### Theming
/// - `corner_radius`, `border_width`
/// - `fg_color` - the strip behind the segments.
/// - `selected_color`, `selected_hover_color`
/// - `unselected_color`, `unselected_hover_color`
/// - `text_color`, `text_color_disabled`
pub struct SegmentedButton {
    values: Vec<String>,
    selected: usize,
    style: SegmentedButtonStyle,
}

/// Style state of a [SegmentedButton].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentedButtonStyle {
    /// Corner rounding radius.
    pub corner_radius: f32,
    /// Border stroke width.
    pub border_width: f32,
    /// Strip fill behind the segments.
    pub fg_color: Option<Color>,
    /// Fill of the selected segment.
    pub selected_color: Option<Color>,
    /// Fill of the selected segment while hovered.
    pub selected_hover_color: Option<Color>,
    /// Fill of unselected segments.
    pub unselected_color: Option<Color>,
    /// Fill of unselected segments while hovered.
    pub unselected_hover_color: Option<Color>,
    /// Segment caption color.
    pub text_color: Option<Color>,
    /// Segment caption color while disabled.
    pub text_color_disabled: Option<Color>,
}

impl SegmentedButton {
    /// Create a segmented button over the given values, first selected.
    pub fn new(values: impl IntoIterator<Item = impl ToString>) -> Self {
        Self {
            values: values.into_iter().map(|v| v.to_string()).collect(),
            selected: 0,
            style: SegmentedButtonStyle::default(),
        }
    }

    /// Select a segment, builder-style. Out-of-range indices are ignored.
    pub fn with_selected(mut self, index: usize) -> Self {
        self.select(index);
        self
    }

    /// The segment captions.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The selected segment's caption, if any segments exist.
    pub fn selected(&self) -> Option<&str> {
        self.values.get(self.selected).map(String::as_str)
    }

    /// The selected index.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Select a segment by index; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.values.len() {
            self.selected = index;
        }
    }

    /// The current style state.
    pub fn style(&self) -> &SegmentedButtonStyle {
        &self.style
    }
}

impl Configurable for SegmentedButton {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("SegmentedButton")
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
            StyleProperty::SelectedColor => {
                assign_color(&mut style.selected_color, property, value)
            }
            StyleProperty::SelectedHoverColor => {
                assign_color(&mut style.selected_hover_color, property, value)
            }
            StyleProperty::UnselectedColor => {
                assign_color(&mut style.unselected_color, property, value)
            }
            StyleProperty::UnselectedHoverColor => {
                assign_color(&mut style.unselected_hover_color, property, value)
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
    fn builder_selection_is_bounds_checked() {
        let seg = SegmentedButton::new(["Tab 1", "Tab 2", "Tab 3"]).with_selected(1);
        assert_eq!(seg.selected(), Some("Tab 2"));
        let seg = SegmentedButton::new(["Tab 1"]).with_selected(7);
        assert_eq!(seg.selected(), Some("Tab 1"));
    }

    #[test]
    fn selected_and_unselected_fills_are_independent() {
        let mut seg = SegmentedButton::new(["A", "B"]);
        let on = Color::from_rgb8(0x00, 0xb8, 0xb8);
        let off = Color::from_rgb8(0x14, 0x14, 0x1e);
        seg.configure(StyleProperty::SelectedColor, &StyleVal::Color(on))
            .unwrap();
        seg.configure(StyleProperty::UnselectedColor, &StyleVal::Color(off))
            .unwrap();
        assert_eq!(seg.style().selected_color, Some(on));
        assert_eq!(seg.style().unselected_color, Some(off));
    }
}
