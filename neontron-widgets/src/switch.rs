use neontron_theme::error::ConfigureError;
use neontron_theme::id::WidgetId;
use neontron_theme::properties::StyleProperty;
use neontron_theme::style::StyleVal;
use neontron_theme::widget::Configurable;
use peniko::Color;

/// A labeled on/off toggle switch.
///
/// ### Theming
/// - `corner_radius`, `border_width`, `button_length`
/// - `fg_color` - track fill while off.
/// - `progress_color` - track fill while on.
/// - `button_color`, `button_hover_color` - the grab button.
/// - `text_color`, `text_color_disabled`
pub struct Switch {
    text: String,
    on: bool,
    disabled: bool,
    style: SwitchStyle,
}

/// Style state of a [Switch].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchStyle {
    /// Corner rounding radius of the track.
    pub corner_radius: f32,
    /// Border stroke width.
    pub border_width: f32,
    /// Length of the grab button (0 = round).
    pub button_length: f32,
    /// Track fill while off.
    pub fg_color: Option<Color>,
    /// Track fill while on.
    pub progress_color: Option<Color>,
    /// Grab button fill.
    pub button_color: Option<Color>,
    /// Grab button fill while hovered.
    pub button_hover_color: Option<Color>,
    /// Caption color.
    pub text_color: Option<Color>,
    /// Caption color while disabled.
    pub text_color_disabled: Option<Color>,
}

impl Switch {
    /// Create a new switch in the off position.
    pub fn new(text: impl ToString) -> Self {
        Self {
            text: text.to_string(),
            on: false,
            disabled: false,
            style: SwitchStyle::default(),
        }
    }

    /// Set the initial on/off position.
    pub fn with_on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// Set whether the switch is disabled.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The caption.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The on/off position.
    pub fn on(&self) -> bool {
        self.on
    }

    /// Mutable on/off position for the presentation layer.
    pub fn on_mut(&mut self) -> &mut bool {
        &mut self.on
    }

    /// Whether the switch is disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// The current style state.
    pub fn style(&self) -> &SwitchStyle {
        &self.style
    }
}

impl Configurable for Switch {
    fn widget_id(&self) -> WidgetId {
        WidgetId::neontron("Switch")
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
            StyleProperty::TextColor => assign_color(&mut style.text_color, property, value),
            StyleProperty::TextColorDisabled => {
                assign_color(&mut style.text_color_disabled, property, value)
            }
            _ => Err(ConfigureError::UnsupportedProperty { property }),
        }
    }
}
