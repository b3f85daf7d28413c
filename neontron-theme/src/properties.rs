//! # Style Property Keys
//!
//! Type-safe keys for widget style attributes. Using an enum instead of
//! raw strings keeps typos out of theme definitions and lets widgets
//! match exhaustively on the properties they support.
//!
//! The string forms (used in theme files) are snake_case, e.g.
//! `corner_radius` or `placeholder_text_color`.

use std::fmt::{Display, Formatter};

/// A type-safe style property key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// Corner rounding radius.
    CornerRadius,
    /// Border stroke width.
    BorderWidth,
    /// Border width when a radio button is checked.
    BorderWidthChecked,
    /// Border width when a radio button is unchecked.
    BorderWidthUnchecked,
    /// Spacing between a scrollbar and its content.
    BorderSpacing,
    /// Main fill color.
    FgColor,
    /// Fill color of a nested (raised) surface.
    TopFgColor,
    /// Border color.
    BorderColor,
    /// Fill color while selected/active.
    SelectedFgColor,
    /// Fill color while hovered.
    HoverColor,
    /// Text color.
    TextColor,
    /// Text color while disabled.
    TextColorDisabled,
    /// Fill color while disabled.
    FgColorDisabled,
    /// Color of a checkbox checkmark.
    CheckmarkColor,
    /// Color of placeholder text in an empty entry.
    PlaceholderTextColor,
    /// Fill color of the filled part of a progress/slider/switch track.
    ProgressColor,
    /// Fill color of a grab/drop-down button.
    ButtonColor,
    /// Fill color of a grab/drop-down button while hovered.
    ButtonHoverColor,
    /// Length of a slider/switch grab button (0 = round).
    ButtonLength,
    /// Corner radius of a slider grab button.
    ButtonCornerRadius,
    /// Fill color of the selected segment of a segmented button.
    SelectedColor,
    /// Hover color of the selected segment of a segmented button.
    SelectedHoverColor,
    /// Fill color of unselected segments of a segmented button.
    UnselectedColor,
    /// Hover color of unselected segments of a segmented button.
    UnselectedHoverColor,
    /// Fill color of an embedded scrollbar button.
    ScrollbarButtonColor,
    /// Hover color of an embedded scrollbar button.
    ScrollbarButtonHoverColor,
}

impl StyleProperty {
    /// All known properties, in theme-file order.
    pub const ALL: [StyleProperty; 26] = [
        Self::CornerRadius,
        Self::BorderWidth,
        Self::BorderWidthChecked,
        Self::BorderWidthUnchecked,
        Self::BorderSpacing,
        Self::FgColor,
        Self::TopFgColor,
        Self::BorderColor,
        Self::SelectedFgColor,
        Self::HoverColor,
        Self::TextColor,
        Self::TextColorDisabled,
        Self::FgColorDisabled,
        Self::CheckmarkColor,
        Self::PlaceholderTextColor,
        Self::ProgressColor,
        Self::ButtonColor,
        Self::ButtonHoverColor,
        Self::ButtonLength,
        Self::ButtonCornerRadius,
        Self::SelectedColor,
        Self::SelectedHoverColor,
        Self::UnselectedColor,
        Self::UnselectedHoverColor,
        Self::ScrollbarButtonColor,
        Self::ScrollbarButtonHoverColor,
    ];

    /// The snake_case name used in theme files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CornerRadius => "corner_radius",
            Self::BorderWidth => "border_width",
            Self::BorderWidthChecked => "border_width_checked",
            Self::BorderWidthUnchecked => "border_width_unchecked",
            Self::BorderSpacing => "border_spacing",
            Self::FgColor => "fg_color",
            Self::TopFgColor => "top_fg_color",
            Self::BorderColor => "border_color",
            Self::SelectedFgColor => "selected_fg_color",
            Self::HoverColor => "hover_color",
            Self::TextColor => "text_color",
            Self::TextColorDisabled => "text_color_disabled",
            Self::FgColorDisabled => "fg_color_disabled",
            Self::CheckmarkColor => "checkmark_color",
            Self::PlaceholderTextColor => "placeholder_text_color",
            Self::ProgressColor => "progress_color",
            Self::ButtonColor => "button_color",
            Self::ButtonHoverColor => "button_hover_color",
            Self::ButtonLength => "button_length",
            Self::ButtonCornerRadius => "button_corner_radius",
            Self::SelectedColor => "selected_color",
            Self::SelectedHoverColor => "selected_hover_color",
            Self::UnselectedColor => "unselected_color",
            Self::UnselectedHoverColor => "unselected_hover_color",
            Self::ScrollbarButtonColor => "scrollbar_button_color",
            Self::ScrollbarButtonHoverColor => "scrollbar_button_hover_color",
        }
    }

    /// Parse a property from its theme-file name.
    pub fn from_str(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == name)
    }
}

impl Display for StyleProperty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_forms_round_trip() {
        for property in StyleProperty::ALL {
            assert_eq!(StyleProperty::from_str(property.as_str()), Some(property));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(StyleProperty::from_str("glow_intensity"), None);
    }
}
