//! # Theme Spec Store
//!
//! A [ThemeSpec] is the immutable mapping from widget type to style
//! attributes. It is constructed once at startup (either the built-in
//! NeonTron table or a loaded theme file) and only read afterwards.
//!
//! Lookups for widget types without an entry return [None]; callers must
//! treat that as a no-op, not an error. The spec may also carry entries
//! for widget types the application never instantiates (the built-in
//! theme styles a `Toplevel` window the showcase never opens).

use indexmap::IndexMap;
use peniko::Color;

use crate::id::WidgetId;
use crate::palette::NeonPalette;
use crate::properties::StyleProperty::*;
use crate::style::{Style, StyleEntry};

/// Widget type names a theme file may style, in canonical order.
pub const WIDGET_TYPES: [&str; 16] = [
    "Window",
    "Toplevel",
    "Frame",
    "Button",
    "Label",
    "Entry",
    "CheckBox",
    "Switch",
    "RadioButton",
    "ProgressBar",
    "Slider",
    "OptionMenu",
    "ComboBox",
    "Scrollbar",
    "SegmentedButton",
    "TextBox",
];

/// The static mapping of widget type to style attributes.
#[derive(Clone, Debug, Default)]
pub struct ThemeSpec {
    map: IndexMap<WidgetId, Style>,
}

impl ThemeSpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    /// Add a widget style, builder-style. Used during construction only.
    pub fn with_style(mut self, id: WidgetId, style: Style) -> Self {
        self.map.insert(id, style);
        self
    }

    /// Look up the style attributes of a widget type.
    pub fn of(&self, id: &WidgetId) -> Option<&Style> {
        self.map.get(id)
    }

    /// Iterate all styled widget types in definition order.
    pub fn widget_ids(&self) -> impl Iterator<Item = &WidgetId> {
        self.map.keys()
    }

    /// Number of styled widget types.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the spec styles no widget types at all.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The built-in NeonTron theme: neon cyan accents on near-black
    /// surfaces in dark mode, neutral greys in light mode.
    pub fn neon_tron() -> Self {
        let l = NeonPalette::light();
        let d = NeonPalette::dark();
        let pair = |light: Color, dark: Color| StyleEntry::color_pair(light, dark);

        Self::new()
            .with_style(
                WidgetId::neontron("Window"),
                Style::new().with(FgColor, pair(l.window, d.window)),
            )
            .with_style(
                WidgetId::neontron("Toplevel"),
                Style::new().with(FgColor, pair(l.window, d.window)),
            )
            .with_style(
                WidgetId::neontron("Frame"),
                Style::new()
                    .with(CornerRadius, StyleEntry::uint(6))
                    .with(BorderWidth, StyleEntry::uint(0))
                    .with(FgColor, pair(l.surface, d.surface))
                    .with(TopFgColor, pair(l.surface_top, d.surface_top))
                    .with(BorderColor, pair(l.surface_border, d.surface_border)),
            )
            .with_style(
                WidgetId::neontron("Button"),
                Style::new()
                    .with(CornerRadius, StyleEntry::uint(6))
                    .with(BorderWidth, StyleEntry::uint(0))
                    .with(FgColor, pair(l.accent, d.accent))
                    .with(SelectedFgColor, pair(l.accent_selected, d.accent_selected))
                    .with(HoverColor, pair(l.accent_hover, d.accent_hover))
                    .with(TextColor, pair(l.ink, d.ink))
                    .with(TextColorDisabled, pair(l.accent_deep, d.accent_deep))
                    .with(FgColorDisabled, pair(l.disabled_fill, d.disabled_fill)),
            )
            .with_style(
                WidgetId::neontron("Label"),
                Style::new()
                    .with(CornerRadius, StyleEntry::uint(0))
                    .with(FgColor, StyleEntry::color(Color::TRANSPARENT))
                    .with(TextColor, pair(l.text, d.text)),
            )
            .with_style(
                WidgetId::neontron("Entry"),
                Style::new()
                    .with(CornerRadius, StyleEntry::uint(6))
                    .with(BorderWidth, StyleEntry::uint(1))
                    .with(FgColor, pair(l.field, d.field))
                    .with(BorderColor, pair(l.field_border, d.field_border))
                    .with(TextColor, pair(l.field_text, d.field_text))
                    .with(PlaceholderTextColor, pair(l.placeholder, d.placeholder)),
            )
            .with_style(
                WidgetId::neontron("CheckBox"),
                Style::new()
                    .with(CornerRadius, StyleEntry::uint(6))
                    .with(BorderWidth, StyleEntry::uint(2))
                    .with(FgColor, pair(l.control, d.control))
                    .with(BorderColor, pair(l.control_border, d.control_border))
                    .with(HoverColor, pair(l.control_hover, d.control_hover))
                    .with(CheckmarkColor, pair(l.checkmark, d.checkmark))
                    .with(TextColor, pair(l.text, d.text))
                    .with(TextColorDisabled, pair(l.text_disabled, d.text_disabled)),
            )
            .with_style(
                WidgetId::neontron("Switch"),
                Style::new()
                    .with(CornerRadius, StyleEntry::uint(1000))
                    .with(BorderWidth, StyleEntry::uint(2))
                    .with(ButtonLength, StyleEntry::uint(0))
                    .with(FgColor, pair(l.track, d.track))
                    .with(ProgressColor, pair(l.accent_active, d.accent_active))
                    .with(ButtonColor, pair(l.thumb, d.thumb))
                    .with(ButtonHoverColor, pair(l.thumb_hover, d.thumb_hover))
                    .with(TextColor, pair(l.text, d.text))
                    .with(TextColorDisabled, pair(l.text_disabled, d.text_disabled)),
            )
            .with_style(
                WidgetId::neontron("RadioButton"),
                Style::new()
                    .with(CornerRadius, StyleEntry::uint(1000))
                    .with(BorderWidthChecked, StyleEntry::uint(6))
                    .with(BorderWidthUnchecked, StyleEntry::uint(2))
                    .with(FgColor, pair(l.control, d.control))
                    .with(BorderColor, pair(l.control_border, d.control_border))
                    .with(HoverColor, pair(l.control_hover, d.control_hover))
                    .with(TextColor, pair(l.text, d.text))
                    .with(TextColorDisabled, pair(l.text_disabled, d.text_disabled)),
            )
            .with_style(
                WidgetId::neontron("ProgressBar"),
                Style::new()
                    .with(CornerRadius, StyleEntry::uint(1000))
                    .with(BorderWidth, StyleEntry::uint(0))
                    .with(FgColor, pair(l.track, d.track))
                    .with(ProgressColor, pair(l.control, d.control))
                    .with(BorderColor, pair(l.surface_border, d.surface_border)),
            )
            .with_style(
                WidgetId::neontron("Slider"),
                Style::new()
                    .with(CornerRadius, StyleEntry::uint(1000))
                    .with(ButtonCornerRadius, StyleEntry::uint(1000))
                    .with(BorderWidth, StyleEntry::uint(3))
                    .with(ButtonLength, StyleEntry::uint(0))
                    .with(FgColor, pair(l.track, d.track))
                    .with(ProgressColor, pair(l.control, d.control))
                    .with(ButtonColor, pair(l.control, d.control))
                    .with(ButtonHoverColor, pair(l.control_hover, d.control_hover)),
            )
            .with_style(
                WidgetId::neontron("OptionMenu"),
                Style::new()
                    .with(CornerRadius, StyleEntry::uint(6))
                    .with(FgColor, pair(l.menu, d.menu))
                    .with(ButtonColor, pair(l.menu_button, d.menu_button))
                    .with(
                        ButtonHoverColor,
                        pair(l.menu_button_hover, d.menu_button_hover),
                    )
                    .with(TextColor, pair(l.menu_text, d.menu_text))
                    .with(TextColorDisabled, pair(l.placeholder, d.accent_deep)),
            )
            .with_style(
                WidgetId::neontron("ComboBox"),
                Style::new()
                    .with(CornerRadius, StyleEntry::uint(6))
                    .with(BorderWidth, StyleEntry::uint(1))
                    .with(FgColor, pair(l.field, d.field))
                    .with(BorderColor, pair(l.field_border, d.field_border))
                    .with(ButtonColor, pair(l.menu, d.menu))
                    .with(ButtonHoverColor, pair(l.menu_button, d.menu_button))
                    .with(TextColor, pair(l.field_text, d.field_text))
                    .with(TextColorDisabled, pair(l.placeholder, d.accent_deep)),
            )
            .with_style(
                WidgetId::neontron("Scrollbar"),
                Style::new()
                    .with(CornerRadius, StyleEntry::uint(1000))
                    .with(BorderSpacing, StyleEntry::uint(4))
                    .with(FgColor, StyleEntry::color(Color::TRANSPARENT))
                    .with(ButtonColor, pair(l.scrollbar_button, d.scrollbar_button))
                    .with(
                        ButtonHoverColor,
                        pair(l.scrollbar_button_hover, d.scrollbar_button_hover),
                    ),
            )
            .with_style(
                WidgetId::neontron("SegmentedButton"),
                Style::new()
                    .with(CornerRadius, StyleEntry::uint(6))
                    .with(BorderWidth, StyleEntry::uint(1))
                    .with(FgColor, pair(l.panel, d.panel))
                    .with(SelectedColor, pair(l.accent_active, d.accent_active))
                    .with(SelectedHoverColor, pair(l.accent_hover, d.accent_hover))
                    .with(UnselectedColor, pair(l.panel, d.panel))
                    .with(UnselectedHoverColor, pair(l.panel_hover, d.panel_hover))
                    .with(TextColor, pair(l.ink, d.ink))
                    .with(TextColorDisabled, pair(l.text_disabled, d.text_disabled)),
            )
            .with_style(
                WidgetId::neontron("TextBox"),
                Style::new()
                    .with(CornerRadius, StyleEntry::uint(6))
                    .with(BorderWidth, StyleEntry::uint(1))
                    .with(FgColor, pair(l.textbox, d.textbox))
                    .with(BorderColor, pair(l.field_border, d.field_border))
                    .with(TextColor, pair(l.field_text, d.field_text))
                    .with(
                        ScrollbarButtonColor,
                        pair(l.scrollbar_button, d.scrollbar_button),
                    )
                    .with(
                        ScrollbarButtonHoverColor,
                        pair(l.scrollbar_button_hover, d.scrollbar_button_hover),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;

    #[test]
    fn builtin_styles_all_showcase_widgets() {
        let spec = ThemeSpec::neon_tron();
        for id in [
            "Window",
            "Frame",
            "Button",
            "Label",
            "Entry",
            "CheckBox",
            "Switch",
            "RadioButton",
            "ProgressBar",
            "Slider",
            "OptionMenu",
            "ComboBox",
            "Scrollbar",
            "SegmentedButton",
            "TextBox",
        ] {
            assert!(
                spec.of(&WidgetId::neontron(id)).is_some(),
                "missing style for {id}"
            );
        }
    }

    #[test]
    fn unknown_widget_type_is_a_normal_miss() {
        let spec = ThemeSpec::neon_tron();
        assert!(spec.of(&WidgetId::neontron("Kaleidoscope")).is_none());
        assert!(spec.of(&WidgetId::new("other-crate", "Button")).is_none());
    }

    #[test]
    fn button_resolves_its_neon_fill_in_both_modes() {
        // Button: corner_radius 6, fg_color ("#00D1D1", "#00D1D1").
        let spec = ThemeSpec::neon_tron();
        let style = spec.of(&WidgetId::neontron("Button")).unwrap();

        let radius = style.get(CornerRadius).unwrap();
        assert_eq!(radius.resolve(Mode::Dark).as_f32(), Some(6.0));
        assert_eq!(radius.resolve(Mode::Light).as_f32(), Some(6.0));

        let fg = style.get(FgColor).unwrap();
        let neon = Color::from_rgb8(0x00, 0xd1, 0xd1);
        assert_eq!(fg.resolve(Mode::Dark).as_color(), Some(neon));
        assert_eq!(fg.resolve(Mode::Light).as_color(), Some(neon));
    }

    #[test]
    fn label_fill_is_transparent_in_both_modes() {
        let spec = ThemeSpec::neon_tron();
        let style = spec.of(&WidgetId::neontron("Label")).unwrap();
        let fg = style.get(FgColor).unwrap();
        assert_eq!(fg.resolve(Mode::Light).as_color(), Some(Color::TRANSPARENT));
        assert_eq!(fg.resolve(Mode::Dark).as_color(), Some(Color::TRANSPARENT));
    }
}
