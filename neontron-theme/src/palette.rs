//! Color tables for the built-in NeonTron theme.
//!
//! One palette per appearance mode. The built-in [crate::spec::ThemeSpec]
//! pairs the light and dark fields into mode-dependent style entries.

use peniko::Color;

/// The color table of one NeonTron appearance mode.
#[derive(Debug, Clone)]
pub struct NeonPalette {
    /// Window background.
    pub window: Color,
    /// Frame fill.
    pub surface: Color,
    /// Fill of a frame nested inside another frame.
    pub surface_top: Color,
    /// Frame border.
    pub surface_border: Color,
    /// Core neon accent, used for button fills.
    pub accent: Color,
    /// Accent while hovered.
    pub accent_hover: Color,
    /// Accent of a selected button.
    pub accent_selected: Color,
    /// Accent of an active switch track.
    pub accent_active: Color,
    /// Deep teal used for disabled accent text.
    pub accent_deep: Color,
    /// Near-black ink for text on accent fills.
    pub ink: Color,
    /// Label and control caption text.
    pub text: Color,
    /// Caption text while disabled.
    pub text_disabled: Color,
    /// Entry/combo field fill.
    pub field: Color,
    /// Entry/combo field text.
    pub field_text: Color,
    /// Entry/combo field border.
    pub field_border: Color,
    /// Placeholder text in an empty entry.
    pub placeholder: Color,
    /// Fill of checkboxes, radio dots, progress fills and slider grabs.
    pub control: Color,
    /// Control fill while hovered.
    pub control_hover: Color,
    /// Control border.
    pub control_border: Color,
    /// Checkbox checkmark.
    pub checkmark: Color,
    /// Unfilled part of progress/slider/switch tracks.
    pub track: Color,
    /// Switch grab button.
    pub thumb: Color,
    /// Switch grab button while hovered.
    pub thumb_hover: Color,
    /// Disabled button fill.
    pub disabled_fill: Color,
    /// Option-menu fill.
    pub menu: Color,
    /// Option-menu/combo drop-down button.
    pub menu_button: Color,
    /// Drop-down button while hovered.
    pub menu_button_hover: Color,
    /// Option-menu text.
    pub menu_text: Color,
    /// Unselected segmented-button fill.
    pub panel: Color,
    /// Unselected segmented-button fill while hovered.
    pub panel_hover: Color,
    /// Embedded scrollbar button.
    pub scrollbar_button: Color,
    /// Embedded scrollbar button while hovered.
    pub scrollbar_button_hover: Color,
    /// Text box fill.
    pub textbox: Color,
}

impl NeonPalette {
    /// Palette of the light appearance: neutral greys with cyan accents.
    pub fn light() -> Self {
        Self {
            window: Color::from_rgb8(0xea, 0xea, 0xea),
            surface: Color::from_rgb8(0xdc, 0xdc, 0xdc),
            surface_top: Color::from_rgb8(0xc8, 0xc8, 0xc8),
            surface_border: Color::from_rgb8(0xb0, 0xb0, 0xb0),
            accent: Color::from_rgb8(0x00, 0xd1, 0xd1),
            accent_hover: Color::from_rgb8(0x00, 0xa0, 0xa0),
            accent_selected: Color::from_rgb8(0x00, 0xc6, 0xc7),
            accent_active: Color::from_rgb8(0x00, 0xc6, 0xc7),
            accent_deep: Color::from_rgb8(0x00, 0x70, 0x80),
            ink: Color::from_rgb8(0x00, 0x10, 0x10),
            text: Color::from_rgb8(0x42, 0x42, 0x42),
            text_disabled: Color::from_rgb8(0xbd, 0xbd, 0xbd),
            field: Color::from_rgb8(0xff, 0xff, 0xff),
            field_text: Color::from_rgb8(0x33, 0x33, 0x33),
            field_border: Color::from_rgb8(0xb0, 0xb0, 0xb0),
            placeholder: Color::from_rgb8(0x9e, 0x9e, 0x9e),
            control: Color::from_rgb8(0x75, 0x75, 0x75),
            control_hover: Color::from_rgb8(0x8a, 0x8a, 0x8a),
            control_border: Color::from_rgb8(0xbd, 0xbd, 0xbd),
            checkmark: Color::from_rgb8(0xff, 0xff, 0xff),
            track: Color::from_rgb8(0xd0, 0xd0, 0xd0),
            thumb: Color::from_rgb8(0xbd, 0xbd, 0xbd),
            thumb_hover: Color::from_rgb8(0xad, 0xad, 0xad),
            disabled_fill: Color::from_rgb8(0xa0, 0xe0, 0xe8),
            menu: Color::from_rgb8(0xc8, 0xc8, 0xc8),
            menu_button: Color::from_rgb8(0xbd, 0xbd, 0xbd),
            menu_button_hover: Color::from_rgb8(0xad, 0xad, 0xad),
            menu_text: Color::from_rgb8(0x33, 0x33, 0x33),
            panel: Color::from_rgb8(0xdc, 0xdc, 0xdc),
            panel_hover: Color::from_rgb8(0xc8, 0xc8, 0xc8),
            scrollbar_button: Color::from_rgb8(0xbd, 0xbd, 0xbd),
            scrollbar_button_hover: Color::from_rgb8(0xad, 0xad, 0xad),
            textbox: Color::from_rgb8(0xff, 0xff, 0xff),
        }
    }

    /// Palette of the dark appearance: near-black surfaces, neon cyan.
    pub fn dark() -> Self {
        Self {
            window: Color::from_rgb8(0x00, 0x00, 0x00),
            surface: Color::from_rgb8(0x0a, 0x0a, 0x0a),
            surface_top: Color::from_rgb8(0x05, 0x05, 0x05),
            surface_border: Color::from_rgb8(0x00, 0x70, 0x80),
            accent: Color::from_rgb8(0x00, 0xd1, 0xd1),
            accent_hover: Color::from_rgb8(0x00, 0xa0, 0xa0),
            accent_selected: Color::from_rgb8(0x00, 0xa0, 0xa0),
            accent_active: Color::from_rgb8(0x00, 0xd1, 0xd1),
            accent_deep: Color::from_rgb8(0x00, 0x70, 0x80),
            ink: Color::from_rgb8(0x00, 0x10, 0x10),
            text: Color::from_rgb8(0x00, 0xd1, 0xd1),
            text_disabled: Color::from_rgb8(0x00, 0x70, 0x80),
            field: Color::from_rgb8(0x1a, 0x1a, 0x1a),
            field_text: Color::from_rgb8(0xe0, 0xe0, 0xe0),
            field_border: Color::from_rgb8(0x00, 0xd1, 0xd1),
            placeholder: Color::from_rgb8(0x00, 0xa0, 0xa0),
            control: Color::from_rgb8(0x00, 0xd1, 0xd1),
            control_hover: Color::from_rgb8(0x00, 0xa0, 0xa0),
            control_border: Color::from_rgb8(0x00, 0xa0, 0xa0),
            checkmark: Color::from_rgb8(0x00, 0x10, 0x10),
            track: Color::from_rgb8(0x50, 0x50, 0x50),
            thumb: Color::from_rgb8(0xa0, 0xd8, 0xe0),
            thumb_hover: Color::from_rgb8(0x00, 0xa0, 0xa0),
            disabled_fill: Color::from_rgb8(0x00, 0x40, 0x4a),
            menu: Color::from_rgb8(0x00, 0xd1, 0xd1),
            menu_button: Color::from_rgb8(0x00, 0xa0, 0xa0),
            menu_button_hover: Color::from_rgb8(0x00, 0x70, 0x80),
            menu_text: Color::from_rgb8(0x00, 0x10, 0x10),
            panel: Color::from_rgb8(0x1a, 0x1a, 0x1a),
            panel_hover: Color::from_rgb8(0x2a, 0x2a, 0x2a),
            scrollbar_button: Color::from_rgb8(0x50, 0x50, 0x50),
            scrollbar_button_hover: Color::from_rgb8(0x00, 0xa0, 0xa0),
            textbox: Color::from_rgb8(0x0a, 0x0a, 0x0a),
        }
    }
}
