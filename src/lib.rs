#![warn(missing_docs)]

//! NeonTron, a themed widget gallery with light and dark appearance modes.

pub use peniko as color;

pub use neontron_theme as theme;
pub use neontron_widgets as widgets;

/// A "prelude" for users of the NeonTron crates.
///
/// Importing this module brings into scope the most common types
/// needed to theme and build a widget gallery.
///
/// ```rust
/// use neontron::prelude::*;
/// ```
pub mod prelude {
    pub use crate::theme::config::ThemeConfig;
    pub use crate::theme::error::{ConfigureError, ThemeError, ThemeResult};
    pub use crate::theme::id::WidgetId;
    pub use crate::theme::loader::ThemeLoader;
    pub use crate::theme::manager::ThemeManager;
    pub use crate::theme::mode::Mode;
    pub use crate::theme::properties::StyleProperty;
    pub use crate::theme::registry::{WidgetHandle, WidgetRef, WidgetRegistry};
    pub use crate::theme::spec::ThemeSpec;
    pub use crate::theme::style::{Style, StyleEntry, StyleVal};
    pub use crate::theme::widget::Configurable;

    // Color
    pub use peniko::Color;

    // Widgets
    pub use crate::widgets::button::Button;
    pub use crate::widgets::checkbox::CheckBox;
    pub use crate::widgets::combo_box::ComboBox;
    pub use crate::widgets::entry::Entry;
    pub use crate::widgets::frame::Frame;
    pub use crate::widgets::label::Label;
    pub use crate::widgets::option_menu::OptionMenu;
    pub use crate::widgets::progress::ProgressBar;
    pub use crate::widgets::radio_button::RadioButton;
    pub use crate::widgets::scrollbar::Scrollbar;
    pub use crate::widgets::segmented_button::SegmentedButton;
    pub use crate::widgets::slider::Slider;
    pub use crate::widgets::switch::Switch;
    pub use crate::widgets::textbox::TextBox;
    pub use crate::widgets::window::Window;
}
