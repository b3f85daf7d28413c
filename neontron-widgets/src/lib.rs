#![warn(missing_docs)]

//! Widget library for the NeonTron showcase => See the `neontron` crate.
//!
//! Every widget here owns two things: its demo state (text, checked,
//! value, …) and the style values the theme applier has pushed onto it.
//! Widgets implement [neontron_theme::widget::Configurable], accepting
//! exactly the properties they support; rendering is left to the
//! presentation layer, which reads the style state back out.

/// Contains the [button::Button] widget.
pub mod button;

/// Contains the [checkbox::CheckBox] widget.
pub mod checkbox;

/// Contains the [combo_box::ComboBox] widget.
pub mod combo_box;

/// Contains the [entry::Entry] widget.
pub mod entry;

/// Contains the [frame::Frame] widget.
pub mod frame;

/// Contains the [label::Label] widget.
pub mod label;

/// Contains the [option_menu::OptionMenu] widget.
pub mod option_menu;

/// Contains the [progress::ProgressBar] widget.
pub mod progress;

/// Contains the [radio_button::RadioButton] widget.
pub mod radio_button;

/// Contains the [scrollbar::Scrollbar] widget.
pub mod scrollbar;

/// Contains the [segmented_button::SegmentedButton] widget.
pub mod segmented_button;

/// Contains the [slider::Slider] widget.
pub mod slider;

/// Contains the [switch::Switch] widget.
pub mod switch;

/// Contains the [textbox::TextBox] widget.
pub mod textbox;

/// Contains the [window::Window] widget.
pub mod window;

mod helpers;
