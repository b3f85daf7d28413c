//! Applies the built-in NeonTron theme to live widgets through the
//! registry, the way the showcase does at startup and on mode toggles.

use std::cell::RefCell;
use std::rc::Rc;

use neontron_theme::manager::ThemeManager;
use neontron_theme::mode::Mode;
use neontron_theme::registry::WidgetRegistry;
use neontron_theme::spec::ThemeSpec;
use neontron_widgets::button::Button;
use neontron_widgets::checkbox::CheckBox;
use neontron_widgets::combo_box::ComboBox;
use neontron_widgets::entry::Entry;
use neontron_widgets::frame::Frame;
use neontron_widgets::label::Label;
use neontron_widgets::option_menu::OptionMenu;
use neontron_widgets::progress::ProgressBar;
use neontron_widgets::radio_button::RadioButton;
use neontron_widgets::scrollbar::Scrollbar;
use neontron_widgets::segmented_button::SegmentedButton;
use neontron_widgets::slider::Slider;
use neontron_widgets::switch::Switch;
use neontron_widgets::textbox::TextBox;
use neontron_widgets::window::Window;
use peniko::Color;

const NEON: Color = Color::from_rgb8(0x00, 0xd1, 0xd1);

#[test]
fn dark_startup_styles_every_widget_type() {
    let manager = ThemeManager::new(ThemeSpec::neon_tron(), Mode::Dark);
    let mut registry = WidgetRegistry::new();

    let window = Rc::new(RefCell::new(Window::new("NeonTron Theme Showcase")));
    let frame = Rc::new(RefCell::new(Frame::new()));
    let button = Rc::new(RefCell::new(Button::new("Primary Action")));
    let label = Rc::new(RefCell::new(Label::new("Styled label")));
    let entry = Rc::new(RefCell::new(Entry::new().with_placeholder("Type here...")));
    let checkbox = Rc::new(RefCell::new(CheckBox::new("Enable feature")));
    let switch = Rc::new(RefCell::new(Switch::new("Dark Mode").with_on(true)));
    let radio = Rc::new(RefCell::new(RadioButton::new("Option 1", 1)));
    let progress = Rc::new(RefCell::new(ProgressBar::new(0.6)));
    let slider = Rc::new(RefCell::new(Slider::new(0.0, 100.0, 25.0)));
    let option_menu = Rc::new(RefCell::new(OptionMenu::new(["Menu 1", "Menu 2"])));
    let combo = Rc::new(RefCell::new(ComboBox::new(["Choice 1", "Choice 2"])));
    let scrollbar = Rc::new(RefCell::new(Scrollbar::new()));
    let segmented = Rc::new(RefCell::new(SegmentedButton::new(["Tab 1", "Tab 2"])));
    let textbox = Rc::new(RefCell::new(TextBox::new().with_read_only(true)));

    registry.register(window.clone());
    registry.register(frame.clone());
    registry.register(button.clone());
    registry.register(label.clone());
    registry.register(entry.clone());
    registry.register(checkbox.clone());
    registry.register(switch.clone());
    registry.register(radio.clone());
    registry.register(progress.clone());
    registry.register(slider.clone());
    registry.register(option_menu.clone());
    registry.register(combo.clone());
    registry.register(scrollbar.clone());
    registry.register(segmented.clone());
    registry.register(textbox.clone());

    manager.apply_to_all(&registry);

    assert_eq!(
        window.borrow().style().fg_color,
        Some(Color::from_rgb8(0x00, 0x00, 0x00))
    );
    assert_eq!(
        frame.borrow().style().fg_color,
        Some(Color::from_rgb8(0x0a, 0x0a, 0x0a))
    );
    assert_eq!(button.borrow().style().fg_color, Some(NEON));
    assert_eq!(button.borrow().style().corner_radius, 6.0);
    assert_eq!(label.borrow().style().fg_color, Some(Color::TRANSPARENT));
    assert_eq!(label.borrow().style().text_color, Some(NEON));
    assert_eq!(entry.borrow().style().border_color, Some(NEON));
    assert_eq!(
        checkbox.borrow().style().checkmark_color,
        Some(Color::from_rgb8(0x00, 0x10, 0x10))
    );
    assert_eq!(switch.borrow().style().progress_color, Some(NEON));
    assert_eq!(radio.borrow().style().border_width_checked, 6.0);
    assert_eq!(radio.borrow().style().border_width_unchecked, 2.0);
    assert_eq!(
        progress.borrow().style().fg_color,
        Some(Color::from_rgb8(0x50, 0x50, 0x50))
    );
    assert_eq!(progress.borrow().style().progress_color, Some(NEON));
    assert_eq!(slider.borrow().style().button_color, Some(NEON));
    assert_eq!(option_menu.borrow().style().fg_color, Some(NEON));
    assert_eq!(
        combo.borrow().style().fg_color,
        Some(Color::from_rgb8(0x1a, 0x1a, 0x1a))
    );
    assert_eq!(
        scrollbar.borrow().style().fg_color,
        Some(Color::TRANSPARENT)
    );
    assert_eq!(scrollbar.borrow().style().border_spacing, 4.0);
    assert_eq!(segmented.borrow().style().selected_color, Some(NEON));
    assert_eq!(
        segmented.borrow().style().unselected_color,
        Some(Color::from_rgb8(0x1a, 0x1a, 0x1a))
    );
    assert_eq!(
        textbox.borrow().style().scrollbar_button_color,
        Some(Color::from_rgb8(0x50, 0x50, 0x50))
    );
}

#[test]
fn toggling_to_light_restyles_registered_widgets() {
    let mut manager = ThemeManager::new(ThemeSpec::neon_tron(), Mode::Dark);
    let mut registry = WidgetRegistry::new();

    let label = Rc::new(RefCell::new(Label::new("Current mode: Dark")));
    let entry = Rc::new(RefCell::new(Entry::new()));
    registry.register(label.clone());
    registry.register(entry.clone());

    manager.apply_to_all(&registry);
    assert_eq!(label.borrow().style().text_color, Some(NEON));
    assert_eq!(
        entry.borrow().style().fg_color,
        Some(Color::from_rgb8(0x1a, 0x1a, 0x1a))
    );

    assert_eq!(manager.toggle_mode(), Mode::Light);
    manager.apply_to_all(&registry);

    assert_eq!(
        label.borrow().style().text_color,
        Some(Color::from_rgb8(0x42, 0x42, 0x42))
    );
    assert_eq!(
        entry.borrow().style().fg_color,
        Some(Color::from_rgb8(0xff, 0xff, 0xff))
    );
}

#[test]
fn theme_application_overwrites_custom_button_fills() {
    // The showcase's status buttons start with their own fills and lose
    // them on the first full restyle.
    let manager = ThemeManager::new(ThemeSpec::neon_tron(), Mode::Dark);
    let mut registry = WidgetRegistry::new();

    let success = Rc::new(RefCell::new(
        Button::new("Success").with_fg_color(Color::from_rgb8(0x2e, 0xcc, 0x71)),
    ));
    registry.register(success.clone());
    assert_eq!(
        success.borrow().style().fg_color,
        Some(Color::from_rgb8(0x2e, 0xcc, 0x71))
    );

    manager.apply_to_all(&registry);
    assert_eq!(success.borrow().style().fg_color, Some(NEON));
}

#[test]
fn repeated_application_is_idempotent() {
    let manager = ThemeManager::new(ThemeSpec::neon_tron(), Mode::Dark);
    let mut registry = WidgetRegistry::new();

    let button = Rc::new(RefCell::new(Button::new("Primary Action")));
    registry.register(button.clone());

    manager.apply_to_all(&registry);
    let first = button.borrow().style().clone();
    manager.apply_to_all(&registry);
    manager.apply_to_all(&registry);
    assert_eq!(*button.borrow().style(), first);
}
